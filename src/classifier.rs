use serde::Serialize;

use crate::constants::{is_khmer, is_latin};
use crate::script::ScriptTag;
use crate::tables::ScriptTables;

/// Per-bucket character tallies for a whole string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScriptCounts {
    pub khmer: usize,
    pub latin: usize,
    pub other: usize,
}

impl ScriptCounts {
    pub fn total(&self) -> usize {
        self.khmer + self.latin + self.other
    }

    pub fn get(&self, tag: ScriptTag) -> usize {
        match tag {
            ScriptTag::Khmer => self.khmer,
            ScriptTag::Latin => self.latin,
            ScriptTag::Other => self.other,
            ScriptTag::Mixed => 0,
        }
    }

    fn record(&mut self, tag: ScriptTag) {
        match tag {
            ScriptTag::Khmer => self.khmer += 1,
            ScriptTag::Latin => self.latin += 1,
            _ => self.other += 1,
        }
    }

    /// The bucket strictly larger than both others, else `Mixed`.
    /// An empty tally is `Other`.
    pub fn dominant(&self) -> ScriptTag {
        if self.total() == 0 {
            return ScriptTag::Other;
        }
        let (k, l, o) = (self.khmer, self.latin, self.other);
        if k > l && k > o {
            ScriptTag::Khmer
        } else if l > k && l > o {
            ScriptTag::Latin
        } else if o > k && o > l {
            ScriptTag::Other
        } else {
            ScriptTag::Mixed
        }
    }
}

/// Classifies characters against a set of range tables.
#[derive(Debug, Clone, Default)]
pub struct ScriptClassifier {
    tables: ScriptTables,
}

impl ScriptClassifier {
    pub fn new(tables: ScriptTables) -> Self {
        ScriptClassifier { tables }
    }

    pub fn tables(&self) -> &ScriptTables {
        &self.tables
    }

    /// Khmer wins over Latin if a code point appears in both tables.
    #[inline]
    pub fn classify_char(&self, c: char) -> ScriptTag {
        let code = c as u32;
        if self.tables.is_khmer(code) {
            ScriptTag::Khmer
        } else if self.tables.is_latin(code) {
            ScriptTag::Latin
        } else {
            ScriptTag::Other
        }
    }

    /// Classifies the first character of `text`; empty text is `Other`.
    pub fn classify_first(&self, text: &str) -> ScriptTag {
        text.chars()
            .next()
            .map_or(ScriptTag::Other, |c| self.classify_char(c))
    }

    pub fn count_scripts(&self, text: &str) -> ScriptCounts {
        let mut counts = ScriptCounts::default();
        for c in text.chars() {
            counts.record(self.classify_char(c));
        }
        counts
    }

    pub fn analyze_dominant(&self, text: &str) -> ScriptTag {
        self.count_scripts(text).dominant()
    }

    pub fn contains(&self, text: &str, tag: ScriptTag) -> bool {
        text.chars().any(|c| self.classify_char(c) == tag)
    }

    /// Presence of both Khmer and Latin characters. Unrelated to `ScriptTag::Mixed`.
    pub fn contains_mixed(&self, text: &str) -> bool {
        let mut khmer = false;
        let mut latin = false;
        for c in text.chars() {
            match self.classify_char(c) {
                ScriptTag::Khmer => khmer = true,
                ScriptTag::Latin => latin = true,
                _ => {}
            }
            if khmer && latin {
                return true;
            }
        }
        false
    }
}

// Free functions over the built-in tables

pub fn classify_char(c: char) -> ScriptTag {
    let code = c as u32;
    if is_khmer(code) {
        ScriptTag::Khmer
    } else if is_latin(code) {
        ScriptTag::Latin
    } else {
        ScriptTag::Other
    }
}

pub fn classify_first(text: &str) -> ScriptTag {
    text.chars().next().map_or(ScriptTag::Other, classify_char)
}

pub fn count_scripts(text: &str) -> ScriptCounts {
    let mut counts = ScriptCounts::default();
    for c in text.chars() {
        counts.record(classify_char(c));
    }
    counts
}

pub fn analyze_dominant(text: &str) -> ScriptTag {
    count_scripts(text).dominant()
}

pub fn contains(text: &str, tag: ScriptTag) -> bool {
    text.chars().any(|c| classify_char(c) == tag)
}

pub fn contains_mixed(text: &str) -> bool {
    contains(text, ScriptTag::Khmer) && contains(text, ScriptTag::Latin)
}
