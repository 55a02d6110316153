use fxhash::FxHashMap;

use crate::script::ScriptTag;
use crate::segmenter::{ClassifiedRun, SegmentedText};

/// Maps script tags to caller-defined styles, with a fallback for `Other`
/// and for any tag left unmapped. `S` is opaque here (a font name, a colour,
/// a terminal attribute...).
#[derive(Debug, Clone)]
pub struct StyleMap<S> {
    styles: FxHashMap<ScriptTag, S>,
    fallback: S,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyledRun<'a, S> {
    pub run: &'a ClassifiedRun,
    pub style: &'a S,
}

impl<S> StyleMap<S> {
    pub fn new(fallback: S) -> Self {
        StyleMap {
            styles: FxHashMap::default(),
            fallback,
        }
    }

    /// `Other` always resolves to the fallback, so styles registered for it are ignored.
    pub fn with_style(mut self, tag: ScriptTag, style: S) -> Self {
        if tag != ScriptTag::Other {
            self.styles.insert(tag, style);
        }
        self
    }

    pub fn fallback(&self) -> &S {
        &self.fallback
    }

    pub fn resolve(&self, tag: ScriptTag) -> &S {
        self.styles.get(&tag).unwrap_or(&self.fallback)
    }

    pub fn apply<'a>(&'a self, text: &'a SegmentedText) -> Vec<StyledRun<'a, S>> {
        text.runs()
            .iter()
            .map(|run| StyledRun {
                run,
                style: self.resolve(run.tag()),
            })
            .collect()
    }
}
