use std::borrow::Cow;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::constants::{in_ranges, CodePointRange, KHMER_RANGES, LATIN_RANGES};
use crate::error::{Result, ScriptError};

/// The range tables a classifier consults.
///
/// `DEFAULT` borrows the built-in constants. Extending a table copies it on first write.
///
/// JSON form:
/// `{"khmer": [{"start": 6016, "end": 6143}], "latin": [{"start": 0, "end": 127}]}`.
/// A missing key falls back to the built-in table for that script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptTables {
    #[serde(default = "default_khmer")]
    pub khmer: Cow<'static, [CodePointRange]>,
    #[serde(default = "default_latin")]
    pub latin: Cow<'static, [CodePointRange]>,
}

fn default_khmer() -> Cow<'static, [CodePointRange]> {
    Cow::Borrowed(KHMER_RANGES)
}

fn default_latin() -> Cow<'static, [CodePointRange]> {
    Cow::Borrowed(LATIN_RANGES)
}

impl Default for ScriptTables {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl ScriptTables {
    pub const DEFAULT: ScriptTables = ScriptTables {
        khmer: Cow::Borrowed(KHMER_RANGES),
        latin: Cow::Borrowed(LATIN_RANGES),
    };

    pub fn with_khmer_range(mut self, range: CodePointRange) -> Self {
        self.khmer.to_mut().push(range);
        self
    }

    pub fn with_latin_range(mut self, range: CodePointRange) -> Self {
        self.latin.to_mut().push(range);
        self
    }

    #[inline]
    pub fn is_khmer(&self, code_point: u32) -> bool {
        in_ranges(code_point, &self.khmer)
    }

    #[inline]
    pub fn is_latin(&self, code_point: u32) -> bool {
        in_ranges(code_point, &self.latin)
    }

    /// Rejects ranges whose start lies after their end.
    pub fn validate(&self) -> Result<()> {
        for range in self.khmer.iter().chain(self.latin.iter()) {
            if range.start > range.end {
                return Err(ScriptError::InvalidRange {
                    start: range.start,
                    end: range.end,
                });
            }
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let tables: ScriptTables = serde_json::from_str(json)?;
        tables.validate()?;
        debug!(
            "Loaded range tables: {} khmer, {} latin",
            tables.khmer.len(),
            tables.latin.len()
        );
        Ok(tables)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let tables: ScriptTables = serde_json::from_reader(BufReader::new(file))?;
        tables.validate()?;
        debug!(
            "Loaded range tables from {}: {} khmer, {} latin",
            path.display(),
            tables.khmer.len(),
            tables.latin.len()
        );
        Ok(tables)
    }
}
