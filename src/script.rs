use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScriptError;

/// Script classification label.
///
/// `Mixed` is only produced by whole-string dominance analysis; single
/// characters and runs are always `Khmer`, `Latin` or `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptTag {
    Khmer,
    Latin,
    Other,
    Mixed,
}

impl ScriptTag {
    /// Tags that can be assigned to a character or a run.
    pub const RUN_TAGS: [ScriptTag; 3] = [ScriptTag::Khmer, ScriptTag::Latin, ScriptTag::Other];

    pub fn is_run_tag(self) -> bool {
        !matches!(self, ScriptTag::Mixed)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ScriptTag::Khmer => "khmer",
            ScriptTag::Latin => "latin",
            ScriptTag::Other => "other",
            ScriptTag::Mixed => "mixed",
        }
    }
}

impl fmt::Display for ScriptTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScriptTag {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "khmer" => Ok(ScriptTag::Khmer),
            "latin" => Ok(ScriptTag::Latin),
            "other" => Ok(ScriptTag::Other),
            "mixed" => Ok(ScriptTag::Mixed),
            _ => Err(ScriptError::UnknownTag(s.to_string())),
        }
    }
}
