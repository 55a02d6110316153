//! Script-boundary segmentation for mixed Khmer/Latin text.
//!
//! Characters are classified by code-point range membership
//! ([`constants`], [`tables`]), whole strings can be analysed for a dominant
//! script ([`classifier`]), and [`segmenter`] cuts text into maximal runs of
//! one script with exact code-point indices. [`style`] is a small helper for
//! renderers that attach a style to each run.

pub mod classifier;
pub mod constants;
pub mod error;
pub mod script;
pub mod segmenter;
pub mod style;
pub mod tables;

pub use classifier::{ScriptClassifier, ScriptCounts};
pub use constants::CodePointRange;
pub use error::{Result, ScriptError};
pub use script::ScriptTag;
pub use segmenter::{ClassifiedRun, ScriptSegmenter, SegmentedText};
pub use style::{StyleMap, StyledRun};
pub use tables::ScriptTables;
