//! Script-run segmentation.
//!
//! A [`ScriptSegmenter`] walks a string once and cuts it wherever the script
//! tag of consecutive characters changes. Every index in this module is a
//! code-point (`char`) offset into the text that was segmented, and run end
//! indices are inclusive.

use std::fmt;

use fxhash::FxHashMap;
use rayon::prelude::*;
use serde::Serialize;

use crate::classifier::{ScriptClassifier, ScriptCounts};
use crate::script::ScriptTag;

/// A maximal stretch of text sharing one script tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ClassifiedRun {
    tag: ScriptTag,
    text: String,
    start_index: usize,
    end_index: usize,
}

impl ClassifiedRun {
    fn new(tag: ScriptTag, text: &str, start_index: usize, end_index: usize) -> Self {
        debug_assert!(start_index <= end_index);
        ClassifiedRun {
            tag,
            text: text.to_string(),
            start_index,
            end_index,
        }
    }

    pub fn tag(&self) -> ScriptTag {
        self.tag
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// Inclusive.
    pub fn end_index(&self) -> usize {
        self.end_index
    }

    /// Number of code points covered by the run.
    pub fn char_count(&self) -> usize {
        self.end_index - self.start_index + 1
    }
}

/// A source string together with its ordered script runs.
///
/// For output of [`ScriptSegmenter::segment`]:
/// - runs are ordered, contiguous and non-overlapping,
/// - concatenating run texts reproduces `source`,
/// - no two adjacent runs share a tag,
/// - empty source means zero runs.
///
/// Filtered results (see [`ScriptSegmenter::filter_by_tags`]) keep the run
/// indices of the text they were cut from, so those indices do not address
/// the filtered `source`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SegmentedText {
    source: String,
    runs: Vec<ClassifiedRun>,
}

impl SegmentedText {
    fn from_runs(runs: Vec<ClassifiedRun>) -> Self {
        let source = runs.iter().map(|r| r.text.as_str()).collect();
        SegmentedText { source, runs }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn runs(&self) -> &[ClassifiedRun] {
        &self.runs
    }

    pub fn into_runs(self) -> Vec<ClassifiedRun> {
        self.runs
    }

    /// Length of the source in code points.
    pub fn len(&self) -> usize {
        self.source.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn join(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    pub fn runs_with_tag(&self, tag: ScriptTag) -> impl Iterator<Item = &ClassifiedRun> + '_ {
        self.runs.iter().filter(move |r| r.tag == tag)
    }

    /// Tallies taken from run tags and run lengths, not from re-classifying the source.
    pub fn script_counts(&self) -> ScriptCounts {
        let mut counts = ScriptCounts::default();
        for run in &self.runs {
            let n = run.char_count();
            match run.tag {
                ScriptTag::Khmer => counts.khmer += n,
                ScriptTag::Latin => counts.latin += n,
                _ => counts.other += n,
            }
        }
        counts
    }

    pub fn dominant_script(&self) -> ScriptTag {
        self.script_counts().dominant()
    }

    pub fn boundary_count(&self) -> usize {
        self.runs.len().saturating_sub(1)
    }

    pub fn has_mixed_scripts(&self) -> bool {
        self.runs.iter().any(|r| r.tag == ScriptTag::Khmer)
            && self.runs.iter().any(|r| r.tag == ScriptTag::Latin)
    }

    /// Builds a new instance by passing every run's text through `f`.
    ///
    /// Tags are carried over without re-classification, so they stay accurate
    /// only if `f` preserves each run's script. Runs mapped to the empty
    /// string are dropped, neighbours left with equal tags are merged, and
    /// indices are recomputed against the new joined source.
    pub fn map_text<F>(&self, mut f: F) -> SegmentedText
    where
        F: FnMut(&str) -> String,
    {
        let mut runs: Vec<ClassifiedRun> = Vec::with_capacity(self.runs.len());
        let mut next = 0;

        for run in &self.runs {
            let text = f(&run.text);
            if text.is_empty() {
                continue;
            }
            let n = text.chars().count();
            match runs.last_mut() {
                Some(prev) if prev.tag == run.tag => {
                    prev.text.push_str(&text);
                    prev.end_index += n;
                }
                _ => runs.push(ClassifiedRun {
                    tag: run.tag,
                    text,
                    start_index: next,
                    end_index: next + n - 1,
                }),
            }
            next += n;
        }

        SegmentedText::from_runs(runs)
    }
}

impl fmt::Display for SegmentedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl<'a> IntoIterator for &'a SegmentedText {
    type Item = &'a ClassifiedRun;
    type IntoIter = std::slice::Iter<'a, ClassifiedRun>;

    fn into_iter(self) -> Self::IntoIter {
        self.runs.iter()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScriptSegmenter {
    classifier: ScriptClassifier,
}

impl ScriptSegmenter {
    pub fn new(classifier: ScriptClassifier) -> Self {
        ScriptSegmenter { classifier }
    }

    pub fn classifier(&self) -> &ScriptClassifier {
        &self.classifier
    }

    /// Single forward pass; a run closes only when the tag changes.
    pub fn segment(&self, text: &str) -> SegmentedText {
        let mut chars = text.char_indices().enumerate();
        let Some((_, (_, first))) = chars.next() else {
            return SegmentedText::default();
        };

        let mut runs = Vec::new();
        let mut current = self.classifier.classify_char(first);
        let mut start = 0;
        let mut start_byte = 0;
        let mut last = 0;

        for (i, (byte, c)) in chars {
            let tag = self.classifier.classify_char(c);
            if tag != current {
                runs.push(ClassifiedRun::new(current, &text[start_byte..byte], start, i - 1));
                start = i;
                start_byte = byte;
                current = tag;
            }
            last = i;
        }
        runs.push(ClassifiedRun::new(current, &text[start_byte..], start, last));

        SegmentedText {
            source: text.to_string(),
            runs,
        }
    }

    /// Segments independent inputs in parallel, preserving input order.
    pub fn segment_batch<S>(&self, texts: &[S]) -> Vec<SegmentedText>
    where
        S: AsRef<str> + Sync,
    {
        texts.par_iter().map(|t| self.segment(t.as_ref())).collect()
    }

    /// Keeps only runs tagged with one of `allowed`; the new source is their joined text.
    pub fn filter_by_tags(&self, text: &str, allowed: &[ScriptTag]) -> SegmentedText {
        let runs = self
            .segment(text)
            .into_runs()
            .into_iter()
            .filter(|r| allowed.contains(&r.tag))
            .collect();
        SegmentedText::from_runs(runs)
    }

    pub fn extract(&self, text: &str, tag: ScriptTag) -> SegmentedText {
        self.filter_by_tags(text, &[tag])
    }

    /// Always holds an entry for `Khmer`, `Latin` and `Other`, never for `Mixed`.
    pub fn group_by_tag(&self, text: &str) -> FxHashMap<ScriptTag, Vec<ClassifiedRun>> {
        let mut groups: FxHashMap<ScriptTag, Vec<ClassifiedRun>> = ScriptTag::RUN_TAGS
            .iter()
            .map(|&tag| (tag, Vec::new()))
            .collect();
        for run in self.segment(text).into_runs() {
            groups.entry(run.tag).or_default().push(run);
        }
        groups
    }

    pub fn count_boundaries(&self, text: &str) -> usize {
        self.segment(text).boundary_count()
    }

    pub fn has_mixed_scripts(&self, text: &str) -> bool {
        self.classifier.contains_mixed(text)
    }
}

// Free functions over the built-in tables

pub fn segment(text: &str) -> SegmentedText {
    ScriptSegmenter::default().segment(text)
}

pub fn segment_batch<S>(texts: &[S]) -> Vec<SegmentedText>
where
    S: AsRef<str> + Sync,
{
    ScriptSegmenter::default().segment_batch(texts)
}

pub fn filter_by_tags(text: &str, allowed: &[ScriptTag]) -> SegmentedText {
    ScriptSegmenter::default().filter_by_tags(text, allowed)
}

pub fn extract(text: &str, tag: ScriptTag) -> SegmentedText {
    ScriptSegmenter::default().extract(text, tag)
}

pub fn group_by_tag(text: &str) -> FxHashMap<ScriptTag, Vec<ClassifiedRun>> {
    ScriptSegmenter::default().group_by_tag(text)
}

pub fn count_boundaries(text: &str) -> usize {
    ScriptSegmenter::default().count_boundaries(text)
}

pub fn has_mixed_scripts(text: &str) -> bool {
    ScriptSegmenter::default().has_mixed_scripts(text)
}
