//! Unit tests for script segmentation and the derived queries built on it.

use khmer_script_rs::classifier::{
    analyze_dominant, classify_char, classify_first, contains, contains_mixed, count_scripts,
};
use khmer_script_rs::constants::{KHMER_RANGES, LATIN_RANGES};
use khmer_script_rs::segmenter::{
    count_boundaries, extract, filter_by_tags, group_by_tag, has_mixed_scripts, segment,
    ScriptSegmenter,
};
use khmer_script_rs::{CodePointRange, ScriptClassifier, ScriptTables, ScriptTag};

#[test]
fn test_empty_string() {
    let result = segment("");
    assert!(result.runs().is_empty());
    assert!(result.is_empty());
    assert_eq!(result.len(), 0);
    assert_eq!(analyze_dominant(""), ScriptTag::Other);
    assert_eq!(count_boundaries(""), 0);
    assert!(!has_mixed_scripts(""));
}

#[test]
fn test_single_latin_run() {
    let result = segment("Hello");
    assert_eq!(result.runs().len(), 1);
    let run = &result.runs()[0];
    assert_eq!(run.tag(), ScriptTag::Latin);
    assert_eq!(run.text(), "Hello");
    assert_eq!((run.start_index(), run.end_index()), (0, 4));
    assert_eq!(run.char_count(), 5);
}

#[test]
fn test_latin_then_khmer() {
    let result = segment("ABកខ");
    let runs: Vec<_> = result
        .runs()
        .iter()
        .map(|r| (r.tag(), r.text(), r.start_index(), r.end_index()))
        .collect();
    assert_eq!(
        runs,
        vec![
            (ScriptTag::Latin, "AB", 0, 1),
            (ScriptTag::Khmer, "កខ", 2, 3),
        ]
    );
    assert_eq!(count_boundaries("ABកខ"), 1);
}

#[test]
fn test_ascii_punctuation_is_latin() {
    let result = segment("AAក!!AA");
    let tags: Vec<ScriptTag> = result.runs().iter().map(|r| r.tag()).collect();
    assert_eq!(tags, vec![ScriptTag::Latin, ScriptTag::Khmer, ScriptTag::Latin]);
    assert_eq!(result.runs()[2].text(), "!!AA");
    assert_eq!(count_boundaries("AAក!!AA"), 2);
}

#[test]
fn test_unclassifiable_text_is_one_other_run() {
    let result = segment("世界");
    assert_eq!(result.runs().len(), 1);
    assert_eq!(result.runs()[0].tag(), ScriptTag::Other);
    assert_eq!(analyze_dominant("世界"), ScriptTag::Other);
}

#[test]
fn test_indices_are_code_points() {
    let text = "Aé😀ក";
    let result = segment(text);
    let last = result.runs().last().unwrap();
    assert_eq!(last.text(), "ក");
    assert_eq!(last.start_index(), 3);
    assert_eq!(result.len(), 4);
}

#[test]
fn test_every_declared_code_point_classifies() {
    for range in KHMER_RANGES {
        for cp in range.start..=range.end {
            let c = char::from_u32(cp).unwrap();
            assert_eq!(classify_char(c), ScriptTag::Khmer, "U+{cp:04X}");
        }
    }
    for range in LATIN_RANGES {
        for cp in range.start..=range.end {
            let c = char::from_u32(cp).unwrap();
            assert_eq!(classify_char(c), ScriptTag::Latin, "U+{cp:04X}");
        }
    }
    for c in ['\u{0250}', '\u{0E01}', '\u{1800}', '\u{19DF}', '\u{1A00}', '中', '😀'] {
        assert_eq!(classify_char(c), ScriptTag::Other, "{c:?}");
    }
}

#[test]
fn test_classify_first() {
    assert_eq!(classify_first(""), ScriptTag::Other);
    assert_eq!(classify_first("កA"), ScriptTag::Khmer);
    assert_eq!(classify_first("Aក"), ScriptTag::Latin);
}

#[test]
fn test_dominant_script() {
    assert_eq!(analyze_dominant("Hello"), ScriptTag::Latin);
    assert_eq!(analyze_dominant("កខab"), ScriptTag::Mixed);
    assert_eq!(analyze_dominant("កខគ a"), ScriptTag::Khmer);
    assert_eq!(analyze_dominant("កខគa"), ScriptTag::Khmer);
    assert_eq!(analyze_dominant("ab中文字"), ScriptTag::Other);
    assert_eq!(analyze_dominant("aក中"), ScriptTag::Mixed);

    let counts = count_scripts("Hi ក中");
    assert_eq!((counts.khmer, counts.latin, counts.other), (1, 3, 1));
    assert_eq!(counts.total(), 5);
    assert_eq!(counts.get(ScriptTag::Latin), 3);
}

#[test]
fn test_contains() {
    assert!(contains("abc ក", ScriptTag::Khmer));
    assert!(!contains("abc", ScriptTag::Khmer));
    assert!(contains("abc中", ScriptTag::Other));
    assert!(!contains("abc", ScriptTag::Mixed));
    assert!(contains_mixed("Aក"));
    assert!(!contains_mixed("A中"));
    assert!(has_mixed_scripts("សួស្តី World"));
}

#[test]
fn test_extract_khmer() {
    let result = extract("AAកខAA", ScriptTag::Khmer);
    assert_eq!(result.source(), "កខ");
    assert_eq!(result.runs().len(), 1);
    // Indices still refer to the unfiltered input
    assert_eq!(result.runs()[0].start_index(), 2);
    assert_eq!(result.runs()[0].end_index(), 3);
}

#[test]
fn test_filter_by_tags_keeps_order() {
    let result = filter_by_tags("aក中bខ", &[ScriptTag::Latin, ScriptTag::Khmer]);
    assert_eq!(result.source(), "aកbខ");
    assert_eq!(result.join(), result.source());
    let starts: Vec<usize> = result.runs().iter().map(|r| r.start_index()).collect();
    assert_eq!(starts, vec![0, 1, 3, 4]);
}

#[test]
fn test_filter_with_no_match_is_empty() {
    let result = extract("Hello", ScriptTag::Khmer);
    assert!(result.is_empty());
    assert!(result.runs().is_empty());
}

#[test]
fn test_group_by_tag() {
    let groups = group_by_tag("aកb中c");
    assert_eq!(groups.len(), 3);
    assert!(!groups.contains_key(&ScriptTag::Mixed));
    let latin: Vec<&str> = groups[&ScriptTag::Latin].iter().map(|r| r.text()).collect();
    assert_eq!(latin, vec!["a", "b", "c"]);
    assert_eq!(groups[&ScriptTag::Khmer].len(), 1);
    assert_eq!(groups[&ScriptTag::Other].len(), 1);

    let empty = group_by_tag("");
    assert_eq!(empty.len(), 3);
    assert!(empty.values().all(|runs| runs.is_empty()));
}

#[test]
fn test_segmented_text_views() {
    let result = segment("Hi សួស្តី");
    assert_eq!(result.to_string(), "Hi សួស្តី");
    assert_eq!(result.boundary_count(), 1);
    assert!(result.has_mixed_scripts());
    assert_eq!(result.dominant_script(), ScriptTag::Khmer);
    assert_eq!(result.runs_with_tag(ScriptTag::Khmer).count(), 1);
    assert_eq!((&result).into_iter().count(), 2);
}

#[test]
fn test_map_text_rejoins_source() {
    let original = segment("hello សួស្តី");
    let mapped = original.map_text(|s| s.to_uppercase());
    assert_eq!(mapped.source(), "HELLO សួស្តី");
    assert_eq!(mapped.runs().len(), 2);
    assert_eq!(mapped.runs()[1].start_index(), 6);
    // Original is untouched
    assert_eq!(original.source(), "hello សួស្តី");
}

#[test]
fn test_map_text_drops_empty_runs_and_merges() {
    let original = segment("ab中cd");
    let mapped = original.map_text(|s| if s == "中" { String::new() } else { s.to_string() });
    assert_eq!(mapped.source(), "abcd");
    assert_eq!(mapped.runs().len(), 1);
    let run = &mapped.runs()[0];
    assert_eq!(run.tag(), ScriptTag::Latin);
    assert_eq!((run.start_index(), run.end_index()), (0, 3));
}

#[test]
fn test_map_text_keeps_tags_advisory() {
    // Replacing Khmer with Latin letters keeps the Khmer tag
    let mapped = segment("aក").map_text(|s| if s == "ក" { "k".to_string() } else { s.to_string() });
    assert_eq!(mapped.source(), "ak");
    assert_eq!(mapped.runs()[1].tag(), ScriptTag::Khmer);
    assert_eq!(segment(mapped.source()).runs().len(), 1);
}

#[test]
fn test_custom_tables_segmenter() {
    // Latin Extended Additional
    let tables = ScriptTables::default().with_latin_range(CodePointRange::new(0x1E00, 0x1EFF));
    let segmenter = ScriptSegmenter::new(ScriptClassifier::new(tables));

    let text = "Việt ភាសា";
    assert_eq!(segmenter.segment(text).runs().len(), 2);
    assert_eq!(segment(text).runs().len(), 4);
}

#[test]
fn test_serializes_runs() {
    let result = segment("Aក");
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["source"], "Aក");
    assert_eq!(json["runs"][1]["tag"], "khmer");
    assert_eq!(json["runs"][1]["start_index"], 1);
}
