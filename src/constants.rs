use serde::{Deserialize, Serialize};

/// Inclusive interval of Unicode scalar values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CodePointRange {
    pub start: u32,
    pub end: u32,
}

impl CodePointRange {
    pub const fn new(start: u32, end: u32) -> Self {
        CodePointRange { start, end }
    }

    #[inline]
    pub const fn contains(&self, code_point: u32) -> bool {
        code_point >= self.start && code_point <= self.end
    }
}

// Khmer Unicode Ranges
pub const KHMER_START: u32 = 0x1780;
pub const KHMER_END: u32 = 0x17FF;
pub const KHMER_SYMBOLS_START: u32 = 0x19E0;
pub const KHMER_SYMBOLS_END: u32 = 0x19FF;

pub const KHMER_MAIN: CodePointRange = CodePointRange::new(KHMER_START, KHMER_END);
pub const KHMER_SYMBOLS: CodePointRange = CodePointRange::new(KHMER_SYMBOLS_START, KHMER_SYMBOLS_END);

// Latin blocks
pub const BASIC_LATIN: CodePointRange = CodePointRange::new(0x0000, 0x007F);
pub const LATIN_1_SUPPLEMENT: CodePointRange = CodePointRange::new(0x0080, 0x00FF);
pub const LATIN_EXTENDED_A: CodePointRange = CodePointRange::new(0x0100, 0x017F);
pub const LATIN_EXTENDED_B: CodePointRange = CodePointRange::new(0x0180, 0x024F);

pub const KHMER_RANGES: &[CodePointRange] = &[KHMER_MAIN, KHMER_SYMBOLS];

pub const LATIN_RANGES: &[CodePointRange] = &[
    BASIC_LATIN,
    LATIN_1_SUPPLEMENT,
    LATIN_EXTENDED_A,
    LATIN_EXTENDED_B,
];

#[inline]
pub fn in_ranges(code_point: u32, ranges: &[CodePointRange]) -> bool {
    ranges.iter().any(|r| r.contains(code_point))
}

pub fn is_khmer(code_point: u32) -> bool {
    in_ranges(code_point, KHMER_RANGES)
}

pub fn is_latin(code_point: u32) -> bool {
    in_ranges(code_point, LATIN_RANGES)
}

pub fn is_khmer_char(c: char) -> bool {
    is_khmer(c as u32)
}

pub fn is_latin_char(c: char) -> bool {
    is_latin(c as u32)
}
