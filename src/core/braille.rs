//! English character -> Braille cell mapping and transliteration

use std::collections::HashMap;

/// Placeholder cell for characters without a mapping
pub const UNKNOWN_CELL: &str = "?";

/// Base Braille cell for a single character
/// Covers lowercase a-z, space, and sentence punctuation; anything else
/// (digits, uppercase, other symbols) returns None
pub fn base_cell(c: char) -> Option<&'static str> {
    match c {
        'a' => Some("\u{2801}"), // ⠁
        'b' => Some("\u{2803}"), // ⠃
        'c' => Some("\u{2809}"), // ⠉
        'd' => Some("\u{2819}"), // ⠙
        'e' => Some("\u{2811}"), // ⠑
        'f' => Some("\u{280b}"), // ⠋
        'g' => Some("\u{281b}"), // ⠛
        'h' => Some("\u{2813}"), // ⠓
        'i' => Some("\u{280a}"), // ⠊
        'j' => Some("\u{281a}"), // ⠚
        'k' => Some("\u{2805}"), // ⠅
        'l' => Some("\u{2807}"), // ⠇
        'm' => Some("\u{280d}"), // ⠍
        'n' => Some("\u{281d}"), // ⠝
        'o' => Some("\u{2815}"), // ⠕
        'p' => Some("\u{280f}"), // ⠏
        'q' => Some("\u{281f}"), // ⠟
        'r' => Some("\u{2817}"), // ⠗
        's' => Some("\u{280e}"), // ⠎
        't' => Some("\u{281e}"), // ⠞
        'u' => Some("\u{2825}"), // ⠥
        'v' => Some("\u{2827}"), // ⠧
        'w' => Some("\u{283a}"), // ⠺
        'x' => Some("\u{282d}"), // ⠭
        'y' => Some("\u{283d}"), // ⠽
        'z' => Some("\u{2835}"), // ⠵

        // Source spaces render as a wide gap of literal spaces
        ' ' => Some("   "),

        ',' => Some("\u{2802}"),  // ⠂
        '.' => Some("\u{2832}"),  // ⠲
        '?' => Some("\u{2826}"),  // ⠦
        '!' => Some("\u{2816}"),  // ⠖
        '\'' => Some("\u{2804}"), // ⠄
        '-' => Some("\u{2824}"),  // ⠤
        ':' => Some("\u{2812}"),  // ⠒
        ';' => Some("\u{2806}"),  // ⠆
        // Both parentheses share one cell in this table
        '(' | ')' => Some("\u{2836}"), // ⠶

        _ => None,
    }
}

/// Braille transliteration map: the base cell table plus an optional
/// extension layer for characters the base table leaves out (digits,
/// contractions). The extension layer wins on overlap.
#[derive(Debug, Clone, Default)]
pub struct BrailleMap {
    extra: HashMap<char, String>,
}

impl BrailleMap {
    /// Map with the base table only
    pub fn new() -> Self {
        Self {
            extra: HashMap::new(),
        }
    }

    /// Layer extra character mappings over the base table
    pub fn with_extra(mut self, extra: HashMap<char, String>) -> Self {
        self.extra = extra;
        self
    }

    /// Add a single extension mapping
    pub fn insert(&mut self, c: char, cell: impl Into<String>) {
        self.extra.insert(c, cell.into());
    }

    /// Cell for one character: extension layer first, then the base table,
    /// then the unknown-character placeholder
    pub fn cell(&self, c: char) -> &str {
        if let Some(cell) = self.extra.get(&c) {
            return cell;
        }
        base_cell(c).unwrap_or(UNKNOWN_CELL)
    }

    /// Character-for-character transliteration, cells joined with no separator
    pub fn transliterate(&self, text: &str) -> String {
        text.chars().map(|c| self.cell(c)).collect()
    }

    /// Word-level transliteration: split on whitespace, transliterate each
    /// word, rejoin with single spaces
    pub fn transliterate_words(&self, text: &str) -> String {
        text.split_whitespace()
            .map(|word| self.transliterate(word))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
