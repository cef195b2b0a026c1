//! Permitted sentence-shape table
//!
//! Each entry is an ordered part-of-speech tag sequence with a display
//! label. The table is data: growing grammar coverage means adding entries
//! here, never touching the matcher.

use std::sync::LazyLock;

/// One permitted sentence shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternEntry {
    /// Ordered tag sequence, matched exactly
    pub tags: Vec<String>,
    /// Rule label reported on acceptance
    pub label: String,
}

impl PatternEntry {
    /// Entry from literal tag and label strings
    pub fn new(tags: &[&str], label: &str) -> Self {
        Self {
            tags: tags.iter().map(|t| t.to_string()).collect(),
            label: label.to_string(),
        }
    }
}

/// Built-in sentence shapes
///
/// Tags are literal entries: VB and VBZ are distinct shapes, not one
/// "verb" class.
static BUILTIN_PATTERNS: LazyLock<Vec<PatternEntry>> = LazyLock::new(|| {
    vec![
        PatternEntry::new(&["PRP", "VB"], "Subject + Verb"),
        PatternEntry::new(&["PRP", "VBZ"], "Subject + Verb (3rd person singular)"),
        PatternEntry::new(&["PRP", "VB", "NN"], "Subject + Verb + Object"),
        PatternEntry::new(&["PRP", "VB", "NNS"], "Subject + Verb + Object (plural)"),
        PatternEntry::new(
            &["PRP", "VBZ", "NN"],
            "Subject + Verb + Object (3rd person singular)",
        ),
        PatternEntry::new(
            &["PRP", "VBZ", "NNS"],
            "Subject + Verb + Object (3rd person singular, plural)",
        ),
        PatternEntry::new(&["PRP", "VBZ", "JJ"], "Subject + Verb + Complement"),
        PatternEntry::new(&["DT", "NN", "VBZ", "RB"], "Article + Noun + Verb + Adverb"),
        PatternEntry::new(&["PRP", "MD", "VB"], "Subject + Modal + Verb"),
    ]
});

/// Lookup table of permitted sentence shapes
#[derive(Debug, Clone)]
pub struct PatternTable {
    entries: Vec<PatternEntry>,
}

impl PatternTable {
    /// Table with the built-in shapes
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_PATTERNS.clone(),
        }
    }

    /// Table from caller-supplied shapes
    pub fn from_entries(entries: Vec<PatternEntry>) -> Self {
        Self { entries }
    }

    /// Label of the entry whose tag sequence equals `tags` exactly
    pub fn find(&self, tags: &[String]) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.tags.as_slice() == tags)
            .map(|entry| entry.label.as_str())
    }

    /// Number of shapes in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no shapes
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for PatternTable {
    fn default() -> Self {
        Self::builtin()
    }
}
