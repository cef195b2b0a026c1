//! Reference vocabulary: corpus-derived word/tag index
//!
//! Loads a JSON index mapping each attested word form to the tags it was
//! seen under, and answers flat and tag-scoped membership queries.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;

/// Vocabulary load/lookup error
#[derive(Debug)]
pub enum LexiconError {
    /// File read failure
    Io(std::io::Error),
    /// JSON parse failure
    Parse(String),
    /// Index document shape error
    Format(String),
    /// Backing service unreachable
    Unavailable(String),
    /// Lookup input the vocabulary cannot answer for
    InvalidWord(String),
}

impl std::fmt::Display for LexiconError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LexiconError::Io(e) => write!(f, "lexicon read error: {}", e),
            LexiconError::Parse(s) => write!(f, "lexicon JSON parse error: {}", s),
            LexiconError::Format(s) => write!(f, "lexicon format error: {}", s),
            LexiconError::Unavailable(s) => write!(f, "vocabulary unavailable: {}", s),
            LexiconError::InvalidWord(s) => write!(f, "invalid lookup word: {}", s),
        }
    }
}

impl std::error::Error for LexiconError {}

impl From<std::io::Error> for LexiconError {
    fn from(e: std::io::Error) -> Self {
        LexiconError::Io(e)
    }
}

/// Read-only membership boundary the classifier queries
///
/// Implementations may be arbitrarily large behind the scenes; a lookup
/// must not require materializing the full word set.
pub trait Vocabulary {
    /// Whether the word form is attested at all
    fn contains(&self, word: &str) -> Result<bool, LexiconError>;

    /// Whether the word form is attested under the given tag
    ///
    /// Membership is (word, tag) pair presence in the index, not word
    /// presence alone: a word listed only as NN is not attested as VB.
    fn contains_with_tag(&self, word: &str, tag: &str) -> Result<bool, LexiconError>;
}

/// Corpus-derived index: word form -> tags it was attested under
///
/// # File format
/// ```json
/// {
///   "metadata": { "corpus": "brown" },
///   "words": { "he": ["PRP"], "runs": ["VBZ", "NNS"] }
/// }
/// ```
/// Tag lists are ordered most frequent first; the dictionary tagger relies
/// on that order.
#[derive(Debug, Clone, Default)]
pub struct TagLexicon {
    words: HashMap<String, Vec<String>>,
}

impl TagLexicon {
    /// Empty index
    pub fn new() -> Self {
        Self {
            words: HashMap::new(),
        }
    }

    /// Index with the built-in seed entries
    pub fn seed() -> Self {
        super::seed::SEED_LEXICON.clone()
    }

    /// Load an index from a JSON file
    pub fn load(path: &str) -> Result<Self, LexiconError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let value: serde_json::Value = serde_json::from_reader(reader)
            .map_err(|e| LexiconError::Parse(e.to_string()))?;

        Self::from_json_value(&value)
    }

    /// Load an index from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, LexiconError> {
        let value: serde_json::Value = serde_json::from_str(json_str)
            .map_err(|e| LexiconError::Parse(e.to_string()))?;

        Self::from_json_value(&value)
    }

    fn from_json_value(value: &serde_json::Value) -> Result<Self, LexiconError> {
        let words_obj = value
            .get("words")
            .and_then(|v| v.as_object())
            .ok_or_else(|| LexiconError::Format("missing words object".into()))?;

        let mut words = HashMap::new();

        for (word, tags_val) in words_obj {
            let tags_arr = tags_val.as_array().ok_or_else(|| {
                LexiconError::Format(format!("tag list for '{}' is not an array", word))
            })?;

            let mut tags = Vec::with_capacity(tags_arr.len());
            for t in tags_arr {
                let tag = t.as_str().ok_or_else(|| {
                    LexiconError::Format(format!("non-string tag for '{}'", word))
                })?;
                if tag.is_empty() {
                    return Err(LexiconError::Format(format!("empty tag for '{}'", word)));
                }
                tags.push(tag.to_string());
            }

            if tags.is_empty() {
                return Err(LexiconError::Format(format!(
                    "empty tag list for '{}'",
                    word
                )));
            }

            words.insert(word.clone(), tags);
        }

        Ok(Self { words })
    }

    /// Record a (word, tag) attestation; repeated tags are kept once
    pub fn insert(&mut self, word: &str, tag: &str) {
        let tags = self.words.entry(word.to_string()).or_default();
        if !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }

    /// Most frequent tag for a word form, if attested
    pub fn first_tag(&self, word: &str) -> Option<&str> {
        self.words.get(word).map(|tags| tags[0].as_str())
    }

    /// Number of indexed word forms
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the index has no entries
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Vocabulary for TagLexicon {
    fn contains(&self, word: &str) -> Result<bool, LexiconError> {
        Ok(self.words.contains_key(word))
    }

    fn contains_with_tag(&self, word: &str, tag: &str) -> Result<bool, LexiconError> {
        Ok(self
            .words
            .get(word)
            .map(|tags| tags.iter().any(|t| t == tag))
            .unwrap_or(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_lexicon_json() -> &'static str {
        r#"{
            "metadata": { "corpus": "brown" },
            "words": {
                "he": ["PRP"],
                "runs": ["VBZ", "NNS"],
                "dog": ["NN"]
            }
        }"#
    }

    #[test]
    fn test_load_from_json() {
        let lexicon = TagLexicon::from_json(sample_lexicon_json()).unwrap();

        assert_eq!(lexicon.len(), 3);
        assert!(lexicon.contains("he").unwrap());
        assert!(lexicon.contains("runs").unwrap());
        assert!(!lexicon.contains("cat").unwrap());
    }

    #[test]
    fn test_tag_scoped_membership() {
        let lexicon = TagLexicon::from_json(sample_lexicon_json()).unwrap();

        assert!(lexicon.contains_with_tag("runs", "VBZ").unwrap());
        assert!(lexicon.contains_with_tag("runs", "NNS").unwrap());
        // Attested word, unattested tag
        assert!(!lexicon.contains_with_tag("runs", "VB").unwrap());
        // Unattested word
        assert!(!lexicon.contains_with_tag("cat", "NN").unwrap());
    }

    #[test]
    fn test_first_tag_order() {
        let lexicon = TagLexicon::from_json(sample_lexicon_json()).unwrap();

        assert_eq!(lexicon.first_tag("runs"), Some("VBZ"));
        assert_eq!(lexicon.first_tag("cat"), None);
    }

    #[test]
    fn test_insert_deduplicates_tags() {
        let mut lexicon = TagLexicon::new();
        lexicon.insert("run", "VB");
        lexicon.insert("run", "NN");
        lexicon.insert("run", "VB");

        assert_eq!(lexicon.first_tag("run"), Some("VB"));
        assert!(lexicon.contains_with_tag("run", "NN").unwrap());
        assert_eq!(lexicon.len(), 1);
    }

    #[test]
    fn test_missing_words_object() {
        let result = TagLexicon::from_json(r#"{ "metadata": {} }"#);
        assert!(matches!(result, Err(LexiconError::Format(_))));
    }

    #[test]
    fn test_invalid_tag_list() {
        let result = TagLexicon::from_json(r#"{ "words": { "he": "PRP" } }"#);
        assert!(matches!(result, Err(LexiconError::Format(_))));

        let result = TagLexicon::from_json(r#"{ "words": { "he": [] } }"#);
        assert!(matches!(result, Err(LexiconError::Format(_))));
    }

    #[test]
    fn test_parse_error() {
        let result = TagLexicon::from_json("not json");
        assert!(matches!(result, Err(LexiconError::Parse(_))));
    }

    #[test]
    fn test_empty_word_lookup_is_unknown_not_error() {
        let lexicon = TagLexicon::from_json(sample_lexicon_json()).unwrap();
        assert!(!lexicon.contains("").unwrap());
    }
}
