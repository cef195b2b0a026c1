//! Part-of-speech tagging boundary

use crate::core::tokenize::tokenize;
use crate::lexicon::TagLexicon;

/// Tag assigned to word forms absent from the tagger's index
///
/// The tag vocabulary is open; UNK simply never appears in any permitted
/// sentence shape.
pub const UNKNOWN_TAG: &str = "UNK";

/// One token with its part-of-speech tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    pub text: String,
    pub tag: String,
}

impl TaggedToken {
    pub fn new(text: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tag: tag.into(),
        }
    }
}

/// Tagging failure
#[derive(Debug)]
pub enum TaggerError {
    /// Backing model or service unreachable
    Unavailable(String),
    /// Input the tagger cannot process
    Unsupported(String),
}

impl std::fmt::Display for TaggerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaggerError::Unavailable(s) => write!(f, "tagger unavailable: {}", s),
            TaggerError::Unsupported(s) => write!(f, "unsupported input: {}", s),
        }
    }
}

impl std::error::Error for TaggerError {}

/// Tagging boundary: raw text in, ordered (token, tag) pairs out
///
/// Implementations must be deterministic for fixed input and model, and
/// must report failures instead of swallowing them.
pub trait Tagger {
    fn tag(&self, text: &str) -> Result<Vec<TaggedToken>, TaggerError>;
}

/// Dictionary tagger over a corpus-derived index
///
/// Splits the text with the word/digit/punctuation tokenizer and assigns
/// each token its most frequent tag from the index. Unindexed tokens get
/// [`UNKNOWN_TAG`].
#[derive(Debug, Clone)]
pub struct LexiconTagger {
    lexicon: TagLexicon,
}

impl LexiconTagger {
    pub fn new(lexicon: TagLexicon) -> Self {
        Self { lexicon }
    }
}

impl Tagger for LexiconTagger {
    fn tag(&self, text: &str) -> Result<Vec<TaggedToken>, TaggerError> {
        Ok(tokenize(text)
            .into_iter()
            .map(|token| {
                let tag = self
                    .lexicon
                    .first_tag(&token)
                    .unwrap_or(UNKNOWN_TAG)
                    .to_string();
                TaggedToken { text: token, tag }
            })
            .collect())
    }
}
