//! Known/unknown token partition

use crate::tagger::TaggedToken;

use super::vocabulary::LexiconError;

/// Stable partition of a token stream
///
/// Every input token lands in exactly one list; order within each list is
/// first-appearance order and duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    /// Tokens the vocabulary attests
    pub known: Vec<String>,
    /// Everything else
    pub unknown: Vec<String>,
}

impl Classification {
    /// Total number of classified tokens
    pub fn len(&self) -> usize {
        self.known.len() + self.unknown.len()
    }

    /// Whether no tokens were classified
    pub fn is_empty(&self) -> bool {
        self.known.is_empty() && self.unknown.is_empty()
    }
}

/// Partition tokens with an infallible membership predicate
pub fn classify<F>(tokens: &[String], mut known: F) -> Classification
where
    F: FnMut(&str) -> bool,
{
    let mut result = Classification::default();
    for token in tokens {
        if known(token) {
            result.known.push(token.clone());
        } else {
            result.unknown.push(token.clone());
        }
    }
    result
}

/// Partition tokens with a fallible membership predicate
///
/// An `InvalidWord` signal marks that token unknown and the partition
/// continues; any other error aborts and propagates to the caller.
pub fn try_classify<F>(tokens: &[String], mut known: F) -> Result<Classification, LexiconError>
where
    F: FnMut(&str) -> Result<bool, LexiconError>,
{
    let mut result = Classification::default();
    for token in tokens {
        match known(token) {
            Ok(true) => result.known.push(token.clone()),
            Ok(false) => result.unknown.push(token.clone()),
            Err(LexiconError::InvalidWord(_)) => result.unknown.push(token.clone()),
            Err(e) => return Err(e),
        }
    }
    Ok(result)
}

/// Partition tagged tokens with a (word, tag) membership predicate
///
/// The tag-scoped counterpart of [`try_classify`]: each token is queried
/// under its own tag. Error handling is identical.
pub fn classify_tagged<F>(
    tokens: &[TaggedToken],
    mut known: F,
) -> Result<Classification, LexiconError>
where
    F: FnMut(&str, &str) -> Result<bool, LexiconError>,
{
    let mut result = Classification::default();
    for token in tokens {
        match known(&token.text, &token.tag) {
            Ok(true) => result.known.push(token.text.clone()),
            Ok(false) => result.unknown.push(token.text.clone()),
            Err(LexiconError::InvalidWord(_)) => result.unknown.push(token.text.clone()),
            Err(e) => return Err(e),
        }
    }
    Ok(result)
}
