//! Sentence-shape validation
//!
//! A sentence shape is an ordered part-of-speech tag sequence. The set of
//! permitted shapes lives in a declarative table ([`PatternTable`]); the
//! matcher checks exact sequence membership and nothing else.

mod patterns;
mod validator;

pub use patterns::{PatternEntry, PatternTable};
pub use validator::{validate, ValidationResult};
