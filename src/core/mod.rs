//! Character-level Braille codec and tokenization

pub mod braille;
pub mod tokenize;
