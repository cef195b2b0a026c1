pub mod config;
pub mod core;
pub mod grammar;
pub mod lexicon;
pub mod pipeline;
pub mod tagger;

pub use crate::core::braille::BrailleMap;
pub use crate::grammar::{validate, PatternEntry, PatternTable, ValidationResult};
pub use crate::lexicon::{classify, Classification, TagLexicon, Vocabulary};
pub use crate::pipeline::{AnalysisReport, AnalyzeError, Analyzer};
pub use crate::tagger::{LexiconTagger, TaggedToken, Tagger};
