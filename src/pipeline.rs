//! Analysis pipeline: structure check, Braille transliteration, token
//! classification
//!
//! One `analyze` call runs the three components over a line of text and
//! returns their results as one report. Collaborators (tagger, vocabulary)
//! are injected, so the pipeline itself holds no hidden process state.

use crate::config::{BrailleFormat, MembershipMode, PipelineConfig, TokenSource};
use crate::core::braille::BrailleMap;
use crate::core::tokenize::tokenize;
use crate::grammar::{validate, PatternTable, ValidationResult};
use crate::lexicon::{classify_tagged, try_classify, Classification, LexiconError, Vocabulary};
use crate::tagger::{Tagger, TaggerError};

/// Analysis failure: a collaborator could not answer
///
/// Distinct from a structural rejection, which is a normal negative result
/// inside the Ok report.
#[derive(Debug)]
pub enum AnalyzeError {
    /// The tagging service failed
    Tagger(TaggerError),
    /// The vocabulary service failed
    Lexicon(LexiconError),
}

impl std::fmt::Display for AnalyzeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalyzeError::Tagger(e) => write!(f, "tagging failed: {}", e),
            AnalyzeError::Lexicon(e) => write!(f, "vocabulary lookup failed: {}", e),
        }
    }
}

impl std::error::Error for AnalyzeError {}

impl From<TaggerError> for AnalyzeError {
    fn from(e: TaggerError) -> Self {
        AnalyzeError::Tagger(e)
    }
}

impl From<LexiconError> for AnalyzeError {
    fn from(e: LexiconError) -> Self {
        AnalyzeError::Lexicon(e)
    }
}

/// The three output channels of one analysis
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    /// Sentence-shape check result
    pub grammar: ValidationResult,
    /// Braille transliteration of the line
    pub braille: String,
    /// Known/unknown token partition
    pub classification: Classification,
}

impl AnalysisReport {
    /// Report for blank input: empty on all three channels
    fn empty() -> Self {
        Self {
            grammar: ValidationResult::no_input(),
            braille: String::new(),
            classification: Classification::default(),
        }
    }

    /// Whether every channel is empty (blank input or gated rejection)
    pub fn is_empty(&self) -> bool {
        self.braille.is_empty() && self.classification.is_empty()
    }
}

/// Analysis pipeline over injected collaborators
pub struct Analyzer {
    tagger: Box<dyn Tagger>,
    vocabulary: Box<dyn Vocabulary>,
    patterns: PatternTable,
    braille: BrailleMap,
}

impl Analyzer {
    /// Pipeline with the built-in shape table and base Braille map
    pub fn new(tagger: Box<dyn Tagger>, vocabulary: Box<dyn Vocabulary>) -> Self {
        Self {
            tagger,
            vocabulary,
            patterns: PatternTable::builtin(),
            braille: BrailleMap::new(),
        }
    }

    /// Replace the sentence-shape table
    pub fn with_patterns(mut self, patterns: PatternTable) -> Self {
        self.patterns = patterns;
        self
    }

    /// Replace the Braille map
    pub fn with_braille_map(mut self, map: BrailleMap) -> Self {
        self.braille = map;
        self
    }

    /// Run the full pipeline on one line of text
    ///
    /// Stages:
    /// 1. Blank input returns an all-empty report
    /// 2. Tag the line and check the tag sequence against the shape table
    /// 3. With gating on, a rejection drops the remaining stages
    /// 4. Transliterate the raw line (independent of tagging)
    /// 5. Partition the tokens by vocabulary membership
    pub fn analyze(
        &self,
        text: &str,
        config: &PipelineConfig,
    ) -> Result<AnalysisReport, AnalyzeError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(AnalysisReport::empty());
        }

        let line = if config.lowercase_input {
            trimmed.to_lowercase()
        } else {
            trimmed.to_string()
        };

        let tagged = self.tagger.tag(&line)?;
        let tags: Vec<String> = tagged.iter().map(|t| t.tag.clone()).collect();
        let grammar = validate(&tags, &self.patterns);

        if config.gate_on_grammar && !grammar.accepted {
            log::debug!("shape rejected, output gated: {:?}", tags);
            return Ok(AnalysisReport {
                grammar,
                braille: String::new(),
                classification: Classification::default(),
            });
        }

        let braille = match config.braille_format {
            BrailleFormat::Packed => self.braille.transliterate(&line),
            BrailleFormat::WordSpaced => self.braille.transliterate_words(&line),
        };

        let classification = match config.membership_mode {
            MembershipMode::TagScoped => classify_tagged(&tagged, |word, tag| {
                self.vocabulary.contains_with_tag(word, tag)
            })?,
            MembershipMode::Flat => {
                let tokens: Vec<String> = match config.token_source {
                    TokenSource::RegexSplit => tokenize(&line),
                    TokenSource::TaggerTokens => tagged.iter().map(|t| t.text.clone()).collect(),
                };
                try_classify(&tokens, |word| self.vocabulary.contains(word))?
            }
        };

        Ok(AnalysisReport {
            grammar,
            braille,
            classification,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::TagLexicon;
    use crate::tagger::{LexiconTagger, TaggedToken};

    fn seed_analyzer() -> Analyzer {
        let lexicon = TagLexicon::seed();
        Analyzer::new(
            Box::new(LexiconTagger::new(lexicon.clone())),
            Box::new(lexicon),
        )
    }

    #[test]
    fn test_blank_input_short_circuits() {
        let analyzer = seed_analyzer();
        let config = PipelineConfig::default();

        for input in ["", "   ", "\t\n"] {
            let report = analyzer.analyze(input, &config).unwrap();
            assert!(report.is_empty());
            assert!(!report.grammar.accepted);
            assert!(report.grammar.rule_label.is_none());
        }
    }

    #[test]
    fn test_accepted_sentence() {
        let analyzer = seed_analyzer();
        let report = analyzer
            .analyze("he runs", &PipelineConfig::default())
            .unwrap();

        assert!(report.grammar.accepted);
        assert_eq!(
            report.grammar.rule_label.as_deref(),
            Some("Subject + Verb (3rd person singular)")
        );
        assert_eq!(report.braille, "\u{2813}\u{2811} \u{2817}\u{2825}\u{281d}\u{280e}");
        assert_eq!(report.classification.known, vec!["he", "runs"]);
        assert!(report.classification.unknown.is_empty());
    }

    #[test]
    fn test_gating_drops_output_on_rejection() {
        let analyzer = seed_analyzer();
        let config = PipelineConfig::new().with_gate_on_grammar(true);

        // "dog barks" tags as NN VBZ, which is no permitted shape
        let report = analyzer.analyze("dog barks", &config).unwrap();

        assert!(!report.grammar.accepted);
        assert!(report.is_empty());
    }

    #[test]
    fn test_no_gating_keeps_output_on_rejection() {
        let analyzer = seed_analyzer();
        let report = analyzer
            .analyze("dog barks", &PipelineConfig::default())
            .unwrap();

        assert!(!report.grammar.accepted);
        assert!(!report.braille.is_empty());
        assert_eq!(report.classification.len(), 2);
    }

    #[test]
    fn test_uppercase_input_is_normalized() {
        let analyzer = seed_analyzer();
        let report = analyzer
            .analyze("He Runs", &PipelineConfig::default())
            .unwrap();

        assert!(report.grammar.accepted);
        assert_eq!(report.classification.known, vec!["he", "runs"]);
    }

    #[test]
    fn test_packed_format_keeps_space_cells() {
        let analyzer = seed_analyzer();
        let config = PipelineConfig::new().with_braille_format(BrailleFormat::Packed);

        let report = analyzer.analyze("he runs", &config).unwrap();
        assert_eq!(
            report.braille,
            "\u{2813}\u{2811}   \u{2817}\u{2825}\u{281d}\u{280e}"
        );
    }

    #[test]
    fn test_flat_vs_tag_scoped_membership() {
        // A tagger that mislabels "run" as a noun
        struct FixedTagger;
        impl Tagger for FixedTagger {
            fn tag(&self, _text: &str) -> Result<Vec<TaggedToken>, TaggerError> {
                Ok(vec![TaggedToken::new("run", "NN")])
            }
        }

        let analyzer = Analyzer::new(Box::new(FixedTagger), Box::new(TagLexicon::seed()));

        // Flat membership: "run" is attested somewhere
        let flat = PipelineConfig::new().with_membership_mode(MembershipMode::Flat);
        let report = analyzer.analyze("run", &flat).unwrap();
        assert_eq!(report.classification.known, vec!["run"]);

        // Tag-scoped: "run" is not attested as NN
        let scoped = PipelineConfig::new().with_membership_mode(MembershipMode::TagScoped);
        let report = analyzer.analyze("run", &scoped).unwrap();
        assert_eq!(report.classification.unknown, vec!["run"]);
    }

    #[test]
    fn test_regex_token_source() {
        let analyzer = seed_analyzer();
        let config = PipelineConfig::new()
            .with_membership_mode(MembershipMode::Flat)
            .with_token_source(TokenSource::RegexSplit);

        let report = analyzer.analyze("he runs!", &config).unwrap();
        // "!" is its own token and is attested in the seed index
        assert_eq!(report.classification.known, vec!["he", "runs", "!"]);
    }

    #[test]
    fn test_tagger_failure_aborts() {
        struct DownTagger;
        impl Tagger for DownTagger {
            fn tag(&self, _text: &str) -> Result<Vec<TaggedToken>, TaggerError> {
                Err(TaggerError::Unavailable("model not loaded".into()))
            }
        }

        let analyzer = Analyzer::new(Box::new(DownTagger), Box::new(TagLexicon::seed()));
        let result = analyzer.analyze("he runs", &PipelineConfig::default());

        assert!(matches!(result, Err(AnalyzeError::Tagger(_))));
    }

    #[test]
    fn test_vocabulary_outage_aborts() {
        struct DownVocabulary;
        impl Vocabulary for DownVocabulary {
            fn contains(&self, _word: &str) -> Result<bool, LexiconError> {
                Err(LexiconError::Unavailable("connection refused".into()))
            }
            fn contains_with_tag(&self, _word: &str, _tag: &str) -> Result<bool, LexiconError> {
                Err(LexiconError::Unavailable("connection refused".into()))
            }
        }

        let analyzer = Analyzer::new(
            Box::new(LexiconTagger::new(TagLexicon::seed())),
            Box::new(DownVocabulary),
        );
        let result = analyzer.analyze("he runs", &PipelineConfig::default());

        assert!(matches!(result, Err(AnalyzeError::Lexicon(_))));
    }

    #[test]
    fn test_partition_exactness() {
        let analyzer = seed_analyzer();
        let report = analyzer
            .analyze("he runs zzz qqq", &PipelineConfig::default())
            .unwrap();

        assert_eq!(report.classification.len(), 4);
        assert_eq!(report.classification.known, vec!["he", "runs"]);
        assert_eq!(report.classification.unknown, vec!["zzz", "qqq"]);
    }
}
