//! Pipeline configuration load/save (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Which component supplies tokens to the classifier
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TokenSource {
    /// Word/digit/punctuation regex splitter
    RegexSplit,
    /// Whatever the tagger produced
    TaggerTokens,
}

/// How vocabulary membership is tested
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MembershipMode {
    /// Word presence anywhere in the vocabulary
    Flat,
    /// (word, tag) pair presence in the corpus-derived index
    TagScoped,
}

/// Braille output layout
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BrailleFormat {
    /// Cells joined with no separator, spaces included as cells
    Packed,
    /// Per-word cells rejoined with single spaces
    WordSpaced,
}

/// braillex pipeline settings
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PipelineConfig {
    /// Drop transliteration/classification output when the shape check rejects
    #[serde(default)]
    pub gate_on_grammar: bool,
    /// Token stream fed to the classifier in flat membership mode
    /// Tag-scoped membership always classifies the tagger's tokens, since
    /// each lookup needs a tag
    #[serde(default = "default_token_source")]
    pub token_source: TokenSource,
    #[serde(default = "default_membership_mode")]
    pub membership_mode: MembershipMode,
    #[serde(default = "default_braille_format")]
    pub braille_format: BrailleFormat,
    /// Lower-case the line before tagging, transliteration, and lookup
    #[serde(default = "default_lowercase_input")]
    pub lowercase_input: bool,
    /// Corpus index file; empty means the built-in seed lexicon
    #[serde(default)]
    pub lexicon_path: String,
}

fn default_token_source() -> TokenSource {
    TokenSource::TaggerTokens
}

fn default_membership_mode() -> MembershipMode {
    MembershipMode::TagScoped
}

fn default_braille_format() -> BrailleFormat {
    BrailleFormat::WordSpaced
}

fn default_lowercase_input() -> bool {
    true
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            gate_on_grammar: false,
            token_source: default_token_source(),
            membership_mode: default_membership_mode(),
            braille_format: default_braille_format(),
            lowercase_input: default_lowercase_input(),
            lexicon_path: String::new(),
        }
    }
}

impl PipelineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable/disable grammar gating
    pub fn with_gate_on_grammar(mut self, gate: bool) -> Self {
        self.gate_on_grammar = gate;
        self
    }

    /// Set the classifier token source
    pub fn with_token_source(mut self, source: TokenSource) -> Self {
        self.token_source = source;
        self
    }

    /// Set the membership mode
    pub fn with_membership_mode(mut self, mode: MembershipMode) -> Self {
        self.membership_mode = mode;
        self
    }

    /// Set the Braille output layout
    pub fn with_braille_format(mut self, format: BrailleFormat) -> Self {
        self.braille_format = format;
        self
    }

    /// Enable/disable input lower-casing
    pub fn with_lowercase_input(mut self, lowercase: bool) -> Self {
        self.lowercase_input = lowercase;
        self
    }
}

/// Config file path: ~/.config/braillex/config.json
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME unset or invalid: fall back to /var/tmp (writable, safer than /tmp)
            PathBuf::from("/var/tmp")
        });
    home.join(".config").join("braillex").join("config.json")
}

/// Load the config file (defaults when missing or unparseable)
pub fn load_config() -> PipelineConfig {
    let path = config_path();
    match fs::read_to_string(&path) {
        Ok(content) => {
            serde_json::from_str(&content).unwrap_or_else(|_| PipelineConfig::default())
        }
        Err(_) => PipelineConfig::default(),
    }
}

/// Save the config file
pub fn save_config(config: &PipelineConfig) -> Result<(), String> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("config dir creation failed: {}", e))?;
    }
    let json =
        serde_json::to_string_pretty(config).map_err(|e| format!("serialization failed: {}", e))?;
    fs::write(&path, json).map_err(|e| format!("config file write failed: {}", e))?;
    Ok(())
}
