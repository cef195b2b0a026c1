//! braillex - English sentence analyzer and Braille transliterator

use std::io::{self, BufRead};

use braillex::config::load_config;
use braillex::lexicon::TagLexicon;
use braillex::pipeline::{AnalysisReport, Analyzer};
use braillex::tagger::LexiconTagger;

fn main() {
    // Logging init (error/warn only by default)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = load_config();

    // Corpus index: file from config, built-in seed otherwise
    let lexicon = if config.lexicon_path.is_empty() {
        TagLexicon::seed()
    } else {
        match TagLexicon::load(&config.lexicon_path) {
            Ok(lexicon) => lexicon,
            Err(e) => {
                log::warn!(
                    "lexicon load failed ({}), falling back to the seed index",
                    e
                );
                TagLexicon::seed()
            }
        }
    };

    let analyzer = Analyzer::new(
        Box::new(LexiconTagger::new(lexicon.clone())),
        Box::new(lexicon),
    );

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        match analyzer.analyze(&line, &config) {
            Ok(report) => print_report(&report),
            Err(e) => eprintln!("analysis failed: {}", e),
        }
    }
}

/// Render the three result channels
fn print_report(report: &AnalysisReport) {
    println!("Structure: {}", report.grammar.message());
    println!("Braille:   {}", report.braille);
    println!("Known:     {}", report.classification.known.join(" "));
    println!("Unknown:   {}", report.classification.unknown.join(" "));
    println!();
}
