//! Sentence-shape matcher over part-of-speech tag sequences

use super::patterns::PatternTable;

/// Outcome of a structure check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Whether the tag sequence matched a permitted shape
    pub accepted: bool,
    /// Label of the matching shape; None on rejection
    pub rule_label: Option<String>,
}

impl ValidationResult {
    /// Result for blank input: nothing to check, nothing matched
    pub fn no_input() -> Self {
        Self {
            accepted: false,
            rule_label: None,
        }
    }

    /// Human-readable summary line
    pub fn message(&self) -> String {
        match &self.rule_label {
            Some(label) => format!("Valid structure: {}", label),
            None => "Grammar Error: Invalid sentence structure.".to_string(),
        }
    }
}

/// Match a tag sequence against the shape table
///
/// Exact sequence equality only: length and order are both significant,
/// and the empty sequence never matches (no shape has length 0). Total
/// over any tag sequence.
pub fn validate(tags: &[String], table: &PatternTable) -> ValidationResult {
    if tags.is_empty() {
        return ValidationResult::no_input();
    }

    match table.find(tags) {
        Some(label) => ValidationResult {
            accepted: true,
            rule_label: Some(label.to_string()),
        },
        None => ValidationResult {
            accepted: false,
            rule_label: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(v: &[&str]) -> Vec<String> {
        v.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_accept_carries_label() {
        let result = validate(&tags(&["PRP", "VBZ"]), &PatternTable::builtin());
        assert!(result.accepted);
        assert_eq!(
            result.rule_label.as_deref(),
            Some("Subject + Verb (3rd person singular)")
        );
    }

    #[test]
    fn test_reject_has_no_label() {
        let result = validate(&tags(&["NN", "NN"]), &PatternTable::builtin());
        assert!(!result.accepted);
        assert!(result.rule_label.is_none());
    }

    #[test]
    fn test_accept_xor_reject() {
        // Accepted results always carry a label, rejected ones never do
        for seq in [
            vec!["PRP", "VB"],
            vec!["PRP", "VB", "NN"],
            vec!["PRP", "VB", "NN", "NN"],
            vec!["VB"],
        ] {
            let result = validate(&tags(&seq), &PatternTable::builtin());
            assert_eq!(result.accepted, result.rule_label.is_some());
        }
    }

    #[test]
    fn test_exact_length_matching() {
        let table = PatternTable::builtin();
        assert!(validate(&tags(&["PRP", "VB"]), &table).accepted);
        assert!(validate(&tags(&["PRP", "VB", "NN"]), &table).accepted);
        assert!(!validate(&tags(&["PRP", "VB", "NN", "NN"]), &table).accepted);
    }

    #[test]
    fn test_empty_sequence_rejects() {
        let result = validate(&[], &PatternTable::builtin());
        assert!(!result.accepted);
        assert!(result.rule_label.is_none());
    }

    #[test]
    fn test_messages() {
        let accepted = validate(&tags(&["PRP", "VB"]), &PatternTable::builtin());
        assert_eq!(accepted.message(), "Valid structure: Subject + Verb");

        let rejected = validate(&tags(&["VB", "PRP"]), &PatternTable::builtin());
        assert_eq!(
            rejected.message(),
            "Grammar Error: Invalid sentence structure."
        );
    }
}
