//! Error taxonomy for the analysis engine

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by the text-analytics engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// The input text is blank. Checked once, before any analyzer runs.
    #[error("Please enter some content to analyze")]
    EmptyInput,

    /// A ratio would divide by zero (no words, no sentences, no terms)
    #[error("cannot compute {metric}: {denominator} is zero")]
    DivisionDegenerate {
        metric: &'static str,
        denominator: &'static str,
    },

    /// The part-of-speech tagger failed or is not installed
    #[error("part-of-speech tagger unavailable: {0}")]
    TaggerUnavailable(String),
}

impl AnalysisError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AnalysisError::EmptyInput => ErrorKind::EmptyInput,
            AnalysisError::DivisionDegenerate { .. } => ErrorKind::DivisionDegenerate,
            AnalysisError::TaggerUnavailable(_) => ErrorKind::TaggerUnavailable,
        }
    }

    /// Shorthand used by every ratio computation
    pub(crate) fn degenerate(metric: &'static str, denominator: &'static str) -> Self {
        AnalysisError::DivisionDegenerate {
            metric,
            denominator,
        }
    }
}

/// Serializable discriminant of [`AnalysisError`], used when flagging a failed section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKind {
    EmptyInput,
    DivisionDegenerate,
    TaggerUnavailable,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::EmptyInput => write!(f, "empty-input"),
            ErrorKind::DivisionDegenerate => write!(f, "division-degenerate"),
            ErrorKind::TaggerUnavailable => write!(f, "tagger-unavailable"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_message() {
        assert_eq!(
            AnalysisError::EmptyInput.to_string(),
            "Please enter some content to analyze"
        );
    }

    #[test]
    fn test_degenerate_message_names_metric() {
        let err = AnalysisError::degenerate("average sentence length", "sentence count");
        assert_eq!(
            err.to_string(),
            "cannot compute average sentence length: sentence count is zero"
        );
        assert_eq!(err.kind(), ErrorKind::DivisionDegenerate);
    }

    #[test]
    fn test_kind_display_is_kebab_case() {
        assert_eq!(ErrorKind::TaggerUnavailable.to_string(), "tagger-unavailable");
        let json = serde_json::to_string(&ErrorKind::EmptyInput).unwrap();
        assert_eq!(json, "\"empty-input\"");
    }
}
