//! Error types for the automaton engine

use thiserror::Error;

/// Errors raised while building an automaton from raw input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AutomatonError {
    /// The raw matrix (or one of its rows) is not a sequence
    #[error("invalid input: {}", describe_invalid(.row, .found))]
    InvalidInput {
        row: Option<usize>,
        found: &'static str,
    },

    /// A rule with negative neighbor counts or unreadable notation
    #[error("malformed rule: {0}")]
    MalformedRule(String),
}

fn describe_invalid(row: &Option<usize>, found: &str) -> String {
    match row {
        Some(row) => format!("row {} must be an array, found {}", row, found),
        None => format!("matrix must be an array of rows, found {}", found),
    }
}

pub type Result<T> = std::result::Result<T, AutomatonError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message() {
        let err = AutomatonError::InvalidInput { row: Some(2), found: "number" };
        assert_eq!(err.to_string(), "invalid input: row 2 must be an array, found number");

        let err = AutomatonError::InvalidInput { row: None, found: "string" };
        assert_eq!(err.to_string(), "invalid input: matrix must be an array of rows, found string");
    }
}
