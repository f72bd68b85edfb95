//! Error types for the pulse network simulator.
//!
//! This module provides a unified error type [`PulseError`] that covers
//! all error conditions that can occur during DSL parsing, network
//! construction and validation, and press analysis.
//!
//! Pressing the button of a built network cannot fail; only injecting at an
//! arbitrary module is checked.

use thiserror::Error;

/// Result type alias using [`PulseError`].
pub type Result<T> = std::result::Result<T, PulseError>;

/// Unified error type for all pulse network operations.
#[derive(Error, Debug)]
pub enum PulseError {
    // ============ DSL Parsing Errors ============
    /// Error during lexical analysis
    #[error("Lexer error at line {line}, column {column}: {message}")]
    LexerError {
        line: usize,
        column: usize,
        message: String,
    },

    /// Error during parsing
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    // ============ Network Construction Errors ============
    /// A module name was declared more than once
    #[error("Duplicate module '{name}'")]
    DuplicateModule { name: String },

    /// An untagged declaration that is not the broadcaster
    #[error("Module '{name}' at line {line} has no type tag (use '%' or '&')")]
    UntypedModule { name: String, line: usize },

    /// No broadcaster declaration in the network
    #[error("Network has no '{}' declaration", crate::BROADCASTER)]
    MissingBroadcaster,

    /// Module not found in network
    #[error("Module '{name}' not found in network")]
    ModuleNotFound { name: String },

    /// The built network violates a structural invariant
    #[error("Invalid network topology: {message}")]
    InvalidTopology { message: String },

    // ============ Simulation Errors ============
    /// Pulses cannot be injected into this module from outside the network
    #[error("Cannot inject a pulse into {kind} module '{name}'")]
    InvalidEntry { name: String, kind: &'static str },

    // ============ Analysis Errors ============
    /// Press analysis gave up before finding an answer
    #[error("Module '{target}' did not receive a low pulse within {limit} presses")]
    PressLimitExceeded { target: String, limit: u64 },

    /// Combined feeder periods overflow the press counter
    #[error("Press count for module '{target}' does not fit in 64 bits")]
    AnalysisOverflow { target: String },

    // ============ I/O Errors ============
    /// Error reading network file
    #[error("Failed to read network file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl PulseError {
    /// Create a lexer error
    pub fn lexer(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self::LexerError {
            line,
            column,
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            line,
            message: message.into(),
        }
    }

    /// Create an invalid topology error
    pub fn topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_lexer() {
        let e = PulseError::lexer(3, 7, "unexpected character '$'");
        assert_eq!(
            e.to_string(),
            "Lexer error at line 3, column 7: unexpected character '$'"
        );
    }

    #[test]
    fn test_error_display_missing_broadcaster() {
        assert_eq!(
            PulseError::MissingBroadcaster.to_string(),
            "Network has no 'broadcaster' declaration"
        );
    }

    #[test]
    fn test_error_display_analysis_overflow() {
        let e = PulseError::AnalysisOverflow {
            target: "rx".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "Press count for module 'rx' does not fit in 64 bits"
        );
    }

    #[test]
    fn test_error_display_press_limit() {
        let e = PulseError::PressLimitExceeded {
            target: "rx".to_string(),
            limit: 10,
        };
        assert!(e.to_string().contains("'rx'"));
        assert!(e.to_string().contains("10 presses"));
    }
}
