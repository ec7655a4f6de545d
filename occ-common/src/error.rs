//! Error handling for the Opal C99 compiler
//!
//! This module defines the common error type shared by all phases of
//! compilation. Each phase keeps its own richer error enum and converts
//! into `CompilerError` at the phase boundary.

use crate::source_loc::SourceLocation;
use thiserror::Error;

/// Main compiler error type that encompasses all phases of compilation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompilerError {
    #[error("Parse error at {location}: {message}")]
    ParseError {
        location: SourceLocation,
        message: String,
    },

    #[error("Semantic error at {location}: {message}")]
    Semantic {
        location: SourceLocation,
        message: String,
    },

    #[error("Code generation error at {location}: {message}")]
    CodegenError {
        location: SourceLocation,
        message: String,
    },

    #[error("Internal compiler error: {message}")]
    InternalError { message: String },
}

impl CompilerError {
    /// Create a semantic error
    pub fn semantic_error(message: String, location: SourceLocation) -> Self {
        CompilerError::Semantic { location, message }
    }

    /// Create a codegen error
    pub fn codegen_error(message: String, location: SourceLocation) -> Self {
        CompilerError::CodegenError { location, message }
    }

    /// Create an internal error
    pub fn internal_error(message: String) -> Self {
        CompilerError::InternalError { message }
    }
}

/// Convert from String (for simple error cases)
impl From<String> for CompilerError {
    fn from(message: String) -> Self {
        CompilerError::InternalError { message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CompilerError::codegen_error(
            "bad block".to_string(),
            SourceLocation::new("test.c", 3, 1),
        );
        assert_eq!(
            format!("{}", err),
            "Code generation error at test.c:3:1: bad block"
        );
    }

    #[test]
    fn test_from_string() {
        let err: CompilerError = "something broke".to_string().into();
        assert!(matches!(err, CompilerError::InternalError { .. }));
    }
}
