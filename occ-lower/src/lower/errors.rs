//! Statement lowering error types

use occ_common::{CompilerError, SourceLocation};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodegenError {
    #[error("unsupported statement kind: {construct}")]
    UnsupportedStatement {
        construct: String,
        location: SourceLocation,
    },

    #[error("returning an aggregate value is not supported")]
    AggregateReturn { location: SourceLocation },
}

impl CodegenError {
    pub fn location(&self) -> &SourceLocation {
        match self {
            CodegenError::UnsupportedStatement { location, .. } => location,
            CodegenError::AggregateReturn { location } => location,
        }
    }
}

impl From<CodegenError> for CompilerError {
    fn from(err: CodegenError) -> Self {
        CompilerError::CodegenError {
            location: err.location().clone(),
            message: err.to_string(),
        }
    }
}
