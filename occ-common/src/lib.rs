//! Opal C99 Compiler - Common Types and Utilities
//!
//! This crate contains shared identifiers, error definitions, and source
//! location types used across all components of the Opal C99 compiler.

pub mod error;
pub mod ids;
pub mod source_loc;

pub use error::CompilerError;
pub use ids::*;
pub use source_loc::{SourceLocation, SourceSpan};
