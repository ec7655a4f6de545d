//! Abstract Syntax Tree definitions for C99
//!
//! These are the post-semantic-analysis nodes the lowering stage consumes.
//! The parser and semantic analyzer that build them live upstream of this
//! crate.

pub mod expressions;
pub mod ops;
pub mod statements;

// Re-export commonly used types at module level
pub use expressions::{Expression, ExpressionKind};
pub use ops::{BinaryOp, UnaryOp};
pub use statements::{Declaration, Statement, StatementKind};
