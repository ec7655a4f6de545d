//! Intermediate Representation for C99 lowering
//!
//! This module defines the IR that statement lowering produces: typed
//! values, instructions, basic blocks, and the builder that assembles a
//! function's control-flow graph.
//!
//! ## Architecture
//!
//! - `types` - Type system (IrType)
//! - `values` - Value representations
//! - `ops` - Binary and unary operations
//! - `instructions` - IR instructions
//! - `blocks` - Basic block management
//! - `function` - Function definitions
//! - `builder` - CFG construction (block arena, cursor, label table)

// Public exports - clean API surface
pub use self::blocks::BasicBlock;
pub use self::builder::FunctionBuilder;
pub use self::function::Function;
pub use self::instructions::Instruction;
pub use self::ops::{IrBinaryOp, IrUnaryOp};
pub use self::types::IrType;
pub use self::values::Value;

// Internal modules
mod blocks;
mod builder;
mod function;
mod instructions;
mod ops;
mod types;
mod values;

#[cfg(test)]
mod tests;
