//! Opal C99 Compiler - Statement to CFG Lowering
//!
//! This crate turns a type-checked statement tree (one function body at a
//! time) into a control-flow graph of basic blocks connected by explicit
//! branch instructions. The output is ready for instruction selection.
//!
//! Expression and declaration lowering are supplied by the caller through
//! the [`lower::LoweringServices`] trait; this crate only shapes control
//! flow.

pub mod ast;
pub mod ir;
pub mod lower;

pub use ir::{BasicBlock, Function, FunctionBuilder, Instruction, IrType, Value};
pub use lower::{lower_function, CodegenError, ExprValue, LoweringServices, StatementLowerer};
