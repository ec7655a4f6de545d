//! Statement lowering
//!
//! This module walks a function body's statement tree and shapes the
//! control-flow graph through the [`FunctionBuilder`]. Expression and
//! declaration lowering are supplied by the caller via [`LoweringServices`];
//! everything here communicates only through the builder's cursor and label
//! table.

mod control_flow;
mod errors;
mod function;
mod jumps;
mod misc;

pub use errors::CodegenError;
pub use function::lower_function;

use occ_common::CompilerError;
use crate::ast::{Declaration, Expression, Statement, StatementKind};
use crate::ir::{FunctionBuilder, IrType, Value};

/// Typed result of evaluating one expression, as handed back by the
/// caller's expression generator. Only its truthiness and raw value are
/// consumed here.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprValue {
    pub value: Value,
    pub ty: IrType,
}

impl ExprValue {
    pub fn new(value: Value, ty: IrType) -> Self {
        Self { value, ty }
    }

    pub fn is_scalar(&self) -> bool {
        self.ty.is_scalar()
    }
}

/// Expression and declaration lowering supplied by the enclosing code
/// generator. Implementations emit through the builder they are given and
/// may have arbitrary side effects; statement lowering evaluates expressions
/// even when it discards the result.
pub trait LoweringServices {
    fn emit_expr(
        &mut self,
        builder: &mut FunctionBuilder,
        expr: &Expression,
    ) -> Result<ExprValue, CompilerError>;

    fn emit_decl(
        &mut self,
        builder: &mut FunctionBuilder,
        decl: &Declaration,
    ) -> Result<(), CompilerError>;
}

/// Statement lowering context for one function body
pub struct StatementLowerer<'a, S: LoweringServices> {
    pub builder: &'a mut FunctionBuilder,
    pub services: &'a mut S,
}

impl<'a, S: LoweringServices> StatementLowerer<'a, S> {
    /// Lower one statement, dispatching on its kind.
    ///
    /// Kinds this stage does not lower yet fail loudly: silently skipping a
    /// statement would hand the backend a CFG that does not reflect the
    /// source program.
    pub fn lower(&mut self, stmt: &Statement) -> Result<(), CompilerError> {
        match &stmt.kind {
            StatementKind::Expression(expr) => misc::lower_expression_stmt(self, expr),

            StatementKind::Compound(statements) => misc::lower_compound(self, statements),

            StatementKind::Declaration(decl) => self.services.emit_decl(self.builder, decl),

            StatementKind::If { condition, then_stmt, else_stmt } => {
                control_flow::lower_if(self, condition, then_stmt, else_stmt.as_deref())
            }

            StatementKind::Return(expr) => jumps::lower_return(self, expr.as_ref(), &stmt.span),

            StatementKind::Goto(label) => jumps::lower_goto(self, label),

            StatementKind::Label { name, statement } => {
                jumps::lower_labeled(self, name, statement)
            }

            StatementKind::Empty => Ok(()),

            StatementKind::While { .. } => self.unsupported("while statement", stmt),
            StatementKind::DoWhile { .. } => self.unsupported("do-while statement", stmt),
            StatementKind::For { .. } => self.unsupported("for statement", stmt),
            StatementKind::Switch { .. } => self.unsupported("switch statement", stmt),
            StatementKind::Break => self.unsupported("break statement", stmt),
            StatementKind::Continue => self.unsupported("continue statement", stmt),
        }
    }

    fn unsupported(&self, construct: &str, stmt: &Statement) -> Result<(), CompilerError> {
        Err(CodegenError::UnsupportedStatement {
            construct: construct.to_string(),
            location: stmt.span.start.clone(),
        }
        .into())
    }
}
