//! Miscellaneous statement lowering (expression statements, compound blocks)

use occ_common::CompilerError;
use super::{LoweringServices, StatementLowerer};
use crate::ast::{Expression, Statement};

pub fn lower_expression_stmt<S: LoweringServices>(
    lowerer: &mut StatementLowerer<'_, S>,
    expr: &Expression,
) -> Result<(), CompilerError> {
    // Value discarded; only the side effects remain.
    lowerer.services.emit_expr(lowerer.builder, expr)?;
    Ok(())
}

pub fn lower_compound<S: LoweringServices>(
    lowerer: &mut StatementLowerer<'_, S>,
    statements: &[Statement],
) -> Result<(), CompilerError> {
    for stmt in statements {
        lowerer.lower(stmt)?;
    }
    Ok(())
}
