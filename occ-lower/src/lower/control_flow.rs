//! Control flow statement lowering (if)

use occ_common::CompilerError;
use super::{ExprValue, LoweringServices, StatementLowerer};
use crate::ast::{Expression, Statement};
use crate::ir::{FunctionBuilder, IrBinaryOp, IrType, Value};

pub fn lower_if<S: LoweringServices>(
    lowerer: &mut StatementLowerer<'_, S>,
    condition: &Expression,
    then_stmt: &Statement,
    else_stmt: Option<&Statement>,
) -> Result<(), CompilerError> {
    // C99 6.8.4.1: the first substatement is executed if the expression
    // compares unequal to 0. Semantic analysis has already required the
    // condition to be scalar.
    let cond_val = lowerer.services.emit_expr(lowerer.builder, condition)?;
    let bool_val = emit_scalar_to_bool(lowerer.builder, cond_val)?;

    let end_label = lowerer.builder.new_block(Some("if.end"));
    let then_label = lowerer.builder.new_block(Some("if.then"));
    // Without an else arm the false edge falls straight to the end block.
    let else_label = if else_stmt.is_some() {
        lowerer.builder.new_block(Some("if.else"))
    } else {
        end_label
    };

    lowerer.builder.build_branch_cond(bool_val, then_label, else_label)?;

    // Then arm
    lowerer.builder.emit_block(then_label)?;
    lowerer.lower(then_stmt)?;
    lowerer.builder.build_branch(end_label)?;

    // Else arm (if present)
    if let Some(else_stmt) = else_stmt {
        lowerer.builder.emit_block(else_label)?;
        lowerer.lower(else_stmt)?;
        lowerer.builder.build_branch(end_label)?;
    }

    // Code after the if attaches here.
    lowerer.builder.emit_block(end_label)?;

    Ok(())
}

/// Truth test for a scalar condition value: unequal to the zero value of
/// its type. An `i1` is already a truth value.
fn emit_scalar_to_bool(
    builder: &mut FunctionBuilder,
    cond: ExprValue,
) -> Result<Value, CompilerError> {
    if cond.ty == IrType::I1 {
        return Ok(cond.value);
    }
    let result =
        builder.build_binary(IrBinaryOp::Ne, cond.value, Value::Constant(0), IrType::I1)?;
    Ok(Value::Temp(result))
}
