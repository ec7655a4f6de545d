//! Jump statement lowering (goto, labels, return)

use occ_common::{CompilerError, SourceSpan};
use super::errors::CodegenError;
use super::{LoweringServices, StatementLowerer};
use crate::ast::{Expression, Statement};
use crate::ir::Value;

pub fn lower_goto<S: LoweringServices>(
    lowerer: &mut StatementLowerer<'_, S>,
    label: &str,
) -> Result<(), CompilerError> {
    // The label may not have been lowered yet; `block_for_label` resolves
    // forward references to the same block the label statement will use.
    let target = lowerer.builder.block_for_label(label);
    lowerer.builder.build_branch(target)?;

    // Statements after the goto are unreachable but still need a block to
    // land in.
    lowerer.builder.start_placeholder_block();
    Ok(())
}

pub fn lower_labeled<S: LoweringServices>(
    lowerer: &mut StatementLowerer<'_, S>,
    name: &str,
    statement: &Statement,
) -> Result<(), CompilerError> {
    let block = lowerer.builder.block_for_label(name);
    lowerer.builder.emit_block(block)?;
    lowerer.lower(statement)
}

/// Lower a return statement. A void function may carry an operand and a
/// non-void function may omit one; both are upstream defects the CFG still
/// has to absorb without losing the operand's side effects.
pub fn lower_return<S: LoweringServices>(
    lowerer: &mut StatementLowerer<'_, S>,
    expr: Option<&Expression>,
    span: &SourceSpan,
) -> Result<(), CompilerError> {
    // Evaluate the operand even if the value goes unused.
    let ret_val = match expr {
        Some(e) => Some(lowerer.services.emit_expr(lowerer.builder, e)?),
        None => None,
    };

    if lowerer.builder.return_type().is_void() {
        lowerer.builder.build_return(None)?;
    } else {
        match ret_val {
            None => {
                // "return;" in a function that returns a value.
                lowerer.builder.build_return(Some(Value::Undef))?;
            }
            Some(val) if val.is_scalar() => {
                // Coercion to the declared return type is the expression
                // generator's job, not ours.
                lowerer.builder.build_return(Some(val.value))?;
            }
            Some(_) => {
                return Err(CodegenError::AggregateReturn {
                    location: span.start.clone(),
                }
                .into());
            }
        }
    }

    // Dead code after the return still needs a block to land in.
    lowerer.builder.start_placeholder_block();
    Ok(())
}
