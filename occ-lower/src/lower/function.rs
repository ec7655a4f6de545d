//! Function-level lowering driver

use log::debug;
use occ_common::CompilerError;
use super::{LoweringServices, StatementLowerer};
use crate::ast::Statement;
use crate::ir::{Function, FunctionBuilder, IrType, Value};

/// Lower one function body into a control-flow graph.
///
/// Creates the entry block, runs the body through the statement dispatcher,
/// and appends an implicit return when execution can fall off the end of a
/// reachable block. A trailing anonymous placeholder (body ended in
/// `return` or `goto`) is unreachable and gets dropped instead.
pub fn lower_function<S: LoweringServices>(
    name: &str,
    return_type: IrType,
    body: &Statement,
    services: &mut S,
) -> Result<Function, CompilerError> {
    debug!("lowering function '{name}'");
    let mut builder = FunctionBuilder::new(name.to_string(), return_type);

    let entry = builder.new_block(Some("entry"));
    builder.emit_block(entry)?;

    let mut lowerer = StatementLowerer {
        builder: &mut builder,
        services,
    };
    lowerer.lower(body)?;

    if !builder.current_block_has_terminator() && !builder.current_block_is_placeholder() {
        if builder.return_type().is_void() {
            builder.build_return(None)?;
        } else {
            // Falling off the end of a non-void function: return zero, as
            // main() is permitted to.
            builder.build_return(Some(Value::Constant(0)))?;
        }
    }

    Ok(builder.finish_function())
}
