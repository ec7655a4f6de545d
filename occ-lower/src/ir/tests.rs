//! Unit tests for the IR module

use super::*;

#[test]
fn test_ir_values() {
    let temp = Value::Temp(5);
    let constant = Value::Constant(42);
    let global = Value::Global("main".to_string());

    assert_eq!(format!("{}", temp), "%5");
    assert_eq!(format!("{}", constant), "42");
    assert_eq!(format!("{}", global), "@main");
    assert_eq!(format!("{}", Value::Undef), "undef");
}

#[test]
fn test_basic_block_terminator() {
    let mut block = BasicBlock::new(0, None);
    assert!(block.is_empty());
    assert!(!block.has_terminator());
    assert!(block.is_placeholder());

    block.add_instruction(Instruction::Store {
        value: Value::Constant(1),
        ptr: Value::Temp(0),
    });
    assert!(!block.is_empty());
    assert!(!block.has_terminator());
    assert!(!block.is_placeholder());

    block.add_instruction(Instruction::Return(Some(Value::Constant(0))));
    assert!(block.has_terminator());
    assert!(block.successors().is_empty());
}

#[test]
fn test_named_empty_block_is_not_placeholder() {
    let block = BasicBlock::new(3, Some("retry".to_string()));
    assert!(block.is_empty());
    assert!(!block.is_placeholder());
}

#[test]
fn test_block_successors() {
    let mut block = BasicBlock::new(0, None);
    block.add_instruction(Instruction::BranchCond {
        condition: Value::Temp(0),
        true_label: 1,
        false_label: 2,
    });
    assert_eq!(block.successors(), vec![1, 2]);
}

#[test]
fn test_builder_straight_line() {
    let mut builder = FunctionBuilder::new("add".to_string(), IrType::I32);

    let entry = builder.new_block(Some("entry"));
    builder.emit_block(entry).unwrap();

    let result = builder
        .build_binary(IrBinaryOp::Add, Value::Temp(0), Value::Temp(1), IrType::I32)
        .unwrap();
    builder.build_return(Some(Value::Temp(result))).unwrap();

    let function = builder.finish_function();
    assert_eq!(function.name, "add");
    assert_eq!(function.blocks.len(), 1);
    assert!(function.blocks[0].has_terminator());
}

#[test]
fn test_emit_block_materializes_fallthrough() {
    let mut builder = FunctionBuilder::new("f".to_string(), IrType::Void);

    let entry = builder.new_block(Some("entry"));
    builder.emit_block(entry).unwrap();
    builder
        .build_store(Value::Constant(1), Value::Temp(0))
        .unwrap();

    let next = builder.new_block(Some("next"));
    builder.emit_block(next).unwrap();

    // The non-empty unterminated predecessor got an explicit branch.
    let entry_block = builder.get_block(entry).unwrap();
    assert_eq!(entry_block.terminator(), Some(&Instruction::Branch(next)));
    assert_eq!(entry_block.successors(), vec![next]);
}

#[test]
fn test_emit_block_leaves_terminated_predecessor_alone() {
    let mut builder = FunctionBuilder::new("f".to_string(), IrType::Void);

    let entry = builder.new_block(Some("entry"));
    builder.emit_block(entry).unwrap();
    builder.build_return(None).unwrap();

    let next = builder.new_block(Some("next"));
    builder.emit_block(next).unwrap();

    let entry_block = builder.get_block(entry).unwrap();
    assert_eq!(entry_block.instructions.len(), 1);
    assert_eq!(entry_block.terminator(), Some(&Instruction::Return(None)));
}

#[test]
fn test_emit_block_drops_placeholder_predecessor() {
    let mut builder = FunctionBuilder::new("f".to_string(), IrType::Void);

    let entry = builder.new_block(Some("entry"));
    builder.emit_block(entry).unwrap();
    builder.build_return(None).unwrap();
    let placeholder = builder.start_placeholder_block();

    let next = builder.new_block(Some("next"));
    builder.emit_block(next).unwrap();

    // The untouched placeholder was unplaced; its id is still valid.
    assert_eq!(builder.layout(), &[entry, next]);
    assert!(builder.get_block(placeholder).is_some());
}

#[test]
fn test_append_after_terminator_is_rejected() {
    let mut builder = FunctionBuilder::new("f".to_string(), IrType::Void);

    let entry = builder.new_block(Some("entry"));
    builder.emit_block(entry).unwrap();
    builder.build_return(None).unwrap();

    assert!(builder.build_store(Value::Constant(1), Value::Temp(0)).is_err());
}

#[test]
fn test_block_placed_twice_is_rejected() {
    let mut builder = FunctionBuilder::new("f".to_string(), IrType::Void);

    let entry = builder.new_block(Some("entry"));
    builder.emit_block(entry).unwrap();
    assert!(builder.emit_block(entry).is_err());
}

#[test]
fn test_label_blocks_are_stable() {
    let mut builder = FunctionBuilder::new("f".to_string(), IrType::Void);

    let forward = builder.block_for_label("out");
    let again = builder.block_for_label("out");
    assert_eq!(forward, again);

    let other = builder.block_for_label("retry");
    assert_ne!(forward, other);
}

#[test]
fn test_finish_drops_trailing_placeholder() {
    let mut builder = FunctionBuilder::new("f".to_string(), IrType::Void);

    let entry = builder.new_block(Some("entry"));
    builder.emit_block(entry).unwrap();
    builder.build_return(None).unwrap();
    builder.start_placeholder_block();

    let function = builder.finish_function();
    assert_eq!(function.blocks.len(), 1);
    assert_eq!(function.blocks[0].id, entry);
}
