//! IR Instructions
//!
//! Defines all instruction types available in the IR. The terminators are
//! `Return`, `Branch`, and `BranchCond`; a basic block holds at most one,
//! always in last position.

use occ_common::{LabelId, TempId};
use serde::{Deserialize, Serialize};
use std::fmt;
use crate::ir::{IrBinaryOp, IrType, IrUnaryOp, Value};

/// IR Instruction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Instruction {
    /// Binary operation: result = op lhs, rhs
    Binary {
        result: TempId,
        op: IrBinaryOp,
        lhs: Value,
        rhs: Value,
        result_type: IrType,
    },

    /// Unary operation: result = op operand
    Unary {
        result: TempId,
        op: IrUnaryOp,
        operand: Value,
        result_type: IrType,
    },

    /// Load from memory: result = load ptr
    Load {
        result: TempId,
        ptr: Value,
        result_type: IrType,
    },

    /// Store to memory: store value, ptr
    Store {
        value: Value,
        ptr: Value,
    },

    /// Allocate stack memory: result = alloca type
    Alloca {
        result: TempId,
        alloc_type: IrType,
    },

    /// Function call: result = call func(args...)
    Call {
        result: Option<TempId>,
        function: Value,
        args: Vec<Value>,
        result_type: IrType,
    },

    /// Return: ret value or ret void
    Return(Option<Value>),

    /// Unconditional branch: br label
    Branch(LabelId),

    /// Conditional branch: br condition, true_label, false_label
    BranchCond {
        condition: Value,
        true_label: LabelId,
        false_label: LabelId,
    },
}

impl Instruction {
    /// Does this instruction end a basic block?
    pub fn is_terminator(&self) -> bool {
        matches!(
            self,
            Instruction::Return(_) | Instruction::Branch(_) | Instruction::BranchCond { .. }
        )
    }

    /// Blocks this instruction transfers control to (empty for non-terminators)
    pub fn branch_targets(&self) -> Vec<LabelId> {
        match self {
            Instruction::Branch(label) => vec![*label],
            Instruction::BranchCond { true_label, false_label, .. } => {
                vec![*true_label, *false_label]
            }
            _ => Vec::new(),
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Binary { result, op, lhs, rhs, result_type } => {
                write!(f, "%{result} = {op} {result_type} {lhs}, {rhs}")
            }
            Instruction::Unary { result, op, operand, result_type } => {
                write!(f, "%{result} = {op} {result_type} {operand}")
            }
            Instruction::Load { result, ptr, result_type } => {
                write!(f, "%{result} = load {result_type}, {result_type}* {ptr}")
            }
            Instruction::Store { value, ptr } => {
                write!(f, "store {value}, {ptr}")
            }
            Instruction::Alloca { result, alloc_type } => {
                write!(f, "%{result} = alloca {alloc_type}")
            }
            Instruction::Call { result, function, args, .. } => {
                if let Some(result) = result {
                    write!(f, "%{result} = ")?;
                }
                write!(f, "call {function}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{arg}")?;
                }
                write!(f, ")")
            }
            Instruction::Return(Some(value)) => write!(f, "ret {value}"),
            Instruction::Return(None) => write!(f, "ret void"),
            Instruction::Branch(label) => write!(f, "br label %{label}"),
            Instruction::BranchCond { condition, true_label, false_label } => {
                write!(f, "br i1 {condition}, label %{true_label}, label %{false_label}")
            }
        }
    }
}
