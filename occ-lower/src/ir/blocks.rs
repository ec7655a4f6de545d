//! Basic Block Management
//!
//! Defines basic blocks - sequences of instructions with single entry/exit
//! points. A block's `LabelId` is handed out when the block is created and
//! stays valid for the whole lowering of the function, even before the block
//! has been placed into the emission order.

use occ_common::LabelId;
use serde::{Deserialize, Serialize};
use crate::ir::Instruction;

/// Basic Block - a sequence of instructions with a single entry and exit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicBlock {
    pub id: LabelId,
    /// Source label or synthetic name ("if.then"); anonymous blocks are the
    /// dead-code placeholders opened after `goto`/`return`.
    pub name: Option<String>,
    pub instructions: Vec<Instruction>,
}

impl BasicBlock {
    pub fn new(id: LabelId, name: Option<String>) -> Self {
        Self {
            id,
            name,
            instructions: Vec::new(),
        }
    }

    pub fn add_instruction(&mut self, instr: Instruction) {
        self.instructions.push(instr);
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn has_terminator(&self) -> bool {
        self.instructions
            .last()
            .is_some_and(Instruction::is_terminator)
    }

    /// The block's terminator, if it has one
    pub fn terminator(&self) -> Option<&Instruction> {
        self.instructions.last().filter(|i| i.is_terminator())
    }

    /// Successor blocks, derived from the terminator. A `Return` (or a
    /// missing terminator) yields no successors.
    pub fn successors(&self) -> Vec<LabelId> {
        self.terminator()
            .map(Instruction::branch_targets)
            .unwrap_or_default()
    }

    /// An empty anonymous block nothing refers to yet. Such a block may be
    /// silently dropped from the emission order when another block replaces
    /// it as the insertion point.
    pub fn is_placeholder(&self) -> bool {
        self.instructions.is_empty() && self.name.is_none()
    }
}
