//! Function Definitions
//!
//! The finished product of lowering one function: its blocks in placement
//! order, forming a control-flow graph.

use occ_common::LabelId;
use serde::{Deserialize, Serialize};
use crate::ir::{BasicBlock, IrType};

/// Function in IR
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Function {
    pub name: String,
    pub return_type: IrType,
    /// Blocks in placement order. The order is emission order, not
    /// control-flow order; unreachable blocks may appear anywhere.
    pub blocks: Vec<BasicBlock>,
}

impl Function {
    pub fn new(name: String, return_type: IrType) -> Self {
        Self {
            name,
            return_type,
            blocks: Vec::new(),
        }
    }

    pub fn get_block(&self, id: LabelId) -> Option<&BasicBlock> {
        self.blocks.iter().find(|b| b.id == id)
    }

    pub fn entry_block(&self) -> Option<&BasicBlock> {
        self.blocks.first()
    }
}
