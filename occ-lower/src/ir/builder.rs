//! IR Builder
//!
//! `FunctionBuilder` is the lowering context for one function: it owns an
//! arena of every basic block created while lowering, the *layout* (the ids
//! of placed blocks in emission order), the insertion cursor, and the label
//! table mapping source labels to their blocks.
//!
//! Blocks live in the arena from creation onward, so a `LabelId` held by the
//! label table (or by an already-emitted branch) never dangles: dropping a
//! useless block only removes it from the layout.

use log::debug;
use occ_common::{LabelId, TempId};
use std::collections::HashMap;
use crate::ir::{
    BasicBlock, Function, Instruction, IrBinaryOp, IrType, IrUnaryOp, Value,
};

/// Builder for one function's control-flow graph
pub struct FunctionBuilder {
    name: String,
    return_type: IrType,
    /// Arena of all blocks created for this function, indexed by id
    blocks: Vec<BasicBlock>,
    /// Placed block ids in emission order
    layout: Vec<LabelId>,
    /// Block that new instructions append to
    current: Option<LabelId>,
    /// Source label name -> block, created lazily on first reference
    labels: HashMap<String, LabelId>,
    next_temp_id: TempId,
}

impl FunctionBuilder {
    pub fn new(name: String, return_type: IrType) -> Self {
        Self {
            name,
            return_type,
            blocks: Vec::new(),
            layout: Vec::new(),
            current: None,
            labels: HashMap::new(),
            next_temp_id: 0,
        }
    }

    pub fn return_type(&self) -> &IrType {
        &self.return_type
    }

    pub fn new_temp(&mut self) -> TempId {
        let temp = self.next_temp_id;
        self.next_temp_id += 1;
        temp
    }

    /// Create a block in the arena without placing it. The returned id is
    /// stable for the lifetime of the builder.
    pub fn new_block(&mut self, name: Option<&str>) -> LabelId {
        let id = self.blocks.len() as LabelId;
        self.blocks.push(BasicBlock::new(id, name.map(str::to_string)));
        id
    }

    /// Block for a source label, created on first reference.
    ///
    /// Both `goto` and the label statement itself resolve through here, so a
    /// forward reference and the later label definition share one block.
    pub fn block_for_label(&mut self, label: &str) -> LabelId {
        if let Some(&id) = self.labels.get(label) {
            return id;
        }
        let id = self.new_block(Some(label));
        self.labels.insert(label.to_string(), id);
        id
    }

    /// Place `id` and make it the insertion point, resolving the previous
    /// block first:
    ///
    /// - already terminated: its exit edges are explicit, leave it alone;
    /// - untouched anonymous placeholder: unplace it, nothing can reach it;
    /// - otherwise: materialize the fallthrough as an explicit branch.
    ///
    /// Every structural control-flow transition goes through here; the
    /// per-statement lowering routines never move the cursor directly.
    pub fn emit_block(&mut self, id: LabelId) -> Result<(), String> {
        if self.layout.contains(&id) {
            return Err(format!("block %{id} placed twice"));
        }
        if let Some(prev) = self.current {
            if self.blocks[prev as usize].has_terminator() {
                // Exit edges already explicit.
            } else if self.blocks[prev as usize].is_placeholder() {
                debug!("dropping unused placeholder block %{prev}");
                debug_assert_eq!(self.layout.last(), Some(&prev));
                self.layout.pop();
            } else {
                self.blocks[prev as usize].add_instruction(Instruction::Branch(id));
            }
        }
        self.layout.push(id);
        self.current = Some(id);
        Ok(())
    }

    /// Open a fresh anonymous block and make it the insertion point without
    /// touching the previous block. Only valid right after emitting a
    /// terminator: it gives dead code after a `goto` or `return` somewhere
    /// to land.
    pub fn start_placeholder_block(&mut self) -> LabelId {
        let id = self.new_block(None);
        self.layout.push(id);
        self.current = Some(id);
        id
    }

    pub fn current_block(&self) -> Option<LabelId> {
        self.current
    }

    pub fn current_block_has_terminator(&self) -> bool {
        self.current
            .is_some_and(|id| self.blocks[id as usize].has_terminator())
    }

    pub fn current_block_is_placeholder(&self) -> bool {
        self.current
            .is_some_and(|id| self.blocks[id as usize].is_placeholder())
    }

    pub fn get_block(&self, id: LabelId) -> Option<&BasicBlock> {
        self.blocks.get(id as usize)
    }

    /// Placed block ids in emission order
    pub fn layout(&self) -> &[LabelId] {
        &self.layout
    }

    pub fn build_binary(
        &mut self,
        op: IrBinaryOp,
        lhs: Value,
        rhs: Value,
        result_type: IrType,
    ) -> Result<TempId, String> {
        let result = self.new_temp();
        let instr = Instruction::Binary { result, op, lhs, rhs, result_type };

        self.add_instruction(instr)?;
        Ok(result)
    }

    pub fn build_unary(
        &mut self,
        op: IrUnaryOp,
        operand: Value,
        result_type: IrType,
    ) -> Result<TempId, String> {
        let result = self.new_temp();
        let instr = Instruction::Unary { result, op, operand, result_type };

        self.add_instruction(instr)?;
        Ok(result)
    }

    pub fn build_load(&mut self, ptr: Value, result_type: IrType) -> Result<TempId, String> {
        let result = self.new_temp();
        let instr = Instruction::Load { result, ptr, result_type };

        self.add_instruction(instr)?;
        Ok(result)
    }

    pub fn build_store(&mut self, value: Value, ptr: Value) -> Result<(), String> {
        let instr = Instruction::Store { value, ptr };
        self.add_instruction(instr)
    }

    pub fn build_alloca(&mut self, alloc_type: IrType) -> Result<Value, String> {
        let result = self.new_temp();
        let instr = Instruction::Alloca { result, alloc_type };

        self.add_instruction(instr)?;
        Ok(Value::Temp(result))
    }

    pub fn build_call(
        &mut self,
        function: Value,
        args: Vec<Value>,
        result_type: IrType,
    ) -> Result<Option<TempId>, String> {
        let result = if matches!(result_type, IrType::Void) {
            None
        } else {
            Some(self.new_temp())
        };

        let instr = Instruction::Call { result, function, args, result_type };

        self.add_instruction(instr)?;
        Ok(result)
    }

    pub fn build_return(&mut self, value: Option<Value>) -> Result<(), String> {
        let instr = Instruction::Return(value);
        self.add_instruction(instr)
    }

    pub fn build_branch(&mut self, label: LabelId) -> Result<(), String> {
        let instr = Instruction::Branch(label);
        self.add_instruction(instr)
    }

    pub fn build_branch_cond(
        &mut self,
        condition: Value,
        true_label: LabelId,
        false_label: LabelId,
    ) -> Result<(), String> {
        let instr = Instruction::BranchCond { condition, true_label, false_label };
        self.add_instruction(instr)
    }

    fn add_instruction(&mut self, instr: Instruction) -> Result<(), String> {
        let Some(id) = self.current else {
            return Err("no current block".to_string());
        };
        let block = &mut self.blocks[id as usize];
        if block.has_terminator() {
            return Err(format!("instruction after terminator in block %{id}"));
        }
        block.add_instruction(instr);
        Ok(())
    }

    /// Consume the builder and assemble the finished function.
    ///
    /// A trailing placeholder (the body ended in `return` or `goto`) is
    /// dropped here; unplaced arena blocks are discarded with it.
    pub fn finish_function(mut self) -> Function {
        if let Some(&last) = self.layout.last() {
            if self.blocks[last as usize].is_placeholder() {
                debug!("dropping trailing placeholder block %{last}");
                self.layout.pop();
            }
        }

        let mut function = Function::new(self.name, self.return_type);
        let mut arena: Vec<Option<BasicBlock>> =
            self.blocks.into_iter().map(Some).collect();
        for id in self.layout {
            if let Some(block) = arena[id as usize].take() {
                function.blocks.push(block);
            }
        }
        function
    }
}
