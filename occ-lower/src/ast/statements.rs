//! Statement AST nodes for C99
//!
//! This module defines the statement nodes the lowering stage dispatches
//! over. Loop and switch kinds are present in the tree but not lowered yet;
//! the dispatcher rejects them explicitly rather than skipping them.

use super::expressions::Expression;
use occ_common::{SourceSpan, SymbolId};
use serde::{Deserialize, Serialize};

/// AST Statement nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    pub kind: StatementKind,
    pub span: SourceSpan,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StatementKind {
    /// Expression statement
    Expression(Expression),

    /// Compound statement (block)
    Compound(Vec<Statement>),

    /// Variable declaration
    Declaration(Declaration),

    /// If statement
    If {
        condition: Expression,
        then_stmt: Box<Statement>,
        else_stmt: Option<Box<Statement>>,
    },

    /// While loop
    While {
        condition: Expression,
        body: Box<Statement>,
    },

    /// Do-while loop
    DoWhile {
        body: Box<Statement>,
        condition: Expression,
    },

    /// For loop
    For {
        init: Option<Box<Statement>>, // Can be declaration or expression
        condition: Option<Expression>,
        update: Option<Expression>,
        body: Box<Statement>,
    },

    /// Switch statement
    Switch {
        expression: Expression,
        body: Box<Statement>,
    },

    /// Break statement
    Break,

    /// Continue statement
    Continue,

    /// Return statement
    Return(Option<Expression>),

    /// Goto statement
    Goto(String),

    /// Label statement
    Label {
        name: String,
        statement: Box<Statement>,
    },

    /// Empty statement (just semicolon)
    Empty,
}

impl Statement {
    pub fn new(kind: StatementKind, span: SourceSpan) -> Self {
        Self { kind, span }
    }
}

/// Local variable declaration
///
/// The declared type and storage live in the symbol table built during
/// semantic analysis; lowering passes the node to the caller's declaration
/// generator untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
    pub name: String,
    pub initializer: Option<Expression>,
    pub span: SourceSpan,
    pub symbol_id: Option<SymbolId>, // Filled during semantic analysis
}
