//! IR Value Representations
//!
//! Defines values that can be used as operands in IR instructions:
//! temporaries, constants, globals, and the undefined value.

use occ_common::TempId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// IR Value - represents operands in IR instructions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Temporary variable
    Temp(TempId),

    /// Constant integer
    Constant(i64),

    /// Global symbol reference
    Global(String),

    /// Function reference
    Function(String),

    /// Undefined value (uninitialized reads, "return;" in a non-void function)
    Undef,
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Temp(id) => write!(f, "%{id}"),
            Value::Constant(val) => write!(f, "{val}"),
            Value::Global(name) => write!(f, "@{name}"),
            Value::Function(name) => write!(f, "@{name}"),
            Value::Undef => write!(f, "undef"),
        }
    }
}
