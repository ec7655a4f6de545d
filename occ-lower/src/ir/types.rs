//! IR Type System
//!
//! Defines the type system for the IR: integer types, pointers, and the
//! aggregate types that lowering must refuse to return by value for now.

use serde::{Deserialize, Serialize};
use std::fmt;

/// IR Type system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum IrType {
    /// Void type
    Void,

    /// Boolean (result of comparisons)
    I1,
    /// 8-bit integer (char)
    I8,
    /// 16-bit integer (short)
    I16,
    /// 32-bit integer (int, long)
    I32,
    /// 64-bit integer (long long)
    I64,

    /// Pointer type
    Ptr(Box<IrType>),

    /// Array type [size x element_type]
    Array { size: u64, element_type: Box<IrType> },

    /// Struct type
    Struct {
        name: Option<String>,
        fields: Vec<IrType>,
    },
}

impl IrType {
    pub fn is_void(&self) -> bool {
        matches!(self, IrType::Void)
    }

    /// Scalar types are the ones a condition or a plain return value may
    /// have: integers and pointers.
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            IrType::I1 | IrType::I8 | IrType::I16 | IrType::I32 | IrType::I64 | IrType::Ptr(_)
        )
    }

    pub fn is_aggregate(&self) -> bool {
        matches!(self, IrType::Array { .. } | IrType::Struct { .. })
    }
}

impl fmt::Display for IrType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IrType::Void => write!(f, "void"),
            IrType::I1 => write!(f, "i1"),
            IrType::I8 => write!(f, "i8"),
            IrType::I16 => write!(f, "i16"),
            IrType::I32 => write!(f, "i32"),
            IrType::I64 => write!(f, "i64"),
            IrType::Ptr(pointee) => write!(f, "{pointee}*"),
            IrType::Array { size, element_type } => write!(f, "[{size} x {element_type}]"),
            IrType::Struct { name: Some(name), .. } => write!(f, "%struct.{name}"),
            IrType::Struct { name: None, fields } => {
                write!(f, "{{")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{field}")?;
                }
                write!(f, "}}")
            }
        }
    }
}
