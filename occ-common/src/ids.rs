//! Identifier types shared between compiler phases

/// Symbol identifier assigned during semantic analysis
pub type SymbolId = u32;

/// Basic block / label identifier for code generation
pub type LabelId = u32;

/// Temporary variable identifier for IR
pub type TempId = u32;
