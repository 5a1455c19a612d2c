//! Column metadata and per-job declared schemas

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Cell type for a column, either declared or inferred from data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellType {
    Null,
    Int,
    Float,
    String,
    Mixed,
}

impl Default for CellType {
    fn default() -> Self {
        CellType::Null
    }
}

impl CellType {
    /// Widen the type to accommodate another type
    pub fn widen(self, other: CellType) -> CellType {
        if self == other {
            return self;
        }

        match (self, other) {
            (CellType::Null, t) | (t, CellType::Null) => t,
            (CellType::Int, CellType::Float) | (CellType::Float, CellType::Int) => CellType::Float,
            _ => CellType::Mixed,
        }
    }
}

impl std::fmt::Display for CellType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellType::Null => write!(f, "null"),
            CellType::Int => write!(f, "int"),
            CellType::Float => write!(f, "float"),
            CellType::String => write!(f, "string"),
            CellType::Mixed => write!(f, "mixed"),
        }
    }
}

/// Column metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    /// Column name (from header)
    pub name: String,
    /// Column index (0-based position)
    pub index: usize,
    /// Type observed in the data
    pub inferred_type: CellType,
}

impl Column {
    /// Create a new column with name and index
    pub fn new(name: impl Into<String>, index: usize) -> Self {
        Self {
            name: name.into(),
            index,
            inferred_type: CellType::Null,
        }
    }
}

/// Declared column types for a job's input file.
///
/// Columns listed here parse strictly to the declared type; anything else
/// falls back to per-value inference. Each job pins the columns its
/// transforms depend on so the loader's guessing cannot shift under it.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    declared: IndexMap<String, CellType>,
}

impl Schema {
    /// Create an empty schema (every column inferred)
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a column's type
    pub fn column(mut self, name: impl Into<String>, cell_type: CellType) -> Self {
        self.declared.insert(name.into(), cell_type);
        self
    }

    /// Look up the declared type for a column, if any
    pub fn declared(&self, name: &str) -> Option<CellType> {
        self.declared.get(name).copied()
    }

    /// Number of declared columns
    pub fn len(&self) -> usize {
        self.declared.len()
    }

    /// Whether no columns are declared
    pub fn is_empty(&self) -> bool {
        self.declared.is_empty()
    }
}
