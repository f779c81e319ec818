use super::KeyFilter;

use stratum_core::stmt::Value;

/// `UPDATE <table> SET <assignments> WHERE <key>`
#[derive(Debug, Clone)]
pub struct Update {
    pub table: String,

    /// Dirty columns only, in plan order
    pub assignments: Vec<Assignment>,

    pub filter: KeyFilter,
}

#[derive(Debug, Clone)]
pub struct Assignment {
    pub column: String,
    pub value: Value,
}
