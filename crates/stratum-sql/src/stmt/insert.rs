use stratum_core::stmt::Value;

/// `INSERT INTO <table> (<columns>) VALUES (<placeholders>)`
#[derive(Debug, Clone)]
pub struct Insert {
    pub table: String,

    /// Column names, in the order values are bound
    pub columns: Vec<String>,

    /// One value per column
    pub values: Vec<Value>,
}
