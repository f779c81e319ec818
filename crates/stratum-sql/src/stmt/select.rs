use super::KeyFilter;

/// `SELECT <table-qualified columns> FROM <table> WHERE <key>`
#[derive(Debug, Clone)]
pub struct Select {
    pub table: String,

    /// Column names, qualified with the table name when serialized
    pub columns: Vec<String>,

    pub filter: KeyFilter,
}
