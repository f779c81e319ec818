use super::KeyFilter;

/// `DELETE FROM <table> WHERE <key>`
#[derive(Debug, Clone)]
pub struct Delete {
    pub table: String,
    pub filter: KeyFilter,
}
