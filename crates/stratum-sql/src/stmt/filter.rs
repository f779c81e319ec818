use stratum_core::stmt::Value;

/// Key-equality predicates, ANDed together in a WHERE clause.
#[derive(Debug, Clone)]
pub struct KeyFilter {
    /// (column, current value) per key property, in key order
    pub predicates: Vec<(String, Value)>,
}

impl KeyFilter {
    pub fn new(predicates: Vec<(String, Value)>) -> Self {
        Self { predicates }
    }
}
