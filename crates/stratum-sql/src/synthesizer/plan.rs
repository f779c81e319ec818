use stratum_core::schema::{ClassDefinition, InheritanceStrategy, PropertyDefinition};

/// Where one CRUD operation lands: the physical table it addresses and the
/// columns it touches, decided by the hierarchy's mapping strategy.
///
/// This is the single strategy-dispatch point. A new mapping strategy is one
/// new arm in [`TablePlan::resolve`]; column and parameter plumbing in the
/// synthesizer is shared across strategies.
pub(crate) struct TablePlan<'a> {
    pub(crate) table: &'a str,
    pub(crate) columns: Vec<&'a PropertyDefinition>,
}

impl<'a> TablePlan<'a> {
    /// Partition a resolved, leaf-first chain into table and column set.
    ///
    /// The chain is non-empty and strategy-uniform (registry verification
    /// guarantees both).
    pub(crate) fn resolve(chain: &[&'a ClassDefinition]) -> Self {
        let leaf = chain[0];

        match leaf.strategy() {
            // Not part of a hierarchy: the class's own table and columns.
            None => Self {
                table: &leaf.table_name,
                columns: leaf.properties.iter().collect(),
            },
            // The whole hierarchy lives in the root's table.
            Some(InheritanceStrategy::SingleTable) => {
                let root = chain.last().expect("chain is never empty");
                Self {
                    table: &root.table_name,
                    columns: union(chain),
                }
            }
            // The leaf's table physically duplicates ancestor columns.
            Some(InheritanceStrategy::ConcreteTable) => Self {
                table: &leaf.table_name,
                columns: union(chain),
            },
        }
    }
}

/// The union of every property across the chain, name-sorted like a single
/// property collection. A leaf-ward definition shadows an ancestor's
/// definition of the same name.
fn union<'a>(chain: &[&'a ClassDefinition]) -> Vec<&'a PropertyDefinition> {
    let mut columns: Vec<&PropertyDefinition> = Vec::new();

    for class in chain {
        for def in &class.properties {
            if !columns.iter().any(|existing| existing.name == def.name) {
                columns.push(def);
            }
        }
    }

    columns.sort_by(|a, b| a.name.cmp(&b.name));
    columns
}
