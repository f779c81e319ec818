mod identity;
pub use identity::{IdentitySource, UuidSource};

mod plan;
use plan::TablePlan;

use crate::{
    serializer::{Serializer, SqlStatement},
    stmt::{Assignment, Delete, Insert, KeyFilter, Select, Update},
    Dialect,
};

use stratum_core::{
    entity::EntityValues,
    schema::{ClassDefinition, ClassId, Registry},
    stmt::Value,
    Error, Result,
};

/// Walks a class's inheritance chain and an instance's current/dirty values
/// to produce the ordered, parameterized statement sequence for one CRUD
/// operation.
///
/// Synthesis is a pure function of the instance snapshot and the resolved
/// chain: it never mutates the instance (dirty flags are cleared by the
/// execution collaborator after a confirmed write) and it holds no mutable
/// state across calls, so one synthesizer may serve concurrent calls against
/// a shared registry. Statements in the returned sequence are executed in
/// order by the caller.
///
/// Every error is detected before any statement is returned; a partially
/// built sequence is never observable.
pub struct Synthesizer<'a> {
    registry: &'a Registry,
    serializer: Serializer,
    identity: Box<dyn IdentitySource>,
}

impl<'a> Synthesizer<'a> {
    pub fn new(registry: &'a Registry, dialect: Dialect) -> Self {
        Self {
            registry,
            serializer: Serializer::new(dialect),
            identity: Box::new(UuidSource),
        }
    }

    /// Replace the surrogate-identity source. Mostly useful for tests and
    /// for dialects with their own identity conventions.
    pub fn with_identity_source(mut self, source: impl IdentitySource + 'static) -> Self {
        self.identity = Box::new(source);
        self
    }

    /// Synthesize the INSERT sequence for a new instance.
    ///
    /// One statement per physical table the strategy maps the hierarchy to
    /// (one, for every supported strategy). If the primary key is a
    /// surrogate identity and unassigned, a value is generated here and used
    /// consistently for every binding in this call.
    pub fn insert(
        &self,
        class: impl Into<ClassId>,
        state: &dyn EntityValues,
    ) -> Result<Vec<SqlStatement>> {
        let chain = self.registry.resolve_chain(class)?;
        let plan = TablePlan::resolve(&chain);
        let key = self.insert_key_values(chain[0], state)?;

        let mut columns = Vec::with_capacity(plan.columns.len());
        let mut values = Vec::with_capacity(plan.columns.len());
        for def in &plan.columns {
            columns.push(def.name.clone());
            values.push(current_value(&key, &def.name, state));
        }

        let stmt = Insert {
            table: plan.table.to_string(),
            columns,
            values,
        };

        Ok(vec![self.serializer.serialize(&stmt.into())])
    }

    /// Synthesize the UPDATE sequence for a mutated instance.
    ///
    /// Only dirty properties participate in the SET clause; with nothing
    /// dirty the update is a no-op and the sequence is empty. The WHERE
    /// clause binds every primary-key property to its current value through
    /// trailing placeholders.
    pub fn update(
        &self,
        class: impl Into<ClassId>,
        state: &dyn EntityValues,
    ) -> Result<Vec<SqlStatement>> {
        let chain = self.registry.resolve_chain(class)?;
        let plan = TablePlan::resolve(&chain);

        let assignments: Vec<_> = plan
            .columns
            .iter()
            .filter(|def| state.is_dirty(&def.name))
            .map(|def| Assignment {
                column: def.name.clone(),
                value: state.value(&def.name).cloned().unwrap_or(Value::Null),
            })
            .collect();

        if assignments.is_empty() {
            return Ok(Vec::new());
        }

        let stmt = Update {
            table: plan.table.to_string(),
            assignments,
            filter: key_filter(chain[0], state)?,
        };

        Ok(vec![self.serializer.serialize(&stmt.into())])
    }

    /// Synthesize the DELETE sequence: one statement per physical table,
    /// addressed by primary-key equality.
    pub fn delete(
        &self,
        class: impl Into<ClassId>,
        state: &dyn EntityValues,
    ) -> Result<Vec<SqlStatement>> {
        let chain = self.registry.resolve_chain(class)?;
        let plan = TablePlan::resolve(&chain);

        let stmt = Delete {
            table: plan.table.to_string(),
            filter: key_filter(chain[0], state)?,
        };

        Ok(vec![self.serializer.serialize(&stmt.into())])
    }

    /// Synthesize the SELECT-by-primary-key statement: every resolved
    /// column, table-qualified, from the strategy's target table.
    pub fn select_by_key(
        &self,
        class: impl Into<ClassId>,
        state: &dyn EntityValues,
    ) -> Result<Vec<SqlStatement>> {
        let chain = self.registry.resolve_chain(class)?;
        let plan = TablePlan::resolve(&chain);

        let stmt = Select {
            table: plan.table.to_string(),
            columns: plan.columns.iter().map(|def| def.name.clone()).collect(),
            filter: key_filter(chain[0], state)?,
        };

        Ok(vec![self.serializer.serialize(&stmt.into())])
    }

    /// The primary-key values an INSERT binds, generating the surrogate
    /// identity when it is still pending.
    fn insert_key_values(
        &self,
        leaf: &ClassDefinition,
        state: &dyn EntityValues,
    ) -> Result<Vec<(String, Value)>> {
        let pk = &leaf.primary_key;
        let mut out = Vec::with_capacity(pk.properties.len());

        for name in &pk.properties {
            match state.value(name).filter(|value| !value.is_null()) {
                Some(value) => out.push((name.clone(), value.clone())),
                None if pk.is_object_id => {
                    if pk.is_composite() {
                        return Err(Error::identity_generation(format!(
                            "surrogate key of `{}` is composite and part `{name}` is \
                             unassigned; composite identities cannot be generated",
                            leaf.mapped_type
                        )));
                    }
                    out.push((name.clone(), self.identity.generate()?));
                }
                // Natural key parts are bound as-is; completeness is the
                // configuring application's contract.
                None => out.push((name.clone(), Value::Null)),
            }
        }

        Ok(out)
    }
}

/// The value bound for a column: the (possibly freshly generated) key value
/// when the column is a key property, the instance's current value
/// otherwise.
fn current_value(key: &[(String, Value)], column: &str, state: &dyn EntityValues) -> Value {
    if let Some((_, value)) = key.iter().find(|(name, _)| name == column) {
        return value.clone();
    }

    state.value(column).cloned().unwrap_or(Value::Null)
}

/// WHERE-clause predicates binding every primary-key property to its current
/// value. Rows cannot be addressed with unassigned key parts.
fn key_filter(leaf: &ClassDefinition, state: &dyn EntityValues) -> Result<KeyFilter> {
    let mut predicates = Vec::with_capacity(leaf.primary_key.properties.len());

    for name in &leaf.primary_key.properties {
        let value = state
            .value(name)
            .filter(|value| !value.is_null())
            .ok_or_else(|| {
                Error::missing_key(format!(
                    "primary key property `{name}` of `{}` has no value",
                    leaf.mapped_type
                ))
            })?;

        predicates.push((name.clone(), value.clone()));
    }

    Ok(KeyFilter::new(predicates))
}
