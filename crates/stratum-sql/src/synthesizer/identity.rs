use stratum_core::{stmt::Value, Result};

use uuid::Uuid;

/// Source of generated surrogate-identity values.
///
/// Invoked at most once per INSERT synthesis, before any parameter is bound;
/// a failure aborts the whole synthesis with no statements returned.
pub trait IdentitySource {
    fn generate(&self) -> Result<Value>;
}

/// The default source: random v4 UUIDs.
#[derive(Debug, Default)]
pub struct UuidSource;

impl IdentitySource for UuidSource {
    fn generate(&self) -> Result<Value> {
        Ok(Value::Uuid(Uuid::new_v4()))
    }
}
