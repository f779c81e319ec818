use crate::{Error, Result};

use indexmap::IndexMap;

/// Identifies the properties forming an object's identity.
///
/// The referenced properties may be declared on the class itself or on any
/// ancestor in its inheritance chain; the registry verifies resolvability.
#[derive(Debug, Clone)]
pub struct PrimaryKeyDefinition {
    /// Ordered property names composing the key. Composite keys are allowed.
    pub properties: Vec<String>,

    /// True when the key is a surrogate identity generated once at object
    /// creation and never recomputed; false for natural keys derived from
    /// business properties.
    pub is_object_id: bool,
}

impl PrimaryKeyDefinition {
    pub fn object_id(property: impl Into<String>) -> Self {
        Self {
            properties: vec![property.into()],
            is_object_id: true,
        }
    }

    pub fn natural(properties: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            properties: properties.into_iter().map(Into::into).collect(),
            is_object_id: false,
        }
    }

    pub fn is_composite(&self) -> bool {
        self.properties.len() > 1
    }
}

/// A named unique constraint over a set of properties.
#[derive(Debug, Clone)]
pub struct AlternateKeyDefinition {
    pub name: String,
    pub properties: Vec<String>,
}

impl AlternateKeyDefinition {
    pub fn new(
        name: impl Into<String>,
        properties: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            properties: properties.into_iter().map(Into::into).collect(),
        }
    }
}

/// Alternate keys for a class, keyed by constraint name.
#[derive(Debug, Clone, Default)]
pub struct AlternateKeyDefinitionCollection {
    keys: IndexMap<String, AlternateKeyDefinition>,
}

impl AlternateKeyDefinitionCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_defs(defs: impl IntoIterator<Item = AlternateKeyDefinition>) -> Result<Self> {
        let mut collection = Self::new();
        for def in defs {
            collection.add(def)?;
        }
        Ok(collection)
    }

    pub fn add(&mut self, def: AlternateKeyDefinition) -> Result<()> {
        let name = def.name.clone();
        if self.keys.insert(name, def).is_some() {
            return Err(Error::invalid_schema("duplicate alternate key name"));
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&AlternateKeyDefinition> {
        self.keys.get(name)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AlternateKeyDefinition> {
        self.keys.values()
    }
}
