use super::ClassId;
use crate::{Error, Result};

use indexmap::IndexMap;

/// Cardinality of an association between two mapped classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationshipCardinality {
    Single,
    Multiple,
}

/// A named association to another class definition.
///
/// Relationships are consumed by higher layers (loading, cascading); they
/// never contribute columns to statement synthesis.
#[derive(Debug, Clone)]
pub struct RelationshipDefinition {
    pub name: String,

    pub cardinality: RelationshipCardinality,

    /// The related class. Must be registered in the same registry.
    pub target: ClassId,

    /// Pairs of (owner property, target property) the association joins on.
    pub property_pairs: Vec<(String, String)>,
}

/// Relationships for a class, keyed by relationship name.
#[derive(Debug, Clone, Default)]
pub struct RelationshipDefinitionCollection {
    relationships: IndexMap<String, RelationshipDefinition>,
}

impl RelationshipDefinitionCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_defs(defs: impl IntoIterator<Item = RelationshipDefinition>) -> Result<Self> {
        let mut collection = Self::new();
        for def in defs {
            collection.add(def)?;
        }
        Ok(collection)
    }

    pub fn add(&mut self, def: RelationshipDefinition) -> Result<()> {
        let name = def.name.clone();
        if self.relationships.insert(name, def).is_some() {
            return Err(Error::invalid_schema("duplicate relationship name"));
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&RelationshipDefinition> {
        self.relationships.get(name)
    }

    pub fn len(&self) -> usize {
        self.relationships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relationships.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RelationshipDefinition> {
        self.relationships.values()
    }
}
