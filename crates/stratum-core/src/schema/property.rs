use crate::{stmt, Error, Result};

use indexmap::IndexMap;

/// Describes one mapped field of a class: its name, value type, write rule
/// and optional default. Immutable after construction and owned exclusively
/// by its class's [`PropertyDefinitionCollection`].
#[derive(Debug, Clone)]
pub struct PropertyDefinition {
    /// Property name, unique within the owning collection. Doubles as the
    /// column name in synthesized statements.
    pub name: String,

    /// The value type the property holds
    pub ty: stmt::Type,

    /// When the property may be written
    pub rule: ReadWriteRule,

    /// Value seeded into newly created instances
    pub default: Option<stmt::Value>,
}

/// Governs when an instance property may be assigned through the single
/// setter entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadWriteRule {
    /// Writable at any point in the instance lifecycle
    ReadWrite,

    /// Never writable
    ReadOnly,

    /// Writable until a value has been assigned
    WriteOnce,

    /// Writable only while the instance is new (not yet persisted)
    WriteNew,

    /// Writable only once the instance has been persisted
    WriteNotNew,
}

impl PropertyDefinition {
    pub fn new(name: impl Into<String>, ty: stmt::Type) -> Self {
        Self {
            name: name.into(),
            ty,
            rule: ReadWriteRule::ReadWrite,
            default: None,
        }
    }

    pub fn with_rule(mut self, rule: ReadWriteRule) -> Self {
        self.rule = rule;
        self
    }

    pub fn with_default(mut self, default: impl Into<stmt::Value>) -> Self {
        self.default = Some(default.into());
        self
    }
}

/// Name-unique set of property definitions.
///
/// Enumeration order is the deterministic rule synthesized column order
/// derives from: ascending name order, maintained on insert.
#[derive(Debug, Clone, Default)]
pub struct PropertyDefinitionCollection {
    properties: IndexMap<String, PropertyDefinition>,
}

impl PropertyDefinitionCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection from a sequence of definitions, rejecting
    /// duplicate names.
    pub fn from_defs(defs: impl IntoIterator<Item = PropertyDefinition>) -> Result<Self> {
        let mut collection = Self::new();
        for def in defs {
            collection.add(def)?;
        }
        Ok(collection)
    }

    pub fn add(&mut self, def: PropertyDefinition) -> Result<()> {
        let name = def.name.clone();
        let (_, replaced) = self.properties.insert_sorted(name, def);
        match replaced {
            Some(prev) => Err(Error::invalid_schema(format!(
                "duplicate property `{}`",
                prev.name
            ))),
            None => Ok(()),
        }
    }

    pub fn get(&self, name: &str) -> Option<&PropertyDefinition> {
        self.properties.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterate definitions in name order.
    pub fn iter(&self) -> impl Iterator<Item = &PropertyDefinition> {
        self.properties.values()
    }

    /// Iterate property names in name order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a PropertyDefinitionCollection {
    type Item = &'a PropertyDefinition;
    type IntoIter = indexmap::map::Values<'a, String, PropertyDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.values()
    }
}
