use super::{ClassDefinition, ClassId, PropertyDefinition};
use crate::{Error, Result};

use indexmap::IndexMap;

/// Upper bound on inheritance-chain length. Walks that exceed it are treated
/// as configuration cycles.
pub const MAX_CHAIN_DEPTH: usize = 64;

/// Process-wide owner of every [`ClassDefinition`], keyed by class id.
///
/// Built once from configuration and verified before use; immutable
/// afterwards, so it may be shared read-only across any number of concurrent
/// synthesis calls. Callers inject a reference rather than reading ambient
/// global state.
#[derive(Debug, Default)]
pub struct Registry {
    classes: IndexMap<ClassId, ClassDefinition>,
}

impl Registry {
    /// Build a registry from a set of class definitions, verifying the whole
    /// definition graph before returning it.
    ///
    /// Synthesis is never invoked against an unverified graph: every
    /// malformed-configuration case (cycles, dangling references, keys naming
    /// undefined properties, mixed strategies) is rejected here.
    pub fn from_classes(classes: impl IntoIterator<Item = ClassDefinition>) -> Result<Self> {
        let mut map = IndexMap::new();
        for class in classes {
            let id = class.id;
            if map.insert(id, class).is_some() {
                return Err(Error::invalid_schema(format!(
                    "duplicate class id {id:?}"
                )));
            }
        }

        let registry = Self { classes: map };
        registry.verify()?;
        Ok(registry)
    }

    /// Get a class by ID
    pub fn class(&self, id: impl Into<ClassId>) -> &ClassDefinition {
        self.classes.get(&id.into()).expect("invalid class ID")
    }

    /// Look a class up by the runtime type name it maps.
    pub fn class_by_type(&self, mapped_type: &str) -> Option<&ClassDefinition> {
        self.classes
            .values()
            .find(|class| class.mapped_type == mapped_type)
    }

    pub fn classes(&self) -> impl Iterator<Item = &ClassDefinition> {
        self.classes.values()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub(super) fn get(&self, id: ClassId) -> Option<&ClassDefinition> {
        self.classes.get(&id)
    }

    /// Resolve the full inheritance chain for a class, leaf first, by
    /// following super-class links until none remains.
    ///
    /// Fails if a link references an unregistered class or the walk exceeds
    /// [`MAX_CHAIN_DEPTH`] (a cycle).
    pub fn resolve_chain(&self, id: impl Into<ClassId>) -> Result<Vec<&ClassDefinition>> {
        let id = id.into();
        let mut chain = Vec::new();

        let mut current = self.get(id).ok_or_else(|| {
            Error::invalid_schema(format!("unregistered class {id:?}"))
        })?;

        loop {
            if chain.len() >= MAX_CHAIN_DEPTH {
                return Err(Error::invalid_schema(format!(
                    "inheritance chain of `{}` exceeds {MAX_CHAIN_DEPTH} levels; \
                     the super-class links form a cycle",
                    self.class(id).mapped_type
                )));
            }

            chain.push(current);

            match &current.super_class {
                Some(link) => {
                    current = self.get(link.super_class).ok_or_else(|| {
                        Error::invalid_schema(format!(
                            "class `{}` links to unregistered superclass {:?}",
                            current.mapped_type, link.super_class
                        ))
                    })?;
                }
                None => return Ok(chain),
            }
        }
    }
}

/// Resolve a property name against a leaf-first inheritance chain.
///
/// Search order is leaf to root, first match wins, so a subclass may shadow
/// an ancestor's definition. A name declared only on an unrelated class never
/// resolves.
pub fn resolve_property<'a>(
    chain: &[&'a ClassDefinition],
    name: &str,
) -> Result<&'a PropertyDefinition> {
    chain
        .iter()
        .find_map(|class| class.properties.get(name))
        .ok_or_else(|| {
            let leaf = chain.first().map(|c| c.mapped_type.as_str()).unwrap_or("?");
            Error::unknown_property(format!(
                "`{name}` does not resolve on `{leaf}` or any of its ancestors"
            ))
        })
}
