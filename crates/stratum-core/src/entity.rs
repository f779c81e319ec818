use crate::schema::{resolve_property, ClassId, ReadWriteRule, Registry};
use crate::{stmt::Value, Error, Result};

use indexmap::IndexMap;

/// Capability contract an object instance exposes to the statement
/// synthesizer: current property values and per-property dirty flags.
///
/// Implementations are snapshots from the synthesizer's point of view;
/// concurrent mutation while a synthesis call reads the state is the
/// caller's to serialize.
pub trait EntityValues {
    /// The current value of a property, `None` if never assigned.
    fn value(&self, property: &str) -> Option<&Value>;

    /// True if the property changed since the last successful load or
    /// persist.
    fn is_dirty(&self, property: &str) -> bool;

    /// The current values of the given key properties, in key order.
    /// `None` entries mark unassigned key parts.
    fn key_values(&self, properties: &[String]) -> Vec<Option<&Value>> {
        properties.iter().map(|name| self.value(name)).collect()
    }
}

/// Lifecycle of a mapped object instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityStatus {
    /// Created in memory, never persisted
    New,

    /// Loaded from storage or persisted at least once
    Loaded,

    /// Deleted; unusable for further persistence operations
    Deleted,
}

#[derive(Debug, Clone)]
struct Slot {
    value: Value,
    dirty: bool,
}

/// In-memory state of one mapped object instance: a per-property value/dirty
/// slot map plus the lifecycle status, mutated only through [`Entity::set`].
///
/// Dirty flags are cleared by the execution collaborator (via
/// [`Entity::mark_persisted`]) after a confirmed successful write — never by
/// the synthesizer. Not thread-safe; callers serialize access.
#[derive(Debug, Clone)]
pub struct Entity {
    class: ClassId,
    status: EntityStatus,
    slots: IndexMap<String, Slot>,
}

impl Entity {
    /// Create a new, never-persisted instance of a mapped type.
    ///
    /// Property defaults declared anywhere in the inheritance chain are
    /// seeded dirty so the first INSERT carries them. The surrogate key, if
    /// any, is left pending generation.
    pub fn create(registry: &Registry, class: impl Into<ClassId>) -> Result<Self> {
        let class = class.into();
        let chain = registry.resolve_chain(class)?;

        let mut slots = IndexMap::new();
        for def in chain.iter().rev().flat_map(|class| &class.properties) {
            if let Some(default) = &def.default {
                slots.insert(
                    def.name.clone(),
                    Slot {
                        value: default.clone(),
                        dirty: true,
                    },
                );
            }
        }

        Ok(Self {
            class,
            status: EntityStatus::New,
            slots,
        })
    }

    /// Rebuild instance state from a stored row. Nothing is dirty.
    pub fn loaded(
        registry: &Registry,
        class: impl Into<ClassId>,
        values: impl IntoIterator<Item = (String, Value)>,
    ) -> Result<Self> {
        let class = class.into();
        let chain = registry.resolve_chain(class)?;

        let mut slots = IndexMap::new();
        for (name, value) in values {
            resolve_property(&chain, &name)?;
            slots.insert(name, Slot { value, dirty: false });
        }

        Ok(Self {
            class,
            status: EntityStatus::Loaded,
            slots,
        })
    }

    pub fn class(&self) -> ClassId {
        self.class
    }

    pub fn status(&self) -> EntityStatus {
        self.status
    }

    pub fn get(&self, property: &str) -> Option<&Value> {
        self.slots.get(property).map(|slot| &slot.value)
    }

    /// Assign a property value. The single mutation entry point.
    ///
    /// The name must resolve leaf-to-root on the instance's chain, the
    /// property's read/write rule must allow the write in the current
    /// lifecycle state, and deleted instances reject every write.
    pub fn set(
        &mut self,
        registry: &Registry,
        property: &str,
        value: impl Into<Value>,
    ) -> Result<()> {
        if self.status == EntityStatus::Deleted {
            return Err(Error::forbidden_write(
                "instance has been deleted and can no longer be mutated",
            ));
        }

        let chain = registry.resolve_chain(self.class)?;
        let def = resolve_property(&chain, property)?;

        let assigned = self.slots.contains_key(property);
        match def.rule {
            ReadWriteRule::ReadWrite => {}
            ReadWriteRule::ReadOnly => {
                return Err(Error::forbidden_write(format!(
                    "property `{property}` is read-only"
                )));
            }
            ReadWriteRule::WriteOnce if assigned => {
                return Err(Error::forbidden_write(format!(
                    "property `{property}` is write-once and already assigned"
                )));
            }
            ReadWriteRule::WriteOnce => {}
            ReadWriteRule::WriteNew if self.status != EntityStatus::New => {
                return Err(Error::forbidden_write(format!(
                    "property `{property}` is only writable on new instances"
                )));
            }
            ReadWriteRule::WriteNew => {}
            ReadWriteRule::WriteNotNew if self.status == EntityStatus::New => {
                return Err(Error::forbidden_write(format!(
                    "property `{property}` is only writable on persisted instances"
                )));
            }
            ReadWriteRule::WriteNotNew => {}
        }

        self.slots.insert(
            property.to_string(),
            Slot {
                value: value.into(),
                dirty: true,
            },
        );

        Ok(())
    }

    /// Execution-collaborator hook: the pending statements were applied
    /// successfully. Clears every dirty flag and leaves the instance loaded.
    pub fn mark_persisted(&mut self) {
        for slot in self.slots.values_mut() {
            slot.dirty = false;
        }
        if self.status == EntityStatus::New {
            self.status = EntityStatus::Loaded;
        }
    }

    /// Execution-collaborator hook: the row was deleted. The instance
    /// becomes unusable for further persistence operations.
    pub fn mark_deleted(&mut self) {
        self.status = EntityStatus::Deleted;
    }
}

impl EntityValues for Entity {
    fn value(&self, property: &str) -> Option<&Value> {
        self.get(property)
    }

    fn is_dirty(&self, property: &str) -> bool {
        self.slots
            .get(property)
            .map(|slot| slot.dirty)
            .unwrap_or(false)
    }
}
