use super::{resolve_property, ClassDefinition, Registry};
use crate::{Error, Result};

use std::collections::HashSet;

struct Verify<'a> {
    registry: &'a Registry,
}

impl Registry {
    pub(super) fn verify(&self) -> Result<()> {
        Verify { registry: self }.verify()
    }
}

impl Verify<'_> {
    fn verify(&self) -> Result<()> {
        self.verify_mapped_types_are_unique()?;

        for class in self.registry.classes() {
            self.verify_table_name(class)?;
            self.verify_chain(class)?;
            self.verify_keys_resolve(class)?;
            self.verify_defaults_match_types(class)?;
            self.verify_relationships(class)?;
        }

        Ok(())
    }

    fn verify_mapped_types_are_unique(&self) -> Result<()> {
        let mut seen = HashSet::new();

        for class in self.registry.classes() {
            if !seen.insert(class.mapped_type.as_str()) {
                return Err(Error::invalid_schema(format!(
                    "mapped type `{}` is registered more than once",
                    class.mapped_type
                )));
            }
        }

        Ok(())
    }

    fn verify_table_name(&self, class: &ClassDefinition) -> Result<()> {
        if class.table_name.is_empty() {
            return Err(Error::invalid_schema(format!(
                "class `{}` has an empty table name",
                class.mapped_type
            )));
        }

        Ok(())
    }

    /// The chain must terminate (no cycles, no dangling links) and every
    /// link must declare the same strategy: the strategy is a property of
    /// the hierarchy, not of one level.
    fn verify_chain(&self, class: &ClassDefinition) -> Result<()> {
        let chain = self.registry.resolve_chain(class)?;

        let mut strategies = chain.iter().filter_map(|class| class.strategy());

        if let Some(first) = strategies.next() {
            if strategies.any(|strategy| strategy != first) {
                return Err(Error::invalid_schema(format!(
                    "the inheritance chain of `{}` mixes mapping strategies",
                    class.mapped_type
                )));
            }
        }

        Ok(())
    }

    /// Every property referenced by the primary key or an alternate key must
    /// exist on the class itself or on an ancestor.
    fn verify_keys_resolve(&self, class: &ClassDefinition) -> Result<()> {
        let chain = self.registry.resolve_chain(class)?;

        if class.primary_key.properties.is_empty() {
            return Err(Error::invalid_schema(format!(
                "class `{}` has an empty primary key",
                class.mapped_type
            )));
        }

        for name in &class.primary_key.properties {
            if resolve_property(&chain, name).is_err() {
                return Err(Error::invalid_schema(format!(
                    "primary key of `{}` references undefined property `{name}`",
                    class.mapped_type
                )));
            }
        }

        for key in class.alternate_keys.iter() {
            for name in &key.properties {
                if resolve_property(&chain, name).is_err() {
                    return Err(Error::invalid_schema(format!(
                        "alternate key `{}` of `{}` references undefined property `{name}`",
                        key.name, class.mapped_type
                    )));
                }
            }
        }

        Ok(())
    }

    fn verify_defaults_match_types(&self, class: &ClassDefinition) -> Result<()> {
        for property in &class.properties {
            if let Some(default) = &property.default {
                if let Some(ty) = default.ty() {
                    if ty != property.ty {
                        return Err(Error::invalid_schema(format!(
                            "default value of `{}::{}` is {ty:?}, property is {:?}",
                            class.mapped_type, property.name, property.ty
                        )));
                    }
                }
            }
        }

        Ok(())
    }

    fn verify_relationships(&self, class: &ClassDefinition) -> Result<()> {
        let chain = self.registry.resolve_chain(class)?;

        for relationship in class.relationships.iter() {
            let Some(target) = self.registry.get(relationship.target) else {
                return Err(Error::invalid_schema(format!(
                    "relationship `{}` of `{}` references an unregistered class",
                    relationship.name, class.mapped_type
                )));
            };

            let target_chain = self.registry.resolve_chain(target)?;

            for (owner_property, target_property) in &relationship.property_pairs {
                if resolve_property(&chain, owner_property).is_err() {
                    return Err(Error::invalid_schema(format!(
                        "relationship `{}` of `{}` references undefined property `{owner_property}`",
                        relationship.name, class.mapped_type
                    )));
                }
                if resolve_property(&target_chain, target_property).is_err() {
                    return Err(Error::invalid_schema(format!(
                        "relationship `{}` of `{}` references undefined property \
                         `{target_property}` on `{}`",
                        relationship.name, class.mapped_type, target.mapped_type
                    )));
                }
            }
        }

        Ok(())
    }
}
