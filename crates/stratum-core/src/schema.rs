mod class;
pub use class::{ClassDefinition, ClassId, InheritanceStrategy, SuperClassLink};

mod key;
pub use key::{AlternateKeyDefinition, AlternateKeyDefinitionCollection, PrimaryKeyDefinition};

mod property;
pub use property::{PropertyDefinition, PropertyDefinitionCollection, ReadWriteRule};

mod registry;
pub use registry::{resolve_property, Registry, MAX_CHAIN_DEPTH};

mod relation;
pub use relation::{RelationshipCardinality, RelationshipDefinition, RelationshipDefinitionCollection};

mod verify;
