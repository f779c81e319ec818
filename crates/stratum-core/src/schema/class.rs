use super::{
    AlternateKeyDefinitionCollection, PrimaryKeyDefinition, PropertyDefinitionCollection,
    RelationshipDefinitionCollection,
};

use std::fmt;

/// The central node of the definition graph: describes how one mapped type
/// partitions into a table, which properties it declares, how it is keyed,
/// and where it sits in its inheritance hierarchy.
///
/// A `ClassDefinition` is created once per mapped type, typically at startup,
/// and is read-only for the remainder of the process. It is shared by every
/// instance of the type through the owning [`Registry`](super::Registry).
#[derive(Debug, Clone)]
pub struct ClassDefinition {
    /// Uniquely identifies the class within the registry
    pub id: ClassId,

    /// Name of the runtime type this definition maps. Globally unique per
    /// registry; used for type-based lookup.
    pub mapped_type: String,

    /// The physical table the class's own properties map to. For
    /// single-table hierarchies only the root's table is ever addressed.
    pub table_name: String,

    /// Properties declared directly on this class (inherited properties live
    /// on the ancestor that declares them)
    pub properties: PropertyDefinitionCollection,

    /// The object identity
    pub primary_key: PrimaryKeyDefinition,

    /// Additional unique constraints
    pub alternate_keys: AlternateKeyDefinitionCollection,

    /// Associations to other classes; never part of column generation
    pub relationships: RelationshipDefinitionCollection,

    /// Link to the superclass definition, if any
    pub super_class: Option<SuperClassLink>,
}

/// Reference from a class definition to its superclass plus the mapping
/// strategy the hierarchy uses. Forms a singly-linked, leaf-to-root chain;
/// cycles are a configuration error caught at registry build.
#[derive(Debug, Clone)]
pub struct SuperClassLink {
    /// The parent class. Non-owning: the parent lives in the same registry.
    pub super_class: ClassId,

    /// How the hierarchy partitions across physical tables. Uniform across
    /// every link of one chain.
    pub strategy: InheritanceStrategy,
}

/// Policy determining how an inheritance chain partitions across physical
/// tables and statements.
///
/// A closed set: per-strategy behavior is dispatched by a single match in the
/// synthesizer, so a new strategy is one new variant plus one new arm there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InheritanceStrategy {
    /// The whole hierarchy shares the root class's table; statements address
    /// the root table with the union of every class's columns.
    SingleTable,

    /// Each leaf class owns a table that physically duplicates all ancestor
    /// columns; statements address the leaf table only.
    ConcreteTable,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct ClassId(pub usize);

impl ClassDefinition {
    /// Returns true if the class sits at the root of its hierarchy (or is
    /// not part of one).
    pub fn is_root(&self) -> bool {
        self.super_class.is_none()
    }

    /// The strategy declared on this class's super link, if any.
    pub fn strategy(&self) -> Option<InheritanceStrategy> {
        self.super_class.as_ref().map(|link| link.strategy)
    }

    pub fn property(&self, name: &str) -> Option<&super::PropertyDefinition> {
        self.properties.get(name)
    }
}

impl From<&ClassDefinition> for ClassId {
    fn from(value: &ClassDefinition) -> Self {
        value.id
    }
}

impl From<&Self> for ClassId {
    fn from(src: &Self) -> Self {
        *src
    }
}

impl fmt::Debug for ClassId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ClassId({})", self.0)
    }
}
