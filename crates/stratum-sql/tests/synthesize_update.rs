use pretty_assertions::assert_eq;

use stratum_core::schema::{
    AlternateKeyDefinitionCollection, ClassDefinition, ClassId, InheritanceStrategy,
    PrimaryKeyDefinition, PropertyDefinition, PropertyDefinitionCollection,
    RelationshipDefinitionCollection, SuperClassLink,
};
use stratum_core::stmt::{Type, Value};
use stratum_core::{Entity, Registry};
use stratum_sql::{Dialect, Synthesizer};

use uuid::Uuid;

const SHAPE: ClassId = ClassId(0);
const CIRCLE: ClassId = ClassId(1);

fn shape() -> ClassDefinition {
    ClassDefinition {
        id: SHAPE,
        mapped_type: "Shape".to_string(),
        table_name: "tbShape".to_string(),
        properties: PropertyDefinitionCollection::from_defs(vec![
            PropertyDefinition::new("ShapeID", Type::Uuid),
            PropertyDefinition::new("ShapeName", Type::String),
        ])
        .unwrap(),
        primary_key: PrimaryKeyDefinition::object_id("ShapeID"),
        alternate_keys: AlternateKeyDefinitionCollection::new(),
        relationships: RelationshipDefinitionCollection::new(),
        super_class: None,
    }
}

fn circle(strategy: InheritanceStrategy) -> ClassDefinition {
    ClassDefinition {
        id: CIRCLE,
        mapped_type: "Circle".to_string(),
        table_name: "tbCircle".to_string(),
        properties: PropertyDefinitionCollection::from_defs(vec![PropertyDefinition::new(
            "Radius",
            Type::I32,
        )])
        .unwrap(),
        primary_key: PrimaryKeyDefinition::object_id("ShapeID"),
        alternate_keys: AlternateKeyDefinitionCollection::new(),
        relationships: RelationshipDefinitionCollection::new(),
        super_class: Some(SuperClassLink {
            super_class: SHAPE,
            strategy,
        }),
    }
}

fn registry(strategy: InheritanceStrategy) -> Registry {
    Registry::from_classes([shape(), circle(strategy)]).unwrap()
}

fn loaded_circle(registry: &Registry, id: Uuid) -> Entity {
    Entity::loaded(
        registry,
        CIRCLE,
        [
            ("ShapeID".to_string(), Value::Uuid(id)),
            ("ShapeName".to_string(), Value::from("MyShape")),
            ("Radius".to_string(), Value::I32(10)),
        ],
    )
    .unwrap()
}

#[test]
fn all_dirty_update_sets_every_column_and_keys_on_primary_key() {
    let registry = registry(InheritanceStrategy::SingleTable);
    let id = Uuid::new_v4();

    let mut entity = loaded_circle(&registry, id);
    entity.set(&registry, "ShapeID", id).unwrap();
    entity.set(&registry, "ShapeName", "MyShape").unwrap();
    entity.set(&registry, "Radius", 10i32).unwrap();

    let synthesizer = Synthesizer::new(&registry, Dialect::SqlServer);
    let stmts = synthesizer.update(CIRCLE, &entity).unwrap();

    assert_eq!(1, stmts.len());
    assert_eq!(
        "UPDATE tbShape SET Radius = @Param0, ShapeID = @Param1, ShapeName = @Param2 \
         WHERE ShapeID = @Param3",
        stmts[0].text
    );

    // The trailing parameter binds the current primary-key value.
    assert_eq!("@Param3", stmts[0].params[3].placeholder);
    assert_eq!(Value::Uuid(id), stmts[0].params[3].value);
}

#[test]
fn only_dirty_properties_participate() {
    let registry = registry(InheritanceStrategy::SingleTable);
    let id = Uuid::new_v4();

    let mut entity = loaded_circle(&registry, id);
    entity.set(&registry, "Radius", 12i32).unwrap();

    let synthesizer = Synthesizer::new(&registry, Dialect::SqlServer);
    let stmts = synthesizer.update(CIRCLE, &entity).unwrap();

    assert_eq!(
        "UPDATE tbShape SET Radius = @Param0 WHERE ShapeID = @Param1",
        stmts[0].text
    );
    assert_eq!(Value::I32(12), stmts[0].params[0].value);
    assert_eq!(Value::Uuid(id), stmts[0].params[1].value);
}

#[test]
fn clean_instance_yields_no_statements() {
    let registry = registry(InheritanceStrategy::SingleTable);
    let entity = loaded_circle(&registry, Uuid::new_v4());

    let synthesizer = Synthesizer::new(&registry, Dialect::SqlServer);
    let stmts = synthesizer.update(CIRCLE, &entity).unwrap();

    assert!(stmts.is_empty());
}

#[test]
fn concrete_table_update_targets_leaf_table() {
    let registry = registry(InheritanceStrategy::ConcreteTable);
    let id = Uuid::new_v4();

    let mut entity = loaded_circle(&registry, id);
    entity.set(&registry, "ShapeName", "Renamed").unwrap();

    let synthesizer = Synthesizer::new(&registry, Dialect::SqlServer);
    let stmts = synthesizer.update(CIRCLE, &entity).unwrap();

    assert_eq!(
        "UPDATE tbCircle SET ShapeName = @Param0 WHERE ShapeID = @Param1",
        stmts[0].text
    );
}

#[test]
fn update_without_key_value_is_rejected() {
    let registry = registry(InheritanceStrategy::SingleTable);

    // Created but never given an identity: the row cannot be addressed.
    let mut entity = Entity::create(&registry, CIRCLE).unwrap();
    entity.set(&registry, "Radius", 10i32).unwrap();

    let synthesizer = Synthesizer::new(&registry, Dialect::SqlServer);
    let err = synthesizer.update(CIRCLE, &entity).unwrap_err();
    assert!(err.is_missing_key(), "{err}");
}

#[test]
fn repeated_synthesis_is_byte_identical() {
    let registry = registry(InheritanceStrategy::SingleTable);
    let id = Uuid::new_v4();

    let mut entity = loaded_circle(&registry, id);
    entity.set(&registry, "ShapeName", "Renamed").unwrap();

    let synthesizer = Synthesizer::new(&registry, Dialect::SqlServer);
    let first = synthesizer.update(CIRCLE, &entity).unwrap();
    let second = synthesizer.update(CIRCLE, &entity).unwrap();

    assert_eq!(first, second);
}
