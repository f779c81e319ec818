use stratum_core::entity::{EntityStatus, EntityValues};
use stratum_core::schema::{
    AlternateKeyDefinitionCollection, ClassDefinition, ClassId, PrimaryKeyDefinition,
    PropertyDefinition, PropertyDefinitionCollection, ReadWriteRule,
    RelationshipDefinitionCollection,
};
use stratum_core::stmt::{Type, Value};
use stratum_core::{Entity, Registry};

const INVOICE: ClassId = ClassId(0);

fn invoice() -> ClassDefinition {
    ClassDefinition {
        id: INVOICE,
        mapped_type: "Invoice".to_string(),
        table_name: "tbInvoice".to_string(),
        properties: PropertyDefinitionCollection::from_defs(vec![
            PropertyDefinition::new("InvoiceID", Type::Uuid),
            PropertyDefinition::new("Amount", Type::I64),
            PropertyDefinition::new("Currency", Type::String).with_default("EUR"),
            PropertyDefinition::new("CreatedBy", Type::String).with_rule(ReadWriteRule::WriteNew),
            PropertyDefinition::new("ApprovedBy", Type::String)
                .with_rule(ReadWriteRule::WriteNotNew),
            PropertyDefinition::new("Number", Type::I64).with_rule(ReadWriteRule::WriteOnce),
            PropertyDefinition::new("Checksum", Type::String).with_rule(ReadWriteRule::ReadOnly),
        ])
        .unwrap(),
        primary_key: PrimaryKeyDefinition::object_id("InvoiceID"),
        alternate_keys: AlternateKeyDefinitionCollection::new(),
        relationships: RelationshipDefinitionCollection::new(),
        super_class: None,
    }
}

fn registry() -> Registry {
    Registry::from_classes([invoice()]).unwrap()
}

// ---------------------------------------------------------------------------
// Lifecycle
// ---------------------------------------------------------------------------

#[test]
fn create_seeds_defaults_dirty() {
    let registry = registry();
    let entity = Entity::create(&registry, INVOICE).unwrap();

    assert_eq!(EntityStatus::New, entity.status());
    assert_eq!(Some(&Value::from("EUR")), entity.get("Currency"));
    assert!(entity.is_dirty("Currency"));
    assert_eq!(None, entity.get("Amount"));
    assert!(!entity.is_dirty("Amount"));
}

#[test]
fn loaded_instance_starts_clean() {
    let registry = registry();
    let entity = Entity::loaded(
        &registry,
        INVOICE,
        [
            ("InvoiceID".to_string(), Value::Uuid(uuid::Uuid::new_v4())),
            ("Amount".to_string(), Value::I64(100)),
        ],
    )
    .unwrap();

    assert_eq!(EntityStatus::Loaded, entity.status());
    assert!(!entity.is_dirty("Amount"));
}

#[test]
fn loaded_rejects_unknown_property_names() {
    let registry = registry();
    let err = Entity::loaded(
        &registry,
        INVOICE,
        [("NoSuchColumn".to_string(), Value::I64(1))],
    )
    .unwrap_err();
    assert!(err.is_unknown_property(), "{err}");
}

#[test]
fn set_marks_dirty_and_mark_persisted_clears() {
    let registry = registry();
    let mut entity = Entity::create(&registry, INVOICE).unwrap();

    entity.set(&registry, "Amount", 250i64).unwrap();
    assert!(entity.is_dirty("Amount"));

    entity.mark_persisted();
    assert_eq!(EntityStatus::Loaded, entity.status());
    assert!(!entity.is_dirty("Amount"));
    assert!(!entity.is_dirty("Currency"));
    assert_eq!(Some(&Value::I64(250)), entity.get("Amount"));
}

#[test]
fn deleted_instance_rejects_writes() {
    let registry = registry();
    let mut entity = Entity::create(&registry, INVOICE).unwrap();
    entity.mark_deleted();

    let err = entity.set(&registry, "Amount", 1i64).unwrap_err();
    assert!(err.is_forbidden_write(), "{err}");
    assert_eq!(EntityStatus::Deleted, entity.status());
}

#[test]
fn set_rejects_unknown_property() {
    let registry = registry();
    let mut entity = Entity::create(&registry, INVOICE).unwrap();

    let err = entity.set(&registry, "NoSuchColumn", 1i64).unwrap_err();
    assert!(err.is_unknown_property(), "{err}");
}

// ---------------------------------------------------------------------------
// Read/write rules
// ---------------------------------------------------------------------------

#[test]
fn read_only_is_never_writable() {
    let registry = registry();
    let mut entity = Entity::create(&registry, INVOICE).unwrap();

    let err = entity.set(&registry, "Checksum", "abc").unwrap_err();
    assert!(err.is_forbidden_write(), "{err}");
}

#[test]
fn write_once_allows_a_single_assignment() {
    let registry = registry();
    let mut entity = Entity::create(&registry, INVOICE).unwrap();

    entity.set(&registry, "Number", 42i64).unwrap();
    let err = entity.set(&registry, "Number", 43i64).unwrap_err();
    assert!(err.is_forbidden_write(), "{err}");
    assert_eq!(Some(&Value::I64(42)), entity.get("Number"));
}

#[test]
fn write_new_requires_a_new_instance() {
    let registry = registry();

    let mut entity = Entity::create(&registry, INVOICE).unwrap();
    entity.set(&registry, "CreatedBy", "ana").unwrap();

    entity.mark_persisted();
    let err = entity.set(&registry, "CreatedBy", "bob").unwrap_err();
    assert!(err.is_forbidden_write(), "{err}");
}

#[test]
fn write_not_new_requires_a_persisted_instance() {
    let registry = registry();

    let mut entity = Entity::create(&registry, INVOICE).unwrap();
    let err = entity.set(&registry, "ApprovedBy", "ana").unwrap_err();
    assert!(err.is_forbidden_write(), "{err}");

    entity.mark_persisted();
    entity.set(&registry, "ApprovedBy", "ana").unwrap();
    assert_eq!(Some(&Value::from("ana")), entity.get("ApprovedBy"));
}
