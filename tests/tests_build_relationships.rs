//! Builder integration tests: relationship resolution.

mod helpers;

use adl::document::{Document, ForeignKeyRecord};
use adl::error::BuildError;
use adl::model::Cardinality;

use helpers::*;

#[test]
fn test_relationship_resolves_declared_endpoints() {
    let mut document = Document::default();
    document.entities.push(entity("Owner", vec![]));
    document.entities.push(entity("Car", vec![]));
    document
        .relationships
        .push(relationship("one-to-many", "Owner", "Car"));

    let model = build(&document).unwrap();
    assert_eq!(model.relationships().len(), 1);
    let rel = model.relationships().values().next().unwrap();
    assert_eq!(rel.cardinality, Cardinality::OneToMany);
    assert_eq!(rel.from, "Owner");
    assert_eq!(rel.to, "Car");
    assert!(model.has_entity(&rel.from));
    assert!(model.has_entity(&rel.to));
}

#[test]
fn test_undeclared_destination_names_the_missing_entity() {
    let mut document = Document::default();
    document.entities.push(entity("Foo", vec![]));
    document
        .relationships
        .push(relationship("one-to-many", "Foo", "Bar"));

    let err = build(&document).unwrap_err();
    assert!(matches!(err, BuildError::UndeclaredEntity(_)));
    let message = err.to_string();
    assert!(message.contains("Bar"));
    assert!(message.contains("is not declared"));
}

#[test]
fn test_two_undeclared_endpoints_pluralized() {
    let mut document = Document::default();
    document
        .relationships
        .push(relationship("one-to-one", "Foo", "Bar"));

    let err = build(&document).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("Foo and Bar"));
    assert!(message.contains("are not declared"));
}

#[test]
fn test_relationship_from_user_is_illegal() {
    let mut document = Document::default();
    document.entities.push(entity("Car", vec![]));
    document
        .relationships
        .push(relationship("one-to-many", "User", "Car"));

    let err = build(&document).unwrap_err();
    assert!(matches!(err, BuildError::IllegalAssociation(_)));

    // Case-insensitive on the source endpoint.
    let mut lowered = Document::default();
    lowered.entities.push(entity("Car", vec![]));
    lowered
        .relationships
        .push(relationship("one-to-many", "user", "Car"));
    let err = build(&lowered).unwrap_err();
    assert!(matches!(err, BuildError::IllegalAssociation(_)));
}

#[test]
fn test_relationship_to_user_materializes_implicit_entity() {
    let mut document = Document::default();
    document.entities.push(entity("Car", vec![]));
    document
        .relationships
        .push(relationship("many-to-one", "Car", "User"));

    let model = build(&document).unwrap();
    let user = model.entity("User").unwrap();
    assert_eq!(user.table_name, "jhi_user");
    assert!(user.fields.is_empty());
    assert_eq!(model.relationships().len(), 1);
}

#[test]
fn test_lowercase_user_destination_resolves_to_canonical_entity() {
    let mut document = Document::default();
    document.entities.push(entity("Car", vec![]));
    document
        .relationships
        .push(relationship("many-to-one", "Car", "user"));

    let model = build(&document).unwrap();
    assert!(model.has_entity("User"));
    let rel = model.relationships().values().next().unwrap();
    assert_eq!(rel.to, "User");
}

#[test]
fn test_declared_user_entity_is_not_overwritten() {
    let mut document = Document::default();
    document.entities.push(entity("Car", vec![]));
    let mut user = entity("User", vec![field("login", "String")]);
    user.table_name = Some("app_user".into());
    document.entities.push(user);
    document
        .relationships
        .push(relationship("many-to-one", "Car", "User"));

    let model = build(&document).unwrap();
    let user = model.entity("User").unwrap();
    assert_eq!(user.table_name, "app_user");
    assert!(user.fields.contains_key("login"));
}

#[test]
fn test_foreign_key_lookup_follows_declared_direction() {
    let mut document = Document::default();
    document.entities.push(entity("Car", vec![]));
    document.entities.push(entity("Owner", vec![]));
    document.foreign_keys.push(ForeignKeyRecord {
        from: "Car".into(),
        to: "Owner".into(),
        columns: vec!["owner_id".into()],
    });
    document
        .relationships
        .push(relationship("many-to-one", "Car", "Owner"));

    let model = build(&document).unwrap();
    let rel = model.relationships().values().next().unwrap();
    assert_eq!(rel.columns, vec!["owner_id"]);
}

#[test]
fn test_foreign_key_lookup_swaps_for_one_to_many() {
    // The key lives on the many side: for Owner one-to-many Car the table
    // entry is declared (Car, Owner).
    let mut document = Document::default();
    document.entities.push(entity("Car", vec![]));
    document.entities.push(entity("Owner", vec![]));
    document.foreign_keys.push(ForeignKeyRecord {
        from: "Car".into(),
        to: "Owner".into(),
        columns: vec!["owner_id".into()],
    });
    document
        .relationships
        .push(relationship("one-to-many", "Owner", "Car"));

    let model = build(&document).unwrap();
    let rel = model.relationships().values().next().unwrap();
    assert_eq!(rel.columns, vec!["owner_id"]);
}

#[test]
fn test_unmatched_foreign_key_yields_empty_columns() {
    let mut document = Document::default();
    document.entities.push(entity("Car", vec![]));
    document.entities.push(entity("Owner", vec![]));
    document
        .relationships
        .push(relationship("one-to-one", "Owner", "Car"));

    let model = build(&document).unwrap();
    let rel = model.relationships().values().next().unwrap();
    assert!(rel.columns.is_empty());
}

#[test]
fn test_unknown_cardinality_rejected() {
    let mut document = Document::default();
    document.entities.push(entity("Car", vec![]));
    document.entities.push(entity("Owner", vec![]));
    document
        .relationships
        .push(relationship("one-to-several", "Owner", "Car"));

    let err = build(&document).unwrap_err();
    assert!(matches!(err, BuildError::InvalidObject(_)));
}

#[test]
fn test_duplicate_relationship_last_write_wins() {
    let mut document = Document::default();
    document.entities.push(entity("Car", vec![]));
    document.entities.push(entity("Owner", vec![]));
    let mut first = relationship("one-to-many", "Owner", "Car");
    first.from.required = false;
    let mut second = relationship("one-to-many", "Owner", "Car");
    second.from.required = true;
    document.relationships.push(first);
    document.relationships.push(second);

    let model = build(&document).unwrap();
    assert_eq!(model.relationships().len(), 1);
    assert!(model.relationships().values().next().unwrap().required_in_from);
}
