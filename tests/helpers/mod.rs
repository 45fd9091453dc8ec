//! Shared fixtures for builder integration tests.
#![allow(dead_code)] // each test binary uses a different subset

use adl::document::{
    ApplicationConfig, ApplicationRecord, Document, EntityRecord, FieldRecord, OptionTargets,
    RelationshipRecord, RelationshipSide, ValidationRecord,
};
use adl::error::BuildResult;
use adl::{ApplicationType, BuildParams, DatabaseType, DomainModel, ModelBuilder};

pub fn field(name: &str, field_type: &str) -> FieldRecord {
    FieldRecord {
        name: name.into(),
        field_type: field_type.into(),
        ..FieldRecord::default()
    }
}

pub fn validated_field(name: &str, field_type: &str, rules: &[(&str, Option<&str>)]) -> FieldRecord {
    let mut record = field(name, field_type);
    record.validations = rules
        .iter()
        .map(|(key, value)| ValidationRecord {
            key: (*key).into(),
            value: value.map(Into::into),
            constant: false,
        })
        .collect();
    record
}

pub fn entity(name: &str, fields: Vec<FieldRecord>) -> EntityRecord {
    EntityRecord {
        name: name.into(),
        body: fields,
        ..EntityRecord::default()
    }
}

pub fn application(base_name: &str) -> ApplicationRecord {
    ApplicationRecord {
        config: ApplicationConfig {
            base_name: base_name.into(),
            ..ApplicationConfig::default()
        },
    }
}

pub fn relationship(cardinality: &str, from: &str, to: &str) -> RelationshipRecord {
    RelationshipRecord {
        cardinality: cardinality.into(),
        from: RelationshipSide {
            name: from.into(),
            injected_field: Some(to.to_lowercase()),
            ..RelationshipSide::default()
        },
        to: RelationshipSide {
            name: to.into(),
            ..RelationshipSide::default()
        },
    }
}

pub fn targets(list: &[&str]) -> OptionTargets {
    OptionTargets {
        list: list.iter().map(|name| (*name).into()).collect(),
        excluded: vec![],
    }
}

pub fn build(document: &Document) -> BuildResult<DomainModel> {
    build_with(document, DatabaseType::Sql, None, None)
}

pub fn build_with(
    document: &Document,
    database_type: DatabaseType,
    application_type: Option<ApplicationType>,
    application_name: Option<&str>,
) -> BuildResult<DomainModel> {
    ModelBuilder::build(BuildParams {
        document: Some(document),
        database_type: Some(database_type),
        application_type,
        application_name,
        generator_version: Some("5.0.4"),
    })
}
