//! Structural validators for model candidates.
//!
//! One pure function per entity kind. Each returns every applicable
//! complaint for the candidate, in a fixed order; an empty list means the
//! candidate may be admitted. The aggregate joins non-empty results into a
//! single invalid-object failure, so a rejected candidate reports all of its
//! problems at once.

use std::fmt;

use super::application::Application;
use super::entity::Entity;
use super::enumeration::Enumeration;
use super::options::ModelOption;
use super::relationship::Relationship;

/// What a validator complained about. Callers branch on this rather than
/// matching message text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    MissingName,
    MissingTableName,
    MissingValues,
    MissingEndpoint,
    MissingInjectedField,
    MissingValue,
    IllegalValue,
    BlankEntityName,
}

/// One structural complaint about a candidate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Violation {
    pub kind: ViolationKind,
    pub message: String,
}

impl Violation {
    fn new(kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validate an application candidate.
pub fn application(candidate: &Application) -> Vec<Violation> {
    let mut violations = Vec::new();
    if candidate.base_name.is_empty() {
        violations.push(Violation::new(ViolationKind::MissingName, "No base name"));
    }
    violations
}

/// Validate an entity candidate.
pub fn entity(candidate: &Entity) -> Vec<Violation> {
    let mut violations = Vec::new();
    if candidate.name.is_empty() {
        violations.push(Violation::new(ViolationKind::MissingName, "No entity name"));
    }
    if candidate.table_name.is_empty() {
        violations.push(Violation::new(
            ViolationKind::MissingTableName,
            "No table name",
        ));
    }
    violations
}

/// Validate an enum candidate.
pub fn enumeration(candidate: &Enumeration) -> Vec<Violation> {
    let mut violations = Vec::new();
    if candidate.name.is_empty() {
        violations.push(Violation::new(
            ViolationKind::MissingName,
            "No enumeration name",
        ));
    }
    if candidate.values.is_empty() {
        violations.push(Violation::new(
            ViolationKind::MissingValues,
            "No enumeration values",
        ));
    }
    violations
}

/// Validate a relationship candidate.
pub fn relationship(candidate: &Relationship) -> Vec<Violation> {
    let mut violations = Vec::new();
    if candidate.from.is_empty() {
        violations.push(Violation::new(
            ViolationKind::MissingEndpoint,
            "No source entity",
        ));
    }
    if candidate.to.is_empty() {
        violations.push(Violation::new(
            ViolationKind::MissingEndpoint,
            "No destination entity",
        ));
    }
    if candidate.injected_field_in_from.is_none() && candidate.injected_field_in_to.is_none() {
        violations.push(Violation::new(
            ViolationKind::MissingInjectedField,
            "At least one injected field must be declared",
        ));
    }
    violations
}

/// Validate an option candidate, including binary value legality.
pub fn option(candidate: &ModelOption) -> Vec<Violation> {
    let mut violations = Vec::new();
    if candidate
        .entity_names()
        .iter()
        .chain(candidate.excluded_names())
        .any(|name| name.is_empty())
    {
        violations.push(Violation::new(
            ViolationKind::BlankEntityName,
            "Blank entity name in option scope",
        ));
    }
    if let ModelOption::Binary(binary) = candidate {
        if binary.value.is_empty() {
            violations.push(Violation::new(
                ViolationKind::MissingValue,
                format!("No value for option '{}'", binary.kind),
            ));
        } else if !binary.kind.value_exists(&binary.value) {
            violations.push(Violation::new(
                ViolationKind::IllegalValue,
                format!(
                    "The value '{}' is not allowed for option '{}'",
                    binary.value, binary.kind
                ),
            ));
        }
    }
    violations
}
