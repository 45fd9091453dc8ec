//! # Domain Model
//!
//! The aggregate root produced by a build: applications, entities,
//! enumerations, relationships, options, screens and placeholders, all keyed
//! by name and owned exclusively by one [`DomainModel`] instance.
//!
//! Mutation is validity-gated: every `add_*` operation runs the
//! corresponding validator from [`validate`] and fails with an
//! invalid-object error when the candidate is rejected. Admission is
//! insert-or-replace by primary key; a later insertion under an existing key
//! silently replaces the earlier one (last write wins; documented,
//! incidental behavior).

pub mod application;
pub mod entity;
pub mod enumeration;
pub mod options;
pub mod relationship;
pub mod validate;

use std::fmt;

use indexmap::IndexMap;
use tracing::debug;

use crate::error::{BuildError, BuildResult};

pub use application::Application;
pub use entity::{ComboList, Entity, Field, FieldValidation, HashsetLink, TemplateSpec};
pub use enumeration::Enumeration;
pub use options::{BinaryOption, ModelOption, UnaryOption};
pub use relationship::{Cardinality, Relationship};
pub use validate::{Violation, ViolationKind};

/// The two kinds of generated screens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScreenKind {
    Entity,
    Transaction,
}

/// An auxiliary named screen record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Screen {
    pub name: String,
    pub comment: Option<String>,
}

/// The validated, cross-referenced output of one build.
#[derive(Clone, Debug, Default)]
pub struct DomainModel {
    applications: IndexMap<String, Application>,
    entities: IndexMap<String, Entity>,
    enums: IndexMap<String, Enumeration>,
    relationships: IndexMap<String, Relationship>,
    options: IndexMap<String, ModelOption>,
    entity_screens: IndexMap<String, Screen>,
    transaction_screens: IndexMap<String, Screen>,
    placeholders: IndexMap<String, String>,
}

impl DomainModel {
    pub fn new() -> Self {
        Self::default()
    }

    fn invalid(candidate: &str, violations: &[Violation]) -> BuildError {
        let joined = violations
            .iter()
            .map(Violation::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        BuildError::invalid_object(format!(
            "The {candidate} must be valid in order to be added. Errors: {joined}"
        ))
    }

    /// Add or replace an application, keyed by base name.
    pub fn add_application(&mut self, application: Application) -> BuildResult<()> {
        let violations = validate::application(&application);
        if !violations.is_empty() {
            return Err(Self::invalid("application", &violations));
        }
        let key = application.base_name.clone();
        if self.applications.insert(key.clone(), application).is_some() {
            debug!(application = %key, "replaced application with same base name");
        }
        Ok(())
    }

    /// Add or replace an entity, keyed by name.
    pub fn add_entity(&mut self, entity: Entity) -> BuildResult<()> {
        let violations = validate::entity(&entity);
        if !violations.is_empty() {
            return Err(Self::invalid("entity", &violations));
        }
        let key = entity.name.clone();
        if self.entities.insert(key.clone(), entity).is_some() {
            debug!(entity = %key, "replaced entity with same name");
        }
        Ok(())
    }

    /// Add or replace an enum, keyed by name.
    pub fn add_enum(&mut self, enumeration: Enumeration) -> BuildResult<()> {
        let violations = validate::enumeration(&enumeration);
        if !violations.is_empty() {
            return Err(Self::invalid("enum", &violations));
        }
        let key = enumeration.name.clone();
        if self.enums.insert(key.clone(), enumeration).is_some() {
            debug!(name = %key, "replaced enum with same name");
        }
        Ok(())
    }

    /// Add or replace a relationship, keyed by cardinality and endpoints.
    pub fn add_relationship(&mut self, relationship: Relationship) -> BuildResult<()> {
        let violations = validate::relationship(&relationship);
        if !violations.is_empty() {
            return Err(Self::invalid("relationship", &violations));
        }
        self.relationships.insert(relationship.key(), relationship);
        Ok(())
    }

    /// Add or replace an option, keyed by kind (and value, for binary).
    pub fn add_option(&mut self, option: ModelOption) -> BuildResult<()> {
        let violations = validate::option(&option);
        if !violations.is_empty() {
            return Err(Self::invalid("option", &violations));
        }
        self.options.insert(option.key(), option);
        Ok(())
    }

    /// Unconditionally store a placeholder path under `name`.
    pub fn set_placeholder(&mut self, name: impl Into<String>, path: impl Into<String>) {
        self.placeholders.insert(name.into(), path.into());
    }

    /// Store a screen under its name, partitioned by kind. No validation is
    /// applied to the screen itself.
    pub fn add_screen(&mut self, screen: Screen, kind: ScreenKind) {
        let map = match kind {
            ScreenKind::Entity => &mut self.entity_screens,
            ScreenKind::Transaction => &mut self.transaction_screens,
        };
        map.insert(screen.name.clone(), screen);
    }

    // ------------------------------------------------------------------
    // Read access (name/key lookup is the only supported pattern)
    // ------------------------------------------------------------------

    pub fn application(&self, base_name: &str) -> Option<&Application> {
        self.applications.get(base_name)
    }

    pub fn applications(&self) -> &IndexMap<String, Application> {
        &self.applications
    }

    pub fn entity(&self, name: &str) -> Option<&Entity> {
        self.entities.get(name)
    }

    pub fn entities(&self) -> &IndexMap<String, Entity> {
        &self.entities
    }

    /// Builder-internal mutable access for the attachment phases.
    pub(crate) fn entity_mut(&mut self, name: &str) -> Option<&mut Entity> {
        self.entities.get_mut(name)
    }

    /// Builder-internal iteration for defaulting per-entity attachments.
    pub(crate) fn entities_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.values_mut()
    }

    pub fn has_entity(&self, name: &str) -> bool {
        self.entities.contains_key(name)
    }

    pub fn enumeration(&self, name: &str) -> Option<&Enumeration> {
        self.enums.get(name)
    }

    pub fn enums(&self) -> &IndexMap<String, Enumeration> {
        &self.enums
    }

    pub fn relationships(&self) -> &IndexMap<String, Relationship> {
        &self.relationships
    }

    pub fn option(&self, key: &str) -> Option<&ModelOption> {
        self.options.get(key)
    }

    pub fn options(&self) -> &IndexMap<String, ModelOption> {
        &self.options
    }

    pub fn screens(&self, kind: ScreenKind) -> &IndexMap<String, Screen> {
        match kind {
            ScreenKind::Entity => &self.entity_screens,
            ScreenKind::Transaction => &self.transaction_screens,
        }
    }

    pub fn placeholder(&self, name: &str) -> Option<&str> {
        self.placeholders.get(name).map(String::as_str)
    }

    pub fn placeholders(&self) -> &IndexMap<String, String> {
        &self.placeholders
    }
}

/// Canonical textual serialization.
///
/// Blocks appear in fixed order (applications, entities, enumerations,
/// relationships, options), separated by one blank line; blocks with no
/// content contribute nothing, including their separating blank line. The
/// order and the blank-line convention are an external contract: downstream
/// tooling diffs this form.
impl fmt::Display for DomainModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let blocks = [
            join_values(self.applications.values()),
            join_values(self.entities.values()),
            join_values(self.enums.values()),
            join_values(self.relationships.values()),
            join_values(self.options.values()),
        ];
        let text = blocks
            .iter()
            .filter(|block| !block.is_empty())
            .cloned()
            .collect::<Vec<_>>()
            .join("\n\n");
        f.write_str(&text)
    }
}

fn join_values<T: fmt::Display>(values: impl Iterator<Item = T>) -> String {
    values
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
