//! Relationship resolution phase.

use tracing::trace;

use super::{ModelBuilder, USER};
use crate::document::RelationshipRecord;
use crate::error::{BuildError, BuildResult};
use crate::model::{Cardinality, Relationship};

impl ModelBuilder<'_> {
    pub(super) fn fill_relationships(&mut self) -> BuildResult<()> {
        trace!(
            count = self.document.relationships.len(),
            "filling relationships"
        );
        for record in &self.document.relationships {
            self.check_endpoint_declaration(record)?;
            let cardinality = Cardinality::parse(&record.cardinality).ok_or_else(|| {
                BuildError::invalid_object(format!(
                    "The relationship between {} and {} must be valid in order to be added. \
                     Errors: unknown cardinality '{}'",
                    record.from.name, record.to.name, record.cardinality
                ))
            })?;
            let columns = self.resolve_columns(record, cardinality);
            // A destination spelled `user` in any case resolves to the
            // canonical implicit entity unless one was declared as spelled.
            let to = if record.to.name.eq_ignore_ascii_case(USER)
                && !self.model.has_entity(&record.to.name)
            {
                USER.to_string()
            } else {
                record.to.name.clone()
            };
            self.model.add_relationship(Relationship {
                cardinality,
                from: record.from.name.clone(),
                to,
                injected_field_in_from: record.from.injected_field.clone(),
                injected_field_in_to: record.to.injected_field.clone(),
                required_in_from: record.from.required,
                required_in_to: record.to.required,
                comment_in_from: record.from.doc.clone(),
                comment_in_to: record.to.doc.clone(),
                columns,
            })?;
        }
        Ok(())
    }

    /// Relationships may not originate from User, and both endpoints must
    /// be admitted entities, except User as a destination, which is
    /// materialized implicitly.
    fn check_endpoint_declaration(&self, record: &RelationshipRecord) -> BuildResult<()> {
        if record.from.name.eq_ignore_ascii_case(USER) {
            return Err(BuildError::illegal_association(format!(
                "Relationships from the User entity are not supported in the declaration \
                 between {} and {}.",
                record.from.name, record.to.name
            )));
        }
        let mut absent = Vec::new();
        if !self.model.has_entity(&record.from.name) {
            absent.push(record.from.name.as_str());
        }
        if !record.to.name.eq_ignore_ascii_case(USER) && !self.model.has_entity(&record.to.name) {
            absent.push(record.to.name.as_str());
        }
        if !absent.is_empty() {
            let verb = if absent.len() == 1 { "is" } else { "are" };
            return Err(BuildError::undeclared_entity(format!(
                "In the relationship between {} and {}, {} {} not declared.",
                record.from.name,
                record.to.name,
                absent.join(" and "),
                verb
            )));
        }
        Ok(())
    }

    /// Match the foreign-key table against the relationship's endpoints.
    /// For one-to-many the lookup direction swaps: the key physically lives
    /// on the many side.
    fn resolve_columns(&self, record: &RelationshipRecord, cardinality: Cardinality) -> Vec<String> {
        let (from_name, to_name) = if cardinality == Cardinality::OneToMany {
            (&record.to.name, &record.from.name)
        } else {
            (&record.from.name, &record.to.name)
        };
        self.document
            .foreign_keys
            .iter()
            .find(|entry| &entry.from == from_name && &entry.to == to_name)
            .map(|entry| entry.columns.clone())
            .unwrap_or_default()
    }
}
