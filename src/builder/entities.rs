//! Entity, field and attachment phases.
//!
//! Fields are extracted for both entity bodies and multilingual bodies with
//! the same rules: the first letter of every field name is lowered, a field
//! named `id` (any case) is dropped before any other check, reserved names
//! are rejected, and the declared type must name an admitted enum or pass
//! the dialect's type predicate. Hashset links, combo-lists and templates
//! attach to entities admitted by this phase.

use indexmap::IndexMap;
use tracing::{trace, warn};

use super::{ModelBuilder, USER, USER_TABLE};
use crate::document::FieldRecord;
use crate::error::{BuildError, BuildResult};
use crate::model::{ComboList, Entity, Field, FieldValidation, HashsetLink, TemplateSpec};
use crate::reference::{
    ValidationRule, is_reserved_class_name, is_reserved_field_name, rule_applies,
};

impl ModelBuilder<'_> {
    pub(super) fn fill_entities(&mut self) -> BuildResult<()> {
        trace!(count = self.document.entities.len(), "filling entities");
        for record in &self.document.entities {
            if is_reserved_class_name(&record.name) {
                return Err(BuildError::illegal_name(format!(
                    "The name '{}' is a reserved keyword and can not be used as entity class name.",
                    record.name
                )));
            }
            let table_name = record
                .table_name
                .clone()
                .unwrap_or_else(|| record.name.clone());

            let mut multilingual_fields = IndexMap::new();
            let mut has_multilingual_fields = false;
            if let Some(multilingual) = self
                .document
                .multilingual
                .iter()
                .find(|multilingual| multilingual.name == record.name)
            {
                has_multilingual_fields = true;
                multilingual_fields = self.extract_fields(&multilingual.body)?;
            }

            let mut entity = Entity::new(&record.name, table_name);
            entity.fields = self.extract_fields(&record.body)?;
            entity.comment = record.doc.clone();
            entity.place_at = record.placeholder.clone();
            entity.has_multilingual_fields = has_multilingual_fields;
            entity.multilingual_fields = multilingual_fields;
            self.model.add_entity(entity)?;
        }

        // Any relationship pointing at User materializes the implicit
        // entity, unless the document declared its own.
        let user_referenced = self
            .document
            .relationships
            .iter()
            .any(|relationship| relationship.to.name.eq_ignore_ascii_case(USER));
        if user_referenced && !self.model.has_entity(USER) {
            trace!("materializing implicit User entity");
            self.model.add_entity(Entity::new(USER, USER_TABLE))?;
        }
        Ok(())
    }

    fn extract_fields(&self, body: &[FieldRecord]) -> BuildResult<IndexMap<String, Field>> {
        let mut fields = IndexMap::new();
        for record in body {
            let field_name = lower_first(&record.name);
            if field_name.eq_ignore_ascii_case("id") {
                // The generator owns the id column; a declared one is
                // dropped whatever its type says.
                trace!(field = %record.name, "dropping declared id field");
                continue;
            }
            if is_reserved_field_name(&field_name) {
                return Err(BuildError::illegal_name(format!(
                    "The name '{field_name}' is a reserved keyword and can not be used as entity field name."
                )));
            }
            let is_enum = self.model.enumeration(&record.field_type).is_some();
            if !is_enum && !self.type_accepted(&record.field_type) {
                return Err(BuildError::wrong_type(format!(
                    "The type '{}' doesn't exist for {}.",
                    record.field_type, self.database_type
                )));
            }
            let validations = self.extract_validations(record, is_enum)?;
            let field = Field {
                name: field_name.clone(),
                field_type: record.field_type.clone(),
                label: record.label.clone(),
                cmmod: record.cmmod.clone(),
                cmmodname: record.cmmodname.clone(),
                precision: record.precision.clone(),
                validations,
                comment: record.doc.clone(),
            };
            fields.insert(field_name, field);
        }
        Ok(fields)
    }

    fn extract_validations(
        &self,
        field: &FieldRecord,
        is_enum: bool,
    ) -> BuildResult<IndexMap<String, FieldValidation>> {
        let mut validations = IndexMap::new();
        for record in &field.validations {
            let applies = ValidationRule::parse(&record.key)
                .map(|rule| rule_applies(&field.field_type, rule, is_enum))
                .unwrap_or(false);
            if !applies {
                return Err(BuildError::wrong_validation(format!(
                    "The validation '{}' isn't supported for the type '{}'.",
                    record.key, field.field_type
                )));
            }
            let value = if record.constant {
                let constant = record.value.as_deref().unwrap_or_default();
                let resolved = self.document.constants.get(constant).ok_or_else(|| {
                    BuildError::wrong_validation(format!(
                        "The validation '{}' references the undeclared constant '{constant}'.",
                        record.key
                    ))
                })?;
                Some(resolved.clone())
            } else {
                record.value.clone()
            };
            validations.insert(
                record.key.clone(),
                FieldValidation::new(&record.key, value),
            );
        }
        Ok(validations)
    }

    pub(super) fn fill_hashsets(&mut self) -> BuildResult<()> {
        let mut grouped: IndexMap<String, Vec<HashsetLink>> = IndexMap::new();
        for record in &self.document.hashsets {
            for name in [&record.entity, &record.target.entity] {
                if is_reserved_class_name(name) {
                    return Err(BuildError::illegal_name(format!(
                        "The name '{name}' is a reserved keyword and can not be used as entity class name."
                    )));
                }
            }
            for name in [&record.entity, &record.target.entity] {
                if !self.model.has_entity(name) {
                    warn!(entity = %name, "hashset entry names an entity missing from the document");
                    return Err(BuildError::illegal_name(format!(
                        "The name '{name}' doesn't match with the entity class names available."
                    )));
                }
            }
            grouped
                .entry(record.entity.clone())
                .or_default()
                .push(HashsetLink {
                    target_entity: record.target.entity.clone(),
                    is_hashset: record.target.is_hashset,
                    is_object: record.target.is_object,
                    comment: record.doc.clone(),
                });
        }

        for entity in self.model.entities_mut() {
            entity.hashsets = Vec::new();
        }
        for (name, links) in grouped {
            if let Some(entity) = self.model.entity_mut(&name) {
                entity.hashsets = links;
            }
        }
        Ok(())
    }

    pub(super) fn fill_combo_lists(&mut self) -> BuildResult<()> {
        for record in &self.document.combo_lists {
            self.check_owning_entity(&record.entity, "Combolist")?;
            if let Some(entity) = self.model.entity_mut(&record.entity) {
                entity.combo_list = Some(ComboList {
                    key: record.key.clone(),
                    value: record.value.clone(),
                });
            }
        }
        Ok(())
    }

    pub(super) fn fill_templates(&mut self) -> BuildResult<()> {
        for record in &self.document.templates {
            self.check_owning_entity(&record.entity, "Template")?;
            if let Some(entity) = self.model.entity_mut(&record.entity) {
                entity.template = Some(TemplateSpec {
                    name: record.template.clone(),
                    file_name: record.file_name.clone(),
                    domain_group: record.domain_group.clone(),
                    ui_project: record.ui_project.clone(),
                    is_child: record.is_child,
                });
            }
        }
        Ok(())
    }

    /// Reserved-name and existence check shared by the combo-list and
    /// template phases.
    fn check_owning_entity(&self, name: &str, origin: &str) -> BuildResult<()> {
        if is_reserved_class_name(name) {
            return Err(BuildError::illegal_name(format!(
                "The name '{name}' is a reserved keyword and can not be used as entity class name."
            )));
        }
        if !self.model.has_entity(name) {
            warn!(entity = %name, origin, "entry names an entity missing from the document");
            return Err(BuildError::illegal_name(format!(
                "The name '{name}' doesn't match with the entity class names available."
            )));
        }
        Ok(())
    }
}

/// Lower only the first letter, leaving the rest of the name intact.
pub(super) fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lower_first() {
        assert_eq!(lower_first("FirstName"), "firstName");
        assert_eq!(lower_first("name"), "name");
        assert_eq!(lower_first(""), "");
    }
}
