//! Entities, fields, and their per-entity attachments.
//!
//! An [`Entity`] is created by the entity phase of the build and then
//! mutated in place by later phases: hashset links, combo-lists and template
//! descriptors all attach after initial admission.

use std::fmt;

use indexmap::IndexMap;

/// A validation rule carried by a field, with its resolved value.
///
/// Values declared by constant reference are already substituted by the time
/// a `FieldValidation` exists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldValidation {
    pub name: String,
    pub value: Option<String>,
}

impl FieldValidation {
    pub fn new(name: impl Into<String>, value: Option<String>) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl fmt::Display for FieldValidation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}({})", self.name, value),
            None => f.write_str(&self.name),
        }
    }
}

/// A single field of an entity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    /// Declared type: a built-in type name or a declared enum name.
    pub field_type: String,
    pub label: Option<String>,
    pub cmmod: Option<String>,
    pub cmmodname: Option<String>,
    pub precision: Option<String>,
    /// Rule name → validation, in declaration order.
    pub validations: IndexMap<String, FieldValidation>,
    pub comment: Option<String>,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.field_type)?;
        for validation in self.validations.values() {
            write!(f, " {validation}")?;
        }
        Ok(())
    }
}

/// An associative link attached to an entity outside the relationship model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashsetLink {
    pub target_entity: String,
    pub is_hashset: bool,
    pub is_object: bool,
    pub comment: Option<String>,
}

/// Key/value descriptor backing a combo-list on an entity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComboList {
    pub key: String,
    pub value: String,
}

/// Template descriptor attached to an entity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplateSpec {
    pub name: String,
    pub file_name: String,
    pub domain_group: String,
    pub ui_project: String,
    pub is_child: bool,
}

/// A first-class data type of the generated application.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entity {
    pub name: String,
    pub table_name: String,
    /// Field name → field, in declaration order.
    pub fields: IndexMap<String, Field>,
    pub comment: Option<String>,
    /// Placeholder this entity is generated under, if any.
    pub place_at: Option<String>,
    pub has_multilingual_fields: bool,
    pub multilingual_fields: IndexMap<String, Field>,
    pub hashsets: Vec<HashsetLink>,
    pub combo_list: Option<ComboList>,
    pub template: Option<TemplateSpec>,
}

impl Entity {
    pub fn new(name: impl Into<String>, table_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table_name: table_name.into(),
            fields: IndexMap::new(),
            comment: None,
            place_at: None,
            has_multilingual_fields: false,
            multilingual_fields: IndexMap::new(),
            hashsets: Vec::new(),
            combo_list: None,
            template: None,
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(comment) = &self.comment {
            writeln!(f, "/** {comment} */")?;
        }
        write!(f, "entity {} ({})", self.name, self.table_name)?;
        if self.fields.is_empty() {
            return Ok(());
        }
        writeln!(f, " {{")?;
        for field in self.fields.values() {
            if let Some(comment) = &field.comment {
                writeln!(f, "  /** {comment} */")?;
            }
            writeln!(f, "  {field}")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str, field_type: &str) -> Field {
        Field {
            name: name.into(),
            field_type: field_type.into(),
            ..Field::default()
        }
    }

    #[test]
    fn test_field_display_with_validations() {
        let mut f = field("name", "String");
        f.validations
            .insert("required".into(), FieldValidation::new("required", None));
        f.validations.insert(
            "minlength".into(),
            FieldValidation::new("minlength", Some("3".into())),
        );
        assert_eq!(f.to_string(), "name String required minlength(3)");
    }

    #[test]
    fn test_entity_display_without_fields() {
        let user = Entity::new("User", "jhi_user");
        assert_eq!(user.to_string(), "entity User (jhi_user)");
    }

    #[test]
    fn test_entity_display_with_fields() {
        let mut entity = Entity::new("Car", "car");
        entity.fields.insert("brand".into(), field("brand", "String"));
        assert_eq!(
            entity.to_string(),
            "entity Car (car) {\n  brand String\n}"
        );
    }
}
