//! # Model Builder
//!
//! Consumes one intermediate [`Document`] and produces one validated
//! [`DomainModel`], or the first failure encountered. Phases run in a fixed
//! order because later phases resolve references against state committed by
//! earlier ones: enums before fields, entities before hashsets,
//! relationships, combo-lists and templates, and the full entity set before
//! option injection.
//!
//! All build state is scoped to the call: a [`ModelBuilder`] is constructed
//! fresh from [`BuildParams`], threads itself through every phase, and is
//! consumed when the model is returned. Nothing survives between builds.

mod entities;
mod options;
mod relationships;

use tracing::trace;

use crate::document::Document;
use crate::error::{BuildError, BuildResult};
use crate::model::{Application, DomainModel, Enumeration, Screen, ScreenKind};
use crate::reference::{
    self, ApplicationType, DatabaseType, is_reserved_class_name,
};

/// The implicit entity every application may reference without declaring.
const USER: &str = "User";

/// Table backing the implicit User entity.
const USER_TABLE: &str = "jhi_user";

/// Arguments for one build call.
///
/// The document and the database dialect are required; the application name
/// becomes required when the application type is microservice.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuildParams<'a> {
    pub document: Option<&'a Document>,
    pub database_type: Option<DatabaseType>,
    pub application_type: Option<ApplicationType>,
    pub application_name: Option<&'a str>,
    pub generator_version: Option<&'a str>,
}

/// One build call: parameters plus the model under construction.
pub struct ModelBuilder<'a> {
    document: &'a Document,
    database_type: DatabaseType,
    application_type: Option<ApplicationType>,
    application_name: Option<&'a str>,
    generator_version: Option<&'a str>,
    model: DomainModel,
}

impl<'a> ModelBuilder<'a> {
    /// Run every build phase over the document and return the completed
    /// model. The first failing phase aborts the build; no partial model is
    /// ever returned.
    pub fn build(params: BuildParams<'a>) -> BuildResult<DomainModel> {
        let (Some(document), Some(database_type)) = (params.document, params.database_type) else {
            return Err(BuildError::missing_input(
                "The parsed document and the database type must be passed.",
            ));
        };

        let mut builder = ModelBuilder {
            document,
            database_type,
            application_type: params.application_type,
            application_name: params.application_name,
            generator_version: params.generator_version,
            model: DomainModel::new(),
        };

        builder.fill_applications()?;
        builder.fill_enums()?;
        builder.fill_placeholders()?;
        builder.fill_entities()?;
        builder.fill_hashsets()?;
        builder.fill_relationships()?;
        builder.fill_screens()?;
        builder.fill_combo_lists()?;
        builder.fill_templates()?;
        builder.fill_options()?;

        Ok(builder.model)
    }

    /// Whether the active dialect accepts a declared field type. Gateways
    /// proxy rather than persist, so every type passes for them.
    fn type_accepted(&self, declared_type: &str) -> bool {
        self.application_type == Some(ApplicationType::Gateway)
            || reference::type_supported(self.database_type, declared_type)
    }

    fn fill_applications(&mut self) -> BuildResult<()> {
        trace!(count = self.document.applications.len(), "filling applications");
        for record in &self.document.applications {
            let config = &record.config;
            let application_type =
                parse_config_value(&config.application_type, ApplicationType::parse, "application type")?;
            let database_type =
                parse_config_value(&config.database_type, DatabaseType::parse, "database type")?;
            let application = Application::new(&config.base_name)
                .with_application_type(application_type)
                .with_database_type(database_type)
                .with_generator_version(self.generator_version.map(str::to_string));
            self.model.add_application(application)?;
        }
        Ok(())
    }

    fn fill_enums(&mut self) -> BuildResult<()> {
        trace!(count = self.document.enums.len(), "filling enums");
        for record in &self.document.enums {
            if is_reserved_class_name(&record.name) {
                return Err(BuildError::illegal_name(format!(
                    "The name '{}' is a reserved keyword and can not be used as enum class name.",
                    record.name
                )));
            }
            self.model.add_enum(
                Enumeration::new(&record.name, record.values.clone())
                    .with_comment(record.doc.clone()),
            )?;
        }
        Ok(())
    }

    fn fill_placeholders(&mut self) -> BuildResult<()> {
        for record in &self.document.placeholders {
            if is_reserved_class_name(&record.name) {
                return Err(BuildError::illegal_name(format!(
                    "The name '{}' is a reserved keyword and can not be used as placeholder name.",
                    record.name
                )));
            }
            self.model.set_placeholder(&record.name, &record.path);
            if record.is_default {
                self.model.set_placeholder("default", &record.path);
            }
        }
        Ok(())
    }

    fn fill_screens(&mut self) -> BuildResult<()> {
        let partitions = [
            (&self.document.screens.entity, ScreenKind::Entity),
            (&self.document.screens.transaction, ScreenKind::Transaction),
        ];
        for (records, kind) in partitions {
            for record in records {
                if is_reserved_class_name(&record.name) {
                    return Err(BuildError::illegal_name(format!(
                        "The name '{}' is a reserved keyword and can not be used as screen name.",
                        record.name
                    )));
                }
                self.model.add_screen(
                    Screen {
                        name: record.name.clone(),
                        comment: record.doc.clone(),
                    },
                    kind,
                );
            }
        }
        Ok(())
    }
}

fn parse_config_value<T>(
    declared: &Option<String>,
    parse: impl Fn(&str) -> Option<T>,
    what: &str,
) -> BuildResult<Option<T>> {
    match declared.as_deref() {
        None => Ok(None),
        Some(name) => parse(name).map(Some).ok_or_else(|| {
            BuildError::invalid_object(format!(
                "The application must be valid in order to be added. Errors: unknown {what} '{name}'"
            ))
        }),
    }
}
