//! Application configuration records of the domain model.

use std::fmt;

use crate::reference::{ApplicationType, DatabaseType};

/// One generated application, keyed by base name.
///
/// Built from the document's application configuration with the generator
/// version stamped in by the builder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Application {
    pub base_name: String,
    pub application_type: Option<ApplicationType>,
    pub database_type: Option<DatabaseType>,
    pub generator_version: Option<String>,
}

impl Application {
    pub fn new(base_name: impl Into<String>) -> Self {
        Self {
            base_name: base_name.into(),
            application_type: None,
            database_type: None,
            generator_version: None,
        }
    }

    pub fn with_application_type(mut self, application_type: Option<ApplicationType>) -> Self {
        self.application_type = application_type;
        self
    }

    pub fn with_database_type(mut self, database_type: Option<DatabaseType>) -> Self {
        self.database_type = database_type;
        self
    }

    pub fn with_generator_version(mut self, generator_version: Option<String>) -> Self {
        self.generator_version = generator_version;
        self
    }
}

impl fmt::Display for Application {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "application {{")?;
        writeln!(f, "  config {{")?;
        writeln!(f, "    baseName {}", self.base_name)?;
        if let Some(application_type) = self.application_type {
            writeln!(f, "    applicationType {application_type}")?;
        }
        if let Some(database_type) = self.database_type {
            writeln!(f, "    databaseType {database_type}")?;
        }
        if let Some(version) = &self.generator_version {
            writeln!(f, "    generatorVersion {version}")?;
        }
        writeln!(f, "  }}")?;
        write!(f, "}}")
    }
}
