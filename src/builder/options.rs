//! Option phases: unary, binary, and microservice injection.
//!
//! Runs last in the pipeline so that the injected microservice option can
//! scope itself to the full declared entity set.

use tracing::trace;

use super::ModelBuilder;
use crate::error::{BuildError, BuildResult};
use crate::model::{BinaryOption, ModelOption, UnaryOption};
use crate::reference::{ApplicationType, BinaryOptionKind, UnaryOptionKind};

impl ModelBuilder<'_> {
    pub(super) fn fill_options(&mut self) -> BuildResult<()> {
        self.fill_unary_options()?;
        self.fill_binary_options()?;
        if self.application_type == Some(ApplicationType::Microservice) {
            self.inject_microservice_option()?;
        }
        Ok(())
    }

    /// A unary option is admitted once per kind, and only when the document
    /// declares a non-empty target list for it.
    fn fill_unary_options(&mut self) -> BuildResult<()> {
        for kind in UnaryOptionKind::ALL {
            let targets = self.document.unary_option(kind);
            if targets.list.is_empty() {
                continue;
            }
            self.model.add_option(ModelOption::Unary(UnaryOption {
                kind,
                entity_names: targets.list.clone(),
                excluded_names: targets.excluded.clone(),
            }))?;
        }
        Ok(())
    }

    fn fill_binary_options(&mut self) -> BuildResult<()> {
        // Wide-column storage cannot page; reject before touching any
        // declared value, independent of entity scoping.
        if self.database_type.is_wide_column()
            && !self
                .document
                .binary_option(BinaryOptionKind::Pagination)
                .is_empty()
        {
            return Err(BuildError::illegal_option(format!(
                "Pagination isn't allowed when the app uses {}.",
                self.database_type
            )));
        }
        for kind in BinaryOptionKind::ALL {
            for (value, targets) in self.document.binary_option(kind) {
                trace!(option = %kind, value = %value, "admitting binary option");
                self.model.add_option(ModelOption::Binary(BinaryOption {
                    kind,
                    value: value.clone(),
                    entity_names: targets.list.clone(),
                    excluded_names: targets.excluded.clone(),
                }))?;
            }
        }
        Ok(())
    }

    /// Microservice applications carry their base name onto every declared
    /// entity as a binary microservice option.
    fn inject_microservice_option(&mut self) -> BuildResult<()> {
        let application_name = self.application_name.ok_or_else(|| {
            BuildError::missing_input(
                "An application name must be passed for microservice applications.",
            )
        })?;
        let entity_names = self
            .document
            .entities
            .iter()
            .map(|entity| entity.name.clone())
            .collect();
        self.model.add_option(ModelOption::Binary(BinaryOption {
            kind: BinaryOptionKind::Microservice,
            value: application_name.to_string(),
            entity_names,
            excluded_names: Vec::new(),
        }))
    }
}
