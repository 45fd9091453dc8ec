//! Build failure taxonomy.
//!
//! Every way a document can be rejected maps to exactly one category here.
//! A failure is terminal for the build that raised it: no partial model is
//! ever returned, and the first failing phase stops the pipeline.

use thiserror::Error;

/// Result alias used throughout the builder and the model aggregate.
pub type BuildResult<T> = Result<T, BuildError>;

/// A terminal build failure, tagged with a category and carrying a message
/// meant to be shown to the author of the ADL document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// A required build argument (document, database dialect, application
    /// name for a microservice application) was not supplied.
    #[error("missing input: {0}")]
    MissingInput(String),

    /// A declared name collides with a reserved keyword, or a
    /// hashset/combo-list/template entry names an entity never declared.
    #[error("illegal name: {0}")]
    IllegalName(String),

    /// A field's declared type is neither a known enum nor accepted by the
    /// active database dialect.
    #[error("wrong type: {0}")]
    WrongType(String),

    /// A validation rule was attached to a field type that does not
    /// support it, or references an undeclared constant.
    #[error("wrong validation: {0}")]
    WrongValidation(String),

    /// A relationship originates from the implicit User entity.
    #[error("illegal association: {0}")]
    IllegalAssociation(String),

    /// A relationship references an entity absent from the model.
    #[error("undeclared entity: {0}")]
    UndeclaredEntity(String),

    /// An option is structurally disallowed for the current configuration.
    #[error("illegal option: {0}")]
    IllegalOption(String),

    /// An aggregate add-operation's validator rejected the candidate; the
    /// message aggregates every individual complaint.
    #[error("invalid object: {0}")]
    InvalidObject(String),
}

impl BuildError {
    /// Create a missing-input failure.
    pub fn missing_input(message: impl Into<String>) -> Self {
        Self::MissingInput(message.into())
    }

    /// Create an illegal-name failure.
    pub fn illegal_name(message: impl Into<String>) -> Self {
        Self::IllegalName(message.into())
    }

    /// Create a wrong-type failure.
    pub fn wrong_type(message: impl Into<String>) -> Self {
        Self::WrongType(message.into())
    }

    /// Create a wrong-validation failure.
    pub fn wrong_validation(message: impl Into<String>) -> Self {
        Self::WrongValidation(message.into())
    }

    /// Create an illegal-association failure.
    pub fn illegal_association(message: impl Into<String>) -> Self {
        Self::IllegalAssociation(message.into())
    }

    /// Create an undeclared-entity failure.
    pub fn undeclared_entity(message: impl Into<String>) -> Self {
        Self::UndeclaredEntity(message.into())
    }

    /// Create an illegal-option failure.
    pub fn illegal_option(message: impl Into<String>) -> Self {
        Self::IllegalOption(message.into())
    }

    /// Create an invalid-object failure.
    pub fn invalid_object(message: impl Into<String>) -> Self {
        Self::InvalidObject(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_category_and_message() {
        let err = BuildError::illegal_name("The name 'enum' is a reserved keyword");
        assert_eq!(
            err.to_string(),
            "illegal name: The name 'enum' is a reserved keyword"
        );
    }

    #[test]
    fn test_categories_are_matchable() {
        let err = BuildError::wrong_type("The type 'Blob' doesn't exist for cassandra");
        assert!(matches!(err, BuildError::WrongType(_)));
        assert!(!matches!(err, BuildError::WrongValidation(_)));
    }
}
