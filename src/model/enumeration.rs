//! Enum declarations of the domain model.

use std::fmt;

/// A declared enumeration: a unique, non-reserved name and an ordered list
/// of literal values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Enumeration {
    pub name: String,
    pub values: Vec<String>,
    pub comment: Option<String>,
}

impl Enumeration {
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            values,
            comment: None,
        }
    }

    /// Attach a formatted doc comment.
    pub fn with_comment(mut self, comment: Option<String>) -> Self {
        self.comment = comment;
        self
    }
}

impl fmt::Display for Enumeration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(comment) = &self.comment {
            writeln!(f, "/** {comment} */")?;
        }
        writeln!(f, "enum {} {{", self.name)?;
        writeln!(f, "  {}", self.values.join(",\n  "))?;
        write!(f, "}}")
    }
}
