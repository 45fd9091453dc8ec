//! Generation options held by the domain model.

use std::fmt;

use crate::reference::{BinaryOptionKind, UnaryOptionKind};

/// A flag applied to a set of entities, with no associated value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnaryOption {
    pub kind: UnaryOptionKind,
    pub entity_names: Vec<String>,
    pub excluded_names: Vec<String>,
}

/// A flag applied to a set of entities, carrying a value drawn from the
/// kind's closed value set (or a free string for the exempt kinds).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryOption {
    pub kind: BinaryOptionKind,
    pub value: String,
    pub entity_names: Vec<String>,
    pub excluded_names: Vec<String>,
}

/// Either kind of option, as stored in the model's option map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModelOption {
    Unary(UnaryOption),
    Binary(BinaryOption),
}

impl ModelOption {
    /// Primary key within the model's option map. Binary options of the
    /// same kind with different values are distinct options.
    pub fn key(&self) -> String {
        match self {
            ModelOption::Unary(option) => option.kind.name().to_string(),
            ModelOption::Binary(option) => format!("{}_{}", option.kind.name(), option.value),
        }
    }

    /// Entities the option applies to.
    pub fn entity_names(&self) -> &[String] {
        match self {
            ModelOption::Unary(option) => &option.entity_names,
            ModelOption::Binary(option) => &option.entity_names,
        }
    }

    /// Entities explicitly excluded.
    pub fn excluded_names(&self) -> &[String] {
        match self {
            ModelOption::Unary(option) => &option.excluded_names,
            ModelOption::Binary(option) => &option.excluded_names,
        }
    }
}

fn write_scope(f: &mut fmt::Formatter<'_>, entities: &[String], excluded: &[String]) -> fmt::Result {
    if !entities.is_empty() {
        write!(f, " {}", entities.join(", "))?;
    }
    if !excluded.is_empty() {
        write!(f, " except {}", excluded.join(", "))?;
    }
    Ok(())
}

impl fmt::Display for ModelOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelOption::Unary(option) => {
                f.write_str(option.kind.name())?;
                write_scope(f, &option.entity_names, &option.excluded_names)
            }
            ModelOption::Binary(option) => {
                f.write_str(option.kind.name())?;
                if !option.entity_names.is_empty() {
                    write!(f, " {}", option.entity_names.join(", "))?;
                }
                write!(f, " with {}", option.value)?;
                if !option.excluded_names.is_empty() {
                    write!(f, " except {}", option.excluded_names.join(", "))?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unary_display_and_key() {
        let option = ModelOption::Unary(UnaryOption {
            kind: UnaryOptionKind::SkipClient,
            entity_names: vec!["A".into(), "B".into()],
            excluded_names: vec!["C".into()],
        });
        assert_eq!(option.to_string(), "skipClient A, B except C");
        assert_eq!(option.key(), "skipClient");
    }

    #[test]
    fn test_binary_display_and_key() {
        let option = ModelOption::Binary(BinaryOption {
            kind: BinaryOptionKind::Dto,
            value: "mapstruct".into(),
            entity_names: vec!["A".into()],
            excluded_names: vec![],
        });
        assert_eq!(option.to_string(), "dto A with mapstruct");
        assert_eq!(option.key(), "dto_mapstruct");
    }

    #[test]
    fn test_binary_keys_differ_per_value() {
        let pager = ModelOption::Binary(BinaryOption {
            kind: BinaryOptionKind::Pagination,
            value: "pager".into(),
            entity_names: vec![],
            excluded_names: vec![],
        });
        let scroll = ModelOption::Binary(BinaryOption {
            kind: BinaryOptionKind::Pagination,
            value: "infinite-scroll".into(),
            entity_names: vec![],
            excluded_names: vec![],
        });
        assert_ne!(pager.key(), scroll.key());
    }
}
