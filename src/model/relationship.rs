//! Relationships between entities.

use std::fmt;

/// Multiplicity classification of a relationship.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cardinality {
    OneToOne,
    OneToMany,
    ManyToOne,
    ManyToMany,
}

impl Cardinality {
    /// Parse the declared dashed form, e.g. `one-to-many`.
    pub fn parse(declared: &str) -> Option<Self> {
        match declared {
            "one-to-one" => Some(Cardinality::OneToOne),
            "one-to-many" => Some(Cardinality::OneToMany),
            "many-to-one" => Some(Cardinality::ManyToOne),
            "many-to-many" => Some(Cardinality::ManyToMany),
            _ => None,
        }
    }

    /// Canonical capitalized-camel form used by the generator.
    pub fn as_str(&self) -> &'static str {
        match self {
            Cardinality::OneToOne => "OneToOne",
            Cardinality::OneToMany => "OneToMany",
            Cardinality::ManyToOne => "ManyToOne",
            Cardinality::ManyToMany => "ManyToMany",
        }
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved relationship between two admitted entities.
///
/// Endpoints are stored as validated entity names keying into the owning
/// model's entity map; the destination may be the implicit `User` entity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Relationship {
    pub cardinality: Cardinality,
    pub from: String,
    pub to: String,
    pub injected_field_in_from: Option<String>,
    pub injected_field_in_to: Option<String>,
    pub required_in_from: bool,
    pub required_in_to: bool,
    pub comment_in_from: Option<String>,
    pub comment_in_to: Option<String>,
    /// Join columns resolved from the foreign-key table; empty when no
    /// entry matched.
    pub columns: Vec<String>,
}

impl Relationship {
    /// Primary key within the model's relationship map.
    pub fn key(&self) -> String {
        format!("{}_{}_{}", self.cardinality, self.from, self.to)
    }
}

fn side(f: &mut fmt::Formatter<'_>, name: &str, injected: &Option<String>, required: bool) -> fmt::Result {
    f.write_str(name)?;
    if let Some(field) = injected {
        write!(f, "{{{field}")?;
        if required {
            f.write_str(" required")?;
        }
        f.write_str("}")?;
    }
    Ok(())
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "relationship {} {{", self.cardinality)?;
        f.write_str("  ")?;
        side(f, &self.from, &self.injected_field_in_from, self.required_in_from)?;
        f.write_str(" to ")?;
        side(f, &self.to, &self.injected_field_in_to, self.required_in_to)?;
        write!(f, "\n}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_cardinalities() {
        assert_eq!(Cardinality::parse("one-to-one"), Some(Cardinality::OneToOne));
        assert_eq!(Cardinality::parse("one-to-many"), Some(Cardinality::OneToMany));
        assert_eq!(Cardinality::parse("many-to-one"), Some(Cardinality::ManyToOne));
        assert_eq!(Cardinality::parse("many-to-many"), Some(Cardinality::ManyToMany));
        assert_eq!(Cardinality::parse("one2many"), None);
    }

    #[test]
    fn test_display_with_injected_fields() {
        let rel = Relationship {
            cardinality: Cardinality::OneToMany,
            from: "Owner".into(),
            to: "Car".into(),
            injected_field_in_from: Some("car".into()),
            injected_field_in_to: Some("owner".into()),
            required_in_from: false,
            required_in_to: true,
            comment_in_from: None,
            comment_in_to: None,
            columns: vec![],
        };
        assert_eq!(
            rel.to_string(),
            "relationship OneToMany {\n  Owner{car} to Car{owner required}\n}"
        );
        assert_eq!(rel.key(), "OneToMany_Owner_Car");
    }
}
