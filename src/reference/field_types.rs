//! Field-type capability tables.
//!
//! Which declared field types exist, which database dialects accept them,
//! and which validation rules apply to each type. Enum-typed fields are not
//! listed here; they are resolved against the model's enum map first, and
//! only support the `required` rule.

use super::dialect::DatabaseType;

/// The closed set of built-in field types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldType {
    String,
    Integer,
    Long,
    BigDecimal,
    Double,
    Float,
    Boolean,
    LocalDate,
    ZonedDateTime,
    Instant,
    Blob,
    AnyBlob,
    ImageBlob,
    TextBlob,
    Uuid,
}

impl FieldType {
    /// Parse a declared type name. Returns `None` for unknown names,
    /// including enum names (resolved elsewhere).
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "String" => Some(FieldType::String),
            "Integer" => Some(FieldType::Integer),
            "Long" => Some(FieldType::Long),
            "BigDecimal" => Some(FieldType::BigDecimal),
            "Double" => Some(FieldType::Double),
            "Float" => Some(FieldType::Float),
            "Boolean" => Some(FieldType::Boolean),
            "LocalDate" => Some(FieldType::LocalDate),
            "ZonedDateTime" => Some(FieldType::ZonedDateTime),
            "Instant" => Some(FieldType::Instant),
            "Blob" => Some(FieldType::Blob),
            "AnyBlob" => Some(FieldType::AnyBlob),
            "ImageBlob" => Some(FieldType::ImageBlob),
            "TextBlob" => Some(FieldType::TextBlob),
            "UUID" => Some(FieldType::Uuid),
            _ => None,
        }
    }

    /// Whether this type is numeric (min/max apply).
    fn is_numeric(&self) -> bool {
        matches!(
            self,
            FieldType::Integer
                | FieldType::Long
                | FieldType::BigDecimal
                | FieldType::Double
                | FieldType::Float
        )
    }

    /// Whether this type is a binary blob (minbytes/maxbytes apply).
    fn is_blob(&self) -> bool {
        matches!(
            self,
            FieldType::Blob | FieldType::AnyBlob | FieldType::ImageBlob | FieldType::TextBlob
        )
    }

    /// Whether the given dialect can persist this type.
    pub fn available_in(&self, database_type: DatabaseType) -> bool {
        match database_type {
            DatabaseType::Sql | DatabaseType::Mongodb | DatabaseType::Couchbase => true,
            // Wide-column storage has no blob columns and no zoned/local
            // date mapping; timestamps go through Instant.
            DatabaseType::Cassandra => {
                !self.is_blob() && !matches!(self, FieldType::LocalDate | FieldType::ZonedDateTime)
            }
        }
    }
}

/// The closed set of validation rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValidationRule {
    Required,
    MinLength,
    MaxLength,
    Pattern,
    Min,
    Max,
    MinBytes,
    MaxBytes,
}

impl ValidationRule {
    /// Parse a declared rule name. Returns `None` for unknown names.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "required" => Some(ValidationRule::Required),
            "minlength" => Some(ValidationRule::MinLength),
            "maxlength" => Some(ValidationRule::MaxLength),
            "pattern" => Some(ValidationRule::Pattern),
            "min" => Some(ValidationRule::Min),
            "max" => Some(ValidationRule::Max),
            "minbytes" => Some(ValidationRule::MinBytes),
            "maxbytes" => Some(ValidationRule::MaxBytes),
            _ => None,
        }
    }

    /// The declared name of this rule.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationRule::Required => "required",
            ValidationRule::MinLength => "minlength",
            ValidationRule::MaxLength => "maxlength",
            ValidationRule::Pattern => "pattern",
            ValidationRule::Min => "min",
            ValidationRule::Max => "max",
            ValidationRule::MinBytes => "minbytes",
            ValidationRule::MaxBytes => "maxbytes",
        }
    }
}

/// Whether the dialect accepts the declared type name.
pub fn type_supported(database_type: DatabaseType, declared_type: &str) -> bool {
    FieldType::parse(declared_type)
        .map(|ty| ty.available_in(database_type))
        .unwrap_or(false)
}

/// Whether a validation rule applies to a field of the declared type.
///
/// `is_enum` marks fields whose type resolved to a declared enum; those only
/// support `required`. Unknown declared types support no rules at all, which
/// also covers free-typed gateway fields.
pub fn rule_applies(declared_type: &str, rule: ValidationRule, is_enum: bool) -> bool {
    if is_enum {
        return rule == ValidationRule::Required;
    }
    let Some(ty) = FieldType::parse(declared_type) else {
        return false;
    };
    match rule {
        ValidationRule::Required => true,
        ValidationRule::MinLength | ValidationRule::MaxLength | ValidationRule::Pattern => {
            ty == FieldType::String
        }
        ValidationRule::Min | ValidationRule::Max => ty.is_numeric(),
        ValidationRule::MinBytes | ValidationRule::MaxBytes => ty.is_blob(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_every_type_available_under_sql() {
        for name in [
            "String",
            "Integer",
            "Long",
            "BigDecimal",
            "Double",
            "Float",
            "Boolean",
            "LocalDate",
            "ZonedDateTime",
            "Instant",
            "Blob",
            "AnyBlob",
            "ImageBlob",
            "TextBlob",
            "UUID",
        ] {
            assert!(type_supported(DatabaseType::Sql, name), "{name}");
        }
    }

    #[rstest]
    #[case("Blob")]
    #[case("TextBlob")]
    #[case("LocalDate")]
    #[case("ZonedDateTime")]
    fn test_cassandra_rejects(#[case] name: &str) {
        assert!(!type_supported(DatabaseType::Cassandra, name));
    }

    #[test]
    fn test_cassandra_accepts_instant_and_uuid() {
        assert!(type_supported(DatabaseType::Cassandra, "Instant"));
        assert!(type_supported(DatabaseType::Cassandra, "UUID"));
    }

    #[test]
    fn test_unknown_type_unsupported() {
        assert!(!type_supported(DatabaseType::Sql, "Money"));
    }

    #[rstest]
    #[case("String", ValidationRule::MinLength, true)]
    #[case("String", ValidationRule::Min, false)]
    #[case("Integer", ValidationRule::Min, true)]
    #[case("Integer", ValidationRule::Pattern, false)]
    #[case("Blob", ValidationRule::MaxBytes, true)]
    #[case("Boolean", ValidationRule::Required, true)]
    #[case("Instant", ValidationRule::Max, false)]
    fn test_rule_applicability(
        #[case] ty: &str,
        #[case] rule: ValidationRule,
        #[case] expected: bool,
    ) {
        assert_eq!(rule_applies(ty, rule, false), expected);
    }

    #[test]
    fn test_enum_fields_only_support_required() {
        assert!(rule_applies("Language", ValidationRule::Required, true));
        assert!(!rule_applies("Language", ValidationRule::MinLength, true));
    }

    #[test]
    fn test_unknown_type_supports_no_rules() {
        assert!(!rule_applies("Money", ValidationRule::Required, false));
    }
}
