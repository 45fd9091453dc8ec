//! Reserved keyword sets.
//!
//! Class-level names (entities, enums, screens, placeholders) and field
//! names are checked against different sets: a generated entity becomes a
//! class in the target language, a field becomes a member and a column.
//! Comparison is case-insensitive, so `Enum` and `ENUM` are both rejected.

/// Keywords of the ADL grammar itself.
const ADL_KEYWORDS: &[&str] = &[
    "APPLICATION",
    "ENTITY",
    "ENUM",
    "RELATIONSHIP",
    "SCREEN",
    "TEMPLATE",
    "COMBOLIST",
    "PLACEHOLDER",
    "HASHSET",
    "TO",
    "WITH",
    "EXCEPT",
    "FOR",
    "ALL",
];

/// Keywords of the generated server language.
const JAVA_KEYWORDS: &[&str] = &[
    "ABSTRACT",
    "ASSERT",
    "BOOLEAN",
    "BREAK",
    "BYTE",
    "CASE",
    "CATCH",
    "CHAR",
    "CLASS",
    "CONST",
    "CONTINUE",
    "DEFAULT",
    "DO",
    "DOUBLE",
    "ELSE",
    "ENUM",
    "EXTENDS",
    "FINAL",
    "FINALLY",
    "FLOAT",
    "FOR",
    "GOTO",
    "IF",
    "IMPLEMENTS",
    "IMPORT",
    "INSTANCEOF",
    "INT",
    "INTERFACE",
    "LONG",
    "NATIVE",
    "NEW",
    "PACKAGE",
    "PRIVATE",
    "PROTECTED",
    "PUBLIC",
    "RETURN",
    "SHORT",
    "STATIC",
    "STRICTFP",
    "SUPER",
    "SWITCH",
    "SYNCHRONIZED",
    "THIS",
    "THROW",
    "THROWS",
    "TRANSIENT",
    "TRY",
    "VOID",
    "VOLATILE",
    "WHILE",
];

/// SQL words that cannot become column names.
const SQL_KEYWORDS: &[&str] = &[
    "ALTER",
    "AND",
    "CONSTRAINT",
    "CREATE",
    "DELETE",
    "DROP",
    "EXISTS",
    "FROM",
    "GROUP",
    "INDEX",
    "INSERT",
    "JOIN",
    "KEY",
    "NOT",
    "NULL",
    "OR",
    "ORDER",
    "SELECT",
    "TABLE",
    "UPDATE",
    "WHERE",
];

fn contains_ignore_case(set: &[&str], name: &str) -> bool {
    let upper = name.to_ascii_uppercase();
    set.contains(&upper.as_str())
}

/// Whether `name` may not be used as an entity, enum, screen or placeholder
/// name.
pub fn is_reserved_class_name(name: &str) -> bool {
    contains_ignore_case(ADL_KEYWORDS, name) || contains_ignore_case(JAVA_KEYWORDS, name)
}

/// Whether `name` may not be used as an entity field name.
pub fn is_reserved_field_name(name: &str) -> bool {
    contains_ignore_case(JAVA_KEYWORDS, name) || contains_ignore_case(SQL_KEYWORDS, name)
}
