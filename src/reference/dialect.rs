//! Database dialects and application types.

use std::fmt;

/// The storage backend family an application targets.
///
/// The dialect decides which field types are admissible and whether certain
/// generation options are available at all (pagination is impossible under
/// the wide-column family).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DatabaseType {
    Sql,
    Mongodb,
    Cassandra,
    Couchbase,
}

impl DatabaseType {
    /// Parse a declared dialect name. Returns `None` for unknown names.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "sql" => Some(DatabaseType::Sql),
            "mongodb" => Some(DatabaseType::Mongodb),
            "cassandra" => Some(DatabaseType::Cassandra),
            "couchbase" => Some(DatabaseType::Couchbase),
            _ => None,
        }
    }

    /// The declared name of this dialect.
    pub fn as_str(&self) -> &'static str {
        match self {
            DatabaseType::Sql => "sql",
            DatabaseType::Mongodb => "mongodb",
            DatabaseType::Cassandra => "cassandra",
            DatabaseType::Couchbase => "couchbase",
        }
    }

    /// Whether this dialect belongs to the wide-column family.
    pub fn is_wide_column(&self) -> bool {
        matches!(self, DatabaseType::Cassandra)
    }
}

impl fmt::Display for DatabaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind of application being generated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ApplicationType {
    Monolith,
    Microservice,
    Gateway,
    Uaa,
}

impl ApplicationType {
    /// Parse a declared application type. Returns `None` for unknown names.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "monolith" => Some(ApplicationType::Monolith),
            "microservice" => Some(ApplicationType::Microservice),
            "gateway" => Some(ApplicationType::Gateway),
            "uaa" => Some(ApplicationType::Uaa),
            _ => None,
        }
    }

    /// The declared name of this application type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationType::Monolith => "monolith",
            ApplicationType::Microservice => "microservice",
            ApplicationType::Gateway => "gateway",
            ApplicationType::Uaa => "uaa",
        }
    }
}

impl fmt::Display for ApplicationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
