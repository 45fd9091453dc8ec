//! Intermediate-document input types.
//!
//! The grammar parser (an external collaborator) tokenizes ADL text and
//! produces one [`Document`] per compilation. Everything in here is plain,
//! loosely structured data: names are uninterpreted strings, cross-references
//! are unresolved, and doc comments arrive already formatted. The builder is
//! the only consumer.
//!
//! Binary option declarations are reached through
//! [`Document::binary_option`], a typed accessor over a closed set of option
//! kinds; there is no string-keyed dynamic lookup.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;

use crate::reference::{BinaryOptionKind, UnaryOptionKind};

/// Target lists for one option declaration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OptionTargets {
    /// Entities the option applies to.
    pub list: Vec<String>,
    /// Entities explicitly excluded.
    pub excluded: Vec<String>,
}

/// Declared values of one binary option, each with its target lists,
/// in declaration order.
pub type BinaryOptionTable = IndexMap<String, OptionTargets>;

/// One application declaration.
#[derive(Clone, Debug, Default)]
pub struct ApplicationRecord {
    pub config: ApplicationConfig,
}

/// The configuration block of an application declaration.
#[derive(Clone, Debug, Default)]
pub struct ApplicationConfig {
    pub base_name: String,
    pub application_type: Option<String>,
    pub database_type: Option<String>,
}

/// One enum declaration.
#[derive(Clone, Debug, Default)]
pub struct EnumRecord {
    pub name: String,
    pub values: Vec<String>,
    pub doc: Option<String>,
}

/// One placeholder declaration.
#[derive(Clone, Debug, Default)]
pub struct PlaceholderRecord {
    pub name: String,
    pub path: String,
    pub is_default: bool,
}

/// One entity declaration with its field body.
#[derive(Clone, Debug, Default)]
pub struct EntityRecord {
    pub name: String,
    /// Declared table name; defaults to the entity name when absent.
    pub table_name: Option<String>,
    pub doc: Option<String>,
    /// Placeholder this entity is generated under, if any.
    pub placeholder: Option<String>,
    pub body: Vec<FieldRecord>,
}

/// One field declaration inside an entity or multilingual body.
#[derive(Clone, Debug, Default)]
pub struct FieldRecord {
    pub name: String,
    /// Declared type name: a built-in type or a declared enum.
    pub field_type: String,
    pub label: Option<String>,
    pub cmmod: Option<String>,
    pub cmmodname: Option<String>,
    pub precision: Option<String>,
    pub validations: Vec<ValidationRecord>,
    pub doc: Option<String>,
}

/// One validation rule attached to a field declaration.
#[derive(Clone, Debug, Default)]
pub struct ValidationRecord {
    pub key: String,
    pub value: Option<String>,
    /// Whether `value` names a constant to be resolved at build time.
    pub constant: bool,
}

/// One side of a relationship declaration.
#[derive(Clone, Debug, Default)]
pub struct RelationshipSide {
    pub name: String,
    pub injected_field: Option<String>,
    pub required: bool,
    pub doc: Option<String>,
}

/// One relationship declaration.
#[derive(Clone, Debug, Default)]
pub struct RelationshipRecord {
    /// Declared cardinality, e.g. `one-to-many`.
    pub cardinality: String,
    pub from: RelationshipSide,
    pub to: RelationshipSide,
}

/// One entry of the foreign-key table.
#[derive(Clone, Debug, Default)]
pub struct ForeignKeyRecord {
    pub from: String,
    pub to: String,
    pub columns: Vec<String>,
}

/// Multilingual field set targeting one entity by name.
#[derive(Clone, Debug, Default)]
pub struct MultilingualRecord {
    pub name: String,
    pub body: Vec<FieldRecord>,
}

/// The target half of a hashset declaration.
#[derive(Clone, Debug, Default)]
pub struct HashsetTarget {
    pub entity: String,
    pub is_hashset: bool,
    pub is_object: bool,
}

/// One hashset link declaration.
#[derive(Clone, Debug, Default)]
pub struct HashsetRecord {
    /// Owning entity name.
    pub entity: String,
    pub target: HashsetTarget,
    pub doc: Option<String>,
}

/// One combo-list declaration.
#[derive(Clone, Debug, Default)]
pub struct ComboListRecord {
    /// Owning entity name.
    pub entity: String,
    pub key: String,
    pub value: String,
}

/// One template declaration.
#[derive(Clone, Debug, Default)]
pub struct TemplateRecord {
    /// Owning entity name.
    pub entity: String,
    pub template: String,
    pub file_name: String,
    pub domain_group: String,
    pub ui_project: String,
    pub is_child: bool,
}

/// One screen declaration.
#[derive(Clone, Debug, Default)]
pub struct ScreenRecord {
    pub name: String,
    pub doc: Option<String>,
}

/// Screen declarations, partitioned by kind.
#[derive(Clone, Debug, Default)]
pub struct ScreenRecords {
    pub entity: Vec<ScreenRecord>,
    pub transaction: Vec<ScreenRecord>,
}

/// The parsed, pre-validated intermediate representation of one ADL
/// compilation, as handed over by the grammar parser.
#[derive(Clone, Debug, Default)]
pub struct Document {
    pub applications: Vec<ApplicationRecord>,
    pub enums: Vec<EnumRecord>,
    pub placeholders: Vec<PlaceholderRecord>,
    pub entities: Vec<EntityRecord>,
    pub relationships: Vec<RelationshipRecord>,
    pub foreign_keys: Vec<ForeignKeyRecord>,
    /// Constant name → value, for validation values declared by reference.
    pub constants: FxHashMap<String, String>,
    pub multilingual: Vec<MultilingualRecord>,
    pub hashsets: Vec<HashsetRecord>,
    pub combo_lists: Vec<ComboListRecord>,
    pub templates: Vec<TemplateRecord>,
    pub screens: ScreenRecords,

    // Unary option declarations, one table per kind.
    pub skip_client: OptionTargets,
    pub skip_server: OptionTargets,
    pub no_fluent_method: OptionTargets,
    pub filter: OptionTargets,

    // Binary option declarations, one table per kind.
    pub dto: BinaryOptionTable,
    pub service: BinaryOptionTable,
    pub pagination: BinaryOptionTable,
    pub microservice: BinaryOptionTable,
    pub search_engine: BinaryOptionTable,
    pub angular_suffix: BinaryOptionTable,
    pub features: BinaryOptionTable,
    pub auto_approval: BinaryOptionTable,
    pub approval: BinaryOptionTable,
}

impl Document {
    /// Target lists declared for a unary option kind.
    pub fn unary_option(&self, kind: UnaryOptionKind) -> &OptionTargets {
        match kind {
            UnaryOptionKind::SkipClient => &self.skip_client,
            UnaryOptionKind::SkipServer => &self.skip_server,
            UnaryOptionKind::NoFluentMethod => &self.no_fluent_method,
            UnaryOptionKind::Filter => &self.filter,
        }
    }

    /// Value table declared for a binary option kind.
    pub fn binary_option(&self, kind: BinaryOptionKind) -> &BinaryOptionTable {
        match kind {
            BinaryOptionKind::Dto => &self.dto,
            BinaryOptionKind::Service => &self.service,
            BinaryOptionKind::Pagination => &self.pagination,
            BinaryOptionKind::Microservice => &self.microservice,
            BinaryOptionKind::SearchEngine => &self.search_engine,
            BinaryOptionKind::AngularSuffix => &self.angular_suffix,
            BinaryOptionKind::Features => &self.features,
            BinaryOptionKind::AutoApproval => &self.auto_approval,
            BinaryOptionKind::Approval => &self.approval,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_accessors_cover_every_kind() {
        let mut doc = Document::default();
        doc.pagination.insert(
            "infinite-scroll".into(),
            OptionTargets {
                list: vec!["Post".into()],
                excluded: vec![],
            },
        );
        doc.filter.list.push("Post".into());

        for kind in BinaryOptionKind::ALL {
            // Every kind resolves to a table; only pagination is populated.
            let table = doc.binary_option(kind);
            assert_eq!(table.is_empty(), kind != BinaryOptionKind::Pagination);
        }
        for kind in UnaryOptionKind::ALL {
            let targets = doc.unary_option(kind);
            assert_eq!(targets.list.is_empty(), kind != UnaryOptionKind::Filter);
        }
    }
}
