//! Generation option kinds and their closed value sets.
//!
//! Unary options are flags over a set of entities; binary options carry a
//! value drawn from a per-kind closed set. Two kinds take a free string
//! instead: `microservice` (the owning application's name) and
//! `angularSuffix` (an arbitrary suffix).

use std::fmt;

/// The closed set of unary option kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOptionKind {
    SkipClient,
    SkipServer,
    NoFluentMethod,
    Filter,
}

impl UnaryOptionKind {
    /// Every unary kind, in declaration-table order.
    pub const ALL: [UnaryOptionKind; 4] = [
        UnaryOptionKind::SkipClient,
        UnaryOptionKind::SkipServer,
        UnaryOptionKind::NoFluentMethod,
        UnaryOptionKind::Filter,
    ];

    /// The option name as declared in ADL.
    pub fn name(&self) -> &'static str {
        match self {
            UnaryOptionKind::SkipClient => "skipClient",
            UnaryOptionKind::SkipServer => "skipServer",
            UnaryOptionKind::NoFluentMethod => "noFluentMethod",
            UnaryOptionKind::Filter => "filter",
        }
    }
}

impl fmt::Display for UnaryOptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The closed set of binary option kinds.
///
/// `ALL` order is the enumeration order of the option table and is fixed:
/// the builder admits binary options kind by kind in this order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOptionKind {
    Dto,
    Service,
    Pagination,
    Microservice,
    SearchEngine,
    AngularSuffix,
    Features,
    AutoApproval,
    Approval,
}

impl BinaryOptionKind {
    /// Every binary kind, in option-table order.
    pub const ALL: [BinaryOptionKind; 9] = [
        BinaryOptionKind::Dto,
        BinaryOptionKind::Service,
        BinaryOptionKind::Pagination,
        BinaryOptionKind::Microservice,
        BinaryOptionKind::SearchEngine,
        BinaryOptionKind::AngularSuffix,
        BinaryOptionKind::Features,
        BinaryOptionKind::AutoApproval,
        BinaryOptionKind::Approval,
    ];

    /// The option name as declared in ADL.
    pub fn name(&self) -> &'static str {
        match self {
            BinaryOptionKind::Dto => "dto",
            BinaryOptionKind::Service => "service",
            BinaryOptionKind::Pagination => "pagination",
            BinaryOptionKind::Microservice => "microservice",
            BinaryOptionKind::SearchEngine => "searchEngine",
            BinaryOptionKind::AngularSuffix => "angularSuffix",
            BinaryOptionKind::Features => "features",
            BinaryOptionKind::AutoApproval => "autoapproval",
            BinaryOptionKind::Approval => "approval",
        }
    }

    /// Whether this kind carries a free string instead of a closed value.
    pub fn takes_free_value(&self) -> bool {
        matches!(
            self,
            BinaryOptionKind::Microservice | BinaryOptionKind::AngularSuffix
        )
    }

    /// The closed value set for this kind. Empty for free-valued kinds.
    pub fn allowed_values(&self) -> &'static [&'static str] {
        match self {
            BinaryOptionKind::Dto => &["mapstruct"],
            BinaryOptionKind::Service => &["serviceClass", "serviceImpl"],
            BinaryOptionKind::Pagination => &["pager", "pagination", "infinite-scroll"],
            BinaryOptionKind::SearchEngine => &["elasticsearch", "advancesearch", "columnsearch"],
            BinaryOptionKind::Features => &[
                "import",
                "export",
                "bulkapproval",
                "bulksubmit",
                "viewhistory",
            ],
            BinaryOptionKind::AutoApproval => &["makerchecker"],
            BinaryOptionKind::Approval => &["makerchecker"],
            BinaryOptionKind::Microservice | BinaryOptionKind::AngularSuffix => &[],
        }
    }

    /// Membership check: is `value` legal for this kind?
    pub fn value_exists(&self, value: &str) -> bool {
        self.takes_free_value() || self.allowed_values().contains(&value)
    }
}

impl fmt::Display for BinaryOptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(BinaryOptionKind::Dto, "mapstruct", true)]
    #[case(BinaryOptionKind::Dto, "handwritten", false)]
    #[case(BinaryOptionKind::Service, "serviceImpl", true)]
    #[case(BinaryOptionKind::Pagination, "infinite-scroll", true)]
    #[case(BinaryOptionKind::Pagination, "cursor", false)]
    #[case(BinaryOptionKind::SearchEngine, "elasticsearch", true)]
    #[case(BinaryOptionKind::Features, "viewhistory", true)]
    #[case(BinaryOptionKind::Approval, "makerchecker", true)]
    fn test_closed_value_sets(
        #[case] kind: BinaryOptionKind,
        #[case] value: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(kind.value_exists(value), expected);
    }

    #[test]
    fn test_free_valued_kinds_accept_anything() {
        assert!(BinaryOptionKind::Microservice.value_exists("storefront"));
        assert!(BinaryOptionKind::AngularSuffix.value_exists("Mgmt"));
    }

    #[test]
    fn test_all_order_is_table_order() {
        assert_eq!(BinaryOptionKind::ALL[0], BinaryOptionKind::Dto);
        assert_eq!(BinaryOptionKind::ALL[2], BinaryOptionKind::Pagination);
        assert_eq!(BinaryOptionKind::ALL.len(), 9);
    }

    #[test]
    fn test_unary_names() {
        let names: Vec<_> = UnaryOptionKind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(
            names,
            ["skipClient", "skipServer", "noFluentMethod", "filter"]
        );
    }
}
