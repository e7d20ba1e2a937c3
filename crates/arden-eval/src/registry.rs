//! Aggregation operator metadata
//!
//! Describes, per aggregation operator, which qualifiers, INDEX and USING
//! forms it accepts and since when. A front end validates expressions
//! against this table; [`crate::ArdenEngine`] re-checks it before dispatch.

use crate::config::ArdenVersion;
use crate::operators::aggregate::Selector;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

/// Aggregation and selection operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggregateOp {
    Count,
    Exist,
    Sum,
    Average,
    Median,
    Variance,
    Stddev,
    Minimum,
    Maximum,
    First,
    Last,
    Earliest,
    Latest,
    Any,
    All,
    No,
}

impl AggregateOp {
    /// Canonical keyword
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::Count => "COUNT",
            Self::Exist => "EXIST",
            Self::Sum => "SUM",
            Self::Average => "AVERAGE",
            Self::Median => "MEDIAN",
            Self::Variance => "VARIANCE",
            Self::Stddev => "STDDEV",
            Self::Minimum => "MINIMUM",
            Self::Maximum => "MAXIMUM",
            Self::First => "FIRST",
            Self::Last => "LAST",
            Self::Earliest => "EARLIEST",
            Self::Latest => "LATEST",
            Self::Any => "ANY",
            Self::All => "ALL",
            Self::No => "NO",
        }
    }

    /// Selection rule behind the INDEX form, if any
    pub const fn selector(&self) -> Option<Selector> {
        match self {
            Self::Minimum => Some(Selector::Minimum),
            Self::Maximum => Some(Selector::Maximum),
            Self::Earliest => Some(Selector::Earliest),
            Self::Latest => Some(Selector::Latest),
            _ => None,
        }
    }
}

impl fmt::Display for AggregateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Truth qualifiers for the quantifiers (`ANY IsTrue`, `ALL AreTrue`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Qualifier {
    IsTrue,
    AreTrue,
}

impl Qualifier {
    pub const fn number(&self) -> GrammaticalNumber {
        match self {
            Self::IsTrue => GrammaticalNumber::Singular,
            Self::AreTrue => GrammaticalNumber::Plural,
        }
    }
}

impl fmt::Display for Qualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IsTrue => write!(f, "IsTrue"),
            Self::AreTrue => write!(f, "AreTrue"),
        }
    }
}

/// Grammatical number of an aggregator keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrammaticalNumber {
    Singular,
    Plural,
}

impl GrammaticalNumber {
    /// The qualifier that agrees with this number
    pub const fn qualifier(&self) -> Qualifier {
        match self {
            Self::Singular => Qualifier::IsTrue,
            Self::Plural => Qualifier::AreTrue,
        }
    }
}

/// How an operator derives the primary time of its result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeRule {
    /// Result never has a time
    None,
    /// Time shared by all contributing elements
    CommonTime,
    /// Latest time among elements tied on the determining value
    LatestOfTies,
    /// Time of the selected element
    Selected,
}

/// Metadata for one aggregation operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorInfo {
    pub op: AggregateOp,
    /// Canonical keyword
    pub keyword: &'static str,
    /// Alternative spellings
    pub aliases: &'static [&'static str],
    /// Set for quantifiers that take a truth qualifier
    pub number: Option<GrammaticalNumber>,
    pub time_rule: TimeRule,
    pub supports_index: bool,
    pub supports_using: bool,
    /// First version that knows the operator
    pub since: ArdenVersion,
}

impl OperatorInfo {
    fn new(op: AggregateOp, time_rule: TimeRule) -> Self {
        Self {
            op,
            keyword: op.keyword(),
            aliases: &[],
            number: None,
            time_rule,
            supports_index: false,
            supports_using: false,
            since: ArdenVersion::V1,
        }
    }

    fn aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }

    fn quantifier(mut self, number: GrammaticalNumber) -> Self {
        self.number = Some(number);
        self
    }

    fn selectable(mut self) -> Self {
        self.supports_index = true;
        self.supports_using = true;
        self
    }

    fn since(mut self, version: ArdenVersion) -> Self {
        self.since = version;
        self
    }

    /// The qualifier this operator accepts, if any
    pub fn accepted_qualifier(&self) -> Option<Qualifier> {
        self.number.map(|n| n.qualifier())
    }
}

/// Registry of aggregation operator metadata
#[derive(Debug, Clone, Default)]
pub struct OperatorRegistry {
    operators: HashMap<AggregateOp, OperatorInfo>,
    keywords: HashMap<&'static str, AggregateOp>,
}

static STANDARD: Lazy<OperatorRegistry> = Lazy::new(OperatorRegistry::with_standard_operators);

impl OperatorRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every standard operator
    pub fn with_standard_operators() -> Self {
        use AggregateOp::{
            All, Any, Average, Count, Earliest, Exist, First, Last, Latest, Maximum, Median, Minimum, No,
            Stddev, Sum, Variance,
        };

        let mut registry = Self::new();
        registry.register(OperatorInfo::new(Count, TimeRule::None));
        registry.register(OperatorInfo::new(Exist, TimeRule::CommonTime).aliases(&["EXISTS"]));
        registry.register(OperatorInfo::new(Sum, TimeRule::CommonTime));
        registry.register(OperatorInfo::new(Average, TimeRule::CommonTime).aliases(&["AVG"]));
        registry.register(OperatorInfo::new(Median, TimeRule::LatestOfTies));
        registry.register(OperatorInfo::new(Variance, TimeRule::CommonTime));
        registry.register(OperatorInfo::new(Stddev, TimeRule::CommonTime));
        registry.register(
            OperatorInfo::new(Minimum, TimeRule::LatestOfTies)
                .aliases(&["MIN"])
                .selectable(),
        );
        registry.register(
            OperatorInfo::new(Maximum, TimeRule::LatestOfTies)
                .aliases(&["MAX"])
                .selectable(),
        );
        registry.register(OperatorInfo::new(First, TimeRule::Selected));
        registry.register(OperatorInfo::new(Last, TimeRule::Selected));
        registry.register(
            OperatorInfo::new(Earliest, TimeRule::Selected)
                .selectable()
                .since(ArdenVersion::V2),
        );
        registry.register(
            OperatorInfo::new(Latest, TimeRule::Selected)
                .selectable()
                .since(ArdenVersion::V2),
        );
        registry.register(OperatorInfo::new(Any, TimeRule::None).quantifier(GrammaticalNumber::Singular));
        registry.register(OperatorInfo::new(All, TimeRule::None).quantifier(GrammaticalNumber::Plural));
        registry.register(OperatorInfo::new(No, TimeRule::None).quantifier(GrammaticalNumber::Singular));
        registry
    }

    /// The shared standard registry
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Register or replace an operator's metadata
    pub fn register(&mut self, info: OperatorInfo) {
        self.keywords.insert(info.keyword, info.op);
        for &alias in info.aliases {
            self.keywords.insert(alias, info.op);
        }
        self.operators.insert(info.op, info);
    }

    pub fn get(&self, op: AggregateOp) -> Option<&OperatorInfo> {
        self.operators.get(&op)
    }

    /// Look up an operator by keyword or alias, ignoring case
    pub fn lookup(&self, keyword: &str) -> Option<&OperatorInfo> {
        let upper = keyword.trim().to_ascii_uppercase();
        self.keywords.get(upper.as_str()).and_then(|op| self.operators.get(op))
    }

    pub fn contains(&self, op: AggregateOp) -> bool {
        self.operators.contains_key(&op)
    }

    pub fn len(&self) -> usize {
        self.operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }
}
