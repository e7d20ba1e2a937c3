//! Arden Value types - runtime representation of all Arden values
//!
//! Every scalar datum travels as a [`TimedValue`]: the value itself plus an
//! optional primary time recording when it was observed or became true.
//! Lists carry no primary time of their own; each element keeps its own.

use crate::system_types::ArdenType;
use crate::temporal::{ArdenDuration, ArdenTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Truth
// ============================================================================

/// A three-valued boolean
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Truth {
    False,
    Unknown,
    True,
}

impl Truth {
    /// Kleene conjunction: false dominates, then unknown
    pub fn and(self, other: Self) -> Self {
        match (self, other) {
            (Self::False, _) | (_, Self::False) => Self::False,
            (Self::True, Self::True) => Self::True,
            _ => Self::Unknown,
        }
    }

    /// Kleene disjunction: true dominates, then unknown
    pub fn or(self, other: Self) -> Self {
        match (self, other) {
            (Self::True, _) | (_, Self::True) => Self::True,
            (Self::False, Self::False) => Self::False,
            _ => Self::Unknown,
        }
    }

    /// Kleene negation: unknown stays unknown
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        match self {
            Self::True => Self::False,
            Self::False => Self::True,
            Self::Unknown => Self::Unknown,
        }
    }

    pub fn is_true(self) -> bool {
        self == Self::True
    }

    pub fn is_false(self) -> bool {
        self == Self::False
    }

    pub fn is_unknown(self) -> bool {
        self == Self::Unknown
    }

    /// Collapse to a two-valued boolean, if known
    pub fn as_bool(self) -> Option<bool> {
        match self {
            Self::True => Some(true),
            Self::False => Some(false),
            Self::Unknown => None,
        }
    }
}

impl From<bool> for Truth {
    fn from(value: bool) -> Self {
        if value { Self::True } else { Self::False }
    }
}

impl From<Option<bool>> for Truth {
    fn from(value: Option<bool>) -> Self {
        value.map_or(Self::Unknown, Self::from)
    }
}

impl fmt::Display for Truth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::True => write!(f, "TRUE"),
            Self::False => write!(f, "FALSE"),
            Self::Unknown => write!(f, "NULL"),
        }
    }
}

// ============================================================================
// ArdenValue
// ============================================================================

/// The primary value type for Arden runtime values.
///
/// `Null` is the "no value" marker. It is distinct from
/// `Boolean(Truth::Unknown)`, though logic operators treat both as unknown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum ArdenValue {
    /// Null value (represents missing/unknown)
    Null,
    /// Three-valued boolean
    Boolean(Truth),
    /// Arbitrary precision decimal
    Number(Decimal),
    /// String value
    String(String),
    /// Length of time
    Duration(ArdenDuration),
    /// Absolute point in time
    Time(ArdenTime),
    /// Ordered list of timed values
    List(ArdenList),
}

impl ArdenValue {
    /// Check if this value is the null marker
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Check if this value is null or an unknown boolean
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Null | Self::Boolean(Truth::Unknown))
    }

    /// Get the domain of this value
    pub fn get_type(&self) -> ArdenType {
        match self {
            Self::Null => ArdenType::Null,
            Self::Boolean(_) => ArdenType::Boolean,
            Self::Number(_) => ArdenType::Number,
            Self::String(_) => ArdenType::String,
            Self::Duration(_) => ArdenType::Duration,
            Self::Time(_) => ArdenType::Time,
            Self::List(_) => ArdenType::List,
        }
    }

    pub fn as_truth(&self) -> Option<Truth> {
        match self {
            Self::Boolean(t) => Some(*t),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<Decimal> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_duration(&self) -> Option<&ArdenDuration> {
        match self {
            Self::Duration(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_time(&self) -> Option<ArdenTime> {
        match self {
            Self::Time(t) => Some(*t),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&ArdenList> {
        match self {
            Self::List(l) => Some(l),
            _ => None,
        }
    }

    /// Check if this value is a whole number
    pub fn is_integral(&self) -> bool {
        matches!(self, Self::Number(n) if n.fract().is_zero())
    }

    pub fn number(value: impl Into<Decimal>) -> Self {
        Self::Number(value.into())
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    pub fn boolean(value: bool) -> Self {
        Self::Boolean(Truth::from(value))
    }
}

impl From<Truth> for ArdenValue {
    fn from(value: Truth) -> Self {
        Self::Boolean(value)
    }
}

impl From<ArdenTime> for ArdenValue {
    fn from(value: ArdenTime) -> Self {
        Self::Time(value)
    }
}

impl From<ArdenDuration> for ArdenValue {
    fn from(value: ArdenDuration) -> Self {
        Self::Duration(value)
    }
}

impl From<ArdenList> for ArdenValue {
    fn from(value: ArdenList) -> Self {
        Self::List(value)
    }
}

impl fmt::Display for ArdenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "NULL"),
            Self::Boolean(t) => write!(f, "{}", t),
            Self::Number(n) => write!(f, "{}", n.normalize()),
            Self::String(s) => write!(f, "\"{}\"", s),
            Self::Duration(d) => write!(f, "{}", d),
            Self::Time(t) => write!(f, "{}", t),
            Self::List(l) => write!(f, "{}", l),
        }
    }
}

// ============================================================================
// TimedValue
// ============================================================================

/// A value together with its optional primary time
///
/// This is the unit every operator consumes and produces. The primary time is
/// fixed at construction; derived values are built afresh with a computed
/// time rather than mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "TimedValueRepr")]
pub struct TimedValue {
    value: ArdenValue,
    primary_time: Option<ArdenTime>,
}

/// Wire form of [`TimedValue`], normalised through
/// [`TimedValue::with_primary_time`] on the way in
#[derive(Deserialize)]
struct TimedValueRepr {
    value: ArdenValue,
    #[serde(default)]
    primary_time: Option<ArdenTime>,
}

impl From<TimedValueRepr> for TimedValue {
    fn from(repr: TimedValueRepr) -> Self {
        Self::with_primary_time(repr.value, repr.primary_time)
    }
}

impl TimedValue {
    /// A value without a primary time
    pub fn new(value: impl Into<ArdenValue>) -> Self {
        Self {
            value: value.into(),
            primary_time: None,
        }
    }

    /// A value observed at `time`
    ///
    /// Lists never carry a primary time, so the time is dropped for them.
    pub fn at(value: impl Into<ArdenValue>, time: ArdenTime) -> Self {
        Self::with_primary_time(value, Some(time))
    }

    /// A value with a derived primary time
    pub fn with_primary_time(value: impl Into<ArdenValue>, time: Option<ArdenTime>) -> Self {
        let value = value.into();
        let primary_time = if matches!(value, ArdenValue::List(_)) { None } else { time };
        Self { value, primary_time }
    }

    pub fn null() -> Self {
        Self::new(ArdenValue::Null)
    }

    pub fn number(value: impl Into<Decimal>) -> Self {
        Self::new(ArdenValue::number(value))
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::new(ArdenValue::string(value))
    }

    pub fn boolean(value: bool) -> Self {
        Self::new(ArdenValue::boolean(value))
    }

    pub fn truth(value: Truth) -> Self {
        Self::new(ArdenValue::Boolean(value))
    }

    pub fn time(value: ArdenTime) -> Self {
        Self::new(ArdenValue::Time(value))
    }

    pub fn duration(value: ArdenDuration) -> Self {
        Self::new(ArdenValue::Duration(value))
    }

    /// A list of the given elements
    pub fn list(elements: impl IntoIterator<Item = TimedValue>) -> Self {
        Self::new(ArdenValue::List(elements.into_iter().collect()))
    }

    /// The empty list
    pub fn empty_list() -> Self {
        Self::new(ArdenValue::List(ArdenList::new()))
    }

    pub fn value(&self) -> &ArdenValue {
        &self.value
    }

    pub fn primary_time(&self) -> Option<ArdenTime> {
        self.primary_time
    }

    pub fn into_value(self) -> ArdenValue {
        self.value
    }

    pub fn into_parts(self) -> (ArdenValue, Option<ArdenTime>) {
        (self.value, self.primary_time)
    }

    pub fn is_null(&self) -> bool {
        self.value.is_null()
    }

    pub fn is_unknown(&self) -> bool {
        self.value.is_unknown()
    }

    pub fn is_list(&self) -> bool {
        matches!(self.value, ArdenValue::List(_))
    }

    /// The elements an operator sees: a list's elements, or a scalar as a
    /// one-element slice
    pub fn elements(&self) -> &[TimedValue] {
        match &self.value {
            ArdenValue::List(list) => &list.elements,
            _ => std::slice::from_ref(self),
        }
    }

    /// The `TIME` operator: the primary time as a value
    ///
    /// Unknown when there is no primary time. Lists map element-wise.
    pub fn time_of(&self) -> TimedValue {
        match &self.value {
            ArdenValue::List(list) => TimedValue::list(list.iter().map(TimedValue::time_of)),
            _ => match self.primary_time {
                Some(t) => TimedValue::at(ArdenValue::Time(t), t),
                None => TimedValue::null(),
            },
        }
    }
}

impl From<ArdenValue> for TimedValue {
    fn from(value: ArdenValue) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for TimedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

// ============================================================================
// Collection Types
// ============================================================================

/// Arden List - ordered collection of timed values
///
/// Lists are ordered and may contain duplicates and nulls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArdenList {
    /// List elements
    pub elements: Vec<TimedValue>,
}

impl ArdenList {
    /// Create a new empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a list from elements
    pub fn from_elements(elements: Vec<TimedValue>) -> Self {
        Self { elements }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TimedValue> {
        self.elements.iter()
    }

    pub fn first(&self) -> Option<&TimedValue> {
        self.elements.first()
    }

    pub fn last(&self) -> Option<&TimedValue> {
        self.elements.last()
    }

    pub fn push(&mut self, element: TimedValue) {
        self.elements.push(element);
    }

    pub fn into_elements(self) -> Vec<TimedValue> {
        self.elements
    }
}

impl FromIterator<TimedValue> for ArdenList {
    fn from_iter<I: IntoIterator<Item = TimedValue>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ArdenList {
    type Item = TimedValue;
    type IntoIter = std::vec::IntoIter<TimedValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl fmt::Display for ArdenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // A one-element list prints with a leading comma to set it apart
        // from a parenthesised scalar.
        if self.elements.len() == 1 {
            return write!(f, "(,{})", self.elements[0]);
        }
        write!(f, "(")?;
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", element)?;
        }
        write!(f, ")")
    }
}
