//! Comparison Operators for Arden
//!
//! Implements: Equal, NotEqual, Less, LessOrEqual, Greater, GreaterOrEqual,
//! plus the ordering helpers the aggregation operators build on.
//! Values from different domains are never an error to compare: the
//! comparison is simply unknown.

use crate::operators::arithmetic::broadcast_binary;
use arden_types::{ArdenType, ArdenValue, TimedValue, Truth};
use std::cmp::Ordering;

/// Order two values of the same domain
///
/// Returns `None` for nulls, booleans, lists, and mixed domains.
pub fn arden_compare(left: &ArdenValue, right: &ArdenValue) -> Option<Ordering> {
    match (left, right) {
        (ArdenValue::Number(a), ArdenValue::Number(b)) => Some(a.cmp(b)),
        (ArdenValue::String(a), ArdenValue::String(b)) => Some(a.cmp(b)),
        (ArdenValue::Duration(a), ArdenValue::Duration(b)) => Some(a.cmp(b)),
        (ArdenValue::Time(a), ArdenValue::Time(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

/// Three-valued equality
///
/// Unknown if either side is unknown or the domains differ. Lists are equal
/// when they have the same length and all elements are equal.
pub fn arden_equal(left: &ArdenValue, right: &ArdenValue) -> Truth {
    match (left, right) {
        (ArdenValue::Null, _) | (_, ArdenValue::Null) => Truth::Unknown,
        (ArdenValue::Boolean(a), ArdenValue::Boolean(b)) => match (a.as_bool(), b.as_bool()) {
            (Some(a), Some(b)) => Truth::from(a == b),
            _ => Truth::Unknown,
        },
        (ArdenValue::List(a), ArdenValue::List(b)) => {
            if a.len() != b.len() {
                return Truth::False;
            }
            a.iter()
                .zip(b.iter())
                .fold(Truth::True, |acc, (x, y)| acc.and(arden_equal(x.value(), y.value())))
        }
        _ => arden_compare(left, right).map_or(Truth::Unknown, |o| Truth::from(o == Ordering::Equal)),
    }
}

/// The common domain of `values`, if every value belongs to it and it is `allowed`
pub fn common_domain<'a>(
    values: impl IntoIterator<Item = &'a ArdenValue>,
    allowed: impl Fn(&ArdenType) -> bool,
) -> Option<ArdenType> {
    let mut domain = None;
    for value in values {
        let ty = value.get_type();
        match domain {
            None if allowed(&ty) => domain = Some(ty),
            Some(d) if d == ty => {}
            _ => return None,
        }
    }
    domain
}

/// Check that `values` can be totally ordered against each other
pub fn mutually_ordered<'a>(values: impl IntoIterator<Item = &'a ArdenValue>) -> bool {
    common_domain(values, ArdenType::is_ordered).is_some()
}

fn compare_with(left: &TimedValue, right: &TimedValue, accept: fn(Ordering) -> bool) -> TimedValue {
    broadcast_binary(left, right, |a, b| match (a, b) {
        (ArdenValue::Null, _) | (_, ArdenValue::Null) => ArdenValue::Null,
        _ => arden_compare(a, b).map_or(ArdenValue::Null, |o| ArdenValue::boolean(accept(o))),
    })
}

/// `=` operator
pub fn equal(left: &TimedValue, right: &TimedValue) -> TimedValue {
    broadcast_binary(left, right, |a, b| ArdenValue::Boolean(arden_equal(a, b)))
}

/// `<>` operator
pub fn not_equal(left: &TimedValue, right: &TimedValue) -> TimedValue {
    broadcast_binary(left, right, |a, b| ArdenValue::Boolean(arden_equal(a, b).not()))
}

/// `<` operator
pub fn less(left: &TimedValue, right: &TimedValue) -> TimedValue {
    compare_with(left, right, |o| o == Ordering::Less)
}

/// `<=` operator
pub fn less_or_equal(left: &TimedValue, right: &TimedValue) -> TimedValue {
    compare_with(left, right, |o| o != Ordering::Greater)
}

/// `>` operator
pub fn greater(left: &TimedValue, right: &TimedValue) -> TimedValue {
    compare_with(left, right, |o| o == Ordering::Greater)
}

/// `>=` operator
pub fn greater_or_equal(left: &TimedValue, right: &TimedValue) -> TimedValue {
    compare_with(left, right, |o| o != Ordering::Less)
}
