//! Logical Operators for Arden
//!
//! Implements: And, Or, Not, Any, All, No over three-valued (Kleene) logic.
//!
//! Truth Tables:
//!
//! AND:
//! | A       | B       | A AND B |
//! |---------|---------|---------|
//! | TRUE    | TRUE    | TRUE    |
//! | TRUE    | FALSE   | FALSE   |
//! | TRUE    | NULL    | NULL    |
//! | FALSE   | any     | FALSE   |
//! | NULL    | NULL    | NULL    |
//!
//! OR:
//! | A       | B       | A OR B  |
//! |---------|---------|---------|
//! | TRUE    | any     | TRUE    |
//! | FALSE   | FALSE   | FALSE   |
//! | FALSE   | NULL    | NULL    |
//! | NULL    | NULL    | NULL    |
//!
//! Anything that is not a boolean (numbers, strings, the null marker) enters
//! logic as NULL.

use crate::operators::arithmetic::broadcast_binary;
use arden_types::{ArdenValue, TimedValue, Truth};

/// Coerce a value into boolean context
pub fn to_truth(value: &ArdenValue) -> Truth {
    match value {
        ArdenValue::Boolean(t) => *t,
        _ => Truth::Unknown,
    }
}

/// `AND` operator
pub fn and(left: &TimedValue, right: &TimedValue) -> TimedValue {
    broadcast_binary(left, right, |a, b| {
        ArdenValue::Boolean(to_truth(a).and(to_truth(b)))
    })
}

/// `OR` operator
pub fn or(left: &TimedValue, right: &TimedValue) -> TimedValue {
    broadcast_binary(left, right, |a, b| {
        ArdenValue::Boolean(to_truth(a).or(to_truth(b)))
    })
}

/// `NOT` operator, element-wise over lists
pub fn not(operand: &TimedValue) -> TimedValue {
    match operand.value() {
        ArdenValue::List(list) => TimedValue::list(list.iter().map(not)),
        value => TimedValue::with_primary_time(
            ArdenValue::Boolean(to_truth(value).not()),
            operand.primary_time(),
        ),
    }
}

/// `ANY`: true if some element is true
///
/// The empty list is false.
pub fn any(source: &TimedValue) -> TimedValue {
    let truth = source
        .elements()
        .iter()
        .fold(Truth::False, |acc, e| acc.or(to_truth(e.value())));
    TimedValue::truth(truth)
}

/// `ALL`: true if every element is true
///
/// The empty list is true.
pub fn all(source: &TimedValue) -> TimedValue {
    let truth = source
        .elements()
        .iter()
        .fold(Truth::True, |acc, e| acc.and(to_truth(e.value())));
    TimedValue::truth(truth)
}

/// `NO`: true if no element is true
///
/// The empty list is true.
pub fn no(source: &TimedValue) -> TimedValue {
    let truth = source
        .elements()
        .iter()
        .fold(Truth::False, |acc, e| acc.or(to_truth(e.value())))
        .not();
    TimedValue::truth(truth)
}
