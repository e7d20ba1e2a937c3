//! Arithmetic Operators for Arden
//!
//! Implements: Add, Subtract, Multiply, Divide over numbers, durations and
//! times. Operators broadcast over lists (`2 * (1,2)` is `(2,4)`); two lists
//! must have equal length. A result keeps a primary time only when both
//! operands carry the same one.

use arden_types::{ArdenDuration, ArdenTime, ArdenValue, TimedValue};
use rust_decimal::Decimal;

/// Primary time shared by two operands, if they agree
pub fn shared_time(left: &TimedValue, right: &TimedValue) -> Option<ArdenTime> {
    match (left.primary_time(), right.primary_time()) {
        (Some(a), Some(b)) if a == b => Some(a),
        _ => None,
    }
}

/// Apply a scalar operation element-wise across list operands
pub fn broadcast_binary<F>(left: &TimedValue, right: &TimedValue, op: F) -> TimedValue
where
    F: Fn(&ArdenValue, &ArdenValue) -> ArdenValue,
{
    broadcast_with(left, right, &op)
}

fn broadcast_with(
    left: &TimedValue,
    right: &TimedValue,
    op: &dyn Fn(&ArdenValue, &ArdenValue) -> ArdenValue,
) -> TimedValue {
    match (left.value(), right.value()) {
        (ArdenValue::List(a), ArdenValue::List(b)) => {
            if a.len() != b.len() {
                return TimedValue::null();
            }
            TimedValue::list(a.iter().zip(b.iter()).map(|(x, y)| broadcast_with(x, y, op)))
        }
        (ArdenValue::List(a), _) => TimedValue::list(a.iter().map(|x| broadcast_with(x, right, op))),
        (_, ArdenValue::List(b)) => TimedValue::list(b.iter().map(|y| broadcast_with(left, y, op))),
        (l, r) => TimedValue::with_primary_time(op(l, r), shared_time(left, right)),
    }
}

/// Scalar addition
pub fn add_values(left: &ArdenValue, right: &ArdenValue) -> ArdenValue {
    match (left, right) {
        (ArdenValue::Number(a), ArdenValue::Number(b)) => number_or_null(a.checked_add(*b)),
        (ArdenValue::Duration(a), ArdenValue::Duration(b)) => duration_or_null(a.checked_add(b)),
        (ArdenValue::Time(t), ArdenValue::Duration(d)) | (ArdenValue::Duration(d), ArdenValue::Time(t)) => {
            time_or_null(t.add_duration(d))
        }
        _ => ArdenValue::Null,
    }
}

/// Scalar subtraction
pub fn subtract_values(left: &ArdenValue, right: &ArdenValue) -> ArdenValue {
    match (left, right) {
        (ArdenValue::Number(a), ArdenValue::Number(b)) => number_or_null(a.checked_sub(*b)),
        (ArdenValue::Duration(a), ArdenValue::Duration(b)) => duration_or_null(a.checked_add(&b.negated())),
        (ArdenValue::Time(t), ArdenValue::Duration(d)) => time_or_null(t.sub_duration(d)),
        (ArdenValue::Time(a), ArdenValue::Time(b)) => duration_or_null(a.duration_since(b)),
        _ => ArdenValue::Null,
    }
}

/// Scalar multiplication
pub fn multiply_values(left: &ArdenValue, right: &ArdenValue) -> ArdenValue {
    match (left, right) {
        (ArdenValue::Number(a), ArdenValue::Number(b)) => number_or_null(a.checked_mul(*b)),
        (ArdenValue::Duration(d), ArdenValue::Number(n)) | (ArdenValue::Number(n), ArdenValue::Duration(d)) => {
            scale_duration(d, |a| a.checked_mul(*n))
        }
        _ => ArdenValue::Null,
    }
}

/// Scalar division; division by zero is null
pub fn divide_values(left: &ArdenValue, right: &ArdenValue) -> ArdenValue {
    match (left, right) {
        (ArdenValue::Number(a), ArdenValue::Number(b)) => number_or_null(a.checked_div(*b)),
        (ArdenValue::Duration(d), ArdenValue::Number(n)) => scale_duration(d, |a| a.checked_div(*n)),
        (ArdenValue::Duration(a), ArdenValue::Duration(b)) => {
            number_or_null(a.as_seconds().zip(b.as_seconds()).and_then(|(a, b)| a.checked_div(b)))
        }
        _ => ArdenValue::Null,
    }
}

/// `+` operator
pub fn add(left: &TimedValue, right: &TimedValue) -> TimedValue {
    broadcast_binary(left, right, add_values)
}

/// `-` operator
pub fn subtract(left: &TimedValue, right: &TimedValue) -> TimedValue {
    broadcast_binary(left, right, subtract_values)
}

/// `*` operator
pub fn multiply(left: &TimedValue, right: &TimedValue) -> TimedValue {
    broadcast_binary(left, right, multiply_values)
}

/// `/` operator
pub fn divide(left: &TimedValue, right: &TimedValue) -> TimedValue {
    broadcast_binary(left, right, divide_values)
}

fn scale_duration(d: &ArdenDuration, f: impl FnOnce(Decimal) -> Option<Decimal>) -> ArdenValue {
    match f(d.amount()) {
        Some(amount) => ArdenValue::Duration(d.map_amount(|_| amount)),
        None => ArdenValue::Null,
    }
}

fn number_or_null(n: Option<Decimal>) -> ArdenValue {
    n.map_or(ArdenValue::Null, ArdenValue::Number)
}

fn duration_or_null(d: Option<ArdenDuration>) -> ArdenValue {
    d.map_or(ArdenValue::Null, ArdenValue::Duration)
}

fn time_or_null(t: Option<ArdenTime>) -> ArdenValue {
    t.map_or(ArdenValue::Null, ArdenValue::Time)
}
