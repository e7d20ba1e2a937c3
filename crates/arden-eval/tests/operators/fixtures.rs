//! Shared values used across the operator tests

use arden_types::{ArdenTime, ArdenValue, TimedValue};

pub fn time(s: &str) -> ArdenTime {
    ArdenTime::parse(s).unwrap()
}

pub fn at(n: i64, s: &str) -> TimedValue {
    TimedValue::at(ArdenValue::number(n), time(s))
}

pub fn list(elements: &[&TimedValue]) -> TimedValue {
    TimedValue::list(elements.iter().map(|e| (*e).clone()))
}

pub fn numbers(values: &[i64]) -> TimedValue {
    TimedValue::list(values.iter().map(|n| TimedValue::number(*n)))
}

/// 5 at 1995-01-01
pub fn u() -> TimedValue {
    at(5, "1995-01-01")
}

/// 5 at 2000-01-01
pub fn v() -> TimedValue {
    at(5, "2000-01-01")
}

/// 5 at the time of `v`
pub fn w() -> TimedValue {
    TimedValue::with_primary_time(ArdenValue::number(5), v().primary_time())
}

/// 5 at 1990-01-01
pub fn x() -> TimedValue {
    at(5, "1990-01-01")
}

/// 3 at the time of `x`
pub fn y() -> TimedValue {
    TimedValue::with_primary_time(ArdenValue::number(3), x().primary_time())
}

/// 2 at 1990-01-03
pub fn z() -> TimedValue {
    at(2, "1990-01-03")
}
