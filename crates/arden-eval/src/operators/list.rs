//! List and Sequence Operators for Arden
//!
//! Implements: list construction, concatenation (`,`), SEQTO, REVERSE,
//! EXTRACT CHARACTERS, STRING, and element indexing (`L[i]`).

use arden_types::{ArdenValue, TimedValue};
use rust_decimal::prelude::ToPrimitive;
use smallvec::SmallVec;

/// Build a list from the given elements, as written
pub fn list_of(elements: impl IntoIterator<Item = TimedValue>) -> TimedValue {
    TimedValue::list(elements)
}

/// The `,` operator
///
/// Lists on either side contribute their elements, so `(1,2),3` is
/// `(1,2,3)`. Nesting deeper than one level is kept.
pub fn concat(left: &TimedValue, right: &TimedValue) -> TimedValue {
    TimedValue::list(left.elements().iter().chain(right.elements()).cloned())
}

/// Longest sequence `SEQTO` will build
pub const MAX_SEQUENCE_LENGTH: u64 = 1 << 20;

/// `from SEQTO to`
///
/// Both bounds must be whole numbers, otherwise the result is null.
/// Reversed bounds give the empty list; equal bounds a one-element list.
/// A sequence longer than [`MAX_SEQUENCE_LENGTH`] is null.
pub fn seqto(from: &TimedValue, to: &TimedValue) -> TimedValue {
    let (Some(from), Some(to)) = (integral_bound(from.value()), integral_bound(to.value())) else {
        return TimedValue::null();
    };
    if from <= to && to.abs_diff(from) >= MAX_SEQUENCE_LENGTH {
        return TimedValue::null();
    }
    TimedValue::list((from..=to).map(TimedValue::number))
}

fn integral_bound(value: &ArdenValue) -> Option<i64> {
    match value {
        ArdenValue::Number(n) if n.fract().is_zero() => n.to_i64(),
        _ => None,
    }
}

/// `REVERSE`
///
/// Each element keeps its own primary time. A scalar becomes a one-element
/// list.
pub fn reverse(source: &TimedValue) -> TimedValue {
    TimedValue::list(source.elements().iter().rev().cloned())
}

/// `EXTRACT CHARACTERS`
///
/// Every element must be a string; they are joined and split into
/// one-character strings.
pub fn extract_characters(source: &TimedValue) -> TimedValue {
    let mut characters = Vec::new();
    for element in source.elements() {
        let Some(s) = element.value().as_string() else {
            return TimedValue::null();
        };
        characters.extend(s.chars().map(|c| TimedValue::string(c.to_string())));
    }
    TimedValue::list(characters)
}

/// `STRING`: concatenate a list of strings into one
pub fn string_of(source: &TimedValue) -> TimedValue {
    let mut joined = String::new();
    for element in source.elements() {
        match element.value().as_string() {
            Some(s) => joined.push_str(s),
            None => return TimedValue::null(),
        }
    }
    TimedValue::string(joined)
}

/// Element access `source[index]`
///
/// `index` may be a single position, a list of positions, or nested lists
/// of positions, which are flattened. Positions are 1-based. A position
/// that is not a whole number in range yields null in its slot only.
/// A scalar index returns the element itself rather than a list.
pub fn element(source: &TimedValue, index: &TimedValue) -> TimedValue {
    let elements = source.elements();
    if !index.is_list() {
        return select_position(elements, index.value());
    }

    let mut positions: SmallVec<[&ArdenValue; 8]> = SmallVec::new();
    flatten_positions(index, &mut positions);
    TimedValue::list(positions.into_iter().map(|p| select_position(elements, p)))
}

fn flatten_positions<'a>(index: &'a TimedValue, out: &mut SmallVec<[&'a ArdenValue; 8]>) {
    match index.value() {
        ArdenValue::List(list) => {
            for nested in list.iter() {
                flatten_positions(nested, out);
            }
        }
        value => out.push(value),
    }
}

fn select_position(elements: &[TimedValue], position: &ArdenValue) -> TimedValue {
    integral_bound(position)
        .and_then(|p| usize::try_from(p).ok())
        .and_then(|p| p.checked_sub(1))
        .and_then(|i| elements.get(i))
        .cloned()
        .unwrap_or_else(TimedValue::null)
}
