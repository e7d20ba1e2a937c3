//! Aggregate and Selection Operators for Arden
//!
//! Implements: COUNT, EXIST, SUM, AVERAGE, MEDIAN, VARIANCE, STDDEV,
//! MINIMUM, MAXIMUM, FIRST, LAST, EARLIEST, LATEST and their INDEX forms.
//!
//! Every operator accepts a list or a scalar (a one-element list). Results
//! get a freshly derived primary time under one of three rules:
//!
//! - algebraic aggregates take the time all contributors share
//! - MEDIAN, MINIMUM and MAXIMUM take the latest time among the elements
//!   tied on the determining value
//! - FIRST, LAST, EARLIEST and LATEST take the selected element's time;
//!   EARLIEST and LATEST resolve time ties by first occurrence

use crate::operators::comparison::{arden_compare, common_domain, mutually_ordered};
use arden_types::{ArdenDuration, ArdenTime, ArdenType, ArdenValue, TimedValue};
use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use std::cmp::Ordering;

/// A `USING <expr> OF IT` projection, applied to each element
pub type Projection<'a> = &'a dyn Fn(&TimedValue) -> TimedValue;

/// Selection rules that have an INDEX form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selector {
    Minimum,
    Maximum,
    Earliest,
    Latest,
}

// ============================================================================
// Time derivation
// ============================================================================

/// Algebraic rule: the primary time shared by every contributor
///
/// Absent when any contributor lacks a time, the times disagree, or there
/// are no contributors.
fn common_time<'a>(contributors: impl IntoIterator<Item = &'a TimedValue>) -> Option<ArdenTime> {
    let mut iter = contributors.into_iter();
    let first = iter.next()?.primary_time()?;
    for element in iter {
        if element.primary_time() != Some(first) {
            return None;
        }
    }
    Some(first)
}

/// Order rule: the latest primary time among elements tied on a value
fn latest_time_of_ties<'a>(tied: impl IntoIterator<Item = &'a TimedValue>) -> Option<ArdenTime> {
    tied.into_iter().filter_map(TimedValue::primary_time).max()
}

/// Among tied candidates, the first one holding the latest primary time
fn latest_of_ties(elements: &[TimedValue], tied: &[usize]) -> Option<usize> {
    let mut chosen: Option<usize> = None;
    for &i in tied {
        match chosen {
            Some(c) if elements[i].primary_time() <= elements[c].primary_time() => {}
            _ => chosen = Some(i),
        }
    }
    chosen
}

// ============================================================================
// Cardinality
// ============================================================================

/// COUNT: number of elements, nulls included
///
/// The result never has a primary time.
pub fn count(source: &TimedValue) -> TimedValue {
    TimedValue::number(source.elements().len() as u64)
}

/// EXIST: true if any element is not null
///
/// Carries the time shared by the non-null elements.
pub fn exist(source: &TimedValue) -> TimedValue {
    let present: Vec<&TimedValue> = source.elements().iter().filter(|e| !e.is_null()).collect();
    let time = common_time(present.iter().copied());
    TimedValue::with_primary_time(ArdenValue::boolean(!present.is_empty()), time)
}

// ============================================================================
// Algebraic aggregates
// ============================================================================

/// SUM of numbers or durations; the empty list sums to 0
pub fn sum(source: &TimedValue) -> TimedValue {
    let elements = source.elements();
    if elements.is_empty() {
        return TimedValue::number(0);
    }
    let summable = |t: &ArdenType| matches!(t, ArdenType::Number | ArdenType::Duration);
    let value = match common_domain(elements.iter().map(TimedValue::value), summable) {
        Some(ArdenType::Number) => {
            number_values(elements).map_or(ArdenValue::Null, |ns| number_or_null(checked_sum(&ns)))
        }
        Some(ArdenType::Duration) => duration_sum(elements).map_or(ArdenValue::Null, ArdenValue::Duration),
        _ => ArdenValue::Null,
    };
    algebraic_result(value, elements)
}

/// AVERAGE of numbers, durations or times
pub fn average(source: &TimedValue) -> TimedValue {
    let elements = source.elements();
    let refs: Vec<&TimedValue> = elements.iter().collect();
    algebraic_result(mean(&refs), elements)
}

/// VARIANCE: sample variance, at least two numbers
pub fn variance(source: &TimedValue) -> TimedValue {
    let elements = source.elements();
    let value = number_values(elements)
        .and_then(|ns| sample_variance(&ns))
        .map_or(ArdenValue::Null, ArdenValue::Number);
    algebraic_result(value, elements)
}

/// STDDEV: sample standard deviation, at least two numbers
pub fn stddev(source: &TimedValue) -> TimedValue {
    let elements = source.elements();
    let value = number_values(elements)
        .and_then(|ns| sample_variance(&ns))
        .and_then(|v| v.to_f64())
        .and_then(|v| Decimal::from_f64(v.sqrt()))
        .map_or(ArdenValue::Null, ArdenValue::Number);
    algebraic_result(value, elements)
}

fn algebraic_result(value: ArdenValue, elements: &[TimedValue]) -> TimedValue {
    if value.is_null() {
        return TimedValue::null();
    }
    TimedValue::with_primary_time(value, common_time(elements))
}

fn number_values(elements: &[TimedValue]) -> Option<Vec<Decimal>> {
    elements.iter().map(|e| e.value().as_number()).collect()
}

fn checked_sum(values: &[Decimal]) -> Option<Decimal> {
    values.iter().try_fold(Decimal::ZERO, |acc, n| acc.checked_add(*n))
}

fn duration_sum<'a>(elements: impl IntoIterator<Item = &'a TimedValue>) -> Option<ArdenDuration> {
    let mut iter = elements.into_iter();
    let first = *iter.next()?.value().as_duration()?;
    iter.try_fold(first, |acc, e| acc.checked_add(e.value().as_duration()?))
}

fn number_or_null(n: Option<Decimal>) -> ArdenValue {
    n.map_or(ArdenValue::Null, ArdenValue::Number)
}

/// Arithmetic mean of numbers, durations or times; null on mixed domains
fn mean(elements: &[&TimedValue]) -> ArdenValue {
    let Some(n) = Decimal::from_usize(elements.len()).filter(|n| !n.is_zero()) else {
        return ArdenValue::Null;
    };
    let values = elements.iter().map(|e| e.value());
    match common_domain(values, ArdenType::is_quantitative) {
        Some(ArdenType::Number) => {
            let ns: Option<Vec<Decimal>> = elements.iter().map(|e| e.value().as_number()).collect();
            number_or_null(ns.and_then(|ns| checked_sum(&ns)).and_then(|s| s.checked_div(n)))
        }
        Some(ArdenType::Duration) => match duration_sum(elements.iter().copied()) {
            Some(total) => total
                .amount()
                .checked_div(n)
                .map_or(ArdenValue::Null, |amount| ArdenValue::Duration(total.map_amount(|_| amount))),
            None => ArdenValue::Null,
        },
        Some(ArdenType::Time) => mean_time(elements).map_or(ArdenValue::Null, ArdenValue::Time),
        _ => ArdenValue::Null,
    }
}

/// Mean of times, as the first time plus the mean offset from it
fn mean_time(elements: &[&TimedValue]) -> Option<ArdenTime> {
    let times: Vec<ArdenTime> = elements.iter().map(|e| e.value().as_time()).collect::<Option<_>>()?;
    let base = times.first()?.as_millis();
    let offsets: Option<Vec<i64>> = times.iter().map(|t| t.as_millis().checked_sub(base)).collect();
    let total: i128 = offsets?.into_iter().map(i128::from).sum();
    let offset = i64::try_from(total / times.len() as i128).ok()?;
    ArdenTime::from_millis(base.checked_add(offset)?)
}

fn sample_variance(values: &[Decimal]) -> Option<Decimal> {
    if values.len() < 2 {
        return None;
    }
    let n = Decimal::from_usize(values.len())?;
    let mean = checked_sum(values)?.checked_div(n)?;
    let squares = values.iter().try_fold(Decimal::ZERO, |acc, v| {
        let d = v.checked_sub(mean)?;
        acc.checked_add(d.checked_mul(d)?)
    })?;
    squares.checked_div(n - Decimal::ONE)
}

// ============================================================================
// Order aggregates
// ============================================================================

/// MEDIAN of numbers, durations or times
///
/// With an even count the two middle values are averaged. When the
/// determining value is shared by several elements the result takes the
/// latest of their times; an average of two distinct middle values takes
/// the time the two share, if any.
pub fn median(source: &TimedValue) -> TimedValue {
    let elements = source.elements();
    if common_domain(elements.iter().map(TimedValue::value), ArdenType::is_quantitative).is_none() {
        return TimedValue::null();
    }

    let mut sorted: Vec<&TimedValue> = elements.iter().collect();
    sorted.sort_by(|a, b| arden_compare(a.value(), b.value()).unwrap_or(Ordering::Equal));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        return tied_median(elements, sorted[mid]);
    }
    let (lower, upper) = (sorted[mid - 1], sorted[mid]);
    if arden_compare(lower.value(), upper.value()) == Some(Ordering::Equal) {
        return tied_median(elements, upper);
    }
    let value = mean(&[lower, upper]);
    if value.is_null() {
        return TimedValue::null();
    }
    TimedValue::with_primary_time(value, common_time([lower, upper]))
}

fn tied_median(elements: &[TimedValue], determining: &TimedValue) -> TimedValue {
    let tied = elements
        .iter()
        .filter(|e| arden_compare(e.value(), determining.value()) == Some(Ordering::Equal));
    TimedValue::with_primary_time(determining.value().clone(), latest_time_of_ties(tied))
}

/// MINIMUM, optionally ordered by a projection
///
/// Returns the original element. Ties go to the latest primary time.
pub fn minimum(source: &TimedValue, using: Option<Projection<'_>>) -> TimedValue {
    selected(source, Selector::Minimum, using)
}

/// MAXIMUM, optionally ordered by a projection
///
/// Returns the original element. Ties go to the latest primary time.
pub fn maximum(source: &TimedValue, using: Option<Projection<'_>>) -> TimedValue {
    selected(source, Selector::Maximum, using)
}

fn extremum_position(elements: &[TimedValue], want: Ordering, using: Option<Projection<'_>>) -> Option<usize> {
    let keys = sort_keys(elements, using);
    common_domain(keys.iter(), ArdenType::is_quantitative)?;

    let mut best = keys.first()?;
    for key in &keys[1..] {
        if arden_compare(key, best) == Some(want) {
            best = key;
        }
    }
    let tied: Vec<usize> = keys
        .iter()
        .enumerate()
        .filter(|(_, k)| arden_compare(k, best) == Some(Ordering::Equal))
        .map(|(i, _)| i)
        .collect();
    latest_of_ties(elements, &tied)
}

fn sort_keys(elements: &[TimedValue], using: Option<Projection<'_>>) -> Vec<ArdenValue> {
    match using {
        Some(project) => elements.iter().map(|e| project(e).into_value()).collect(),
        None => elements.iter().map(|e| e.value().clone()).collect(),
    }
}

// ============================================================================
// Position aggregates
// ============================================================================

/// FIRST element by position
pub fn first(source: &TimedValue) -> TimedValue {
    source.elements().first().cloned().unwrap_or_else(TimedValue::null)
}

/// LAST element by position
pub fn last(source: &TimedValue) -> TimedValue {
    source.elements().last().cloned().unwrap_or_else(TimedValue::null)
}

/// EARLIEST element by primary time, or by a projection
///
/// Without a projection every element needs a primary time. Ties go to
/// the first occurrence.
pub fn earliest(source: &TimedValue, using: Option<Projection<'_>>) -> TimedValue {
    selected(source, Selector::Earliest, using)
}

/// LATEST element by primary time, or by a projection
///
/// Without a projection every element needs a primary time. Ties go to
/// the first occurrence.
pub fn latest(source: &TimedValue, using: Option<Projection<'_>>) -> TimedValue {
    selected(source, Selector::Latest, using)
}

fn chronological_position(elements: &[TimedValue], want: Ordering, using: Option<Projection<'_>>) -> Option<usize> {
    let keys: Vec<ArdenValue> = match using {
        Some(_) => sort_keys(elements, using),
        None => elements
            .iter()
            .map(|e| e.primary_time().map(ArdenValue::Time))
            .collect::<Option<_>>()?,
    };
    if !mutually_ordered(keys.iter()) {
        return None;
    }

    let mut chosen = 0;
    for (i, key) in keys.iter().enumerate().skip(1) {
        if arden_compare(key, &keys[chosen]) == Some(want) {
            chosen = i;
        }
    }
    Some(chosen)
}

// ============================================================================
// Selection and INDEX
// ============================================================================

/// 0-based position chosen by `selector`, if the selection is defined
pub fn select_position(selector: Selector, source: &TimedValue, using: Option<Projection<'_>>) -> Option<usize> {
    let elements = source.elements();
    match selector {
        Selector::Minimum => extremum_position(elements, Ordering::Less, using),
        Selector::Maximum => extremum_position(elements, Ordering::Greater, using),
        Selector::Earliest => chronological_position(elements, Ordering::Less, using),
        Selector::Latest => chronological_position(elements, Ordering::Greater, using),
    }
}

fn selected(source: &TimedValue, selector: Selector, using: Option<Projection<'_>>) -> TimedValue {
    select_position(selector, source, using)
        .map_or_else(TimedValue::null, |i| source.elements()[i].clone())
}

/// INDEX MINIMUM/MAXIMUM/EARLIEST/LATEST
///
/// The 1-based position of the selected element, carrying that element's
/// primary time.
pub fn index_of(selector: Selector, source: &TimedValue, using: Option<Projection<'_>>) -> TimedValue {
    match select_position(selector, source, using) {
        Some(i) => TimedValue::with_primary_time(
            ArdenValue::number((i + 1) as u64),
            source.elements()[i].primary_time(),
        ),
        None => TimedValue::null(),
    }
}
