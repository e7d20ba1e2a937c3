//! Aggregate Operator Tests
//!
//! Tests for: Count, Exist, Sum, Average, Median, Variance, Stddev, Minimum,
//! Maximum, First, Last, Earliest, Latest, Index, Any, All, No

use crate::fixtures::{at, list, numbers, time, u, v, w, x, y, z};
use arden_eval::operators::aggregate;
use arden_eval::operators::list::element;
use arden_eval::{AggregateOp, Aggregation, ArdenEngine, EvalError, Qualifier, Selector};
use arden_types::{ArdenDuration, ArdenValue, TimedValue, Truth};
use pretty_assertions::assert_eq;
use rstest::rstest;
use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};

// ============================================================================
// Test Helpers
// ============================================================================

fn eval(op: AggregateOp, source: &TimedValue) -> TimedValue {
    ArdenEngine::new().aggregate(&Aggregation::new(op), source).unwrap()
}

fn eval_index(op: AggregateOp, source: &TimedValue) -> TimedValue {
    ArdenEngine::new()
        .aggregate(&Aggregation::index_of(op), source)
        .unwrap()
}

fn trig(f: fn(f64) -> f64) -> impl Fn(&TimedValue) -> TimedValue {
    move |e: &TimedValue| {
        e.value()
            .as_number()
            .and_then(|n| n.to_f64())
            .and_then(|r| Decimal::from_f64(f(r)))
            .map_or_else(TimedValue::null, TimedValue::number)
    }
}

// ============================================================================
// COUNT and EXIST
// ============================================================================

#[test]
fn test_count_includes_nulls() {
    let source = TimedValue::list([
        TimedValue::number(12),
        TimedValue::number(13),
        TimedValue::number(14),
        TimedValue::null(),
    ]);
    assert_eq!(eval(AggregateOp::Count, &source), TimedValue::number(4));
    assert_eq!(eval(AggregateOp::Count, &TimedValue::null()), TimedValue::number(1));
    assert_eq!(eval(AggregateOp::Count, &TimedValue::empty_list()), TimedValue::number(0));
}

#[test]
fn test_count_has_no_time() {
    let result = eval(AggregateOp::Count, &list(&[&x(), &y()]));
    assert!(result.time_of().is_null());
}

#[test]
fn test_exist() {
    assert_eq!(eval(AggregateOp::Exist, &TimedValue::null()), TimedValue::boolean(false));
    assert_eq!(eval(AggregateOp::Exist, &TimedValue::empty_list()), TimedValue::boolean(false));

    let agreeing = eval(AggregateOp::Exist, &list(&[&x(), &y()]));
    assert_eq!(agreeing.value(), &ArdenValue::boolean(true));
    assert_eq!(agreeing.primary_time(), Some(time("1990-01-01")));

    let with_null = eval(AggregateOp::Exist, &list(&[&TimedValue::null(), &x()]));
    assert_eq!(with_null.primary_time(), Some(time("1990-01-01")));

    let disagreeing = eval(AggregateOp::Exist, &list(&[&x(), &z()]));
    assert_eq!(disagreeing.primary_time(), None);
}

// ============================================================================
// Algebraic aggregates
// ============================================================================

#[rstest]
#[case(AggregateOp::Sum)]
#[case(AggregateOp::Average)]
#[case(AggregateOp::Variance)]
#[case(AggregateOp::Stddev)]
fn test_algebraic_time_rule(#[case] op: AggregateOp) {
    let agreeing = eval(op, &list(&[&x(), &y()]));
    assert_eq!(agreeing.primary_time(), Some(time("1990-01-01")));

    let disagreeing = eval(op, &list(&[&x(), &z()]));
    assert!(!disagreeing.is_null());
    assert_eq!(disagreeing.primary_time(), None);
}

#[test]
fn test_variance_and_stddev() {
    let source = numbers(&[12, 13, 14, 15, 16]);
    assert_eq!(eval(AggregateOp::Variance, &source), TimedValue::number(Decimal::new(25, 1)));

    let stddev = eval(AggregateOp::Stddev, &source).value().as_number().unwrap();
    assert!(stddev > Decimal::new(158, 2) && stddev < Decimal::new(159, 2));
}

#[test]
fn test_average_of_times() {
    let source = TimedValue::list([
        TimedValue::time(time("1990-03-10T03:10")),
        TimedValue::time(time("1990-03-12T03:10")),
    ]);
    assert_eq!(
        eval(AggregateOp::Average, &source),
        TimedValue::time(time("1990-03-11T03:10"))
    );
}

#[test]
fn test_average_of_durations() {
    let source = TimedValue::list([2, 3, 4].map(|d| TimedValue::duration(ArdenDuration::days(d))));
    assert_eq!(eval(AggregateOp::Average, &source).to_string(), "3 days");
}

#[test]
fn test_sum_of_empty_list_is_zero() {
    assert_eq!(eval(AggregateOp::Sum, &TimedValue::empty_list()), TimedValue::number(0));
    assert!(eval(AggregateOp::Average, &TimedValue::empty_list()).is_null());
}

// ============================================================================
// MEDIAN
// ============================================================================

#[test]
fn test_median_values() {
    assert_eq!(eval(AggregateOp::Median, &numbers(&[12, 17, 13])), TimedValue::number(13));
    assert_eq!(
        eval(AggregateOp::Median, &numbers(&[0, 5])),
        TimedValue::number(Decimal::new(25, 1))
    );
    assert!(eval(AggregateOp::Median, &TimedValue::empty_list()).is_null());
}

#[test]
fn test_median_of_durations() {
    let source = TimedValue::list([
        TimedValue::duration(ArdenDuration::hours(1)),
        TimedValue::duration(ArdenDuration::days(3)),
        TimedValue::duration(ArdenDuration::years(4)),
    ]);
    assert_eq!(eval(AggregateOp::Median, &source).to_string(), "3 days");
}

#[test]
fn test_median_odd_takes_middle_time() {
    let result = eval(AggregateOp::Median, &list(&[&x(), &y(), &z()]));
    assert_eq!(result.value(), &ArdenValue::number(3));
    assert_eq!(result.primary_time(), Some(time("1990-01-01")));
}

#[test]
fn test_median_even_with_shared_time() {
    let result = eval(AggregateOp::Median, &list(&[&x(), &y()]));
    assert_eq!(result.value(), &ArdenValue::number(4));
    assert_eq!(result.primary_time(), Some(time("1990-01-01")));
}

#[test]
fn test_median_even_with_distinct_times() {
    let result = eval(AggregateOp::Median, &list(&[&x(), &z()]));
    assert!(result.time_of().is_null());
}

#[rstest]
#[case::odd_count(list(&[&x(), &u(), &v()]))]
#[case::even_count(list(&[&v(), &x(), &w(), &u()]))]
fn test_median_ties_take_latest_time(#[case] source: TimedValue) {
    let result = eval(AggregateOp::Median, &source);
    assert_eq!(result.value(), &ArdenValue::number(5));
    assert_eq!(result.primary_time(), Some(time("2000-01-01")));
}

// ============================================================================
// MINIMUM and MAXIMUM
// ============================================================================

#[test]
fn test_maximum_tie_takes_latest_time() {
    let result = eval(AggregateOp::Maximum, &list(&[&v(), &x(), &y()]));
    assert_eq!(result.value(), &ArdenValue::number(5));
    assert_eq!(result.primary_time(), Some(time("2000-01-01")));
}

#[test]
fn test_minimum_takes_element_time() {
    let result = eval(AggregateOp::Minimum, &list(&[&x(), &y(), &z()]));
    assert_eq!(result, z());
}

#[test]
fn test_extremum_of_mixed_domains_is_null() {
    let source = TimedValue::list([TimedValue::number(1), TimedValue::string("a")]);
    assert!(eval(AggregateOp::Minimum, &source).is_null());
    assert!(eval(AggregateOp::Maximum, &source).is_null());
}

#[test]
fn test_extremum_using_projection() {
    let source = numbers(&[0, 30, 90, 180, 200, 300]);
    let cosine = trig(f64::cos);
    let sine = trig(f64::sin);
    let engine = ArdenEngine::new();

    let min = engine
        .aggregate(&Aggregation::new(AggregateOp::Minimum).using(&cosine), &source)
        .unwrap();
    assert_eq!(min, TimedValue::number(180));

    let max = engine
        .aggregate(&Aggregation::new(AggregateOp::Maximum).using(&sine), &source)
        .unwrap();
    assert_eq!(max, TimedValue::number(90));

    let index = engine
        .aggregate(&Aggregation::index_of(AggregateOp::Minimum).using(&cosine), &source)
        .unwrap();
    assert_eq!(index, TimedValue::number(4));
}

#[test]
fn test_extremum_using_returns_original_element() {
    // Both elements project to the same key; the later one wins.
    let constant = |_: &TimedValue| TimedValue::number(1);
    let result = aggregate::maximum(&list(&[&v(), &z()]), Some(&constant));
    assert_eq!(result, v());
}

// ============================================================================
// FIRST, LAST, EARLIEST, LATEST
// ============================================================================

#[test]
fn test_first_of_indexed_list() {
    let source = list(&[&x(), &y(), &z()]);
    let slice = element(&source, &numbers(&[2, 3]));
    let first = eval(AggregateOp::First, &slice);
    assert_eq!(first.time_of().value(), &ArdenValue::Time(time("1990-01-01")));
    assert_eq!(eval(AggregateOp::Last, &slice), z());
}

#[test]
fn test_earliest_time_tie_takes_first_occurrence() {
    let result = eval(AggregateOp::Earliest, &list(&[&v(), &x(), &y()]));
    assert_eq!(result, x());
    assert_eq!(eval(AggregateOp::Latest, &list(&[&v(), &x(), &y()])), v());
}

#[test]
fn test_earliest_using_projection() {
    let negated = |e: &TimedValue| {
        e.value()
            .as_number()
            .map_or_else(TimedValue::null, |n| TimedValue::number(-n))
    };
    let result = aggregate::earliest(&list(&[&y(), &z(), &at(2, "1991-01-01")]), Some(&negated));
    assert_eq!(result, y());

    let latest = aggregate::latest(&list(&[&y(), &z(), &at(2, "1991-01-01")]), Some(&negated));
    assert_eq!(latest, z());
}

// ============================================================================
// INDEX
// ============================================================================

#[test]
fn test_index_earliest_and_latest() {
    let source = list(&[&v(), &x(), &y()]);
    let earliest = eval_index(AggregateOp::Earliest, &source);
    assert_eq!(earliest.value(), &ArdenValue::number(2));
    assert_eq!(earliest.primary_time(), Some(time("1990-01-01")));
    assert_eq!(eval_index(AggregateOp::Latest, &source).value(), &ArdenValue::number(1));
}

#[test]
fn test_index_maximum() {
    let source = list(&[&x(), &v(), &y()]);
    assert_eq!(
        aggregate::index_of(Selector::Maximum, &source, None).value(),
        &ArdenValue::number(2)
    );
    assert!(aggregate::index_of(Selector::Minimum, &TimedValue::empty_list(), None).is_null());
}

#[rstest]
#[case(AggregateOp::First)]
#[case(AggregateOp::Last)]
#[case(AggregateOp::Sum)]
fn test_index_requires_selector(#[case] op: AggregateOp) {
    let err = ArdenEngine::new()
        .aggregate(&Aggregation::index_of(op), &numbers(&[1, 2]))
        .unwrap_err();
    assert!(matches!(err, EvalError::IndexNotAllowed { .. }));
}

// ============================================================================
// ANY, ALL, NO
// ============================================================================

#[rstest]
#[case::any_non_booleans(AggregateOp::Any, TimedValue::list([TimedValue::number(3), TimedValue::number(5), TimedValue::string("red")]), Truth::Unknown)]
#[case::any_false_and_null(AggregateOp::Any, TimedValue::list([TimedValue::boolean(false), TimedValue::null()]), Truth::Unknown)]
#[case::any_empty(AggregateOp::Any, TimedValue::empty_list(), Truth::False)]
#[case::all_empty(AggregateOp::All, TimedValue::empty_list(), Truth::True)]
#[case::no_empty(AggregateOp::No, TimedValue::empty_list(), Truth::True)]
#[case::all_with_false(AggregateOp::All, TimedValue::list([TimedValue::null(), TimedValue::boolean(false)]), Truth::False)]
#[case::no_with_true(AggregateOp::No, TimedValue::list([TimedValue::null(), TimedValue::boolean(true)]), Truth::False)]
fn test_quantifiers(#[case] op: AggregateOp, #[case] source: TimedValue, #[case] expected: Truth) {
    assert_eq!(eval(op, &source), TimedValue::truth(expected));
}

#[test]
fn test_quantifier_qualifiers() {
    let engine = ArdenEngine::new();
    let source = TimedValue::list([TimedValue::boolean(true), TimedValue::boolean(true)]);

    let all = Aggregation::new(AggregateOp::All).with_qualifier(Qualifier::AreTrue);
    assert_eq!(engine.aggregate(&all, &source).unwrap(), TimedValue::boolean(true));

    let wrong = Aggregation::new(AggregateOp::No).with_qualifier(Qualifier::AreTrue);
    assert_eq!(
        engine.aggregate(&wrong, &source),
        Err(EvalError::qualifier_mismatch("NO", Qualifier::IsTrue, Qualifier::AreTrue))
    );
}
