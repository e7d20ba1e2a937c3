//! List Operator Tests
//!
//! Tests for: SEQTO, REVERSE, EXTRACT CHARACTERS, STRING, element access,
//! concatenation and list broadcasting of arithmetic

use crate::fixtures::{list, numbers, time, x, y, z};
use arden_eval::operators::arithmetic::multiply;
use arden_eval::operators::list::{MAX_SEQUENCE_LENGTH, concat, element, extract_characters, reverse, seqto, string_of};
use arden_types::{ArdenValue, TimedValue};
use pretty_assertions::assert_eq;
use rstest::rstest;
use rust_decimal::Decimal;

fn n(value: i64) -> TimedValue {
    TimedValue::number(value)
}

fn decimal(s: &str) -> TimedValue {
    TimedValue::number(s.parse::<Decimal>().unwrap())
}

#[rstest]
#[case::equal_bounds(n(2), n(2), "(,2)")]
#[case::reversed_bounds(n(4), n(2), "()")]
#[case::negative(n(-3), n(-1), "(-3,-2,-1)")]
#[case::ascending(n(1), n(4), "(1,2,3,4)")]
#[case::integral_decimal(decimal("1.0"), n(3), "(1,2,3)")]
fn test_seqto(#[case] from: TimedValue, #[case] to: TimedValue, #[case] expected: &str) {
    assert_eq!(seqto(&from, &to).to_string(), expected);
}

#[rstest]
#[case(decimal("4.5"), n(2))]
#[case(decimal("1.5"), n(5))]
#[case(TimedValue::null(), n(5))]
#[case(n(1), TimedValue::string("5"))]
fn test_seqto_non_integral_is_null(#[case] from: TimedValue, #[case] to: TimedValue) {
    assert!(seqto(&from, &to).is_null());
}

#[test]
fn test_seqto_length_is_bounded() {
    let cap = MAX_SEQUENCE_LENGTH as i64;
    assert_eq!(seqto(&n(1), &n(cap)).elements().len(), cap as usize);
    assert!(seqto(&n(0), &n(cap)).is_null());
    assert!(seqto(&n(1), &n(1_000_000_000_000_000)).is_null());
    assert!(seqto(&n(i64::MIN), &n(i64::MAX)).is_null());
    assert_eq!(seqto(&n(i64::MAX), &n(i64::MIN)), TimedValue::empty_list());
}

#[test]
fn test_seqto_broadcasts_with_arithmetic() {
    let doubled = multiply(&n(2), &seqto(&n(1), &n(4)));
    assert_eq!(doubled, numbers(&[2, 4, 6, 8]));
}

#[test]
fn test_reverse_keeps_element_times() {
    let source = list(&[&x(), &y(), &z()]);
    let reversed = reverse(&source);
    assert_eq!(reversed, list(&[&z(), &y(), &x()]));
    assert_eq!(reverse(&reversed), source);
}

#[test]
fn test_string_reverse_extract_characters() {
    let chars = extract_characters(&TimedValue::string("abcde"));
    assert_eq!(chars.elements().len(), 5);
    assert_eq!(string_of(&reverse(&chars)), TimedValue::string("edcba"));
}

#[test]
fn test_extract_characters_of_several_strings() {
    let source = TimedValue::list([TimedValue::string("ab"), TimedValue::string(""), TimedValue::string("c")]);
    assert_eq!(extract_characters(&source).to_string(), "(\"a\",\"b\",\"c\")");
    assert_eq!(extract_characters(&TimedValue::empty_list()), TimedValue::empty_list());
}

#[rstest]
#[case::non_integral_slot(TimedValue::list([decimal("1.5"), n(2)]), "(NULL,20)")]
#[case::empty_index(TimedValue::empty_list(), "()")]
#[case::out_of_range(TimedValue::list([n(3), n(1)]), "(NULL,10)")]
#[case::wrong_type(TimedValue::list([TimedValue::string("1")]), "(,NULL)")]
#[case::repeated(TimedValue::list([n(2), n(2)]), "(20,20)")]
fn test_element_access(#[case] index: TimedValue, #[case] expected: &str) {
    assert_eq!(element(&numbers(&[10, 20]), &index).to_string(), expected);
}

#[test]
fn test_element_nested_index_is_flattened() {
    let source = numbers(&[1, 2, 3, 4, 5]);
    let index = TimedValue::list([n(1), numbers(&[3, 5])]);
    assert_eq!(element(&source, &index), numbers(&[1, 3, 5]));
}

#[test]
fn test_element_keeps_time() {
    let source = list(&[&x(), &z()]);
    let selected = element(&source, &n(2));
    assert_eq!(selected.primary_time(), Some(time("1990-01-03")));
}

#[test]
fn test_concat() {
    let joined = concat(&numbers(&[1, 2]), &n(3));
    assert_eq!(joined, numbers(&[1, 2, 3]));
    assert_eq!(concat(&TimedValue::empty_list(), &TimedValue::empty_list()), TimedValue::empty_list());
    assert_eq!(
        concat(&n(1), &TimedValue::null()).elements()[1].value(),
        &ArdenValue::Null
    );
}
