//! Logical Operator Tests
//!
//! Tests for: And, Or, Not with three-valued logic, and comparisons that
//! feed into them

use arden_eval::operators::comparison::{equal, less};
use arden_eval::operators::logical::{and, not, or};
use arden_types::{ArdenValue, TimedValue, Truth};
use rstest::rstest;

fn truth(t: Truth) -> TimedValue {
    TimedValue::truth(t)
}

#[rstest]
#[case(Truth::True, Truth::True, Truth::True)]
#[case(Truth::True, Truth::False, Truth::False)]
#[case(Truth::True, Truth::Unknown, Truth::Unknown)]
#[case(Truth::False, Truth::Unknown, Truth::False)]
#[case(Truth::Unknown, Truth::Unknown, Truth::Unknown)]
fn test_and(#[case] a: Truth, #[case] b: Truth, #[case] expected: Truth) {
    assert_eq!(and(&truth(a), &truth(b)), truth(expected));
    assert_eq!(and(&truth(b), &truth(a)), truth(expected));
}

#[rstest]
#[case(Truth::True, Truth::Unknown, Truth::True)]
#[case(Truth::False, Truth::False, Truth::False)]
#[case(Truth::False, Truth::Unknown, Truth::Unknown)]
#[case(Truth::Unknown, Truth::Unknown, Truth::Unknown)]
fn test_or(#[case] a: Truth, #[case] b: Truth, #[case] expected: Truth) {
    assert_eq!(or(&truth(a), &truth(b)), truth(expected));
    assert_eq!(or(&truth(b), &truth(a)), truth(expected));
}

#[test]
fn test_not() {
    assert_eq!(not(&truth(Truth::True)), truth(Truth::False));
    assert_eq!(not(&truth(Truth::Unknown)), truth(Truth::Unknown));
    assert_eq!(not(&TimedValue::null()), truth(Truth::Unknown));
}

#[test]
fn test_cross_domain_comparison_is_unknown() {
    let result = equal(&TimedValue::number(1), &TimedValue::string("1"));
    assert_eq!(result.value(), &ArdenValue::Boolean(Truth::Unknown));

    let ordered = less(&TimedValue::number(1), &TimedValue::string("2"));
    assert!(ordered.is_null());
}

#[test]
fn test_unknown_combines_with_comparison() {
    let unknown = equal(&TimedValue::number(1), &TimedValue::null());
    let known_false = less(&TimedValue::number(2), &TimedValue::number(1));
    assert_eq!(and(&unknown, &known_false), truth(Truth::False));
    assert_eq!(or(&unknown, &known_false), truth(Truth::Unknown));
}
