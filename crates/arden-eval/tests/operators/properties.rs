//! Property tests over arbitrary lists

use arden_eval::operators::aggregate::{count, maximum, median, minimum};
use arden_eval::operators::list::{reverse, seqto};
use arden_eval::arden_compare;
use arden_types::{ArdenTime, ArdenValue, TimedValue};
use proptest::prelude::*;
use std::cmp::Ordering;

fn timed_number() -> impl Strategy<Value = TimedValue> {
    (-1000i64..1000, proptest::option::of(0i64..2_000_000_000_000)).prop_map(|(n, millis)| {
        let time = millis.and_then(ArdenTime::from_millis);
        TimedValue::with_primary_time(ArdenValue::number(n), time)
    })
}

fn element() -> impl Strategy<Value = TimedValue> {
    prop_oneof![
        timed_number(),
        Just(TimedValue::null()),
        "[a-z]{0,3}".prop_map(TimedValue::string),
    ]
}

proptest! {
    #[test]
    fn reverse_is_an_involution(elements in proptest::collection::vec(element(), 0..20)) {
        let source = TimedValue::list(elements);
        prop_assert_eq!(reverse(&reverse(&source)), source);
    }

    #[test]
    fn count_includes_every_element(elements in proptest::collection::vec(element(), 0..20)) {
        let len = elements.len();
        let result = count(&TimedValue::list(elements));
        prop_assert_eq!(result.value(), &ArdenValue::number(len as u64));
        prop_assert_eq!(result.primary_time(), None);
    }

    #[test]
    fn median_lies_between_extremes(elements in proptest::collection::vec(timed_number(), 1..20)) {
        let source = TimedValue::list(elements);
        let min = minimum(&source, None);
        let max = maximum(&source, None);
        let med = median(&source);

        prop_assert_ne!(arden_compare(min.value(), med.value()), Some(Ordering::Greater));
        prop_assert_ne!(arden_compare(med.value(), max.value()), Some(Ordering::Greater));
        prop_assert!(arden_compare(min.value(), med.value()).is_some());
    }

    #[test]
    fn seqto_length(from in -500i64..500, to in -500i64..500) {
        let result = seqto(&TimedValue::number(from), &TimedValue::number(to));
        let expected = if from > to { 0 } else { (to - from + 1) as usize };
        prop_assert_eq!(result.elements().len(), expected);
        prop_assert!(result.is_list());
    }

    #[test]
    fn extremum_tie_takes_latest_time(
        value in -100i64..100,
        millis in proptest::collection::vec(0i64..2_000_000_000_000, 2..6),
    ) {
        let elements: Vec<TimedValue> = millis
            .iter()
            .map(|m| TimedValue::with_primary_time(ArdenValue::number(value), ArdenTime::from_millis(*m)))
            .collect();
        let latest = elements.iter().filter_map(TimedValue::primary_time).max();
        let source = TimedValue::list(elements);

        prop_assert_eq!(maximum(&source, None).primary_time(), latest);
        prop_assert_eq!(minimum(&source, None).primary_time(), latest);
        prop_assert_eq!(median(&source).primary_time(), latest);
    }
}
