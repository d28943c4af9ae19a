use annals_core::event::Event;
use annals_core::filter::{EventFilter, canonical_cmp};
use proptest::prelude::*;
use std::cmp::Ordering;

fn arb_event() -> impl Strategy<Value = Event> {
    (
        0u64..1000,
        "[a-z]{1,12}",
        1900i32..2030,
        prop::option::of(1u32..=12),
        prop::option::of(1u32..=31),
    )
        .prop_map(|(id, title, year, month, day)| Event {
            id,
            title,
            description: String::new(),
            year,
            month,
            day,
            category: None,
            region: None,
            source: None,
        })
}

fn arb_filter() -> impl Strategy<Value = EventFilter> {
    (
        prop::option::of(1u32..=12),
        prop::option::of(1900i32..2030),
    )
        .prop_map(|(month, year)| EventFilter::new(month, year))
}

proptest! {
    #[test]
    fn results_satisfy_both_predicates(
        events in prop::collection::vec(arb_event(), 0..40),
        filter in arb_filter(),
    ) {
        for event in filter.apply(&events) {
            if let Some(month) = filter.month {
                prop_assert_eq!(event.month, Some(month));
            }
            if let Some(year) = filter.year {
                prop_assert_eq!(event.year, year);
            }
        }
    }

    #[test]
    fn results_are_a_subset_of_the_store(
        events in prop::collection::vec(arb_event(), 0..40),
        filter in arb_filter(),
    ) {
        let selection = filter.apply(&events);
        prop_assert!(selection.len() <= events.len());
        for selected in &selection {
            prop_assert!(events.iter().any(|e| e == selected));
        }
    }

    #[test]
    fn results_are_canonically_sorted(
        events in prop::collection::vec(arb_event(), 0..40),
        filter in arb_filter(),
    ) {
        let selection = filter.apply(&events);
        for pair in selection.windows(2) {
            prop_assert_ne!(canonical_cmp(&pair[0], &pair[1]), Ordering::Greater);
        }
    }

    #[test]
    fn empty_filter_keeps_every_event(
        events in prop::collection::vec(arb_event(), 0..40),
    ) {
        let selection = EventFilter::default().apply(&events);
        prop_assert_eq!(selection.len(), events.len());
    }

    #[test]
    fn matches_agrees_with_apply(
        events in prop::collection::vec(arb_event(), 0..40),
        filter in arb_filter(),
    ) {
        let expected = events.iter().filter(|e| filter.matches(e)).count();
        prop_assert_eq!(filter.apply(&events).len(), expected);
    }
}
