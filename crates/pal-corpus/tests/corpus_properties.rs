use std::collections::HashMap;

use pal_corpus::{
    fibonacci, majority_element, schedule_scan, validate_brackets, BracketPolicy, Direction,
    FibMemo, Schedule,
};
use proptest::prelude::*;

fn nested(depth: usize) -> BoxedStrategy<String> {
    let leaf = Just(String::new()).boxed();
    if depth == 0 {
        return leaf;
    }
    let pair = prop::sample::select(vec![('(', ')'), ('[', ']'), ('{', '}')]);
    prop_oneof![
        leaf,
        (pair, nested(depth - 1), nested(depth - 1))
            .prop_map(|((open, close), inner, rest)| format!("{open}{inner}{close}{rest}")),
    ]
    .boxed()
}

proptest! {
    #[test]
    fn majority_agrees_with_counting(values in prop::collection::vec(0i64..4, 0..40)) {
        let mut counts: HashMap<i64, usize> = HashMap::new();
        for value in &values {
            *counts.entry(*value).or_default() += 1;
        }
        let expected = counts
            .into_iter()
            .find(|(_, count)| *count > values.len() / 2)
            .map(|(value, _)| value);
        prop_assert_eq!(majority_element(&values), expected);
    }

    #[test]
    fn generated_nesting_is_balanced(text in nested(4)) {
        prop_assert!(validate_brackets(&text, BracketPolicy::Strict).unwrap());
        let broken = format!("{text})");
        prop_assert!(!validate_brackets(&broken, BracketPolicy::Strict).unwrap());
    }

    #[test]
    fn schedule_serves_every_request_once(
        head in 0u64..100,
        up in any::<bool>(),
        requests in prop::collection::vec(0u64..100, 0..20),
    ) {
        let direction = if up { Direction::Up } else { Direction::Down };
        let schedule = schedule_scan(head, direction, 100, &requests).unwrap();
        let mut served = schedule.order.clone();
        let mut pending = requests.clone();
        served.sort_unstable();
        pending.sort_unstable();
        prop_assert_eq!(served, pending);
        let travel_lower_bound = requests.iter().map(|r| r.abs_diff(head)).max().unwrap_or(0);
        prop_assert!(schedule.distance >= travel_lower_bound);
    }

    #[test]
    fn fibonacci_recurrence_holds(n in 2i64..=186) {
        let mut memo = FibMemo::new();
        prop_assert_eq!(
            fibonacci(n).unwrap(),
            memo.get(n - 1).unwrap() + memo.get(n - 2).unwrap()
        );
    }
}

#[test]
fn schedule_serializes_with_kebab_case_direction() {
    let schedule = schedule_scan(5, Direction::Down, 10, &[7, 2]).unwrap();
    let json = serde_json::to_value(&schedule).unwrap();
    assert_eq!(json["direction"], "up");
    assert_eq!(json["order"], serde_json::json!([2, 7]));
    let decoded: Schedule = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, schedule);
}
