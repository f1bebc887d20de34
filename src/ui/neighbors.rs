// Neighbor selection
//
// Sorts one side of a resource's neighbors by health and splits it into the
// cards that get drawn and the remainder that collapses into a summary list.

use crate::mesh::Resource;
use std::cmp::Ordering;

/// Displayed and collapsed neighbors for one side of the graph
///
/// `displayed` followed by `collapsed` is the full neighbor list sorted by
/// ascending success rate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayPlan<'a> {
    /// Least healthy neighbors first, at most `max_neighbors` of them
    pub displayed: Vec<&'a Resource>,
    /// Neighbors beyond the cap, same order
    pub collapsed: Vec<&'a Resource>,
}

impl DisplayPlan<'_> {
    pub fn has_collapsed(&self) -> bool {
        !self.collapsed.is_empty()
    }
}

/// Ascending by success rate; absent and NaN rates sort after every number
fn compare_success_rate(a: &Resource, b: &Resource) -> Ordering {
    let key = |r: &Resource| r.success_rate.filter(|v| !v.is_nan());
    match (key(a), key(b)) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Split a neighbor list into displayed and collapsed sets
///
/// The sort is stable, so neighbors with equal success rates keep their
/// input order.
///
/// # Arguments
/// * `neighbors` - All neighbors on one side (upstream or downstream)
/// * `max_neighbors` - Cap on the number of displayed entries
pub fn select_neighbors(neighbors: &[Resource], max_neighbors: usize) -> DisplayPlan<'_> {
    let mut sorted: Vec<&Resource> = neighbors.iter().collect();
    sorted.sort_by(|a, b| compare_success_rate(a, b));

    if sorted.len() <= max_neighbors {
        return DisplayPlan {
            displayed: sorted,
            collapsed: Vec::new(),
        };
    }

    let collapsed = sorted.split_off(max_neighbors);
    DisplayPlan {
        displayed: sorted,
        collapsed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::MAX_NEIGHBORS;
    use proptest::prelude::*;

    fn neighbor(name: &str, rate: Option<f64>) -> Resource {
        Resource {
            success_rate: rate,
            ..Resource::new(name)
        }
    }

    fn names<'a>(list: &[&'a Resource]) -> Vec<&'a str> {
        list.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_empty_list() {
        let plan = select_neighbors(&[], MAX_NEIGHBORS);
        assert!(plan.displayed.is_empty());
        assert!(!plan.has_collapsed());
    }

    #[test]
    fn test_sorts_least_healthy_first() {
        let list = vec![
            neighbor("a", Some(0.99)),
            neighbor("b", Some(0.5)),
            neighbor("c", Some(0.9)),
        ];
        let plan = select_neighbors(&list, MAX_NEIGHBORS);
        assert_eq!(names(&plan.displayed), vec!["b", "c", "a"]);
        assert!(plan.collapsed.is_empty());
    }

    #[test]
    fn test_missing_rates_sort_last() {
        let list = vec![
            neighbor("none", None),
            neighbor("nan", Some(f64::NAN)),
            neighbor("low", Some(0.1)),
            neighbor("high", Some(1.0)),
        ];
        let plan = select_neighbors(&list, MAX_NEIGHBORS);
        assert_eq!(names(&plan.displayed), vec!["low", "high", "none", "nan"]);
    }

    #[test]
    fn test_collapses_beyond_cap() {
        let list: Vec<Resource> = (0..9)
            .map(|i| neighbor(&format!("n{}", i), Some(1.0 - i as f64 * 0.1)))
            .collect();
        let plan = select_neighbors(&list, MAX_NEIGHBORS);

        assert_eq!(plan.displayed.len(), MAX_NEIGHBORS);
        assert_eq!(names(&plan.displayed), vec!["n8", "n7", "n6", "n5", "n4", "n3"]);
        assert_eq!(names(&plan.collapsed), vec!["n2", "n1", "n0"]);
    }

    #[test]
    fn test_exactly_at_cap_does_not_collapse() {
        let list: Vec<Resource> = (0..MAX_NEIGHBORS)
            .map(|i| neighbor(&format!("n{}", i), Some(0.5)))
            .collect();
        let plan = select_neighbors(&list, MAX_NEIGHBORS);
        assert_eq!(plan.displayed.len(), MAX_NEIGHBORS);
        assert!(!plan.has_collapsed());
    }

    fn rate_strategy() -> impl Strategy<Value = Option<f64>> {
        prop_oneof![
            4 => (0u32..=20u32).prop_map(|v| Some(v as f64 / 20.0)),
            1 => Just(None),
        ]
    }

    fn build_list(rates: &[Option<f64>]) -> Vec<Resource> {
        rates
            .iter()
            .enumerate()
            .map(|(i, r)| neighbor(&format!("n{}", i), *r))
            .collect()
    }

    /// Input position encoded in the neighbor's name
    fn input_index(r: &Resource) -> usize {
        r.name[1..].parse().unwrap()
    }

    /// Ascending rates, absent rates only at the end, ties in input order,
    /// and every input entry present exactly once
    fn assert_sorted_permutation(
        sorted: &[&Resource],
        input: &[Resource],
    ) -> Result<(), TestCaseError> {
        prop_assert_eq!(sorted.len(), input.len());

        let mut indices: Vec<usize> = sorted.iter().map(|r| input_index(r)).collect();
        indices.sort_unstable();
        prop_assert_eq!(indices, (0..input.len()).collect::<Vec<_>>());

        for pair in sorted.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            match (a.success_rate, b.success_rate) {
                (Some(x), Some(y)) => {
                    prop_assert!(x <= y, "{} before {}", x, y);
                    if x == y {
                        prop_assert!(input_index(a) < input_index(b));
                    }
                }
                (None, Some(y)) => prop_assert!(false, "missing rate before {}", y),
                (Some(_), None) => {}
                (None, None) => prop_assert!(input_index(a) < input_index(b)),
            }
        }
        Ok(())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Lists within the cap are fully displayed in sorted order
        #[test]
        fn prop_small_lists_fully_displayed(
            rates in prop::collection::vec(rate_strategy(), 0..=MAX_NEIGHBORS),
        ) {
            let list = build_list(&rates);
            let plan = select_neighbors(&list, MAX_NEIGHBORS);

            prop_assert!(plan.collapsed.is_empty());
            assert_sorted_permutation(&plan.displayed, &list)?;
        }

        /// Larger lists split at the cap and reassemble into the stable sort
        #[test]
        fn prop_large_lists_split_at_cap(
            rates in prop::collection::vec(rate_strategy(), (MAX_NEIGHBORS + 1)..30),
        ) {
            let list = build_list(&rates);
            let plan = select_neighbors(&list, MAX_NEIGHBORS);

            prop_assert_eq!(plan.displayed.len(), MAX_NEIGHBORS);
            prop_assert_eq!(plan.collapsed.len(), list.len() - MAX_NEIGHBORS);

            let mut rejoined = plan.displayed.clone();
            rejoined.extend(plan.collapsed.iter().copied());
            assert_sorted_permutation(&rejoined, &list)?;
        }
    }
}
