//! Variant ranking.

use std::cmp::Ordering;

use crate::domain::RouteVariant;

/// Order two variants: shorter total duration first, then cheaper.
pub fn compare_variants(a: &RouteVariant, b: &RouteVariant) -> Ordering {
    a.total_duration_seconds()
        .cmp(&b.total_duration_seconds())
        .then_with(|| a.total_cost().total_cmp(&b.total_cost()))
}

/// Sort variants best-first and keep at most `max_variants`.
///
/// The sort is stable, so fully tied variants keep their input order.
pub fn rank_variants(mut variants: Vec<RouteVariant>, max_variants: usize) -> Vec<RouteVariant> {
    variants.sort_by(compare_variants);
    variants.truncate(max_variants);
    variants
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Coordinate, Endpoint, Hop, Leg, TravelMode};

    pub(super) fn make_variant(id: &str, transit_seconds: u32, cost: f64) -> RouteVariant {
        let at = Coordinate::new(28.6, 77.2).unwrap();
        let hop = || Hop::new(Endpoint::unnamed(at), Endpoint::unnamed(at));
        RouteVariant::new(
            id,
            Leg::new(TravelMode::Walk, hop(), 100, 60),
            Leg::new(TravelMode::Transit, hop(), 5_000, transit_seconds),
            Leg::new(TravelMode::Walk, hop(), 100, 60),
            cost,
        )
        .unwrap()
    }

    fn ids(variants: &[RouteVariant]) -> Vec<&str> {
        variants.iter().map(|v| v.id()).collect()
    }

    #[test]
    fn shorter_duration_first() {
        let ranked = rank_variants(
            vec![
                make_variant("slow", 1_800, 10.0),
                make_variant("fast", 900, 50.0),
                make_variant("medium", 1_200, 0.0),
            ],
            10,
        );

        assert_eq!(ids(&ranked), vec!["fast", "medium", "slow"]);
    }

    #[test]
    fn ties_broken_by_cost() {
        let ranked = rank_variants(
            vec![
                make_variant("pricey", 900, 60.0),
                make_variant("cheap", 900, 20.0),
            ],
            10,
        );

        assert_eq!(ids(&ranked), vec!["cheap", "pricey"]);
    }

    #[test]
    fn full_ties_keep_input_order() {
        let ranked = rank_variants(
            vec![make_variant("first", 900, 20.0), make_variant("second", 900, 20.0)],
            10,
        );

        assert_eq!(ids(&ranked), vec!["first", "second"]);
    }

    #[test]
    fn truncates_after_sorting() {
        let ranked = rank_variants(
            vec![
                make_variant("c", 3_000, 0.0),
                make_variant("a", 1_000, 0.0),
                make_variant("b", 2_000, 0.0),
            ],
            2,
        );

        assert_eq!(ids(&ranked), vec!["a", "b"]);
    }

    #[test]
    fn empty_input() {
        assert!(rank_variants(Vec::new(), 9).is_empty());
    }
}

#[cfg(test)]
mod proptests {
    use super::tests::make_variant;
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn ranked_output_is_ordered_and_bounded(
            specs in prop::collection::vec((0u32..10_000, 0u32..200), 0..30),
            max in 0usize..20,
        ) {
            let variants: Vec<_> = specs
                .iter()
                .enumerate()
                .map(|(i, (secs, cost))| make_variant(&format!("r{i}"), *secs, f64::from(*cost)))
                .collect();
            let input_len = variants.len();

            let ranked = rank_variants(variants, max);
            prop_assert_eq!(ranked.len(), input_len.min(max));

            for pair in ranked.windows(2) {
                let (a, b) = (&pair[0], &pair[1]);
                prop_assert!(
                    a.total_duration_seconds() < b.total_duration_seconds()
                        || (a.total_duration_seconds() == b.total_duration_seconds()
                            && a.total_cost() <= b.total_cost())
                );
            }
        }
    }
}
