//! Property tests for the selection aggregator and derived totals

use pcforge_core::CatalogProvider;
use pcforge_core::ComponentCategory;
use pcforge_core::CompatibilityStatus;
use pcforge_core::Price;
use pcforge_core::SelectionAggregator;
use pcforge_core::StaticCatalog;
use pcforge_core::compute_compatibility;
use pcforge_core::compute_total;
use proptest::prelude::*;

/// Pairs of (category index, item index) into the builtin catalog
fn picks() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0..ComponentCategory::TOTAL, 0usize..3), 0..40)
}

fn apply(aggregator: &mut SelectionAggregator, catalog: &StaticCatalog, picks: &[(usize, usize)]) {
    let categories: Vec<_> = ComponentCategory::all().collect();
    for &(c, i) in picks {
        let category = categories[c];
        let items = catalog.items(category);
        let item = items[i % items.len()].clone();
        aggregator.select(category, item).unwrap();
    }
}

proptest! {
    #[test]
    fn total_is_sum_of_selected_prices(picks in picks()) {
        let catalog = StaticCatalog::builtin();
        let mut aggregator = SelectionAggregator::new();
        apply(&mut aggregator, &catalog, &picks);

        let snapshot = aggregator.selections();
        let expected: u64 = snapshot.items().map(|item| item.price.cents()).sum();
        prop_assert_eq!(compute_total(&snapshot), Price::from_cents(expected));
    }

    #[test]
    fn total_is_order_independent(picks in picks()) {
        let catalog = StaticCatalog::builtin();

        // Deduplicate by category so every ordering ends with the same map
        let mut last: Vec<(usize, usize)> = Vec::new();
        for &(c, i) in &picks {
            last.retain(|&(lc, _)| lc != c);
            last.push((c, i));
        }
        let mut reversed = last.clone();
        reversed.reverse();

        let mut forward = SelectionAggregator::new();
        apply(&mut forward, &catalog, &last);
        let mut backward = SelectionAggregator::new();
        apply(&mut backward, &catalog, &reversed);

        prop_assert_eq!(forward.selections(), backward.selections());
        prop_assert_eq!(compute_total(forward.view()), compute_total(backward.view()));
    }

    #[test]
    fn reselect_keeps_size_and_last_wins(picks in picks(), c in 0..ComponentCategory::TOTAL) {
        let catalog = StaticCatalog::builtin();
        let mut aggregator = SelectionAggregator::new();
        apply(&mut aggregator, &catalog, &picks);

        let category = ComponentCategory::all().nth(c).unwrap();
        let items = catalog.items(category);
        aggregator.select(category, items[0].clone()).unwrap();
        let size = aggregator.len();
        let last = items[items.len() - 1].clone();
        aggregator.select(category, last.clone()).unwrap();

        prop_assert_eq!(aggregator.len(), size);
        prop_assert_eq!(aggregator.get(category), Some(&last));
    }

    #[test]
    fn clear_always_empties(picks in picks()) {
        let catalog = StaticCatalog::builtin();
        let mut aggregator = SelectionAggregator::new();
        apply(&mut aggregator, &catalog, &picks);
        aggregator.clear();
        prop_assert!(aggregator.selections().is_empty());
    }

    #[test]
    fn status_follows_selection_count(picks in picks()) {
        let catalog = StaticCatalog::builtin();
        let mut aggregator = SelectionAggregator::new();
        apply(&mut aggregator, &catalog, &picks);

        let status = compute_compatibility(aggregator.view(), ComponentCategory::TOTAL).status;
        let expected = match aggregator.len() {
            0 => CompatibilityStatus::None,
            1..=4 => CompatibilityStatus::Incomplete,
            _ => CompatibilityStatus::Compatible,
        };
        prop_assert_eq!(status, expected);
        prop_assert_ne!(status, CompatibilityStatus::Incompatible);
    }
}
