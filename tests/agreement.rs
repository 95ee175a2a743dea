use std::collections::BTreeSet;

use itemsets::{apriori, find_frequent_itemsets, FrequencyOrder, FrequentItemsets};
use proptest::prelude::*;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn arb_transactions() -> impl Strategy<Value = Vec<Vec<u8>>> {
    prop::collection::vec(
        prop::collection::btree_set(0u8..8, 0..6)
            .prop_map(|items: BTreeSet<u8>| items.into_iter().collect::<Vec<u8>>()),
        0..30,
    )
}

fn canonical(mut itemsets: FrequentItemsets<u8>) -> Vec<(Vec<u8>, usize)> {
    itemsets.sort_canonical();
    itemsets.to_vec()
}

/// Counts every combination of the items that occur, keeping those at or
/// above `min_count`.
fn brute_force(transactions: &[Vec<u8>], min_count: usize) -> Vec<(Vec<u8>, usize)> {
    let items: Vec<u8> = transactions
        .iter()
        .flatten()
        .copied()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let mut found = Vec::new();
    for mask in 1u32..(1 << items.len()) {
        let itemset: Vec<u8> = (0..items.len())
            .filter(|bit| mask & (1 << bit) != 0)
            .map(|bit| items[bit])
            .collect();
        let support = transactions
            .iter()
            .filter(|tx| itemset.iter().all(|item| tx.contains(item)))
            .count();
        if support >= min_count {
            found.push((itemset, support));
        }
    }
    found.sort_by(|a, b| a.0.len().cmp(&b.0.len()).then_with(|| a.0.cmp(&b.0)));
    found
}

proptest! {
    #[test]
    fn fp_growth_finds_exactly_the_frequent_itemsets(
        transactions in arb_transactions(),
        min_count in 1usize..5,
    ) {
        init_tracing();
        let itemsets = find_frequent_itemsets(&transactions, min_count, FrequencyOrder::Descending).unwrap();
        prop_assert_eq!(canonical(itemsets), brute_force(&transactions, min_count));
    }

    #[test]
    fn apriori_agrees_with_fp_growth(
        transactions in arb_transactions(),
        min_count in 1usize..5,
    ) {
        let fp = find_frequent_itemsets(&transactions, min_count, FrequencyOrder::Descending).unwrap();
        let level_wise = apriori(&transactions, min_count).unwrap();
        prop_assert_eq!(canonical(fp), canonical(level_wise));
    }

    #[test]
    fn frequency_order_only_changes_tree_shape(
        transactions in arb_transactions(),
        min_count in 1usize..5,
    ) {
        let descending = find_frequent_itemsets(&transactions, min_count, FrequencyOrder::Descending).unwrap();
        let ascending = find_frequent_itemsets(&transactions, min_count, FrequencyOrder::Ascending).unwrap();
        prop_assert_eq!(canonical(descending), canonical(ascending));
    }

    #[test]
    fn repeated_runs_are_identical(
        transactions in arb_transactions(),
        min_count in 1usize..5,
    ) {
        let first = find_frequent_itemsets(&transactions, min_count, FrequencyOrder::Descending).unwrap();
        let second = find_frequent_itemsets(&transactions, min_count, FrequencyOrder::Descending).unwrap();
        prop_assert_eq!(canonical(first), canonical(second));
    }

    #[test]
    fn transaction_order_does_not_matter(
        transactions in arb_transactions(),
        min_count in 1usize..5,
    ) {
        let mut reversed = transactions.clone();
        reversed.reverse();
        let forward = find_frequent_itemsets(&transactions, min_count, FrequencyOrder::Descending).unwrap();
        let backward = find_frequent_itemsets(&reversed, min_count, FrequencyOrder::Descending).unwrap();
        prop_assert_eq!(canonical(forward), canonical(backward));
    }
}
