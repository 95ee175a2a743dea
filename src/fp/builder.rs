use std::collections::{HashMap, HashSet};

use ndarray::{ArrayView2, Axis};
use tracing::debug;

use super::tree::FPTree;
use crate::config::FrequencyOrder;
use crate::error::{MiningError, Result};
use crate::item::Item;

/// Global frequency of one item and the position of its first appearance,
/// which breaks frequency ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemCount {
    pub count: usize,
    pub first_seen: usize,
}

/// Fails with [`MiningError::ReservedItem`] on the first transaction that
/// carries the root marker.
pub fn validate_transactions<I, T>(transactions: &[T]) -> Result<()>
where
    I: Item,
    T: AsRef<[I]>,
{
    for (tx_idx, transaction) in transactions.iter().enumerate() {
        if transaction.as_ref().iter().any(Item::is_root_marker) {
            return Err(MiningError::ReservedItem {
                transaction: tx_idx,
            });
        }
    }
    Ok(())
}

/// Counts the transactions containing each item. Repeats of an item inside
/// one transaction count once.
pub fn count_items<I, T>(transactions: &[T]) -> HashMap<I, ItemCount>
where
    I: Item,
    T: AsRef<[I]>,
{
    let mut counts: HashMap<I, ItemCount> = HashMap::new();
    let mut seen_in_tx: HashSet<&I> = HashSet::new();

    for transaction in transactions {
        seen_in_tx.clear();
        for item in transaction.as_ref() {
            if !seen_in_tx.insert(item) {
                continue;
            }
            let next_seen = counts.len();
            counts
                .entry(item.clone())
                .or_insert(ItemCount {
                    count: 0,
                    first_seen: next_seen,
                })
                .count += 1;
        }
    }

    counts
}

/// Items with a count of at least `min_count`, ranked by count in `order`
/// with ties kept in first-appearance order.
pub fn rank_items<I: Item>(
    counts: &HashMap<I, ItemCount>,
    min_count: usize,
    order: FrequencyOrder,
) -> Vec<I> {
    let mut frequent_items: Vec<(&I, ItemCount)> = counts
        .iter()
        .filter(|(_, stats)| stats.count >= min_count)
        .map(|(item, &stats)| (item, stats))
        .collect();

    frequent_items.sort_unstable_by(|a, b| {
        let by_count = match order {
            FrequencyOrder::Descending => b.1.count.cmp(&a.1.count),
            FrequencyOrder::Ascending => a.1.count.cmp(&b.1.count),
        };
        by_count.then(a.1.first_seen.cmp(&b.1.first_seen))
    });

    frequent_items
        .into_iter()
        .map(|(item, _)| item.clone())
        .collect()
}

/// Builds the prefix tree over `transactions`, keeping only items that
/// occur in at least `min_count` of them.
///
/// Validation happens before the first insertion, so an error never leaves
/// a partially built tree behind.
pub fn build_fp_tree<I, T>(
    transactions: &[T],
    min_count: usize,
    order: FrequencyOrder,
) -> Result<FPTree<I>>
where
    I: Item,
    T: AsRef<[I]>,
{
    validate_transactions(transactions)?;

    let counts = count_items(transactions);
    let ordered_items = rank_items(&counts, min_count, order);
    let rank: HashMap<&I, usize> = ordered_items
        .iter()
        .enumerate()
        .map(|(pos, item)| (item, pos))
        .collect();

    let mut fp_tree = FPTree::new(order);
    let mut tx_items: Vec<(usize, I)> = Vec::new();

    for transaction in transactions {
        tx_items.clear();
        tx_items.extend(
            transaction
                .as_ref()
                .iter()
                .filter_map(|item| rank.get(item).map(|&pos| (pos, item.clone()))),
        );
        tx_items.sort_unstable_by_key(|(pos, _)| *pos);
        tx_items.dedup_by_key(|(pos, _)| *pos);

        if !tx_items.is_empty() {
            let path: Vec<I> = tx_items.iter().map(|(_, item)| item.clone()).collect();
            fp_tree.insert_transaction(&path, 1);
        }
    }

    fp_tree.item_order = ordered_items;

    debug!(
        transactions = transactions.len(),
        distinct_items = counts.len(),
        frequent_items = fp_tree.item_order.len(),
        nodes = fp_tree.node_count(),
        min_count,
        "built prefix tree"
    );

    Ok(fp_tree)
}

/// Converts a one-hot transaction matrix (rows are transactions, a non-zero
/// cell at column `j` means item `j` is present) into item lists.
pub fn transactions_from_one_hot(matrix: ArrayView2<i32>) -> Vec<Vec<usize>> {
    matrix
        .axis_iter(Axis(0))
        .map(|row| {
            row.iter()
                .enumerate()
                .filter_map(|(item, &cell)| (cell != 0).then_some(item))
                .collect()
        })
        .collect()
}
