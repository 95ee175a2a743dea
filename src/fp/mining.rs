use std::collections::BTreeMap;

use tracing::{debug, trace};

use super::builder::build_fp_tree;
use super::conditional::conditional_tree;
use super::storage::FrequentItemsets;
use super::tree::FPTree;
use crate::config::{FrequencyOrder, MinSupport};
use crate::error::Result;
use crate::item::Item;

/// Support of one item in its conditioning context, with the frequent
/// extensions found in its conditional tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern<I> {
    pub support: usize,
    pub extensions: PatternTree<I>,
}

/// Nested mining result: each key is an item, and the path of keys from the
/// top down to it (read upwards) is one frequent itemset.
pub type PatternTree<I> = BTreeMap<I, Pattern<I>>;

/// Mines `tree` into a nested [`PatternTree`].
///
/// Items are visited from the least to the most frequent rank. An item below
/// `min_count` is skipped without descending into its conditional tree.
pub fn mine<I: Item>(tree: &FPTree<I>, min_count: usize) -> PatternTree<I> {
    let mut patterns = PatternTree::new();

    for item in tree.item_order.iter().rev() {
        let support = tree.support(item);
        if support < min_count {
            trace!(?item, support, min_count, "skipping infrequent item");
            continue;
        }

        let cond_tree = conditional_tree(tree, item);
        patterns.insert(
            item.clone(),
            Pattern {
                support,
                extensions: mine(&cond_tree, min_count),
            },
        );
    }

    patterns
}

/// Flattens a [`PatternTree`] depth first into `(itemset, support)` pairs.
pub fn flatten<I: Item>(patterns: &PatternTree<I>) -> FrequentItemsets<I> {
    fn walk<I: Item>(
        patterns: &PatternTree<I>,
        suffix: &mut Vec<I>,
        out: &mut FrequentItemsets<I>,
    ) {
        for (item, pattern) in patterns {
            suffix.push(item.clone());
            out.push(suffix.clone(), pattern.support);
            walk(&pattern.extensions, suffix, out);
            suffix.pop();
        }
    }

    let mut out = FrequentItemsets::new();
    walk(patterns, &mut Vec::new(), &mut out);
    out
}

/// Mines `tree` straight into flat itemsets, without building the nested
/// result first.
pub fn mine_flat<I: Item>(tree: &FPTree<I>, min_count: usize) -> FrequentItemsets<I> {
    let mut out = FrequentItemsets::new();
    grow_suffix(tree, min_count, &mut Vec::new(), &mut out);
    out
}

fn grow_suffix<I: Item>(
    tree: &FPTree<I>,
    min_count: usize,
    suffix: &mut Vec<I>,
    out: &mut FrequentItemsets<I>,
) {
    for item in tree.item_order.iter().rev() {
        let support = tree.support(item);
        if support < min_count {
            trace!(?item, support, min_count, "skipping infrequent item");
            continue;
        }

        suffix.push(item.clone());
        out.push(suffix.clone(), support);

        let cond_tree = conditional_tree(tree, item);
        trace!(
            ?item,
            support,
            depth = suffix.len(),
            nodes = cond_tree.node_count(),
            "descending into conditional tree"
        );
        grow_suffix(&cond_tree, min_count, suffix, out);

        suffix.pop();
    }
}

/// Finds every itemset contained in at least `min_support` of
/// `transactions`, with its exact support count.
///
/// Output order follows the mining traversal; call
/// [`FrequentItemsets::sort_canonical`] for a stable order. `order` only
/// changes the shape of the prefix tree, never the result.
pub fn find_frequent_itemsets<I, T>(
    transactions: &[T],
    min_support: impl Into<MinSupport>,
    order: FrequencyOrder,
) -> Result<FrequentItemsets<I>>
where
    I: Item,
    T: AsRef<[I]>,
{
    let min_count = min_support.into().resolve(transactions.len())?;
    let fp_tree = build_fp_tree(transactions, min_count, order)?;
    let itemsets = mine_flat(&fp_tree, min_count);

    debug!(
        transactions = transactions.len(),
        min_count,
        itemsets = itemsets.len(),
        "fp-growth finished"
    );

    Ok(itemsets)
}
