//! Level-wise Apriori over a one-hot basket matrix.
//!
//! Slower than FP-Growth on dense data, but simple enough to serve as a
//! cross-check: both engines report the same itemsets with the same counts.

use std::collections::{HashMap, HashSet};

use ndarray::{Array2, ArrayView2, Axis};
use tracing::debug;

use crate::config::MinSupport;
use crate::error::Result;
use crate::fp::builder::validate_transactions;
use crate::fp::{FrequentItemsets, FrequentLevel};
use crate::item::Item;

/// Transactions as a dense 0/1 matrix: one row per transaction, one column
/// per distinct item in first-appearance order.
#[derive(Debug, Clone)]
pub struct BasketMatrix<I> {
    items: Vec<I>,
    matrix: Array2<u8>,
}

/// Candidate or frequent itemset as sorted column indices, with its count.
type ColumnSet = (Vec<usize>, usize);

impl<I: Item> BasketMatrix<I> {
    pub fn from_transactions<T: AsRef<[I]>>(transactions: &[T]) -> Self {
        let mut columns: HashMap<I, usize> = HashMap::new();
        let mut items = Vec::new();

        for transaction in transactions {
            for item in transaction.as_ref() {
                columns.entry(item.clone()).or_insert_with(|| {
                    items.push(item.clone());
                    items.len() - 1
                });
            }
        }

        let mut matrix = Array2::zeros((transactions.len(), items.len()));
        for (row, transaction) in transactions.iter().enumerate() {
            for item in transaction.as_ref() {
                matrix[[row, columns[item]]] = 1;
            }
        }

        Self { items, matrix }
    }

    pub fn items(&self) -> &[I] {
        &self.items
    }

    pub fn transaction_count(&self) -> usize {
        self.matrix.nrows()
    }

    /// Number of transactions containing each column's item.
    pub fn column_counts(&self) -> Vec<usize> {
        self.matrix
            .axis_iter(Axis(1))
            .map(|column| column.iter().filter(|&&cell| cell != 0).count())
            .collect()
    }

    /// Number of transactions containing every one of `columns`.
    pub fn count_rows_with(&self, columns: &[usize]) -> usize {
        self.matrix
            .axis_iter(Axis(0))
            .filter(|row| columns.iter().all(|&col| row[col] != 0))
            .count()
    }

    /// Frequent itemsets grouped by size, smallest first.
    pub fn frequent_levels(&self, min_count: usize) -> Vec<FrequentLevel<I>> {
        let min_count = min_count.max(1);
        let mut current: Vec<ColumnSet> = self
            .column_counts()
            .into_iter()
            .enumerate()
            .filter(|&(_, count)| count >= min_count)
            .map(|(col, count)| (vec![col], count))
            .collect();

        let mut levels = Vec::new();
        while !current.is_empty() {
            let next = self.join_level(&current, min_count);

            let mut level = FrequentLevel::new(current[0].0.len());
            for (columns, count) in &current {
                let itemset = columns.iter().map(|&col| self.items[col].clone()).collect();
                level.add_itemset(itemset, *count);
            }
            debug!(
                itemset_size = level.itemset_size,
                itemsets = level.len(),
                "apriori level complete"
            );
            levels.push(level);

            current = next;
        }

        levels
    }

    pub fn frequent_itemsets(&self, min_count: usize) -> FrequentItemsets<I> {
        let mut itemsets = FrequentItemsets::new();
        for level in self.frequent_levels(min_count) {
            itemsets.extend_from(level.storage);
        }
        itemsets
    }

    /// Joins pairs of frequent k-sets sharing their first k-1 columns into
    /// (k+1)-candidates, drops candidates with an infrequent k-subset, and
    /// keeps those whose row count reaches `min_count`.
    ///
    /// `previous` must be sorted lexicographically, which keeps the output
    /// sorted too.
    fn join_level(&self, previous: &[ColumnSet], min_count: usize) -> Vec<ColumnSet> {
        let known: HashSet<&[usize]> = previous.iter().map(|(cols, _)| cols.as_slice()).collect();
        let mut next = Vec::new();

        for (i, (left, _)) in previous.iter().enumerate() {
            let prefix_len = left.len() - 1;
            for (right, _) in &previous[i + 1..] {
                if left[..prefix_len] != right[..prefix_len] {
                    break;
                }

                let mut candidate = left.clone();
                candidate.push(right[prefix_len]);

                if !all_subsets_known(&candidate, &known) {
                    continue;
                }

                let count = self.count_rows_with(&candidate);
                if count >= min_count {
                    next.push((candidate, count));
                }
            }
        }

        next
    }
}

impl BasketMatrix<usize> {
    /// Wraps a one-hot matrix whose column index is the item.
    pub fn from_one_hot(matrix: ArrayView2<i32>) -> Self {
        Self {
            items: (0..matrix.ncols()).collect(),
            matrix: matrix.mapv(|cell| u8::from(cell != 0)),
        }
    }
}

fn all_subsets_known(candidate: &[usize], known: &HashSet<&[usize]>) -> bool {
    if candidate.len() <= 2 {
        return true;
    }
    let mut subset = Vec::with_capacity(candidate.len() - 1);
    (0..candidate.len()).all(|skip| {
        subset.clear();
        subset.extend(
            candidate
                .iter()
                .enumerate()
                .filter(|&(pos, _)| pos != skip)
                .map(|(_, &col)| col),
        );
        known.contains(subset.as_slice())
    })
}

/// Finds every itemset contained in at least `min_support` of
/// `transactions` by level-wise candidate generation.
pub fn apriori<I, T>(transactions: &[T], min_support: impl Into<MinSupport>) -> Result<FrequentItemsets<I>>
where
    I: Item,
    T: AsRef<[I]>,
{
    let min_count = min_support.into().resolve(transactions.len())?;
    validate_transactions(transactions)?;

    let basket = BasketMatrix::from_transactions(transactions);
    let itemsets = basket.frequent_itemsets(min_count);

    debug!(
        transactions = transactions.len(),
        items = basket.items().len(),
        min_count,
        itemsets = itemsets.len(),
        "apriori finished"
    );

    Ok(itemsets)
}
