pub mod builder;
pub mod conditional;
pub mod mining;
pub mod storage;
pub mod tree;

pub use builder::{build_fp_tree, transactions_from_one_hot};
pub use conditional::conditional_tree;
pub use mining::{find_frequent_itemsets, flatten, mine, mine_flat, Pattern, PatternTree};
pub use storage::{FrequentItemsets, FrequentLevel};
pub use tree::{FPNode, FPTree, ROOT};
