//! Frequent itemset mining and association rules for basket data.
//!
//! The main engine is FP-Growth: transactions are compressed into a shared
//! prefix tree ordered by item frequency, then mined by recursively slicing
//! conditional trees per item. A level-wise Apriori engine over a one-hot
//! matrix produces the same itemsets and serves as a cross-check.
//!
//! ```
//! use itemsets::{find_frequent_itemsets, FrequencyOrder};
//!
//! let baskets = vec![vec!["milk", "bread"], vec!["milk", "eggs"], vec!["milk", "bread", "eggs"]];
//! let itemsets = find_frequent_itemsets(&baskets, 2usize, FrequencyOrder::Descending).unwrap();
//!
//! assert_eq!(itemsets.support_of(&["milk"]), Some(3));
//! assert_eq!(itemsets.support_of(&["bread", "milk"]), Some(2));
//! assert_eq!(itemsets.support_of(&["bread", "eggs"]), None);
//! ```

pub mod apriori;
pub mod config;
pub mod error;
pub mod fp;
pub mod item;
pub mod pipeline;
pub mod rules;

pub use apriori::{apriori, BasketMatrix};
pub use config::{Engine, FrequencyOrder, MinSupport, MiningConfig};
pub use error::{ErrorKind, MiningError, Result};
pub use fp::{find_frequent_itemsets, FPTree, FrequentItemsets, FrequentLevel};
pub use item::{Item, ROOT_MARKER};
pub use pipeline::{mine, MiningReport};
pub use rules::{find_rules, Contingency, Measure, Rule, RuleOptions};
