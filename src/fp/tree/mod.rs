// Tree module - FP-Tree arena and the operations on it

mod tree;
mod tree_ops;

pub use tree::{FPNode, FPTree, ROOT};
