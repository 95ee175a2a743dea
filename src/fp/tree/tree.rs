use std::collections::HashMap;

use crate::config::FrequencyOrder;
use crate::item::Item;

/// Arena index of the synthetic root.
pub const ROOT: usize = 0;

/// A node of the prefix tree. Its id is its index in the tree's arena.
#[derive(Debug, Clone)]
pub struct FPNode<I> {
    /// `None` only for the root.
    pub item: Option<I>,
    /// Transactions flowing through this node; always zero for the root.
    pub count: usize,
    pub parent: Option<usize>,
    /// Child ids keyed by their item. A node never has two children with
    /// the same item.
    pub children: HashMap<I, usize>,
    /// Distance from the root.
    pub depth: usize,
}

/// Shared prefix tree over frequency-ordered transactions.
///
/// Node ids are dense and increase in creation order. `header_table` maps
/// every item to the ids of the nodes carrying it (its cluster), in
/// creation order.
///
/// `item_order` ranks the items still to be mined. For a conditional tree
/// the conditioning item sits at the leaves and is held apart in `anchor`;
/// it terminates the order rather than appearing in it.
#[derive(Debug, Clone)]
pub struct FPTree<I> {
    pub(crate) nodes: Vec<FPNode<I>>,
    pub(crate) header_table: HashMap<I, Vec<usize>>,
    pub(crate) item_order: Vec<I>,
    pub(crate) anchor: Option<I>,
    pub(crate) order: FrequencyOrder,
}

impl<I> FPNode<I> {
    pub fn new_root() -> Self {
        Self {
            item: None,
            count: 0,
            parent: None,
            children: HashMap::new(),
            depth: 0,
        }
    }

    pub fn new_item(item: I, count: usize, parent: usize, depth: usize) -> Self {
        Self {
            item: Some(item),
            count,
            parent: Some(parent),
            children: HashMap::new(),
            depth,
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

impl<I: Item> Default for FPTree<I> {
    fn default() -> Self {
        Self::new(FrequencyOrder::default())
    }
}

impl<I: Item> FPTree<I> {
    /// A tree holding only the root.
    pub fn new(order: FrequencyOrder) -> Self {
        Self {
            nodes: vec![FPNode::new_root()],
            header_table: HashMap::new(),
            item_order: Vec::new(),
            anchor: None,
            order,
        }
    }

    pub fn node(&self, id: usize) -> Option<&FPNode<I>> {
        self.nodes.get(id)
    }

    pub fn nodes(&self) -> &[FPNode<I>] {
        &self.nodes
    }

    /// Ids of the nodes carrying `item`; empty when the item is absent.
    pub fn cluster(&self, item: &I) -> &[usize] {
        self.header_table.get(item).map_or(&[], Vec::as_slice)
    }

    pub fn item_order(&self) -> &[I] {
        &self.item_order
    }

    /// The conditioning item of a conditional tree; `None` for a tree
    /// built from transactions.
    pub fn anchor(&self) -> Option<&I> {
        self.anchor.as_ref()
    }

    pub fn order(&self) -> FrequencyOrder {
        self.order
    }

    /// Number of nodes, root excluded.
    pub fn node_count(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Depth of the deepest node, root excluded.
    pub fn max_depth(&self) -> usize {
        self.nodes.iter().map(|node| node.depth).max().unwrap_or(0)
    }
}
