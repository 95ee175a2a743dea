use super::tree::{FPNode, FPTree, ROOT};
use crate::item::Item;

impl<I: Item> FPTree<I> {
    /// Walks `transaction` down from the root, adding `count` to every node
    /// on the path and creating the nodes that are missing.
    ///
    /// The items must already be filtered and ranked.
    pub fn insert_transaction(&mut self, transaction: &[I], count: usize) {
        let mut current_index = ROOT;

        for item in transaction {
            if let Some(&child_index) = self.nodes[current_index].children.get(item) {
                self.nodes[child_index].count += count;
                current_index = child_index;
            } else {
                current_index = self.push_node(item.clone(), count, current_index);
            }
        }
    }

    /// Appends a new node under `parent` and registers it in the item's
    /// cluster. Returns the new id.
    pub(crate) fn push_node(&mut self, item: I, count: usize, parent: usize) -> usize {
        let new_index = self.nodes.len();
        let depth = self.nodes[parent].depth + 1;

        self.nodes[parent].children.insert(item.clone(), new_index);
        self.header_table
            .entry(item.clone())
            .or_default()
            .push(new_index);
        self.nodes
            .push(FPNode::new_item(item, count, parent, depth));

        new_index
    }

    /// Sum of the counts of every node carrying `item`.
    pub fn support(&self, item: &I) -> usize {
        self.cluster(item)
            .iter()
            .map(|&idx| self.nodes[idx].count)
            .sum()
    }

    /// Ids from `id` up to, but excluding, the root.
    pub fn lineage(&self, id: usize) -> Vec<usize> {
        let mut path = Vec::with_capacity(self.nodes[id].depth);
        let mut current = Some(id);

        while let Some(idx) = current {
            if idx == ROOT {
                break;
            }
            path.push(idx);
            current = self.nodes[idx].parent;
        }

        path
    }

    /// Items on the path above `id`, ordered from the root down.
    pub fn prefix_path(&self, id: usize) -> Vec<I> {
        let mut path: Vec<I> = self
            .lineage(id)
            .into_iter()
            .skip(1)
            .filter_map(|idx| self.nodes[idx].item.clone())
            .collect();
        path.reverse();
        path
    }

    /// Child ids of `id` in creation order.
    pub fn children(&self, id: usize) -> Vec<usize> {
        let mut children: Vec<usize> = self.nodes[id].children.values().copied().collect();
        children.sort_unstable();
        children
    }

    /// Node ids grouped by depth; `levels()[0]` is the root alone.
    pub fn levels(&self) -> Vec<Vec<usize>> {
        let mut levels: Vec<Vec<usize>> = vec![Vec::new(); self.max_depth() + 1];
        for (idx, node) in self.nodes.iter().enumerate() {
            levels[node.depth].push(idx);
        }
        levels
    }
}
