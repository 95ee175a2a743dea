use std::collections::HashMap;

use super::tree::{FPTree, ROOT};
use crate::item::Item;

/// Builds the conditional tree of `item`: a fresh copy of every lineage
/// that ends in a node carrying `item`.
///
/// Each copied node counts the occurrences of `item` flowing through it,
/// so an ancestor's count is the sum of the original counts of the `item`
/// nodes below it, not its own original count. The `item` nodes become the
/// leaves and the tree's anchor; `item_order` keeps the source ranking of
/// the other items that survive.
///
/// The source tree is not modified and shares no nodes with the result.
pub fn conditional_tree<I: Item>(tree: &FPTree<I>, item: &I) -> FPTree<I> {
    let mut cond_tree = FPTree::new(tree.order);
    let mut copied: HashMap<usize, usize> = HashMap::new();
    copied.insert(ROOT, ROOT);

    for &leaf in tree.cluster(item) {
        let flow = tree.nodes[leaf].count;
        let mut parent = ROOT;

        // Create from the root side down so parents exist before children.
        for src in tree.lineage(leaf).into_iter().rev() {
            let id = match copied.get(&src) {
                Some(&id) => id,
                None => {
                    let Some(src_item) = tree.nodes[src].item.clone() else {
                        continue;
                    };
                    let id = cond_tree.push_node(src_item, 0, parent);
                    copied.insert(src, id);
                    id
                }
            };
            cond_tree.nodes[id].count += flow;
            parent = id;
        }
    }

    cond_tree.item_order = tree
        .item_order
        .iter()
        .filter(|candidate| *candidate != item && cond_tree.header_table.contains_key(*candidate))
        .cloned()
        .collect();
    cond_tree.anchor = Some(item.clone());

    cond_tree
}
