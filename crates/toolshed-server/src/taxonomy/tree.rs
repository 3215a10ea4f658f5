//! Tree queries over a [`TaxonomyStore`]
//!
//! Subtrees are expanded with a breadth-first worklist and assembled bottom-up,
//! so depth is bounded by `max_depth` rather than the call stack, and a node id
//! is expanded at most once even if the stored parent links form a cycle.

use futures::future::try_join_all;
use std::collections::HashSet;
use tracing::{debug, warn};

use super::hierarchy::{flatten_to_depth, FlatOption};
use super::models::TaxonomyNode;
use super::store::TaxonomyStore;
use crate::error::StoreResult;

/// Deepest subtree a single request may expand
pub const MAX_TREE_DEPTH: u32 = 10;

/// Upper bound on ancestor hops when building breadcrumbs
pub const MAX_BREADCRUMB_DEPTH: usize = 64;

/// Fetch `external_id` with `children` populated `max_depth` levels deep.
///
/// `max_depth == 0` leaves `children` as `None`. Nodes at the last expanded
/// level also keep `children == None`, while an expanded node without children
/// gets `Some(vec![])`. Returns `None` when the root is missing or inactive.
pub async fn get_tree(
    store: &dyn TaxonomyStore,
    external_id: i64,
    max_depth: u32,
) -> StoreResult<Option<TaxonomyNode>> {
    let Some(root) = store.get_node(external_id).await? else {
        return Ok(None);
    };
    if max_depth == 0 {
        return Ok(Some(root));
    }

    let mut slots: Vec<Option<TaxonomyNode>> = vec![Some(root)];
    let mut kids: Vec<Vec<usize>> = vec![Vec::new()];
    let mut expanded = vec![false];
    let mut visited: HashSet<i64> = HashSet::from([external_id]);
    let mut frontier: Vec<usize> = vec![0];

    for depth in 0..max_depth {
        if frontier.is_empty() {
            break;
        }
        let parents: Vec<(usize, i64)> = frontier
            .iter()
            .filter_map(|&idx| slots[idx].as_ref().map(|node| (idx, node.external_id)))
            .collect();
        // one level is fetched concurrently, then linked in parent order
        let levels = try_join_all(parents.iter().map(|&(_, id)| store.get_children(Some(id)))).await?;

        let mut next = Vec::new();
        for (&(idx, id), children) in parents.iter().zip(levels) {
            expanded[idx] = true;

            for child in children {
                if !visited.insert(child.external_id) {
                    warn!(
                        parent = id,
                        child = child.external_id,
                        "Taxonomy cycle detected, skipping revisited node"
                    );
                    continue;
                }
                let child_idx = slots.len();
                slots.push(Some(child));
                kids.push(Vec::new());
                expanded.push(false);
                kids[idx].push(child_idx);
                next.push(child_idx);
            }
        }
        debug!(depth = depth + 1, nodes = next.len(), "Expanded taxonomy level");
        frontier = next;
    }

    // children always have larger indices than their parent
    for idx in (0..slots.len()).rev() {
        if !expanded[idx] {
            continue;
        }
        let children: Vec<TaxonomyNode> = kids[idx]
            .iter()
            .filter_map(|&child| slots[child].take())
            .collect();
        if let Some(node) = slots[idx].as_mut() {
            node.children = Some(children);
        }
    }

    Ok(slots[0].take())
}

/// Ancestors of `external_id` from the root down to the node itself.
///
/// The walk stops at a root, at a missing or inactive parent, on a revisited
/// id, or after [`MAX_BREADCRUMB_DEPTH`] hops. Returns an empty list when the
/// node itself is missing or inactive.
pub async fn get_breadcrumbs(
    store: &dyn TaxonomyStore,
    external_id: i64,
) -> StoreResult<Vec<TaxonomyNode>> {
    let mut chain = Vec::new();
    let mut visited = HashSet::new();
    let mut current = Some(external_id);

    while let Some(id) = current {
        if chain.len() >= MAX_BREADCRUMB_DEPTH || !visited.insert(id) {
            warn!(external_id, at = id, "Breadcrumb walk truncated");
            break;
        }
        let Some(node) = store.get_node(id).await? else {
            break;
        };
        current = node.parent_id;
        chain.push(node);
    }

    chain.reverse();
    Ok(chain)
}

/// Active taxonomy flattened into indented options, roots and orphans first
/// level, at most `max_depth` levels below them.
///
/// Each level's children are fetched concurrently, so the store sees one
/// round of requests per level.
pub async fn taxonomy_options(
    store: &dyn TaxonomyStore,
    max_depth: u32,
) -> StoreResult<Vec<FlatOption<i64>>> {
    let mut nodes = Vec::new();
    let mut frontier = store.get_children(None).await?;
    let mut seen: HashSet<i64> = frontier.iter().map(|n| n.external_id).collect();

    for _ in 0..max_depth {
        if frontier.is_empty() {
            break;
        }
        let levels =
            try_join_all(frontier.iter().map(|node| store.get_children(Some(node.external_id)))).await?;
        let next: Vec<TaxonomyNode> = levels
            .into_iter()
            .flatten()
            .filter(|child| seen.insert(child.external_id))
            .collect();
        nodes.append(&mut frontier);
        frontier = next;
    }
    nodes.append(&mut frontier);

    // the walk above collected whole levels; flattening restores parent order
    Ok(flatten_to_depth(&nodes, max_depth as usize))
}
