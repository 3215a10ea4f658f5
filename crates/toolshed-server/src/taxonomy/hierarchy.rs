//! Parent/child flattening shared by the external taxonomy and the internal
//! listing-category tree.
//!
//! Both hierarchies are presented as `<select>` style option lists where the
//! label is indented two spaces per depth level.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Indentation unit per depth level
pub const INDENT: &str = "  ";

/// A node that knows its own id and its parent's id
pub trait HierarchyNode {
    type Id: Eq + Hash + Clone;

    fn node_id(&self) -> Self::Id;
    fn parent_node_id(&self) -> Option<Self::Id>;
    fn display_label(&self) -> String;
}

/// One entry of a flattened hierarchy
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlatOption<Id> {
    pub id: Id,
    pub label: String,
    pub depth: usize,
}

/// Flatten `nodes` depth-first into indented options.
///
/// Roots are nodes without a parent or whose parent is not in `nodes`.
/// Siblings keep their input order. Nodes only reachable through a cycle are
/// emitted afterwards as roots so nothing is dropped, and every node appears
/// exactly once.
pub fn flatten_hierarchy<N: HierarchyNode>(nodes: &[N]) -> Vec<FlatOption<N::Id>> {
    flatten_to_depth(nodes, usize::MAX)
}

/// Like [`flatten_hierarchy`] but stops descending below `max_depth`
pub fn flatten_to_depth<N: HierarchyNode>(nodes: &[N], max_depth: usize) -> Vec<FlatOption<N::Id>> {
    let ids: HashSet<N::Id> = nodes.iter().map(HierarchyNode::node_id).collect();

    let mut children_of: HashMap<N::Id, Vec<usize>> = HashMap::new();
    let mut roots = Vec::new();
    for (idx, node) in nodes.iter().enumerate() {
        match node.parent_node_id() {
            Some(parent) if ids.contains(&parent) && parent != node.node_id() => {
                children_of.entry(parent).or_default().push(idx);
            },
            _ => roots.push(idx),
        }
    }

    let mut visited = vec![false; nodes.len()];
    let mut options = Vec::with_capacity(nodes.len());

    let walk = |start: usize, visited: &mut Vec<bool>, options: &mut Vec<FlatOption<N::Id>>| {
        let mut stack = vec![(start, 0usize)];
        while let Some((idx, depth)) = stack.pop() {
            if visited[idx] {
                continue;
            }
            visited[idx] = true;

            let node = &nodes[idx];
            options.push(FlatOption {
                id: node.node_id(),
                label: format!("{}{}", INDENT.repeat(depth), node.display_label()),
                depth,
            });

            if depth >= max_depth {
                continue;
            }
            if let Some(children) = children_of.get(&node.node_id()) {
                // reversed so the first child is popped first
                for &child in children.iter().rev() {
                    if !visited[child] {
                        stack.push((child, depth + 1));
                    }
                }
            }
        }
    };

    for &root in &roots {
        walk(root, &mut visited, &mut options);
    }

    if max_depth == usize::MAX {
        for idx in 0..nodes.len() {
            if !visited[idx] {
                walk(idx, &mut visited, &mut options);
            }
        }
    }

    options
}

impl HierarchyNode for super::models::TaxonomyNode {
    type Id = i64;

    fn node_id(&self) -> i64 {
        self.external_id
    }

    fn parent_node_id(&self) -> Option<i64> {
        self.parent_id
    }

    fn display_label(&self) -> String {
        self.label().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item {
        id: u32,
        parent: Option<u32>,
        name: &'static str,
    }

    impl HierarchyNode for Item {
        type Id = u32;

        fn node_id(&self) -> u32 {
            self.id
        }

        fn parent_node_id(&self) -> Option<u32> {
            self.parent
        }

        fn display_label(&self) -> String {
            self.name.to_string()
        }
    }

    fn item(id: u32, parent: Option<u32>, name: &'static str) -> Item {
        Item { id, parent, name }
    }

    fn labels(options: &[FlatOption<u32>]) -> Vec<&str> {
        options.iter().map(|o| o.label.as_str()).collect()
    }

    #[test]
    fn test_depth_first_with_indentation() {
        let items = vec![
            item(1, None, "Tools"),
            item(2, Some(1), "Hand Tools"),
            item(3, Some(2), "Hammers"),
            item(4, Some(1), "Power Tools"),
            item(5, None, "Garden"),
        ];
        let options = flatten_hierarchy(&items);
        assert_eq!(
            labels(&options),
            vec!["Tools", "  Hand Tools", "    Hammers", "  Power Tools", "Garden"]
        );
        assert_eq!(options[2].depth, 2);
    }

    #[test]
    fn test_dangling_parent_is_root() {
        let items = vec![item(1, Some(99), "Orphan"), item(2, Some(1), "Child")];
        assert_eq!(labels(&flatten_hierarchy(&items)), vec!["Orphan", "  Child"]);
    }

    #[test]
    fn test_cycle_is_emitted_once() {
        let items = vec![
            item(1, Some(2), "A"),
            item(2, Some(1), "B"),
            item(3, Some(3), "Self"),
        ];
        let options = flatten_hierarchy(&items);
        assert_eq!(options.len(), 3);
        assert_eq!(labels(&options), vec!["Self", "A", "  B"]);
    }

    #[test]
    fn test_max_depth_stops_descending() {
        let items = vec![
            item(1, None, "Tools"),
            item(2, Some(1), "Hand Tools"),
            item(3, Some(2), "Hammers"),
        ];
        let options = flatten_to_depth(&items, 1);
        assert_eq!(labels(&options), vec!["Tools", "  Hand Tools"]);
    }
}
