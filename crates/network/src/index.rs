//! Name-ordered index of stations.
//!
//! An unbalanced binary search tree keyed by station name. Nodes live in an
//! arena and link to each other by slot, with freed slots recycled. The index
//! only serves enumeration; routing never reads it.

use std::cmp::Ordering;

use crate::identifiers::StationName;

#[derive(Clone, Debug)]
struct TreeNode {
    name: StationName,
    left: Option<usize>,
    right: Option<usize>,
}

#[derive(Clone, Debug, Default)]
pub struct OrderedIndex {
    nodes: Vec<TreeNode>,
    free: Vec<usize>,
    root: Option<usize>,
    len: usize,
}

impl OrderedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a name. Exact duplicates are ignored and return `false`.
    pub fn insert(&mut self, name: StationName) -> bool {
        let Some(mut current) = self.root else {
            self.root = Some(self.alloc(name));
            self.len += 1;
            return true;
        };

        loop {
            let node = &self.nodes[current];
            let (ordering, left, right) = (name.cmp(&node.name), node.left, node.right);
            match ordering {
                Ordering::Less => match left {
                    Some(next) => current = next,
                    None => {
                        let slot = self.alloc(name);
                        self.nodes[current].left = Some(slot);
                        break;
                    }
                },
                Ordering::Greater => match right {
                    Some(next) => current = next,
                    None => {
                        let slot = self.alloc(name);
                        self.nodes[current].right = Some(slot);
                        break;
                    }
                },
                Ordering::Equal => return false,
            }
        }

        self.len += 1;
        true
    }

    /// Remove a name, returning whether it was present.
    pub fn remove(&mut self, name: &str) -> bool {
        let mut removed = false;
        self.root = self.remove_from(self.root, name, &mut removed);
        if removed {
            self.len -= 1;
        }
        removed
    }

    pub fn contains(&self, name: &str) -> bool {
        let mut cursor = self.root;
        while let Some(current) = cursor {
            let node = &self.nodes[current];
            cursor = match name.cmp(node.name.as_str()) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// All names in ascending lexicographic order.
    pub fn in_order(&self) -> Vec<StationName> {
        let mut out = Vec::with_capacity(self.len);
        let mut stack = Vec::new();
        let mut cursor = self.root;

        while cursor.is_some() || !stack.is_empty() {
            while let Some(current) = cursor {
                stack.push(current);
                cursor = self.nodes[current].left;
            }
            if let Some(current) = stack.pop() {
                out.push(self.nodes[current].name.clone());
                cursor = self.nodes[current].right;
            }
        }

        out
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn remove_from(&mut self, subtree: Option<usize>, name: &str, removed: &mut bool) -> Option<usize> {
        let current = subtree?;

        match name.cmp(self.nodes[current].name.as_str()) {
            Ordering::Less => {
                let left = self.nodes[current].left;
                self.nodes[current].left = self.remove_from(left, name, removed);
                Some(current)
            }
            Ordering::Greater => {
                let right = self.nodes[current].right;
                self.nodes[current].right = self.remove_from(right, name, removed);
                Some(current)
            }
            Ordering::Equal => {
                *removed = true;
                match (self.nodes[current].left, self.nodes[current].right) {
                    (None, right) => {
                        self.release(current);
                        right
                    }
                    (left, None) => {
                        self.release(current);
                        left
                    }
                    (Some(_), Some(right)) => {
                        // Promote the in-order successor, then delete it from the right subtree
                        let successor = self.min_node(right);
                        let promoted = self.nodes[successor].name.clone();
                        let mut successor_removed = false;
                        self.nodes[current].right =
                            self.remove_from(Some(right), promoted.as_str(), &mut successor_removed);
                        self.nodes[current].name = promoted;
                        Some(current)
                    }
                }
            }
        }
    }

    fn min_node(&self, mut current: usize) -> usize {
        while let Some(left) = self.nodes[current].left {
            current = left;
        }
        current
    }

    fn alloc(&mut self, name: StationName) -> usize {
        let node = TreeNode {
            name,
            left: None,
            right: None,
        };
        match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = node;
                slot
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    fn release(&mut self, slot: usize) {
        self.nodes[slot].left = None;
        self.nodes[slot].right = None;
        self.free.push(slot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_of(names: &[&str]) -> OrderedIndex {
        let mut index = OrderedIndex::new();
        for name in names {
            index.insert((*name).into());
        }
        index
    }

    fn names(index: &OrderedIndex) -> Vec<String> {
        index.in_order().iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_in_order_ignores_insertion_order() {
        let index = index_of(&["D", "B", "A", "C"]);
        assert_eq!(names(&index), vec!["A", "B", "C", "D"]);
        assert_eq!(index.len(), 4);
    }

    #[test]
    fn test_duplicate_insert_ignored() {
        let mut index = index_of(&["B", "A"]);
        assert!(!index.insert("A".into()));
        assert_eq!(names(&index), vec!["A", "B"]);
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_remove_leaf_and_single_child() {
        //     M
        //    / \
        //   F   T
        //    \
        //     H
        let mut index = index_of(&["M", "F", "T", "H"]);

        assert!(index.remove("H")); // leaf
        assert_eq!(names(&index), vec!["F", "M", "T"]);

        index.insert("H".into());
        assert!(index.remove("F")); // one child
        assert_eq!(names(&index), vec!["H", "M", "T"]);
        assert!(index.contains("H"));
        assert!(!index.contains("F"));
    }

    #[test]
    fn test_remove_two_children_promotes_successor() {
        //       M
        //     /   \
        //    F     T
        //   / \   / \
        //  B   H P   X
        //         \
        //          R
        let mut index = index_of(&["M", "F", "T", "B", "H", "P", "X", "R"]);

        assert!(index.remove("M")); // root with two children
        assert_eq!(names(&index), vec!["B", "F", "H", "P", "R", "T", "X"]);
        assert!(index.remove("T"));
        assert_eq!(names(&index), vec!["B", "F", "H", "P", "R", "X"]);
        assert!(index.remove("F"));
        assert_eq!(names(&index), vec!["B", "H", "P", "R", "X"]);
        assert_eq!(index.len(), 5);
    }

    #[test]
    fn test_remove_missing() {
        let mut index = index_of(&["A"]);
        assert!(!index.remove("Z"));
        assert_eq!(index.len(), 1);

        assert!(index.remove("A"));
        assert!(index.is_empty());
        assert!(index.in_order().is_empty());
        assert!(!index.remove("A"));
    }

    #[test]
    fn test_slots_are_recycled() {
        let mut index = index_of(&["A", "B", "C"]);
        index.remove("B");
        index.remove("C");
        index.insert("E".into());
        index.insert("D".into());

        assert_eq!(index.nodes.len(), 3);
        assert_eq!(names(&index), vec!["A", "D", "E"]);
    }
}
