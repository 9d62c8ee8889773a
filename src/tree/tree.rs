//! Tree operations: insert, attach, detach, remove, walk.

use std::collections::VecDeque;

use slotmap::{SecondaryMap, SlotMap};

use super::node::{WidgetId, WidgetNode};

const NO_CHILDREN: &[WidgetId] = &[];

/// The widget tree, backed by a slotmap arena.
///
/// Every node lives in a single `SlotMap`. Parent/child relationships are kept
/// in secondary maps, so removal is O(subtree size) and lookup is O(1). Nodes
/// may exist detached (created but not yet added to a container); the root is
/// fixed at construction and never detached.
pub struct WidgetTree {
    nodes: SlotMap<WidgetId, WidgetNode>,
    children: SecondaryMap<WidgetId, Vec<WidgetId>>,
    parent: SecondaryMap<WidgetId, WidgetId>,
    root: WidgetId,
}

impl WidgetTree {
    /// Create a tree holding only `root`.
    pub fn new(root: WidgetNode) -> Self {
        let mut nodes = SlotMap::with_key();
        let mut children = SecondaryMap::new();
        let root = nodes.insert(root);
        children.insert(root, Vec::new());
        Self { nodes, children, parent: SecondaryMap::new(), root }
    }

    pub fn root(&self) -> WidgetId {
        self.root
    }

    /// Insert a detached node.
    pub fn insert(&mut self, node: WidgetNode) -> WidgetId {
        let id = self.nodes.insert(node);
        self.children.insert(id, Vec::new());
        id
    }

    /// Attach the detached `child` under `parent` at `index` (clamped).
    ///
    /// Callers validate the move first; attaching an already-parented node
    /// or creating a cycle is a logic error and is ignored.
    pub fn attach(&mut self, parent: WidgetId, index: usize, child: WidgetId) {
        if self.parent.contains_key(child) || child == self.root || self.is_ancestor(child, parent) {
            return;
        }
        let Some(siblings) = self.children.get_mut(parent) else {
            return;
        };
        let index = index.min(siblings.len());
        siblings.insert(index, child);
        self.parent.insert(child, parent);
    }

    /// Detach `child` from its parent, returning `(parent, index)`.
    pub fn detach(&mut self, child: WidgetId) -> Option<(WidgetId, usize)> {
        let parent = self.parent.remove(child)?;
        let siblings = self.children.get_mut(parent)?;
        let index = siblings.iter().position(|&c| c == child)?;
        siblings.remove(index);
        Some((parent, index))
    }

    /// Remove a node and all its descendants.
    ///
    /// Returns the removed nodes breadth-first, `id` first. The root cannot be
    /// removed.
    pub fn remove(&mut self, id: WidgetId) -> Vec<(WidgetId, WidgetNode)> {
        if id == self.root || !self.nodes.contains_key(id) {
            return Vec::new();
        }
        self.detach(id);

        let mut removed = Vec::new();
        let mut queue = VecDeque::from([id]);
        while let Some(current) = queue.pop_front() {
            if let Some(kids) = self.children.remove(current) {
                queue.extend(kids);
            }
            self.parent.remove(current);
            if let Some(node) = self.nodes.remove(current) {
                removed.push((current, node));
            }
        }
        removed
    }

    /// Move the child at `from` to position `to` within `parent`.
    pub fn move_child(&mut self, parent: WidgetId, from: usize, to: usize) {
        if let Some(siblings) = self.children.get_mut(parent) {
            if from < siblings.len() && to < siblings.len() {
                let child = siblings.remove(from);
                siblings.insert(to, child);
            }
        }
    }

    pub fn parent(&self, id: WidgetId) -> Option<WidgetId> {
        self.parent.get(id).copied()
    }

    /// Children of a node. Empty if it has none or does not exist.
    pub fn children(&self, id: WidgetId) -> &[WidgetId] {
        self.children.get(id).map(Vec::as_slice).unwrap_or(NO_CHILDREN)
    }

    /// Position of `child` among its parent's children.
    pub fn index_of(&self, child: WidgetId) -> Option<usize> {
        let parent = self.parent(child)?;
        self.children(parent).iter().position(|&c| c == child)
    }

    /// Ancestors of `id`, immediate parent first.
    pub fn ancestors(&self, id: WidgetId) -> Vec<WidgetId> {
        let mut result = Vec::new();
        let mut current = id;
        while let Some(p) = self.parent.get(current).copied() {
            result.push(p);
            current = p;
        }
        result
    }

    /// Whether `ancestor` is `id` or one of its ancestors.
    pub fn is_ancestor(&self, ancestor: WidgetId, id: WidgetId) -> bool {
        ancestor == id || self.ancestors(id).contains(&ancestor)
    }

    /// Whether `id` is the root or attached below it.
    pub fn is_attached(&self, id: WidgetId) -> bool {
        self.is_ancestor(self.root, id)
    }

    pub fn get(&self, id: WidgetId) -> Option<&WidgetNode> {
        self.nodes.get(id)
    }

    pub fn get_mut(&mut self, id: WidgetId) -> Option<&mut WidgetNode> {
        self.nodes.get_mut(id)
    }

    pub fn contains(&self, id: WidgetId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Number of nodes, detached ones included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the root is never removed.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Pre-order depth-first traversal starting from `start`.
    pub fn walk_depth_first(&self, start: WidgetId) -> Vec<WidgetId> {
        let mut result = Vec::new();
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            if !self.nodes.contains_key(current) {
                continue;
            }
            result.push(current);
            stack.extend(self.children(current).iter().rev());
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Size, Spacing};
    use crate::widgets::{Group, Label};

    fn node(text: &str) -> WidgetNode {
        WidgetNode::new(Box::new(Label::new(text)), Size::ZERO, Spacing::ZERO)
    }

    /// ```text
    ///       root
    ///      /    \
    ///    a        b
    ///   / \
    ///  c   d
    /// ```
    fn build_tree() -> (WidgetTree, WidgetId, WidgetId, WidgetId, WidgetId, WidgetId) {
        let mut tree = WidgetTree::new(WidgetNode::new(Box::new(Group::new()), Size::ZERO, Spacing::ZERO));
        let root = tree.root();
        let a = tree.insert(node("a"));
        let b = tree.insert(node("b"));
        let c = tree.insert(node("c"));
        let d = tree.insert(node("d"));
        tree.attach(root, 0, a);
        tree.attach(root, 1, b);
        tree.attach(a, 0, c);
        tree.attach(a, 1, d);
        (tree, root, a, b, c, d)
    }

    #[test]
    fn attach_builds_relationships() {
        let (tree, root, a, b, c, d) = build_tree();
        assert_eq!(tree.children(root), &[a, b]);
        assert_eq!(tree.children(a), &[c, d]);
        assert_eq!(tree.parent(c), Some(a));
        assert_eq!(tree.parent(root), None);
        assert_eq!(tree.index_of(d), Some(1));
    }

    #[test]
    fn attach_at_index() {
        let (mut tree, root, a, b, ..) = build_tree();
        let e = tree.insert(node("e"));
        tree.attach(root, 1, e);
        assert_eq!(tree.children(root), &[a, e, b]);
    }

    #[test]
    fn attach_rejects_cycles_and_reparenting() {
        let (mut tree, root, a, b, c, _d) = build_tree();
        tree.attach(b, 0, c);
        assert_eq!(tree.parent(c), Some(a));
        let e = tree.insert(node("e"));
        tree.attach(e, 0, e);
        assert!(tree.children(e).is_empty());
        tree.attach(c, 0, root);
        assert!(tree.children(c).is_empty());
    }

    #[test]
    fn detached_nodes() {
        let (mut tree, ..) = build_tree();
        let e = tree.insert(node("e"));
        assert!(tree.contains(e));
        assert!(!tree.is_attached(e));
        assert_eq!(tree.parent(e), None);
    }

    #[test]
    fn ancestors() {
        let (tree, root, a, _b, c, _d) = build_tree();
        assert_eq!(tree.ancestors(c), vec![a, root]);
        assert!(tree.is_ancestor(a, c));
        assert!(tree.is_ancestor(c, c));
        assert!(!tree.is_ancestor(c, a));
        assert!(tree.ancestors(root).is_empty());
    }

    #[test]
    fn detach_reports_position() {
        let (mut tree, root, a, b, ..) = build_tree();
        assert_eq!(tree.detach(b), Some((root, 1)));
        assert_eq!(tree.children(root), &[a]);
        assert_eq!(tree.detach(b), None);
    }

    #[test]
    fn remove_subtree() {
        let (mut tree, root, a, b, c, d) = build_tree();
        let removed: Vec<WidgetId> = tree.remove(a).into_iter().map(|(id, _)| id).collect();
        assert_eq!(removed, vec![a, c, d]);
        assert!(!tree.contains(c));
        assert_eq!(tree.children(root), &[b]);
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn remove_root_is_refused() {
        let (mut tree, root, ..) = build_tree();
        assert!(tree.remove(root).is_empty());
        assert_eq!(tree.len(), 5);
    }

    #[test]
    fn stale_ids_do_not_alias() {
        let (mut tree, _root, _a, b, ..) = build_tree();
        tree.remove(b);
        let e = tree.insert(node("e"));
        assert_ne!(b, e);
        assert!(tree.get(b).is_none());
        assert!(tree.remove(b).is_empty());
    }

    #[test]
    fn move_child() {
        let (mut tree, root, a, b, ..) = build_tree();
        tree.move_child(root, 0, 1);
        assert_eq!(tree.children(root), &[b, a]);
        tree.move_child(root, 0, 5);
        assert_eq!(tree.children(root), &[b, a]);
    }

    #[test]
    fn walk_depth_first() {
        let (tree, root, a, b, c, d) = build_tree();
        assert_eq!(tree.walk_depth_first(root), vec![root, a, c, d, b]);
        assert_eq!(tree.walk_depth_first(a), vec![a, c, d]);
    }
}
