//! Arena-allocated search tree.

use crate::core::PlayerId;
use crate::mcts::node::{Node, NodeId};
use crate::rules::GameState;

/// Flat node arena. Index 0 is always the root; nodes are never freed
/// individually, the whole tree is dropped after the decision.
#[derive(Clone, Debug)]
pub struct SearchTree<G: GameState> {
    nodes: Vec<Node<G>>,
}

impl<G: GameState> SearchTree<G> {
    /// Create a tree whose root is `state` with `to_move` to play.
    #[must_use]
    pub fn new(state: G, to_move: PlayerId) -> Self {
        Self {
            nodes: vec![Node::new(state, NodeId::NONE, to_move, 0)],
        }
    }

    /// The root's ID (always index 0).
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId::new(0)
    }

    /// Borrow a node.
    ///
    /// # Panics
    /// Panics on a stale or NONE id; ids handed out by
    /// [`alloc`](SearchTree::alloc) are always valid for this tree's
    /// lifetime.
    #[must_use]
    pub fn get(&self, id: NodeId) -> &Node<G> {
        &self.nodes[id.raw() as usize]
    }

    /// Mutably borrow a node.
    ///
    /// # Panics
    /// Panics on a stale or NONE id.
    #[must_use]
    pub fn get_mut(&mut self, id: NodeId) -> &mut Node<G> {
        &mut self.nodes[id.raw() as usize]
    }

    /// Move a node into the arena and return its ID.
    pub fn alloc(&mut self, node: Node<G>) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Number of allocated nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the arena is empty (never true; a tree always has a root).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Eq)]
    struct S(u8);

    impl GameState for S {
        fn options(&self, _player: PlayerId) -> Vec<Self> {
            vec![]
        }
    }

    #[test]
    fn test_new_tree_has_root_only() {
        let tree = SearchTree::new(S(0), PlayerId::LEFT);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.get(tree.root()).state, S(0));
        assert!(tree.get(tree.root()).parent.is_none());
    }

    #[test]
    fn test_alloc_links_by_index() {
        let mut tree = SearchTree::new(S(0), PlayerId::LEFT);
        let root = tree.root();
        let child = tree.alloc(Node::new(S(1), root, PlayerId::RIGHT, 1));
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.get(child).parent, root);
        assert_eq!(tree.get(child).to_move, PlayerId::RIGHT);
    }

    #[test]
    fn test_get_mut_updates_in_place() {
        let mut tree = SearchTree::new(S(0), PlayerId::LEFT);
        let root = tree.root();
        tree.get_mut(root).visits += 1;
        tree.get_mut(root).value += 1.0;
        assert_eq!(tree.get(root).visits, 1);
        assert_eq!(tree.get(root).value, 1.0);
    }
}
