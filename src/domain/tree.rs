//! Fruit tree: branches owning child branches and fruit

use std::collections::VecDeque;
use std::fmt;

use tracing::{instrument, trace};

use crate::domain::fruit::Fruit;

/// One branch of the tree.
///
/// A node exclusively owns its children and fruit, so a tree is always finite
/// and acyclic. Order of both sequences is significant: it decides which
/// branch or fruit a breadth-first query reports as "first".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    id: u64,
    children: Vec<TreeNode>,
    fruits: Vec<Fruit>,
}

impl TreeNode {
    pub fn new(id: u64, children: Vec<TreeNode>, fruits: Vec<Fruit>) -> Self {
        Self {
            id,
            children,
            fruits,
        }
    }

    /// Branch without children and without fruit.
    pub fn leaf(id: u64) -> Self {
        Self::new(id, Vec::new(), Vec::new())
    }

    /// Diagnostic id, not required to be unique.
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    pub fn fruits(&self) -> &[Fruit] {
        &self.fruits
    }

    /// Number of fruits attached directly to this branch, descendants excluded.
    pub fn direct_fruit_count(&self) -> usize {
        self.fruits.len()
    }

    /// Nodes of this subtree in breadth-first order, starting with `self`.
    pub fn iter_breadth_first(&self) -> BreadthFirst<'_> {
        BreadthFirst::new(self)
    }

    /// Counts fruits of `kind` on this branch and all its descendants.
    ///
    /// Own fruit first, then children left to right. The result does not
    /// depend on traversal order.
    #[instrument(level = "trace", skip(self), fields(id = self.id))]
    pub fn count_fruits(&self, kind: Fruit) -> usize {
        let own = self.fruits.iter().filter(|&&fruit| fruit == kind).count();
        own + self
            .children
            .iter()
            .map(|child| child.count_fruits(kind))
            .sum::<usize>()
    }

    /// First fruit found in breadth-first order.
    ///
    /// The traversal stops at the first node carrying any fruit and returns
    /// that node's first fruit.
    #[instrument(level = "trace", skip(self), fields(id = self.id))]
    pub fn first_fruit(&self) -> Option<&Fruit> {
        self.iter_breadth_first().find_map(|node| node.fruits.first())
    }

    /// Color of [`TreeNode::first_fruit`], `None` if the subtree bears no fruit.
    pub fn first_fruit_color(&self) -> Option<&'static str> {
        self.first_fruit().map(Fruit::color)
    }

    /// Branch with the largest direct fruit count in this subtree.
    ///
    /// Ties go to the node visited first in breadth-first order. Branches
    /// without fruit are never returned, so a fruitless subtree gives `None`.
    #[instrument(level = "trace", skip(self), fields(id = self.id))]
    pub fn branch_with_most_fruits(&self) -> Option<&TreeNode> {
        let mut best: Option<&TreeNode> = None;
        let mut max_count = 0;

        for node in self.iter_breadth_first() {
            let count = node.direct_fruit_count();
            if count > max_count {
                trace!(id = node.id, count, "new maximum");
                max_count = count;
                best = Some(node);
            }
        }
        best
    }

    /// Number of nodes in this subtree, `self` included.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(TreeNode::node_count).sum::<usize>()
    }

    /// Number of levels; a single node has depth 1.
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(TreeNode::depth)
            .max()
            .unwrap_or(0)
    }
}

impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TreeNode id: {}", self.id)
    }
}

/// Breadth-first iterator over a subtree.
///
/// Holds at most one frontier of pending nodes in a FIFO queue.
pub struct BreadthFirst<'a> {
    queue: VecDeque<&'a TreeNode>,
}

impl<'a> BreadthFirst<'a> {
    fn new(root: &'a TreeNode) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back(root);
        Self { queue }
    }
}

impl<'a> Iterator for BreadthFirst<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.children.iter());
        Some(node)
    }
}
