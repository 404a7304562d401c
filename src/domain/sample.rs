//! The reference fruit tree

use crate::domain::fruit::Fruit::{Apple, Orange};
use crate::domain::tree::TreeNode;

/// Builds the reference tree, leaves first.
///
/// ```text
/// 0
/// ├── 1 [orange]
/// ├── 2
/// └── 3 [orange, apple]
///     ├── 4
///     ├── 5
///     │   ├── 7 [orange]
///     │   └── 8 [apple]
///     └── 6 [apple]
/// ```
pub fn reference_tree() -> TreeNode {
    let left_branch = TreeNode::new(1, vec![], vec![Orange]);
    let middle_branch = TreeNode::leaf(2);

    let twig = TreeNode::new(
        5,
        vec![
            TreeNode::new(7, vec![], vec![Orange]),
            TreeNode::new(8, vec![], vec![Apple]),
        ],
        vec![],
    );
    let right_branch = TreeNode::new(
        3,
        vec![TreeNode::leaf(4), twig, TreeNode::new(6, vec![], vec![Apple])],
        vec![Orange, Apple],
    );

    TreeNode::new(0, vec![left_branch, middle_branch, right_branch], vec![])
}
