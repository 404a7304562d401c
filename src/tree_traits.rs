use itertools::Itertools;
use termtree::Tree;
use tracing::instrument;

use crate::domain::TreeNode;

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeNodeConvert for TreeNode {
    #[instrument(level = "debug", skip(self), fields(id = self.id()))]
    fn to_tree_string(&self) -> Tree<String> {
        // Label: id, followed by the fruit list when the branch bears any
        let label = if self.fruits().is_empty() {
            self.id().to_string()
        } else {
            format!("{} [{}]", self.id(), self.fruits().iter().join(", "))
        };

        let leaves: Vec<_> = self
            .children()
            .iter()
            .map(|c| c.to_tree_string())
            .collect();

        Tree::new(label).with_leaves(leaves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{reference_tree, Fruit};

    #[test]
    fn given_fruitless_leaf_when_rendered_then_shows_id_only() {
        let rendered = TreeNode::leaf(9).to_tree_string().to_string();
        assert_eq!(rendered.trim_end(), "9");
    }

    #[test]
    fn given_reference_tree_when_rendered_then_lists_fruit_per_branch() {
        let rendered = reference_tree().to_tree_string().to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "0");
        assert!(lines[1].ends_with("1 [orange]"));
        assert!(lines[3].ends_with("3 [orange, apple]"));
        assert!(lines[6].ends_with("7 [orange]"));
    }

    #[test]
    fn given_children_when_rendered_then_keeps_stored_order() {
        let tree = TreeNode::new(
            0,
            vec![
                TreeNode::new(2, vec![], vec![Fruit::Apple]),
                TreeNode::leaf(1),
            ],
            vec![],
        );
        let rendered = tree.to_tree_string().to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert!(lines[1].ends_with("2 [apple]"));
        assert!(lines[2].ends_with('1'));
    }
}
