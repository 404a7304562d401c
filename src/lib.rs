//! Tree of fruit-bearing branches with breadth- and depth-first queries.
//!
//! ```
//! use fruittree::domain::{reference_tree, Fruit};
//!
//! let tree = reference_tree();
//! assert_eq!(tree.count_fruits(Fruit::Orange), 3);
//! assert_eq!(tree.first_fruit_color(), Some("orange"));
//! assert_eq!(tree.branch_with_most_fruits().map(|b| b.id()), Some(3));
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod exitcode;
pub mod tree_traits;
pub mod util;
