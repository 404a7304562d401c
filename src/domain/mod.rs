//! Domain layer: fruit, tree and the queries over it
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod fruit;
pub mod sample;
pub mod tree;

pub use fruit::{Fruit, UnknownFruit};
pub use sample::reference_tree;
pub use tree::{BreadthFirst, TreeNode};
