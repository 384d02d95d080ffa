//! Domain layer: the pure selection/projection engine
//!
//! This layer is independent of external concerns (no I/O, no CLI, no
//! config loading). All operations are total over their inputs except
//! filter compilation, which validates strictly.

pub mod error;
pub mod filter;
pub mod gestures;
pub mod path;
pub mod projection;
pub mod selection;
pub mod tree;

pub use error::{DomainError, DomainResult};
pub use filter::RowFilter;
pub use path::NodePath;
pub use selection::Selection;
pub use tree::{Tree, TreeNode};
