//! treegrid — selection engine for miller-column tree grids.
//!
//! The engine maintains a sparse tree-shaped selection over caller-supplied
//! tree data, converts between the nested selection and its flat path-list
//! form, projects the visible rows and columns for a given selection,
//! filter, and collapsed set, and applies click gestures with cascading
//! semantics. Rendering is someone else's job: a host widget feeds gestures
//! into [`TreeGrid`] and redraws from its projection output.

pub mod cli;
pub mod config;
pub mod domain;
pub mod engine;
pub mod exitcode;
pub mod util;

pub use domain::{DomainError, DomainResult, NodePath, RowFilter, Selection, Tree, TreeNode};
pub use engine::TreeGrid;
