//! File System Module
//!
//! The virtual tree filesystem: an in-memory rooted tree of named folder
//! and file nodes with a single current-directory cursor.

pub mod tree;
pub mod types;

pub use tree::VirtualFs;
pub use types::{Node, NodeId, NodeKind, VfsError};
