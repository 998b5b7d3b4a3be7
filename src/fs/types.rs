//! File System Types
//!
//! Core types for the virtual tree filesystem.

use thiserror::Error;

/// File system errors. Every error carries the operation that produced it
/// and enough context to name the failing path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VfsError {
    #[error("no such directory, {operation} '{path}'")]
    PathNotFound { path: String, operation: String },

    #[error("not a folder, {operation} '{path}'")]
    NotAFolder { path: String, operation: String },

    #[error("already exists, {operation} '{path}'")]
    AlreadyExists { path: String, operation: String },

    #[error("invalid argument, {operation}: {reason}")]
    InvalidArgument { operation: String, reason: String },
}

/// Index of a node in the tree arena.
///
/// Nodes are never deleted, so an id stays valid for the life of the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// Node kinds in the virtual tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Folder,
    File,
}

/// A named entry in the virtual tree, either a folder or a file leaf.
///
/// The tree owns nodes top-down through `children`; `parent` is a plain
/// arena index used only for upward navigation, so there is no ownership
/// cycle.
#[derive(Debug, Clone)]
pub struct Node {
    pub name: String,
    pub kind: NodeKind,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

impl Node {
    /// Check if the node is a folder
    pub fn is_folder(&self) -> bool {
        matches!(self.kind, NodeKind::Folder)
    }

    /// Check if the node is a file
    pub fn is_file(&self) -> bool {
        matches!(self.kind, NodeKind::File)
    }
}
