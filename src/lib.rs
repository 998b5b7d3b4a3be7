//! treesh - an interactive shell over an in-memory filesystem tree
//!
//! The filesystem is a rooted tree of named folder and file nodes kept
//! entirely in memory, with a single current-directory cursor. The shell
//! reads command lines, dispatches them through a registry of handlers,
//! and prints results; nothing persists past process exit.

pub mod commands;
pub mod fs;
pub mod shell;

pub use fs::{VfsError, VirtualFs};
pub use shell::Shell;
