// src/commands/types.rs
use crate::fs::{VfsError, VirtualFs};

/// Execution context handed to every command: the argument tokens and a
/// mutable borrow of the filesystem.
pub struct CommandContext<'a> {
    pub args: Vec<String>,
    pub fs: &'a mut VirtualFs,
}

/// A shell command: variadic string arguments in, output text or error out.
/// Every builtin shares this signature so the driver can dispatch by name
/// without per-command branching.
pub trait Command: Send + Sync {
    fn name(&self) -> &'static str;
    fn execute(&self, ctx: CommandContext<'_>) -> Result<String, VfsError>;
}
