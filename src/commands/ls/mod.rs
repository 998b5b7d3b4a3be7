// src/commands/ls/mod.rs
use crate::commands::{Command, CommandContext};
use crate::fs::VfsError;

pub struct LsCommand;

impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> Result<String, VfsError> {
        // Always lists the subtree under the cursor; arguments are ignored.
        Ok(ctx.fs.render())
    }
}
