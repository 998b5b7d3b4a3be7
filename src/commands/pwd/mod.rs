// src/commands/pwd/mod.rs
use crate::commands::{Command, CommandContext};
use crate::fs::VfsError;

pub struct PwdCommand;

impl Command for PwdCommand {
    fn name(&self) -> &'static str {
        "pwd"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> Result<String, VfsError> {
        // Arguments are ignored.
        Ok(format!("{}\n", ctx.fs.current_path()))
    }
}
