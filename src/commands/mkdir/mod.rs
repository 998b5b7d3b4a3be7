// src/commands/mkdir/mod.rs
use crate::commands::{Command, CommandContext};
use crate::fs::VfsError;

pub struct MkdirCommand;

impl Command for MkdirCommand {
    fn name(&self) -> &'static str {
        "mkdir"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> Result<String, VfsError> {
        if ctx.args.is_empty() {
            return Err(VfsError::InvalidArgument {
                operation: "mkdir".to_string(),
                reason: "missing operand".to_string(),
            });
        }

        // Fail fast: stop at the first path that cannot be created.
        for path in &ctx.args {
            ctx.fs.mkdir(path)?;
        }
        Ok(String::new())
    }
}
