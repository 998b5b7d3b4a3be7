// src/commands/touch/mod.rs
use crate::commands::{Command, CommandContext};
use crate::fs::VfsError;

pub struct TouchCommand;

impl Command for TouchCommand {
    fn name(&self) -> &'static str {
        "touch"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> Result<String, VfsError> {
        if ctx.args.is_empty() {
            return Err(VfsError::InvalidArgument {
                operation: "touch".to_string(),
                reason: "missing file operand".to_string(),
            });
        }

        // Fail fast: stop at the first path that cannot be created.
        for path in &ctx.args {
            ctx.fs.touch(path)?;
        }
        Ok(String::new())
    }
}
