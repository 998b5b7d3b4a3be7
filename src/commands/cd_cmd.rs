//! cd - Change the current folder.

use crate::commands::{Command, CommandContext};
use crate::fs::VfsError;

pub struct CdCommand;

impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> Result<String, VfsError> {
        // Only the first argument is used; extras are ignored.
        let Some(path) = ctx.args.first() else {
            return Err(VfsError::InvalidArgument {
                operation: "cd".to_string(),
                reason: "missing operand".to_string(),
            });
        };
        ctx.fs.cd(path)?;
        Ok(String::new())
    }
}
