use crate::commands::{Command, CommandContext};
use crate::fs::VfsError;

pub struct HelpCommand;

const HELP: &str = "Available commands:

  touch <path> [path...]   create file(s), making intermediate folders
  mkdir <path> [path...]   create folder(s), making intermediate folders
  cd <path>                change the current folder (supports . .. and /)
  pwd                      print the current path
  ls                       list the subtree under the current folder
  help                     show this message
  exit                     quit the shell";

impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn execute(&self, _ctx: CommandContext<'_>) -> Result<String, VfsError> {
        Ok(format!("{}\n", HELP))
    }
}
