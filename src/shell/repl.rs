//! Interactive read-eval-print loop over the virtual filesystem.
//!
//! The loop reads a line, tokenizes it, looks the action up in the command
//! registry, runs the handler against the tree, and prints any output or
//! error before reading the next line.

use std::io::{self, BufRead, Write};

use tracing::debug;

use super::parse::parse_line;
use crate::commands::{create_builtin_registry, CommandContext, CommandRegistry};
use crate::fs::VirtualFs;

const BANNER: &str = r#"
  _                       _
 | |_ _ __ ___   ___  ___| |__
 | __| '__/ _ \ / _ \/ __| '_ \
 | |_| | |  __/|  __/\__ \ | | |
  \__|_|  \___| \___||___/_| |_|

 in-memory filesystem shell. type 'help' for commands, 'exit' to quit.
"#;

/// Outcome of evaluating a single input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Blank line, nothing to do.
    Empty,
    /// The command produced this output (possibly empty).
    Output(String),
    /// The command failed with this message.
    Error(String),
    /// The action token matched no registered command.
    Unknown(String),
    /// The loop should terminate.
    Exit,
}

/// The interactive shell: one filesystem plus the command registry.
pub struct Shell {
    fs: VirtualFs,
    registry: CommandRegistry,
}

impl Shell {
    pub fn new() -> Self {
        Self {
            fs: VirtualFs::new("root"),
            registry: create_builtin_registry(),
        }
    }

    /// Evaluate one input line against the filesystem.
    pub fn eval(&mut self, line: &str) -> LineOutcome {
        let Some(parsed) = parse_line(line) else {
            return LineOutcome::Empty;
        };
        if parsed.action == "exit" {
            return LineOutcome::Exit;
        }
        let Some(cmd) = self.registry.get(&parsed.action) else {
            return LineOutcome::Unknown(parsed.action);
        };

        debug!(action = %parsed.action, args = ?parsed.args, "dispatch");
        let ctx = CommandContext {
            args: parsed.args,
            fs: &mut self.fs,
        };
        match cmd.execute(ctx) {
            Ok(output) => LineOutcome::Output(output),
            Err(e) => LineOutcome::Error(e.to_string()),
        }
    }

    /// Run the interactive loop until `exit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        println!("{}", BANNER);

        loop {
            write!(stdout, "{} > ", self.fs.current_path())?;
            stdout.flush()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                break; // end of input
            }

            match self.eval(&line) {
                LineOutcome::Empty => {}
                LineOutcome::Output(out) => {
                    if !out.is_empty() {
                        print!("{}", out);
                    }
                }
                LineOutcome::Error(msg) => println!("Error: {}", msg),
                LineOutcome::Unknown(action) => println!("Unknown command: {}", action),
                LineOutcome::Exit => break,
            }
        }
        Ok(())
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
