//! Shell Module
//!
//! Input line parsing and the interactive REPL driver.

pub mod parse;
pub mod repl;

pub use parse::{parse_line, ParsedLine};
pub use repl::{LineOutcome, Shell};
