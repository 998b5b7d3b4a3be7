// src/commands/mod.rs
pub mod cd_cmd;
pub mod help_cmd;
pub mod ls;
pub mod mkdir;
pub mod pwd;
pub mod registry;
pub mod touch;
pub mod types;

pub use registry::{create_builtin_registry, CommandRegistry};
pub use types::{Command, CommandContext};
