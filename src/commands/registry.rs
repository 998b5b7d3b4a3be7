// src/commands/registry.rs
use indexmap::IndexMap;

use super::types::Command;

/// Name-to-handler map for command dispatch. Keeps registration order so
/// `names()` lists commands the way they were registered.
pub struct CommandRegistry {
    commands: IndexMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: IndexMap::new(),
        }
    }

    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.insert(cmd.name().to_string(), cmd);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    pub fn names(&self) -> Vec<&str> {
        self.commands.keys().map(|s| s.as_str()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

use super::cd_cmd::CdCommand;
use super::help_cmd::HelpCommand;
use super::ls::LsCommand;
use super::mkdir::MkdirCommand;
use super::pwd::PwdCommand;
use super::touch::TouchCommand;

/// Register all built-in filesystem commands.
pub fn register_builtins(registry: &mut CommandRegistry) {
    registry.register(Box::new(TouchCommand));
    registry.register(Box::new(MkdirCommand));
    registry.register(Box::new(CdCommand));
    registry.register(Box::new(PwdCommand));
    registry.register(Box::new(LsCommand));
    registry.register(Box::new(HelpCommand));
}

/// Create a registry with the built-in commands registered.
pub fn create_builtin_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    register_builtins(&mut registry);
    registry
}
