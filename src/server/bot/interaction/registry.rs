//! Handler lookup tables.
//!
//! Filled once at startup and only read afterwards; the dispatcher shares it behind an
//! `Arc` without locking.

use std::{collections::HashMap, sync::Arc};

use serenity::all::CreateCommand;

use crate::server::{
    bot::interaction::{
        handler::{CommandHandler, ComponentHandler, ModalHandler},
        request::HandlerKind,
    },
    error::registry::RegistryError,
};

/// Name and description of a slash command, as listed by `/help`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSummary {
    pub name: String,
    pub description: String,
}

#[derive(Default)]
pub struct Registry {
    commands: HashMap<String, Arc<dyn CommandHandler>>,
    components: HashMap<String, Arc<dyn ComponentHandler>>,
    modals: HashMap<String, Arc<dyn ModalHandler>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// # Returns
    /// - `Ok(())` - Handler registered under its name
    /// - `Err(RegistryError::DuplicateKey)` - A command with that name exists
    pub fn register_command(
        &mut self,
        handler: impl CommandHandler + 'static,
    ) -> Result<(), RegistryError> {
        let name = handler.name().to_string();
        if self.commands.contains_key(&name) {
            return Err(RegistryError::DuplicateKey {
                family: "command",
                key: name,
            });
        }

        self.commands.insert(name, Arc::new(handler));
        Ok(())
    }

    pub fn register_component(
        &mut self,
        handler: impl ComponentHandler + 'static,
    ) -> Result<(), RegistryError> {
        let key = handler.key().to_string();
        if self.components.contains_key(&key) {
            return Err(RegistryError::DuplicateKey {
                family: "component",
                key,
            });
        }

        self.components.insert(key, Arc::new(handler));
        Ok(())
    }

    pub fn register_modal(
        &mut self,
        handler: impl ModalHandler + 'static,
    ) -> Result<(), RegistryError> {
        let key = handler.key().to_string();
        if self.modals.contains_key(&key) {
            return Err(RegistryError::DuplicateKey {
                family: "modal",
                key,
            });
        }

        self.modals.insert(key, Arc::new(handler));
        Ok(())
    }

    pub fn command(&self, name: &str) -> Option<&Arc<dyn CommandHandler>> {
        self.commands.get(name)
    }

    pub fn component(&self, key: &str) -> Option<&Arc<dyn ComponentHandler>> {
        self.components.get(key)
    }

    pub fn modal(&self, key: &str) -> Option<&Arc<dyn ModalHandler>> {
        self.modals.get(key)
    }

    /// Slash commands sorted by name; context menus have no description to show.
    pub fn chat_command_summaries(&self) -> Vec<CommandSummary> {
        let mut summaries: Vec<CommandSummary> = self
            .commands
            .values()
            .filter(|handler| handler.meta().kind == HandlerKind::ChatInput)
            .map(|handler| CommandSummary {
                name: handler.name().to_string(),
                description: handler.description().to_string(),
            })
            .collect();

        summaries.sort_by(|a, b| a.name.cmp(&b.name));
        summaries
    }

    /// Definitions of every command for registration with Discord.
    pub fn command_definitions(&self) -> Vec<CreateCommand> {
        let mut handlers: Vec<&Arc<dyn CommandHandler>> = self.commands.values().collect();
        handlers.sort_by(|a, b| a.name().cmp(b.name()));
        handlers.iter().map(|handler| handler.definition()).collect()
    }

    pub fn len(&self) -> usize {
        self.commands.len() + self.components.len() + self.modals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
