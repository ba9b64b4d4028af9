//! Slash commands, context menus and the components and modals they open.
//!
//! [`build_registry`] is the single place where handlers are registered. Command
//! modules keep their formatting and input checks in plain functions so they are
//! tested without a Discord connection.

pub mod feedback;
pub mod help;
pub mod moderation;
pub mod phrase;
pub mod ping;
pub mod profile;
pub mod utility;

use crate::server::{
    bot::interaction::registry::Registry, error::registry::RegistryError,
};

/// Accent colour of every embed the bot sends.
pub const EMBED_COLOR: u32 = 0x5865F2;

/// Builds the registry of every handler the bot answers.
///
/// `/help` is registered last so it lists every other chat command.
pub fn build_registry() -> Result<Registry, RegistryError> {
    let mut registry = Registry::new();

    registry.register_command(ping::PingCommand::new())?;

    registry.register_command(profile::ProfileCommand::new())?;
    registry.register_command(profile::ViewProfileCommand::new())?;
    registry.register_modal(profile::ProfileEditModal::new())?;
    registry.register_component(profile::ProfileDeleteButton::new())?;

    registry.register_command(feedback::FeedbackCommand::new())?;
    registry.register_command(feedback::ReportFeedbackCommand::new())?;
    registry.register_modal(feedback::FeedbackSubmitModal::new())?;
    registry.register_component(feedback::FeedbackStatusButton::new())?;

    registry.register_command(phrase::PhraseCommand::new())?;
    registry.register_component(phrase::PhraseAnotherButton::new())?;

    registry.register_command(moderation::BanCommand::new())?;
    registry.register_command(moderation::KickCommand::new())?;
    registry.register_command(moderation::TimeoutCommand::new())?;
    registry.register_command(moderation::PurgeCommand::new())?;

    registry.register_command(utility::weather::WeatherCommand::new())?;
    registry.register_command(utility::github::GithubCommand::new())?;
    registry.register_command(utility::ip::IpCommand::new())?;
    registry.register_command(utility::image::ImageCommand::new())?;

    let help = help::HelpCommand::new(registry.chat_command_summaries());
    registry.register_command(help)?;

    Ok(registry)
}

/// Cuts `text` to at most `max` characters, marking the cut with an ellipsis.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }

    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_every_handler() {
        let registry = build_registry().unwrap();

        for name in [
            "ping",
            "help",
            "profile",
            "View Profile",
            "feedback",
            "Report as Feedback",
            "phrase",
            "ban",
            "kick",
            "timeout",
            "purge",
            "weather",
            "github",
            "ip",
            "image",
        ] {
            assert!(registry.command(name).is_some(), "missing command {}", name);
        }
        assert!(registry.modal("profile-edit").is_some());
        assert!(registry.modal("feedback-submit").is_some());
        assert!(registry.component("profile-delete").is_some());
        assert!(registry.component("feedback-status").is_some());
        assert!(registry.component("phrase-another").is_some());
    }

    #[test]
    fn help_lists_itself() {
        let registry = build_registry().unwrap();
        let summaries = registry.chat_command_summaries();

        assert!(summaries.iter().any(|summary| summary.name == "help"));
        assert!(!summaries.iter().any(|summary| summary.name == "View Profile"));
    }

    #[test]
    fn truncates_on_characters() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdef", 4), "abc…");
        assert_eq!(truncate("ééééé", 3).chars().count(), 3);
    }
}
