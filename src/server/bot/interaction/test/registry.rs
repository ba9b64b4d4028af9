use super::*;
use crate::server::error::registry::RegistryError;

/// Tests registering two commands under one name.
///
/// Expected: Err(DuplicateKey), first registration kept
#[test]
fn rejects_duplicate_command() {
    let mut registry = Registry::new();
    registry
        .register_command(StubCommand::new("ping", Behavior::Reply("first")))
        .unwrap();

    let result = registry.register_command(StubCommand::new("ping", Behavior::Reply("second")));

    assert!(matches!(
        result,
        Err(RegistryError::DuplicateKey { family: "command", ref key }) if key == "ping"
    ));
    assert_eq!(registry.len(), 1);
}

/// Tests that component and modal keys live in separate maps.
///
/// Expected: same key accepted once per family
#[test]
fn families_have_separate_keys() {
    let mut registry = Registry::new();
    registry
        .register_component(EchoComponent {
            key: "profile-delete",
            meta: HandlerMeta::new(HandlerKind::Button),
        })
        .unwrap();
    registry
        .register_modal(EchoModal {
            key: "profile-delete",
            meta: HandlerMeta::new(HandlerKind::Modal),
        })
        .unwrap();

    let duplicate = registry.register_component(EchoComponent {
        key: "profile-delete",
        meta: HandlerMeta::new(HandlerKind::Button),
    });

    assert!(duplicate.is_err());
    assert_eq!(registry.len(), 2);
}

/// Tests the summaries listed by /help.
///
/// Expected: chat commands only, sorted by name
#[test]
fn summarizes_chat_commands() {
    let mut registry = Registry::new();
    registry
        .register_command(StubCommand::new("weather", Behavior::Reply("")))
        .unwrap();
    registry
        .register_command(StubCommand::new("ban", Behavior::Reply("")))
        .unwrap();
    registry
        .register_command(
            StubCommand::new("View Profile", Behavior::Reply(""))
                .meta(HandlerMeta::new(HandlerKind::UserContext)),
        )
        .unwrap();

    let names: Vec<String> = registry
        .chat_command_summaries()
        .into_iter()
        .map(|summary| summary.name)
        .collect();

    assert_eq!(names, vec!["ban", "weather"]);
    assert_eq!(registry.command_definitions().len(), 3);
}
