use serenity::all::Permissions;
use std::sync::atomic::Ordering;

use super::*;
use crate::server::{
    bot::interaction::{
        dispatcher::{Status, TYPE_MISMATCH_MESSAGE, UNKNOWN_HANDLER_MESSAGE},
        precondition::{GuildOnly, OwnerOnly, RequirePermissions},
        request::CommandKind,
    },
    error::command::GENERIC_FAILURE_MESSAGE,
};

/// Tests dispatching a command nobody registered.
///
/// Expected: UnknownHandler with an ephemeral notice
#[tokio::test]
async fn unknown_command_is_reported() {
    let dispatcher = dispatcher(Registry::new(), memory_store()).await;

    let outcome = dispatcher.dispatch(&discord(), command("missing", USER_ID)).await;

    assert_eq!(outcome.status, Status::UnknownHandler);
    assert_eq!(outcome.response.content(), Some(UNKNOWN_HANDLER_MESSAGE));
    assert!(outcome.response.is_ephemeral());
}

/// Tests a button whose key only exists as a modal.
///
/// Expected: UnknownHandler, modals and components do not share keys
#[tokio::test]
async fn component_does_not_resolve_modal_key() {
    let mut registry = Registry::new();
    registry
        .register_modal(EchoModal {
            key: "profile-edit",
            meta: HandlerMeta::new(HandlerKind::Modal),
        })
        .unwrap();
    let dispatcher = dispatcher(registry, memory_store()).await;

    let outcome = dispatcher
        .dispatch(&discord(), button("profile-edit", USER_ID))
        .await;

    assert_eq!(outcome.status, Status::UnknownHandler);
}

/// Tests running a registered command.
///
/// Expected: Success with the handler's reply
#[tokio::test]
async fn runs_command() {
    let mut registry = Registry::new();
    registry
        .register_command(StubCommand::new("ping", Behavior::Reply("Pong!")))
        .unwrap();
    let dispatcher = dispatcher(registry, memory_store()).await;

    let outcome = dispatcher.dispatch(&discord(), command("ping", USER_ID)).await;

    assert_eq!(outcome.status, Status::Success);
    assert_eq!(outcome.response.content(), Some("Pong!"));
}

/// Tests that custom id arguments reach the component handler.
///
/// Expected: Success, reply lists the arguments after the key
#[tokio::test]
async fn passes_custom_id_args() {
    let mut registry = Registry::new();
    registry
        .register_component(EchoComponent {
            key: "feedback-status",
            meta: HandlerMeta::new(HandlerKind::Button),
        })
        .unwrap();
    let dispatcher = dispatcher(registry, memory_store()).await;

    let outcome = dispatcher
        .dispatch(&discord(), button("feedback-status:abc:CLOSED", USER_ID))
        .await;

    assert_eq!(outcome.status, Status::Success);
    assert_eq!(outcome.response.content(), Some("abc,CLOSED"));
}

/// Tests a modal submission.
///
/// Expected: Success with the submitted field echoed
#[tokio::test]
async fn runs_modal() {
    let mut registry = Registry::new();
    registry
        .register_modal(EchoModal {
            key: "profile-edit",
            meta: HandlerMeta::new(HandlerKind::Modal),
        })
        .unwrap();
    let dispatcher = dispatcher(registry, memory_store()).await;

    let outcome = dispatcher
        .dispatch(&discord(), modal("profile-edit", "Wren"))
        .await;

    assert_eq!(outcome.status, Status::Success);
    assert_eq!(outcome.response.content(), Some("Wren"));
}

/// Tests a user context menu hitting a handler declared as a slash command.
///
/// Expected: TypeMismatch, handler not run
#[tokio::test]
async fn rejects_kind_mismatch() {
    let mut registry = Registry::new();
    registry
        .register_command(StubCommand::new("profile", Behavior::Reply("ran")))
        .unwrap();
    let dispatcher = dispatcher(registry, memory_store()).await;

    let request = Request::Command(CommandRequest::new(
        "profile",
        CommandKind::User,
        meta(USER_ID),
    ));
    let outcome = dispatcher.dispatch(&discord(), request).await;

    assert_eq!(outcome.status, Status::TypeMismatch);
    assert_eq!(outcome.response.content(), Some(TYPE_MISMATCH_MESSAGE));
}

/// Tests a select menu using a button's key.
///
/// Expected: TypeMismatch
#[tokio::test]
async fn rejects_select_on_button_key() {
    let mut registry = Registry::new();
    registry
        .register_component(EchoComponent {
            key: "phrase-another",
            meta: HandlerMeta::new(HandlerKind::Button),
        })
        .unwrap();
    let dispatcher = dispatcher(registry, memory_store()).await;

    let request = Request::Component(ComponentRequest {
        custom_id: "phrase-another".to_string(),
        kind: ComponentKind::StringSelect,
        values: vec!["one".to_string()],
        meta: meta(USER_ID),
    });
    let outcome = dispatcher.dispatch(&discord(), request).await;

    assert_eq!(outcome.status, Status::TypeMismatch);
}

/// Tests that the first failing precondition stops the chain.
///
/// Expected: PreconditionFailed with the first failure's message, later checks skipped
#[tokio::test]
async fn preconditions_short_circuit_in_order() {
    let (first, first_calls) = CountingPrecondition::new(None);
    let (second, second_calls) = CountingPrecondition::new(Some("second failed"));
    let (third, third_calls) = CountingPrecondition::new(Some("third failed"));

    let mut registry = Registry::new();
    registry
        .register_command(
            StubCommand::new("guarded", Behavior::Reply("ran")).meta(
                HandlerMeta::new(HandlerKind::ChatInput)
                    .precondition(first)
                    .precondition(second)
                    .precondition(third),
            ),
        )
        .unwrap();
    let dispatcher = dispatcher(registry, memory_store()).await;

    let outcome = dispatcher
        .dispatch(&discord(), command("guarded", USER_ID))
        .await;

    assert_eq!(outcome.status, Status::PreconditionFailed);
    assert_eq!(outcome.response.content(), Some("second failed"));
    assert_eq!(first_calls.load(Ordering::SeqCst), 1);
    assert_eq!(second_calls.load(Ordering::SeqCst), 1);
    assert_eq!(third_calls.load(Ordering::SeqCst), 0);
}

/// Tests OwnerOnly for an owner and for anyone else.
///
/// Expected: owner succeeds, other user gets PreconditionFailed
#[tokio::test]
async fn owner_only_admits_owner() {
    let mut registry = Registry::new();
    registry
        .register_command(
            StubCommand::new("phrase", Behavior::Reply("added"))
                .meta(HandlerMeta::new(HandlerKind::ChatInput).precondition(OwnerOnly)),
        )
        .unwrap();
    let dispatcher = dispatcher(registry, memory_store()).await;

    let owner = dispatcher.dispatch(&discord(), command("phrase", OWNER_ID)).await;
    let other = dispatcher.dispatch(&discord(), command("phrase", USER_ID)).await;

    assert_eq!(owner.status, Status::Success);
    assert_eq!(other.status, Status::PreconditionFailed);
    assert_eq!(
        other.response.content(),
        Some("Only the bot owner can use this.")
    );
}

/// Tests GuildOnly in a direct message.
///
/// Expected: PreconditionFailed
#[tokio::test]
async fn guild_only_refuses_direct_messages() {
    let mut registry = Registry::new();
    registry
        .register_command(
            StubCommand::new("purge", Behavior::Reply("purged"))
                .meta(HandlerMeta::new(HandlerKind::ChatInput).precondition(GuildOnly)),
        )
        .unwrap();
    let dispatcher = dispatcher(registry, memory_store()).await;

    let outcome = dispatcher.dispatch(&discord(), command("purge", USER_ID)).await;

    assert_eq!(outcome.status, Status::PreconditionFailed);
    assert_eq!(
        outcome.response.content(),
        Some("This can only be used in a server.")
    );
}

/// Tests RequirePermissions with missing, granted and administrator permissions.
///
/// Expected: only the member lacking the permission is refused
#[tokio::test]
async fn require_permissions_checks_member() {
    let mut registry = Registry::new();
    registry
        .register_command(
            StubCommand::new("ban", Behavior::Reply("banned")).meta(
                HandlerMeta::new(HandlerKind::ChatInput)
                    .precondition(RequirePermissions(Permissions::BAN_MEMBERS)),
            ),
        )
        .unwrap();
    let dispatcher = dispatcher(registry, memory_store()).await;

    let request = |permissions| {
        Request::Command(CommandRequest::new(
            "ban",
            CommandKind::ChatInput,
            guild_meta(USER_ID, permissions),
        ))
    };

    let missing = dispatcher
        .dispatch(&discord(), request(Permissions::SEND_MESSAGES))
        .await;
    assert_eq!(missing.status, Status::PreconditionFailed);
    assert!(missing.response.content().unwrap().contains("Ban Members"));

    let granted = dispatcher
        .dispatch(&discord(), request(Permissions::BAN_MEMBERS))
        .await;
    assert_eq!(granted.status, Status::Success);

    let admin = dispatcher
        .dispatch(&discord(), request(Permissions::ADMINISTRATOR))
        .await;
    assert_eq!(admin.status, Status::Success);
}

/// Tests that a user error is shown as is.
///
/// Expected: Failed { expected: true } with the error message
#[tokio::test]
async fn shows_user_errors() {
    let mut registry = Registry::new();
    registry
        .register_command(StubCommand::new(
            "ip",
            Behavior::UserError("That is not a valid IP address."),
        ))
        .unwrap();
    let dispatcher = dispatcher(registry, memory_store()).await;

    let outcome = dispatcher.dispatch(&discord(), command("ip", USER_ID)).await;

    assert_eq!(outcome.status, Status::Failed { expected: true });
    assert_eq!(
        outcome.response.content(),
        Some("That is not a valid IP address.")
    );
    assert!(outcome.response.is_ephemeral());
}

/// Tests that a NotFound service error counts as expected.
///
/// Expected: Failed { expected: true } with the service message
#[tokio::test]
async fn shows_not_found_errors() {
    let mut registry = Registry::new();
    registry
        .register_command(StubCommand::new(
            "feedback",
            Behavior::NotFound("Feedback not found"),
        ))
        .unwrap();
    let dispatcher = dispatcher(registry, memory_store()).await;

    let outcome = dispatcher
        .dispatch(&discord(), command("feedback", USER_ID))
        .await;

    assert_eq!(outcome.status, Status::Failed { expected: true });
    assert_eq!(outcome.response.content(), Some("Feedback not found"));
}

/// Tests that internal failures are hidden behind the generic message.
///
/// Expected: Failed { expected: false } with the generic message
#[tokio::test]
async fn hides_unexpected_errors() {
    let mut registry = Registry::new();
    registry
        .register_command(StubCommand::new("weather", Behavior::Internal))
        .unwrap();
    let dispatcher = dispatcher(registry, memory_store()).await;

    let outcome = dispatcher
        .dispatch(&discord(), command("weather", USER_ID))
        .await;

    assert_eq!(outcome.status, Status::Failed { expected: false });
    assert_eq!(outcome.response.content(), Some(GENERIC_FAILURE_MESSAGE));
    assert!(!outcome
        .response
        .content()
        .unwrap()
        .contains("connection reset"));
}
