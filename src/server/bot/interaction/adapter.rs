//! Conversion between serenity interactions and the dispatcher's request and response
//! types.

use serenity::all::{
    ActionRowComponent, CommandDataOption, CommandDataOptionValue, CommandInteraction,
    CommandType, ComponentInteraction, ComponentInteractionDataKind, CreateActionRow,
    CreateAutocompleteResponse, CreateInputText, CreateInteractionResponse,
    CreateInteractionResponseMessage, CreateModal, InputTextStyle, Member, ModalInteraction,
    User,
};
use std::collections::HashMap;

use crate::server::bot::interaction::{
    request::{
        AutocompleteRequest, CommandKind, CommandRequest, ComponentKind, ComponentRequest,
        InteractionMeta, ModalRequest, OptionValue, TargetMessage,
    },
    response::{ModalForm, Reply, Response, TextStyle},
};

fn meta(
    interaction_id: u64,
    user: &User,
    guild_id: Option<u64>,
    channel_id: u64,
    member: Option<&Member>,
) -> InteractionMeta {
    let mut meta = InteractionMeta::new(interaction_id, user.id.get(), user.name.clone());
    meta.channel_id = channel_id;
    meta.guild_id = guild_id;
    meta.member_permissions = member.and_then(|member| member.permissions);
    meta
}

fn command_meta(interaction: &CommandInteraction) -> InteractionMeta {
    meta(
        interaction.id.get(),
        &interaction.user,
        interaction.guild_id.map(|id| id.get()),
        interaction.channel_id.get(),
        interaction.member.as_deref(),
    )
}

/// Descends through subcommand groups and subcommands.
///
/// # Returns
/// - The subcommand path, outermost first
/// - The options of the innermost subcommand, or the top level options
fn flatten_options(options: &[CommandDataOption]) -> (Vec<String>, &[CommandDataOption]) {
    let mut path = Vec::new();
    let mut current = options;

    loop {
        match current.first().map(|option| (&option.name, &option.value)) {
            Some((name, CommandDataOptionValue::SubCommandGroup(inner)))
            | Some((name, CommandDataOptionValue::SubCommand(inner))) => {
                path.push(name.clone());
                current = inner;
            }
            _ => return (path, current),
        }
    }
}

fn option_value(value: &CommandDataOptionValue) -> Option<OptionValue> {
    let value = match value {
        CommandDataOptionValue::String(value) => OptionValue::String(value.clone()),
        CommandDataOptionValue::Integer(value) => OptionValue::Integer(*value),
        CommandDataOptionValue::Number(value) => OptionValue::Number(*value),
        CommandDataOptionValue::Boolean(value) => OptionValue::Boolean(*value),
        CommandDataOptionValue::User(id) => OptionValue::User(id.get()),
        CommandDataOptionValue::Channel(id) => OptionValue::Channel(id.get()),
        CommandDataOptionValue::Role(id) => OptionValue::Role(id.get()),
        CommandDataOptionValue::Attachment(id) => OptionValue::Attachment(id.get()),
        _ => return None,
    };

    Some(value)
}

/// Converts a slash command or context menu invocation.
pub fn command_request(interaction: &CommandInteraction) -> CommandRequest {
    let data = &interaction.data;
    let kind = match data.kind {
        CommandType::User => CommandKind::User,
        CommandType::Message => CommandKind::Message,
        _ => CommandKind::ChatInput,
    };

    let (subcommand, options) = flatten_options(&data.options);
    let options = options
        .iter()
        .filter_map(|option| Some((option.name.clone(), option_value(&option.value)?)))
        .collect();

    let target_id = data.target_id.map(|id| id.get());
    let target_message = target_id.and_then(|id| {
        data.resolved
            .messages
            .values()
            .find(|message| message.id.get() == id)
            .map(|message| TargetMessage {
                id: message.id.get(),
                author_id: message.author.id.get(),
                author_name: message.author.name.clone(),
                content: message.content.clone(),
            })
    });

    CommandRequest {
        name: data.name.clone(),
        kind,
        subcommand,
        options,
        target_id,
        target_message,
        meta: command_meta(interaction),
    }
}

/// Converts an autocomplete interaction, `None` when no option is focused.
pub fn autocomplete_request(interaction: &CommandInteraction) -> Option<AutocompleteRequest> {
    let (subcommand, options) = flatten_options(&interaction.data.options);
    let (focused, partial) = options.iter().find_map(|option| match &option.value {
        CommandDataOptionValue::Autocomplete { value, .. } => {
            Some((option.name.clone(), value.clone()))
        }
        _ => None,
    })?;

    Some(AutocompleteRequest {
        command: interaction.data.name.clone(),
        subcommand,
        focused,
        partial,
        meta: command_meta(interaction),
    })
}

/// Converts a button click or select menu choice, `None` for unknown component types.
pub fn component_request(interaction: &ComponentInteraction) -> Option<ComponentRequest> {
    let (kind, values) = match &interaction.data.kind {
        ComponentInteractionDataKind::Button => (ComponentKind::Button, Vec::new()),
        ComponentInteractionDataKind::StringSelect { values } => {
            (ComponentKind::StringSelect, values.clone())
        }
        ComponentInteractionDataKind::UserSelect { values } => (
            ComponentKind::UserSelect,
            values.iter().map(|id| id.to_string()).collect(),
        ),
        ComponentInteractionDataKind::RoleSelect { values } => (
            ComponentKind::RoleSelect,
            values.iter().map(|id| id.to_string()).collect(),
        ),
        ComponentInteractionDataKind::ChannelSelect { values } => (
            ComponentKind::ChannelSelect,
            values.iter().map(|id| id.to_string()).collect(),
        ),
        ComponentInteractionDataKind::MentionableSelect { values } => (
            ComponentKind::MentionableSelect,
            values.iter().map(|id| id.to_string()).collect(),
        ),
        _ => return None,
    };

    Some(ComponentRequest {
        custom_id: interaction.data.custom_id.clone(),
        kind,
        values,
        meta: meta(
            interaction.id.get(),
            &interaction.user,
            interaction.guild_id.map(|id| id.get()),
            interaction.channel_id.get(),
            interaction.member.as_ref(),
        ),
    })
}

pub fn modal_request(interaction: &ModalInteraction) -> ModalRequest {
    let fields: HashMap<String, String> = interaction
        .data
        .components
        .iter()
        .flat_map(|row| row.components.iter())
        .filter_map(|component| match component {
            ActionRowComponent::InputText(input) => Some((
                input.custom_id.clone(),
                input.value.clone().unwrap_or_default(),
            )),
            _ => None,
        })
        .collect();

    ModalRequest {
        custom_id: interaction.data.custom_id.clone(),
        fields,
        meta: meta(
            interaction.id.get(),
            &interaction.user,
            interaction.guild_id.map(|id| id.get()),
            interaction.channel_id.get(),
            interaction.member.as_ref(),
        ),
    }
}

fn message(reply: Reply) -> CreateInteractionResponseMessage {
    let mut message = CreateInteractionResponseMessage::new()
        .embeds(reply.embeds)
        .components(reply.components)
        .ephemeral(reply.ephemeral);

    if let Some(content) = reply.content {
        message = message.content(content);
    }

    message
}

fn modal(form: ModalForm) -> CreateModal {
    let rows = form
        .inputs
        .into_iter()
        .map(|input| {
            let style = match input.style {
                TextStyle::Short => InputTextStyle::Short,
                TextStyle::Paragraph => InputTextStyle::Paragraph,
            };
            let mut text = CreateInputText::new(style, input.label, input.custom_id)
                .required(input.required);

            if let Some(value) = input.value {
                text = text.value(value);
            }
            if let Some(min) = input.min_length {
                text = text.min_length(min);
            }
            if let Some(max) = input.max_length {
                text = text.max_length(max);
            }

            CreateActionRow::InputText(text)
        })
        .collect();

    CreateModal::new(form.custom_id, form.title).components(rows)
}

/// Builds the Discord reply for a response.
///
/// `Update` is only meaningful for component interactions; from a command or modal it
/// is sent as a new message instead.
pub fn to_discord(response: Response, from_component: bool) -> CreateInteractionResponse {
    match response {
        Response::Message(reply) => CreateInteractionResponse::Message(message(reply)),
        Response::Update(reply) if from_component => {
            CreateInteractionResponse::UpdateMessage(message(reply))
        }
        Response::Update(reply) => CreateInteractionResponse::Message(message(reply)),
        Response::Modal(form) => CreateInteractionResponse::Modal(modal(form)),
        Response::Choices(choices) => {
            let autocomplete = choices
                .into_iter()
                .fold(CreateAutocompleteResponse::new(), |builder, choice| {
                    builder.add_string_choice(choice.name, choice.value)
                });
            CreateInteractionResponse::Autocomplete(autocomplete)
        }
        Response::Defer { ephemeral } => CreateInteractionResponse::Defer(
            CreateInteractionResponseMessage::new().ephemeral(ephemeral),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::bot::interaction::response::{Choice, TextField};

    #[test]
    fn update_from_command_becomes_message() {
        let response = Response::Update(Reply::text("hello"));

        assert!(matches!(
            to_discord(response.clone(), false),
            CreateInteractionResponse::Message(_)
        ));
        assert!(matches!(
            to_discord(response, true),
            CreateInteractionResponse::UpdateMessage(_)
        ));
    }

    #[test]
    fn translates_modal_and_choices() {
        let form = ModalForm {
            custom_id: "profile-edit".to_string(),
            title: "Edit profile".to_string(),
            inputs: vec![TextField::new("nickname", "Nickname", TextStyle::Short).length(1, 32)],
        };
        assert!(matches!(
            to_discord(Response::Modal(form), false),
            CreateInteractionResponse::Modal(_)
        ));

        let choices = Response::Choices(vec![Choice::new("github", "github")]);
        assert!(matches!(
            to_discord(choices, false),
            CreateInteractionResponse::Autocomplete(_)
        ));
    }
}
