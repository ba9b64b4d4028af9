//! `/feedback`, the `Report as Feedback` message menu, the submit modal and the owner
//! status buttons.

use serenity::{
    all::{
        ButtonStyle, CommandOptionType, CommandType, CreateActionRow, CreateButton,
        CreateCommand, CreateCommandOption, CreateEmbed, CreateEmbedFooter,
    },
    async_trait,
};
use std::time::Duration;

use crate::{
    model::feedback::FeedbackStatus,
    server::{
        bot::{
            command::{truncate, EMBED_COLOR},
            interaction::{
                context::HandlerContext,
                handler::{CommandHandler, ComponentHandler, HandlerMeta, ModalHandler},
                precondition::OwnerOnly,
                request::{
                    custom_id, AutocompleteRequest, CommandRequest, ComponentRequest,
                    HandlerKind, InteractionMeta, ModalRequest, TargetMessage,
                },
                response::{Choice, ModalForm, Reply, Response, TextField, TextStyle},
            },
        },
        error::command::CommandError,
        model::feedback::{
            CreateFeedbackParam, Feedback, CONTENT_MAX_LENGTH, TITLE_MAX_LENGTH,
        },
        service::feedback::FeedbackService,
    },
};

pub const SUBMIT_MODAL_KEY: &str = "feedback-submit";
pub const STATUS_BUTTON_KEY: &str = "feedback-status";

const TITLE_INPUT: &str = "title";
const CONTENT_INPUT: &str = "content";

/// Discord's limit on autocomplete choice names.
const CHOICE_NAME_MAX_LENGTH: usize = 100;

pub fn feedback_embed(feedback: &Feedback) -> CreateEmbed {
    CreateEmbed::new()
        .title(&feedback.title)
        .description(&feedback.content)
        .field("Status", feedback.status.label(), true)
        .field("Author", format!("<@{}>", feedback.discord_id), true)
        .footer(CreateEmbedFooter::new(format!("Feedback {}", feedback.id)))
        .color(EMBED_COLOR)
}

/// One button per transition the ticket's status allows, none once it is terminal.
pub fn status_buttons(feedback: &Feedback) -> Vec<CreateActionRow> {
    let buttons: Vec<CreateButton> = feedback
        .status
        .next_statuses()
        .iter()
        .map(|next| {
            let style = match next {
                FeedbackStatus::Rejected | FeedbackStatus::Closed => ButtonStyle::Danger,
                FeedbackStatus::Resolved | FeedbackStatus::Accepted => ButtonStyle::Success,
                _ => ButtonStyle::Primary,
            };
            CreateButton::new(custom_id(STATUS_BUTTON_KEY, &[&feedback.id, next.as_str()]))
                .label(next.label())
                .style(style)
        })
        .collect();

    if buttons.is_empty() {
        Vec::new()
    } else {
        vec![CreateActionRow::Buttons(buttons)]
    }
}

pub fn list_text(tickets: &[Feedback]) -> String {
    if tickets.is_empty() {
        return "You have not submitted any feedback yet.".to_string();
    }

    tickets
        .iter()
        .map(|ticket| {
            format!(
                "`{}` **{}** - {}",
                ticket.id,
                ticket.title,
                ticket.status.label()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The caller's tickets whose ID or title contains `partial`, ignoring case.
pub fn ticket_choices(tickets: &[Feedback], partial: &str) -> Vec<Choice> {
    let partial = partial.trim().to_lowercase();

    tickets
        .iter()
        .filter(|ticket| {
            ticket.id.to_lowercase().contains(&partial)
                || ticket.title.to_lowercase().contains(&partial)
        })
        .map(|ticket| {
            let name = format!("{} ({})", ticket.title, ticket.status.label());
            Choice::new(truncate(&name, CHOICE_NAME_MAX_LENGTH), &ticket.id)
        })
        .collect()
}

/// Ticket filed from a message context menu, with a link back to the message.
pub fn report_param(meta: &InteractionMeta, message: &TargetMessage) -> CreateFeedbackParam {
    let title = truncate(
        &format!("Report: message from {}", message.author_name),
        TITLE_MAX_LENGTH,
    );

    let link = format!(
        "https://discord.com/channels/{}/{}/{}",
        meta.guild_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "@me".to_string()),
        meta.channel_id,
        message.id
    );
    let body = if message.content.trim().is_empty() {
        "(no text content)"
    } else {
        message.content.as_str()
    };
    // Keep the link intact, cut the quoted message instead.
    let budget = CONTENT_MAX_LENGTH.saturating_sub(link.chars().count() + 2);
    let content = format!("{}\n\n{}", truncate(body, budget), link);

    CreateFeedbackParam::new(meta.user_id, &title, &content)
}

fn submit_form() -> ModalForm {
    ModalForm {
        custom_id: SUBMIT_MODAL_KEY.to_string(),
        title: "Submit feedback".to_string(),
        inputs: vec![
            TextField::new(TITLE_INPUT, "Title", TextStyle::Short)
                .length(1, TITLE_MAX_LENGTH as u16),
            TextField::new(CONTENT_INPUT, "What's on your mind?", TextStyle::Paragraph)
                .length(1, CONTENT_MAX_LENGTH as u16),
        ],
    }
}

fn filed_reply(feedback: &Feedback) -> Response {
    Response::ephemeral(format!(
        "Thanks! Your feedback was filed as `{}`.",
        feedback.id
    ))
}

pub struct FeedbackCommand {
    meta: HandlerMeta,
}

impl FeedbackCommand {
    pub fn new() -> Self {
        Self {
            meta: HandlerMeta::new(HandlerKind::ChatInput),
        }
    }

    async fn view(
        &self,
        ctx: &HandlerContext<'_>,
        request: &CommandRequest,
    ) -> Result<Response, CommandError> {
        let id = request.string("id").unwrap_or_default().trim();
        let is_owner = ctx.is_owner(request.meta.user_id);

        let feedback = FeedbackService::new(ctx.db)
            .get_for_viewer(id, request.meta.user_id, is_owner)
            .await?;

        let mut reply = Reply::embed(feedback_embed(&feedback)).ephemeral();
        if is_owner {
            reply = reply.components(status_buttons(&feedback));
        }

        Ok(Response::Message(reply))
    }

    async fn list(
        &self,
        ctx: &HandlerContext<'_>,
        request: &CommandRequest,
    ) -> Result<Response, CommandError> {
        let tickets = FeedbackService::new(ctx.db)
            .get_recent_by_author(request.meta.user_id)
            .await?;

        let embed = CreateEmbed::new()
            .title("Your feedback")
            .description(list_text(&tickets))
            .color(EMBED_COLOR);

        Ok(Response::Message(Reply::embed(embed).ephemeral()))
    }
}

#[async_trait]
impl CommandHandler for FeedbackCommand {
    fn name(&self) -> &str {
        "feedback"
    }

    fn description(&self) -> &str {
        "Send feedback to the bot owners and follow up on it"
    }

    fn meta(&self) -> &HandlerMeta {
        &self.meta
    }

    fn definition(&self) -> CreateCommand {
        CreateCommand::new(self.name())
            .description(self.description())
            .add_option(CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "submit",
                "Submit new feedback",
            ))
            .add_option(
                CreateCommandOption::new(CommandOptionType::SubCommand, "view", "Show a ticket")
                    .add_sub_option(
                        CreateCommandOption::new(CommandOptionType::String, "id", "Ticket ID")
                            .set_autocomplete(true)
                            .required(true),
                    ),
            )
            .add_option(CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "list",
                "List your recent tickets",
            ))
    }

    async fn run(
        &self,
        ctx: &HandlerContext<'_>,
        request: &CommandRequest,
    ) -> Result<Response, CommandError> {
        match request.subcommand_path().as_str() {
            "submit" => Ok(Response::Modal(submit_form())),
            "view" => self.view(ctx, request).await,
            "list" => self.list(ctx, request).await,
            other => Err(CommandError::user(format!("Unknown subcommand '{}'", other))),
        }
    }

    async fn autocomplete(
        &self,
        ctx: &HandlerContext<'_>,
        request: &AutocompleteRequest,
    ) -> Result<Vec<Choice>, CommandError> {
        if request.focused != "id" {
            return Ok(Vec::new());
        }

        let tickets = FeedbackService::new(ctx.db)
            .get_all_by_author(request.meta.user_id)
            .await?;

        Ok(ticket_choices(&tickets, &request.partial))
    }
}

/// Message context menu filing the target message as a ticket.
pub struct ReportFeedbackCommand {
    meta: HandlerMeta,
}

impl ReportFeedbackCommand {
    pub fn new() -> Self {
        Self {
            meta: HandlerMeta::new(HandlerKind::MessageContext),
        }
    }
}

#[async_trait]
impl CommandHandler for ReportFeedbackCommand {
    fn name(&self) -> &str {
        "Report as Feedback"
    }

    fn description(&self) -> &str {
        ""
    }

    fn meta(&self) -> &HandlerMeta {
        &self.meta
    }

    fn definition(&self) -> CreateCommand {
        CreateCommand::new(self.name()).kind(CommandType::Message)
    }

    async fn run(
        &self,
        ctx: &HandlerContext<'_>,
        request: &CommandRequest,
    ) -> Result<Response, CommandError> {
        let message = request
            .target_message
            .as_ref()
            .ok_or_else(|| CommandError::user("That message could not be loaded."))?;

        let feedback = FeedbackService::new(ctx.db)
            .submit(report_param(&request.meta, message))
            .await?;

        Ok(filed_reply(&feedback))
    }
}

/// Files the ticket; the per-user cooldown sits here so viewing tickets stays free.
pub struct FeedbackSubmitModal {
    meta: HandlerMeta,
}

impl FeedbackSubmitModal {
    pub fn new() -> Self {
        Self {
            meta: HandlerMeta::new(HandlerKind::Modal).cooldown(Duration::from_secs(60)),
        }
    }
}

#[async_trait]
impl ModalHandler for FeedbackSubmitModal {
    fn key(&self) -> &str {
        SUBMIT_MODAL_KEY
    }

    fn meta(&self) -> &HandlerMeta {
        &self.meta
    }

    async fn run(
        &self,
        ctx: &HandlerContext<'_>,
        request: &ModalRequest,
        _args: &[&str],
    ) -> Result<Response, CommandError> {
        let param = CreateFeedbackParam::new(
            request.meta.user_id,
            request.field(TITLE_INPUT),
            request.field(CONTENT_INPUT),
        );
        let feedback = FeedbackService::new(ctx.db).submit(param).await?;

        Ok(filed_reply(&feedback))
    }
}

/// `feedback-status:<id>:<STATUS>`, owners only.
pub struct FeedbackStatusButton {
    meta: HandlerMeta,
}

impl FeedbackStatusButton {
    pub fn new() -> Self {
        Self {
            meta: HandlerMeta::new(HandlerKind::Button).precondition(OwnerOnly),
        }
    }
}

#[async_trait]
impl ComponentHandler for FeedbackStatusButton {
    fn key(&self) -> &str {
        STATUS_BUTTON_KEY
    }

    fn meta(&self) -> &HandlerMeta {
        &self.meta
    }

    async fn run(
        &self,
        ctx: &HandlerContext<'_>,
        _request: &ComponentRequest,
        args: &[&str],
    ) -> Result<Response, CommandError> {
        let [id, status] = args else {
            return Err(CommandError::user("This button is malformed."));
        };
        let next = status
            .parse::<FeedbackStatus>()
            .map_err(|e| CommandError::user(e.to_string()))?;

        let feedback = FeedbackService::new(ctx.db).update_status(id, next).await?;

        Ok(Response::Update(
            Reply::embed(feedback_embed(&feedback)).components(status_buttons(&feedback)),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn ticket(id: &str, title: &str, status: FeedbackStatus) -> Feedback {
        Feedback {
            id: id.to_string(),
            discord_id: 7,
            title: title.to_string(),
            content: "Body".to_string(),
            status,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn buttons_follow_transition_table() {
        let acknowledged = ticket("V1StGXR8_Z5jdHi6B-myT", "Bug", FeedbackStatus::Acknowledged);
        let rows = status_buttons(&acknowledged);
        assert_eq!(rows.len(), 1);
        match &rows[0] {
            CreateActionRow::Buttons(buttons) => assert_eq!(buttons.len(), 3),
            _ => panic!("expected a button row"),
        }

        let resolved = ticket("V1StGXR8_Z5jdHi6B-myT", "Bug", FeedbackStatus::Resolved);
        assert!(status_buttons(&resolved).is_empty());
    }

    #[test]
    fn lists_tickets_or_explains_empty() {
        assert_eq!(list_text(&[]), "You have not submitted any feedback yet.");

        let text = list_text(&[ticket("abc", "Dark mode", FeedbackStatus::Open)]);
        assert_eq!(text, "`abc` **Dark mode** - Open");
    }

    #[test]
    fn matches_choices_on_id_or_title() {
        let tickets = vec![
            ticket("AAAAAAAAAAAAAAAAAAAAA", "Dark mode", FeedbackStatus::Open),
            ticket("BBBBBBBBBBBBBBBBBBBBB", "Crash on login", FeedbackStatus::Accepted),
        ];

        let by_title = ticket_choices(&tickets, "dark");
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].value, "AAAAAAAAAAAAAAAAAAAAA");
        assert_eq!(by_title[0].name, "Dark mode (Open)");

        assert_eq!(ticket_choices(&tickets, "bbb").len(), 1);
        assert_eq!(ticket_choices(&tickets, "").len(), 2);
    }

    #[test]
    fn report_links_back_to_message() {
        let meta = InteractionMeta::new(1 << 22, 42, "reporter").in_guild(
            10,
            20,
            serenity::all::Permissions::empty(),
        );
        let message = TargetMessage {
            id: 30,
            author_id: 5,
            author_name: "spammer".to_string(),
            content: "buy now".to_string(),
        };

        let param = report_param(&meta, &message);

        assert_eq!(param.discord_id, 42);
        assert_eq!(param.title, "Report: message from spammer");
        assert!(param.content.starts_with("buy now"));
        assert!(param
            .content
            .ends_with("https://discord.com/channels/10/20/30"));
        assert!(param.validate().is_ok());
    }

    #[test]
    fn report_of_long_message_stays_valid() {
        let meta = InteractionMeta::new(1 << 22, 42, "reporter");
        let message = TargetMessage {
            id: 30,
            author_id: 5,
            author_name: "a".repeat(200),
            content: "x".repeat(5000),
        };

        let param = report_param(&meta, &message);

        assert!(param.validate().is_ok());
        assert!(param.content.contains("/@me/"));
    }
}
