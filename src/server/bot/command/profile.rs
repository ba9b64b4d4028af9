//! `/profile`, the `View Profile` user menu, the edit modal and the delete button.

use serenity::{
    all::{
        ButtonStyle, CommandOptionType, CommandType, CreateActionRow, CreateButton,
        CreateCommand, CreateCommandOption, CreateEmbed, CreateEmbedFooter,
    },
    async_trait,
};

use crate::server::{
    bot::{
        command::EMBED_COLOR,
        interaction::{
            context::HandlerContext,
            handler::{CommandHandler, ComponentHandler, HandlerMeta, ModalHandler},
            request::{
                AutocompleteRequest, CommandRequest, ComponentRequest, HandlerKind, ModalRequest,
            },
            response::{Choice, ModalForm, Reply, Response, TextField, TextStyle},
        },
    },
    error::command::CommandError,
    model::profile::{
        Profile, Social, UpsertProfileParam, BIO_MAX_LENGTH, NICKNAME_MAX_LENGTH,
        PLATFORM_MAX_LENGTH, URL_MAX_LENGTH,
    },
    service::profile::{ProfileService, NO_PROFILE_MESSAGE},
};

pub const EDIT_MODAL_KEY: &str = "profile-edit";
pub const DELETE_BUTTON_KEY: &str = "profile-delete";

const NICKNAME_INPUT: &str = "nickname";
const BIO_INPUT: &str = "bio";

/// Socials as markdown links, one per line.
pub fn socials_field(socials: &[Social]) -> String {
    if socials.is_empty() {
        return "None".to_string();
    }

    socials
        .iter()
        .map(|social| format!("[{}]({})", social.platform, social.url))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn profile_embed(profile: &Profile) -> CreateEmbed {
    CreateEmbed::new()
        .title(&profile.nickname)
        .description(profile.bio.as_deref().unwrap_or("No bio yet."))
        .field("Socials", socials_field(&profile.socials), false)
        .footer(CreateEmbedFooter::new(format!("Profile {}", profile.id)))
        .color(EMBED_COLOR)
}

/// Platforms of the caller's socials starting with `partial`, ignoring case.
pub fn platform_choices(socials: &[Social], partial: &str) -> Vec<Choice> {
    let partial = partial.trim().to_lowercase();

    socials
        .iter()
        .filter(|social| social.platform.to_lowercase().starts_with(&partial))
        .map(|social| Choice::new(&social.platform, &social.platform))
        .collect()
}

pub fn edit_form(current: Option<&Profile>) -> ModalForm {
    ModalForm {
        custom_id: EDIT_MODAL_KEY.to_string(),
        title: "Edit profile".to_string(),
        inputs: vec![
            TextField::new(NICKNAME_INPUT, "Nickname", TextStyle::Short)
                .length(1, NICKNAME_MAX_LENGTH as u16)
                .value(current.map(|profile| profile.nickname.clone())),
            TextField::new(BIO_INPUT, "Bio", TextStyle::Paragraph)
                .optional()
                .length(0, BIO_MAX_LENGTH as u16)
                .value(current.and_then(|profile| profile.bio.clone())),
        ],
    }
}

async fn show_profile(
    ctx: &HandlerContext<'_>,
    discord_id: u64,
    is_self: bool,
) -> Result<Response, CommandError> {
    match ProfileService::new(ctx.db).get_by_discord_id(discord_id).await? {
        Some(profile) => Ok(Response::embed(profile_embed(&profile))),
        None if is_self => Ok(Response::ephemeral(NO_PROFILE_MESSAGE)),
        None => Ok(Response::ephemeral(format!(
            "<@{}> has no profile yet.",
            discord_id
        ))),
    }
}

pub struct ProfileCommand {
    meta: HandlerMeta,
}

impl ProfileCommand {
    pub fn new() -> Self {
        Self {
            meta: HandlerMeta::new(HandlerKind::ChatInput),
        }
    }

    async fn delete(
        &self,
        ctx: &HandlerContext<'_>,
        request: &CommandRequest,
    ) -> Result<Response, CommandError> {
        if ProfileService::new(ctx.db)
            .get_by_discord_id(request.meta.user_id)
            .await?
            .is_none()
        {
            return Err(CommandError::user(NO_PROFILE_MESSAGE));
        }

        let confirm = CreateButton::new(DELETE_BUTTON_KEY)
            .label("Delete my profile")
            .style(ButtonStyle::Danger);
        let reply = Reply::text(
            "This deletes your profile and all of its social links. Are you sure?",
        )
        .components(vec![CreateActionRow::Buttons(vec![confirm])])
        .ephemeral();

        Ok(Response::Message(reply))
    }

    async fn add_social(
        &self,
        ctx: &HandlerContext<'_>,
        request: &CommandRequest,
    ) -> Result<Response, CommandError> {
        let platform = request.string("platform").unwrap_or_default();
        let url = request.string("url").unwrap_or_default();

        let social = ProfileService::new(ctx.db)
            .add_own_social(request.meta.user_id, platform, url)
            .await?;

        Ok(Response::ephemeral(format!(
            "Added your {} link.",
            social.platform
        )))
    }

    async fn remove_social(
        &self,
        ctx: &HandlerContext<'_>,
        request: &CommandRequest,
    ) -> Result<Response, CommandError> {
        let platform = request.string("platform").unwrap_or_default();

        let social = ProfileService::new(ctx.db)
            .remove_own_social(request.meta.user_id, platform)
            .await?;

        Ok(Response::ephemeral(format!(
            "Removed your {} link.",
            social.platform
        )))
    }
}

#[async_trait]
impl CommandHandler for ProfileCommand {
    fn name(&self) -> &str {
        "profile"
    }

    fn description(&self) -> &str {
        "View and edit profiles"
    }

    fn meta(&self) -> &HandlerMeta {
        &self.meta
    }

    fn definition(&self) -> CreateCommand {
        CreateCommand::new(self.name())
            .description(self.description())
            .add_option(
                CreateCommandOption::new(CommandOptionType::SubCommand, "view", "Show a profile")
                    .add_sub_option(CreateCommandOption::new(
                        CommandOptionType::User,
                        "user",
                        "Whose profile, yours by default",
                    )),
            )
            .add_option(CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "edit",
                "Edit your nickname and bio",
            ))
            .add_option(CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "delete",
                "Delete your profile",
            ))
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::SubCommandGroup,
                    "social",
                    "Manage your social links",
                )
                .add_sub_option(
                    CreateCommandOption::new(CommandOptionType::SubCommand, "add", "Add a link")
                        .add_sub_option(
                            CreateCommandOption::new(
                                CommandOptionType::String,
                                "platform",
                                "Platform name, e.g. GitHub",
                            )
                            .max_length(PLATFORM_MAX_LENGTH as u16)
                            .required(true),
                        )
                        .add_sub_option(
                            CreateCommandOption::new(CommandOptionType::String, "url", "Link")
                                .max_length(URL_MAX_LENGTH as u16)
                                .required(true),
                        ),
                )
                .add_sub_option(
                    CreateCommandOption::new(
                        CommandOptionType::SubCommand,
                        "remove",
                        "Remove a link",
                    )
                    .add_sub_option(
                        CreateCommandOption::new(
                            CommandOptionType::String,
                            "platform",
                            "Platform to remove",
                        )
                        .set_autocomplete(true)
                        .required(true),
                    ),
                ),
            )
    }

    async fn run(
        &self,
        ctx: &HandlerContext<'_>,
        request: &CommandRequest,
    ) -> Result<Response, CommandError> {
        match request.subcommand_path().as_str() {
            "view" => {
                let target = request.user("user").unwrap_or(request.meta.user_id);
                show_profile(ctx, target, target == request.meta.user_id).await
            }
            "edit" => {
                let current = ProfileService::new(ctx.db)
                    .get_by_discord_id(request.meta.user_id)
                    .await?;
                Ok(Response::Modal(edit_form(current.as_ref())))
            }
            "delete" => self.delete(ctx, request).await,
            "social add" => self.add_social(ctx, request).await,
            "social remove" => self.remove_social(ctx, request).await,
            other => Err(CommandError::user(format!("Unknown subcommand '{}'", other))),
        }
    }

    async fn autocomplete(
        &self,
        ctx: &HandlerContext<'_>,
        request: &AutocompleteRequest,
    ) -> Result<Vec<Choice>, CommandError> {
        if request.focused != "platform" || request.subcommand != ["social", "remove"] {
            return Ok(Vec::new());
        }

        let socials = ProfileService::new(ctx.db)
            .get_by_discord_id(request.meta.user_id)
            .await?
            .map(|profile| profile.socials)
            .unwrap_or_default();

        Ok(platform_choices(&socials, &request.partial))
    }
}

/// User context menu showing the target's profile.
pub struct ViewProfileCommand {
    meta: HandlerMeta,
}

impl ViewProfileCommand {
    pub fn new() -> Self {
        Self {
            meta: HandlerMeta::new(HandlerKind::UserContext),
        }
    }
}

#[async_trait]
impl CommandHandler for ViewProfileCommand {
    fn name(&self) -> &str {
        "View Profile"
    }

    fn description(&self) -> &str {
        ""
    }

    fn meta(&self) -> &HandlerMeta {
        &self.meta
    }

    fn definition(&self) -> CreateCommand {
        CreateCommand::new(self.name()).kind(CommandType::User)
    }

    async fn run(
        &self,
        ctx: &HandlerContext<'_>,
        request: &CommandRequest,
    ) -> Result<Response, CommandError> {
        let target = request
            .target_id
            .ok_or_else(|| CommandError::user("That user could not be found."))?;

        show_profile(ctx, target, target == request.meta.user_id).await
    }
}

pub struct ProfileEditModal {
    meta: HandlerMeta,
}

impl ProfileEditModal {
    pub fn new() -> Self {
        Self {
            meta: HandlerMeta::new(HandlerKind::Modal),
        }
    }
}

#[async_trait]
impl ModalHandler for ProfileEditModal {
    fn key(&self) -> &str {
        EDIT_MODAL_KEY
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
        let param = UpsertProfileParam::new(
            request.meta.user_id,
            request.field(NICKNAME_INPUT),
            Some(request.field(BIO_INPUT).to_string()),
        );
        let profile = ProfileService::new(ctx.db).upsert(param).await?;

        Ok(Response::Message(
            Reply::embed(profile_embed(&profile)).ephemeral(),
        ))
    }
}

pub struct ProfileDeleteButton {
    meta: HandlerMeta,
}

impl ProfileDeleteButton {
    pub fn new() -> Self {
        Self {
            meta: HandlerMeta::new(HandlerKind::Button),
        }
    }
}

#[async_trait]
impl ComponentHandler for ProfileDeleteButton {
    fn key(&self) -> &str {
        DELETE_BUTTON_KEY
    }

    fn meta(&self) -> &HandlerMeta {
        &self.meta
    }

    async fn run(
        &self,
        ctx: &HandlerContext<'_>,
        request: &ComponentRequest,
        _args: &[&str],
    ) -> Result<Response, CommandError> {
        ProfileService::new(ctx.db)
            .delete_own(request.meta.user_id)
            .await?;

        Ok(Response::Update(Reply::text(
            "Your profile has been deleted.",
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn social(platform: &str, url: &str) -> Social {
        Social {
            id: "V1StGXR8_Z5jdHi6B-myT".to_string(),
            profile_id: "Uakgb_J5m9g-0JDMbcJqL".to_string(),
            platform: platform.to_string(),
            url: url.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn lists_socials_as_links() {
        let socials = vec![
            social("GitHub", "https://github.com/wren"),
            social("Mastodon", "https://mastodon.social/@wren"),
        ];

        assert_eq!(
            socials_field(&socials),
            "[GitHub](https://github.com/wren)\n[Mastodon](https://mastodon.social/@wren)"
        );
        assert_eq!(socials_field(&[]), "None");
    }

    #[test]
    fn filters_platforms_by_prefix() {
        let socials = vec![
            social("GitHub", "https://github.com/wren"),
            social("GitLab", "https://gitlab.com/wren"),
            social("Twitch", "https://twitch.tv/wren"),
        ];

        let names: Vec<String> = platform_choices(&socials, "gi")
            .into_iter()
            .map(|choice| choice.value)
            .collect();
        assert_eq!(names, vec!["GitHub", "GitLab"]);
        assert_eq!(platform_choices(&socials, "").len(), 3);
    }

    #[test]
    fn edit_form_prefills_current_values() {
        let profile = Profile {
            id: "Uakgb_J5m9g-0JDMbcJqL".to_string(),
            discord_id: 1,
            nickname: "Wren".to_string(),
            bio: Some("Small bird".to_string()),
            socials: Vec::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let form = edit_form(Some(&profile));
        assert_eq!(form.custom_id, EDIT_MODAL_KEY);
        assert_eq!(form.inputs[0].value.as_deref(), Some("Wren"));
        assert_eq!(form.inputs[1].value.as_deref(), Some("Small bird"));
        assert!(!form.inputs[1].required);

        let empty = edit_form(None);
        assert!(empty.inputs.iter().all(|input| input.value.is_none()));
    }
}
