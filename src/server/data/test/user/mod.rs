use crate::server::{data::user::UserRepository, error::AppError, model::user::UpsertUserParam};
use test_utils::{builder::TestBuilder, context::TestContext, factory};

mod admin_exists;
mod find_by_discord_id;
mod get_all_admins;
mod get_all_paginated;
mod set_admin;
mod upsert;

fn param(discord_id: u64, name: &str, is_admin: Option<bool>) -> UpsertUserParam {
    UpsertUserParam {
        discord_id,
        name: name.to_string(),
        is_admin,
    }
}

/// Database with only the user table.
async fn users_db() -> TestContext {
    TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap()
}
