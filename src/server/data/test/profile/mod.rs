use crate::server::{
    data::profile::ProfileRepository, error::AppError, model::profile::UpsertProfileParam,
};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod find;
mod get_all_paginated;
mod update;
mod upsert;
