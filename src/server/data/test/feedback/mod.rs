use crate::{
    model::feedback::FeedbackStatus,
    server::{
        data::feedback::FeedbackRepository, error::AppError,
        model::feedback::CreateFeedbackParam,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_author;
mod get_paginated;
mod update_status;
