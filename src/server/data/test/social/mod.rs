use crate::server::{
    data::social::SocialRepository, error::AppError, model::profile::CreateSocialParam,
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
