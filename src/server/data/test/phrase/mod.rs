use crate::server::{
    data::phrase::PhraseRepository, error::AppError, model::phrase::PhraseParam,
};
use test_utils::{builder::TestBuilder, factory};

mod crud;
mod random;
