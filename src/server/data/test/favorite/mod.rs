use crate::server::{
    data::favorite::FavoriteRepository,
    error::{internal::InternalError, AppError},
    model::favorite::FavoriteTarget,
};
use sea_orm::SqlErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_target;
mod get_by_user_id;
