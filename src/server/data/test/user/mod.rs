use crate::{
    model::{api::PageRequest, user::UserRole},
    server::{
        data::user::UserRepository,
        model::user::{CreateUserParam, UpdateUserParam, UserFilter},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod admin_exists;
mod create;
mod get_paginated;
mod soft_delete;
mod update;
