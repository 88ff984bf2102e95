use crate::{model::api::PageRequest, server::data::favorite::FavoriteRepository};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, kos::KosFactory},
};

mod create;
mod delete;
mod get_paginated_by_user;
