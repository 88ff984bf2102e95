use crate::{model::api::PageRequest, server::data::review::ReviewRepository};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_paginated_by_kos;
mod update;
