use crate::{
    model::{
        api::PageRequest,
        kos::{KosSort, KosType},
    },
    server::{
        data::kos::{KosRepository, PostCounter},
        model::kos::{CreateKosParam, KosFilter, UpdateKosParam},
    },
};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, kos::KosFactory},
};

mod adjust_counter;
mod create;
mod into_listings;
mod search;
mod soft_delete;
mod update;
