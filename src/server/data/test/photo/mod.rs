use crate::server::{data::photo::PhotoRepository, model::photo::CreatePhotoParam};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, kos_photo::KosPhotoFactory},
};

mod create;
mod delete;
mod set_primary;
