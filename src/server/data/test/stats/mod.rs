use crate::{
    model::{booking::BookingStatus, user::UserRole},
    server::data::stats::StatsRepository,
};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, booking::BookingFactory, kos::KosFactory},
};

mod platform;
