use crate::{
    model::{api::PageRequest, booking::BookingStatus},
    server::{
        data::booking::BookingRepository,
        model::booking::{BookingScope, NewBooking},
    },
};
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, booking::BookingFactory},
};

mod complete_elapsed;
mod create;
mod get_paginated;
mod has_overlap;
mod into_details;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
