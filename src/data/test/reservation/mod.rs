use crate::{
    data::reservation::ReservationRepository,
    model::reservation::{CreateReservationParams, ReservationFilter, UpdateReservationParams},
};
use chrono::{Duration, Utc};
use entity::reservation::ReservationStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_in_range;
mod lifecycle;
mod update;
