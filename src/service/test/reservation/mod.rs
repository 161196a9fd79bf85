use crate::{
    error::{auth::AuthError, AppError},
    model::reservation::{CreateReservationParams, UpdateReservationParams},
    service::reservation::ReservationService,
};
use chrono::{Duration, Utc};
use entity::reservation::ReservationStatus;
use test_utils::{builder::TestBuilder, factory};

mod calendar;
