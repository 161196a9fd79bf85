use crate::{
    error::AppError,
    model::trail::CreateTrailParams,
    service::trail::TrailService,
};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

mod available_on;
mod create;
