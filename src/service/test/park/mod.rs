use crate::{
    error::AppError,
    model::park::{CreateParkParams, UpdateParkParams},
    service::park::ParkService,
};
use test_utils::{builder::TestBuilder, factory};

mod create;
