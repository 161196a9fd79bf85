use crate::{
    data::park::ParkRepository,
    model::park::{CreateParkParams, UpdateParkParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
