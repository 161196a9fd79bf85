use crate::{
    data::trail::TrailRepository,
    model::trail::{CreateTrailParams, TrailFilter, UpdateTrailParams},
};
use entity::trail::TrailDifficulty;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_park;
