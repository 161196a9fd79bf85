use crate::{
    error::AppError,
    model::species::{CreateSpeciesParams, UpdateSpeciesParams},
    service::species::SpeciesService,
};
use entity::species::SpeciesKind;
use test_utils::{builder::TestBuilder, factory};
