use crate::{
    error::{auth::AuthError, AppError},
    model::visit_report::{CreateVisitReportParams, UpdateVisitReportParams},
    service::visit_report::VisitReportService,
};
use chrono::{Duration, Utc};
use entity::reservation::ReservationStatus;
use test_utils::{builder::TestBuilder, factory};
