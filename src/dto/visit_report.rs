//! Visit report request and response bodies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    error::AppError,
    model::visit_report::{CreateVisitReportParams, UpdateVisitReportParams, VisitReport},
};

fn validate_rating(rating: Option<i32>) -> Result<(), AppError> {
    if let Some(rating) = rating {
        if !(1..=5).contains(&rating) {
            return Err(AppError::BadRequest(
                "Rating must be between 1 and 5".to_string(),
            ));
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisitReportDto {
    pub id: i32,
    pub reservation_id: i32,
    pub rating: Option<i32>,
    pub comments: Option<String>,
    pub problems: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<VisitReport> for VisitReportDto {
    fn from(report: VisitReport) -> Self {
        Self {
            id: report.id,
            reservation_id: report.reservation_id,
            rating: report.rating,
            comments: report.comments,
            problems: report.problems,
            created_at: report.created_at,
        }
    }
}

/// Query parameters of `GET /api/reports`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportListQuery {
    /// Park whose visit reports are listed.
    pub park_id: i32,
}

/// Body of `POST /api/reservations/{id}/report`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateVisitReportDto {
    pub rating: Option<i32>,
    pub comments: Option<String>,
    pub problems: Option<String>,
}

impl CreateVisitReportDto {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_rating(self.rating)
    }

    pub fn into_params(self, reservation_id: i32) -> CreateVisitReportParams {
        CreateVisitReportParams {
            reservation_id,
            rating: self.rating,
            comments: self.comments,
            problems: self.problems,
        }
    }
}

/// Body of `PUT /api/reports/{id}`. Full replacement of the mutable fields.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateVisitReportDto {
    pub rating: Option<i32>,
    pub comments: Option<String>,
    pub problems: Option<String>,
}

impl UpdateVisitReportDto {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_rating(self.rating)
    }

    pub fn into_params(self) -> UpdateVisitReportParams {
        UpdateVisitReportParams {
            rating: Some(self.rating),
            comments: Some(self.comments),
            problems: Some(self.problems),
        }
    }
}
