//! Domain models for post-visit reports.

use chrono::{DateTime, Utc};

/// Feedback left by a visitor after a completed visit.
#[derive(Debug, Clone, PartialEq)]
pub struct VisitReport {
    /// Unique identifier for the report.
    pub id: i32,
    /// ID of the completed reservation being reported on.
    pub reservation_id: i32,
    /// Visitor rating from 1 to 5.
    pub rating: Option<i32>,
    /// Free-form impressions of the visit.
    pub comments: Option<String>,
    /// Problems observed on the trails, for maintenance follow-up.
    pub problems: Option<String>,
    /// Timestamp when the report was filed. Edits are only allowed for
    /// 24 hours after this moment.
    pub created_at: DateTime<Utc>,
}

impl VisitReport {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::visit_report::Model) -> Self {
        Self {
            id: entity.id,
            reservation_id: entity.reservation_id,
            rating: entity.rating,
            comments: entity.comments,
            problems: entity.problems,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for filing a new visit report.
#[derive(Debug, Clone)]
pub struct CreateVisitReportParams {
    pub reservation_id: i32,
    pub rating: Option<i32>,
    pub comments: Option<String>,
    pub problems: Option<String>,
}

/// Parameters for editing a report inside its 24-hour window.
///
/// All fields are optional - only provided fields will be updated.
#[derive(Debug, Clone, Default)]
pub struct UpdateVisitReportParams {
    pub rating: Option<Option<i32>>,
    pub comments: Option<Option<String>>,
    pub problems: Option<Option<String>>,
}
