//! Visit report factory for creating test report entities.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test visit reports with customizable fields.
pub struct VisitReportFactory<'a> {
    db: &'a DatabaseConnection,
    reservation_id: i32,
    rating: Option<i32>,
    comments: Option<String>,
    problems: Option<String>,
    created_at: DateTime<Utc>,
}

impl<'a> VisitReportFactory<'a> {
    /// Creates a new factory with default values.
    ///
    /// Defaults:
    /// - rating: `Some(5)`
    /// - comments: `Some("Great visit")`
    /// - problems: `None`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection, reservation_id: i32) -> Self {
        Self {
            db,
            reservation_id,
            rating: Some(5),
            comments: Some("Great visit".to_string()),
            problems: None,
            created_at: Utc::now(),
        }
    }

    /// Sets the rating (1-5).
    pub fn rating(mut self, rating: Option<i32>) -> Self {
        self.rating = rating;
        self
    }

    /// Sets the free-form comments.
    pub fn comments(mut self, comments: Option<String>) -> Self {
        self.comments = comments;
        self
    }

    /// Sets the creation timestamp. Useful for exercising the 24-hour
    /// edit window.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the visit report entity into the database.
    pub async fn build(self) -> Result<entity::visit_report::Model, DbErr> {
        entity::visit_report::ActiveModel {
            id: ActiveValue::NotSet,
            reservation_id: ActiveValue::Set(self.reservation_id),
            rating: ActiveValue::Set(self.rating),
            comments: ActiveValue::Set(self.comments),
            problems: ActiveValue::Set(self.problems),
            created_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a visit report with default values for the given reservation.
pub async fn create_visit_report(
    db: &DatabaseConnection,
    reservation_id: i32,
) -> Result<entity::visit_report::Model, DbErr> {
    VisitReportFactory::new(db, reservation_id).build().await
}
