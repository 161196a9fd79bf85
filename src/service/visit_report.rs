//! Post-visit feedback reports.

use chrono::{Duration, Utc};
use entity::reservation::ReservationStatus;
use sea_orm::DatabaseConnection;

use crate::{
    data::{
        park::ParkRepository, reservation::ReservationRepository,
        visit_report::VisitReportRepository,
    },
    error::{auth::AuthError, AppError},
    model::visit_report::{CreateVisitReportParams, UpdateVisitReportParams, VisitReport},
};

/// How long after filing a report stays editable.
const EDIT_WINDOW_HOURS: i64 = 24;

pub struct VisitReportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VisitReportService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Files a report for a completed visit.
    ///
    /// Only the reservation owner may report, only once, and only after
    /// the visit completed through check-out.
    pub async fn create(
        &self,
        actor_id: i32,
        params: CreateVisitReportParams,
    ) -> Result<VisitReport, AppError> {
        let report_repo = VisitReportRepository::new(self.db);

        let reservation = ReservationRepository::new(self.db)
            .get_by_id(params.reservation_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reservation not found".to_string()))?;

        if reservation.user_id != actor_id {
            return Err(AuthError::NotOwner {
                user_id: actor_id,
                reservation_id: reservation.id,
            }
            .into());
        }

        if reservation.status != ReservationStatus::Completed {
            return Err(AppError::InvalidOperation(
                "A report can only be filed after the visit is completed".to_string(),
            ));
        }

        if report_repo
            .get_by_reservation(reservation.id)
            .await?
            .is_some()
        {
            return Err(AppError::InvalidOperation(
                "A report has already been filed for this reservation".to_string(),
            ));
        }

        let report = report_repo.create(params).await?;

        Ok(VisitReport::from_entity(report))
    }

    pub async fn get(&self, id: i32) -> Result<VisitReport, AppError> {
        let report = VisitReportRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Report not found".to_string()))?;

        Ok(VisitReport::from_entity(report))
    }

    pub async fn get_for_reservation(&self, reservation_id: i32) -> Result<VisitReport, AppError> {
        let report = VisitReportRepository::new(self.db)
            .get_by_reservation(reservation_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound("No report filed for this reservation".to_string())
            })?;

        Ok(VisitReport::from_entity(report))
    }

    /// Lists the reports filed for visits to one park, newest first.
    pub async fn list_by_park(&self, park_id: i32) -> Result<Vec<VisitReport>, AppError> {
        ParkRepository::new(self.db)
            .get_by_id(park_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Park not found".to_string()))?;

        let reports = VisitReportRepository::new(self.db)
            .get_by_park(park_id)
            .await?;

        Ok(reports.into_iter().map(VisitReport::from_entity).collect())
    }

    /// Lists the reports a user has filed, newest first.
    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<VisitReport>, AppError> {
        let reports = VisitReportRepository::new(self.db)
            .get_by_user(user_id)
            .await?;

        Ok(reports.into_iter().map(VisitReport::from_entity).collect())
    }

    /// Edits a report inside its 24-hour window.
    ///
    /// Only the reservation owner may edit; staff corrections happen
    /// through deletion and refiling by the visitor.
    pub async fn update(
        &self,
        id: i32,
        actor_id: i32,
        params: UpdateVisitReportParams,
    ) -> Result<VisitReport, AppError> {
        let report_repo = VisitReportRepository::new(self.db);

        let report = report_repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Report not found".to_string()))?;

        let reservation = ReservationRepository::new(self.db)
            .get_by_id(report.reservation_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reservation not found".to_string()))?;

        if reservation.user_id != actor_id {
            return Err(AuthError::NotOwner {
                user_id: actor_id,
                reservation_id: reservation.id,
            }
            .into());
        }

        if Utc::now() - report.created_at > Duration::hours(EDIT_WINDOW_HOURS) {
            return Err(AppError::InvalidOperation(format!(
                "Reports can only be edited within {} hours of filing",
                EDIT_WINDOW_HOURS
            )));
        }

        let updated = report_repo.update(id, params).await?;

        Ok(VisitReport::from_entity(updated))
    }

    /// Removes a report. Staff moderation only.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let report_repo = VisitReportRepository::new(self.db);

        if report_repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Report not found".to_string()));
        }

        report_repo.delete(id).await?;

        Ok(())
    }
}
