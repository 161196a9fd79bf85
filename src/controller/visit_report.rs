use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    controller::is_staff,
    dto::{
        api::MessageDto,
        visit_report::{
            CreateVisitReportDto, ReportListQuery, UpdateVisitReportDto, VisitReportDto,
        },
    },
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Identity, Permission},
    service::{reservation::ReservationService, visit_report::VisitReportService},
    state::AppState,
};

/// POST /api/reservations/{id}/report
/// File a report for a completed visit. Owner only.
pub async fn create_report(
    State(state): State<AppState>,
    identity: Identity,
    Path(reservation_id): Path<i32>,
    Json(dto): Json<CreateVisitReportDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &identity).require(&[]).await?;

    dto.validate()?;

    let report = VisitReportService::new(&state.db)
        .create(user.id, dto.into_params(reservation_id))
        .await?;

    Ok((StatusCode::CREATED, Json(VisitReportDto::from(report))))
}

/// GET /api/reservations/{id}/report
/// The report filed for a reservation. Owner or staff.
pub async fn get_report(
    State(state): State<AppState>,
    identity: Identity,
    Path(reservation_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &identity).require(&[]).await?;

    let reservation = ReservationService::new(&state.db)
        .get(reservation_id)
        .await?;

    if !is_staff(&user) && reservation.user_id != user.id {
        return Err(AuthError::NotOwner {
            user_id: user.id,
            reservation_id,
        }
        .into());
    }

    let report = VisitReportService::new(&state.db)
        .get_for_reservation(reservation_id)
        .await?;

    Ok(Json(VisitReportDto::from(report)))
}

/// GET /api/reports?park_id=..
/// Reports filed for visits to one park, newest first. Staff only.
pub async fn list_reports(
    State(state): State<AppState>,
    identity: Identity,
    Query(query): Query<ReportListQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::Staff])
        .await?;

    let reports = VisitReportService::new(&state.db)
        .list_by_park(query.park_id)
        .await?;

    Ok(Json(
        reports
            .into_iter()
            .map(VisitReportDto::from)
            .collect::<Vec<_>>(),
    ))
}

/// GET /api/reports/me
/// The caller's own reports, newest first.
pub async fn list_my_reports(
    State(state): State<AppState>,
    identity: Identity,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &identity).require(&[]).await?;

    let reports = VisitReportService::new(&state.db)
        .list_for_user(user.id)
        .await?;

    Ok(Json(
        reports
            .into_iter()
            .map(VisitReportDto::from)
            .collect::<Vec<_>>(),
    ))
}

/// GET /api/reports/{id}
/// One report by its own id. Owner or staff.
pub async fn get_report_by_id(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &identity).require(&[]).await?;

    let report = VisitReportService::new(&state.db).get(id).await?;

    if !is_staff(&user) {
        let reservation = ReservationService::new(&state.db)
            .get(report.reservation_id)
            .await?;

        if reservation.user_id != user.id {
            return Err(AuthError::NotOwner {
                user_id: user.id,
                reservation_id: reservation.id,
            }
            .into());
        }
    }

    Ok(Json(VisitReportDto::from(report)))
}

/// PUT /api/reports/{id}
/// Edit a report inside its 24-hour window. Owner only.
pub async fn update_report(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateVisitReportDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &identity).require(&[]).await?;

    dto.validate()?;

    let report = VisitReportService::new(&state.db)
        .update(id, user.id, dto.into_params())
        .await?;

    Ok(Json(VisitReportDto::from(report)))
}

/// DELETE /api/reports/{id}
/// Remove a report. Staff moderation only.
pub async fn delete_report(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::Staff])
        .await?;

    VisitReportService::new(&state.db).delete(id).await?;

    Ok(Json(MessageDto::new("Report deleted")))
}
