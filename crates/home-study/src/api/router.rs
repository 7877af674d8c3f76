use super::rejection::{require, unprocessable, AccessDenied};
use super::requests::{
    MaterialsRequest, NavigationRequest, NavigationResponse, ReportRequest, RosterImportRequest,
    RosterRequest, StatusEntry, StatusRequest,
};
use super::ApiState;
use crate::access::{guard_navigation, Role, SessionHeaders};
use crate::error::AppError;
use crate::materials::{list_materials, MaterialDraft, MaterialListing, StudentReport};
use crate::roster::{classify, days_left, RosterImporter, RosterListing, StudentDraft};
use std::io::Cursor;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::json;

const ANY_ROLE: &[Role] = &[Role::Coordinator, Role::Teacher];

/// HTTP surface over roster, materials and the navigation guard.
///
/// Every request carries the records it works on; the router keeps no data of its own.
pub fn regime_router(state: ApiState) -> Router {
    Router::new()
        .route("/api/v1/roster", post(roster_handler))
        .route("/api/v1/roster/status", post(status_handler))
        .route("/api/v1/roster/import", post(import_handler))
        .route("/api/v1/students/validate", post(validate_student_handler))
        .route("/api/v1/students/report", post(report_handler))
        .route("/api/v1/materials", post(materials_handler))
        .route("/api/v1/materials/validate", post(validate_material_handler))
        .route("/api/v1/access/navigate", post(navigate_handler))
        .with_state(state)
}

pub(crate) async fn roster_handler(
    State(state): State<ApiState>,
    session: SessionHeaders,
    Json(request): Json<RosterRequest>,
) -> Result<Json<RosterListing>, AccessDenied> {
    require(&session, ANY_ROLE, "roster")?;

    let now = request.today.unwrap_or_else(|| state.now());
    let ordering = request.ordering.unwrap_or(state.ordering);
    let listing = RosterListing::build(&request.students, &request.filter, ordering, now);
    tracing::debug!(
        students = listing.students.len(),
        ordering = ordering.label(),
        "roster listing built"
    );
    Ok(Json(listing))
}

pub(crate) async fn status_handler(
    State(state): State<ApiState>,
    session: SessionHeaders,
    Json(request): Json<StatusRequest>,
) -> Result<Json<Vec<StatusEntry>>, AccessDenied> {
    require(&session, ANY_ROLE, "roster status")?;

    let now = request.today.unwrap_or_else(|| state.now());
    let entries = request
        .students
        .iter()
        .map(|student| {
            let status = classify(student, now);
            StatusEntry {
                id: student.id.clone(),
                status,
                status_label: status.label(),
                days_left: days_left(student, now),
            }
        })
        .collect();
    Ok(Json(entries))
}

pub(crate) async fn import_handler(
    session: SessionHeaders,
    Json(request): Json<RosterImportRequest>,
) -> Response {
    if let Err(denied) = require(&session, &[Role::Coordinator], "roster import") {
        return denied.into_response();
    }

    match RosterImporter::from_reader_csv(Cursor::new(request.csv.into_bytes())) {
        Ok(students) => {
            tracing::info!(students = students.len(), "roster export parsed");
            (StatusCode::OK, Json(students)).into_response()
        }
        Err(error) => AppError::from(error).into_response(),
    }
}

pub(crate) async fn validate_student_handler(
    session: SessionHeaders,
    Json(draft): Json<StudentDraft>,
) -> Response {
    if let Err(denied) = require(&session, &[Role::Coordinator], "student intake") {
        return denied.into_response();
    }

    match draft.validate() {
        Ok(()) => (StatusCode::OK, Json(json!({ "valid": true }))).into_response(),
        Err(error) => unprocessable(error),
    }
}

pub(crate) async fn materials_handler(
    session: SessionHeaders,
    Json(request): Json<MaterialsRequest>,
) -> Result<Json<MaterialListing>, AccessDenied> {
    require(&session, ANY_ROLE, "materials")?;

    Ok(Json(list_materials(
        &request.materials,
        &request.student_id,
        &request.filter,
    )))
}

pub(crate) async fn validate_material_handler(
    session: SessionHeaders,
    Json(draft): Json<MaterialDraft>,
) -> Response {
    if let Err(denied) = require(&session, &[Role::Teacher], "material intake") {
        return denied.into_response();
    }

    match draft.validate() {
        Ok(()) => (StatusCode::OK, Json(json!({ "valid": true }))).into_response(),
        Err(error) => unprocessable(error),
    }
}

pub(crate) async fn report_handler(
    State(state): State<ApiState>,
    session: SessionHeaders,
    Json(request): Json<ReportRequest>,
) -> Result<Json<StudentReport>, AccessDenied> {
    require(&session, ANY_ROLE, "student report")?;

    let now = request.today.unwrap_or_else(|| state.now());
    Ok(Json(StudentReport::build(
        &request.student,
        &request.materials,
        now,
    )))
}

pub(crate) async fn navigate_handler(
    Json(request): Json<NavigationRequest>,
) -> Json<NavigationResponse> {
    let decision = guard_navigation(request.session.as_ref(), &request.path);
    Json(NavigationResponse {
        decision: decision.label(),
        redirect: decision.redirect_path(),
    })
}
