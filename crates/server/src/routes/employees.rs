use std::time::Instant;

use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    http::StatusCode,
    Json,
};
use common::types::Envelope;
use service::employee::domain::{EmployeeDto, EmployeeInput};
use tracing::info;

use crate::{errors::JsonApiError, metrics, state::ServerState};

const RESOURCE: &str = "employees";

#[utoipa::path(
    get, path = "/api/employees", tag = "employees",
    responses(
        (status = 200, description = "All employees with count", body = crate::openapi::EnvelopeDoc)
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Envelope<Vec<EmployeeDto>>>, JsonApiError> {
    let started = Instant::now();
    let res = state.employees.list_all().await;
    metrics::observe(RESOURCE, "list", started, &res);
    let list = res?;
    info!(count = list.len(), "list employees");
    let count = list.len();
    Ok(Json(Envelope::ok("Employees retrieved successfully", list).with_count(count)))
}

#[utoipa::path(
    get, path = "/api/employees/{id}", tag = "employees",
    params(("id" = i64, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::EnvelopeDoc),
        (status = 404, description = "Not Found", body = crate::openapi::EnvelopeDoc)
    )
)]
pub async fn get(State(state): State<ServerState>, id: Result<Path<i64>, PathRejection>) -> Result<Json<Envelope<EmployeeDto>>, JsonApiError> {
    let Path(id) = id?;
    let started = Instant::now();
    let res = state.employees.get_by_id(id).await;
    metrics::observe(RESOURCE, "get", started, &res);
    Ok(Json(Envelope::ok("Employee retrieved successfully", res?)))
}

#[utoipa::path(
    post, path = "/api/employees", tag = "employees",
    request_body = crate::openapi::EmployeeInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::EnvelopeDoc),
        (status = 400, description = "Email already exists or invalid input", body = crate::openapi::EnvelopeDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<EmployeeInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Envelope<EmployeeDto>>), JsonApiError> {
    let Json(input) = payload?;
    let started = Instant::now();
    let res = state.employees.create(input).await;
    metrics::observe(RESOURCE, "create", started, &res);
    let created = res?;
    Ok((StatusCode::CREATED, Json(Envelope::ok("Employee created successfully", created))))
}

#[utoipa::path(
    put, path = "/api/employees/{id}", tag = "employees",
    params(("id" = i64, Path, description = "Employee ID")),
    request_body = crate::openapi::EmployeeInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::EnvelopeDoc),
        (status = 400, description = "Email already exists or invalid input", body = crate::openapi::EnvelopeDoc),
        (status = 404, description = "Not Found", body = crate::openapi::EnvelopeDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<EmployeeInput>, JsonRejection>,
) -> Result<Json<Envelope<EmployeeDto>>, JsonApiError> {
    let Path(id) = id?;
    let Json(input) = payload?;
    let started = Instant::now();
    let res = state.employees.update(id, input).await;
    metrics::observe(RESOURCE, "update", started, &res);
    Ok(Json(Envelope::ok("Employee updated successfully", res?)))
}

#[utoipa::path(
    delete, path = "/api/employees/{id}", tag = "employees",
    params(("id" = i64, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::EnvelopeDoc),
        (status = 404, description = "Not Found", body = crate::openapi::EnvelopeDoc)
    )
)]
pub async fn delete(State(state): State<ServerState>, id: Result<Path<i64>, PathRejection>) -> Result<Json<Envelope<()>>, JsonApiError> {
    let Path(id) = id?;
    let started = Instant::now();
    let res = state.employees.delete(id).await;
    metrics::observe(RESOURCE, "delete", started, &res);
    res?;
    info!(id, "deleted employee");
    Ok(Json(Envelope::message("Employee deleted successfully")))
}
