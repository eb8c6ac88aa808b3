use std::time::Instant;

use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    http::StatusCode,
    Json,
};
use common::types::Envelope;
use service::customer::domain::{CustomerDto, CustomerInput};
use tracing::info;

use crate::{errors::JsonApiError, metrics, state::ServerState};

const RESOURCE: &str = "customers";

#[utoipa::path(
    get, path = "/api/customers", tag = "customers",
    responses(
        (status = 200, description = "All customers with count", body = crate::openapi::EnvelopeDoc)
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Envelope<Vec<CustomerDto>>>, JsonApiError> {
    let started = Instant::now();
    let res = state.customers.list_all().await;
    metrics::observe(RESOURCE, "list", started, &res);
    let list = res?;
    info!(count = list.len(), "list customers");
    let count = list.len();
    Ok(Json(Envelope::ok("Customers retrieved successfully", list).with_count(count)))
}

#[utoipa::path(
    get, path = "/api/customers/{id}", tag = "customers",
    params(("id" = i64, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::EnvelopeDoc),
        (status = 404, description = "Not Found", body = crate::openapi::EnvelopeDoc)
    )
)]
pub async fn get(State(state): State<ServerState>, id: Result<Path<i64>, PathRejection>) -> Result<Json<Envelope<CustomerDto>>, JsonApiError> {
    let Path(id) = id?;
    let started = Instant::now();
    let res = state.customers.get_by_id(id).await;
    metrics::observe(RESOURCE, "get", started, &res);
    Ok(Json(Envelope::ok("Customer retrieved successfully", res?)))
}

#[utoipa::path(
    post, path = "/api/customers", tag = "customers",
    request_body = crate::openapi::CustomerInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::EnvelopeDoc),
        (status = 400, description = "Email already exists or invalid input", body = crate::openapi::EnvelopeDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<CustomerInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Envelope<CustomerDto>>), JsonApiError> {
    let Json(input) = payload?;
    let started = Instant::now();
    let res = state.customers.create(input).await;
    metrics::observe(RESOURCE, "create", started, &res);
    let created = res?;
    Ok((StatusCode::CREATED, Json(Envelope::ok("Customer created successfully", created))))
}

#[utoipa::path(
    put, path = "/api/customers/{id}", tag = "customers",
    params(("id" = i64, Path, description = "Customer ID")),
    request_body = crate::openapi::CustomerInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::EnvelopeDoc),
        (status = 400, description = "Email already exists or invalid input", body = crate::openapi::EnvelopeDoc),
        (status = 404, description = "Not Found", body = crate::openapi::EnvelopeDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<CustomerInput>, JsonRejection>,
) -> Result<Json<Envelope<CustomerDto>>, JsonApiError> {
    let Path(id) = id?;
    let Json(input) = payload?;
    let started = Instant::now();
    let res = state.customers.update(id, input).await;
    metrics::observe(RESOURCE, "update", started, &res);
    Ok(Json(Envelope::ok("Customer updated successfully", res?)))
}

#[utoipa::path(
    delete, path = "/api/customers/{id}", tag = "customers",
    params(("id" = i64, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::EnvelopeDoc),
        (status = 404, description = "Not Found", body = crate::openapi::EnvelopeDoc)
    )
)]
pub async fn delete(State(state): State<ServerState>, id: Result<Path<i64>, PathRejection>) -> Result<Json<Envelope<()>>, JsonApiError> {
    let Path(id) = id?;
    let started = Instant::now();
    let res = state.customers.delete(id).await;
    metrics::observe(RESOURCE, "delete", started, &res);
    res?;
    info!(id, "deleted customer");
    Ok(Json(Envelope::message("Customer deleted successfully")))
}
