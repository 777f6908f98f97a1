//! HTTP request handlers for the payroll settlement engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::batch::{bulk_settle, create_or_load};
use crate::calculation::{compute_monthly_settlement, compute_settlement, validate_config};
use crate::config::LegalConfig;
use crate::error::EngineError;
use crate::models::PayType;

use super::request::{
    BulkSettleRequest, CreateEmployeeRequest, DeleteParams, SettlementRequest,
    UpdateEmployeeRequest,
};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/employees", get(list_employees).post(create_employee))
        .route(
            "/employees/:id",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
        .route("/config", get(get_config).put(update_config))
        .route("/periods/:period_id", get(get_period))
        .route("/periods/:period_id/settlements", post(create_settlement))
        .route("/periods/:period_id/bulk", post(bulk_settle_period))
        .route("/periods/:period_id/approve", post(approve_period))
        .with_state(state)
}

/// Turns a JSON extraction rejection into a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(correlation_id = %correlation_id, error = %body_text, "JSON data error");
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "JSON syntax error");
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (StatusCode::BAD_REQUEST, Json(error)).into_response()
}

/// Handler for `GET /employees`.
async fn list_employees(State(state): State<AppState>) -> Response {
    let roster = state.roster().read().await;
    Json(roster.all().to_vec()).into_response()
}

/// Handler for `POST /employees`.
async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<CreateEmployeeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let mut roster = state.roster().write().await;
    match roster.create(request.into()) {
        Ok(employee) => {
            info!(correlation_id = %correlation_id, employee_id = %employee.id, "Employee created");
            (StatusCode::CREATED, Json(employee.clone())).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Employee creation failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for `GET /employees/{id}`.
async fn get_employee(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let roster = state.roster().read().await;
    match roster.get(&id) {
        Ok(employee) => Json(employee.clone()).into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for `PUT /employees/{id}`.
async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateEmployeeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let mut roster = state.roster().write().await;
    match roster.update(&id, request.into()) {
        Ok(employee) => Json(employee.clone()).into_response(),
        Err(err) => {
            warn!(correlation_id = %correlation_id, employee_id = %id, error = %err, "Employee update failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for `DELETE /employees/{id}`.
///
/// Soft-deletes by default; `?hard=true` physically removes the record.
async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<DeleteParams>,
) -> Response {
    let mut roster = state.roster().write().await;
    let result = if params.hard {
        roster.remove(&id).map(|_| ())
    } else {
        roster.deactivate(&id)
    };
    match result {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for `GET /config`.
async fn get_config(State(state): State<AppState>) -> Response {
    let config = state.config().read().await;
    Json(config.clone()).into_response()
}

/// Handler for `PUT /config`.
///
/// Replaces the legal configuration after validating it.
async fn update_config(
    State(state): State<AppState>,
    payload: Result<Json<LegalConfig>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let new_config = match payload {
        Ok(Json(config)) => config,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    if let Err(err) = validate_config(&new_config) {
        warn!(correlation_id = %correlation_id, error = %err, "Configuration update rejected");
        return ApiErrorResponse::from(err).into_response();
    }

    let mut config = state.config().write().await;
    *config = new_config;
    info!(
        correlation_id = %correlation_id,
        year = config.year,
        minimum_wage = %config.minimum_wage,
        "Configuration updated"
    );
    Json(config.clone()).into_response()
}

/// Handler for `GET /periods/{period_id}`.
async fn get_period(State(state): State<AppState>, Path(period_id): Path<String>) -> Response {
    let batches = state.batches().read().await;
    match batches.get(&period_id) {
        Some(batch) => Json(batch.clone()).into_response(),
        None => ApiErrorResponse::from(EngineError::BatchNotFound { period_id }).into_response(),
    }
}

/// Handler for `POST /periods/{period_id}/settlements`.
///
/// Computes a settlement for one employee and upserts it into the
/// period's batch, creating a draft batch shell on first use.
async fn create_settlement(
    State(state): State<AppState>,
    Path(period_id): Path<String>,
    payload: Result<Json<SettlementRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };
    info!(
        correlation_id = %correlation_id,
        period_id = %period_id,
        employee_id = %request.employee_id,
        "Processing settlement request"
    );

    let employee = {
        let roster = state.roster().read().await;
        match roster.get(&request.employee_id) {
            Ok(employee) => employee.clone(),
            Err(err) => {
                warn!(correlation_id = %correlation_id, error = %err, "Unknown employee");
                return ApiErrorResponse::from(err).into_response();
            }
        }
    };

    let config = state.config().read().await.clone();
    let mut batches = state.batches().write().await;
    let now = Utc::now();
    let batch = create_or_load(&mut batches, &period_id, request.pay_type, now);

    let result = match batch.pay_type {
        PayType::Weekly => compute_settlement(&employee, &request.novelties, &config),
        PayType::Monthly => compute_monthly_settlement(&employee, &request.novelties, &config),
    };

    match result.and_then(|settlement| {
        batch
            .upsert_settlement(settlement.clone(), now)
            .map(|()| settlement)
    }) {
        Ok(settlement) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %settlement.employee_id,
                total_pay = %settlement.total_pay,
                "Settlement computed"
            );
            Json(settlement).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Settlement failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for `POST /periods/{period_id}/bulk`.
///
/// Settles every active employee into the period's batch; per-employee
/// failures are reported on the batch, never aborting the run.
async fn bulk_settle_period(
    State(state): State<AppState>,
    Path(period_id): Path<String>,
    payload: Result<Json<BulkSettleRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let employees = state.roster().read().await.active();
    info!(
        correlation_id = %correlation_id,
        period_id = %period_id,
        employee_count = employees.len(),
        "Processing bulk settlement"
    );

    let config = state.config().read().await.clone();
    let mut batches = state.batches().write().await;
    let now = Utc::now();
    let batch = create_or_load(&mut batches, &period_id, request.pay_type, now);
    if request.period_start.is_some() {
        batch.period_start = request.period_start;
    }
    if request.period_end.is_some() {
        batch.period_end = request.period_end;
    }

    match bulk_settle(
        batch,
        &employees,
        &request.defaults,
        &request.overrides,
        &config,
        now,
    ) {
        Ok(errors) => {
            info!(
                correlation_id = %correlation_id,
                settled = batch.settlements.len(),
                failed = errors.len(),
                total_payroll = %batch.totals.total_payroll,
                "Bulk settlement completed"
            );
            Json(batch.clone()).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Bulk settlement rejected");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for `POST /periods/{period_id}/approve`.
async fn approve_period(
    State(state): State<AppState>,
    Path(period_id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let mut batches = state.batches().write().await;
    let Some(batch) = batches.get_mut(&period_id) else {
        return ApiErrorResponse::from(EngineError::BatchNotFound { period_id }).into_response();
    };

    match batch.approve(Utc::now()) {
        Ok(()) => {
            info!(correlation_id = %correlation_id, period_id = %batch.period_id, "Batch approved");
            Json(batch.clone()).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Approval rejected");
            ApiErrorResponse::from(err).into_response()
        }
    }
}
