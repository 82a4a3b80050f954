//! HTTP binding of the matrix queries.
//!
//! Every response uses the envelope `{"success": true, "data": ...}` or
//! `{"success": false, "message": ..., "error": ...}`. Callers arrive
//! already authorised; no role checks happen here.

use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::application::matrix_filter::{parse_score, MatrixFilter, MatrixQuery};
use crate::application::summary::MatrixSummary;
use crate::domain::entities::matrix_item::MatrixItem;
use crate::domain::error::DomainError;
use crate::CrossSell;

#[derive(Debug, Serialize)]
pub struct ApiSuccess<T> {
    pub success: bool,
    pub data: T,
}

#[derive(Debug, Serialize)]
pub struct ApiFailure {
    pub success: bool,
    pub message: String,
    pub error: String,
}

pub struct ApiError(DomainError);

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        ApiError(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            DomainError::InvalidFilter { .. } | DomainError::InvalidInput(_) => {
                (StatusCode::BAD_REQUEST, "Invalid cross-sell matrix query")
            }
            DomainError::Timeout(_) => (
                StatusCode::GATEWAY_TIMEOUT,
                "Cross-sell matrix query timed out",
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to generate cross-sell matrix",
            ),
        };

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self.0, "matrix request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self.0, "matrix request rejected");
        }

        let body = ApiFailure {
            success: false,
            message: message.to_string(),
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

type ApiResult<T> = Result<Json<ApiSuccess<T>>, ApiError>;

fn ok<T>(data: T) -> ApiResult<T> {
    Ok(Json(ApiSuccess {
        success: true,
        data,
    }))
}

/// Unwrap a query string, turning axum's plain-text rejection into an
/// enveloped 400.
fn query_params<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, ApiError> {
    query
        .map(|Query(params)| params)
        .map_err(|rejection| ApiError(DomainError::InvalidInput(rejection.body_text())))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighOpportunityQuery {
    pub min_score: Option<String>,
}

pub fn router(app: Arc<CrossSell>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/cross-sell-matrix", get(matrix))
        .route("/cross-sell-matrix/high-opportunity", get(high_opportunity))
        .route("/cross-sell-matrix/summary", get(summary))
        .route("/cross-sell-matrix/client/{client_id}", get(by_client))
        .route(
            "/cross-sell-matrix/business-unit/source/{id}",
            get(by_source_business_unit),
        )
        .route(
            "/cross-sell-matrix/business-unit/target/{id}",
            get(by_target_business_unit),
        )
        .route("/cross-sell-matrix/industry/{industry}", get(by_industry))
        .route("/cross-sell-matrix/region/{region}", get(by_region))
        .with_state(app)
}

async fn health() -> Json<ApiSuccess<&'static str>> {
    Json(ApiSuccess {
        success: true,
        data: "ok",
    })
}

async fn matrix(
    State(app): State<Arc<CrossSell>>,
    query: Result<Query<MatrixQuery>, QueryRejection>,
) -> ApiResult<Vec<MatrixItem>> {
    let filter = MatrixFilter::try_from(query_params(query)?)?;
    ok(app.matrix(filter).await?)
}

async fn high_opportunity(
    State(app): State<Arc<CrossSell>>,
    query: Result<Query<HighOpportunityQuery>, QueryRejection>,
) -> ApiResult<Vec<MatrixItem>> {
    let min_score = query_params(query)?
        .min_score
        .filter(|raw| !raw.trim().is_empty())
        .map(|raw| parse_score("minScore", &raw))
        .transpose()?;
    ok(app.high_opportunity_matrix(min_score).await?)
}

async fn summary(
    State(app): State<Arc<CrossSell>>,
    query: Result<Query<MatrixQuery>, QueryRejection>,
) -> ApiResult<MatrixSummary> {
    let filter = MatrixFilter::try_from(query_params(query)?)?;
    ok(app.summary(filter).await?)
}

async fn by_client(
    State(app): State<Arc<CrossSell>>,
    Path(client_id): Path<String>,
) -> ApiResult<Vec<MatrixItem>> {
    ok(app.matrix_for_client(&client_id).await?)
}

async fn by_source_business_unit(
    State(app): State<Arc<CrossSell>>,
    Path(id): Path<String>,
) -> ApiResult<Vec<MatrixItem>> {
    ok(app.matrix_for_source_business_unit(&id).await?)
}

async fn by_target_business_unit(
    State(app): State<Arc<CrossSell>>,
    Path(id): Path<String>,
) -> ApiResult<Vec<MatrixItem>> {
    ok(app.matrix_for_target_business_unit(&id).await?)
}

async fn by_industry(
    State(app): State<Arc<CrossSell>>,
    Path(industry): Path<String>,
) -> ApiResult<Vec<MatrixItem>> {
    ok(app.matrix_for_industry(&industry).await?)
}

async fn by_region(
    State(app): State<Arc<CrossSell>>,
    Path(region): Path<String>,
) -> ApiResult<Vec<MatrixItem>> {
    ok(app.matrix_for_region(&region).await?)
}
