use axum::{
    extract::{rejection::QueryRejection, Multipart, Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use std::time::Instant;
use tracing::{debug, info};

use super::error::AppError;
use super::models::*;
use super::state::AppState;
use crate::batch;
use crate::input::CalculationInput;

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        ellipsoid: state.calculator.engine().ellipsoid().to_string(),
    })
}

pub async fn calculate(
    State(state): State<AppState>,
    query: Result<Query<CalculationInput>, QueryRejection>,
) -> Result<Json<CalculateResponse>, AppError> {
    let start = Instant::now();
    let Query(input) = query?;

    let request = input.parse().ok_or_else(|| {
        debug!(?input, "rejected calculation input");
        AppError::InvalidInput
    })?;

    let result = state.calculator.try_calculate_request(&request)?;
    let distance_from_b_km = state.calculator.engine().distance_km(request.point_b, result.target);

    let execution_time_ms = start.elapsed().as_secs_f64() * 1000.0;

    Ok(Json(CalculateResponse::new(result, distance_from_b_km, execution_time_ms)))
}

pub async fn upload_batch(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, AppError> {
    let mut csv_data: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {}", e)))?
    {
        if field.name() == Some("csv") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(format!("Failed to read CSV field: {}", e)))?;
            csv_data = Some(bytes.to_vec());
        }
    }

    let csv_data = csv_data.ok_or_else(|| AppError::BadRequest("Missing CSV file".to_string()))?;

    let calculator = state.calculator;
    let max_rows = state.max_batch_rows;

    let (stats, report) = tokio::task::spawn_blocking(move || {
        let mut report = Vec::with_capacity(csv_data.len() * 2);
        batch::process_csv(&calculator, csv_data.as_slice(), &mut report, max_rows)
            .map(|stats| (stats, report))
    })
    .await
    .map_err(|e| AppError::Internal(format!("Batch task failed: {}", e)))??;

    info!(total = stats.total, failed = stats.failed, "batch upload processed");

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"azimuth_results.csv\"",
            ),
        ],
        report,
    )
        .into_response())
}
