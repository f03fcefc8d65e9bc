//! CSV export handler

use crate::{ApiError, ApiResult, SaveCsvRequest, points_to_csv};

use geo_ws::AppState;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use http::{StatusCode, header};
use log::info;

/// POST /save-csv
///
/// Turn the submitted markers into a downloadable CSV file. Nothing is stored.
pub async fn save_csv(
    State(state): State<AppState>,
    payload: Result<Json<SaveCsvRequest>, JsonRejection>,
) -> ApiResult<Response> {
    let Json(req) = payload?;

    let points = match req.points {
        Some(points) if !points.is_empty() => points,
        _ => {
            return Err(ApiError::validation(
                "points must be a non-empty array",
                "points",
            ));
        }
    };

    let max_points = state.export_config.max_points;
    if points.len() > max_points {
        return Err(ApiError::validation(
            format!(
                "at most {} points can be exported, got {}",
                max_points,
                points.len()
            ),
            "points",
        ));
    }

    let csv = points_to_csv(&points)?;
    info!("Exported {} points as CSV", points.len());

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!(
                    "attachment; filename=\"{}\"",
                    state.export_config.filename
                ),
            ),
        ],
        csv,
    )
        .into_response())
}
