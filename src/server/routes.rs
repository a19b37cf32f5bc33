//! HTTP API routes
//!
//! Defines all REST API endpoints for the server.

use crate::circle::{generate, CircleSpec, PointSet};
use crate::config::Config;
use crate::constants::report::{CONTENT_TYPE, FILE_NAME};
use crate::error::Error;
use crate::render::{render_svg, RenderStyle};
use crate::report::{export_report, ReportMetadata, ReportOptions};
use crate::server::state::AppState;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tracing::debug;

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/points", post(points_handler))
        .route("/api/plot", post(plot_handler))
        .route("/api/report", post(report_handler))
        .route("/api/status", get(status_handler))
        .fallback_service(ServeDir::new(static_dir()).append_index_html_on_directories(true))
        .with_state(state)
}

/// Locate the static files directory
///
/// Tries relative to cwd first, then next to the executable
fn static_dir() -> PathBuf {
    let local = PathBuf::from("static");
    if local.exists() {
        return local;
    }
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("static")))
        .filter(|path| path.exists())
        .unwrap_or(local)
}

/// Circle parameters from the form
///
/// Missing fields fall back to the configured defaults.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CircleRequest {
    pub center_x: Option<f64>,
    pub center_y: Option<f64>,
    /// Radius in meters
    pub radius: Option<f64>,
    /// Signed so that negative counts are reported as invalid counts
    pub point_count: Option<i64>,
    pub point_color: Option<String>,
    pub center_color: Option<String>,
    pub show_index: Option<bool>,
}

impl CircleRequest {
    /// Validate and generate the point set
    pub fn points(&self, config: &Config) -> Result<PointSet, Error> {
        let count = self.point_count.unwrap_or(config.defaults.points as i64);
        let count = usize::try_from(count)
            .map_err(|_| Error::InvalidPointCount(format!("{} is not a positive count", count)))?;

        let spec = CircleSpec::new(
            self.center_x.unwrap_or(config.defaults.center_x),
            self.center_y.unwrap_or(config.defaults.center_y),
            self.radius.unwrap_or(config.defaults.radius),
            count,
        )?;
        Ok(generate(&spec))
    }

    /// Plot style, overriding the configured one
    pub fn style(&self, config: &Config) -> Result<RenderStyle, Error> {
        let mut style = config.render_style()?;
        if let Some(color) = &self.point_color {
            style.point_color = color.parse()?;
        }
        if let Some(color) = &self.center_color {
            style.center_color = color.parse()?;
        }
        if let Some(show_index) = self.show_index {
            style.show_index = show_index;
        }
        Ok(style)
    }
}

/// Report request body
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ReportRequest {
    #[serde(flatten)]
    pub circle: CircleRequest,
    pub author_name: Option<String>,
    pub author_contact: Option<String>,
    /// Additional `label: value` lines
    #[serde(default)]
    pub extra_fields: BTreeMap<String, String>,
}

/// API error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = if self.code.starts_with("INVALID_") {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        (status, Json(self)).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let code = match &err {
            Error::InvalidCoordinates(_) => "INVALID_COORDINATES",
            Error::InvalidRadius(_) => "INVALID_RADIUS",
            Error::InvalidPointCount(_) => "INVALID_POINT_COUNT",
            Error::InvalidColor(_) => "INVALID_COLOR",
            Error::Render(_) => "RENDER_ERROR",
            Error::Config(_) => "CONFIG_ERROR",
            _ => "INTERNAL_ERROR",
        };
        ApiError {
            error: err.to_string(),
            code: code.to_string(),
        }
    }
}

/// Point coordinates endpoint
///
/// POST /api/points
async fn points_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CircleRequest>,
) -> Result<Json<PointSet>, ApiError> {
    let config = state.config().await;
    let points = req.points(&config)?;
    Ok(Json(points))
}

/// SVG preview endpoint
///
/// POST /api/plot
async fn plot_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CircleRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let config = state.config().await;
    let points = req.points(&config)?;
    let style = req.style(&config)?;

    let svg = render_svg(&points, &style)?;
    debug!("Rendered preview for {} points", points.len());

    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], svg))
}

/// Report download endpoint
///
/// POST /api/report
async fn report_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ReportRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let config = state.config().await;
    let points = req.circle.points(&config)?;
    let style = req.circle.style(&config)?;

    let metadata = ReportMetadata {
        author_name: req.author_name.unwrap_or_else(|| config.author.name.clone()),
        author_contact: req
            .author_contact
            .unwrap_or_else(|| config.author.contact.clone()),
        point_color: style.point_color,
        center_color: style.center_color,
    };
    let options = ReportOptions {
        show_index: style.show_index,
        extra_fields: req.extra_fields,
    };
    let settings = config.report_settings();

    // rasterizing the plot is CPU-bound
    let bytes = tokio::task::spawn_blocking(move || {
        export_report(&points, &metadata, &options, &settings)
    })
    .await
    .map_err(|e| Error::Report(format!("report task failed: {}", e)))?;

    Ok((
        [
            (header::CONTENT_TYPE, CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", FILE_NAME),
            ),
        ],
        bytes,
    ))
}

/// Status response
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Server is running
    pub running: bool,
    /// Server version
    pub version: String,
}

/// Server status endpoint
///
/// GET /api/status
async fn status_handler() -> Json<StatusResponse> {
    Json(StatusResponse {
        running: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
