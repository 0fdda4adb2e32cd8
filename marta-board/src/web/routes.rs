//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, Uri, header},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use tower_http::services::ServeDir;
use tracing::error;

use crate::board::build_view;
use crate::domain::Line;
use crate::marta::MartaError;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/about", get(about_page))
        .route("/lines", get(lines_root))
        .route("/lines/:line", get(line_board))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Home page with the line picker.
async fn index_page() -> impl IntoResponse {
    Html(
        IndexTemplate::default()
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// About page.
async fn about_page() -> impl IntoResponse {
    Html(
        AboutTemplate
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// Bare /lines requests land on the blue line.
async fn lines_root() -> Redirect {
    Redirect::to("/lines/blue")
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// The line board: arrivals grouped by station, under the active filters.
///
/// Returns a full HTML page for browsers and a JSON body otherwise. The
/// arrivals fetch and the station listing are independent: a failed
/// listing just leaves the picker empty, while a failed arrivals fetch is
/// surfaced as a retryable error.
async fn line_board(
    State(state): State<AppState>,
    Path(line): Path<String>,
    Query(query): Query<BoardQuery>,
    headers: HeaderMap,
    uri: Uri,
) -> Result<Response, AppError> {
    let line = Line::parse(&line).map_err(|_| AppError::NotFound {
        message: format!("Unknown line: {}", line),
    })?;

    let criteria = query.into_criteria().map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })?;

    let (arrivals, stations) = tokio::join!(state.marta.arrivals(line), state.directory.get(line));

    let records = match arrivals {
        Ok(records) => records,
        Err(e) => {
            error!(line = %line, error = %e, "arrivals fetch failed");

            if accepts_html(&headers) {
                let template = ErrorTemplate {
                    title: format!("{} Line unavailable", line.title()),
                    message: format!(
                        "Failed to load train data for {}. Please try again later.",
                        line
                    ),
                    retry_href: uri.to_string(),
                };
                let html = template.render().map_err(|e| AppError::Internal {
                    message: format!("Template error: {}", e),
                })?;
                return Ok((StatusCode::BAD_GATEWAY, Html(html)).into_response());
            }

            return Err(AppError::from(e));
        }
    };

    let view = build_view(records.as_ref().clone(), line, &criteria);

    if accepts_html(&headers) {
        let template = BoardTemplate::build(line, &view, &criteria, &stations);
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

        Ok(Html(html).into_response())
    } else {
        Ok(Json(BoardResponse::from_view(line, view)).into_response())
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Upstream { message: String },
    Internal { message: String },
}

impl From<MartaError> for AppError {
    fn from(e: MartaError) -> Self {
        AppError::Upstream {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Upstream { message } => (StatusCode::BAD_GATEWAY, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        error!(status = %status, "{}", message);

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
