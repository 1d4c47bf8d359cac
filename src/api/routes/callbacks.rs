//! Callback Routes
//!
//! UI events posted by the page script.
//!
//! - POST /_dash/menu-toggle - Menu button clicked
//! - POST /_dash/indicator - Indicator dropdown changed

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::api::dto::{IndicatorRequest, IndicatorResponse, MenuToggleRequest, MenuToggleResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::interaction::{Click, SessionId};
use crate::pages::{dropdown_panel, Page};

/// POST /_dash/menu-toggle
pub async fn menu_toggle(
    State(state): State<Arc<AppState>>,
    Json(req): Json<MenuToggleRequest>,
) -> ApiResult<Json<MenuToggleResponse>> {
    let session_id = parse_session_id(&req.session_id)?;
    let event = Click::from_count(req.n_clicks);

    let menu = state
        .sessions
        .with_session(session_id, |session| session.on_menu_event(event))
        .await;

    tracing::debug!(session_id = %session_id, open = menu.is_open(), "Menu toggled");
    Ok(Json(menu.into()))
}

/// POST /_dash/indicator
///
/// 204 when the event carries no selection.
pub async fn indicator(
    State(state): State<Arc<AppState>>,
    Json(req): Json<IndicatorRequest>,
) -> ApiResult<Response> {
    let session_id = parse_session_id(&req.session_id)?;

    let page = Page::from_slug(&req.page)
        .ok_or_else(|| ApiError::NotFound(format!("Page '{}'", req.page)))?;
    let panel = dropdown_panel(page).ok_or_else(|| {
        ApiError::NotFound(format!("Page '{}' has no indicator dropdown", page))
    })?;
    let table = state.catalog.table(panel.table).ok_or_else(|| {
        ApiError::Internal(format!("Dataset '{}' is not in the catalog", panel.table))
    })?;
    let renderer = state.renderer.as_ref();

    let output = state
        .sessions
        .with_session(session_id, |session| {
            let dropdown = session.dropdown(panel, table, renderer);
            let output = dropdown
                .on_select(req.value.as_deref(), table, renderer)
                .cloned();
            output.map(|output| IndicatorResponse::new(page, dropdown.selected(), &output))
        })
        .await;

    match output {
        Some(response) => {
            tracing::debug!(
                session_id = %session_id,
                page = %page,
                indicator = %response.requested,
                selected = %response.selected,
                ready = response.chart.status == "ready",
                "Indicator selected"
            );
            Ok(Json(response).into_response())
        }
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

fn parse_session_id(raw: &str) -> ApiResult<SessionId> {
    Uuid::parse_str(raw)
        .map_err(|_| ApiError::Validation(format!("Invalid session id '{}'", raw)))
}
