//! Page Routes
//!
//! Every path that is not a callback, health probe or asset renders a
//! page. Unknown paths get the default page.

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::Html,
};
use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::state::{AppState, CALLBACK_PREFIX};
use crate::interaction::MenuState;
use crate::pages::{self, Node, Resolved};
use crate::shell::{self, DocumentParts};

/// Any method, any unmatched path
pub async fn render_page(
    State(state): State<Arc<AppState>>,
    uri: Uri,
) -> ApiResult<(StatusCode, Html<String>)> {
    let resolved = state.routes.resolve(uri.path());
    if !resolved.matched {
        tracing::debug!(path = %uri.path(), "Unknown path, serving default page");
    }

    let (status, content) = match pages::compose(resolved.page, &state.page_context()) {
        Ok(content) => (StatusCode::OK, content),
        Err(e) => {
            tracing::error!(page = %resolved.page, error = %e, "Page composition failed");
            let detail = e.to_string();
            let detail = state.config.debug.then_some(detail.as_str());
            (StatusCode::INTERNAL_SERVER_ERROR, shell::composition_error(detail))
        }
    };

    let html = render_document(&state, &resolved, &content)?;
    Ok((status, Html(html)))
}

fn render_document(
    state: &AppState,
    resolved: &Resolved,
    content: &Node,
) -> ApiResult<String> {
    let session_id = state.sessions.issue().to_string();
    let header = shell::header(&state.routes, resolved, MenuState::Closed);
    let footer = shell::footer(&state.assets);
    let stylesheet = state.assets.asset_url("style.css");

    let html = state.documents.render(&DocumentParts {
        header: &header,
        content,
        footer: &footer,
        session_id: &session_id,
        stylesheet: &stylesheet,
        callbacks: CALLBACK_PREFIX,
    })?;

    tracing::debug!(page = %resolved.page, session_id = %session_id, "Page rendered");
    Ok(html)
}
