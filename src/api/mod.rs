//! Dashboard HTTP API
//!
//! HTTP layer of the dashboard, built with Axum.
//!
//! # Endpoints
//!
//! ## Pages
//! - `GET /` - Executive summary
//! - `GET <base>/{resumen,macroeconomia,sectorial,comercio,sociedad,politicas}`
//! - Any other path renders the executive summary
//!
//! ## Callbacks
//! - `POST /_dash/menu-toggle` - Menu button clicked
//! - `POST /_dash/indicator` - Indicator dropdown changed
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! ## Assets
//! - `GET /assets/*` - Static files from `server.assets_dir`
//!
//! # Example
//!
//! ```rust,ignore
//! use informe::api::{serve, ApiConfig, AppState};
//! use informe::data::Catalog;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let state = AppState::new(Catalog::builtin()?, ApiConfig::default())?;
//!     serve(state).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState, CALLBACK_PREFIX};

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let callback_routes = Router::new()
        .route("/menu-toggle", post(routes::callbacks::menu_toggle))
        .route("/indicator", post(routes::callbacks::indicator));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let assets = ServeDir::new(&state.config.assets_dir);
    let assets_mount = state.assets.mount_path().to_string();

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .nest(CALLBACK_PREFIX, callback_routes)
        .nest("/health", health_routes)
        .nest_service(&assets_mount, assets)
        .fallback(routes::pages::render_page)
        .layer(TraceLayer::new_for_http())
        .with_state(shared_state)
}

/// Start the HTTP server
pub async fn serve(state: AppState) -> Result<(), ApiError> {
    let addr = state.config.addr();
    let base_path = state.routes.base_path().to_string();
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(base_path = %base_path, "Informe listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Informe shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{tables, Catalog, TableId};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use tempfile::tempdir;
    use tower::util::ServiceExt;

    const SOCIEDAD: &str = "/informe-economico-chile/sociedad";

    fn create_test_app() -> (Router, tempfile::TempDir) {
        create_test_app_with(ApiConfig::default())
    }

    fn create_test_app_with(config: ApiConfig) -> (Router, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("style.css"), "body { margin: 0; }").unwrap();

        let config = ApiConfig {
            assets_dir: dir.path().to_path_buf(),
            ..config
        };
        let state = AppState::new(Catalog::builtin().unwrap(), config).unwrap();

        (build_router(state), dir)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        serde_json::from_str(&body_string(response).await).unwrap()
    }

    fn indicator_body(session: &str, page: &str, value: Option<&str>) -> String {
        serde_json::json!({ "session_id": session, "page": page, "value": value }).to_string()
    }

    #[tokio::test]
    async fn test_health_live() {
        let (app, _dir) = create_test_app();

        let response = app.oneshot(get("/health/live")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready() {
        let (app, _dir) = create_test_app();

        let response = app.oneshot(get("/health/ready")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let (app, _dir) = create_test_app();

        let response = app.oneshot(get("/health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_root_serves_summary() {
        let (app, _dir) = create_test_app();

        let response = app.oneshot(get("/")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("<title>Informe Económico de Chile</title>"));
        assert!(html.contains(r#"<h2 id="subtitle" class="subtitle">Por Miguel Ortiz C.</h2>"#));
        assert!(html.contains("Libertad Económica y Crecimiento del PIB"));
    }

    #[tokio::test]
    async fn test_sociedad_page() {
        let (app, _dir) = create_test_app();

        let response = app.oneshot(get(SOCIEDAD)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains(
            r#"<h2 id="subtitle" class="subtitle">Indicadores Sociales: El Rostro Humano de la Economía</h2>"#
        ));
        assert!(html.contains(
            r#"<option value="Índice de Gini" selected="selected">Índice de Gini</option>"#
        ));
        assert!(html.contains(r#"class="nav-link active">Sociedad</a>"#));
        assert!(html.contains(r#"<nav class="nav-menu" id="nav-menu">"#));
    }

    #[tokio::test]
    async fn test_unknown_path_serves_default_page() {
        let (app, _dir) = create_test_app();

        let response = app.oneshot(get("/nonexistent-path")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains(r#"<h2 id="subtitle" class="subtitle">Por Miguel Ortiz C.</h2>"#));
        assert!(html.contains("Libertad Económica y Crecimiento del PIB"));
    }

    #[tokio::test]
    async fn test_trailing_slash_is_not_normalised() {
        let (app, _dir) = create_test_app();

        let response = app
            .oneshot(get("/informe-economico-chile/sociedad/"))
            .await
            .unwrap();

        let html = body_string(response).await;
        assert!(html.contains("Por Miguel Ortiz C."));
        assert!(!html.contains("sociedad-indicator-dropdown"));
    }

    #[tokio::test]
    async fn test_any_method_on_unknown_path() {
        let (app, _dir) = create_test_app();

        let response = app
            .oneshot(post_json("/nonexistent-path", "{}".to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_assets_served() {
        let (app, _dir) = create_test_app();

        let response = app.oneshot(get("/assets/style.css")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "body { margin: 0; }");
    }

    #[tokio::test]
    async fn test_menu_toggle_parity() {
        let (app, _dir) = create_test_app();
        let session = uuid::Uuid::new_v4().to_string();

        let mut states = Vec::new();
        for clicks in [1, 2, 3] {
            let body = serde_json::json!({ "session_id": session, "n_clicks": clicks }).to_string();
            let response = app
                .clone()
                .oneshot(post_json("/_dash/menu-toggle", body))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            states.push(body_json(response).await);
        }

        assert_eq!(states[0]["open"], true);
        assert_eq!(states[0]["class_name"], "nav-menu active");
        assert_eq!(states[1]["open"], false);
        assert_eq!(states[1]["class_name"], "nav-menu");
        assert_eq!(states[2]["open"], true);
    }

    async fn post_menu(app: &Router, session: &str, clicks: u64) -> serde_json::Value {
        let body = serde_json::json!({ "session_id": session, "n_clicks": clicks }).to_string();
        let response = app
            .clone()
            .oneshot(post_json("/_dash/menu-toggle", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        body_json(response).await
    }

    #[tokio::test]
    async fn test_menu_repeated_post_is_idempotent() {
        let (app, _dir) = create_test_app();
        let session = uuid::Uuid::new_v4().to_string();

        assert_eq!(post_menu(&app, &session, 1).await["open"], true);
        assert_eq!(post_menu(&app, &session, 1).await["open"], true);
        assert_eq!(post_menu(&app, &session, 2).await["open"], false);
    }

    #[tokio::test]
    async fn test_menu_parity_survives_eviction() {
        let (app, _dir) = create_test_app_with(ApiConfig {
            max_sessions: 1,
            ..Default::default()
        });
        let reader = uuid::Uuid::new_v4().to_string();
        let other = uuid::Uuid::new_v4().to_string();

        assert_eq!(post_menu(&app, &reader, 1).await["open"], true);
        assert_eq!(post_menu(&app, &other, 1).await["open"], true);

        let state = post_menu(&app, &reader, 2).await;
        assert_eq!(state["open"], false);
        assert_eq!(state["class_name"], "nav-menu");
    }

    #[tokio::test]
    async fn test_menu_null_event() {
        let (app, _dir) = create_test_app();
        let session = uuid::Uuid::new_v4().to_string();

        let body = serde_json::json!({ "session_id": session, "n_clicks": null }).to_string();
        let response = app
            .oneshot(post_json("/_dash/menu-toggle", body))
            .await
            .unwrap();

        let state = body_json(response).await;
        assert_eq!(state["open"], false);
        assert_eq!(state["class_name"], "nav-menu");
    }

    #[tokio::test]
    async fn test_malformed_session_id() {
        let (app, _dir) = create_test_app();

        let body = serde_json::json!({ "session_id": "abc", "n_clicks": 1 }).to_string();
        let response = app
            .oneshot(post_json("/_dash/menu-toggle", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["request_id"].is_string());
    }

    #[tokio::test]
    async fn test_invalid_json() {
        let (app, _dir) = create_test_app();

        let response = app
            .oneshot(post_json("/_dash/indicator", "not json".to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_indicator_gini() {
        let (app, _dir) = create_test_app();
        let session = uuid::Uuid::new_v4().to_string();

        let response = app
            .oneshot(post_json(
                "/_dash/indicator",
                indicator_body(&session, "sociedad", Some("Índice de Gini")),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["page"], "sociedad");
        assert_eq!(body["selected"], "Índice de Gini");
        assert_eq!(body["chart"]["status"], "ready");
        assert_eq!(body["chart"]["figure"]["data"][0]["name"], "Índice de Gini");
        let analysis = body["analysis"].as_str().unwrap();
        assert!(analysis.starts_with("Análisis crítico para Índice de Gini:\n\n"));
        assert!(analysis.contains("pasando de 0.51 en 2010 a 0.445 en 2023"));
    }

    #[tokio::test]
    async fn test_indicator_unknown_name_degrades() {
        let (app, _dir) = create_test_app();
        let session = uuid::Uuid::new_v4().to_string();

        let response = app
            .oneshot(post_json(
                "/_dash/indicator",
                indicator_body(&session, "sociedad", Some("Felicidad")),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["selected"], "Índice de Gini");
        assert_eq!(body["requested"], "Felicidad");
        assert_eq!(body["chart"]["status"], "empty");
        assert_eq!(body["chart"]["figure"], serde_json::json!({ "data": [], "layout": {} }));
        assert!(body["analysis"]
            .as_str()
            .unwrap()
            .contains("No se encuentra un análisis específico para el indicador: Felicidad"));
    }

    #[tokio::test]
    async fn test_indicator_empty_value_is_suppressed() {
        let (app, _dir) = create_test_app();
        let session = uuid::Uuid::new_v4().to_string();

        for value in [Some(""), None] {
            let response = app
                .clone()
                .oneshot(post_json(
                    "/_dash/indicator",
                    indicator_body(&session, "sociedad", value),
                ))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::NO_CONTENT);
        }
    }

    #[tokio::test]
    async fn test_indicator_repeated_event_is_identical() {
        let (app, _dir) = create_test_app();
        let session = uuid::Uuid::new_v4().to_string();

        let mut bodies = Vec::new();
        for _ in 0..2 {
            let response = app
                .clone()
                .oneshot(post_json(
                    "/_dash/indicator",
                    indicator_body(&session, "macroeconomia", Some("Inflación (%)")),
                ))
                .await
                .unwrap();
            bodies.push(body_string(response).await);
        }

        assert_eq!(bodies[0], bodies[1]);
    }

    #[tokio::test]
    async fn test_indicator_page_without_dropdown() {
        let (app, _dir) = create_test_app();
        let session = uuid::Uuid::new_v4().to_string();

        for page in ["comercio", "nowhere"] {
            let response = app
                .clone()
                .oneshot(post_json(
                    "/_dash/indicator",
                    indicator_body(&session, page, Some("Índice de Gini")),
                ))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::NOT_FOUND);
        }
    }

    #[tokio::test]
    async fn test_composition_failure_keeps_shell() {
        let dir = tempdir().unwrap();
        let mut catalog = Catalog::new(tables::regional().unwrap());
        catalog.insert(TableId::Resumen, tables::summary().unwrap());
        let config = ApiConfig {
            assets_dir: dir.path().to_path_buf(),
            debug: true,
            ..Default::default()
        };
        let app = build_router(AppState::new(catalog, config).unwrap());

        let response = app.clone().oneshot(get(SOCIEDAD)).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let html = body_string(response).await;
        assert!(html.contains("No fue posible construir esta página."));
        assert!(html.contains("Dataset &#39;social&#39; is not in the catalog"));
        assert!(html.contains("Indicadores Sociales: El Rostro Humano de la Economía"));

        let response = app.oneshot(get("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
