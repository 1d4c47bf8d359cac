//! # Informe
//!
//! Informe Económico de Chile - a multi-page dashboard of Chilean economic,
//! social and sectoral indicators, served over HTTP with Axum.
//!
//! ## Features
//!
//! - **Static datasets**: validated in-memory tables for 2010-2023
//! - **Plotly charts**: line, dual-axis, bar, radar and correlation heatmap
//! - **Routing**: fixed path table with a default page for unknown paths
//! - **Interaction**: menu toggle and indicator dropdowns with per-session state
//!
//! ## Modules
//!
//! - [`data`]: Indicator tables and the catalog
//! - [`chart`]: Chart renderer producing Plotly figures
//! - [`pages`]: Router, markup tree and page layouts
//! - [`interaction`]: Menu and dropdown state machines, session store
//! - [`shell`]: Header, footer and HTML document
//! - [`api`]: HTTP server with Axum
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use informe::{serve, ApiConfig, AppState, Catalog};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalog = Catalog::builtin()?;
//!     let state = AppState::new(catalog, ApiConfig::default())?;
//!
//!     serve(state).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod chart;
pub mod config;
pub mod data;
pub mod interaction;
pub mod pages;
pub mod shell;

// Re-export top-level types for convenience
pub use data::{Catalog, DataError, DataResult, Indicator, IndicatorTable, RegionalTable, TableId};

pub use chart::{ChartOutcome, EmptyChart, Figure, IndicatorRenderer, PlotlyRenderer};

pub use pages::{compose, dropdown_panel, Page, PageContext, PageError, Resolved, RouteTable};

pub use interaction::{
    Click, DropdownOutput, DropdownPanel, IndicatorDropdown, MenuState, MenuToggle, SessionStore,
};

pub use shell::{AssetResolver, DocumentRenderer, ShellError};

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use config::{Config, ConfigError, ConfigSource, LoggingConfig, ServerConfig};
