//! Data Transfer Objects
//!
//! Request and response bodies of the callback and health endpoints.

use serde::{Deserialize, Serialize};

use crate::chart::{ChartOutcome, Figure};
use crate::interaction::{DropdownOutput, MenuState};
use crate::pages::Page;

// ============================================
// Menu toggle
// ============================================

/// Body of `POST /_dash/menu-toggle`
#[derive(Debug, Deserialize)]
pub struct MenuToggleRequest {
    pub session_id: String,
    /// Click count reported by the page; null or 0 is a null event
    #[serde(default)]
    pub n_clicks: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct MenuToggleResponse {
    pub open: bool,
    pub class_name: String,
}

impl From<MenuState> for MenuToggleResponse {
    fn from(state: MenuState) -> Self {
        Self {
            open: state.is_open(),
            class_name: state.class_name().to_string(),
        }
    }
}

// ============================================
// Indicator dropdown
// ============================================

/// Body of `POST /_dash/indicator`
#[derive(Debug, Deserialize)]
pub struct IndicatorRequest {
    pub session_id: String,
    /// Page slug
    pub page: String,
    #[serde(default)]
    pub value: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChartBody {
    /// `ready` or `empty`
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub figure: Figure,
}

impl From<&ChartOutcome> for ChartBody {
    fn from(outcome: &ChartOutcome) -> Self {
        Self {
            status: if outcome.is_ready() { "ready" } else { "empty" },
            reason: outcome.reason().map(|r| r.to_string()),
            figure: outcome.figure(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct IndicatorResponse {
    pub page: Page,
    /// Dropdown selection after the event
    pub selected: String,
    /// Indicator named by the event
    pub requested: String,
    pub chart: ChartBody,
    pub analysis: String,
}

impl IndicatorResponse {
    pub fn new(page: Page, selected: &str, output: &DropdownOutput) -> Self {
        Self {
            page,
            selected: selected.to_string(),
            requested: output.requested.clone(),
            chart: ChartBody::from(&output.chart),
            analysis: output.analysis.clone(),
        }
    }
}

// ============================================
// Health
// ============================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub catalog: String,
    pub sessions: usize,
    pub uptime_seconds: u64,
    pub version: String,
}
