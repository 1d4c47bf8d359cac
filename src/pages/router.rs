//! Router
//!
//! Maps a URL path to a page and its subtitle. Matching is an exact string
//! comparison against six literal paths; anything else, including the root,
//! resolves to the default page.

use serde::Serialize;

/// Default prefix every page path is mounted under
pub const DEFAULT_BASE_PATH: &str = "/informe-economico-chile";

/// One of the six dashboard sections
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Resumen,
    Macroeconomia,
    Sectorial,
    Comercio,
    Sociedad,
    Politicas,
}

impl Page {
    /// Get all pages in navigation order
    pub fn all() -> &'static [Page] {
        &[
            Page::Resumen,
            Page::Macroeconomia,
            Page::Sectorial,
            Page::Comercio,
            Page::Sociedad,
            Page::Politicas,
        ]
    }

    /// Last path segment of the page
    pub fn slug(&self) -> &'static str {
        match self {
            Page::Resumen => "resumen",
            Page::Macroeconomia => "macroeconomia",
            Page::Sectorial => "sectorial",
            Page::Comercio => "comercio",
            Page::Sociedad => "sociedad",
            Page::Politicas => "politicas",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Page> {
        Page::all().iter().copied().find(|p| p.slug() == slug)
    }

    /// Label shown in the navigation menu
    pub fn nav_label(&self) -> &'static str {
        match self {
            Page::Resumen => "Resumen",
            Page::Macroeconomia => "Macroeconomía",
            Page::Sectorial => "Sectorial",
            Page::Comercio => "Comercio",
            Page::Sociedad => "Sociedad",
            Page::Politicas => "Políticas Públicas",
        }
    }

    /// Header subtitle while the page is displayed
    pub fn subtitle(&self) -> &'static str {
        match self {
            Page::Resumen => "Por Miguel Ortiz C.",
            Page::Macroeconomia => "Macroeconomía de Chile: Más allá de las cifras",
            Page::Sectorial => "Análisis Sectorial: Desafíos y Oportunidades",
            Page::Comercio => "Comercio Internacional: Tendencias y Perspectivas",
            Page::Sociedad => "Indicadores Sociales: El Rostro Humano de la Economía",
            Page::Politicas => "Políticas Públicas: Moldeando el Futuro Económico",
        }
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}

/// A path together with the page it serves
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: String,
    pub page: Page,
    pub subtitle: &'static str,
}

/// Outcome of resolving a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub page: Page,
    pub subtitle: &'static str,
    /// Whether the path matched an entry or fell back to the default
    pub matched: bool,
}

/// Immutable path → page table
#[derive(Debug, Clone)]
pub struct RouteTable {
    base_path: String,
    entries: Vec<RouteEntry>,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_PATH)
    }
}

impl RouteTable {
    /// Build the table for pages mounted under `base_path`
    pub fn new(base_path: impl Into<String>) -> Self {
        let base_path = base_path.into().trim_end_matches('/').to_string();
        let entries = Page::all()
            .iter()
            .map(|&page| RouteEntry {
                path: format!("{}/{}", base_path, page.slug()),
                page,
                subtitle: page.subtitle(),
            })
            .collect();

        Self { base_path, entries }
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// Resolve a raw path; never fails
    pub fn resolve(&self, path: &str) -> Resolved {
        match self.entries.iter().find(|e| e.path == path) {
            Some(entry) => Resolved {
                page: entry.page,
                subtitle: entry.subtitle,
                matched: true,
            },
            None => {
                let page = Page::default();
                Resolved {
                    page,
                    subtitle: page.subtitle(),
                    matched: path == "/",
                }
            }
        }
    }

    /// Canonical path of a page
    pub fn href(&self, page: Page) -> String {
        format!("{}/{}", self.base_path, page.slug())
    }
}
