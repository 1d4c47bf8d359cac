//! Static asset URLs

/// Default URL prefix static files are served under
pub const DEFAULT_ASSET_PREFIX: &str = "/assets/";

/// Maps an asset path to the URL the browser fetches it from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetResolver {
    prefix: String,
}

impl Default for AssetResolver {
    fn default() -> Self {
        Self::new(DEFAULT_ASSET_PREFIX)
    }
}

impl AssetResolver {
    /// Create a resolver; the prefix always ends with a single `/`
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        let trimmed = prefix.trim_end_matches('/');
        Self {
            prefix: format!("{}/", trimmed),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Mount point for the static file service, without the trailing slash
    pub fn mount_path(&self) -> &str {
        let trimmed = self.prefix.trim_end_matches('/');
        if trimmed.is_empty() {
            "/"
        } else {
            trimmed
        }
    }

    pub fn asset_url(&self, path: &str) -> String {
        format!("{}{}", self.prefix, path.trim_start_matches('/'))
    }
}
