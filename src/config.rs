//! Application-wide settings shared by all builders.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Server settings used to compose absolute URLs and default page sizes.
///
/// Keys may also be given under their Flask-style names
/// (`PREFERRED_URL_SCHEME`, `SERVER_NAME`, `ITEMS_PER_PAGE`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    #[serde(alias = "PREFERRED_URL_SCHEME")]
    pub scheme: String,
    #[serde(alias = "SERVER_NAME")]
    pub server_name: String,
    /// Page size used when sub-collections are paginated
    #[serde(alias = "ITEMS_PER_PAGE")]
    pub items_per_page: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            scheme: "http".to_string(),
            server_name: "localhost:5000".to_string(),
            items_per_page: 100,
        }
    }
}

impl ServerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    pub fn with_server_name(mut self, server_name: impl Into<String>) -> Self {
        self.server_name = server_name.into();
        self
    }

    pub fn with_items_per_page(mut self, items_per_page: usize) -> Self {
        self.items_per_page = items_per_page;
        self
    }

    /// `scheme://server_name`, without a trailing slash.
    pub fn base_url(&self) -> String {
        format!("{}://{}", self.scheme, self.server_name.trim_end_matches('/'))
    }

    /// Load settings from a JSON file. Missing keys keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let data = fs::read(path)?;
        Ok(serde_json::from_slice(&data)?)
    }
}
