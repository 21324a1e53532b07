use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration supplied once at `configure` time and immutable afterward
/// for the lifetime of a facade instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Application name registered with the provider console.
    pub application_name: String,
    /// OAuth scopes to request, in order. An empty list is accepted and
    /// passed through as-is.
    pub scopes: Vec<String>,
    /// Path to the client secret JSON downloaded from the provider console.
    pub credentials_path: PathBuf,
    /// API key obtained from the provider console.
    pub api_key: String,
}

impl ClientConfig {
    pub fn new(
        application_name: impl Into<String>,
        scopes: Vec<String>,
        credentials_path: impl Into<PathBuf>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            application_name: application_name.into(),
            scopes,
            credentials_path: credentials_path.into(),
            api_key: api_key.into(),
        }
    }
}
