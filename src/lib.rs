// lib.rs - Thin facade over the YouTube Data API v3 with OAuth2 token
// lifecycle handling. All network traffic goes through the ProviderSdk
// seam; GoogleProvider is the implementation against the real endpoints.
pub mod config;
pub mod credential;
pub mod error;
pub mod facade;
pub mod models;
pub mod provider;

// Re-export the public surface for convenience
pub use config::ClientConfig;
pub use credential::Credential;
pub use error::{Error, ProviderError, Result};
pub use facade::{YouTubeFacade, DEFAULT_MAX_ITEMS};
pub use models::{ChannelSummary, CommentThread, Reply, VideoDetail, VideoStats, VideoSummary};
pub use provider::{google::GoogleProvider, ProviderSdk};
