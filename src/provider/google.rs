//! Google implementation of the provider seam.
//!
//! Talks to the Google OAuth2 token endpoint and the YouTube Data API v3.
//! Docs: https://developers.google.com/youtube/v3

use chrono::Utc;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use std::path::Path;

use async_trait::async_trait;

use crate::config::ClientConfig;
use crate::credential::Credential;
use crate::error::ProviderError;
use crate::provider::{
    ChannelResource, CommentThreadResource, ProviderSdk, SearchResource, VideoResource,
};

const AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const API_BASE: &str = "https://www.googleapis.com/youtube/v3";

/// Provider SDK backed by the real Google endpoints.
#[derive(Debug, Clone, Default)]
pub struct GoogleProvider {
    client: Client,
}

impl GoogleProvider {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// GET an API collection endpoint and unwrap its `items` list.
    async fn fetch_items<T: DeserializeOwned>(
        &self,
        path: &str,
        access_token: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>, ProviderError> {
        let url = format!("{API_BASE}/{path}");
        tracing::debug!(%url, "requesting youtube api collection");

        let response = self
            .client
            .get(&url)
            .query(query)
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            tracing::error!("youtube api request to {} failed: {}", path, body);
            return Err(ProviderError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let listing: ListResponse<T> = response.json().await?;
        Ok(listing.items)
    }

    /// POST to the token endpoint and build a credential stamped with the
    /// current instant.
    async fn request_token(&self, params: serde_json::Value) -> Result<Credential, ProviderError> {
        let response = self.client.post(TOKEN_URL).json(&params).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            tracing::error!("token endpoint request failed: {}", body);
            return Err(ProviderError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let token: TokenResponse = response.json().await?;
        Ok(Credential {
            access_token: token.access_token,
            refresh_token: token.refresh_token,
            created: Utc::now().timestamp(),
            expires_in: token.expires_in,
        })
    }
}

#[async_trait]
impl ProviderSdk for GoogleProvider {
    fn create_authorization_url(&self, config: &ClientConfig) -> Result<String, ProviderError> {
        let secret = load_client_secret(&config.credentials_path)?;
        let redirect_uri = secret.first_redirect_uri()?;
        let scope = config.scopes.join(" ");

        Ok(format!(
            "{}?client_id={}&redirect_uri={}&response_type=code&scope={}&access_type=offline",
            AUTH_URL,
            urlencoding::encode(&secret.client_id),
            urlencoding::encode(redirect_uri),
            urlencoding::encode(&scope),
        ))
    }

    async fn exchange_auth_code(
        &self,
        config: &ClientConfig,
        code: &str,
    ) -> Result<Credential, ProviderError> {
        let secret = load_client_secret(&config.credentials_path)?;
        let redirect_uri = secret.first_redirect_uri()?;

        tracing::debug!("exchanging authorization code for access token");
        self.request_token(json!({
            "code": code,
            "client_id": secret.client_id,
            "client_secret": secret.client_secret,
            "redirect_uri": redirect_uri,
            "grant_type": "authorization_code",
        }))
        .await
    }

    async fn refresh_credential(
        &self,
        config: &ClientConfig,
        refresh_token: &str,
    ) -> Result<Credential, ProviderError> {
        let secret = load_client_secret(&config.credentials_path)?;

        tracing::info!("refreshing expired access token");
        let mut credential = self
            .request_token(json!({
                "client_id": secret.client_id,
                "client_secret": secret.client_secret,
                "refresh_token": refresh_token,
                "grant_type": "refresh_token",
            }))
            .await?;

        // The token endpoint omits the refresh token on refresh; carry over
        // the one we just used so the credential stays refreshable.
        if credential.refresh_token.is_none() {
            credential.refresh_token = Some(refresh_token.to_string());
        }
        Ok(credential)
    }

    async fn list_own_channels(
        &self,
        access_token: &str,
        fields: &str,
    ) -> Result<Vec<ChannelResource>, ProviderError> {
        self.fetch_items(
            "channels",
            access_token,
            &[("part", fields.to_string()), ("mine", "true".to_string())],
        )
        .await
    }

    async fn search_videos_by_channel(
        &self,
        access_token: &str,
        channel_id: &str,
        max_results: u32,
        order: &str,
        item_type: &str,
    ) -> Result<Vec<SearchResource>, ProviderError> {
        self.fetch_items(
            "search",
            access_token,
            &[
                ("part", "snippet,id".to_string()),
                ("channelId", channel_id.to_string()),
                ("maxResults", max_results.to_string()),
                ("order", order.to_string()),
                ("type", item_type.to_string()),
            ],
        )
        .await
    }

    async fn get_video_by_id(
        &self,
        access_token: &str,
        video_id: &str,
        fields: &str,
    ) -> Result<Vec<VideoResource>, ProviderError> {
        self.fetch_items(
            "videos",
            access_token,
            &[("part", fields.to_string()), ("id", video_id.to_string())],
        )
        .await
    }

    async fn list_comment_threads(
        &self,
        access_token: &str,
        video_id: &str,
        fields: &str,
        max_results: u32,
    ) -> Result<Vec<CommentThreadResource>, ProviderError> {
        self.fetch_items(
            "commentThreads",
            access_token,
            &[
                ("part", fields.to_string()),
                ("videoId", video_id.to_string()),
                ("maxResults", max_results.to_string()),
            ],
        )
        .await
    }
}

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct ListResponse<T> {
    #[serde(default)]
    items: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: Option<String>,
    expires_in: i64,
}

// ============================================================================
// Client secret material
// ============================================================================

/// The JSON downloaded from the Google console. Desktop apps store their
/// entry under `installed`, server apps under `web`.
#[derive(Debug, Deserialize)]
struct ClientSecretFile {
    installed: Option<ClientSecretEntry>,
    web: Option<ClientSecretEntry>,
}

#[derive(Debug, Deserialize)]
struct ClientSecretEntry {
    client_id: String,
    client_secret: String,
    #[serde(default)]
    redirect_uris: Vec<String>,
}

impl ClientSecretEntry {
    fn first_redirect_uri(&self) -> Result<&str, ProviderError> {
        self.redirect_uris
            .first()
            .map(String::as_str)
            .ok_or_else(|| ProviderError::SecretShape("no redirect_uris listed".into()))
    }
}

fn load_client_secret(path: &Path) -> Result<ClientSecretEntry, ProviderError> {
    let raw = std::fs::read_to_string(path)?;
    let file: ClientSecretFile = serde_json::from_str(&raw)?;
    file.installed
        .or(file.web)
        .ok_or_else(|| ProviderError::SecretShape("expected an `installed` or `web` entry".into()))
}
