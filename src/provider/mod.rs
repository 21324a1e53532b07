//! Provider SDK seam.
//!
//! The facade talks to the remote platform exclusively through the
//! [`ProviderSdk`] trait, so the normalization logic can be exercised with a
//! test double and is not tied to any particular HTTP stack. The resource
//! structs below mirror the provider's wire shape; the facade flattens them
//! into the crate's public models.

pub mod google;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::ClientConfig;
use crate::credential::Credential;
use crate::error::ProviderError;

/// The narrow capability surface the facade requires from a provider SDK.
///
/// OAuth operations receive the client configuration because the concrete
/// implementation reads the client id/secret from the configured secret
/// material. Data operations receive the bearer access token of the
/// installed credential.
#[async_trait]
pub trait ProviderSdk: Send + Sync {
    /// Build the URL the end user visits to authorize the application.
    fn create_authorization_url(&self, config: &ClientConfig) -> Result<String, ProviderError>;

    /// Exchange an authorization code for a credential.
    async fn exchange_auth_code(
        &self,
        config: &ClientConfig,
        code: &str,
    ) -> Result<Credential, ProviderError>;

    /// Obtain a fresh credential from a refresh token.
    async fn refresh_credential(
        &self,
        config: &ClientConfig,
        refresh_token: &str,
    ) -> Result<Credential, ProviderError>;

    /// List the channels owned by the authenticated user.
    async fn list_own_channels(
        &self,
        access_token: &str,
        fields: &str,
    ) -> Result<Vec<ChannelResource>, ProviderError>;

    /// Search for items published by a channel.
    async fn search_videos_by_channel(
        &self,
        access_token: &str,
        channel_id: &str,
        max_results: u32,
        order: &str,
        item_type: &str,
    ) -> Result<Vec<SearchResource>, ProviderError>;

    /// Look up a single video by id. Zero or one element is expected.
    async fn get_video_by_id(
        &self,
        access_token: &str,
        video_id: &str,
        fields: &str,
    ) -> Result<Vec<VideoResource>, ProviderError>;

    /// List comment threads for a video.
    async fn list_comment_threads(
        &self,
        access_token: &str,
        video_id: &str,
        fields: &str,
        max_results: u32,
    ) -> Result<Vec<CommentThreadResource>, ProviderError>;
}

// ============================================================================
// Raw provider resource shapes
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelResource {
    pub id: String,
    pub snippet: ChannelSnippet,
    pub statistics: Option<ChannelStatistics>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelSnippet {
    pub title: String,
    #[serde(rename = "customUrl")]
    pub custom_url: Option<String>,
    #[serde(rename = "publishedAt")]
    pub published_at: String,
    /// Title/description localized for the caller's locale. The facade
    /// prefers this title over the plain one when present.
    pub localized: Option<LocalizedText>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalizedText {
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelStatistics {
    #[serde(rename = "viewCount")]
    pub view_count: Option<String>,
    #[serde(rename = "subscriberCount")]
    pub subscriber_count: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResource {
    pub id: SearchResourceId,
    pub snippet: SearchSnippet,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResourceId {
    #[serde(rename = "videoId")]
    pub video_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchSnippet {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Search results carry `publishTime` rather than `publishedAt`.
    #[serde(rename = "publishTime")]
    pub publish_time: String,
    pub thumbnails: Option<Thumbnails>,
    #[serde(rename = "channelTitle")]
    pub channel_title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thumbnails {
    pub default: Option<Thumbnail>,
    pub medium: Option<Thumbnail>,
    pub high: Option<Thumbnail>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thumbnail {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoResource {
    pub id: String,
    pub snippet: VideoSnippet,
    pub statistics: Option<VideoStatistics>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoSnippet {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "publishedAt")]
    pub published_at: String,
    #[serde(rename = "channelTitle")]
    pub channel_title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoStatistics {
    #[serde(rename = "viewCount")]
    pub view_count: Option<String>,
    #[serde(rename = "likeCount")]
    pub like_count: Option<String>,
    #[serde(rename = "dislikeCount")]
    pub dislike_count: Option<String>,
    #[serde(rename = "favoriteCount")]
    pub favorite_count: Option<String>,
    #[serde(rename = "commentCount")]
    pub comment_count: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentThreadResource {
    pub id: String,
    pub snippet: CommentThreadSnippet,
    pub replies: Option<ReplyList>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentThreadSnippet {
    /// Absent counts as not public.
    #[serde(rename = "isPublic", default)]
    pub is_public: bool,
    #[serde(rename = "canReply", default)]
    pub can_reply: bool,
    #[serde(rename = "totalReplyCount", default)]
    pub total_reply_count: i64,
    #[serde(rename = "topLevelComment")]
    pub top_level_comment: CommentResource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplyList {
    #[serde(default)]
    pub comments: Vec<CommentResource>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentResource {
    pub id: String,
    pub snippet: CommentSnippet,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentSnippet {
    #[serde(rename = "authorDisplayName")]
    pub author_display_name: String,
    #[serde(rename = "authorProfileImageUrl", default)]
    pub author_profile_image_url: String,
    #[serde(rename = "textDisplay")]
    pub text_display: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
    /// Only present on replies; links a reply to its thread.
    #[serde(rename = "parentId")]
    pub parent_id: Option<String>,
}
