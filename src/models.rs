use serde::{Deserialize, Serialize};

/// A channel owned by the authenticated user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelSummary {
    pub id: String,
    pub name: String,
    /// Vanity URL handle. Channels without one carry `None`.
    pub username: Option<String>,
    pub created_at: String,
    pub total_plays: Option<i64>,
    pub subscribers: Option<i64>,
}

/// One entry of a channel's video listing, most recent first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub created_at: String,
    pub thumbnail_url: Option<String>,
    pub channel_name: String,
}

/// Full detail for a single video, including its comment threads when the
/// video has any comments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoDetail {
    pub id: String,
    pub title: String,
    pub description: String,
    pub created_at: String,
    pub channel_name: String,
    pub stats: VideoStats,
    pub comments: Vec<CommentThread>,
}

/// Counts the provider reports as decimal strings, parsed here. A count the
/// provider omits (e.g. hidden like counts) stays `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoStats {
    pub views: Option<i64>,
    pub likes: Option<i64>,
    pub dislikes: Option<i64>,
    pub favorites: Option<i64>,
    pub comments: Option<i64>,
}

/// A public top-level comment plus the replies that belong to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentThread {
    pub id: String,
    pub author: String,
    pub author_image_url: String,
    pub text: String,
    pub updated_at: String,
    pub replies_count: i64,
    pub replies: Vec<Reply>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reply {
    pub id: String,
    pub author: String,
    pub author_image_url: String,
    pub text: String,
    pub updated_at: String,
}
