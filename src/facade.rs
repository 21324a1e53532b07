use chrono::Utc;

use crate::config::ClientConfig;
use crate::credential::Credential;
use crate::error::{Error, Result};
use crate::models::{ChannelSummary, CommentThread, Reply, VideoDetail, VideoStats, VideoSummary};
use crate::provider::{
    ChannelResource, CommentResource, ProviderSdk, SearchResource, VideoResource,
};

/// Listing cap applied when the caller does not pass one.
pub const DEFAULT_MAX_ITEMS: u32 = 12;

const CHANNEL_FIELDS: &str = "snippet,contentDetails,statistics";
const VIDEO_FIELDS: &str = "snippet,statistics";
const COMMENT_FIELDS: &str = "snippet,replies";

/// Adapter exposing a narrow slice of the provider's API through flattened,
/// application-friendly shapes, plus the OAuth2 credential lifecycle.
///
/// An instance starts unconfigured; [`configure`](Self::configure) moves it
/// to the ready state and every other operation fails with
/// [`Error::NotConfigured`] until then. One instance is meant to serve one
/// logical session/user; the active credential is plain mutable state with
/// no internal locking.
pub struct YouTubeFacade<P> {
    provider: P,
    state: State,
}

struct Session {
    config: ClientConfig,
    credential: Option<Credential>,
}

enum State {
    Unconfigured,
    Ready(Session),
}

impl<P: ProviderSdk> YouTubeFacade<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            state: State::Unconfigured,
        }
    }

    /// Store the configuration and transition to the ready state. Calling
    /// it again overwrites the configuration; an already installed
    /// credential stays in place. No network call is made.
    pub fn configure(&mut self, config: ClientConfig) {
        match &mut self.state {
            State::Ready(session) => session.config = config,
            State::Unconfigured => {
                self.state = State::Ready(Session {
                    config,
                    credential: None,
                })
            }
        }
    }

    /// The currently installed credential, if any. Callers persist this
    /// themselves; the facade never stores it anywhere.
    pub fn credential(&self) -> Option<&Credential> {
        match &self.state {
            State::Ready(session) => session.credential.as_ref(),
            State::Unconfigured => None,
        }
    }

    /// Authorization URL for the configured application and scopes.
    pub fn auth_url(&self) -> Result<String> {
        let session = self.session()?;
        Ok(self.provider.create_authorization_url(&session.config)?)
    }

    /// Exchange an authorization code for a credential and install it as
    /// the active one. Returns the installed credential so the caller can
    /// serialize and store it.
    pub async fn exchange_code(&mut self, code: &str) -> Result<Credential> {
        if code.trim().is_empty() {
            return Err(Error::InvalidArgument(
                "cannot exchange an empty authorization code".into(),
            ));
        }

        let credential = self
            .provider
            .exchange_auth_code(self.config()?, code)
            .await?;
        self.install(credential.clone());
        Ok(credential)
    }

    /// Install a caller-supplied serialized credential, refreshing it first
    /// when it has already expired. Returns the installed (possibly
    /// refreshed) credential.
    pub async fn set_credential(&mut self, serialized: &str) -> Result<Credential> {
        if serialized.trim().is_empty() {
            return Err(Error::InvalidArgument(
                "serialized credential is empty".into(),
            ));
        }
        self.session()?;

        let mut credential = Credential::parse(serialized)?;

        let now = Utc::now().timestamp();
        if credential.is_expired_at(now) {
            let refresh_token = credential.refresh_token.clone().ok_or_else(|| {
                Error::InvalidArgument("credential is expired and has no refresh_token".into())
            })?;
            tracing::info!(
                expired_at = credential.expires_at(),
                "stored credential expired, refreshing"
            );
            credential = self
                .provider
                .refresh_credential(self.config()?, &refresh_token)
                .await?;
        } else {
            tracing::debug!(expires_at = credential.expires_at(), "credential still valid");
        }

        self.install(credential.clone());
        Ok(credential)
    }

    /// Channels owned by the authenticated user, in provider order.
    pub async fn list_channels(&self) -> Result<Vec<ChannelSummary>> {
        let channels = self
            .provider
            .list_own_channels(self.bearer()?, CHANNEL_FIELDS)
            .await?;

        Ok(channels.into_iter().map(channel_summary).collect())
    }

    /// Videos published by a channel, most recent first, capped at
    /// `max_items` (default 12).
    pub async fn list_videos(
        &self,
        channel_id: &str,
        max_items: Option<u32>,
    ) -> Result<Vec<VideoSummary>> {
        let items = self
            .provider
            .search_videos_by_channel(
                self.bearer()?,
                channel_id,
                max_items.unwrap_or(DEFAULT_MAX_ITEMS),
                "date",
                "video",
            )
            .await?;

        Ok(items.into_iter().filter_map(video_summary).collect())
    }

    /// Detail for a single video, with its comment threads attached when
    /// the video has any comments. `Ok(None)` when the provider knows no
    /// such video.
    pub async fn get_video_detail(&self, video_id: &str) -> Result<Option<VideoDetail>> {
        let mut items = self
            .provider
            .get_video_by_id(self.bearer()?, video_id, VIDEO_FIELDS)
            .await?;

        if items.is_empty() {
            return Ok(None);
        }
        // The id lookup can structurally return several items; only the
        // first is expected and used.
        let VideoResource {
            id,
            snippet,
            statistics,
        } = items.remove(0);

        let stats = VideoStats {
            views: parse_count(statistics.as_ref().and_then(|s| s.view_count.as_ref())),
            likes: parse_count(statistics.as_ref().and_then(|s| s.like_count.as_ref())),
            dislikes: parse_count(statistics.as_ref().and_then(|s| s.dislike_count.as_ref())),
            favorites: parse_count(statistics.as_ref().and_then(|s| s.favorite_count.as_ref())),
            comments: parse_count(statistics.as_ref().and_then(|s| s.comment_count.as_ref())),
        };

        let comments = if stats.comments.map_or(false, |count| count > 0) {
            self.get_video_comments(video_id, None).await?
        } else {
            Vec::new()
        };

        Ok(Some(VideoDetail {
            id,
            title: snippet.title,
            description: snippet.description,
            created_at: snippet.published_at,
            channel_name: snippet.channel_title,
            stats,
            comments,
        }))
    }

    /// Public comment threads of a video with their associated replies,
    /// capped at `max_items` (default 12). Non-public threads are dropped,
    /// not merely hidden.
    pub async fn get_video_comments(
        &self,
        video_id: &str,
        max_items: Option<u32>,
    ) -> Result<Vec<CommentThread>> {
        let threads = self
            .provider
            .list_comment_threads(
                self.bearer()?,
                video_id,
                COMMENT_FIELDS,
                max_items.unwrap_or(DEFAULT_MAX_ITEMS),
            )
            .await?;

        let mut result = Vec::new();
        for thread in threads {
            if !thread.snippet.is_public {
                continue;
            }

            let replies = if thread.snippet.can_reply && thread.snippet.total_reply_count > 0 {
                replies_for_thread(
                    &thread.id,
                    thread.replies.map(|r| r.comments).unwrap_or_default(),
                )
            } else {
                Vec::new()
            };

            let top = thread.snippet.top_level_comment;
            result.push(CommentThread {
                id: thread.id,
                author: top.snippet.author_display_name,
                author_image_url: top.snippet.author_profile_image_url,
                text: top.snippet.text_display,
                updated_at: top.snippet.updated_at,
                replies_count: thread.snippet.total_reply_count,
                replies,
            });
        }
        Ok(result)
    }

    fn session(&self) -> Result<&Session> {
        match &self.state {
            State::Ready(session) => Ok(session),
            State::Unconfigured => Err(Error::NotConfigured),
        }
    }

    fn config(&self) -> Result<&ClientConfig> {
        Ok(&self.session()?.config)
    }

    /// Access token of the installed credential. Data operations fail fast
    /// here instead of sending an unauthenticated request.
    fn bearer(&self) -> Result<&str> {
        self.session()?
            .credential
            .as_ref()
            .map(|c| c.access_token.as_str())
            .ok_or(Error::NotAuthenticated)
    }

    fn install(&mut self, credential: Credential) {
        if let State::Ready(session) = &mut self.state {
            session.credential = Some(credential);
        }
    }
}

fn channel_summary(channel: ChannelResource) -> ChannelSummary {
    let ChannelResource {
        id,
        snippet,
        statistics,
    } = channel;

    // Prefer the locale-aware title when the provider sends one.
    let name = match snippet.localized {
        Some(localized) => localized.title,
        None => snippet.title,
    };

    ChannelSummary {
        id,
        name,
        username: snippet.custom_url,
        created_at: snippet.published_at,
        total_plays: parse_count(statistics.as_ref().and_then(|s| s.view_count.as_ref())),
        subscribers: parse_count(statistics.as_ref().and_then(|s| s.subscriber_count.as_ref())),
    }
}

fn video_summary(item: SearchResource) -> Option<VideoSummary> {
    let SearchResource { id, snippet } = item;
    // Search is scoped to type=video, but the id is structurally optional;
    // anything else is dropped.
    let video_id = id.video_id?;

    Some(VideoSummary {
        id: video_id,
        title: snippet.title,
        description: snippet.description,
        created_at: snippet.publish_time,
        thumbnail_url: snippet.thumbnails.and_then(|t| t.default).map(|t| t.url),
        channel_name: snippet.channel_title,
    })
}

/// Keep only the raw replies that belong to the given thread: a reply
/// survives when it carries a non-empty parent id equal to the thread id.
/// Input order is preserved; no re-sorting happens.
fn replies_for_thread(thread_id: &str, raw: Vec<CommentResource>) -> Vec<Reply> {
    raw.into_iter()
        .filter_map(|reply| match reply.snippet.parent_id.as_deref() {
            Some(parent) if !parent.is_empty() && parent == thread_id => Some(Reply {
                id: reply.id,
                author: reply.snippet.author_display_name,
                author_image_url: reply.snippet.author_profile_image_url,
                text: reply.snippet.text_display,
                updated_at: reply.snippet.updated_at,
            }),
            _ => None,
        })
        .collect()
}

fn parse_count(value: Option<&String>) -> Option<i64> {
    value.and_then(|v| v.parse().ok())
}
