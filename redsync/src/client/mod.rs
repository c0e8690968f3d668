//! Account client boundary.
//!
//! [`RedditApi`] is the seam between the transfer logic and the remote API;
//! [`RedditClient`] is the reqwest implementation against oauth.reddit.com.
//! Tests substitute their own implementation.

mod http;
pub mod types;

pub use http::RedditClient;

use crate::error::Result;
use async_trait::async_trait;

/// Page-size cap passed to listing endpoints. The platform caps listings at
/// 1000 items and the result is treated as the complete collection; no
/// pagination beyond the cap is attempted. Known scale limitation.
pub const LISTING_LIMIT: u32 = 1000;

/// A saved content item as the wire reports it: type prefix (`t1` comment,
/// `t3` submission) plus opaque id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedThing {
    pub kind: String,
    pub id: String,
}

impl SavedThing {
    /// Platform fullname, e.g. `t3_abc123`.
    pub fn fullname(&self) -> String {
        format!("{}_{}", self.kind, self.id)
    }
}

/// A multireddit as listed by the platform. `subreddits` holds raw member
/// names, not yet resolved to display names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiredditInfo {
    pub name: String,
    pub path: String,
    pub subreddits: Vec<String>,
}

/// Visibility for created multireddits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultiVisibility {
    Private,
    Public,
    Hidden,
}

impl MultiVisibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            MultiVisibility::Private => "private",
            MultiVisibility::Public => "public",
            MultiVisibility::Hidden => "hidden",
        }
    }
}

/// Authenticated handle to a remote account.
///
/// Every operation is a single blocking (awaited) network call; callers issue
/// them one at a time, never concurrently against the same account.
#[async_trait]
pub trait RedditApi: Send + Sync {
    /// Username the client is authenticated as.
    async fn me(&self) -> Result<String>;

    async fn list_friends(&self) -> Result<Vec<String>>;
    async fn friend(&self, username: &str) -> Result<()>;
    async fn unfriend(&self, username: &str) -> Result<()>;

    async fn list_saved(&self, limit: u32) -> Result<Vec<SavedThing>>;
    async fn save_submission(&self, id: &str) -> Result<()>;
    async fn save_comment(&self, id: &str) -> Result<()>;
    async fn unsave(&self, fullname: &str) -> Result<()>;

    async fn list_subscriptions(&self, limit: u32) -> Result<Vec<String>>;
    async fn subscribe(&self, name: &str) -> Result<()>;
    async fn unsubscribe(&self, name: &str) -> Result<()>;

    async fn list_multireddits(&self) -> Result<Vec<MultiredditInfo>>;
    async fn create_multireddit(
        &self,
        name: &str,
        subreddits: &[String],
        visibility: MultiVisibility,
    ) -> Result<()>;
    async fn add_to_multireddit(&self, path: &str, subreddit: &str) -> Result<()>;
    async fn delete_multireddit(&self, path: &str) -> Result<()>;

    /// Canonical display name for a subreddit; `NotFound` if it no longer
    /// exists.
    async fn resolve_subreddit(&self, name: &str) -> Result<String>;
}
