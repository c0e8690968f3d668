//! Wire DTOs for the subset of the API this tool touches.

use serde::{Deserialize, Serialize};

/// OAuth token endpoint response. Bad user credentials come back as 200 with
/// an `error` field, so both arms are optional.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
    pub error: Option<String>,
}

/// Standard listing envelope: `{"kind": "Listing", "data": {"children": [...]}}`.
#[derive(Debug, Deserialize)]
pub struct Listing<T> {
    pub data: ListingData<T>,
}

#[derive(Debug, Deserialize)]
pub struct ListingData<T> {
    pub children: Vec<T>,
}

/// A kind-tagged thing, e.g. `{"kind": "t3", "data": {...}}`.
#[derive(Debug, Deserialize)]
pub struct Thing<T> {
    pub kind: String,
    pub data: T,
}

#[derive(Debug, Deserialize)]
pub struct AccountData {
    pub name: String,
}

/// Friend-list children are flat relationship objects, not kind-tagged
/// things.
#[derive(Debug, Deserialize)]
pub struct RelationshipData {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ContentData {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct SubredditData {
    pub display_name: String,
}

#[derive(Debug, Deserialize)]
pub struct MultiData {
    pub display_name: String,
    pub path: String,
    #[serde(default)]
    pub subreddits: Vec<MultiSubreddit>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MultiSubreddit {
    pub name: String,
}

/// Request model for multireddit creation.
#[derive(Debug, Serialize)]
pub struct MultiModel {
    pub display_name: String,
    pub subreddits: Vec<MultiSubreddit>,
    pub visibility: String,
}
