//! Snapshot data model.
//!
//! A [`Snapshot`] is a point-in-time capture of a user's exportable account
//! state. Top-level fields are `Option` so that "category not exported" and
//! "category exported but empty" stay distinct across serialization.

use serde::{Deserialize, Serialize};

/// Exportable account state for one user.
///
/// Produced by the exporter, consumed read-only by the importer. Sequences
/// preserve the order the platform returned them in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Account the snapshot was taken from.
    pub source_user: String,
    /// RFC 3339 timestamp, informational only.
    pub export_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friends: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved: Option<Vec<SavedItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscriptions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multireddits: Option<Vec<Multireddit>>,
}

impl Snapshot {
    /// New snapshot with no categories populated, stamped with the current
    /// time.
    pub fn new(source_user: impl Into<String>) -> Self {
        Self {
            source_user: source_user.into(),
            export_date: chrono::Utc::now().to_rfc3339(),
            friends: None,
            saved: None,
            subscriptions: None,
            multireddits: None,
        }
    }
}

/// A bookmarked content item, identified by the platform's opaque content id
/// plus the kind needed to re-fetch it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: SavedKind,
}

/// Discriminant for saved content, resolved once at export time.
///
/// Unknown kinds decode into `Other` so a single unrecognized item is
/// rejected at import time instead of failing the whole file decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SavedKind {
    Submission,
    Comment,
    #[serde(untagged)]
    Other(String),
}

/// A named collection of subreddits owned by a user.
///
/// `path` is the platform-assigned stable identifier; `name` is the mutable
/// display name. Conflict resolution on import matches by path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Multireddit {
    pub name: String,
    pub path: String,
    pub subreddits: Vec<String>,
}

/// One account-state category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Friends,
    Saved,
    Subscriptions,
    Multireddits,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Friends => write!(f, "friends"),
            Category::Saved => write!(f, "saved"),
            Category::Subscriptions => write!(f, "subscriptions"),
            Category::Multireddits => write!(f, "multireddits"),
        }
    }
}

/// Category filter for a run.
///
/// The canonical default policy: friends, subscriptions and multireddits on,
/// saved off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Categories {
    pub friends: bool,
    pub saved: bool,
    pub subscriptions: bool,
    pub multireddits: bool,
}

impl Default for Categories {
    fn default() -> Self {
        Self {
            friends: true,
            saved: false,
            subscriptions: true,
            multireddits: true,
        }
    }
}

impl Categories {
    pub fn all() -> Self {
        Self {
            friends: true,
            saved: true,
            subscriptions: true,
            multireddits: true,
        }
    }

    pub fn none() -> Self {
        Self {
            friends: false,
            saved: false,
            subscriptions: false,
            multireddits: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_excludes_saved() {
        let c = Categories::default();
        assert!(c.friends && c.subscriptions && c.multireddits);
        assert!(!c.saved);
    }

    #[test]
    fn unknown_saved_kind_decodes_as_other() {
        let item: SavedItem = serde_json::from_str(r#"{"id":"z","type":"Poll"}"#).unwrap();
        assert_eq!(item.kind, SavedKind::Other("Poll".to_string()));
    }

    #[test]
    fn saved_kind_serializes_with_type_key() {
        let item = SavedItem {
            id: "t3abc".to_string(),
            kind: SavedKind::Submission,
        };
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"id":"t3abc","type":"Submission"}"#);
    }
}
