//! redsync: migrate Reddit account state between accounts.
//!
//! Export friends, saved items, subreddit subscriptions and multireddits to
//! a snapshot file (YAML or JSON), replay a snapshot onto another account,
//! or wipe an account clean. Everything runs sequentially over one
//! authenticated client; see [`client::RedditApi`] for the seam.

pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod import;
pub mod model;
pub mod report;
pub mod serialize;
pub mod wipe;

pub use client::{RedditApi, RedditClient};
pub use error::{Error, Result};
pub use model::{Categories, Category, Multireddit, SavedItem, SavedKind, Snapshot};
pub use report::RunReport;
pub use serialize::SnapshotFormat;
