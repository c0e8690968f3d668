//! Account state clearing.
//!
//! Enumerates each selected collection and issues the inverse operation per
//! item. No batching, no rollback: an interrupted run leaves the category
//! partially wiped, and re-running is safe because every inverse operation
//! either is idempotent or skips already-absent items.

use crate::client::{RedditApi, LISTING_LIMIT};
use crate::error::Result;
use crate::model::{Categories, Category};
use crate::report::{record, RunReport};
use tracing::debug;

/// Clear the selected categories of the authenticated account.
pub async fn wipe(client: &dyn RedditApi, categories: Categories) -> Result<RunReport> {
    let mut report = RunReport::default();

    if categories.friends {
        let outcome = wipe_friends(client).await;
        record(&mut report, Category::Friends, outcome, "Unfriended all friends.")?;
    }
    if categories.saved {
        let outcome = wipe_saved(client).await;
        record(&mut report, Category::Saved, outcome, "Unsaved all saved items.")?;
    }
    if categories.subscriptions {
        let outcome = wipe_subscriptions(client).await;
        record(
            &mut report,
            Category::Subscriptions,
            outcome,
            "Unsubscribed from all subreddits.",
        )?;
    }
    if categories.multireddits {
        let outcome = wipe_multireddits(client).await;
        record(
            &mut report,
            Category::Multireddits,
            outcome,
            "Deleted all multireddits.",
        )?;
    }

    Ok(report)
}

async fn wipe_friends(client: &dyn RedditApi) -> Result<u64> {
    for friend in client.list_friends().await? {
        match client.unfriend(&friend).await {
            Ok(()) => {}
            Err(e) if e.is_not_found() => debug!(friend = %friend, "already removed"),
            Err(e) => return Err(e),
        }
    }
    Ok(0)
}

async fn wipe_saved(client: &dyn RedditApi) -> Result<u64> {
    for thing in client.list_saved(LISTING_LIMIT).await? {
        match client.unsave(&thing.fullname()).await {
            Ok(()) => {}
            Err(e) if e.is_not_found() => debug!(item = %thing.fullname(), "already unsaved"),
            Err(e) => return Err(e),
        }
    }
    Ok(0)
}

async fn wipe_subscriptions(client: &dyn RedditApi) -> Result<u64> {
    for name in client.list_subscriptions(LISTING_LIMIT).await? {
        match client.unsubscribe(&name).await {
            Ok(()) => {}
            Err(e) if e.is_not_found() => debug!(subreddit = %name, "already unsubscribed"),
            Err(e) => return Err(e),
        }
    }
    Ok(0)
}

async fn wipe_multireddits(client: &dyn RedditApi) -> Result<u64> {
    for multi in client.list_multireddits().await? {
        match client.delete_multireddit(&multi.path).await {
            Ok(()) => {}
            // Deleting an already-deleted multireddit 404s; that is the
            // desired end state, not a failure.
            Err(e) if e.is_not_found() => debug!(multireddit = %multi.path, "already deleted"),
            Err(e) => return Err(e),
        }
    }
    Ok(0)
}
