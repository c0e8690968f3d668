//! Snapshot replay onto a (possibly non-empty) destination account.
//!
//! Categories are isolated: a fatal error in one is recorded in the
//! [`RunReport`] and the next category still runs. Auth errors abort the
//! whole run immediately. The snapshot is never mutated.

use crate::client::{MultiVisibility, RedditApi};
use crate::error::{Error, Result};
use crate::model::{Categories, Category, Multireddit, SavedItem, SavedKind, Snapshot};
use crate::report::{record, RunReport};
use tracing::{debug, warn};

/// Replay each selected category present in the snapshot.
pub async fn import(
    client: &dyn RedditApi,
    snapshot: &Snapshot,
    categories: Categories,
) -> Result<RunReport> {
    let mut report = RunReport::default();

    if categories.friends {
        if let Some(friends) = &snapshot.friends {
            let outcome = import_friends(client, friends).await;
            record(&mut report, Category::Friends, outcome, "Imported friends.")?;
        }
    }
    if categories.saved {
        if let Some(saved) = &snapshot.saved {
            let outcome = import_saved(client, saved).await;
            record(&mut report, Category::Saved, outcome, "Imported saved items.")?;
        }
    }
    if categories.subscriptions {
        if let Some(subscriptions) = &snapshot.subscriptions {
            let outcome = import_subscriptions(client, subscriptions).await;
            record(
                &mut report,
                Category::Subscriptions,
                outcome,
                "Imported subscribed subreddits.",
            )?;
        }
    }
    if categories.multireddits {
        if let Some(multireddits) = &snapshot.multireddits {
            let outcome = import_multireddits(client, multireddits).await;
            record(
                &mut report,
                Category::Multireddits,
                outcome,
                "Imported multireddits.",
            )?;
        }
    }

    Ok(report)
}

/// Friending is idempotent on the platform side; duplicates are silent.
async fn import_friends(client: &dyn RedditApi, friends: &[String]) -> Result<u64> {
    for friend in friends {
        client.friend(friend).await?;
    }
    Ok(0)
}

/// Dispatch on the kind recorded at export time. An unsupported kind skips
/// that item only.
async fn import_saved(client: &dyn RedditApi, saved: &[SavedItem]) -> Result<u64> {
    let mut skipped = 0;
    for item in saved {
        match &item.kind {
            SavedKind::Submission => client.save_submission(&item.id).await?,
            SavedKind::Comment => client.save_comment(&item.id).await?,
            SavedKind::Other(kind) => {
                let e = Error::UnsupportedKind(kind.clone());
                warn!(id = %item.id, error = %e, "skipping saved item");
                skipped += 1;
            }
        }
    }
    Ok(skipped)
}

async fn import_subscriptions(client: &dyn RedditApi, subscriptions: &[String]) -> Result<u64> {
    for name in subscriptions {
        client.subscribe(name).await?;
    }
    Ok(0)
}

/// Create each multireddit; on conflict, merge into the existing one. Any
/// other creation failure is fatal for that multireddit only, and the
/// remaining multireddits still run.
async fn import_multireddits(client: &dyn RedditApi, multireddits: &[Multireddit]) -> Result<u64> {
    let mut skipped = 0;
    for multi in multireddits {
        match client
            .create_multireddit(&multi.name, &multi.subreddits, MultiVisibility::Private)
            .await
        {
            Ok(()) => debug!(multireddit = %multi.path, "created"),
            Err(e) if e.is_conflict() => {
                skipped += merge_multireddit(client, multi).await?;
            }
            Err(e) if e.is_auth() => return Err(e),
            Err(e) => {
                warn!(multireddit = %multi.path, error = %e, "failed to create multireddit, skipping it");
                skipped += 1;
            }
        }
    }
    Ok(skipped)
}

/// Conflict policy: the destination already has a multireddit at this path.
/// Locate it by path (paths are stable; display names are not) and add each
/// snapshot member individually. A member that fails, e.g. because the
/// subreddit no longer exists, is logged and the rest continue.
async fn merge_multireddit(client: &dyn RedditApi, multi: &Multireddit) -> Result<u64> {
    let existing = client.list_multireddits().await?;
    let Some(target) = existing.into_iter().find(|m| m.path == multi.path) else {
        warn!(multireddit = %multi.path, "conflict reported but no existing multireddit matches the path");
        return Ok(1);
    };

    let mut skipped = 0;
    for member in &multi.subreddits {
        match client.add_to_multireddit(&target.path, member).await {
            Ok(()) => {}
            Err(e) if e.is_auth() => return Err(e),
            Err(e) => {
                warn!(subreddit = %member, multireddit = %target.path, error = %e, "subreddit NOT FOUND, skipping");
                skipped += 1;
            }
        }
    }
    Ok(skipped)
}
