//! Account state capture.
//!
//! Read-only: fetches each selected category through the client and maps it
//! into the snapshot model. Network and auth failures propagate unmodified;
//! these are interactive, human-supervised runs and there is no retry.

use crate::client::{RedditApi, LISTING_LIMIT};
use crate::error::{Error, Result};
use crate::model::{Categories, Multireddit, SavedItem, SavedKind, Snapshot};
use tracing::warn;

/// Capture the selected categories of the authenticated account.
pub async fn export(client: &dyn RedditApi, categories: Categories) -> Result<Snapshot> {
    let source_user = client.me().await?;
    let mut snapshot = Snapshot::new(source_user);

    if categories.friends {
        snapshot.friends = Some(client.list_friends().await?);
        println!("Exported friends.");
    }
    if categories.saved {
        snapshot.saved = Some(export_saved(client).await?);
        println!("Exported saved items.");
    }
    if categories.subscriptions {
        snapshot.subscriptions = Some(client.list_subscriptions(LISTING_LIMIT).await?);
        println!("Exported subscribed subreddits.");
    }
    if categories.multireddits {
        snapshot.multireddits = Some(export_multireddits(client).await?);
        println!("Exported multireddits.");
    }

    Ok(snapshot)
}

/// Map wire type prefixes onto the explicit kind discriminant. The kind is
/// resolved here, once; import never re-inspects wire types.
async fn export_saved(client: &dyn RedditApi) -> Result<Vec<SavedItem>> {
    let mut items = Vec::new();
    for thing in client.list_saved(LISTING_LIMIT).await? {
        let kind = match thing.kind.as_str() {
            "t3" => SavedKind::Submission,
            "t1" => SavedKind::Comment,
            other => {
                let e = Error::UnsupportedKind(other.to_string());
                warn!(id = %thing.id, error = %e, "skipping saved item");
                continue;
            }
        };
        items.push(SavedItem { id: thing.id, kind });
    }
    Ok(items)
}

async fn export_multireddits(client: &dyn RedditApi) -> Result<Vec<Multireddit>> {
    let mut multis = Vec::new();
    for multi in client.list_multireddits().await? {
        let mut subreddits = Vec::new();
        for member in &multi.subreddits {
            // A member that vanished since the multireddit was assembled
            // must not abort the rest of the multireddit.
            match client.resolve_subreddit(member).await {
                Ok(display_name) => subreddits.push(display_name),
                Err(e) if e.is_not_found() => {
                    warn!(subreddit = %member, multireddit = %multi.path, "skipping member: not found");
                }
                Err(e) => return Err(e),
            }
        }
        multis.push(Multireddit {
            name: multi.name,
            path: multi.path,
            subreddits,
        });
    }
    Ok(multis)
}
