//! Import command implementation.

use anyhow::{Context, Result};
use redsync::client::RedditClient;
use redsync::config::Config;
use redsync::model::Categories;
use redsync::serialize::{self, SnapshotFormat};
use std::path::Path;

use super::print_report;

/// Run the import command. The snapshot file is read and decoded before any
/// credentials are touched, so a bad file never costs a network call.
pub async fn run(
    profile: &str,
    input: &Path,
    format: SnapshotFormat,
    categories: Categories,
    wipe_first: bool,
) -> Result<()> {
    let text = std::fs::read_to_string(input)
        .with_context(|| format!("Cannot read {}", input.display()))?;
    let snapshot = serialize::decode(&text, format)?;

    let config = Config::load(&Config::default_path()?)?;
    let client = RedditClient::login(config.profile(profile)?).await?;

    if wipe_first {
        let report = redsync::wipe::wipe(&client, categories).await?;
        print_report(&report);
    }

    let report = redsync::import::import(&client, &snapshot, categories).await?;
    print_report(&report);

    println!(
        "Import complete: {} (snapshot of u/{})",
        input.display(),
        snapshot.source_user
    );
    Ok(())
}
