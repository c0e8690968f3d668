//! Export command implementation.

use anyhow::{Context, Result};
use redsync::client::RedditClient;
use redsync::config::Config;
use redsync::model::Categories;
use redsync::serialize::{self, SnapshotFormat};
use std::path::Path;

/// Run the export command.
pub async fn run(
    profile: &str,
    output: &Path,
    format: SnapshotFormat,
    categories: Categories,
) -> Result<()> {
    let config = Config::load(&Config::default_path()?)?;
    let client = RedditClient::login(config.profile(profile)?).await?;

    let snapshot = redsync::export::export(&client, categories).await?;
    let encoded = serialize::encode(&snapshot, format)?;
    std::fs::write(output, encoded)
        .with_context(|| format!("Cannot write {}", output.display()))?;

    println!("Export complete: {}", output.display());
    Ok(())
}
