//! Wipe command implementation.

use anyhow::Result;
use redsync::client::RedditClient;
use redsync::config::Config;
use redsync::model::Categories;

use super::print_report;

/// Run the wipe command.
pub async fn run(profile: &str, categories: Categories) -> Result<()> {
    let config = Config::load(&Config::default_path()?)?;
    let client = RedditClient::login(config.profile(profile)?).await?;

    let report = redsync::wipe::wipe(&client, categories).await?;
    print_report(&report);

    println!("Wipe complete.");
    Ok(())
}
