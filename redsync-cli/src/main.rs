use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use redsync::model::Categories;
use redsync::serialize::SnapshotFormat;
use std::path::PathBuf;
use std::str::FromStr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "redsync")]
#[command(about = "Export, import and wipe Reddit account state")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Export account state to a snapshot file
    Export {
        /// Snapshot file to write
        #[arg(short, long)]
        output_file: Option<PathBuf>,

        /// Snapshot file format
        #[arg(long, default_value = "yaml", value_parser = SnapshotFormat::from_str)]
        format: SnapshotFormat,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// Replay a snapshot file onto the account
    Import {
        /// Snapshot file to read
        #[arg(short, long)]
        input_file: Option<PathBuf>,

        /// Snapshot file format
        #[arg(long, default_value = "yaml", value_parser = SnapshotFormat::from_str)]
        format: SnapshotFormat,

        /// Wipe the selected categories before importing
        #[arg(long)]
        wipe_first: bool,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// Clear account state
    Wipe {
        #[command(flatten)]
        common: CommonArgs,
    },
}

#[derive(Args, Debug, Clone)]
struct CommonArgs {
    /// Credential profile from the config file
    #[arg(long, default_value = "default")]
    profile: String,

    #[command(flatten)]
    categories: CategoryArgs,
}

/// Category toggles. Defaults: friends, subscriptions and multireddits on,
/// saved off.
#[derive(Args, Debug, Clone)]
struct CategoryArgs {
    /// Include friends
    #[arg(short = 'f', long)]
    friends: bool,
    /// Exclude friends
    #[arg(long, conflicts_with = "friends")]
    no_friends: bool,

    /// Include saved items
    #[arg(short = 'v', long)]
    saved: bool,
    /// Exclude saved items
    #[arg(long, conflicts_with = "saved")]
    no_saved: bool,

    /// Include subreddit subscriptions
    #[arg(short = 's', long)]
    subscriptions: bool,
    /// Exclude subreddit subscriptions
    #[arg(long, conflicts_with = "subscriptions")]
    no_subscriptions: bool,

    /// Include multireddits
    #[arg(short = 'm', long)]
    multireddits: bool,
    /// Exclude multireddits
    #[arg(long, conflicts_with = "multireddits")]
    no_multireddits: bool,
}

impl CategoryArgs {
    fn resolve(&self) -> Categories {
        let mut c = Categories::default();
        if self.friends {
            c.friends = true;
        }
        if self.no_friends {
            c.friends = false;
        }
        if self.saved {
            c.saved = true;
        }
        if self.no_saved {
            c.saved = false;
        }
        if self.subscriptions {
            c.subscriptions = true;
        }
        if self.no_subscriptions {
            c.subscriptions = false;
        }
        if self.multireddits {
            c.multireddits = true;
        }
        if self.no_multireddits {
            c.multireddits = false;
        }
        c
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Export {
            output_file,
            format,
            common,
        } => {
            let output_file =
                require_file(output_file, "exporting requires an output file (--output-file)")?;
            commands::export::run(
                &common.profile,
                &output_file,
                format,
                common.categories.resolve(),
            )
            .await
        }
        Commands::Import {
            input_file,
            format,
            wipe_first,
            common,
        } => {
            let input_file =
                require_file(input_file, "importing requires an input file (--input-file)")?;
            commands::import::run(
                &common.profile,
                &input_file,
                format,
                common.categories.resolve(),
                wipe_first,
            )
            .await
        }
        Commands::Wipe { common } => {
            commands::wipe::run(&common.profile, common.categories.resolve()).await
        }
    }
}

/// File-path validation runs before credentials are loaded or any network
/// call is made.
fn require_file(path: Option<PathBuf>, message: &str) -> Result<PathBuf> {
    match path {
        Some(path) => Ok(path),
        None => bail!("{}", message),
    }
}
