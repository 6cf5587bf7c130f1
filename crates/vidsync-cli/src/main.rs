//! VidSync CLI - Command-line client for the video catalog
//!
//! Provides commands for:
//! - Signing in and out under a display name
//! - Listing your videos, in-progress ones first
//! - Viewing, playing, adding and editing videos
//! - Reading and posting comments

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod context;
mod output;

use commands::{
    comments::{CommentCommand, CommentsCommand},
    session::{LoginCommand, LogoutCommand, WhoamiCommand},
    videos::{CreateCommand, EditCommand, ListCommand, PlayCommand, ShowCommand},
};
use context::AppContext;
use output::{get_formatter, OutputFormat};
use vidsync_core::config::Config;

#[derive(Debug, Parser)]
#[command(name = "vidsync", version, about = "Client for a shared video catalog")]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Use alternate config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sign in under a display name
    Login(LoginCommand),
    /// Sign out
    Logout(LogoutCommand),
    /// Show who is signed in
    Whoami(WhoamiCommand),
    /// List your videos
    List(ListCommand),
    /// Show one video
    Show(ShowCommand),
    /// Start playing a video and mark it in progress
    Play(PlayCommand),
    /// List comments on a video
    Comments(CommentsCommand),
    /// Post a comment on a video
    Comment(CommentCommand),
    /// Add a video
    Create(CreateCommand),
    /// Edit one of your videos
    Edit(EditCommand),
}

impl Commands {
    async fn execute(&self, ctx: &AppContext) -> Result<()> {
        match self {
            Commands::Login(cmd) => cmd.execute(ctx).await,
            Commands::Logout(cmd) => cmd.execute(ctx).await,
            Commands::Whoami(cmd) => cmd.execute(ctx).await,
            Commands::List(cmd) => cmd.execute(ctx).await,
            Commands::Show(cmd) => cmd.execute(ctx).await,
            Commands::Play(cmd) => cmd.execute(ctx).await,
            Commands::Comments(cmd) => cmd.execute(ctx).await,
            Commands::Comment(cmd) => cmd.execute(ctx).await,
            Commands::Create(cmd) => cmd.execute(ctx).await,
            Commands::Edit(cmd) => cmd.execute(ctx).await,
        }
    }
}

/// Reads the config file; an explicit `--config` must exist and parse
fn load_config(explicit: Option<&PathBuf>) -> Result<Config> {
    let config = match explicit {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load_or_default(&Config::default_path()),
    };

    let errors = config.validate();
    if !errors.is_empty() {
        let joined = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        anyhow::bail!("Invalid configuration: {}", joined);
    }
    Ok(config)
}

/// `-v` wins over `RUST_LOG`, which wins over `logging.level`
fn env_filter(verbose: u8, config_level: &str) -> EnvFilter {
    match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config_level)),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    }
}

fn init_tracing(verbose: u8, config: &Config) {
    let filter = env_filter(verbose, &config.logging.level);
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if config.logging.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn run(cli: &Cli, format: OutputFormat) -> Result<()> {
    let config = load_config(cli.config.as_ref())?;
    init_tracing(cli.verbose, &config);
    let ctx = AppContext::new(config, format);
    cli.command.execute(&ctx).await
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let format = OutputFormat::from_json_flag(cli.json);

    if let Err(err) = run(&cli, format).await {
        get_formatter(format).error(&format!("{:#}", err));
        std::process::exit(1);
    }
}
