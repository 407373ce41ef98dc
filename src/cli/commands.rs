use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use crate::config::ViewerConfig;
use crate::display::{format_date, format_inbox_time, truncate_preview};
use crate::models::{MessageCategory, Timestamp};
use crate::session::Session;
use crate::utils::format_path_with_tilde;

const PREVIEW_CHARS: usize = 48;
const PEER_COLUMN_WIDTH: usize = 24;

#[derive(Parser)]
#[command(name = "dm-explorer")]
#[command(version = "0.1.0")]
#[command(about = "Browse direct-message history from a personal data export", long_about = None)]
pub struct Cli {
    /// JSON config file overriding the defaults
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Extra URL prefix to treat as a video platform link (repeatable)
    #[arg(long = "video-host", global = true, value_name = "PREFIX")]
    pub video_hosts: Vec<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List conversations, most recently active first
    Inbox {
        /// Export JSON file
        file: PathBuf,
        /// Only show conversations whose peer or messages contain this text
        #[arg(short, long)]
        search: Option<String>,
        /// Maximum number of conversations to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show every message exchanged with one peer
    Thread {
        /// Export JSON file
        file: PathBuf,
        /// Peer name as shown in the inbox
        peer: String,
    },
    /// Show statistics about the export
    Stats {
        /// Export JSON file
        file: PathBuf,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    match &cli.command {
        Some(Commands::Inbox { file, search, limit }) => {
            show_inbox(&config, file, search.as_deref(), *limit)?;
        }
        Some(Commands::Thread { file, peer }) => {
            show_thread(&config, file, peer)?;
        }
        Some(Commands::Stats { file }) => {
            show_stats(&config, file)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn resolve_config(cli: &Cli) -> Result<ViewerConfig> {
    let mut config = match &cli.config {
        Some(path) => ViewerConfig::load_from(path)?,
        None => ViewerConfig::default(),
    };
    config.add_video_hosts(&cli.video_hosts);
    Ok(config)
}

fn open_session(config: &ViewerConfig, file: &Path) -> Result<Session> {
    let mut session = Session::new(config);
    session
        .load_file(file)
        .with_context(|| format!("Failed to load export {}", format_path_with_tilde(file)))?;
    Ok(session)
}

fn show_inbox(config: &ViewerConfig, file: &Path, search: Option<&str>, limit: Option<usize>) -> Result<()> {
    let mut session = open_session(config, file)?;
    if let Some(query) = search {
        session.set_query(query);
    }

    let inbox = session.inbox();
    if inbox.is_empty() {
        println!("No messages found");
        return Ok(());
    }

    for entry in inbox.iter().take(limit.unwrap_or(usize::MAX)) {
        println!(
            "{:<width$} {:>12}  {}",
            truncate_preview(entry.peer.as_str(), PEER_COLUMN_WIDTH),
            format_inbox_time(&entry.last_timestamp),
            truncate_preview(&entry.preview, PREVIEW_CHARS),
            width = PEER_COLUMN_WIDTH
        );
    }

    Ok(())
}

fn show_thread(config: &ViewerConfig, file: &Path, peer: &str) -> Result<()> {
    let mut session = open_session(config, file)?;
    if !session.select(peer) {
        bail!("No conversation with '{}' in {}", peer, format_path_with_tilde(file));
    }

    println!("Conversation with {}", peer);
    println!("================================");

    for message in session.thread().unwrap_or_default() {
        let direction = if message.is_outgoing { "you" } else { peer };
        let body = match &message.category {
            MessageCategory::PlainText => message.original_content.clone(),
            MessageCategory::BracketedMedia(url) => format!("[media] {}", url),
            MessageCategory::PlatformVideoLink(url) => format!("[video] {}", url),
            MessageCategory::GenericLink(url) => format!("[link] {}", url),
        };
        println!("{} | {}: {}", format_date(&message.timestamp), direction, body);
    }

    Ok(())
}

fn show_stats(config: &ViewerConfig, file: &Path) -> Result<()> {
    let session = open_session(config, file)?;
    let Some(index) = session.index() else {
        bail!("No export loaded");
    };

    let mut counts = [0usize; 4];
    let mut unparsable_dates = 0;
    for conversation in index.iter() {
        for message in &conversation.messages {
            let slot = match session.classifier().classify(&message.content) {
                MessageCategory::PlainText => 0,
                MessageCategory::BracketedMedia(_) => 1,
                MessageCategory::PlatformVideoLink(_) => 2,
                MessageCategory::GenericLink(_) => 3,
            };
            counts[slot] += 1;
            if message.timestamp().is_unparsable() {
                unparsable_dates += 1;
            }
        }
    }

    println!("Direct Message Export Statistics");
    println!("================================");
    println!("Conversations: {}", index.len());
    println!("Total messages: {}", index.message_count());
    println!("  Text: {}", counts[0]);
    println!("  Media: {}", counts[1]);
    println!("  Video links: {}", counts[2]);
    println!("  Other links: {}", counts[3]);
    println!("Unparsable dates: {}", unparsable_dates);
    println!();
    println!("Export file: {}", format_path_with_tilde(file));

    let activity: Vec<Timestamp> =
        index.iter().map(|c| c.last_activity()).filter(|ts| !ts.is_unparsable()).collect();
    if let Some(newest) = activity.iter().max() {
        println!("Most recent activity: {}", format_date(newest));
    }
    if let Some(oldest) = activity.iter().min() {
        println!("Least recent activity: {}", format_date(oldest));
    }

    Ok(())
}
