//! CLI administration tool for hash-shortener.
//!
//! Inspects a snapshot file offline, without a running server.
//!
//! # Usage
//!
//! ```bash
//! # List every mapping in the snapshot
//! cargo run --bin admin -- list
//!
//! # Show a single short link
//! cargo run --bin admin -- show 246f633
//!
//! # Check that the snapshot file parses
//! cargo run --bin admin -- --snapshot /var/lib/hash-shortener/snapshot.db check
//! ```
//!
//! # Environment Variables
//!
//! - `SNAPSHOT_PATH` (optional): snapshot file, overridden by `--snapshot`

use hash_shortener::domain::entities::ListEntry;
use hash_shortener::domain::repositories::RedirectionStore;
use hash_shortener::infrastructure::persistence::InMemoryStore;
use hash_shortener::infrastructure::snapshot::{RestoreOutcome, SnapshotManager};
use hash_shortener::utils::code_generator::is_valid_code;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// CLI tool for inspecting hash-shortener snapshots.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Snapshot file to read
    #[arg(short, long, env = "SNAPSHOT_PATH", default_value = "snapshot.db")]
    snapshot: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all short links
    List,

    /// Show a single short link
    Show {
        /// Short identifier (7 hex characters)
        hash: String,
    },

    /// Check that the snapshot file is readable and well-formed
    Check,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::List => list_links(&cli.snapshot)?,
        Commands::Show { hash } => show_link(&cli.snapshot, &hash)?,
        Commands::Check => check_snapshot(&cli.snapshot)?,
    }

    Ok(())
}

/// Restores the snapshot at `path` into a fresh store.
fn load(path: &Path) -> Result<(InMemoryStore, RestoreOutcome)> {
    let store = InMemoryStore::new();
    let manager = SnapshotManager::new(path, Duration::from_secs(1));

    let outcome = manager
        .restore(&store)
        .with_context(|| format!("Failed to read snapshot {}", path.display()))?;

    Ok((store, outcome))
}

fn sorted_entries(store: &InMemoryStore) -> Vec<ListEntry> {
    let mut entries: Vec<ListEntry> = store
        .enumerate()
        .into_iter()
        .map(|(hash, record)| ListEntry::from_record(hash, record))
        .collect();
    entries.sort_by(|a, b| b.hits.cmp(&a.hits).then_with(|| a.hash.cmp(&b.hash)));
    entries
}

/// Lists all mappings, most visited first.
///
/// # Output Format
///
/// ```text
/// 🔗 Short Links
///
///   Hash     Hits       URL
///   ───────────────────────────────────────────────
///   246f633  12         https://www.example.com/page
/// ```
fn list_links(path: &Path) -> Result<()> {
    println!("{}", "🔗 Short Links".bright_blue().bold());
    println!();

    let (store, _) = load(path)?;
    let entries = sorted_entries(&store);

    if entries.is_empty() {
        println!("{}", "  No links found".yellow());
        return Ok(());
    }

    println!(
        "  {:<8} {:<10} {}",
        "Hash".bright_white().bold(),
        "Hits".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for entry in &entries {
        println!(
            "  {:<8} {:<10} {}",
            entry.hash.cyan(),
            entry.hits.to_string().bright_white(),
            entry.original_url
        );
    }

    println!();
    println!(
        "  Total: {}",
        entries.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

fn show_link(path: &Path, hash: &str) -> Result<()> {
    if !is_valid_code(hash) {
        anyhow::bail!("'{hash}' is not a valid short identifier");
    }

    let (store, _) = load(path)?;
    let record = store
        .get(hash)
        .with_context(|| format!("Short link '{hash}' not found"))?;

    println!("  Hash: {}", hash.cyan());
    println!("  URL:  {}", record.original_url);
    println!("  Hits: {}", record.hits.to_string().bright_white().bold());

    Ok(())
}

/// Reports whether the snapshot parses and how much it holds.
///
/// Entries whose key is not a valid short identifier are listed as warnings;
/// the redirect endpoint rejects such keys before lookup.
fn check_snapshot(path: &Path) -> Result<()> {
    println!("{}", "🔍 Checking snapshot...".bright_blue());

    let (store, outcome) = load(path)?;

    match outcome {
        RestoreOutcome::Missing => {
            println!("{}", "⚠️  Snapshot file not found".yellow());
            println!("  Path: {}", path.display().to_string().bright_black());
            return Ok(());
        }
        RestoreOutcome::Empty => {
            println!("{}", "✅ Snapshot is empty".green());
            return Ok(());
        }
        RestoreOutcome::Restored(_) => {}
    }

    let entries = sorted_entries(&store);
    let total_hits: u64 = entries.iter().map(|e| e.hits).sum();
    let invalid: Vec<&ListEntry> = entries.iter().filter(|e| !is_valid_code(&e.hash)).collect();

    println!("{}", "✅ Snapshot is well-formed".green().bold());
    println!();
    println!("  Entries:    {}", entries.len().to_string().bright_white().bold());
    println!("  Total hits: {}", total_hits.to_string().bright_white().bold());

    if !invalid.is_empty() {
        println!();
        println!(
            "{}",
            format!("⚠️  {} entries have malformed identifiers:", invalid.len()).yellow()
        );
        for entry in invalid {
            println!("  {}", entry.hash.red());
        }
    }

    println!();

    Ok(())
}
