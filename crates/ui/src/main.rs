// crates/ui/src/main.rs
//! archive-view binary.
//!
//! Searches a conversation archive server and renders the results as HTML.
//! With a query argument it runs one search and writes the final container
//! contents to stdout (or `--output`); without one it reads queries line by
//! line from stdin, one trigger activation per line.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use archive_view_client::SearchClient;
use archive_view_ui::history::DEFAULT_RECENT_LIMIT;
use archive_view_ui::{BufferView, SearchController, SearchHistory};

#[derive(Debug, Parser)]
#[command(
    name = "archive-view",
    version,
    about = "Search a conversation archive server and render the results as HTML"
)]
struct Cli {
    /// Query to run once. Omit to read queries line by line from stdin.
    query: Option<String>,

    /// Base URL of the archive server.
    #[arg(long, env = "ARCHIVE_VIEW_URL", default_value = "http://127.0.0.1:5000")]
    base_url: String,

    /// Write the rendered results to this file instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Do not record queries in the search history.
    #[arg(long)]
    no_history: bool,

    /// Print the most recent searches and exit.
    #[arg(long)]
    recent: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Quiet by default; diagnostics (request failures, history trouble) land
    // on stderr without drowning the rendered output.
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::WARN)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    let history = if cli.no_history {
        None
    } else {
        SearchHistory::default_location()
    };

    if cli.recent {
        print_recent(history.as_ref());
        return Ok(());
    }

    let client = SearchClient::new(&cli.base_url);
    let mut controller = SearchController::new(client, BufferView::new());

    match cli.query {
        Some(query) => run_once(&mut controller, &query, history.as_ref(), cli.output.as_deref()).await,
        None => run_interactive(&mut controller, history.as_ref()).await,
    }
}

fn print_recent(history: Option<&SearchHistory>) {
    let entries = history
        .map(|h| h.recent(DEFAULT_RECENT_LIMIT))
        .unwrap_or_default();
    if entries.is_empty() {
        eprintln!("No recent searches.");
        return;
    }
    for entry in entries {
        println!("{}  {}", entry.timestamp, entry.query);
    }
}

fn record_query(history: Option<&SearchHistory>, query: &str) {
    if let Some(history) = history {
        if let Err(e) = history.record(query.trim()) {
            tracing::warn!(error = %e, "failed to record search history (non-fatal)");
        }
    }
}

async fn run_once(
    controller: &mut SearchController<BufferView>,
    query: &str,
    history: Option<&SearchHistory>,
    output: Option<&std::path::Path>,
) -> Result<()> {
    controller.view_mut().set_query(query);
    controller.on_trigger().await;

    if let Some(notice) = controller.view_mut().take_notice() {
        eprintln!("{notice}");
        return Ok(());
    }

    record_query(history, query);

    let html = controller.view().container();
    match output {
        Some(path) => fs::write(path, html)?,
        None => println!("{html}"),
    }
    Ok(())
}

async fn run_interactive(
    controller: &mut SearchController<BufferView>,
    history: Option<&SearchHistory>,
) -> Result<()> {
    if let Some(history) = history {
        let entries = history.recent(DEFAULT_RECENT_LIMIT);
        if !entries.is_empty() {
            eprintln!("Recent searches:");
            for entry in &entries {
                eprintln!("  {}  {}", entry.timestamp, entry.query);
            }
        }
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    eprint!("search> ");
    while let Some(line) = lines.next_line().await? {
        controller.view_mut().set_query(&line);
        controller.on_trigger().await;

        match controller.view_mut().take_notice() {
            Some(notice) => eprintln!("{notice}"),
            None => {
                record_query(history, &line);
                println!("{}", controller.view().container());
            }
        }
        eprint!("search> ");
    }
    eprintln!();
    Ok(())
}
