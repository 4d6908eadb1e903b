mod config;
mod error;
mod fetch;
mod notify;
mod parser;
mod pipeline;
mod store;

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::error;

use crate::config::Settings;
use crate::error::FatalError;
use crate::parser::ParseOutcome;
use crate::pipeline::RunReport;
use crate::store::NotifiedStore;

#[derive(Parser)]
#[command(
    name = "intern_notify",
    about = "Watches the Summer internships README for new Canada SWE postings"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the README and send webhook notifications for new postings
    Run,
    /// Fetch and print matching postings without sending or saving anything
    Check {
        /// Parse a local file instead of fetching the README
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    let settings = Settings::load();

    let result = match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run(&settings),
        Commands::Check { file } => check(&settings, file.as_deref()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("ERROR: {:#}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(settings: &Settings) -> Result<(), FatalError> {
    let webhook = std::env::var(notify::WEBHOOK_ENV)
        .map_err(|_| FatalError::MissingWebhook(notify::WEBHOOK_ENV))?;
    let timeout = Duration::from_secs(settings.timeout_secs);

    let doc = fetch::fetch_text(&settings.readme_url, timeout)?;
    let mut store = NotifiedStore::load(Path::new(&settings.store_path));
    let client = notify::WebhookClient::new(webhook, timeout)?;

    let report = pipeline::process_document(&doc, &mut store, |p| client.send(p))?;
    store.save_if_changed()?;
    print_report(&report);
    Ok(())
}

fn print_report(report: &RunReport) {
    if report.notified > 0 {
        println!("Saved {} new notified postings.", report.notified);
    } else {
        println!("No new Canada postings to notify.");
    }
    println!(
        "Matched {} rows: {} notified, {} already seen, {} send failures.",
        report.matched, report.notified, report.duplicates, report.failures
    );
}

fn check(settings: &Settings, file: Option<&Path>) -> Result<(), FatalError> {
    let timeout = Duration::from_secs(settings.timeout_secs);
    let doc = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => fetch::fetch_text(&settings.readme_url, timeout)?,
    };

    let postings = match parser::parse_document(&doc) {
        ParseOutcome::NoSection => return Err(FatalError::SectionNotFound),
        ParseOutcome::NoTable => {
            println!("No table rows found.");
            return Ok(());
        }
        ParseOutcome::Postings(postings) => postings,
    };

    let store = NotifiedStore::load(Path::new(&settings.store_path));
    println!("{} matching postings:", postings.len());
    for p in &postings {
        let status = if store.contains(&p.dedup_key()) {
            "seen"
        } else {
            "NEW "
        };
        println!(
            "  [{}] {} | {} | {} | {} | {}",
            status,
            p.company,
            p.role,
            p.location,
            p.age,
            p.link.as_deref().unwrap_or("no link"),
        );
    }
    Ok(())
}
