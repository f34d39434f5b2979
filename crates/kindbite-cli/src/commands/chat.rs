//! Interactive chat REPL.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use console::style;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Config, Editor};

use kindbite_engine::ListingStats;
use kindbite_session::{ChatSession, SessionConfig};

use crate::commands::stats::print_stats;
use crate::listings;

#[derive(Args)]
pub struct ChatArgs {
    /// Path to a JSON file with the current food listings
    #[arg(long)]
    pub listings: Option<PathBuf>,

    /// Reply immediately instead of pacing with a thinking pause
    #[arg(long)]
    pub no_delay: bool,
}

pub async fn run(args: ChatArgs) -> Result<()> {
    let listings = match &args.listings {
        Some(path) => listings::load(path)?,
        None => Vec::new(),
    };

    let mut config = SessionConfig::new();
    if args.no_delay {
        config = config.without_thinking_delay();
    }

    let mut session = ChatSession::new(config).with_listings(listings);
    session.open();

    if let Some(welcome) = session.messages().first() {
        println!("{}", style(&welcome.text).green());
    }
    println!(
        "{}",
        style("Type /stats for the current snapshot, /quit to leave.").dim()
    );

    let editor_config = Config::builder()
        .history_ignore_space(true)
        .auto_add_history(true)
        .build();
    let mut editor: Editor<(), DefaultHistory> = Editor::with_config(editor_config)?;

    loop {
        match editor.readline("you> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                match line {
                    "/quit" | "/exit" => break,
                    "/stats" => {
                        print_stats(&ListingStats::from_listings(session.listings()));
                        continue;
                    }
                    _ => {}
                }
                if let Some(reply) = session.submit(line).await {
                    println!("{}", style(&reply.text).green());
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C - keep the session, remind how to leave
                println!();
                println!("{}", style("(Interrupted - type /quit to exit)").dim());
                continue;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl+D - exit
                println!();
                break;
            }
            Err(e) => {
                eprintln!("input error: {e}");
                break;
            }
        }
    }

    session.close();
    println!("{}", style("Goodbye!").dim());
    Ok(())
}
