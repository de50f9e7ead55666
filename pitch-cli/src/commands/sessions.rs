//! Session inspection commands

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use comfy_table::{Cell, Color, ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};
use pitch_core::{JsonFileStore, SessionStore, conversation};

/// Sessions inspection arguments
#[derive(Args, Debug)]
pub struct SessionsArgs {
    /// Path to the JSON session store
    #[arg(long, global = true, default_value = "sessions.json")]
    pub store: PathBuf,

    #[command(subcommand)]
    pub command: SessionsCommands,
}

/// Sessions subcommands
#[derive(Subcommand, Debug)]
pub enum SessionsCommands {
    /// List all stored sessions
    List,
    /// Print one session as JSON
    Show {
        /// Session ID to show
        session_id: String,
    },
}

/// Run sessions command
pub fn run(args: SessionsArgs) -> Result<()> {
    let store = JsonFileStore::open(&args.store)
        .with_context(|| format!("Failed to open store at {}", args.store.display()))?;
    let store = Arc::new(store);

    match args.command {
        SessionsCommands::List => list_sessions(&store),
        SessionsCommands::Show { session_id } => show_session(&store, &session_id),
    }
}

fn list_sessions(store: &Arc<JsonFileStore>) -> Result<()> {
    let mut sessions = store.list()?;
    if sessions.is_empty() {
        println!("No stored sessions");
        return Ok(());
    }
    sessions.sort_by(|a, b| a.started_at.cmp(&b.started_at));

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Session").fg(Color::Cyan),
        Cell::new("Student").fg(Color::Cyan),
        Cell::new("Status").fg(Color::Cyan),
        Cell::new("AI Status").fg(Color::Cyan),
        Cell::new("Messages").fg(Color::Cyan),
        Cell::new("Minutes").fg(Color::Cyan),
    ]);

    for session in &sessions {
        let ai_status = session
            .ai_evaluation_status
            .map(|s| s.as_str().to_string())
            .unwrap_or_else(|| "(missing)".to_string());
        let minutes = session
            .duration_minutes
            .map(|m| m.to_string())
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            Cell::new(&session.id),
            Cell::new(&session.student_id),
            Cell::new(session.status.as_str()),
            Cell::new(ai_status),
            Cell::new(conversation::message_count(session)),
            Cell::new(minutes),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn show_session(store: &Arc<JsonFileStore>, session_id: &str) -> Result<()> {
    let session = store
        .get(session_id)?
        .with_context(|| format!("Session not found: {session_id}"))?;
    println!("{}", serde_json::to_string_pretty(&session)?);
    Ok(())
}
