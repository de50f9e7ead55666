use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "pitch", about = "Practice-session inspection and status repair")]
#[command(version, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Back-fill missing AI evaluation statuses in a session store
    Reconcile(commands::reconcile::ReconcileArgs),
    /// Inspect stored sessions
    Sessions(commands::sessions::SessionsArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Reconcile(args) => commands::reconcile::run(args),
        Commands::Sessions(args) => commands::sessions::run(args),
    }
}
