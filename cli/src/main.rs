//! # Folio Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This file serves as the main entry point for the Folio CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to appropriate command handlers
//!
//! ## Examples
//!
//! ```bash
//! # Chat with the portfolio assistant
//! folio chat
//!
//! # One-off questions
//! folio ask "What technologies do you use?"
//! folio classify "How can I reach you?"
//!
//! # Theme preference and contact form
//! folio theme toggle
//! folio contact --name Ada --email ada@example.com --subject Hi --message "Hello!"
//!
//! # Run a command with increased verbosity
//! folio -vv topics
//! ```
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "folio",
    about = "Folio: portfolio assistant, theme preference and contact form",
    long_about = "Chat with the portfolio assistant, inspect how it routes questions,\n\
                  manage the light/dark theme preference and fill in the contact form.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    /// Interactive chat with the portfolio assistant.
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    /// Print a single reply to a question.
    #[command(alias = "a")]
    Ask(commands::ask::AskArgs),
    /// Print the topic a question is routed to.
    Classify(commands::classify::ClassifyArgs),
    /// List topics, triggers and reply counts in priority order.
    Topics(commands::topics::TopicsArgs),
    /// Show, set or toggle the theme preference.
    #[command(alias = "t")]
    Theme(commands::theme::ThemeArgs),
    /// Fill in the contact form.
    Contact(commands::contact::ContactArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Chat(args) => commands::chat::handle_chat(args).await,
        Commands::Ask(args) => commands::ask::handle_ask(args).await,
        Commands::Classify(args) => commands::classify::handle_classify(args).await,
        Commands::Topics(args) => commands::topics::handle_topics(args).await,
        Commands::Theme(args) => commands::theme::handle_theme(args).await,
        Commands::Contact(args) => commands::contact::handle_contact(args).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
