//! Terminal presentation surface for Parlor.
//!
//! A rustyline REPL around the session controller: plain lines are
//! submitted as chat messages, slash commands drive the rest. The
//! controller owns all conversation state; this binary only renders it
//! and forwards intents.

mod markdown;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use parlor_client::HttpAssistantBackend;
use parlor_core::{ChatSession, ClearOutcome, SessionConfig, SubmitOutcome};
use parlor_types::{ConversationMessage, MessageRole};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "parlor")]
#[command(about = "Parlor - chat with a remote assistant backend", long_about = None)]
struct Cli {
    /// Base URL of the assistant backend (overrides config and environment)
    #[arg(long)]
    backend_url: Option<String>,
}

/// Prints one transcript message in its role's color.
fn render_message(message: &ConversationMessage) {
    match message.role {
        MessageRole::User => {
            println!("{}", format!("> {}", message.content).green());
        }
        MessageRole::Assistant => {
            for line in markdown::render_markdown(&message.content).lines() {
                println!("{}", line.bright_blue());
            }
        }
        MessageRole::System => {
            println!("{}", message.content.red());
        }
    }
}

/// Prints transcript entries added since the last render and returns the
/// new high-water mark.
fn render_new_messages(session: &ChatSession, rendered: usize) -> usize {
    for message in &session.transcript()[rendered..] {
        render_message(message);
    }
    session.transcript().len()
}

/// Shows the banner once, then dismisses it.
fn render_banner(session: &mut ChatSession) {
    let text = session
        .banner()
        .filter(|banner| banner.visible)
        .map(|banner| banner.text.clone());
    if let Some(text) = text {
        println!("{}", format!("! {}", text).yellow());
        session.dismiss_banner();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = SessionConfig::load()?;
    if let Some(url) = cli.backend_url {
        config.backend_url = url;
    }

    let backend = Arc::new(HttpAssistantBackend::new(config.backend_url.clone()));
    let mut session = ChatSession::new(backend, config);

    println!("{}", "=== Parlor ===".bright_magenta().bold());
    println!(
        "{}",
        "Type a message to chat, '/clear' to reset the conversation, '/quit' to exit."
            .bright_black()
    );
    println!();

    session.initialize().await;
    render_banner(&mut session);

    let mut rl = DefaultEditor::new()?;
    let mut rendered = 0usize;

    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(&line);

                match trimmed {
                    "/quit" | "/exit" => {
                        println!("{}", "Goodbye!".bright_green());
                        break;
                    }
                    "/clear" => {
                        match session.clear().await {
                            ClearOutcome::Cleared => {
                                println!("{}", "Conversation cleared.".bright_green());
                                rendered = 0;
                            }
                            ClearOutcome::Failed => render_banner(&mut session),
                        }
                        continue;
                    }
                    _ => {}
                }

                // The submit is awaited to completion, so sends stay
                // serialized and the prompt doubles as the busy indicator.
                match session.submit(trimmed).await {
                    SubmitOutcome::Rejected => continue,
                    SubmitOutcome::Answered | SubmitOutcome::Failed => {
                        rendered = render_new_messages(&session, rendered);
                        render_banner(&mut session);
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type '/quit' to exit.".yellow());
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    Ok(())
}
