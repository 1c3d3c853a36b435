//! `plume chat` — single-turn or interactive assistant session.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use plume_core::{ChatHistory, ChatMessage, derive_filename};
use plume_llm::Provider;
use plume_tools::chat;

use crate::commands::finish_with_error;
use crate::config;
use crate::export;
use crate::output;

pub async fn handle(
    model: Option<&str>,
    message: Option<String>,
    export_path: Option<PathBuf>,
) -> Result<()> {
    let provider = config::select_provider(model)?;
    let mut history = ChatHistory::new();

    match message {
        Some(message) => {
            send_turn(provider.as_ref(), &mut history, &message).await?;
        }
        None => {
            interactive(provider.as_ref(), &mut history).await?;
        }
    }

    if let Some(path) = export_path {
        if history.is_empty() {
            output::warning("nothing to export");
        } else {
            export::write(&path, &history.transcript())?;
        }
    }

    Ok(())
}

/// One turn: record the user message, call the provider, record the reply.
/// Only the latest message goes out; the history is display state.
async fn send_turn(
    provider: &dyn Provider,
    history: &mut ChatHistory,
    message: &str,
) -> Result<()> {
    let spinner = output::spinner("Thinking...");
    match chat::run(provider, message).await {
        Ok(reply) => {
            output::spinner_clear(&spinner);
            history.push(ChatMessage::user(message));
            output::reply(&reply);
            history.push(ChatMessage::assistant(reply));
            Ok(())
        }
        Err(err) => finish_with_error(&spinner, "Failed to get a response", err),
    }
}

/// Read-eval loop. `/export` writes the transcript, `/clear` resets the
/// displayed history, `/quit` leaves.
async fn interactive(provider: &dyn Provider, history: &mut ChatHistory) -> Result<()> {
    output::header("plume chat — /export, /clear, /quit");

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();

        match line {
            "" => continue,
            "/quit" | "/exit" => break,
            "/clear" => {
                history.clear();
                output::success("Chat history cleared.");
            }
            "/export" => {
                if history.is_empty() {
                    output::warning("nothing to export");
                } else {
                    let path = PathBuf::from(derive_filename("", "chat_history", "txt"));
                    export::write(&path, &history.transcript())?;
                }
            }
            message => {
                // A failed turn stays inside the session; the user can retry
                // or leave.
                if let Err(e) = send_turn(provider, history, message).await {
                    output::error(&e.to_string());
                }
            }
        }
    }

    Ok(())
}
