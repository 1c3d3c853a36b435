//! Command dispatch.

pub mod blog;
pub mod chat;
pub mod csv;
pub mod document;
pub mod explain;
pub mod providers;
pub mod sql;
pub mod website;

use anyhow::Result;
use indicatif::ProgressBar;

use crate::cli::{Cli, Command};
use crate::output;

pub async fn handle(cli: Cli) -> Result<()> {
    let model = cli.model.as_deref();
    match cli.command {
        Command::Chat { message, export } => chat::handle(model, message, export).await,
        Command::Blog {
            title,
            keywords,
            words,
            out,
            save,
            html,
        } => blog::handle(model, title, keywords, words, out, save, html).await,
        Command::Csv { file, question } => csv::handle(model, file, question).await,
        Command::Sql {
            description,
            dialect,
            context,
            out,
            save,
        } => sql::handle(model, description, dialect, context, out, save).await,
        Command::Explain {
            file,
            language,
            out,
            html,
        } => explain::handle(model, file, language, out, html).await,
        Command::Website { url, out, html } => website::handle(model, url, out, html).await,
        Command::Document { file, out } => document::handle(model, file, out).await,
        Command::Providers { action } => providers::handle(model, action).await,
    }
}

/// Close out a failed provider call the way the UI layer treats errors:
/// invalid input clears the spinner and warns (the action was aborted before
/// any network call, non-fatal); request and response failures finish the
/// spinner with the action's error banner and propagate.
pub(crate) fn finish_with_error(
    spinner: &ProgressBar,
    banner: &str,
    err: plume_llm::Error,
) -> Result<()> {
    match err {
        plume_llm::Error::InvalidInput(message) => {
            output::spinner_clear(spinner);
            output::warning(&message);
            Ok(())
        }
        other => {
            output::spinner_error(spinner, banner);
            Err(other.into())
        }
    }
}
