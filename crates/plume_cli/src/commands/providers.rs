//! `plume providers` subcommands.

use anyhow::Result;
use plume_llm::{GeminiProvider, RelayProvider};
use plume_tools::chat;

use crate::cli::ProvidersAction;
use crate::config;
use crate::output;

pub async fn handle(model: Option<&str>, action: ProvidersAction) -> Result<()> {
    match action {
        ProvidersAction::List => list(),
        ProvidersAction::Test => test(model).await,
    }
}

fn list() -> Result<()> {
    let status = config::path_status();
    let active = config::active_path();

    output::header("Call paths");

    let columns = ["Path", "Status", "Source"];
    let rows = vec![
        vec![
            config::CallPath::Relay.as_str().to_string(),
            describe(status.relay_configured, active == Some(config::CallPath::Relay)),
            RelayProvider::RELAY_URL_ENV.to_string(),
        ],
        vec![
            config::CallPath::Direct.as_str().to_string(),
            describe(
                status.direct_configured,
                active == Some(config::CallPath::Direct),
            ),
            GeminiProvider::API_KEY_ENV.to_string(),
        ],
    ];

    let mut table = output::table(&columns);
    for row in &rows {
        table.add_row(row.clone());
    }
    output::table_print(&table, &columns, &rows);

    if active.is_none() {
        output::warning("no call path configured");
    }

    Ok(())
}

fn describe(configured: bool, active: bool) -> String {
    match (configured, active) {
        (true, true) => "active".to_string(),
        (true, false) => "configured".to_string(),
        (false, _) => "not configured".to_string(),
    }
}

async fn test(model: Option<&str>) -> Result<()> {
    let provider = config::select_provider(model)?;
    output::kv("path", provider.provider_id());

    let spinner = output::spinner("Testing call path...");
    match chat::run(provider.as_ref(), "Reply with a single word: pong").await {
        Ok(reply) => {
            output::spinner_success(&spinner, "Call path is working");
            output::dim(reply.trim());
            Ok(())
        }
        Err(err) => {
            output::spinner_error(&spinner, "Call path test failed");
            Err(err.into())
        }
    }
}
