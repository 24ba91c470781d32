use anyhow::{Context, Result};
use kendra_data_source_provider::progress::{HandlerRequest, OperationStatus};
use kendra_data_source_provider::{app, client};
use std::env::args;
use tokio::fs::read_to_string;
use tracing::info;

/// Run a single handler invocation read from a JSON file, printing
/// the resulting progress event. In-progress events are fed back
/// until the handler settles.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .without_time()
        .init();
    app::init()?;
    client::init().await?;

    let path = args()
        .nth(1)
        .context("usage: command <request.json>")?;
    let contents = read_to_string(&path)
        .await
        .with_context(|| format!("Failed to read handler request from {:?}", &path))?;
    let mut request: HandlerRequest = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse handler request from {:?}", &path))?;

    loop {
        let event = app::current().handle(&request, client::current()).await;
        println!("{}", serde_json::to_string_pretty(&event)?);
        if event.status != OperationStatus::InProgress {
            break;
        }
        info!(
            "Re-invoking after {} seconds",
            event.callback_delay_seconds.unwrap_or_default()
        );
        tokio::time::sleep(std::time::Duration::from_secs(
            event.callback_delay_seconds.unwrap_or_default().into(),
        ))
        .await;
        request.callback_context = event.callback_context;
    }
    Ok(())
}
