use anyhow::{anyhow, Result};
use kendra_data_source_provider::progress::{HandlerRequest, ProgressEvent};
use kendra_data_source_provider::{app, client};
use lambda_runtime::{run, service_fn, LambdaEvent};

/// Handle a single invocation from the provider host
async fn function_handler(event: LambdaEvent<HandlerRequest>) -> Result<ProgressEvent> {
    Ok(app::current()
        .handle(&event.payload, client::current())
        .await)
}

/// Run an AWS Lambda function that reconciles Kendra data sources on
/// behalf of CloudFormation, reporting progress events back to the
/// host which re-invokes it while the data source settles.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .without_time()
        .init();
    app::init()?;
    client::init().await?;

    run(service_fn(function_handler))
        .await
        .map_err(|e| anyhow!("{:?}", e))
}
