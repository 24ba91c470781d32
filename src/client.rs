//! Defines the Kendra operations used by the handlers, and the global
//! Kendra client.

use crate::configuration;
use crate::model::{DataSourceKey, UpdateRequest};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use aws_config::from_env;
use aws_sdk_kendra::operation::describe_data_source::{
    DescribeDataSourceError, DescribeDataSourceOutput,
};
use aws_sdk_kendra::operation::update_data_source::{
    UpdateDataSourceError, UpdateDataSourceOutput,
};
use aws_sdk_kendra::Client;
use once_cell::sync::OnceCell;
use std::env;

/// The remote operations a handler may issue. Implemented by the SDK
/// client, and by fakes in tests.
#[async_trait]
pub trait KendraApi: Send + Sync {
    async fn update_data_source(
        &self,
        request: UpdateRequest,
    ) -> Result<UpdateDataSourceOutput, UpdateDataSourceError>;

    async fn describe_data_source(
        &self,
        key: &DataSourceKey,
    ) -> Result<DescribeDataSourceOutput, DescribeDataSourceError>;
}

#[async_trait]
impl KendraApi for Client {
    async fn update_data_source(
        &self,
        request: UpdateRequest,
    ) -> Result<UpdateDataSourceOutput, UpdateDataSourceError> {
        self.update_data_source()
            .id(request.id)
            .index_id(request.index_id)
            .set_name(request.name)
            .set_description(request.description)
            .set_schedule(request.schedule)
            .set_role_arn(request.role_arn)
            .set_configuration(request.configuration.as_ref().map(configuration::to_sdk))
            .send()
            .await
            .map_err(|e| e.into_service_error())
    }

    async fn describe_data_source(
        &self,
        key: &DataSourceKey,
    ) -> Result<DescribeDataSourceOutput, DescribeDataSourceError> {
        self.describe_data_source()
            .id(&key.id)
            .index_id(&key.index_id)
            .send()
            .await
            .map_err(|e| e.into_service_error())
    }
}

/// Endpoint overrides may omit the scheme, in which case HTTPS is
/// assumed.
fn with_scheme(endpoint_url: String) -> String {
    if endpoint_url.starts_with("http://") || endpoint_url.starts_with("https://") {
        endpoint_url
    } else {
        format!("https://{}", endpoint_url)
    }
}

/// Global Kendra client instance.
static CURRENT: OnceCell<Client> = OnceCell::new();

/// Initialize the global Kendra client. `AWS_ENDPOINT_URL` points it
/// at a Kendra-compatible endpoint such as a VPC interface endpoint or
/// a local stub; the region still comes from the environment, since
/// data source ARNs and index lookups are regional.
pub async fn init() -> Result<()> {
    let kendra_config = if let Ok(endpoint_url) = env::var("AWS_ENDPOINT_URL") {
        from_env().endpoint_url(with_scheme(endpoint_url)).load()
    } else {
        from_env().load()
    }
    .await;
    let client = Client::new(&kendra_config);
    CURRENT
        .set(client)
        .map_err(|_| anyhow!("client::CURRENT was already initialized"))
}

/// Get the current Kendra client instance, or panic if it hasn't been
/// initialized.
pub fn current() -> &'static Client {
    CURRENT.get().expect("client is not initialized")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_hosts_get_https() {
        assert_eq!(
            with_scheme(String::from("vpce-0abc.kendra.us-east-1.vpce.amazonaws.com")),
            "https://vpce-0abc.kendra.us-east-1.vpce.amazonaws.com"
        );
    }

    #[test]
    fn explicit_schemes_are_kept() {
        assert_eq!(
            with_scheme(String::from("http://localhost:4566")),
            "http://localhost:4566"
        );
    }
}
