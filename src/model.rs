//! Defines the resource model and the conversions between it and the
//! Kendra request and response shapes.

use crate::configuration::{self, DataSourceConfiguration};
use crate::progress::RequestContext;
use aws_sdk_kendra::operation::describe_data_source::DescribeDataSourceOutput;
use serde::{Deserialize, Serialize};

/// The desired or observed state of an `AWS::Kendra::DataSource`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceModel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_source_configuration: Option<DataSourceConfiguration>,

    /// Read-only. Always derived from the request context and the data
    /// source identity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
}

impl ResourceModel {
    /// The identity of the data source described by this model, if
    /// both halves are present.
    pub fn key(&self) -> Option<DataSourceKey> {
        match (&self.index_id, &self.id) {
            (Some(index_id), Some(id)) => Some(DataSourceKey {
                index_id: index_id.clone(),
                id: id.clone(),
            }),
            _ => None,
        }
    }
}

/// A data source is identified by its own id within the index that
/// owns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSourceKey {
    pub index_id: String,
    pub id: String,
}

/// Builds the ARN of a data source.
pub trait ArnBuilder: Send + Sync {
    fn build(&self, context: &RequestContext, key: &DataSourceKey) -> String;
}

/// The ARN layout used by Kendra.
#[derive(Debug, Clone, Copy, Default)]
pub struct DataSourceArnBuilder;

impl ArnBuilder for DataSourceArnBuilder {
    fn build(&self, context: &RequestContext, key: &DataSourceKey) -> String {
        format!(
            "arn:{}:kendra:{}:{}:index/{}/data-source/{}",
            context.aws_partition, context.region, context.aws_account_id, key.index_id, key.id
        )
    }
}

impl<F> ArnBuilder for F
where
    F: Fn(&RequestContext, &DataSourceKey) -> String + Send + Sync,
{
    fn build(&self, context: &RequestContext, key: &DataSourceKey) -> String {
        self(context, key)
    }
}

/// The mutable fields sent with `UpdateDataSource`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateRequest {
    pub id: String,
    pub index_id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub schedule: Option<String>,
    pub role_arn: Option<String>,
    pub configuration: Option<DataSourceConfiguration>,
}

/// Builds the `UpdateDataSource` parameters for a model.
pub fn to_update_request(key: &DataSourceKey, model: &ResourceModel) -> UpdateRequest {
    UpdateRequest {
        id: key.id.clone(),
        index_id: key.index_id.clone(),
        name: model.name.clone(),
        description: model.description.clone(),
        schedule: model.schedule.clone(),
        role_arn: model.role_arn.clone(),
        configuration: model.data_source_configuration.clone(),
    }
}

/// Builds the resource model from a describe response. The ARN is
/// computed from the identity found in the response, falling back to
/// the requested one.
pub fn from_describe_response(
    output: &DescribeDataSourceOutput,
    requested: &DataSourceKey,
    context: &RequestContext,
    arn_builder: &dyn ArnBuilder,
) -> ResourceModel {
    let key = DataSourceKey {
        index_id: output
            .index_id()
            .map(String::from)
            .unwrap_or_else(|| requested.index_id.clone()),
        id: output
            .id()
            .map(String::from)
            .unwrap_or_else(|| requested.id.clone()),
    };
    ResourceModel {
        arn: Some(arn_builder.build(context, &key)),
        id: Some(key.id),
        index_id: Some(key.index_id),
        name: output.name().map(String::from),
        schedule: output.schedule().map(String::from),
        role_arn: output.role_arn().map(String::from),
        description: output.description().map(String::from),
        r#type: output.r#type().map(|t| t.as_str().to_string()),
        data_source_configuration: output.configuration().map(configuration::from_sdk),
    }
}
