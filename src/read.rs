//! Reads the current state of a data source.

use crate::client::KendraApi;
use crate::error::HandlerError;
use crate::model::{self, ArnBuilder, DataSourceKey, ResourceModel};
use crate::progress::{ProgressEvent, RequestContext};
use tracing::{info, instrument};

/// The identity of the data source a model refers to, or an invalid
/// request error naming what's missing.
pub fn require_key(model: &ResourceModel) -> Result<DataSourceKey, HandlerError> {
    model.key().ok_or_else(|| {
        HandlerError::InvalidRequest(String::from(
            "both Id and IndexId are required to address a data source",
        ))
    })
}

/// Describe the data source and build its model.
pub async fn describe<K: KendraApi + ?Sized>(
    api: &K,
    key: &DataSourceKey,
    context: &RequestContext,
    arn_builder: &dyn ArnBuilder,
) -> Result<ResourceModel, HandlerError> {
    let output = api.describe_data_source(key).await?;
    Ok(model::from_describe_response(
        &output,
        key,
        context,
        arn_builder,
    ))
}

/// Handle a read request.
#[instrument(skip(api, arn_builder))]
pub async fn handle<K: KendraApi + ?Sized>(
    api: &K,
    model: &ResourceModel,
    context: &RequestContext,
    arn_builder: &dyn ArnBuilder,
) -> Result<ProgressEvent, HandlerError> {
    let key = require_key(model)?;
    let model = describe(api, &key, context, arn_builder).await?;
    info!("Read data source {:?} of index {:?}", key.id, key.index_id);
    Ok(ProgressEvent::success(model))
}
