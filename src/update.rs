//! Reconciles a data source with its desired state: issue the update,
//! wait for Kendra to settle, then read the result back.

use crate::client::KendraApi;
use crate::conf::Settings;
use crate::error::HandlerError;
use crate::model::{self, ArnBuilder, DataSourceKey};
use crate::progress::{CallbackContext, HandlerRequest, ProgressEvent};
use crate::read;
use aws_sdk_kendra::types::DataSourceStatus;
use core::time::Duration;
use tokio::time::sleep;
use tracing::{info, instrument, warn};

/// How long a single invocation keeps polling before handing control
/// back to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StabilizationPolicy {
    pub delay: Duration,
    pub max_attempts: u32,
    pub callback_delay_seconds: u32,
    /// Cumulative polls, across invocations, after which a warning is
    /// logged. Polling itself is only bounded by the host's timeout.
    pub warn_after_attempts: u32,
}

impl From<&Settings> for StabilizationPolicy {
    fn from(settings: &Settings) -> Self {
        StabilizationPolicy {
            delay: Duration::from_millis(settings.stabilization_delay_ms),
            max_attempts: settings.max_stabilization_attempts.max(1),
            callback_delay_seconds: settings.callback_delay_seconds,
            warn_after_attempts: settings.stabilization_warning_attempts,
        }
    }
}

/// Whether the data source settled during this invocation.
enum Stabilization {
    Stable,
    Pending,
}

/// Poll the data source until it's active, fails, or the policy runs
/// out of attempts.
async fn stabilize<K: KendraApi + ?Sized>(
    api: &K,
    key: &DataSourceKey,
    policy: &StabilizationPolicy,
    callback: &mut CallbackContext,
) -> Result<Stabilization, HandlerError> {
    let mut attempts = 0;
    loop {
        let output = api.describe_data_source(key).await?;
        attempts += 1;
        callback.stabilization_attempts = callback.stabilization_attempts.saturating_add(1);
        if callback.stabilization_attempts == policy.warn_after_attempts {
            warn!(
                "Data source {:?} has not stabilized after {} attempts; \
                 only the host's timeout will stop polling",
                key.id, callback.stabilization_attempts
            );
        }
        match output.status() {
            Some(DataSourceStatus::Active) => return Ok(Stabilization::Stable),
            Some(DataSourceStatus::Failed) => {
                return Err(HandlerError::NotStabilized(
                    output
                        .error_message()
                        .map(String::from)
                        .unwrap_or_else(|| format!("data source {} is FAILED", key.id)),
                ))
            }
            status => info!("Data source {:?} is still settling ({:?})", key.id, status),
        }
        if attempts >= policy.max_attempts {
            return Ok(Stabilization::Pending);
        }
        sleep(policy.delay).await;
    }
}

/// Handle an update request.
#[instrument(skip(api, arn_builder))]
pub async fn handle<K: KendraApi + ?Sized>(
    api: &K,
    request: &HandlerRequest,
    arn_builder: &dyn ArnBuilder,
    policy: &StabilizationPolicy,
) -> Result<ProgressEvent, HandlerError> {
    let desired = &request.desired_resource_state;
    let key = read::require_key(desired)?;
    let mut callback = request.callback_context.clone().unwrap_or_default();

    if !callback.update_issued {
        api.update_data_source(model::to_update_request(&key, desired))
            .await?;
        callback.update_issued = true;
        info!("Issued update for data source {:?}", key.id);
    }

    match stabilize(api, &key, policy, &mut callback).await? {
        Stabilization::Stable => {
            let model = read::describe(api, &key, &request.context, arn_builder).await?;
            info!(
                "Data source {:?} stabilized after {} attempts",
                key.id, callback.stabilization_attempts
            );
            Ok(ProgressEvent::success(model))
        }
        Stabilization::Pending => {
            info!(
                "Data source {:?} not stable after {} attempts; deferring",
                key.id, callback.stabilization_attempts
            );
            let mut model = desired.clone();
            model.arn = Some(arn_builder.build(&request.context, &key));
            Ok(ProgressEvent::in_progress(
                model,
                callback,
                policy.callback_delay_seconds,
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_from_settings() {
        let policy = StabilizationPolicy::from(&Settings {
            stabilization_delay_ms: 1500,
            max_stabilization_attempts: 0,
            callback_delay_seconds: 10,
            stabilization_warning_attempts: 100,
        });
        assert_eq!(policy.delay, Duration::from_millis(1500));
        assert_eq!(policy.max_attempts, 1);
        assert_eq!(policy.callback_delay_seconds, 10);
        assert_eq!(policy.warn_after_attempts, 100);
    }
}
