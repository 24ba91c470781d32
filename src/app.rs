//! Defines the read-only application state and the dispatch of
//! handler requests.

use crate::client::KendraApi;
use crate::conf::Settings;
use crate::error::HandlerError;
use crate::model::{ArnBuilder, DataSourceArnBuilder};
use crate::progress::{Action, HandlerRequest, ProgressEvent};
use crate::read;
use crate::update::{self, StabilizationPolicy};
use anyhow::{anyhow, Result};
use envy::from_env;
use once_cell::sync::OnceCell;
use tracing::{instrument, warn};

/// An App is an initialized application state, derived from
/// settings.
pub struct App {
    /// The original settings.
    pub settings: Settings,

    /// Polling limits derived from the settings.
    pub policy: StabilizationPolicy,

    /// Builds the ARNs reported back in resource models.
    pub arn_builder: Box<dyn ArnBuilder>,
}

impl App {
    /// Initialize an App instance given a settings struct, using the
    /// standard Kendra ARN layout.
    pub fn new(settings: Settings) -> Self {
        Self::with_arn_builder(settings, DataSourceArnBuilder)
    }

    /// Initialize an App instance with a custom ARN builder.
    pub fn with_arn_builder(settings: Settings, arn_builder: impl ArnBuilder + 'static) -> Self {
        App {
            policy: StabilizationPolicy::from(&settings),
            settings,
            arn_builder: Box::new(arn_builder),
        }
    }

    /// Handle an invocation. Every outcome, failures included, is
    /// reported as a progress event.
    #[instrument(skip(self, api), fields(action = ?request.action))]
    pub async fn handle(&self, request: &HandlerRequest, api: &dyn KendraApi) -> ProgressEvent {
        let result = match request.action {
            Action::Update => {
                update::handle(api, request, self.arn_builder.as_ref(), &self.policy).await
            }
            Action::Read => {
                read::handle(
                    api,
                    &request.desired_resource_state,
                    &request.context,
                    self.arn_builder.as_ref(),
                )
                .await
            }
            action => Err(HandlerError::InvalidRequest(format!(
                "action {:?} is not supported by this provider",
                action
            ))),
        };
        result.unwrap_or_else(|e| {
            warn!("Handler failed: {}", e);
            ProgressEvent::failed(&e)
        })
    }
}

/// Global App instance.
static CURRENT: OnceCell<App> = OnceCell::new();

/// Initialize the global App instance.
pub fn init() -> Result<()> {
    let settings = from_env()?;
    let app = App::new(settings);
    CURRENT
        .set(app)
        .map_err(|_| anyhow!("app::CURRENT was already initialized"))
}

/// Get the current App instance, or panic if it hasn't been
/// initialized.
pub fn current() -> &'static App {
    CURRENT.get().expect("app is not initialized")
}
