//! Defines configuration as read from the environment.

use serde::Deserialize;

/// Default `stabilization_delay_ms` value.
fn default_stabilization_delay_ms() -> u64 {
    5000
}

/// Default `max_stabilization_attempts` value.
fn default_max_stabilization_attempts() -> u32 {
    60
}

/// Default `callback_delay_seconds` value.
fn default_callback_delay_seconds() -> u32 {
    30
}

/// Default `stabilization_warning_attempts` value.
fn default_stabilization_warning_attempts() -> u32 {
    360
}

/// The provider polls Kendra after mutating a data source, and hands
/// control back to the host when polling takes too long. The
/// configuration must be given as environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Milliseconds to wait between two consecutive describe calls
    /// while waiting for the data source to stabilize.
    #[serde(default = "default_stabilization_delay_ms")]
    pub stabilization_delay_ms: u64,

    /// Maximum number of describe calls performed in a single
    /// invocation while stabilizing. Once reached, the handler returns
    /// an in-progress event and expects to be invoked again with the
    /// returned callback context.
    #[serde(default = "default_max_stabilization_attempts")]
    pub max_stabilization_attempts: u32,

    /// Seconds the host should wait before re-invoking the handler
    /// with an in-progress callback context.
    #[serde(default = "default_callback_delay_seconds")]
    pub callback_delay_seconds: u32,

    /// Total number of describe calls, summed over every invocation of
    /// the same update, after which a warning is logged. Polling goes
    /// on until the host gives up.
    #[serde(default = "default_stabilization_warning_attempts")]
    pub stabilization_warning_attempts: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            stabilization_delay_ms: default_stabilization_delay_ms(),
            max_stabilization_attempts: default_max_stabilization_attempts(),
            callback_delay_seconds: default_callback_delay_seconds(),
            stabilization_warning_attempts: default_stabilization_warning_attempts(),
        }
    }
}
