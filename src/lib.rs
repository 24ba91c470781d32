//! Resource provider for `AWS::Kendra::DataSource`.

pub mod app;
pub mod client;
pub mod conf;
pub mod configuration;
pub mod error;
pub mod model;
pub mod progress;
pub mod read;
pub mod update;
