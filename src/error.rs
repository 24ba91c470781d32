//! Translates Kendra errors into handler outcomes.

use crate::progress::HandlerErrorCode;
use aws_sdk_kendra::error::ProvideErrorMetadata;
use aws_sdk_kendra::operation::describe_data_source::DescribeDataSourceError;
use aws_sdk_kendra::operation::update_data_source::UpdateDataSourceError;
use thiserror::Error;

/// The ways a handler can fail.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HandlerError {
    #[error("Invalid request provided: {0}")]
    InvalidRequest(String),

    #[error("Resource of type 'AWS::Kendra::DataSource' was not found: {0}")]
    NotFound(String),

    #[error("Resource of type 'AWS::Kendra::DataSource' has a conflict: {0}")]
    ResourceConflict(String),

    #[error("Error occurred during operation '{0}': {1}")]
    GeneralServiceError(&'static str, String),

    #[error("Resource of type 'AWS::Kendra::DataSource' did not stabilize: {0}")]
    NotStabilized(String),
}

impl HandlerError {
    /// The error code reported to the host.
    pub fn code(&self) -> HandlerErrorCode {
        match self {
            HandlerError::InvalidRequest(_) => HandlerErrorCode::InvalidRequest,
            HandlerError::NotFound(_) => HandlerErrorCode::NotFound,
            HandlerError::ResourceConflict(_) => HandlerErrorCode::ResourceConflict,
            HandlerError::GeneralServiceError(..) => HandlerErrorCode::GeneralServiceException,
            HandlerError::NotStabilized(_) => HandlerErrorCode::NotStabilized,
        }
    }
}

/// Message of a remote error, or its rendering when it carries none.
fn message_of<E: ProvideErrorMetadata + std::fmt::Display>(err: &E) -> String {
    err.message()
        .map(String::from)
        .unwrap_or_else(|| err.to_string())
}

/// The message modeled on the exception itself, falling back to the
/// error metadata.
fn modeled(message: Option<&str>, fallback: String) -> String {
    message.map(String::from).unwrap_or(fallback)
}

impl From<UpdateDataSourceError> for HandlerError {
    fn from(err: UpdateDataSourceError) -> Self {
        let fallback = message_of(&err);
        match err {
            UpdateDataSourceError::ValidationException(e) => {
                HandlerError::InvalidRequest(modeled(e.message(), fallback))
            }
            UpdateDataSourceError::ResourceNotFoundException(e) => {
                HandlerError::NotFound(modeled(e.message(), fallback))
            }
            UpdateDataSourceError::ConflictException(e) => {
                HandlerError::ResourceConflict(modeled(e.message(), fallback))
            }
            _ => HandlerError::GeneralServiceError("UpdateDataSource", fallback),
        }
    }
}

impl From<DescribeDataSourceError> for HandlerError {
    fn from(err: DescribeDataSourceError) -> Self {
        let fallback = message_of(&err);
        match err {
            DescribeDataSourceError::ValidationException(e) => {
                HandlerError::InvalidRequest(modeled(e.message(), fallback))
            }
            DescribeDataSourceError::ResourceNotFoundException(e) => {
                HandlerError::NotFound(modeled(e.message(), fallback))
            }
            _ => HandlerError::GeneralServiceError("DescribeDataSource", fallback),
        }
    }
}
