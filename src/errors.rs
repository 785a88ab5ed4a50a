use aws_credential_types::provider::error::CredentialsError;
use aws_sdk_sqs::error::{BuildError, SdkError};
use aws_sdk_sqs::operation::get_queue_url::GetQueueUrlError;
use thiserror::Error;

use crate::config::DataType;

/// Boxed error used for failures coming from caller supplied collaborators.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error types for configuring and bootstrapping an AWS SQS/SNS client.
///
/// Every variant is returned to the caller as-is; nothing is retried or
/// logged while the configuration is assembled.
#[derive(Debug, Error)]
pub enum AwsSqsConfigError {
    /// The credential source could not produce credentials during eager validation.
    ///
    /// The underlying provider error is available through `source()`.
    #[error("invalid AWS credentials: {0}")]
    InvalidCredentials(#[source] CredentialsError),

    /// A custom attribute value did not match its declared data type.
    #[error("cannot marshal attribute `{title}` as {data_type}")]
    Marshal { title: String, data_type: DataType },

    /// The cancellation token fired before credential validation finished.
    #[error("credential validation was cancelled")]
    Cancelled,

    /// The client configuration loader failed.
    #[error("failed to load AWS client configuration: {0}")]
    Load(#[source] BoxError),

    /// A setting required for the requested operation was empty.
    #[error("missing configuration value: {0}")]
    MissingSetting(&'static str),

    /// A setting could not be parsed.
    #[error("invalid value `{value}` for {name}")]
    InvalidSetting { name: &'static str, value: String },

    /// A custom attribute with the same title was already added.
    #[error("attribute `{0}` is already set")]
    DuplicateAttribute(String),

    /// The SDK rejected a custom attribute while building the message attribute.
    #[error("failed to build message attribute: {0}")]
    AttributeBuild(#[from] BuildError),

    /// The `GetQueueUrl` request failed.
    #[error("failed to look up queue url: {0}")]
    GetQueueUrl(#[from] SdkError<GetQueueUrlError>),

    /// SQS answered the queue url lookup without a url.
    #[error("queue not found: {0}")]
    QueueNotFound(String),
}

impl AwsSqsConfigError {
    /// Wraps an arbitrary error as a loader failure.
    pub fn load<E>(error: E) -> Self
    where
        E: Into<BoxError>,
    {
        AwsSqsConfigError::Load(error.into())
    }
}
