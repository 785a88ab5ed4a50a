use std::fmt;
use std::future::Future;

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_config::retry::RetryConfig;
use aws_credential_types::Credentials;
use aws_credential_types::provider::error::CredentialsError;
use aws_credential_types::provider::{self, ProvideCredentials, SharedCredentialsProvider};
use aws_smithy_async::rt::sleep::{SharedAsyncSleep, TokioSleep};
use aws_smithy_async::time::{SharedTimeSource, SystemTimeSource};

use super::ResolvedClientConfig;
use crate::config::Config;
use crate::errors::AwsSqsConfigError;
use crate::logging::ClientLogMode;

/// Name reported by credentials built from a key/secret pair.
pub const STATIC_PROVIDER_NAME: &str = "rs-sqs-bootstrap";

/// Produces a ready client configuration from a [`Config`].
///
/// Set one on [`Config::aws_config_provider`] to replace the default
/// key/secret bootstrap entirely. The provider gets its own copy of the
/// configuration, and whatever it returns is handed back to the caller untouched.
#[async_trait]
pub trait AwsConfigProvider: Send + Sync {
    async fn provide(&self, config: Config) -> Result<ResolvedClientConfig, AwsSqsConfigError>;
}

/// Adapts an async closure into an [`AwsConfigProvider`].
///
/// # Example
///
/// ```rust
/// use aws_config::{Region, SdkConfig};
/// use rs_sqs_bootstrap::client::{ResolvedClientConfig, SessionProviderFunc};
/// use rs_sqs_bootstrap::config::Config;
/// use rs_sqs_bootstrap::errors::AwsSqsConfigError;
///
/// let provider = SessionProviderFunc::new(|config: Config| async move {
///     let sdk_config = SdkConfig::builder()
///         .region(Region::new(config.region))
///         .endpoint_url("http://localhost:4150")
///         .build();
///     Ok::<_, AwsSqsConfigError>(ResolvedClientConfig::from(sdk_config))
/// });
/// let config = Config::default().with_config_provider(provider);
/// assert!(config.aws_config_provider.is_some());
/// ```
pub struct SessionProviderFunc<F> {
    provider_fn: F,
}

impl<F> SessionProviderFunc<F> {
    pub fn new(provider_fn: F) -> Self {
        SessionProviderFunc { provider_fn }
    }
}

#[async_trait]
impl<F, Fut> AwsConfigProvider for SessionProviderFunc<F>
where
    F: Fn(Config) -> Fut + Send + Sync,
    Fut: Future<Output = Result<ResolvedClientConfig, AwsSqsConfigError>> + Send,
{
    async fn provide(&self, config: Config) -> Result<ResolvedClientConfig, AwsSqsConfigError> {
        (self.provider_fn)(config).await
    }
}

/// Credentials from a fixed key/secret pair.
///
/// The credentials are built once on construction and handed out on every
/// call. An empty key or secret fails every retrieval.
#[derive(Clone)]
pub struct StaticCredentialsProvider {
    credentials: Option<Credentials>,
}

impl StaticCredentialsProvider {
    pub fn new(key: &str, secret: &str) -> Self {
        let credentials = if key.is_empty() || secret.is_empty() {
            None
        } else {
            Some(Credentials::new(key, secret, None, None, STATIC_PROVIDER_NAME))
        };
        StaticCredentialsProvider { credentials }
    }

    fn credentials(&self) -> provider::Result {
        self.credentials.clone().ok_or_else(|| {
            CredentialsError::invalid_configuration("static credentials are empty")
        })
    }
}

impl fmt::Debug for StaticCredentialsProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticCredentialsProvider")
            .field("configured", &self.credentials.is_some())
            .finish()
    }
}

impl ProvideCredentials for StaticCredentialsProvider {
    fn provide_credentials<'a>(&'a self) -> provider::future::ProvideCredentials<'a>
    where
        Self: 'a,
    {
        provider::future::ProvideCredentials::ready(self.credentials())
    }
}

/// Everything the loader needs to build the base client configuration.
#[derive(Debug, Clone)]
pub struct LoaderSettings {
    pub region: String,
    pub credentials: SharedCredentialsProvider,
    pub retry_config: RetryConfig,
    /// Requested SDK response logging. [`SdkConfigLoader`] leaves it to the
    /// subscriber, see [`crate::logging::init_logging`].
    pub log_mode: ClientLogMode,
}

/// Loads the base client configuration for a region.
#[async_trait]
pub trait ConfigLoader: Send + Sync {
    async fn load(&self, settings: LoaderSettings) -> Result<SdkConfig, AwsSqsConfigError>;
}

/// Builds an [`SdkConfig`] purely from [`LoaderSettings`].
///
/// Nothing is read from the environment or shared profile files.
#[derive(Debug, Clone, Copy, Default)]
pub struct SdkConfigLoader;

#[async_trait]
impl ConfigLoader for SdkConfigLoader {
    async fn load(&self, settings: LoaderSettings) -> Result<SdkConfig, AwsSqsConfigError> {
        if settings.region.trim().is_empty() {
            return Err(AwsSqsConfigError::MissingSetting("region"));
        }

        let config = SdkConfig::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(settings.region))
            .credentials_provider(settings.credentials)
            .retry_config(settings.retry_config)
            .sleep_impl(SharedAsyncSleep::new(TokioSleep::new()))
            .time_source(SharedTimeSource::new(SystemTimeSource::new()))
            .build();

        Ok(config)
    }
}
