use std::str::FromStr;
use std::time::Duration;

use super::{Config, ExtensionLimit};
use crate::errors::AwsSqsConfigError;

pub const ENV_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
pub const ENV_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
pub const ENV_REGION: &str = "AWS_REGION";
pub const ENV_ACCOUNT_ID: &str = "AWS_ACCOUNT_ID";
pub const ENV_HOSTNAME: &str = "SQS_HOSTNAME";
pub const ENV_ENV: &str = "SQS_ENV";
pub const ENV_TOPIC_PREFIX: &str = "SQS_TOPIC_PREFIX";
pub const ENV_TOPIC_ARN: &str = "SQS_TOPIC_ARN";
pub const ENV_QUEUE_URL: &str = "SQS_QUEUE_URL";
pub const ENV_VISIBILITY_TIMEOUT: &str = "SQS_VISIBILITY_TIMEOUT";
pub const ENV_RETRY_COUNT: &str = "SQS_RETRY_COUNT";
pub const ENV_WORKER_POOL: &str = "SQS_WORKER_POOL";
pub const ENV_EXTENSION_LIMIT: &str = "SQS_EXTENSION_LIMIT";

impl Config {
    /// Builds a configuration from environment variables.
    ///
    /// Reads:
    /// - `AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY`, `AWS_REGION`, `AWS_ACCOUNT_ID`
    /// - `SQS_HOSTNAME`, `SQS_ENV`, `SQS_TOPIC_PREFIX`, `SQS_TOPIC_ARN`, `SQS_QUEUE_URL`
    /// - `SQS_VISIBILITY_TIMEOUT` (seconds), `SQS_RETRY_COUNT`, `SQS_WORKER_POOL`,
    ///   `SQS_EXTENSION_LIMIT`
    ///
    /// Unset variables keep their [`Config::default`] value.
    pub fn from_env() -> Result<Self, AwsSqsConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a configuration from any name to value lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AwsSqsConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |name: &str| lookup(name).filter(|value| !value.is_empty());
        let mut config = Config::default();

        if let Some(key) = text(ENV_ACCESS_KEY_ID) {
            config.key = key;
        }
        if let Some(secret) = text(ENV_SECRET_ACCESS_KEY) {
            config.secret = secret;
        }
        if let Some(region) = text(ENV_REGION) {
            config.region = region;
        }
        if let Some(account_id) = text(ENV_ACCOUNT_ID) {
            config.aws_account_id = account_id;
        }
        if let Some(env) = text(ENV_ENV) {
            config.env = env;
        }
        if let Some(prefix) = text(ENV_TOPIC_PREFIX) {
            config.topic_prefix = prefix;
        }
        config.hostname = text(ENV_HOSTNAME);
        config.topic_arn = text(ENV_TOPIC_ARN);
        config.queue_url = text(ENV_QUEUE_URL);

        if let Some(seconds) = parse::<u64>(ENV_VISIBILITY_TIMEOUT, text(ENV_VISIBILITY_TIMEOUT))? {
            config.visibility_timeout = Duration::from_secs(seconds);
        }
        if let Some(retry_count) = parse::<i32>(ENV_RETRY_COUNT, text(ENV_RETRY_COUNT))? {
            config.retry_count = retry_count;
        }
        if let Some(worker_pool) = parse::<usize>(ENV_WORKER_POOL, text(ENV_WORKER_POOL))? {
            config.worker_pool = worker_pool;
        }
        config.extension_limit =
            ExtensionLimit::from(parse::<u32>(ENV_EXTENSION_LIMIT, text(ENV_EXTENSION_LIMIT))?);

        Ok(config)
    }
}

fn parse<T: FromStr>(
    name: &'static str,
    value: Option<String>,
) -> Result<Option<T>, AwsSqsConfigError> {
    value
        .map(|value| {
            value
                .trim()
                .parse::<T>()
                .map_err(|_| AwsSqsConfigError::InvalidSetting { name, value })
        })
        .transpose()
}
