use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Directive;

/// Sink for consumer and publisher log lines.
pub trait Logger: Send + Sync {
    fn println(&self, message: &str);
}

/// [`Logger`] that forwards every line to `tracing` at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn println(&self, message: &str) {
        tracing::info!(target: "rs_sqs_bootstrap", "{message}");
    }
}

/// How much of each SDK response is logged.
///
/// The SDK reports requests and responses through `tracing` under the
/// `aws_smithy_runtime` targets, so the mode only decides which filter
/// directive gets installed. Resolving a configuration does not install a
/// subscriber; call [`init_logging`] with
/// [`ResolvedClientConfig::log_mode`](crate::client::ResolvedClientConfig::log_mode)
/// (or add [`sdk_log_directive`] to your own filter) to see the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ClientLogMode {
    Off,
    Response,
    #[default]
    ResponseWithBody,
}

/// The `EnvFilter` directive that enables the requested SDK logging.
pub fn sdk_log_directive(mode: ClientLogMode) -> Option<&'static str> {
    match mode {
        ClientLogMode::Off => None,
        ClientLogMode::Response => Some("aws_smithy_runtime=debug"),
        ClientLogMode::ResponseWithBody => Some("aws_smithy_runtime=trace"),
    }
}

/// Builds the filter used by [`init_logging`]: `RUST_LOG` (or `info`) plus the
/// SDK directive for `mode`.
pub fn env_filter(mode: ClientLogMode) -> EnvFilter {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match sdk_log_directive(mode).and_then(|directive| directive.parse::<Directive>().ok()) {
        Some(directive) => filter.add_directive(directive),
        None => filter,
    }
}

/// Installs a global fmt subscriber.
///
/// Returns `false` when a global subscriber was already set.
pub fn init_logging(mode: ClientLogMode) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(mode))
        .with_target(true)
        .try_init()
        .is_ok()
}
