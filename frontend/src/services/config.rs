use anyhow::Context;
use shared::config::AppConfig;

/// Read the configuration baked in at build time.
///
/// A wasm bundle has no process environment, so Trunk must be run with
/// `BILLING_API_URL` (and optionally `BILLING_LOG_LEVEL`,
/// `BILLING_DIRECTORY_TTL_SECS`) exported.
pub fn load() -> anyhow::Result<AppConfig> {
    AppConfig::from_values(
        option_env!("BILLING_API_URL"),
        option_env!("BILLING_LOG_LEVEL"),
        option_env!("BILLING_DIRECTORY_TTL_SECS"),
    )
    .context("The billing app is not configured")
}
