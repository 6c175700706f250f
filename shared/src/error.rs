use thiserror::Error;

/// Failure of a request that did not produce a usable answer from the server
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never completed (DNS, CORS, connection refused, ...)
    #[error("Network error: {0}")]
    Transport(String),
    /// The request completed but the body could not be read as the expected JSON
    #[error("Unexpected response from server: {0}")]
    Decode(String),
    /// The request could not be built
    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

/// Form input that was rejected before any request was made
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Please select a client")]
    MissingClient,
    #[error("Client ID must be a positive whole number")]
    InvalidClientId(String),
    #[error("Client ID must be between {min} and {max} in steps of {step}")]
    ClientIdOutOfRoster { min: u32, max: u32, step: u32 },
    #[error("Please select a service type")]
    MissingServiceType,
    #[error("Unknown service type: {0}")]
    UnknownServiceType(String),
    #[error("Please enter the billing period using YYYYMM format")]
    MalformedBillingPeriod(String),
    #[error("Please select a month of year {0} using YYYYMM format.")]
    BillingPeriodWrongYear(i32),
    #[error("Please enter an amount")]
    MissingAmount,
    #[error("Amount must be a number")]
    InvalidAmount(String),
    #[error("Amount cannot be negative")]
    NegativeAmount,
}

/// Startup configuration problems
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}
