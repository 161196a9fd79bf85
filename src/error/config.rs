use thiserror::Error;

/// Configuration errors raised while loading environment variables at startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
}
