use thiserror::Error;

/// Configuration problems detected while reading the environment at startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Environment variable {name} has invalid value `{value}`: expected {expected}")]
    InvalidEnvVar {
        name: String,
        value: String,
        expected: &'static str,
    },
}
