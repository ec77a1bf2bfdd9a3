use thiserror::Error;

/// Error type for invalid operations.
#[derive(Error, Debug)]
pub enum FootprintError {
    #[error("Unknown transport mode '{0}'. Expected one of: Car, Bus, Bicycle, Walk")]
    InvalidTransportMode(String),
    #[error("{field}={value} is outside the allowed range [{min}, {max}]")]
    OutOfBounds {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("Failed to parse factor table: {0}")]
    InvalidFactorTable(#[from] toml::de::Error),
}

/// Convenience type for `Result<T, FootprintError>`.
pub type FootprintResult<T> = Result<T, FootprintError>;
