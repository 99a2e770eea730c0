use crate::domain::model::ColorSpace;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HuegenError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API responded with status: {0}")]
    ApiStatusError(reqwest::StatusCode),

    #[error("Invalid API response: missing {0}")]
    MissingFieldError(&'static str),

    #[error("Invalid rgb color string: {0}")]
    RgbParseError(String),

    #[error("Unsupported color conversion: {from} -> {to}")]
    UnsupportedConversionError { from: ColorSpace, to: ColorSpace },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Palette not found: {0}")]
    PaletteNotFoundError(String),
}

impl HuegenError {
    /// True when an issued HTTP request failed (transport error, timeout,
    /// non-success status, or an unusable body). Errors raised before a
    /// request goes out return false.
    pub fn is_request_failure(&self) -> bool {
        matches!(
            self,
            HuegenError::ApiError(_)
                | HuegenError::ApiStatusError(_)
                | HuegenError::MissingFieldError(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, HuegenError>;
