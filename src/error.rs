use thiserror::Error;

/// Errors surfaced while configuring or querying the simulation.
///
/// Ticking never produces one of these; runtime updates clamp or ignore.
#[derive(Debug, Error)]
pub enum TerrariumError {
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("probability `{name}` must be within [0, 1], got {value}")]
    InvalidProbability { name: String, value: f32 },

    #[error("`{name}` must be positive, got {value}")]
    NonPositive { name: String, value: f32 },

    #[error("`{name}` must be finite and non-negative, got {value}")]
    Negative { name: String, value: f32 },

    #[error("`{name}` must be finite, got {value}")]
    NonFinite { name: String, value: f32 },

    #[error("range `{name}` is inverted or non-finite: [{min}, {max}]")]
    InvertedRange { name: String, min: f32, max: f32 },

    #[error("`{name}` = {value} lies outside [{min}, {max}]")]
    OutOfBounds { name: String, value: f32, min: f32, max: f32 },

    #[error("`{name}` = {value} exceeds the limit of {max}")]
    TooLarge { name: String, value: usize, max: usize },

    #[error("unknown collection '{0}'")]
    UnknownCollection(String),

    #[error("JSON encode error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TerrariumError>;
