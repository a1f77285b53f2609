use thiserror::Error;

/// Configuration errors. User input never produces one of these; invalid
/// values typed into the page are absorbed by the store instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    #[error("unknown parameter `{0}`")]
    UnknownKey(String),
    #[error("invalid {name} bound `{text}`")]
    InvalidBound { name: &'static str, text: String },
    #[error("empty range: min {min} is greater than max {max}")]
    EmptyRange { min: f64, max: f64 },
    #[error("step must be positive and finite, got {0}")]
    InvalidStep(f64),
}
