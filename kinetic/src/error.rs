use thiserror::Error;

/// A rejected configuration value.
///
/// All preconditions of the engine are checked when options or ranges are built; ticks
/// themselves never fail.
#[derive(Error, Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    #[error("simulation period must be greater than zero")]
    ZeroPeriod,

    #[error("friction must be finite and non-negative, got {0}")]
    InvalidFriction(f64),

    #[error("damping must be finite and at least 1, got {0}")]
    InvalidDamping(f64),

    #[error("scroll range must be finite with min <= max, got [{min}, {max}]")]
    InvalidRange { min: f64, max: f64 },
}
