//! Error types reported to the host
//!
//! Everything here is a construction-time error: frame rendering itself never
//! fails.

use thiserror::Error;

/// Malformed LED layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// A coordinate axis has a different length than the `x` axis
    #[error("axis {axis} has {actual} coordinates, expected {expected}")]
    LengthMismatch {
        axis: char,
        expected: usize,
        actual: usize,
    },
    /// A coordinate is `NaN` or infinite
    #[error("coordinate of LED {index} is not finite")]
    NonFiniteCoordinate { index: usize },
    /// Width or height is `NaN` or infinite
    #[error("geometry extents are not finite")]
    NonFiniteExtent,
}

/// Schema could not be built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("schema is full, cannot add parameter `{name}`")]
    CapacityExceeded { name: &'static str },
}

/// Resolved config does not fit a schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The parameter is not declared by the schema
    #[error("unknown parameter")]
    UnknownParam,
    /// A declared parameter has no value
    #[error("missing value for parameter `{name}`")]
    MissingParam { name: &'static str },
    /// The value type differs from the declared one
    #[error("parameter `{name}` has the wrong value type")]
    TypeMismatch { name: &'static str },
    /// Gradient name does not fit the fixed-size buffer
    #[error("gradient value for `{name}` is too long")]
    GradientTooLong { name: &'static str },
    #[error("config is full, cannot add parameter `{name}`")]
    CapacityExceeded { name: &'static str },
}

/// Program could not be activated or reconfigured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProgramError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Geometry does not fit the host frame buffer
    #[error("{leds} LEDs do not fit a frame buffer of {capacity}")]
    TooManyLeds { leds: usize, capacity: usize },
}
