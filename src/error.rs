//! Error types for the orrery core.
//!
//! Orbit parameters are validated once at construction and trusted
//! thereafter. The only per-frame guard is on externally supplied
//! wall-clock deltas and speed multipliers.

use thiserror::Error;

/// An error describing why an [`OrbitModel`][crate::OrbitModel] could not be built.
#[non_exhaustive]
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum OrbitError {
    /// ### Non-positive semi-major axis.
    /// An ellipse needs a positive size.
    #[error("invalid orbit parameter: semi-major axis must be positive and finite, got {0}")]
    NonPositiveSemiMajorAxis(f64),

    /// ### Eccentricity outside `[0, 1)`.
    /// At `e >= 1` the conic opens into a parabola or hyperbola and the
    /// radius diverges, so the body would never come back around.
    #[error("invalid orbit parameter: eccentricity must be in [0, 1), got {0}")]
    EccentricityOutOfRange(f64),

    /// ### Non-finite angular speed.
    #[error("invalid orbit parameter: angular speed must be finite, got {0}")]
    NonFiniteAngularSpeed(f64),

    /// ### Non-finite axial rotation speed.
    #[error("invalid orbit parameter: axial rotation speed must be finite, got {0}")]
    NonFiniteAxialRotationSpeed(f64),

    /// ### Non-finite initial phase angle.
    #[error("invalid orbit parameter: initial phase angle must be finite, got {0}")]
    NonFinitePhaseAngle(f64),

    /// ### Path sampling step that would never terminate.
    #[error("invalid orbit path step: must be positive and finite, got {0}")]
    InvalidPathStep(f64),
}

/// An error raised by the [`SimulationClock`][crate::SimulationClock]
/// or its [`SpeedControl`][crate::SpeedControl].
#[non_exhaustive]
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ClockError {
    /// The wall-clock delta was NaN or infinite.
    #[error("invalid time delta: {0}")]
    InvalidTimeDelta(f64),

    /// The wall-clock delta went backwards.
    #[error("invalid time delta: wall clock went backwards by {0}")]
    NegativeTimeDelta(f64),

    /// The speed multiplier was NaN or infinite.
    #[error("invalid speed multiplier: {0}")]
    InvalidSpeedMultiplier(f64),

    /// The speed multiplier was negative and the reverse policy forbids it.
    #[error("speed multiplier {0} is negative and time reversal is disabled")]
    NegativeSpeedMultiplier(f64),
}

/// An error describing why a body could not be added to a
/// [`SolarSystem`][crate::SolarSystem].
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BodyAddError {
    /// A body with the same name already orbits in this system.
    #[error("a body named {0:?} already exists in this system")]
    DuplicateName(String),
}

/// An error raised while loading or validating a
/// [`SimulationConfig`][crate::SimulationConfig].
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The base time scale must be positive and finite.
    #[error("invalid config: base time scale must be positive and finite, got {0}")]
    InvalidBaseTimeScale(f64),

    /// The default speed multiplier was rejected by the configured reverse policy.
    #[error("invalid config: default speed multiplier rejected: {0}")]
    InvalidDefaultSpeed(#[from] ClockError),

    /// At least one sample is needed to draw an orbit path.
    #[error("invalid config: path samples must be at least 1")]
    NoPathSamples,

    /// The configuration text was not valid JSON for this schema.
    #[cfg(feature = "serde")]
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// An error raised while assembling a [`SolarSystem`][crate::SolarSystem]
/// from a configuration.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum SystemError {
    /// The configuration was invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A preset body could not be built.
    #[error(transparent)]
    Orbit(#[from] OrbitError),

    /// A preset body clashed with one already present.
    #[error(transparent)]
    BodyAdd(#[from] BodyAddError),
}
