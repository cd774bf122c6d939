#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    ConfigError, ReversePolicy, SpeedControl, BASE_TIME_SCALE, DEFAULT_SPEED_MULTIPLIER,
};

/// The number of points the original orbit path sampler produces at
/// its 0.01 radian step.
pub const DEFAULT_PATH_SAMPLES: usize = 629;

/// Tunables for a [`SolarSystem`][crate::SolarSystem].
///
/// With the `serde` feature enabled this can be loaded from JSON; any
/// field left out takes its default.
///
/// # Example
/// ```
/// use orrery_sim::{ReversePolicy, SimulationConfig};
///
/// let config = SimulationConfig {
///     reverse_policy: ReversePolicy::Allow,
///     seed: Some(42),
///     ..SimulationConfig::default()
/// };
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct SimulationConfig {
    /// Phase units per second of wall time at a multiplier of 1.
    pub base_time_scale: f64,

    /// The speed multiplier the clock starts at.
    pub default_speed_multiplier: f64,

    /// How negative speed multipliers are handled.
    pub reverse_policy: ReversePolicy,

    /// How many points to sample per orbit path.
    pub path_samples: usize,

    /// Seed for the initial phase angles. `None` draws from the OS.
    pub seed: Option<u64>,
}

impl SimulationConfig {
    /// Checks that the configuration can build a working clock.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.base_time_scale > 0.0 && self.base_time_scale.is_finite()) {
            return Err(ConfigError::InvalidBaseTimeScale(self.base_time_scale));
        }
        SpeedControl::with_value(self.default_speed_multiplier, self.reverse_policy)?;
        if self.path_samples == 0 {
            return Err(ConfigError::NoPathSamples);
        }
        Ok(())
    }

    /// Parses and validates a configuration from JSON.
    ///
    /// # Example
    /// ```
    /// use orrery_sim::SimulationConfig;
    ///
    /// let config = SimulationConfig::from_json_str(r#"{ "seed": 7 }"#).unwrap();
    /// assert_eq!(config.seed, Some(7));
    /// assert_eq!(config.default_speed_multiplier, 1.0);
    /// ```
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            base_time_scale: BASE_TIME_SCALE,
            default_speed_multiplier: DEFAULT_SPEED_MULTIPLIER,
            reverse_policy: ReversePolicy::default(),
            path_samples: DEFAULT_PATH_SAMPLES,
            seed: None,
        }
    }
}
