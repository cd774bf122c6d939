use core::fmt;
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{ClockError, SimulationConfig};

/// Phase units produced per second of wall-clock time at a speed
/// multiplier of 1.
///
/// At 60 frames per second one frame is worth exactly one phase unit,
/// so every body moves by its own angular speed each frame.
pub const BASE_TIME_SCALE: f64 = 60.0;

/// The speed multiplier a fresh clock starts at.
pub const DEFAULT_SPEED_MULTIPLIER: f64 = 1.0;

/// The lower end of the range a speed slider is expected to offer.
pub const SPEED_MIN: f64 = 0.0;

/// The upper end of the range a speed slider is expected to offer.
///
/// Values above this are accepted; this is only a hint for UIs.
pub const SPEED_MAX: f64 = 10.0;

/// How a [`SpeedControl`] treats negative speed multipliers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ReversePolicy {
    /// Negative values are clamped to zero, freezing the system.
    #[default]
    Clamp,
    /// Negative values are refused with
    /// [`ClockError::NegativeSpeedMultiplier`].
    Reject,
    /// Negative values are accepted and run every body backwards.
    Allow,
}

/// The externally owned speed-multiplier cell.
///
/// This is a cheap, cloneable handle: every clone refers to the same
/// value. Hand one clone to the UI handler and another to the
/// [`SimulationClock`]; writes from the handler are seen by the
/// clock's next tick.
///
/// The value is a single `f64` stored as bits in an atomic, so reads
/// and writes never tear and need no lock.
///
/// # Example
/// ```
/// use orrery_sim::{ReversePolicy, SpeedControl};
///
/// let speed = SpeedControl::new(ReversePolicy::Clamp);
/// let slider = speed.clone();
///
/// slider.set(2.5).unwrap();
/// assert_eq!(speed.get(), 2.5);
///
/// // Clamped, not rejected
/// assert_eq!(slider.set(-1.0), Ok(0.0));
/// assert_eq!(speed.get(), 0.0);
/// ```
#[derive(Clone)]
pub struct SpeedControl {
    bits: Arc<AtomicU64>,
    policy: ReversePolicy,
}

impl SpeedControl {
    /// Creates a control at [`DEFAULT_SPEED_MULTIPLIER`].
    pub fn new(policy: ReversePolicy) -> Self {
        Self {
            bits: Arc::new(AtomicU64::new(DEFAULT_SPEED_MULTIPLIER.to_bits())),
            policy,
        }
    }

    /// Creates a control at the given starting multiplier.
    ///
    /// # Errors
    ///
    /// Fails the same way [`set`][Self::set] does.
    pub fn with_value(value: f64, policy: ReversePolicy) -> Result<Self, ClockError> {
        let control = Self::new(policy);
        control.set(value)?;
        Ok(control)
    }

    /// Gets the current multiplier.
    #[inline]
    pub fn get(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Relaxed))
    }

    /// Sets the multiplier, applying the reverse policy to negative
    /// values, and returns the value actually stored.
    ///
    /// # Errors
    ///
    /// - [`ClockError::InvalidSpeedMultiplier`] for NaN or infinite values,
    ///   regardless of policy.
    /// - [`ClockError::NegativeSpeedMultiplier`] for negative values under
    ///   [`ReversePolicy::Reject`].
    ///
    /// On error the stored value is left unchanged.
    pub fn set(&self, value: f64) -> Result<f64, ClockError> {
        let value = self.sanitize(value)?;
        self.bits.store(value.to_bits(), Ordering::Relaxed);
        Ok(value)
    }

    /// Gets the policy applied to negative values.
    pub fn policy(&self) -> ReversePolicy {
        self.policy
    }

    fn sanitize(&self, value: f64) -> Result<f64, ClockError> {
        if !value.is_finite() {
            return Err(ClockError::InvalidSpeedMultiplier(value));
        }
        if value >= 0.0 {
            return Ok(value);
        }

        match self.policy {
            ReversePolicy::Allow => Ok(value),
            ReversePolicy::Reject => Err(ClockError::NegativeSpeedMultiplier(value)),
            ReversePolicy::Clamp => {
                log::warn!("speed multiplier {value} clamped to 0");
                Ok(0.0)
            }
        }
    }
}

impl Default for SpeedControl {
    fn default() -> Self {
        Self::new(ReversePolicy::default())
    }
}

impl fmt::Debug for SpeedControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpeedControl")
            .field("value", &self.get())
            .field("policy", &self.policy)
            .finish()
    }
}

/// Turns wall-clock progression into a phase increment.
///
/// The clock owns no timer and runs no loop. The host calls
/// [`tick`][Self::tick] once per frame with the wall time elapsed since
/// the previous frame, then hands the result to every body.
///
/// The returned tick is body-independent. Each body multiplies it by its
/// own angular speed, so changing the speed multiplier scales every body
/// alike and never alters the ratio of their periods.
///
/// # Example
/// ```
/// use orrery_sim::SimulationClock;
///
/// let mut clock = SimulationClock::default();
/// clock.set_speed_multiplier(2.0).unwrap();
///
/// // Half a second at 60 phase units per second, doubled
/// assert_eq!(clock.tick(0.5), 60.0);
/// ```
#[derive(Clone, Debug)]
pub struct SimulationClock {
    base_time_scale: f64,
    speed: SpeedControl,

    /// The sum of every tick handed out so far.
    elapsed: f64,
    frames: u64,
}

impl SimulationClock {
    /// Creates a clock reading its multiplier from `speed`.
    ///
    /// `base_time_scale` defaults to [`BASE_TIME_SCALE`].
    pub fn new(base_time_scale: Option<f64>, speed: SpeedControl) -> Self {
        Self {
            base_time_scale: base_time_scale.unwrap_or(BASE_TIME_SCALE),
            speed,
            elapsed: 0.0,
            frames: 0,
        }
    }

    /// Creates a clock from a validated configuration, along with a
    /// fresh speed cell initialized to the configured default.
    ///
    /// # Errors
    ///
    /// Returns the [`ClockError`] raised by the configured default speed.
    pub fn from_config(config: &SimulationConfig) -> Result<Self, ClockError> {
        let speed = SpeedControl::with_value(
            config.default_speed_multiplier,
            config.reverse_policy,
        )?;
        Ok(Self::new(Some(config.base_time_scale), speed))
    }

    /// Converts elapsed wall time, in seconds, into a phase increment:
    ///
    /// `elapsed * base_time_scale * speed_multiplier`
    ///
    /// Non-finite or negative wall time is treated as zero for this
    /// frame and logged. A NaN reaching a phase angle would never
    /// wash out, so it is stopped here.
    pub fn tick(&mut self, elapsed_wall_time: f64) -> f64 {
        match self.try_tick(elapsed_wall_time) {
            Ok(tick) => tick,
            Err(err) => {
                log::warn!("{err}; treating frame as zero-length");
                self.record(0.0)
            }
        }
    }

    /// Like [`tick`][Self::tick], but reports a bad wall-time delta
    /// instead of clamping it.
    ///
    /// # Errors
    ///
    /// - [`ClockError::InvalidTimeDelta`] for NaN or infinite input.
    /// - [`ClockError::NegativeTimeDelta`] for negative input.
    ///
    /// A rejected delta does not count as a frame.
    pub fn try_tick(&mut self, elapsed_wall_time: f64) -> Result<f64, ClockError> {
        if !elapsed_wall_time.is_finite() {
            return Err(ClockError::InvalidTimeDelta(elapsed_wall_time));
        }
        if elapsed_wall_time < 0.0 {
            return Err(ClockError::NegativeTimeDelta(-elapsed_wall_time));
        }

        let tick = elapsed_wall_time * self.base_time_scale * self.speed.get();
        Ok(self.record(tick))
    }

    fn record(&mut self, tick: f64) -> f64 {
        self.elapsed += tick;
        self.frames += 1;
        tick
    }

    /// Sets the speed multiplier through the shared cell.
    ///
    /// See [`SpeedControl::set`].
    pub fn set_speed_multiplier(&self, value: f64) -> Result<f64, ClockError> {
        self.speed.set(value)
    }

    /// Gets the current speed multiplier.
    pub fn get_speed_multiplier(&self) -> f64 {
        self.speed.get()
    }

    /// Gets a handle to the shared speed cell, for wiring up a UI.
    pub fn speed_control(&self) -> SpeedControl {
        self.speed.clone()
    }

    /// Gets the wall-time to phase conversion factor.
    pub fn get_base_time_scale(&self) -> f64 {
        self.base_time_scale
    }

    /// Gets the total simulation time handed out so far.
    pub fn get_elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Gets the number of frames ticked so far.
    pub fn get_frame_count(&self) -> u64 {
        self.frames
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new(None, SpeedControl::default())
    }
}
