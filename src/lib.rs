//! # Orrery Kinematics
//! This library crate contains the state-update core of an interactive,
//! scaled model of the Solar System: a central star and the bodies that
//! circle it on fixed ellipses.
//!
//! It does not simulate gravity. Each body carries its own ellipse and
//! phase angle, and each frame the phase angle is pushed forward by an
//! amount derived from elapsed wall time and a global speed multiplier.
//! Bodies never interact, so they can be advanced in any order.
//!
//! Rendering, input and asset loading belong to the host. The crate
//! consumes a time delta and a speed multiplier, and produces positions
//! and spin increments.
//!
//! ## Getting started
//! This crate provides four main structs:
//! - [`OrbitModel`]: One body's ellipse and current phase angle.
//!   Advances the phase and evaluates the position from the polar
//!   equation of a conic.
//! - [`SimulationClock`]: Converts wall-clock deltas into a phase
//!   increment shared by all bodies, scaled by a [`SpeedControl`].
//! - [`Body`]: A named orbiting body with a display size.
//! - [`SolarSystem`]: The central star, the bodies, and the clock.
//!   Its [`step`][SolarSystem::step] method is the per-frame entry point.
//!
//! We also provide a [`body_presets`] module, which contains the Sun
//! and the eight planets at display scale.
//!
//! ## Example
//!
//! ```rust
//! use orrery_sim::{OrbitModel, SimulationClock};
//!
//! # fn main() {
//! let mut clock = SimulationClock::default();
//! let mut earth = OrbitModel::new(15.0, 0.0167, 0.02, 0.01, 0.0).unwrap();
//!
//! // One frame at 60 Hz
//! let tick = clock.tick(1.0 / 60.0);
//! earth.advance(tick * earth.get_angular_speed());
//!
//! let position = earth.position();
//! assert!((position.x - 14.7466).abs() < 1e-3);
//! assert!((position.z - 0.29497).abs() < 1e-4);
//! # }
//! ```

#![warn(missing_docs)]

mod body;
pub mod body_presets;
mod clock;
mod config;
mod error;
mod orbit;
mod system;

pub use body::{Body, CentralBody};
pub use clock::{
    ReversePolicy, SimulationClock, SpeedControl, BASE_TIME_SCALE, DEFAULT_SPEED_MULTIPLIER,
    SPEED_MAX, SPEED_MIN,
};
pub use config::{SimulationConfig, DEFAULT_PATH_SAMPLES};
pub use error::{BodyAddError, ClockError, ConfigError, OrbitError, SystemError};
pub use orbit::{OrbitModel, OrbitParameters, MAX_PATH_POINTS};
pub use system::{BodyUpdate, Frame, Id, SolarSystem};
