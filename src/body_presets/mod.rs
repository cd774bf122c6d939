//! This module contains preset bodies for a scaled model of the Solar System.
//!
//! Distances are in display units where one astronomical unit is
//! [`AU_SCALE`] units. Sizes are exaggerated so every planet stays
//! visible next to the Sun.

mod planets;
mod stars;

pub use planets::*;
pub use stars::*;

/// Display units per astronomical unit.
pub const AU_SCALE: f64 = 15.0;
