//! This module contains presets for stars.
//!
//! "A star is a luminous spheroid of plasma held together by self-gravity."
//!
//! \- [Wikipedia](https://en.wikipedia.org/wiki/Star)

use crate::CentralBody;

/// Returns the Sun.
///
/// It spins by 0.002 radians each frame.
pub fn the_sun() -> CentralBody {
    CentralBody::new("The Sun".to_string(), 5.0, 0.002)
}
