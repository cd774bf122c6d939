use crate::OrbitModel;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A struct representing a body orbiting the central star.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Body {
    /// The name of the body.
    pub name: String,

    /// The radius of the body's mesh, in display units.
    ///
    /// This is purely visual and has no effect on the orbit.
    pub display_radius: f64,

    /// The orbit of the body.
    pub orbit: OrbitModel,
}

impl Body {
    /// Creates a new `Body` instance.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the body.
    /// * `display_radius` - The radius of the body's mesh, in display units.
    /// * `orbit` - The orbit of the body.
    ///
    /// # Returns
    ///
    /// A new `Body` instance.
    pub fn new(name: String, display_radius: f64, orbit: OrbitModel) -> Self {
        Self {
            name,
            display_radius,
            orbit,
        }
    }
}

/// The light-emitting body at the focus of every orbit.
///
/// It never moves; it only spins in place.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CentralBody {
    /// The name of the star.
    pub name: String,

    /// The radius of the star's mesh, in display units.
    pub display_radius: f64,

    /// How far the star spins each frame, in radians.
    pub axial_rotation_speed: f64,
}

impl CentralBody {
    /// Creates a new `CentralBody` instance.
    pub fn new(name: String, display_radius: f64, axial_rotation_speed: f64) -> Self {
        Self {
            name,
            display_radius,
            axial_rotation_speed,
        }
    }
}

impl Default for CentralBody {
    /// Creates a default `CentralBody` instance.
    ///
    /// Currently, this function returns the Sun.
    /// However, do not rely on this behavior, as it may change in the future.
    fn default() -> Self {
        crate::body_presets::the_sun()
    }
}
