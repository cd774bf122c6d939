//! This module contains presets for the eight planets.
//!
//! "A planet is a large, rounded astronomical body that is generally
//! required to be in orbit around a star."
//!
//! \- [Wikipedia](https://en.wikipedia.org/wiki/Planet)
//!
//! Each preset takes the initial phase angle, in radians, so the caller
//! decides whether the layout is random or fixed.

use rand::Rng;

use super::AU_SCALE;
use crate::{Body, OrbitError, OrbitModel};

/// The static description of one preset planet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanetPreset {
    /// The name of the planet.
    pub name: &'static str,
    /// The radius of the planet's mesh, in display units.
    pub display_radius: f64,
    /// The semi-major axis, in astronomical units.
    pub semi_major_axis_au: f64,
    /// The eccentricity of the orbit.
    pub eccentricity: f64,
    /// Radians of phase per unit of simulation time.
    pub angular_speed: f64,
    /// Radians of spin per frame.
    pub axial_rotation_speed: f64,
}

impl PlanetPreset {
    /// Builds the planet at the given initial phase angle.
    ///
    /// # Errors
    ///
    /// Only fails if `phase_angle` is not finite.
    pub fn build(&self, phase_angle: f64) -> Result<Body, OrbitError> {
        let orbit = OrbitModel::new(
            self.semi_major_axis_au * AU_SCALE,
            self.eccentricity,
            self.angular_speed,
            self.axial_rotation_speed,
            phase_angle,
        )?;
        Ok(Body::new(self.name.to_string(), self.display_radius, orbit))
    }
}

/// The eight planets, ordered outward from the Sun.
pub const PLANETS: [PlanetPreset; 8] = [
    PlanetPreset {
        name: "Mercury",
        display_radius: 0.4,
        semi_major_axis_au: 0.387,
        eccentricity: 0.2056,
        angular_speed: 0.04,
        axial_rotation_speed: 0.005,
    },
    PlanetPreset {
        name: "Venus",
        display_radius: 0.9,
        semi_major_axis_au: 0.723,
        eccentricity: 0.0068,
        angular_speed: 0.03,
        axial_rotation_speed: 0.001,
    },
    PlanetPreset {
        name: "Earth",
        display_radius: 1.0,
        semi_major_axis_au: 1.000,
        eccentricity: 0.0167,
        angular_speed: 0.02,
        axial_rotation_speed: 0.01,
    },
    PlanetPreset {
        name: "Mars",
        display_radius: 0.6,
        semi_major_axis_au: 1.524,
        eccentricity: 0.0934,
        angular_speed: 0.015,
        axial_rotation_speed: 0.01,
    },
    PlanetPreset {
        name: "Jupiter",
        display_radius: 3.0,
        semi_major_axis_au: 5.203,
        eccentricity: 0.0489,
        angular_speed: 0.008,
        axial_rotation_speed: 0.02,
    },
    PlanetPreset {
        name: "Saturn",
        display_radius: 2.4,
        semi_major_axis_au: 9.537,
        eccentricity: 0.0565,
        angular_speed: 0.006,
        axial_rotation_speed: 0.015,
    },
    PlanetPreset {
        name: "Uranus",
        display_radius: 2.0,
        semi_major_axis_au: 19.191,
        eccentricity: 0.0463,
        angular_speed: 0.004,
        axial_rotation_speed: 0.013,
    },
    PlanetPreset {
        name: "Neptune",
        display_radius: 1.9,
        semi_major_axis_au: 30.069,
        eccentricity: 0.0086,
        angular_speed: 0.002,
        axial_rotation_speed: 0.013,
    },
];

/// Returns Mercury, the smallest planet and the closest to the Sun.
pub fn mercury(phase_angle: f64) -> Result<Body, OrbitError> {
    PLANETS[0].build(phase_angle)
}

/// Returns Venus, the second planet from the Sun.
pub fn venus(phase_angle: f64) -> Result<Body, OrbitError> {
    PLANETS[1].build(phase_angle)
}

/// Returns Earth, the third planet from the Sun.
pub fn earth(phase_angle: f64) -> Result<Body, OrbitError> {
    PLANETS[2].build(phase_angle)
}

/// Returns Mars, the fourth planet from the Sun.
pub fn mars(phase_angle: f64) -> Result<Body, OrbitError> {
    PLANETS[3].build(phase_angle)
}

/// Returns Jupiter, the largest planet in the Solar System.
pub fn jupiter(phase_angle: f64) -> Result<Body, OrbitError> {
    PLANETS[4].build(phase_angle)
}

/// Returns Saturn, the sixth planet from the Sun.
pub fn saturn(phase_angle: f64) -> Result<Body, OrbitError> {
    PLANETS[5].build(phase_angle)
}

/// Returns Uranus, the seventh planet from the Sun.
pub fn uranus(phase_angle: f64) -> Result<Body, OrbitError> {
    PLANETS[6].build(phase_angle)
}

/// Returns Neptune, the farthest known planet from the Sun.
pub fn neptune(phase_angle: f64) -> Result<Body, OrbitError> {
    PLANETS[7].build(phase_angle)
}

/// Returns all eight planets, each at a phase angle drawn uniformly
/// from `[0, 2π)`.
pub fn all_planets<R: Rng + ?Sized>(rng: &mut R) -> Result<Vec<Body>, OrbitError> {
    PLANETS
        .iter()
        .map(|preset| preset.build(rng.random_range(0.0..core::f64::consts::TAU)))
        .collect()
}
