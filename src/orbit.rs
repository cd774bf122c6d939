#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use core::f64::consts::TAU;

use glam::DVec3;
use rand::Rng;

use crate::OrbitError;

/// The most points [`OrbitModel::orbit_path_with_step`] will produce.
pub const MAX_PATH_POINTS: usize = 1 << 20;

/// The raw, unvalidated parameters of an orbit.
///
/// This is the plain-data form of an [`OrbitModel`]; converting it into
/// one with [`TryFrom`] runs the same validation as [`OrbitModel::new`].
///
/// # Example
/// ```
/// use orrery_sim::{OrbitModel, OrbitParameters};
///
/// let params = OrbitParameters {
///     semi_major_axis: 15.0,
///     eccentricity: 0.0167,
///     angular_speed: 0.02,
///     axial_rotation_speed: 0.01,
///     phase_angle: 0.0,
/// };
///
/// let orbit = OrbitModel::try_from(params).unwrap();
/// assert_eq!(orbit.get_semi_major_axis(), 15.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrbitParameters {
    /// The semi-major axis, in scaled display units.
    pub semi_major_axis: f64,
    /// The eccentricity. Must be in `[0, 1)`.
    pub eccentricity: f64,
    /// The angular speed, in radians per unit of simulation time.
    pub angular_speed: f64,
    /// The axial rotation speed, in radians per frame.
    pub axial_rotation_speed: f64,
    /// The phase angle, in radians.
    pub phase_angle: f64,
}

/// The orbit of one body around the central star.
///
/// The body moves along a coplanar ellipse with the star at one focus.
/// Its place on the ellipse is given by the phase angle, which is
/// measured from the periapsis and plays the role of the true anomaly.
///
/// There is no notion of paused or stopped: advancing by zero is how
/// a frozen body is expressed.
///
/// # Example
/// ```
/// use orrery_sim::OrbitModel;
///
/// let mut orbit = OrbitModel::new(
///     // Semi-major axis
///     15.0,
///     // Eccentricity
///     0.0167,
///     // Angular speed
///     0.02,
///     // Axial rotation speed
///     0.01,
///     // Initial phase angle
///     0.0,
/// ).unwrap();
///
/// orbit.advance(0.02);
///
/// let position = orbit.position();
/// assert_eq!(position.y, 0.0);
/// assert!((position.length() - 14.7495).abs() < 1e-3);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "OrbitParameters", into = "OrbitParameters")
)]
pub struct OrbitModel {
    semi_major_axis: f64,
    eccentricity: f64,
    angular_speed: f64,
    axial_rotation_speed: f64,

    /// Grows without bound. Only its sine and cosine are ever consumed.
    phase_angle: f64,
}

impl OrbitModel {
    /// Creates a new orbit.
    ///
    /// # Arguments
    ///
    /// * `semi_major_axis` - Half the longest diameter of the ellipse, in display units.
    /// * `eccentricity` - The ellipse shape, in `[0, 1)`. Zero is a circle.
    /// * `angular_speed` - Radians of phase per unit of simulation time.
    /// * `axial_rotation_speed` - Radians of spin per frame.
    /// * `initial_phase_angle` - The starting phase angle, in radians.
    ///
    /// # Errors
    ///
    /// Returns an [`OrbitError`] if the semi-major axis is not positive,
    /// the eccentricity is outside `[0, 1)`, or any value is not finite.
    pub fn new(
        semi_major_axis: f64,
        eccentricity: f64,
        angular_speed: f64,
        axial_rotation_speed: f64,
        initial_phase_angle: f64,
    ) -> Result<Self, OrbitError> {
        // Written so that NaN fails every check.
        if !(semi_major_axis > 0.0 && semi_major_axis.is_finite()) {
            return Err(OrbitError::NonPositiveSemiMajorAxis(semi_major_axis));
        }
        if !(0.0..1.0).contains(&eccentricity) {
            return Err(OrbitError::EccentricityOutOfRange(eccentricity));
        }
        if !angular_speed.is_finite() {
            return Err(OrbitError::NonFiniteAngularSpeed(angular_speed));
        }
        if !axial_rotation_speed.is_finite() {
            return Err(OrbitError::NonFiniteAxialRotationSpeed(
                axial_rotation_speed,
            ));
        }
        if !initial_phase_angle.is_finite() {
            return Err(OrbitError::NonFinitePhaseAngle(initial_phase_angle));
        }

        log::debug!(
            "new orbit: a={semi_major_axis}, e={eccentricity}, \
            speed={angular_speed}, phase={initial_phase_angle}"
        );

        Ok(Self {
            semi_major_axis,
            eccentricity,
            angular_speed,
            axial_rotation_speed,
            phase_angle: initial_phase_angle,
        })
    }

    /// Creates a new orbit with an initial phase angle drawn
    /// uniformly from `[0, 2π)`.
    ///
    /// Pass a seeded RNG for reproducible layouts.
    pub fn with_random_phase<R: Rng + ?Sized>(
        semi_major_axis: f64,
        eccentricity: f64,
        angular_speed: f64,
        axial_rotation_speed: f64,
        rng: &mut R,
    ) -> Result<Self, OrbitError> {
        let phase = rng.random_range(0.0..TAU);
        Self::new(
            semi_major_axis,
            eccentricity,
            angular_speed,
            axial_rotation_speed,
            phase,
        )
    }

    /// Adds `delta_phase` radians to the phase angle.
    ///
    /// Any real is accepted: negative runs the body backwards,
    /// zero leaves it where it is. No other state is touched.
    #[inline]
    pub fn advance(&mut self, delta_phase: f64) {
        self.phase_angle += delta_phase;
    }

    /// Advances by a clock tick scaled by this body's own angular speed.
    ///
    /// Equivalent to `self.advance(tick * self.get_angular_speed())`.
    #[inline]
    pub fn advance_scaled(&mut self, tick: f64) {
        self.advance(tick * self.angular_speed);
    }

    /// Gets the orbital radius at the current phase angle.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius_at(self.phase_angle)
    }

    /// Gets the orbital radius at a given phase angle, using the polar
    /// form of a conic section with the star at the focus:
    ///
    /// `r = a(1 - e²) / (1 + e·cos θ)`
    ///
    /// # Performance
    /// One cosine and a division; this should never be a bottleneck.
    #[inline]
    pub fn radius_at(&self, angle: f64) -> f64 {
        let e = self.eccentricity;
        self.semi_major_axis * (1.0 - e * e) / (1.0 + e * angle.cos())
    }

    /// Gets the position at the current phase angle.
    ///
    /// The orbit lies in the XZ plane, so `y` is always zero.
    /// This is a pure function of the stored parameters: the same
    /// phase angle always yields bit-identical output.
    #[inline]
    pub fn position(&self) -> DVec3 {
        self.position_at(self.phase_angle)
    }

    /// Gets the position at a given phase angle.
    ///
    /// See [`position`][Self::position].
    pub fn position_at(&self, angle: f64) -> DVec3 {
        let r = self.radius_at(angle);
        let (sin, cos) = angle.sin_cos();
        DVec3::new(r * cos, 0.0, r * sin)
    }

    /// Gets the spin to apply to the body's mesh this frame.
    ///
    /// The accumulated orientation belongs to the renderer; this only
    /// hands out the constant per-frame increment.
    #[inline]
    pub fn axial_rotation_delta(&self) -> f64 {
        self.axial_rotation_speed
    }

    /// Samples the static orbit path at `samples` evenly spaced phase
    /// angles over `[0, 2π)`.
    ///
    /// The end point is not repeated; renderers that draw a line
    /// strip should close the loop themselves.
    ///
    /// # Example
    /// ```
    /// use orrery_sim::OrbitModel;
    ///
    /// let orbit = OrbitModel::new(1.0, 0.0, 1.0, 0.0, 0.0).unwrap();
    /// let path = orbit.orbit_path(4);
    ///
    /// assert_eq!(path.len(), 4);
    /// assert!((path[1].z - 1.0).abs() < 1e-12);
    /// ```
    pub fn orbit_path(&self, samples: usize) -> Vec<DVec3> {
        let step = TAU / samples as f64;
        (0..samples)
            .map(|i| self.position_at(i as f64 * step))
            .collect()
    }

    /// Samples the static orbit path at `0, step, 2·step, …` for as
    /// long as the angle stays at or under `2π`.
    ///
    /// # Errors
    ///
    /// Returns [`OrbitError::InvalidPathStep`] for a step that is
    /// not positive and finite, or so small that the path would hold
    /// more than [`MAX_PATH_POINTS`] points.
    pub fn orbit_path_with_step(&self, step: f64) -> Result<Vec<DVec3>, OrbitError> {
        if !(step > 0.0 && step.is_finite()) {
            return Err(OrbitError::InvalidPathStep(step));
        }

        let intervals = (TAU / step).floor();
        if intervals >= MAX_PATH_POINTS as f64 {
            return Err(OrbitError::InvalidPathStep(step));
        }

        // Index-based to avoid drift from repeated addition.
        let count = intervals as usize + 1;
        Ok((0..count)
            .map(|i| i as f64 * step)
            .take_while(|&angle| angle <= TAU)
            .map(|angle| self.position_at(angle))
            .collect())
    }

    /// Gets the semi-major axis of the orbit.
    pub fn get_semi_major_axis(&self) -> f64 {
        self.semi_major_axis
    }

    /// Gets the eccentricity of the orbit.
    pub fn get_eccentricity(&self) -> f64 {
        self.eccentricity
    }

    /// Gets the angular speed, in radians per unit of simulation time.
    pub fn get_angular_speed(&self) -> f64 {
        self.angular_speed
    }

    /// Gets the axial rotation speed, in radians per frame.
    pub fn get_axial_rotation_speed(&self) -> f64 {
        self.axial_rotation_speed
    }

    /// Gets the current phase angle, in radians.
    ///
    /// This is not wrapped into `[0, 2π)`.
    pub fn get_phase_angle(&self) -> f64 {
        self.phase_angle
    }

    /// Gets the semi-latus rectum, `a(1 - e²)`.
    ///
    /// This is the radius at a phase angle of a quarter turn.
    pub fn get_semi_latus_rectum(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity * self.eccentricity)
    }

    /// Gets the semi-minor axis, `a·sqrt(1 - e²)`.
    pub fn get_semi_minor_axis(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity * self.eccentricity).sqrt()
    }

    /// Gets the periapsis, the closest distance to the star.
    ///
    /// Reached at a phase angle of zero.
    pub fn get_periapsis(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity)
    }

    /// Gets the apoapsis, the farthest distance from the star.
    ///
    /// Reached at a phase angle of π.
    pub fn get_apoapsis(&self) -> f64 {
        self.semi_major_axis * (1.0 + self.eccentricity)
    }

    /// Gets the time, in simulation-time units, for one full turn of
    /// the phase angle.
    ///
    /// Returns infinity for a body with zero angular speed.
    pub fn get_period(&self) -> f64 {
        TAU / self.angular_speed.abs()
    }
}

impl TryFrom<OrbitParameters> for OrbitModel {
    type Error = OrbitError;

    fn try_from(params: OrbitParameters) -> Result<Self, Self::Error> {
        Self::new(
            params.semi_major_axis,
            params.eccentricity,
            params.angular_speed,
            params.axial_rotation_speed,
            params.phase_angle,
        )
    }
}

impl From<OrbitModel> for OrbitParameters {
    fn from(orbit: OrbitModel) -> Self {
        Self {
            semi_major_axis: orbit.semi_major_axis,
            eccentricity: orbit.eccentricity,
            angular_speed: orbit.angular_speed,
            axial_rotation_speed: orbit.axial_rotation_speed,
            phase_angle: orbit.phase_angle,
        }
    }
}

impl Default for OrbitModel {
    /// Creates a unit circular orbit at phase zero, moving one radian
    /// per unit of simulation time.
    fn default() -> Self {
        Self {
            semi_major_axis: 1.0,
            eccentricity: 0.0,
            angular_speed: 1.0,
            axial_rotation_speed: 0.0,
            phase_angle: 0.0,
        }
    }
}
