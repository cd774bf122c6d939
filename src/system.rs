use core::fmt;
use std::collections::HashMap;

use glam::DVec3;
use rand::{rngs::StdRng, Rng, SeedableRng};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    body_presets, Body, BodyAddError, CentralBody, ConfigError, SimulationClock,
    SimulationConfig, SystemError, DEFAULT_PATH_SAMPLES,
};

/// The identifier of a body within a [`SolarSystem`].
pub type Id = u64;

/// What happened to one body during a frame.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BodyUpdate {
    /// The body this update is for.
    pub id: Id,
    /// Where to place the body's mesh.
    pub position: DVec3,
    /// How far to spin the body's mesh this frame, in radians.
    pub axial_rotation_delta: f64,
}

/// The result of one simulation step, ready to hand to a renderer.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Frame {
    /// The tick every body was advanced by.
    pub tick: f64,
    /// How far to spin the central star this frame, in radians.
    pub central_rotation_delta: f64,
    /// One update per body, ordered by id.
    pub updates: Vec<BodyUpdate>,
}

/// Struct that represents the whole orrery: a fixed central star, the
/// bodies orbiting it, and the clock that drives them.
///
/// Bodies never interact. The only shared state is the clock's speed
/// multiplier.
///
/// # Example
/// ```
/// use orrery_sim::{SimulationConfig, SolarSystem};
///
/// let config = SimulationConfig { seed: Some(1), ..Default::default() };
/// let mut system = SolarSystem::from_config(&config).unwrap();
///
/// // One 60 Hz frame
/// let frame = system.step(1.0 / 60.0);
/// assert_eq!(frame.updates.len(), 8);
/// ```
#[derive(Clone, Debug)]
pub struct SolarSystem {
    central: CentralBody,

    bodies: HashMap<Id, Body>,

    /// The next ID to assign to a body.
    next_id: Id,

    clock: SimulationClock,

    /// Whether orbit paths should be drawn. Only the renderer reads this.
    paths_visible: bool,

    path_samples: usize,
}

impl SolarSystem {
    /// Creates a system with no orbiting bodies.
    pub fn new(central: CentralBody, clock: SimulationClock) -> Self {
        Self {
            central,
            bodies: HashMap::new(),
            next_id: 0,
            clock,
            paths_visible: true,
            path_samples: DEFAULT_PATH_SAMPLES,
        }
    }

    /// Creates the Sun and the eight planets, using the configured seed
    /// for the initial phase angles or a fresh OS-seeded RNG without one.
    ///
    /// # Errors
    ///
    /// Returns [`SystemError::Config`] if the configuration is invalid.
    pub fn from_config(config: &SimulationConfig) -> Result<Self, SystemError> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::from_config_with_rng(config, &mut rng)
    }

    /// Creates the Sun and the eight planets with the default
    /// configuration and a fixed seed for the initial phase angles.
    pub fn from_seed(seed: u64) -> Result<Self, SystemError> {
        let config = SimulationConfig {
            seed: Some(seed),
            ..Default::default()
        };
        Self::from_config(&config)
    }

    /// Creates the Sun and the eight planets, drawing initial phase
    /// angles from `rng`. The configured seed is ignored.
    pub fn from_config_with_rng<R: Rng + ?Sized>(
        config: &SimulationConfig,
        rng: &mut R,
    ) -> Result<Self, SystemError> {
        config.validate()?;
        let clock = SimulationClock::from_config(config).map_err(ConfigError::from)?;

        let mut system = Self::new(body_presets::the_sun(), clock);
        system.path_samples = config.path_samples;

        for planet in body_presets::all_planets(rng)? {
            system.add_body(planet).map_err(|(err, _)| err)?;
        }

        log::debug!("built {system}");
        Ok(system)
    }

    /// Adds a body to the system.
    ///
    /// `body`: The body to add.
    ///
    /// Returns: The id of the newly-added body, or the body back if
    /// one with the same name is already present.
    pub fn add_body(&mut self, body: Body) -> Result<Id, (BodyAddError, Body)> {
        if self.get_body_index_with_name(&body.name).is_some() {
            return Err((BodyAddError::DuplicateName(body.name.clone()), body));
        }

        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);

        log::debug!("adding body {id}: {}", body.name);
        self.bodies.insert(id, body);

        Ok(id)
    }

    /// Removes a body from the system, returning it if it was present.
    pub fn remove_body(&mut self, id: Id) -> Option<Body> {
        let body = self.bodies.remove(&id)?;
        log::debug!("removed body {id}: {}", body.name);
        Some(body)
    }

    /// Gets all bodies in the system, ordered by id.
    pub fn get_bodies(&self) -> Vec<(Id, &Body)> {
        let mut bodies: Vec<_> = self.bodies.iter().map(|(&id, body)| (id, body)).collect();
        bodies.sort_unstable_by_key(|&(id, _)| id);
        bodies
    }

    /// Gets an immutable reference to a body in the system.
    pub fn get_body(&self, id: Id) -> Option<&Body> {
        self.bodies.get(&id)
    }

    /// Gets a mutable reference to a body in the system.
    pub fn get_body_mut(&mut self, id: Id) -> Option<&mut Body> {
        self.bodies.get_mut(&id)
    }

    /// Gets the id of a body with a given name.
    pub fn get_body_index_with_name(&self, name: &str) -> Option<Id> {
        self.bodies
            .iter()
            .find(|(_, body)| body.name == name)
            .map(|(&id, _)| id)
    }

    /// Gets the current position of a body.
    pub fn get_body_position(&self, id: Id) -> Option<DVec3> {
        self.bodies.get(&id).map(|body| body.orbit.position())
    }

    /// Gets the central star.
    pub fn get_central_body(&self) -> &CentralBody {
        &self.central
    }

    /// Gets the clock driving this system.
    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    /// Advances the system by one frame.
    ///
    /// The clock is ticked exactly once and every body is advanced by
    /// that same tick, scaled by its own angular speed.
    pub fn step(&mut self, wall_delta: f64) -> Frame {
        let tick = self.clock.tick(wall_delta);
        self.apply_tick(tick)
    }

    /// Advances every body by an already computed tick, without
    /// touching the clock.
    pub fn apply_tick(&mut self, tick: f64) -> Frame {
        let mut updates: Vec<BodyUpdate> = self
            .bodies
            .iter_mut()
            .map(|(&id, body)| {
                body.orbit.advance_scaled(tick);
                BodyUpdate {
                    id,
                    position: body.orbit.position(),
                    axial_rotation_delta: body.orbit.axial_rotation_delta(),
                }
            })
            .collect();
        updates.sort_unstable_by_key(|update| update.id);

        log::trace!("applied tick {tick} to {} bodies", updates.len());

        Frame {
            tick,
            central_rotation_delta: self.central.axial_rotation_speed,
            updates,
        }
    }

    /// Samples every body's orbit path at the configured number of
    /// points, ordered by id.
    ///
    /// Paths are static; call this once when building the scene.
    pub fn orbit_paths(&self) -> Vec<(Id, Vec<DVec3>)> {
        self.orbit_paths_with_samples(self.path_samples)
    }

    /// Samples every body's orbit path at `samples` points, ordered by id.
    pub fn orbit_paths_with_samples(&self, samples: usize) -> Vec<(Id, Vec<DVec3>)> {
        self.get_bodies()
            .into_iter()
            .map(|(id, body)| (id, body.orbit.orbit_path(samples)))
            .collect()
    }

    /// Sets whether the renderer should draw orbit paths.
    pub fn set_paths_visible(&mut self, visible: bool) {
        self.paths_visible = visible;
    }

    /// Gets whether the renderer should draw orbit paths.
    pub fn paths_visible(&self) -> bool {
        self.paths_visible
    }
}

impl Default for SolarSystem {
    /// Creates an empty system around the Sun with a default clock.
    fn default() -> Self {
        Self::new(CentralBody::default(), SimulationClock::default())
    }
}

impl fmt::Display for SolarSystem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Solar system around {} with {} bodies, t={}",
            self.central.name,
            self.bodies.len(),
            self.clock.get_elapsed()
        )
    }
}
