use crate::constants::{GRID_LINES, NUM_STARS};
use crate::field::{FieldParams, ParticleField};
use crate::noise_field::NoiseField;
use crate::overlay::{GridLine, RadarOverlay, grid_lines};
use crate::tools::expand_seed64;
use crate::viewport::Viewport;
use crate::wind::{WindDirection, WindModel};
use glam::Vec2;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Everything the per-tick update touches, owned in one place.
///
/// Overlay geometry (grid and radar panel) is anchored to the viewport the simulation was
/// created with and is not rebuilt on resize.
pub struct SimulationState {
    seed: u32,
    viewport: Viewport,
    wind: WindModel,
    field: ParticleField,
    radar: RadarOverlay,
    grid: Vec<GridLine>,
    params: FieldParams,
    velocity: Vec2,
    rng: StdRng,
}

impl SimulationState {
    pub fn new(seed: u32, width: f32, height: f32) -> Self {
        Self::with_star_count(seed, width, height, NUM_STARS)
    }

    pub fn with_star_count(seed: u32, width: f32, height: f32, count: usize) -> Self {
        let viewport = Viewport::new(width, height);
        let mut rng = StdRng::seed_from_u64(expand_seed64(seed));
        let field = ParticleField::new(count, &viewport, &mut rng);
        let wind = WindModel::new(NoiseField::new(seed));
        let velocity = wind.velocity();
        let mut radar = RadarOverlay::anchored(&viewport);
        radar.update(velocity);

        log::debug!(
            "Simulation created: seed {}, {} stars, {}x{}",
            seed,
            count,
            width,
            height
        );

        Self {
            seed,
            viewport,
            wind,
            field,
            radar,
            grid: grid_lines(&viewport, GRID_LINES),
            params: FieldParams::default(),
            velocity,
            rng,
        }
    }

    /// One fixed step: sample the wind, move and recycle stars, re-aim the radar.
    pub fn tick(&mut self, elapsed_seconds: f64) {
        self.velocity = self.wind.tick(elapsed_seconds);
        self.field
            .tick(self.velocity, &self.viewport, self.params, &mut self.rng);
        self.radar.update(self.velocity);
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport.resize(width, height);
    }

    pub fn nudge_wind(&mut self, direction: WindDirection, boosted: bool) {
        self.wind.nudge(direction, boosted);
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn wind(&self) -> &WindModel {
        &self.wind
    }

    /// Wind from the latest tick, as (horizontal, vertical)
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn radar(&self) -> &RadarOverlay {
        &self.radar
    }

    pub fn grid(&self) -> &[GridLine] {
        &self.grid
    }
}
