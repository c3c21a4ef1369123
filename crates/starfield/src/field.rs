// Star collection and its recycle policy

use crate::constants::{DELETE_BORDER_LIMIT, SPAWN_BORDER_LIMIT, SPEED_SCALE};
use crate::particle::Particle;
use crate::spawn::{spawn_inside, spawn_on_edge};
use crate::viewport::Viewport;
use glam::Vec2;
use rand::Rng;

/// Tunables for a single field tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldParams {
    pub deletion_margin: f32,
    pub spawn_margin: f32,
    pub speed_scale: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            deletion_margin: DELETE_BORDER_LIMIT,
            spawn_margin: SPAWN_BORDER_LIMIT,
            speed_scale: SPEED_SCALE,
        }
    }
}

/// Fixed-size arena of stars.
///
/// A star that leaves the deletion bounds is overwritten in place by a fresh one during the same
/// tick, so the slot count never changes. Each slot carries a generation that increments on every
/// recycle; renderers compare it to know when a slot now holds a different star.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    generations: Vec<u32>,
}

impl ParticleField {
    pub fn new(count: usize, viewport: &Viewport, rng: &mut impl Rng) -> Self {
        let particles = (0..count).map(|_| spawn_inside(rng, viewport)).collect();
        Self {
            particles,
            generations: vec![0; count],
        }
    }

    pub fn from_particles(particles: Vec<Particle>) -> Self {
        let generations = vec![0; particles.len()];
        Self {
            particles,
            generations,
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn get(&self, index: usize) -> Option<&Particle> {
        self.particles.get(index)
    }

    pub fn generation(&self, index: usize) -> u32 {
        self.generations.get(index).copied().unwrap_or(0)
    }

    /// Move every star by `velocity` and recycle the ones that left the viewport.
    ///
    /// Returns how many stars were replaced.
    pub fn tick(
        &mut self,
        velocity: Vec2,
        viewport: &Viewport,
        params: FieldParams,
        rng: &mut impl Rng,
    ) -> usize {
        let mut recycled = 0;

        for (particle, generation) in self.particles.iter_mut().zip(self.generations.iter_mut()) {
            particle.advance(velocity, params.speed_scale);

            if !viewport.contains(particle.position, params.deletion_margin) {
                *particle = spawn_on_edge(rng, viewport, velocity, params.spawn_margin);
                *generation = generation.wrapping_add(1);
                recycled += 1;
            }
        }

        if recycled > 0 {
            log::trace!("Recycled {} stars", recycled);
        }
        recycled
    }
}
