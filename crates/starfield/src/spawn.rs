// Where new stars appear

use crate::constants::*;
use crate::particle::{Particle, Rgba};
use crate::viewport::Viewport;
use glam::Vec2;
use rand::Rng;
use std::ops::RangeInclusive;

/// Which pair of viewport edges a recycled star enters through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnAxis {
    /// Left or right edge, anywhere along the full height
    Horizontal,
    /// Bottom or top edge, anywhere along the full width
    Vertical,
}

impl SpawnAxis {
    pub fn random(rng: &mut impl Rng) -> Self {
        if rng.random_bool(0.5) {
            SpawnAxis::Horizontal
        } else {
            SpawnAxis::Vertical
        }
    }
}

/// Rectangle a new star is placed in, as (x range, y range).
///
/// The band sits just outside the edge the wind is blowing away from, so the star drifts into
/// view. A heading of exactly zero counts as positive: such stars enter from the left or the
/// bottom.
pub fn spawn_band(
    axis: SpawnAxis,
    viewport: &Viewport,
    heading: Vec2,
    margin: f32,
) -> (RangeInclusive<f32>, RangeInclusive<f32>) {
    match axis {
        SpawnAxis::Horizontal => {
            let x = if heading.x >= 0.0 {
                (viewport.left - margin)..=viewport.left
            } else {
                viewport.right..=(viewport.right + margin)
            };
            (x, viewport.bottom..=viewport.top)
        }
        SpawnAxis::Vertical => {
            let y = if heading.y >= 0.0 {
                (viewport.bottom - margin)..=viewport.bottom
            } else {
                viewport.top..=(viewport.top + margin)
            };
            (viewport.left..=viewport.right, y)
        }
    }
}

/// Star placed anywhere inside the viewport, used to fill the field at startup
pub fn spawn_inside(rng: &mut impl Rng, viewport: &Viewport) -> Particle {
    random_particle(
        rng,
        viewport.left..=viewport.right,
        viewport.bottom..=viewport.top,
    )
}

/// Replacement star on a randomly chosen axis
pub fn spawn_on_edge(
    rng: &mut impl Rng,
    viewport: &Viewport,
    heading: Vec2,
    margin: f32,
) -> Particle {
    let axis = SpawnAxis::random(rng);
    spawn_on_axis(rng, axis, viewport, heading, margin)
}

pub fn spawn_on_axis(
    rng: &mut impl Rng,
    axis: SpawnAxis,
    viewport: &Viewport,
    heading: Vec2,
    margin: f32,
) -> Particle {
    let (x, y) = spawn_band(axis, viewport, heading, margin);
    random_particle(rng, x, y)
}

fn random_particle(
    rng: &mut impl Rng,
    x: RangeInclusive<f32>,
    y: RangeInclusive<f32>,
) -> Particle {
    Particle {
        position: Vec2::new(rng.random_range(x), rng.random_range(y)),
        radius: rng.random_range(MIN_STAR_RADIUS..=MAX_STAR_RADIUS) as f32,
        segments: rng.random_range(MIN_STAR_SEGMENTS..=MAX_STAR_SEGMENTS),
        color: random_color(rng),
    }
}

pub fn random_color(rng: &mut impl Rng) -> Rgba {
    Rgba::new(
        rng.random(),
        rng.random(),
        rng.random(),
        rng.random_range(MIN_STAR_ALPHA..=u8::MAX),
    )
}
