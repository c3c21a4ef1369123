pub mod constants;
pub mod field;
pub mod noise_field;
pub mod overlay;
pub mod particle;
pub mod simulation;
pub mod spawn;
pub mod tools;
pub mod viewport;
pub mod wind;

pub use field::{FieldParams, ParticleField};
pub use noise_field::NoiseField;
pub use overlay::{GridLine, RadarOverlay};
pub use particle::{Particle, Rgba};
pub use simulation::SimulationState;
pub use viewport::Viewport;
pub use wind::{WindDirection, WindModel};
