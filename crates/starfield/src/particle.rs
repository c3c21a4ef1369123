use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_array(c: [u8; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }

    /// Scale the colour channels, keeping alpha
    pub fn dimmed(&self, factor: f32) -> Self {
        let scale = |c: u8| (c as f32 * factor) as u8;
        Self::new(scale(self.r), scale(self.g), scale(self.b), self.a)
    }
}

/// A single star. Radius, segment count and colour are fixed when it spawns;
/// only the position changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub radius: f32,
    pub segments: u32,
    pub color: Rgba,
}

impl Particle {
    /// Bigger stars move faster, which gives the field its depth
    pub fn advance(&mut self, velocity: Vec2, speed_scale: f32) {
        self.position += velocity * self.radius * speed_scale;
    }
}
