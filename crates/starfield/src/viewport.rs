use glam::Vec2;

/// Window bounds in simulation space. The origin corner (left, bottom) never moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            left: 0.0,
            right: width,
            top: height,
            bottom: 0.0,
        }
    }

    /// Only the far edges follow the window size
    pub fn resize(&mut self, width: f32, height: f32) {
        self.right = width;
        self.top = height;
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.top - self.bottom
    }

    /// True while `position` is inside the viewport grown by `margin` on every side.
    /// Sitting exactly on the grown edge still counts as inside.
    pub fn contains(&self, position: Vec2, margin: f32) -> bool {
        !(position.x < self.left - margin
            || position.x > self.right + margin
            || position.y < self.bottom - margin
            || position.y > self.top + margin)
    }
}
