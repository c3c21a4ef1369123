// Fixed overlay geometry: background grid and the wind radar

use crate::constants::*;
use crate::viewport::Viewport;
use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    pub from: Vec2,
    pub to: Vec2,
}

/// Evenly spaced grid over the viewport.
///
/// `count` vertical lines split the width into `count + 1` columns; horizontal lines reuse the
/// same spacing and stop at the last one that fits under the top edge.
pub fn grid_lines(viewport: &Viewport, count: usize) -> Vec<GridLine> {
    let separation = viewport.width() / (count + 1) as f32;
    if separation <= 0.0 {
        return Vec::new();
    }

    let vertical = (1..=count).map(|i| {
        let x = viewport.left + i as f32 * separation;
        GridLine {
            from: Vec2::new(x, viewport.bottom),
            to: Vec2::new(x, viewport.top),
        }
    });

    let rows = (viewport.height() / separation) as usize;
    let horizontal = (1..=rows).map(|i| {
        let y = viewport.bottom + i as f32 * separation;
        GridLine {
            from: Vec2::new(viewport.left, y),
            to: Vec2::new(viewport.right, y),
        }
    });

    vertical.chain(horizontal).collect()
}

/// Square panel in the top-left corner with a ring whose pointer shows the wind heading.
///
/// Geometry is fixed when the overlay is created; only the pointer angle changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarOverlay {
    /// Bottom-left corner of the panel
    pub panel_min: Vec2,
    pub panel_size: Vec2,
    pub center: Vec2,
    pub radius: f32,
    pointer_angle: f32,
}

impl RadarOverlay {
    pub fn anchored(viewport: &Viewport) -> Self {
        let top_left = Vec2::new(viewport.left + RADAR_INSET, viewport.top - RADAR_INSET);
        let panel_size = Vec2::splat(RADAR_PANEL_SIZE);
        let panel_min = Vec2::new(top_left.x, top_left.y - panel_size.y);
        let half_width = panel_size.x / 2.0;

        Self {
            panel_min,
            panel_size,
            center: panel_min + panel_size / 2.0,
            radius: RADAR_RING_RATIO * half_width,
            pointer_angle: 0.0,
        }
    }

    pub fn pointer_angle(&self) -> f32 {
        self.pointer_angle
    }

    /// `velocity` is (horizontal, vertical) wind
    pub fn update(&mut self, velocity: Vec2) {
        self.pointer_angle = velocity.y.atan2(velocity.x);
    }

    /// Pointer tip. Its distance from the center is always the ring radius.
    pub fn pointer_end(&self) -> Vec2 {
        let (sin, cos) = self.pointer_angle.sin_cos();
        self.center + Vec2::new(self.radius * cos, self.radius * sin)
    }
}
