// Wind: noise-driven velocity multiplier plus user offsets

use crate::constants::{TIME_DAMPING, WIND_BOOSTED_STEP, WIND_OFFSET_SCALE, WIND_STEP};
use crate::noise_field::NoiseField;
use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindDirection {
    Up,
    Down,
    Left,
    Right,
}

impl WindDirection {
    /// Unit change applied to (horizontal, vertical) offsets
    fn delta(self) -> (i32, i32) {
        match self {
            WindDirection::Up => (0, 1),
            WindDirection::Down => (0, -1),
            WindDirection::Left => (-1, 0),
            WindDirection::Right => (1, 0),
        }
    }
}

#[derive(Clone)]
pub struct WindModel {
    noise: NoiseField,
    simulated_time: f64,
    offset_x: i32,
    offset_y: i32,
}

impl WindModel {
    pub fn new(noise: NoiseField) -> Self {
        Self {
            noise,
            simulated_time: 0.0,
            offset_x: 0,
            offset_y: 0,
        }
    }

    pub fn simulated_time(&self) -> f64 {
        self.simulated_time
    }

    /// Current user offsets as (horizontal, vertical)
    pub fn offsets(&self) -> (i32, i32) {
        (self.offset_x, self.offset_y)
    }

    /// Advance simulated time and return the new wind as (horizontal, vertical).
    pub fn tick(&mut self, elapsed_seconds: f64) -> Vec2 {
        self.simulated_time += elapsed_seconds * TIME_DAMPING;
        self.velocity()
    }

    /// Wind at the current simulated time.
    ///
    /// The two axes read the noise along different lines through the origin so they do not move
    /// in lockstep.
    pub fn velocity(&self) -> Vec2 {
        let vertical = self.noise.sample(self.simulated_time, 0.0)
            + self.offset_y as f32 * WIND_OFFSET_SCALE;
        let horizontal = self.noise.sample(0.0, self.simulated_time)
            + self.offset_x as f32 * WIND_OFFSET_SCALE;
        Vec2::new(horizontal, vertical)
    }

    /// Shift the user offset one step, or ten when `boosted`. Offsets are not clamped.
    pub fn nudge(&mut self, direction: WindDirection, boosted: bool) {
        let step = if boosted { WIND_BOOSTED_STEP } else { WIND_STEP };
        let (dx, dy) = direction.delta();
        self.offset_x = self.offset_x.saturating_add(dx * step);
        self.offset_y = self.offset_y.saturating_add(dy * step);
        log::debug!(
            "Additional wind now {:+}, {:+}",
            self.offset_x,
            self.offset_y
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn model() -> WindModel {
        WindModel::new(NoiseField::new(7))
    }

    #[rstest]
    #[case(WindDirection::Right, false, (1, 0))]
    #[case(WindDirection::Right, true, (10, 0))]
    #[case(WindDirection::Left, false, (-1, 0))]
    #[case(WindDirection::Left, true, (-10, 0))]
    #[case(WindDirection::Up, false, (0, 1))]
    #[case(WindDirection::Up, true, (0, 10))]
    #[case(WindDirection::Down, false, (0, -1))]
    #[case(WindDirection::Down, true, (0, -10))]
    fn single_nudge(
        #[case] direction: WindDirection,
        #[case] boosted: bool,
        #[case] expected: (i32, i32),
    ) {
        let mut wind = model();
        wind.nudge(direction, boosted);
        assert_eq!(wind.offsets(), expected);
    }

    #[test]
    fn offsets_are_unbounded() {
        let mut wind = model();
        for _ in 0..100 {
            wind.nudge(WindDirection::Left, true);
            wind.nudge(WindDirection::Up, true);
        }
        assert_eq!(wind.offsets(), (-1000, 1000));
    }

    #[test]
    fn tick_accumulates_damped_time() {
        let mut wind = model();
        for _ in 0..240 {
            wind.tick(1.0 / 240.0);
        }
        assert!((wind.simulated_time() - 0.1).abs() < 1e-9);
    }

    #[test]
    fn velocity_samples_noise_on_swapped_axes() {
        let noise = NoiseField::new(7);
        let mut wind = WindModel::new(noise.clone());

        let velocity = wind.tick(2.5);
        let t = 2.5 * TIME_DAMPING;

        assert_eq!(velocity.y, noise.sample(t, 0.0));
        assert_eq!(velocity.x, noise.sample(0.0, t));
    }

    #[test]
    fn offsets_add_a_tenth_per_step() {
        let mut wind = model();
        let base = wind.tick(1.0);

        wind.nudge(WindDirection::Right, true);
        wind.nudge(WindDirection::Down, false);
        let shifted = wind.velocity();

        assert!((shifted.x - base.x - 1.0).abs() < 1e-5);
        assert!((shifted.y - base.y + 0.1).abs() < 1e-5);
    }
}
