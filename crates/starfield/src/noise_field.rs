// Coherent noise source driving the wind

use noise::{NoiseFn, OpenSimplex};

/// Peak magnitude of raw 2D `OpenSimplex` output, which tops out near ±0.54
const RAW_PEAK: f64 = 0.54;

/// 2D OpenSimplex noise with a fixed seed.
///
/// Samples are smooth in both axes, so walking one axis over time gives a value that drifts
/// instead of jittering. Output is rescaled to [-1, 1].
#[derive(Clone)]
pub struct NoiseField {
    noise: OpenSimplex,
}

impl NoiseField {
    pub fn new(seed: u32) -> Self {
        Self {
            noise: OpenSimplex::new(seed),
        }
    }

    pub fn sample(&self, x: f64, y: f64) -> f32 {
        (self.noise.get([x, y]) / RAW_PEAK).clamp(-1.0, 1.0) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn same_seed_gives_same_samples() {
        let a = NoiseField::new(42);
        let b = NoiseField::new(42);

        for i in 0..100 {
            let t = i as f64 * 0.37;
            assert_eq!(a.sample(t, 0.0), b.sample(t, 0.0));
            assert_eq!(a.sample(0.0, t), b.sample(0.0, t));
        }
    }

    #[test]
    fn different_seeds_give_different_fields() {
        let a = NoiseField::new(1);
        let b = NoiseField::new(2);

        let differing = (0..50)
            .filter(|i| {
                let t = *i as f64 * 0.53 + 0.1;
                a.sample(t, 0.0) != b.sample(t, 0.0)
            })
            .count();
        assert!(differing > 0);
    }

    #[rstest]
    #[case(0.0)]
    #[case(0.25)]
    #[case(3.7)]
    #[case(128.9)]
    fn small_time_step_gives_small_change(#[case] t: f64) {
        let field = NoiseField::new(1234);
        let dt = 1e-4;

        let vertical = (field.sample(t + dt, 0.0) - field.sample(t, 0.0)).abs();
        let horizontal = (field.sample(0.0, t + dt) - field.sample(0.0, t)).abs();

        assert!(vertical < 0.01, "vertical jump {} at t={}", vertical, t);
        assert!(horizontal < 0.01, "horizontal jump {} at t={}", horizontal, t);
    }

    #[rstest]
    #[case(1)]
    #[case(7)]
    #[case(42)]
    #[case(12345)]
    fn wind_lines_span_unit_range(#[case] seed: u32) {
        let field = NoiseField::new(seed);
        let mut peak_vertical = 0.0_f32;
        let mut peak_horizontal = 0.0_f32;

        for i in 0..20_000 {
            let t = i as f64 * 0.01;
            let vertical = field.sample(t, 0.0);
            let horizontal = field.sample(0.0, t);
            assert!(vertical.abs() <= 1.0, "sample {} out of range at t={}", vertical, t);
            assert!(horizontal.abs() <= 1.0, "sample {} out of range at t={}", horizontal, t);
            peak_vertical = peak_vertical.max(vertical.abs());
            peak_horizontal = peak_horizontal.max(horizontal.abs());
        }

        assert!(peak_vertical >= 0.8, "vertical peak only {}", peak_vertical);
        assert!(peak_horizontal >= 0.8, "horizontal peak only {}", peak_horizontal);
    }
}
