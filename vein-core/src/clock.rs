/// Process-wide growth state, advanced once per simulation tick.
///
/// Tracks two cumulative growth rates and a derived spatial scale:
///
/// - `uniform_growth_rate` — cumulative overall growth, only used to derive
///   the scale below.
/// - `margin_growth_rate` — per-tick radial expansion factor applied to the
///   leaf margin.
/// - `unit_distance` — shrinks in inverse proportion to the cumulative
///   growth. Every distance threshold in the simulation (source spacing,
///   node spacing, kill radius, step length) is a multiple of it, so vein
///   and source density rise relative to the expanding leaf.
#[derive(Clone, Copy, Debug)]
pub struct GrowthClock {
    pub uniform_growth_rate: f32,
    pub margin_growth_rate: f32,
    pub unit_distance: f32,
    initial_growth_rate: f32,
    initial_unit_distance: f32,
}

impl GrowthClock {
    pub fn new(initial_growth_rate: f32, initial_unit_distance: f32) -> Self {
        Self {
            uniform_growth_rate: initial_growth_rate,
            margin_growth_rate: initial_growth_rate,
            unit_distance: initial_unit_distance,
            initial_growth_rate,
            initial_unit_distance,
        }
    }

    /// Advances both growth rates and re-derives `unit_distance`.
    pub fn tick(&mut self, increment: f32) {
        self.uniform_growth_rate += increment;
        self.margin_growth_rate += increment;
        self.unit_distance =
            self.initial_unit_distance * self.initial_growth_rate / self.uniform_growth_rate;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clock_starts_at_initial_values() {
        let clock = GrowthClock::new(1e-4, 2.0);
        assert_eq!(clock.uniform_growth_rate, 1e-4);
        assert_eq!(clock.margin_growth_rate, 1e-4);
        assert_eq!(clock.unit_distance, 2.0);
    }

    #[test]
    fn tick_accumulates_rates() {
        let mut clock = GrowthClock::new(1e-4, 1.0);
        clock.tick(1e-6);
        clock.tick(1e-6);
        assert!((clock.uniform_growth_rate - 1.02e-4).abs() < 1e-10);
        assert!((clock.margin_growth_rate - 1.02e-4).abs() < 1e-10);
    }

    #[test]
    fn unit_distance_shrinks_monotonically() {
        let mut clock = GrowthClock::new(1e-4, 1.0);
        let mut prev = clock.unit_distance;
        for _ in 0..100 {
            clock.tick(1e-6);
            assert!(clock.unit_distance < prev);
            assert!(clock.unit_distance > 0.0);
            prev = clock.unit_distance;
        }
    }

    #[test]
    fn unit_distance_is_inverse_to_cumulative_growth() {
        let mut clock = GrowthClock::new(1e-4, 1.0);
        clock.tick(1e-4); // doubles the cumulative rate
        assert!((clock.unit_distance - 0.5).abs() < 1e-6);
    }
}
