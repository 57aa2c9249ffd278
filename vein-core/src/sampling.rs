use glam::Vec2;
use rand::Rng;

/// Axis-aligned sampling region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// Minimum-separation (blue-noise) samples over `bounds` by dart throwing.
///
/// Draws up to `attempts` uniform candidates and keeps each one that lies at
/// least `separation` away from every sample kept before it. The attempt
/// budget, not a target count, bounds the cost; a saturated region simply
/// stops accepting.
///
/// ### Parameters
/// - `bounds` - Region to sample; candidates are uniform over it.
/// - `separation` - Minimum pairwise distance between kept samples.
/// - `attempts` - Number of candidate draws.
/// - `rng` - Random source; pass a seeded generator for reproducible output.
///
/// ### Returns
/// The kept samples, in acceptance order.
pub fn min_separation_samples(
    bounds: Rect,
    separation: f32,
    attempts: usize,
    rng: &mut impl Rng,
) -> Vec<Vec2> {
    let sep2 = separation * separation;
    let mut kept: Vec<Vec2> = Vec::new();

    for _ in 0..attempts {
        let p = Vec2::new(
            rng.random_range(bounds.min.x..=bounds.max.x),
            rng.random_range(bounds.min.y..=bounds.max.y),
        );
        if kept.iter().all(|q| q.distance_squared(p) >= sep2) {
            kept.push(p);
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn unit_square() -> Rect {
        Rect {
            min: Vec2::ZERO,
            max: Vec2::new(10.0, 10.0),
        }
    }

    #[test]
    fn samples_stay_inside_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let bounds = unit_square();
        for p in min_separation_samples(bounds, 1.0, 500, &mut rng) {
            assert!(bounds.contains(p));
        }
    }

    #[test]
    fn samples_respect_the_separation() {
        let mut rng = StdRng::seed_from_u64(11);
        let separation = 1.5;
        let pts = min_separation_samples(unit_square(), separation, 1000, &mut rng);
        assert!(!pts.is_empty());
        for i in 0..pts.len() {
            for j in i + 1..pts.len() {
                assert!(pts[i].distance(pts[j]) >= separation);
            }
        }
    }

    #[test]
    fn zero_attempts_yields_no_samples() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(min_separation_samples(unit_square(), 1.0, 0, &mut rng).is_empty());
    }

    #[test]
    fn same_seed_gives_same_samples() {
        let a = min_separation_samples(unit_square(), 1.0, 200, &mut StdRng::seed_from_u64(3));
        let b = min_separation_samples(unit_square(), 1.0, 200, &mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }
}
