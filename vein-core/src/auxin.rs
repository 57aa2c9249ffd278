use crate::margin::LeafMargin;
use crate::sampling;
use crate::tree::VeinTree;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// The persistent pool of live auxin sources.
///
/// Sources are appended by [`generate`] and removed only when a vein node
/// absorbs them; they are never mutated in place.
#[derive(Debug, Default)]
pub struct AuxinPool {
    pub points: Vec<Vec2>,
}

impl AuxinPool {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Samples new auxin sources inside the leaf and appends them to the pool.
///
/// Candidates come from minimum-separation sampling over the margin's
/// bounding box. Each candidate is kept only if it passes every constraint:
///
/// 1. Its distance from the margin's origin point is within the boundary
///    radius at its polar angle (containment).
/// 2. It is at least `source_spacing` away from every pool source,
///    including ones accepted earlier in this call (candidates are pushed
///    as they are accepted, so one scan covers both).
/// 3. It is at least `node_spacing` away from the nearest vein node.
///
/// Zero accepted candidates is a legitimate outcome, e.g. when the blade is
/// already saturated with sources and veins.
///
/// ### Returns
/// The number of sources appended to `pool`.
pub fn generate(
    margin: &LeafMargin,
    tree: &VeinTree,
    pool: &mut AuxinPool,
    source_spacing: f32,
    node_spacing: f32,
    attempts: usize,
    rng: &mut impl Rng,
) -> usize {
    let bounds = margin.bounding_box();
    let candidates = sampling::min_separation_samples(bounds, source_spacing, attempts, rng);

    let origin = margin.origin();
    let source_spacing2 = source_spacing * source_spacing;
    let node_spacing2 = node_spacing * node_spacing;
    let mut accepted = 0;

    for cand in candidates {
        let rel = cand - origin;
        let mut angle = rel.y.atan2(rel.x);
        if angle < 0.0 {
            angle += TAU;
        }
        if rel.length() > margin.radius_at(angle) {
            continue;
        }
        if pool
            .points
            .iter()
            .any(|s| s.distance_squared(cand) < source_spacing2)
        {
            continue;
        }
        if let Some((_, d2)) = tree.find_nearest(cand)
            && d2 < node_spacing2
        {
            continue;
        }

        pool.points.push(cand);
        accepted += 1;
    }
    accepted
}
