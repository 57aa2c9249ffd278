//! Per-tick phases of the venation simulation.
//!
//! A tick runs the fixed sequence:
//! 1. [`crate::auxin::generate`] — scatter new auxin sources inside the
//!    margin.
//! 2. [`attraction_phase`] — each source finds its nearest vein node and is
//!    either absorbed (within the kill radius) or recorded as pending
//!    attraction on that node.
//! 3. [`growth_phase`] — every node holding pending attraction spawns one
//!    child along the aggregated pull direction.
//!
//! The margin expands and the clock advances only after these phases, so
//! all thresholds used within a tick reflect the pre-growth scale.

use crate::auxin::AuxinPool;
use crate::tree::VeinTree;
use crate::types::NodeId;
use glam::Vec2;

/// Routes every pool source to its nearest vein node.
///
/// A source whose nearest node lies within `kill_radius` is absorbed: it is
/// removed from the pool and contributes no attraction. Any other source
/// survives in the pool and is pushed onto the nearest node's pending set;
/// a node may accumulate several pending sources in one tick.
///
/// ### Parameters
/// - `tree` - The current tree; pending sets of nearest nodes are updated.
/// - `pool` - The live source pool; absorbed sources are removed.
/// - `kill_radius` - Absorption distance, already scaled by the clock's
///   `unit_distance`.
///
/// ### Returns
/// The number of sources absorbed.
pub fn attraction_phase(tree: &mut VeinTree, pool: &mut AuxinPool, kill_radius: f32) -> usize {
    let r2 = kill_radius * kill_radius;
    let mut survivors = Vec::with_capacity(pool.points.len());
    let mut consumed = 0;

    for p in pool.points.drain(..) {
        match tree.find_nearest(p) {
            Some((_, d2)) if d2 <= r2 => consumed += 1,
            Some((id, _)) => {
                tree.nodes[id].pending.push(p);
                survivors.push(p);
            }
            None => survivors.push(p),
        }
    }
    pool.points = survivors;
    consumed
}

/// Grows at most one child per node from the pending attraction collected
/// by [`attraction_phase`].
///
/// Only nodes that existed when the phase started are visited; children
/// created here become eligible for attraction and growth on the next tick.
/// For each visited node with pending sources, the unit vectors toward its
/// sources are summed and renormalized, and one child is placed at
/// `pos + dir * step_len`. The pending set is cleared either way. A zero
/// aggregate direction (opposing pulls cancelling exactly) produces no
/// child.
///
/// ### Returns
/// The ids of the nodes created, in creation order.
pub fn growth_phase(tree: &mut VeinTree, step_len: f32) -> Vec<NodeId> {
    let existing = tree.nodes.len();
    let mut new_ids = Vec::with_capacity(16);

    for id in 0..existing {
        if tree.nodes[id].pending.is_empty() {
            continue;
        }
        let pos = tree.nodes[id].pos;
        let mut sum = Vec2::ZERO;
        for &src in &tree.nodes[id].pending {
            sum += (src - pos).normalize_or_zero();
        }
        tree.nodes[id].pending.clear();

        let dir = sum.normalize_or_zero();
        if dir == Vec2::ZERO {
            continue;
        }
        new_ids.push(tree.add_child(id, pos + dir * step_len));
    }
    new_ids
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attraction_phase_absorbs_sources_inside_the_kill_radius() {
        let mut tree = VeinTree::new(Vec2::ZERO);
        let mut pool = AuxinPool {
            points: vec![Vec2::new(0.5, 0.0), Vec2::new(5.0, 0.0)],
        };

        let consumed = attraction_phase(&mut tree, &mut pool, 1.0);

        assert_eq!(consumed, 1);
        assert_eq!(pool.points, vec![Vec2::new(5.0, 0.0)]);
        // The absorbed source contributed no attraction; the survivor did.
        assert_eq!(tree.nodes[0].pending, vec![Vec2::new(5.0, 0.0)]);
    }

    #[test]
    fn attraction_phase_kill_radius_boundary_cases() {
        let kill = 1.0;
        let eps = 1e-4;

        let mut tree = VeinTree::new(Vec2::ZERO);
        let mut pool = AuxinPool {
            points: vec![Vec2::new(kill - eps, 0.0)],
        };
        assert_eq!(attraction_phase(&mut tree, &mut pool, kill), 1);
        assert!(pool.is_empty());
        assert!(tree.nodes[0].pending.is_empty());

        let mut tree = VeinTree::new(Vec2::ZERO);
        let mut pool = AuxinPool {
            points: vec![Vec2::new(kill + eps, 0.0)],
        };
        assert_eq!(attraction_phase(&mut tree, &mut pool, kill), 0);
        assert_eq!(pool.len(), 1);
        assert_eq!(tree.nodes[0].pending.len(), 1);
    }

    #[test]
    fn attraction_phase_routes_each_source_to_its_nearest_node() {
        let mut tree = VeinTree::new(Vec2::ZERO);
        let right = tree.add_child(0, Vec2::new(10.0, 0.0));

        let mut pool = AuxinPool {
            points: vec![Vec2::new(2.0, 0.0), Vec2::new(8.0, 0.0)],
        };
        attraction_phase(&mut tree, &mut pool, 0.5);

        assert_eq!(tree.nodes[0].pending, vec![Vec2::new(2.0, 0.0)]);
        assert_eq!(tree.nodes[right].pending, vec![Vec2::new(8.0, 0.0)]);
    }

    #[test]
    fn attraction_phase_tolerates_an_empty_pool() {
        let mut tree = VeinTree::new(Vec2::ZERO);
        let mut pool = AuxinPool::default();
        assert_eq!(attraction_phase(&mut tree, &mut pool, 1.0), 0);
        assert!(pool.is_empty());
    }

    #[test]
    fn growth_phase_places_one_child_along_the_aggregate_pull() {
        let mut tree = VeinTree::new(Vec2::ZERO);
        // Two pulls at +/-45 degrees aggregate to straight +x.
        tree.nodes[0].pending = vec![Vec2::new(3.0, 3.0), Vec2::new(3.0, -3.0)];

        let new_ids = growth_phase(&mut tree, 2.0);

        assert_eq!(new_ids.len(), 1);
        let child = &tree.nodes[new_ids[0]];
        assert!(child.pos.distance(Vec2::new(2.0, 0.0)) < 1e-5);
        assert_eq!(child.parent, Some(0));
        assert!(tree.nodes[0].pending.is_empty());
    }

    #[test]
    fn growth_phase_is_deterministic_for_fixed_pending_sources() {
        let pending = vec![Vec2::new(4.0, 1.0), Vec2::new(2.0, -3.0), Vec2::new(5.0, 5.0)];

        let mut first = None;
        for _ in 0..3 {
            let mut tree = VeinTree::new(Vec2::new(1.0, 1.0));
            tree.nodes[0].pending = pending.clone();
            let ids = growth_phase(&mut tree, 0.75);
            let pos = tree.nodes[ids[0]].pos;
            match first {
                None => first = Some(pos),
                Some(expected) => assert_eq!(pos, expected),
            }
        }
    }

    #[test]
    fn growth_phase_skips_nodes_without_pending_sources() {
        let mut tree = VeinTree::new(Vec2::ZERO);
        let leaf = tree.add_child(0, Vec2::new(1.0, 0.0));
        tree.nodes[leaf].pending = vec![Vec2::new(3.0, 0.0)];

        let new_ids = growth_phase(&mut tree, 1.0);

        // Only the leaf grew; the root had no pending attraction.
        assert_eq!(new_ids.len(), 1);
        assert_eq!(tree.nodes[new_ids[0]].parent, Some(leaf));
        assert_eq!(tree.nodes[0].children.len(), 1);
    }

    #[test]
    fn growth_phase_does_not_revisit_children_created_in_the_same_pass() {
        let mut tree = VeinTree::new(Vec2::ZERO);
        tree.nodes[0].pending = vec![Vec2::new(5.0, 0.0)];

        let new_ids = growth_phase(&mut tree, 1.0);
        assert_eq!(new_ids.len(), 1);
        // The new child has no pending sources and must not have grown.
        assert_eq!(tree.len(), 2);
        assert!(tree.nodes[new_ids[0]].children.is_empty());
    }

    #[test]
    fn growth_phase_skips_exactly_cancelling_pulls() {
        let mut tree = VeinTree::new(Vec2::ZERO);
        tree.nodes[0].pending = vec![Vec2::new(1.0, 0.0), Vec2::new(-1.0, 0.0)];

        let new_ids = growth_phase(&mut tree, 1.0);

        assert!(new_ids.is_empty());
        assert_eq!(tree.len(), 1);
        assert!(tree.nodes[0].pending.is_empty());
    }
}
