use serde::{Deserialize, Serialize};

/// Tunable parameters for the venation simulation.
///
/// All spacing fields (`source_spacing`, `node_spacing`, `kill_radius`,
/// `step_len`) are multipliers on the clock's current `unit_distance`, so
/// every threshold shrinks together as the leaf outgrows its initial scale.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Half the number of margin points; the polygon has `2 * margin_resolution`
    /// vertices sampled at angle steps of `pi / margin_resolution`.
    pub margin_resolution: usize,
    /// Starting value for both cumulative growth rates.
    pub initial_growth_rate: f32,
    /// Added to both growth rates every tick.
    pub growth_increment: f32,
    /// Spatial scale at the first tick; `unit_distance` decays from here.
    pub initial_unit_distance: f32,
    /// Minimum distance between any two auxin sources.
    pub source_spacing: f32,
    /// Minimum distance between a new auxin source and the nearest vein node.
    pub node_spacing: f32,
    /// Distance at which a vein node absorbs an auxin source.
    pub kill_radius: f32,
    /// Distance between a node and the child it spawns.
    pub step_len: f32,
    /// Dart throws per generation pass; bounds the per-tick sampling cost.
    pub sample_attempts: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            margin_resolution: 100,
            initial_growth_rate: 1e-4,
            growth_increment: 1e-6,
            initial_unit_distance: 1.0,
            source_spacing: 1.0,
            node_spacing: 1.0,
            kill_radius: 0.5,
            step_len: 0.5,
            sample_attempts: 2000,
        }
    }
}
