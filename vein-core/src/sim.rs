use crate::auxin::{self, AuxinPool};
use crate::clock::GrowthClock;
use crate::config::SimConfig;
use crate::margin::LeafMargin;
use crate::phases;
use crate::tree::VeinTree;
use glam::Vec2;
use rand::Rng;

/// What happened during one simulation tick.
#[derive(Clone, Copy, Debug, Default)]
pub struct StepStats {
    pub sources_spawned: usize,
    pub sources_consumed: usize,
    pub nodes_added: usize,
}

/// The full venation simulation state, advanced one tick at a time.
///
/// Owns the leaf margin, the auxin-source pool, the vein tree and the
/// growth clock, and threads them through the tick phases in a fixed
/// order:
///
/// 1. generate new sources (pre-growth thresholds),
/// 2. attract and consume sources against the tree,
/// 3. grow one generation of vein nodes,
/// 4. expand the margin and advance the clock.
///
/// The per-tick exports ([`Self::margin_points`], [`Self::sources`],
/// [`Self::edges`]) are read-only; a display layer must consume them
/// strictly after [`Self::step`] returns and never mutate simulation
/// state.
#[derive(Debug)]
pub struct Simulation {
    cfg: SimConfig,
    margin: LeafMargin,
    pool: AuxinPool,
    tree: VeinTree,
    clock: GrowthClock,
}

impl Simulation {
    /// Builds a fresh simulation: template margin at `cfg.margin_resolution`,
    /// an empty source pool, the vein root at the margin anchor, and the
    /// clock at its initial rates.
    pub fn new(cfg: SimConfig) -> Self {
        let margin = LeafMargin::new(cfg.margin_resolution);
        let tree = VeinTree::new(margin.anchor());
        let clock = GrowthClock::new(cfg.initial_growth_rate, cfg.initial_unit_distance);

        Self {
            cfg,
            margin,
            pool: AuxinPool::default(),
            tree,
            clock,
        }
    }

    /// Runs one tick and reports what changed.
    ///
    /// All spacing thresholds are the configured multipliers scaled by the
    /// clock's `unit_distance` as of the start of the tick; the clock only
    /// advances at the end, after the margin has expanded.
    pub fn step(&mut self, rng: &mut impl Rng) -> StepStats {
        let unit = self.clock.unit_distance;

        let sources_spawned = auxin::generate(
            &self.margin,
            &self.tree,
            &mut self.pool,
            unit * self.cfg.source_spacing,
            unit * self.cfg.node_spacing,
            self.cfg.sample_attempts,
            rng,
        );
        let sources_consumed =
            phases::attraction_phase(&mut self.tree, &mut self.pool, unit * self.cfg.kill_radius);
        let nodes_added = phases::growth_phase(&mut self.tree, unit * self.cfg.step_len).len();

        self.margin.grow(self.clock.margin_growth_rate);
        self.clock.tick(self.cfg.growth_increment);

        StepStats {
            sources_spawned,
            sources_consumed,
            nodes_added,
        }
    }

    pub fn config(&self) -> &SimConfig {
        &self.cfg
    }

    pub fn margin(&self) -> &LeafMargin {
        &self.margin
    }

    pub fn tree(&self) -> &VeinTree {
        &self.tree
    }

    pub fn clock(&self) -> &GrowthClock {
        &self.clock
    }

    /// The boundary polygon, ordered by angle.
    pub fn margin_points(&self) -> &[Vec2] {
        self.margin.points()
    }

    /// The live auxin sources.
    pub fn sources(&self) -> &[Vec2] {
        &self.pool.points
    }

    /// Every vein edge as a (parent, child) position pair, rebuilt from the
    /// current tree.
    pub fn edges(&self) -> Vec<[Vec2; 2]> {
        self.tree.flatten()
    }
}
