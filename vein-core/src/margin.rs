use crate::sampling::Rect;
use glam::Vec2;
use std::f32::consts::{PI, TAU};

// Gielis superformula parameters for the canonical leaf outline.
const SHAPE_M: f32 = 2.0;
const SHAPE_N1: f32 = 1.0;
const SHAPE_N2: f32 = 1.0;
const SHAPE_N3: f32 = 1.0;
const SHAPE_A: f32 = 2.0;
const SHAPE_B: f32 = 1.0;
const TEMPLATE_SCALE: f32 = 10.0;

/// Offset between the petiole reference point and the anchor margin point,
/// keeping the two from coinciding exactly so slope and direction
/// computations against the tree root never degenerate.
pub const ANCHOR_EPS: f32 = 1e-6;

/// Radius of the margin template at angle `phi` (Gielis superformula).
///
/// This is the shape at initialization scale; after any growth the live
/// boundary distance must come from [`LeafMargin::radius_at`] instead.
pub fn template_radius(phi: f32) -> f32 {
    let t = SHAPE_M * phi / 4.0;
    let raux = (t.cos() / SHAPE_A).abs().powf(SHAPE_N2) + (t.sin().abs() / SHAPE_B).powf(SHAPE_N3);
    raux.abs().powf(-1.0 / SHAPE_N1) * TEMPLATE_SCALE
}

/// The closed leaf-margin polygon and its petiole anchor.
///
/// The polygon holds `2 * resolution` points sampled at fixed angles; the
/// point count never changes after construction. The point at `phi = pi`
/// (the negative-x extreme) is the anchor: growth is a polar expansion
/// centered on the petiole reference just outside it, so the leaf expands
/// away from its stem attachment rather than uniformly.
///
/// A secondary `origin` point (the template's center) is carried along under
/// the same expansion rule; auxin generation measures angles and boundary
/// distances from it.
#[derive(Debug, Clone)]
pub struct LeafMargin {
    points: Vec<Vec2>,
    resolution: usize,
    anchor_index: usize,
    petiole: Vec2,
    origin: Vec2,
}

impl LeafMargin {
    /// Samples the superformula template at `2 * resolution` angles in
    /// `[0, 2*pi)` and designates the point at `phi = pi` as the anchor.
    ///
    /// ### Panics
    /// Panics if `resolution < 4`; coarser polygons cannot close the
    /// canonical shape.
    pub fn new(resolution: usize) -> Self {
        assert!(resolution >= 4, "margin resolution must be at least 4");
        let step = PI / resolution as f32;
        let points: Vec<Vec2> = (0..2 * resolution)
            .map(|k| {
                let phi = k as f32 * step;
                let r = template_radius(phi);
                Vec2::new(r * phi.cos(), r * phi.sin())
            })
            .collect();

        let anchor_index = resolution;
        let petiole = points[anchor_index] - Vec2::new(ANCHOR_EPS, 0.0);

        Self {
            points,
            resolution,
            anchor_index,
            petiole,
            origin: Vec2::ZERO,
        }
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// The petiole reference point, a fixed epsilon outside the anchor.
    pub fn petiole(&self) -> Vec2 {
        self.petiole
    }

    /// The anchor margin point, where the vein tree is rooted.
    pub fn anchor(&self) -> Vec2 {
        self.points[self.anchor_index]
    }

    /// The tracked interior origin point used for angular queries.
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Expands every margin point radially away from the petiole by
    /// `rate * distance(point, petiole)`.
    ///
    /// The anchor's own displacement is discarded: it is re-pinned to the
    /// fixed epsilon offset so it stays a stable reference every tick. The
    /// origin point advances under the same rule.
    pub fn grow(&mut self, rate: f32) {
        for p in &mut self.points {
            *p += (*p - self.petiole) * rate;
        }
        self.points[self.anchor_index] = self.petiole + Vec2::new(ANCHOR_EPS, 0.0);
        self.origin += (self.origin - self.petiole) * rate;
    }

    /// Scale-corrected boundary distance from the origin at angle `phi`.
    ///
    /// Growth is anchored at the petiole, not the origin, so the live
    /// polygon is not a similarity transform of the template. The template
    /// radius is therefore rescaled by the current-to-template distance
    /// ratio at the sampled point nearest `phi`, keeping the correction
    /// local to that angle.
    pub fn radius_at(&self, phi: f32) -> f32 {
        let step = PI / self.resolution as f32;
        let idx = ((phi.rem_euclid(TAU) / step).round() as usize) % self.points.len();
        let sample_phi = idx as f32 * step;
        let current = (self.points[idx] - self.origin).length();
        template_radius(phi) * current / template_radius(sample_phi)
    }

    /// Axis-aligned bounding box of the current polygon.
    pub fn bounding_box(&self) -> Rect {
        let mut min = self.points[0];
        let mut max = self.points[0];
        for p in &self.points[1..] {
            min = min.min(*p);
            max = max.max(*p);
        }
        Rect { min, max }
    }
}
