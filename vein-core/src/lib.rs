//! Core leaf-venation growth simulation library.
//!
//! Models biological leaf venation with an auxin-source / space-colonization
//! algorithm: a closed leaf margin expands around its petiole while auxin
//! sources are scattered inside it and a rooted vein tree grows toward them,
//! absorbing sources that come within a kill radius.
//!
//! Main components:
//! - [`margin`] — the growing leaf-margin polygon and petiole anchor.
//! - [`sampling`] — minimum-separation random point sampling.
//! - [`auxin`] — the auxin-source pool and constrained source generation.
//! - [`tree`] — vein nodes and the rooted vein tree.
//! - [`phases`] — per-tick attraction/consumption and growth phases.
//! - [`clock`] — cumulative growth rates and the derived spatial scale.
//! - [`sim`] — the tick loop tying all of the above together.
//! - [`config`] — tunable simulation parameters.
//! - [`types`] — shared type aliases and IDs.

pub mod auxin;
pub mod clock;
pub mod config;
pub mod margin;
pub mod phases;
pub mod sampling;
pub mod sim;
pub mod tree;
pub mod types;
