/// Identifier for a node in a [`crate::tree::VeinTree`].
///
/// This is an index into `VeinTree::nodes`, and is only meaningful within
/// the lifetime of a given `VeinTree` instance.
pub type NodeId = usize;
