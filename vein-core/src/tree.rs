use crate::types::NodeId;
use glam::Vec2;

/// One node of the vein tree.
///
/// Children are owned by index; `parent` is a non-owning back-reference, so
/// the arena holds a strict tree with no ownership cycles. `pending` holds
/// the auxin sources currently attracted to this node, collected during the
/// attraction phase and cleared by the growth phase each tick.
#[derive(Debug)]
pub struct VeinNode {
    pub pos: Vec2,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub pending: Vec<Vec2>,
}

impl VeinNode {
    pub fn new_root(pos: Vec2) -> Self {
        Self {
            pos,
            parent: None,
            children: Vec::with_capacity(4),
            pending: Vec::new(),
        }
    }

    pub fn new_child(pos: Vec2, parent: NodeId) -> Self {
        Self {
            pos,
            parent: Some(parent),
            children: Vec::with_capacity(4),
            pending: Vec::new(),
        }
    }
}

/// A rooted vein tree stored as an index arena.
///
/// Nodes are only ever appended, so ids stay stable and the prefix
/// `0..len` at the start of a tick is exactly the set of pre-existing nodes.
#[derive(Debug)]
pub struct VeinTree {
    pub nodes: Vec<VeinNode>,
}

impl VeinTree {
    pub fn new(root_pos: Vec2) -> Self {
        Self {
            nodes: vec![VeinNode::new_root(root_pos)],
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn add_child(&mut self, parent: NodeId, pos: Vec2) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(VeinNode::new_child(pos, parent));
        self.nodes[parent].children.push(id);
        id
    }

    /// Linear scan for the node nearest to `pos`.
    ///
    /// Returns the node id and the squared distance. Invoked once per pool
    /// source per tick, which makes it the dominant cost of a simulation
    /// step.
    pub fn find_nearest(&self, pos: Vec2) -> Option<(NodeId, f32)> {
        let mut best = None;
        let mut best_d2 = f32::MAX;
        for (id, n) in self.nodes.iter().enumerate() {
            let d2 = n.pos.distance_squared(pos);
            if d2 < best_d2 {
                best_d2 = d2;
                best = Some(id);
            }
        }
        best.map(|id| (id, best_d2))
    }

    /// Every (parent position, child position) edge of the tree.
    ///
    /// Recomputed in full from the current arena; the order follows parent
    /// ids, then each parent's child insertion order.
    pub fn flatten(&self) -> Vec<[Vec2; 2]> {
        let mut edges = Vec::with_capacity(self.nodes.len().saturating_sub(1));
        for node in &self.nodes {
            for &child in &node.children {
                edges.push([node.pos, self.nodes[child].pos]);
            }
        }
        edges
    }
}
