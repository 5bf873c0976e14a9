use common::bounds::Bounds;
use common::object::bounds_of;

use super::core::{NodeId, QuadTree};

/// Recursive structural dump of one region: the geometry of its direct
/// objects and the state of each quadrant slot. Suitable for comparing a
/// tree against an expected shape in tests and debugging harnesses.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeState {
    pub objects: Vec<Bounds>,
    pub children: [Option<Box<NodeState>>; 4],
}

impl QuadTree {
    /// Dump the structural state of the whole tree, from the root.
    pub fn snapshot(&self) -> NodeState {
        self.snapshot_node(self.root)
    }

    fn snapshot_node(&self, id: NodeId) -> NodeState {
        let node = &self.nodes[id.0];
        let mut state = NodeState {
            objects: node.objects.iter().map(|obj| bounds_of(&*obj.borrow())).collect(),
            children: [None, None, None, None],
        };
        for quadrant in 0..4 {
            if node.active_mask & (1 << quadrant) == 0 {
                continue;
            }
            if let Some(child) = node.children[quadrant] {
                state.children[quadrant] = Some(Box::new(self.snapshot_node(child)));
            }
        }
        state
    }

    /// Append the bounds of every region to `bounds`.
    pub fn all_node_bounds(&self, bounds: &mut Vec<Bounds>) {
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id.0];
            bounds.push(node.bounds);
            for child in node.children.iter().flatten() {
                stack.push(*child);
            }
        }
    }

    /// Append the current box of every object to `bounds`.
    pub fn all_object_bounds(&self, bounds: &mut Vec<Bounds>) {
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id.0];
            for obj in &node.objects {
                bounds.push(bounds_of(&*obj.borrow()));
            }
            for child in node.children.iter().flatten() {
                stack.push(*child);
            }
        }
    }
}
