use common::object::ObjectHandle;
use tracing::trace;

use super::core::{quadrant_index, NodeId, QuadTree};

impl QuadTree {
    /// Subdivide recursively from the root. Only quadrants that receive at
    /// least one object are materialized; objects straddling a midpoint stay
    /// with the node that governs them.
    pub fn build(&mut self) {
        self.build_node(self.root);
    }

    pub(crate) fn build_node(&mut self, id: NodeId) {
        {
            let node = &self.nodes[id.0];
            if node.objects.len() <= self.config.max_objects || node.level >= self.config.max_levels
            {
                return;
            }
        }

        let bounds = self.nodes[id.0].bounds;
        let mut buckets: [Vec<ObjectHandle>; 4] = [Vec::new(), Vec::new(), Vec::new(), Vec::new()];

        let objects = std::mem::take(&mut self.nodes[id.0].objects);
        let mut straddlers = Vec::with_capacity(objects.len());
        for obj in objects {
            let quadrant = quadrant_index(&bounds, &*obj.borrow());
            match quadrant {
                Some(quadrant) => buckets[quadrant].push(obj),
                None => straddlers.push(obj),
            }
        }
        self.nodes[id.0].objects = straddlers;

        for (quadrant, bucket) in buckets.into_iter().enumerate() {
            if bucket.is_empty() {
                continue;
            }
            debug_assert!(self.nodes[id.0].children[quadrant].is_none());
            trace!(
                "subdividing level {} region into quadrant {} with {} objects",
                self.nodes[id.0].level,
                quadrant,
                bucket.len()
            );
            let child = self.new_child(id, bounds.quadrant(quadrant));
            self.nodes[child.0].objects = bucket;
            self.nodes[id.0].children[quadrant] = Some(child);
            self.nodes[id.0].active_mask |= 1 << quadrant;
            self.build_node(child);
        }
    }

    /// Reset the tree to govern exactly `objects`: all regions are dropped,
    /// the root takes the new population, and the tree is rebuilt.
    pub fn rebuild_with(&mut self, objects: Vec<ObjectHandle>) {
        let root = self.root;
        for quadrant in 0..4 {
            if let Some(child) = self.nodes[root.0].children[quadrant].take() {
                self.free_subtree(child);
            }
        }
        self.nodes[root.0].active_mask = 0;
        self.nodes[root.0].objects = objects;
        self.build();
    }

    fn free_subtree(&mut self, id: NodeId) {
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let node = &mut self.nodes[current.0];
            node.objects.clear();
            for child in node.children.iter_mut() {
                if let Some(child) = child.take() {
                    stack.push(child);
                }
            }
            node.active_mask = 0;
            self.free_node(current);
        }
    }
}
