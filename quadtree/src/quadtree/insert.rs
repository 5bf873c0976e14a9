use std::rc::Rc;

use common::object::ObjectHandle;
use tracing::trace;

use super::core::{quadrant_index, NodeId, QuadTree};

impl QuadTree {
    /// Insert one object. The caller guarantees the root's bounds contain it.
    pub fn insert(&mut self, obj: ObjectHandle) {
        debug_assert!(self.nodes[self.root.0].bounds.contains(&*obj.borrow()));
        self.insert_at(self.root, obj);
    }

    /// Insert into the subtree rooted at `id`, whose bounds contain the
    /// object.
    pub(crate) fn insert_at(&mut self, id: NodeId, obj: ObjectHandle) {
        if self.nodes[id.0].active_mask == 0 {
            // Leaf so far: take the object directly, and split only once the
            // region overflows and may still go deeper.
            self.nodes[id.0].objects.push(obj);
            if self.nodes[id.0].objects.len() > self.config.max_objects
                && self.nodes[id.0].level < self.config.max_levels
            {
                self.build_node(id);
            }
            return;
        }

        let quadrant = quadrant_index(&self.nodes[id.0].bounds, &*obj.borrow());
        match quadrant {
            // Straddles a midpoint: it belongs to this node, and does not
            // count toward any further split.
            None => self.nodes[id.0].objects.push(obj),
            Some(quadrant) => {
                let child = match self.nodes[id.0].children[quadrant] {
                    Some(child) => child,
                    None => {
                        let bounds = self.nodes[id.0].bounds.quadrant(quadrant);
                        let child = self.new_child(id, bounds);
                        self.nodes[id.0].children[quadrant] = Some(child);
                        self.nodes[id.0].active_mask |= 1 << quadrant;
                        trace!(
                            "created level {} region for quadrant {}",
                            self.nodes[child.0].level,
                            quadrant
                        );
                        child
                    }
                };
                self.insert_at(child, obj);
            }
        }
    }

    /// Remove an object by identity. Returns `false` when it is not in the
    /// tree. Emptied regions are left for the update cycle to collect.
    pub fn remove(&mut self, target: &ObjectHandle) -> bool {
        self.remove_from(self.root, target)
    }

    fn remove_from(&mut self, id: NodeId, target: &ObjectHandle) -> bool {
        if let Some(position) = self.nodes[id.0]
            .objects
            .iter()
            .position(|obj| Rc::ptr_eq(obj, target))
        {
            self.nodes[id.0].objects.remove(position);
            return true;
        }

        for quadrant in 0..4 {
            if self.nodes[id.0].active_mask & (1 << quadrant) == 0 {
                continue;
            }
            if let Some(child) = self.nodes[id.0].children[quadrant] {
                if self.remove_from(child, target) {
                    return true;
                }
            }
        }
        false
    }

    /// The region that directly owns the object, or `None` when the object is
    /// not in the tree. Linear in the number of objects.
    pub fn find_object(&self, target: &ObjectHandle) -> Option<NodeId> {
        self.find_in(self.root, target)
    }

    fn find_in(&self, id: NodeId, target: &ObjectHandle) -> Option<NodeId> {
        if self.nodes[id.0]
            .objects
            .iter()
            .any(|obj| Rc::ptr_eq(obj, target))
        {
            return Some(id);
        }

        for quadrant in 0..4 {
            if self.nodes[id.0].active_mask & (1 << quadrant) == 0 {
                continue;
            }
            if let Some(child) = self.nodes[id.0].children[quadrant] {
                if let Some(found) = self.find_in(child, target) {
                    return Some(found);
                }
            }
        }
        None
    }
}
