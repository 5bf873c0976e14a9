use std::rc::Rc;

use common::bounds::intersect;
use common::object::ObjectHandle;

use super::core::{NodeId, QuadTree};

impl QuadTree {
    /// Every object in the tree overlapping `target`, excluding `target`
    /// itself. Candidates above the owning region are gathered from the
    /// parent chain's direct objects, candidates below from the owning
    /// region's whole subtree. Order is unspecified.
    ///
    /// Returns an empty list when `target` is not in the tree.
    pub fn intersected_objects(&self, target: &ObjectHandle) -> Vec<ObjectHandle> {
        let Some(owner) = self.find_object(target) else {
            return Vec::new();
        };

        let mut objects = Vec::new();
        let mut parent = self.nodes[owner.0].parent;
        while let Some(ancestor) = parent {
            self.scan_direct(ancestor, target, &mut objects);
            parent = self.nodes[ancestor.0].parent;
        }

        self.intersected_in_subtree(owner, target, &mut objects);
        objects
    }

    /// Collect objects overlapping `target` from the subtree rooted at `id`,
    /// appending to `objects`.
    pub fn intersected_in_subtree(
        &self,
        id: NodeId,
        target: &ObjectHandle,
        objects: &mut Vec<ObjectHandle>,
    ) {
        self.scan_direct(id, target, objects);
        for quadrant in 0..4 {
            if self.nodes[id.0].active_mask & (1 << quadrant) == 0 {
                continue;
            }
            if let Some(child) = self.nodes[id.0].children[quadrant] {
                self.intersected_in_subtree(child, target, objects);
            }
        }
    }

    fn scan_direct(&self, id: NodeId, target: &ObjectHandle, objects: &mut Vec<ObjectHandle>) {
        for obj in &self.nodes[id.0].objects {
            if Rc::ptr_eq(obj, target) {
                continue;
            }
            if intersect(&*target.borrow(), &*obj.borrow()) {
                objects.push(Rc::clone(obj));
            }
        }
    }

    /// Visit every object once, depth-first: a region's direct objects in
    /// insertion order, then its children in quadrant order.
    pub fn walk<F>(&self, mut visitor: F)
    where
        F: FnMut(&ObjectHandle),
    {
        self.walk_node(self.root, &mut visitor);
    }

    fn walk_node<F>(&self, id: NodeId, visitor: &mut F)
    where
        F: FnMut(&ObjectHandle),
    {
        for obj in &self.nodes[id.0].objects {
            visitor(obj);
        }
        for quadrant in 0..4 {
            if self.nodes[id.0].active_mask & (1 << quadrant) == 0 {
                continue;
            }
            if let Some(child) = self.nodes[id.0].children[quadrant] {
                self.walk_node(child, visitor);
            }
        }
    }
}
