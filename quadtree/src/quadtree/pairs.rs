use std::rc::Rc;

use common::bounds::intersect;
use common::object::ObjectHandle;

use super::core::{NodeId, QuadTree};

/// One overlapping pair. `one` is the object seen earlier in the traversal
/// (an ancestor's object, or an earlier object of the same region);
/// `another` the later one.
#[derive(Clone)]
pub struct IntersectionRecord {
    pub one: ObjectHandle,
    pub another: ObjectHandle,
}

impl QuadTree {
    /// Enumerate every overlapping pair in the tree, each unordered pair
    /// exactly once. Pair order is unspecified.
    ///
    /// Each object is compared against the potential set: the objects of its
    /// ancestor chain plus earlier objects of its own region. Objects in
    /// disjoint subtrees occupy disjoint regions and are never compared.
    pub fn intersections(&self) -> Vec<IntersectionRecord> {
        let mut records = Vec::new();
        let mut potential: Vec<ObjectHandle> = Vec::new();
        self.pairs_in(self.root, &mut potential, &mut records);
        records
    }

    fn pairs_in(
        &self,
        id: NodeId,
        potential: &mut Vec<ObjectHandle>,
        records: &mut Vec<IntersectionRecord>,
    ) {
        let mark = potential.len();
        for obj in &self.nodes[id.0].objects {
            for earlier in potential.iter() {
                if intersect(&*earlier.borrow(), &*obj.borrow()) {
                    records.push(IntersectionRecord {
                        one: Rc::clone(earlier),
                        another: Rc::clone(obj),
                    });
                }
            }
            potential.push(Rc::clone(obj));
        }

        for quadrant in 0..4 {
            if self.nodes[id.0].active_mask & (1 << quadrant) == 0 {
                continue;
            }
            if let Some(child) = self.nodes[id.0].children[quadrant] {
                self.pairs_in(child, potential, records);
            }
        }

        // Sibling subtrees must not see this subtree's objects.
        potential.truncate(mark);
    }
}
