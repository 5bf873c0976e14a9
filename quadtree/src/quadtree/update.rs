use std::rc::Rc;
use std::time::Duration;

use common::object::ObjectHandle;
use smallvec::SmallVec;
use tracing::{debug, trace};

use super::core::{NodeId, QuadTree, LIFESPAN_GROWTH_CAP};

impl QuadTree {
    /// Advance the simulation one tick: advance every object, re-home the
    /// ones that moved, tick the grace counters of emptied regions, and prune
    /// regions whose grace period ran out.
    pub fn update(&mut self, dt: Duration) {
        self.update_node(self.root, dt);
    }

    fn update_node(&mut self, id: NodeId, dt: Duration) {
        // Lifespan accounting. An empty childless region arms its countdown,
        // or keeps ticking one it already armed. A region with content again
        // is rescued: the countdown stops and the next grace period doubles,
        // up to the cap.
        let mask = {
            let node = &mut self.nodes[id.0];
            if node.objects.is_empty() && node.active_mask == 0 {
                if node.cur_life == -1 {
                    node.cur_life = node.max_lifespan - 1;
                } else if node.cur_life > 0 {
                    node.cur_life -= 1;
                }
            } else if node.cur_life != -1 {
                if node.max_lifespan <= LIFESPAN_GROWTH_CAP {
                    node.max_lifespan *= 2;
                }
                node.cur_life = -1;
                trace!(
                    "level {} region rescued, next grace period {} ticks",
                    node.level,
                    node.max_lifespan
                );
            }
            node.active_mask
        };

        // Advance this node's own objects and remember which ones moved.
        // Objects must not touch the tree from inside update.
        let mut movers: SmallVec<[ObjectHandle; 8]> = SmallVec::new();
        for obj in &self.nodes[id.0].objects {
            if obj.borrow_mut().update(dt) {
                movers.push(Rc::clone(obj));
            }
        }

        // Recurse into the children that existed when this tick started;
        // regions created mid-tick wait until the next one.
        for quadrant in 0..4 {
            if mask & (1 << quadrant) == 0 {
                continue;
            }
            if let Some(child) = self.nodes[id.0].children[quadrant] {
                self.update_node(child, dt);
            }
        }

        // Re-home the movers: climb the parent chain to the first region that
        // still contains the object (the root takes it regardless), then
        // re-insert downward from there.
        for obj in movers {
            let position = self.nodes[id.0]
                .objects
                .iter()
                .position(|o| Rc::ptr_eq(o, &obj));
            let Some(position) = position else {
                // Already relocated by a rebuild triggered while re-homing an
                // earlier mover.
                continue;
            };

            let mut container = id;
            while !self.nodes[container.0].bounds.contains(&*obj.borrow()) {
                match self.nodes[container.0].parent {
                    Some(parent) => container = parent,
                    None => break,
                }
            }

            self.nodes[id.0].objects.remove(position);
            trace!(
                "re-homing object from level {} into level {} region",
                self.nodes[id.0].level,
                self.nodes[container.0].level
            );
            self.insert_at(container, obj);
        }

        // Collect children whose grace period ran out. A region repopulated
        // this very tick is spared even if its counter reads zero.
        for quadrant in 0..4 {
            if self.nodes[id.0].active_mask & (1 << quadrant) == 0 {
                continue;
            }
            let Some(child) = self.nodes[id.0].children[quadrant] else {
                continue;
            };
            let dead = {
                let node = &self.nodes[child.0];
                node.cur_life == 0 && node.objects.is_empty() && node.active_mask == 0
            };
            if dead {
                debug!(
                    "pruning dead level {} region in quadrant {}",
                    self.nodes[child.0].level,
                    quadrant
                );
                self.nodes[id.0].children[quadrant] = None;
                self.nodes[id.0].active_mask &= !(1 << quadrant);
                self.free_node(child);
            }
        }
    }
}
