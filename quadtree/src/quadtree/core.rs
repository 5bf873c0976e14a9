use common::bounds::Bounds;
use common::object::{ObjectHandle, PhysicalObject};

use crate::error::{QuadtreeError, QuadtreeResult};

use super::config::Config;

/// Ticks an emptied region survives before its parent may prune it.
pub(crate) const INITIAL_LIFESPAN: i32 = 64;
/// A region rescued while counting down doubles its lifespan, up to here.
pub(crate) const LIFESPAN_GROWTH_CAP: i32 = 64;

/// Handle to one region node inside the tree's arena.
///
/// Handles stay valid until the node is pruned by `update` or the tree is
/// reset by `rebuild_with`; holding one across those calls is a caller
/// contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

pub(crate) struct Node {
    pub(crate) bounds: Bounds,
    pub(crate) level: usize,
    pub(crate) objects: Vec<ObjectHandle>,
    pub(crate) children: [Option<NodeId>; 4],
    pub(crate) active_mask: u8,
    pub(crate) parent: Option<NodeId>,
    pub(crate) cur_life: i32,
    pub(crate) max_lifespan: i32,
}

impl Node {
    fn new() -> Self {
        Self {
            bounds: Bounds::default(),
            level: 0,
            objects: Vec::new(),
            children: [None; 4],
            active_mask: 0,
            parent: None,
            cur_life: -1,
            max_lifespan: INITIAL_LIFESPAN,
        }
    }

    fn reset(&mut self) {
        self.bounds = Bounds::default();
        self.level = 0;
        self.objects.clear();
        self.children = [None; 4];
        self.active_mask = 0;
        self.parent = None;
        self.cur_life = -1;
        self.max_lifespan = INITIAL_LIFESPAN;
    }

    fn initialize(&mut self, bounds: Bounds, parent: Option<NodeId>, level: usize) {
        self.bounds = bounds;
        self.parent = parent;
        self.level = level;
    }
}

/// A loose-region quadtree over a population of axis-aligned objects.
///
/// Regions are created lazily as objects are assigned to quadrants, and
/// emptied regions linger for a grace period of update ticks before their
/// parent prunes them. Nodes live in a slot arena; parents and children
/// reference each other by [`NodeId`], so there are no ownership cycles.
pub struct QuadTree {
    pub(crate) root: NodeId,
    pub(crate) nodes: Vec<Node>,
    pub(crate) free_list: Vec<usize>,
    pub(crate) config: Config,
}

impl QuadTree {
    /// Create a tree governing `bounds` with no objects.
    pub fn new(bounds: Bounds, config: Config) -> QuadtreeResult<Self> {
        Self::with_objects(bounds, config, Vec::new())
    }

    /// Create a tree and hand the root its initial population. The tree is
    /// not subdivided until the caller invokes [`QuadTree::build`].
    pub fn with_objects(
        bounds: Bounds,
        config: Config,
        objects: Vec<ObjectHandle>,
    ) -> QuadtreeResult<Self> {
        if !(bounds.x.is_finite()
            && bounds.y.is_finite()
            && bounds.width.is_finite()
            && bounds.height.is_finite())
            || bounds.width < 0.0
            || bounds.height < 0.0
        {
            return Err(QuadtreeError::InvalidBounds {
                x: bounds.x,
                y: bounds.y,
                width: bounds.width,
                height: bounds.height,
            });
        }
        if config.max_objects < 1 {
            return Err(QuadtreeError::InvalidMaxObjects {
                max_objects: config.max_objects,
            });
        }

        let mut tree = QuadTree {
            root: NodeId(0),
            nodes: Vec::new(),
            free_list: Vec::new(),
            config,
        };
        let root = tree.alloc_node();
        tree.nodes[root.0].initialize(bounds, None, 0);
        tree.nodes[root.0].objects = objects;
        tree.root = root;
        Ok(tree)
    }

    pub(crate) fn alloc_node(&mut self) -> NodeId {
        if let Some(index) = self.free_list.pop() {
            self.nodes[index].reset();
            NodeId(index)
        } else {
            self.nodes.push(Node::new());
            NodeId(self.nodes.len() - 1)
        }
    }

    pub(crate) fn free_node(&mut self, id: NodeId) {
        if self.free_list.len() < self.config.pool_size {
            self.free_list.push(id.0);
        }
    }

    /// Allocate a fresh child region under `parent`. The caller wires it into
    /// the parent's child slot and active mask.
    pub(crate) fn new_child(&mut self, parent: NodeId, bounds: Bounds) -> NodeId {
        let level = self.nodes[parent.0].level + 1;
        let child = self.alloc_node();
        self.nodes[child.0].initialize(bounds, Some(parent), level);
        child
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn bounds(&self, id: NodeId) -> Bounds {
        self.nodes[id.0].bounds
    }

    pub fn level(&self, id: NodeId) -> usize {
        self.nodes[id.0].level
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// The child in the given quadrant slot, if one exists. Quadrants are
    /// indexed 0 = top-left, 1 = top-right, 2 = bottom-left, 3 = bottom-right.
    pub fn child(&self, id: NodeId, quadrant: usize) -> Option<NodeId> {
        self.nodes[id.0].children[quadrant]
    }

    /// The objects owned directly by this region, not by any descendant.
    pub fn objects(&self, id: NodeId) -> &[ObjectHandle] {
        &self.nodes[id.0].objects
    }

    /// Total number of objects reachable from the root.
    pub fn object_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id.0];
            count += node.objects.len();
            for child in node.children.iter().flatten() {
                stack.push(*child);
            }
        }
        count
    }
}

/// Which quadrant of `bounds` fully contains the object, or `None` when the
/// object straddles a midpoint and must stay with the parent.
pub(crate) fn quadrant_index(bounds: &Bounds, obj: &dyn PhysicalObject) -> Option<usize> {
    let horizontal_midpoint = bounds.x + bounds.width / 2.0;
    let vertical_midpoint = bounds.y + bounds.height / 2.0;

    let top = obj.y() >= bounds.y && obj.y() + obj.height() <= vertical_midpoint;
    let bottom =
        obj.y() >= vertical_midpoint && obj.y() + obj.height() <= bounds.y + bounds.height;
    let left = obj.x() >= bounds.x && obj.x() + obj.width() <= horizontal_midpoint;
    let right =
        obj.x() >= horizontal_midpoint && obj.x() + obj.width() <= bounds.x + bounds.width;

    if top {
        if left {
            Some(0)
        } else if right {
            Some(1)
        } else {
            None
        }
    } else if bottom {
        if left {
            Some(2)
        } else if right {
            Some(3)
        } else {
            None
        }
    } else {
        None
    }
}
