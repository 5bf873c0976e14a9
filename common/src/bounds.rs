use crate::object::PhysicalObject;

/// An axis-aligned rectangle anchored at its top-left corner.
///
/// `width` and `height` are nonnegative; top means lower `y`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Whether the object lies completely within this rectangle.
    /// An object sitting exactly on the border counts as contained.
    pub fn contains(&self, obj: &dyn PhysicalObject) -> bool {
        obj.x() >= self.x
            && obj.y() >= self.y
            && obj.x() + obj.width() <= self.x + self.width
            && obj.y() + obj.height() <= self.y + self.height
    }

    /// The sub-rectangle for one quadrant of this rectangle.
    /// Quadrants are indexed 0 = top-left, 1 = top-right, 2 = bottom-left,
    /// 3 = bottom-right.
    pub fn quadrant(&self, index: usize) -> Bounds {
        let half_width = self.width / 2.0;
        let half_height = self.height / 2.0;
        match index {
            0 => Bounds::new(self.x, self.y, half_width, half_height),
            1 => Bounds::new(self.x + half_width, self.y, half_width, half_height),
            2 => Bounds::new(self.x, self.y + half_height, half_width, half_height),
            3 => Bounds::new(
                self.x + half_width,
                self.y + half_height,
                half_width,
                half_height,
            ),
            _ => panic!("quadrant index out of range: {}", index),
        }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
        }
    }
}

/// Whether two objects overlap.
///
/// Overlap is strict: boxes that merely touch along an edge or at a corner do
/// not intersect. When the two boxes share an x (or y) coordinate the test
/// collapses to the single remaining axis.
pub fn intersect(one: &dyn PhysicalObject, another: &dyn PhysicalObject) -> bool {
    let vertical_overlap =
        (one.y() - another.y()).abs() < (one.height() + another.height()) / 2.0;
    let horizontal_overlap =
        (one.x() - another.x()).abs() < (one.width() + another.width()) / 2.0;
    if one.x() == another.x() {
        vertical_overlap
    } else if one.y() == another.y() {
        horizontal_overlap
    } else {
        vertical_overlap && horizontal_overlap
    }
}

/// Distance between the top-left corners of two objects, collapsing to a
/// single-axis distance when the other coordinate coincides.
pub fn distance(one: &dyn PhysicalObject, another: &dyn PhysicalObject) -> f32 {
    if one.x() == another.x() {
        (one.y() - another.y()).abs()
    } else if one.y() == another.y() {
        (one.x() - another.x()).abs()
    } else {
        let dx = one.x() - another.x();
        let dy = one.y() - another.y();
        (dx * dx + dy * dy).sqrt()
    }
}
