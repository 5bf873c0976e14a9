use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuadtreeError {
    InvalidBounds {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    InvalidMaxObjects {
        max_objects: usize,
    },
}

pub type QuadtreeResult<T> = Result<T, QuadtreeError>;

impl fmt::Display for QuadtreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuadtreeError::InvalidBounds {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "bounds must be finite with non-negative extents (x: {}, y: {}, width: {}, height: {})",
                    x, y, width, height
                )
            }
            QuadtreeError::InvalidMaxObjects { max_objects } => {
                write!(
                    f,
                    "max_objects must be at least 1 (max_objects: {})",
                    max_objects
                )
            }
        }
    }
}

impl std::error::Error for QuadtreeError {}
