use std::fmt;

/// A point in slide pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Rectangular region of interest on a slide
///
/// Defined by two corner points. The corners are kept exactly as given;
/// `area` uses signed differences, so the orientation of the corners
/// determines the sign of the result.
///
/// A later annotation stage may attach one of these to a record; the
/// extraction engine itself never populates it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct RegionOfInterest {
    pub start: Point,
    pub end: Point,
}

impl RegionOfInterest {
    /// Creates a region from two corner points
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Signed area of the rectangle (height x width)
    pub fn area(&self) -> f64 {
        (self.end.y - self.start.y) * (self.end.x - self.start.x)
    }
}

impl fmt::Display for RegionOfInterest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) -> ({}, {})",
            self.start.x, self.start.y, self.end.x, self.end.y
        )
    }
}
