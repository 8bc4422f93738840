//! Pixel coordinate types for pointer tracking and marker placement.
//!
//! Coordinates are CSS pixels as reported by the host's pointer events:
//!
//! - Origin (0, 0) at the top-left corner of the viewport
//! - X-axis increases to the right
//! - Y-axis increases downward
//!
//! Values are kept as `f64` because the pointer follower works with fractional
//! positions between frames.
//!
//! # Example
//!
//! ```
//! use folio_ui::px::PxPosition;
//!
//! let start = PxPosition::ZERO;
//! let target = PxPosition::new(100.0, 100.0);
//!
//! let next = start.approach(target, 0.25);
//! assert_eq!(next, PxPosition::new(25.0, 25.0));
//! ```

use std::{
    fmt,
    ops::{Add, AddAssign, Mul, Sub},
};

/// A 2D position in CSS pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PxPosition {
    /// The x-coordinate in pixels
    pub x: f64,
    /// The y-coordinate in pixels
    pub y: f64,
}

impl PxPosition {
    /// A constant representing the zero position (0, 0).
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a new position from x and y coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Offsets the position by the given deltas.
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Moves a fraction of the remaining distance toward `target`, independently on each axis.
    ///
    /// `factor` is expected in `(0, 1]`; the result then lies on the segment between
    /// `self` and `target` and never passes it.
    pub fn approach(self, target: Self, factor: f64) -> Self {
        Self::new(
            self.x + (target.x - self.x) * factor,
            self.y + (target.y - self.y) * factor,
        )
    }

    /// Euclidean distance between two positions.
    pub fn distance_to(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Largest per-axis distance between two positions.
    pub fn max_axis_distance(self, other: Self) -> f64 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }
}

impl Add for PxPosition {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for PxPosition {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for PxPosition {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for PxPosition {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl From<(f64, f64)> for PxPosition {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for PxPosition {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for PxPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}
