//! Points, rectangles and crop regions shared by the engine and backends.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

/// A point in surface or image space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Multiply both coordinates by `factor`.
    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        Self { x: self.x * factor, y: self.y * factor }
    }
}

/// An axis-aligned rectangle given by its top-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Multiply position and size by `factor`.
    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
            width: self.width * factor,
            height: self.height * factor,
        }
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Source sub-region of a sprite image, in image pixels.
///
/// Set or cleared as a whole on the engine; there is no partially-set state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropRegion {
    pub ux: f64,
    pub uy: f64,
    pub uw: f64,
    pub uh: f64,
}

impl CropRegion {
    #[must_use]
    pub fn new(ux: f64, uy: f64, uw: f64, uh: f64) -> Self {
        Self { ux, uy, uw, uh }
    }

    /// The region as a source rectangle for an image blit.
    #[must_use]
    pub fn as_rect(&self) -> Rect {
        Rect::new(self.ux, self.uy, self.uw, self.uh)
    }
}
