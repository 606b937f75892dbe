//! Pixel rectangles for tiles and screen areas

/// Axis-aligned rectangle in screen pixels
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Same size, moved by (dx, dy)
    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self { x: self.x + dx, y: self.y + dy, ..*self }
    }

    /// Inset by `amount` on every side; collapses to zero size instead of inverting
    pub fn pad(&self, amount: f32) -> Self {
        let w = (self.w - 2.0 * amount).max(0.0);
        let h = (self.h - 2.0 * amount).max(0.0);
        Self { x: self.x + amount, y: self.y + amount, w, h }
    }

    /// A `w` x `h` box sharing this rect's center
    pub fn centered(&self, w: f32, h: f32) -> Self {
        Self {
            x: self.x + (self.w - w) * 0.5,
            y: self.y + (self.h - h) * 0.5,
            w,
            h,
        }
    }
}
