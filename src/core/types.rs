use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Rectangular viewport region expressed as fractions of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaRect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl AreaRect {
    #[must_use]
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// The whole drawing surface.
    #[must_use]
    pub fn full() -> Self {
        Self::new(0.0, 0.0, 1.0, 1.0)
    }

    #[must_use]
    pub fn to_pixels(self, viewport: Viewport) -> PixelRect {
        let surface_w = f64::from(viewport.width);
        let surface_h = f64::from(viewport.height);
        PixelRect {
            x: surface_w * self.left,
            y: surface_h * self.top,
            w: surface_w * self.width,
            h: surface_h * self.height,
        }
    }
}

/// Pixel-space rectangle handed to elements during a render pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl PixelRect {
    #[must_use]
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }
}

#[cfg(test)]
mod tests {
    use super::{AreaRect, Viewport};

    #[test]
    fn full_area_covers_entire_surface() {
        let rect = AreaRect::full().to_pixels(Viewport::new(800, 600));
        assert_eq!(rect.x, 0.0);
        assert_eq!(rect.y, 0.0);
        assert_eq!(rect.w, 800.0);
        assert_eq!(rect.h, 600.0);
    }

    #[test]
    fn fractional_area_scales_with_viewport() {
        let rect = AreaRect::new(0.05, 0.1, 0.5, 0.85).to_pixels(Viewport::new(1000, 400));
        assert_eq!(rect.x, 100.0);
        assert_eq!(rect.y, 20.0);
        assert_eq!(rect.w, 500.0);
        assert_eq!(rect.h, 340.0);
    }
}
