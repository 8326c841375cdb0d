use smallvec::SmallVec;

use crate::render::{Color, DrawSurface, TextAlign};

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    Clear,
    Save,
    Restore,
    LineWidth(f64),
    LineDash(SmallVec<[f64; 4]>),
    StrokeColor(Color),
    FillColor(Color),
    BeginPath,
    ClosePath,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    Arc { cx: f64, cy: f64, radius: f64 },
    Rect { x: f64, y: f64, w: f64, h: f64 },
    Stroke,
    Fill,
    Clip,
    Translate { dx: f64, dy: f64 },
    Rotate { radians: f64 },
    FillText { text: String, x: f64, y: f64 },
}

/// Headless drawing surface that records every call it receives.
///
/// This is the shipped no-op backend: tests and headless hosts inspect the
/// recorded op stream instead of pixels.
#[derive(Debug)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    /// Changes the reported surface size, e.g. to drive resize-detection
    /// tests.
    pub fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    #[must_use]
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    pub fn take_ops(&mut self) -> Vec<SurfaceOp> {
        std::mem::take(&mut self.ops)
    }

    #[must_use]
    pub fn clear_count(&self) -> usize {
        self.count(|op| matches!(op, SurfaceOp::Clear))
    }

    #[must_use]
    pub fn stroke_count(&self) -> usize {
        self.count(|op| matches!(op, SurfaceOp::Stroke))
    }

    #[must_use]
    pub fn fill_count(&self) -> usize {
        self.count(|op| matches!(op, SurfaceOp::Fill))
    }

    #[must_use]
    pub fn text_count(&self) -> usize {
        self.count(|op| matches!(op, SurfaceOp::FillText { .. }))
    }

    fn count(&self, matcher: impl Fn(&SurfaceOp) -> bool) -> usize {
        self.ops.iter().filter(|op| matcher(op)).count()
    }
}

impl DrawSurface for RecordingSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear(&mut self) {
        self.ops.push(SurfaceOp::Clear);
    }

    fn save(&mut self) {
        self.ops.push(SurfaceOp::Save);
    }

    fn restore(&mut self) {
        self.ops.push(SurfaceOp::Restore);
    }

    fn set_line_width(&mut self, width: f64) {
        self.ops.push(SurfaceOp::LineWidth(width));
    }

    fn set_line_dash(&mut self, dash: &[f64]) {
        self.ops
            .push(SurfaceOp::LineDash(SmallVec::from_slice(dash)));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.ops.push(SurfaceOp::StrokeColor(color));
    }

    fn set_fill_color(&mut self, color: Color) {
        self.ops.push(SurfaceOp::FillColor(color));
    }

    fn begin_path(&mut self) {
        self.ops.push(SurfaceOp::BeginPath);
    }

    fn close_path(&mut self) {
        self.ops.push(SurfaceOp::ClosePath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(SurfaceOp::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ops.push(SurfaceOp::LineTo { x, y });
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, _start_angle: f64, _end_angle: f64) {
        self.ops.push(SurfaceOp::Arc { cx, cy, radius });
    }

    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ops.push(SurfaceOp::Rect { x, y, w, h });
    }

    fn stroke(&mut self) {
        self.ops.push(SurfaceOp::Stroke);
    }

    fn fill(&mut self) {
        self.ops.push(SurfaceOp::Fill);
    }

    fn clip(&mut self) {
        self.ops.push(SurfaceOp::Clip);
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.ops.push(SurfaceOp::Translate { dx, dy });
    }

    fn rotate(&mut self, radians: f64) {
        self.ops.push(SurfaceOp::Rotate { radians });
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, _font_size_px: f64, _align: TextAlign) {
        self.ops.push(SurfaceOp::FillText {
            text: text.to_owned(),
            x,
            y,
        });
    }
}
