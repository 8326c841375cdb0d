mod draw;
mod recording;
mod surface;

pub use draw::{draw_arrow, draw_line, series_fallback_color, ArrowDirection};
pub use recording::{RecordingSurface, SurfaceOp};
pub use surface::{Color, DrawSurface, TextAlign};
