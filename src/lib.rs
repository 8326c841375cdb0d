//! linechart-rs: a canvas-style chart rendering toolkit.
//!
//! The crate is organized around a small numeric pipeline: a data store that
//! tracks named series with incrementally maintained value bounds
//! ([`core::ChartDataStore`]), a coordinate-scaling seam shared by all visual
//! elements ([`core::ScaleProvider`]), and a tunable cubic-spline engine used
//! to smooth series for display ([`core::Spline`]). Rendering is a composition
//! of rectangular areas visiting ordered elements against an abstract drawing
//! surface; the [`api::Chart`] orchestrator coalesces redraw triggers into
//! single frame callbacks.

pub mod api;
pub mod core;
pub mod elements;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{Chart, ChartConfig};
pub use error::{ChartError, ChartResult};
