use std::ops::{Deref, DerefMut};
use std::time::Duration;

use tracing::{debug, trace};

use crate::api::area::Area;
use crate::api::resize::{IntervalTimer, SizeProbe};
use crate::api::scheduler::{FrameRequest, FrameScheduler};
use crate::core::{ChartDataStore, ScaleProvider, ScaleRegistry};
use crate::elements::RenderContext;
use crate::error::{ChartError, ChartResult};
use crate::render::DrawSurface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartConfig {
    /// Fixed interval for the resize-poll fallback; `None` disables polling.
    pub resize_poll_interval: Option<Duration>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            resize_poll_interval: Some(Duration::from_millis(300)),
        }
    }
}

impl ChartConfig {
    #[must_use]
    pub fn without_resize_poll(mut self) -> Self {
        self.resize_poll_interval = None;
        self
    }
}

/// Chart orchestrator: owns the data store, the named scale map, and the
/// ordered area list; coalesces redraw triggers into single host frame
/// callbacks.
///
/// The drawing surface is not held between frames; the host lends it to
/// [`Chart::render_frame`] for the duration of one pass.
pub struct Chart {
    data: ChartDataStore,
    scales: ScaleRegistry,
    areas: Vec<Area>,
    frames: Box<dyn FrameScheduler>,
    pending_frame: Option<FrameRequest>,
    probe: SizeProbe,
    timer: Option<Box<dyn IntervalTimer>>,
    config: ChartConfig,
}

impl Chart {
    #[must_use]
    pub fn new(frames: Box<dyn FrameScheduler>) -> Self {
        Self::with_config(frames, ChartConfig::default())
    }

    #[must_use]
    pub fn with_config(frames: Box<dyn FrameScheduler>, config: ChartConfig) -> Self {
        Self {
            data: ChartDataStore::new(),
            scales: ScaleRegistry::default(),
            areas: Vec::new(),
            frames,
            pending_frame: None,
            probe: SizeProbe::default(),
            timer: None,
            config,
        }
    }

    /// Registers a named scale; elements resolve it through the registry
    /// reference passed at render time.
    pub fn add_scale(&mut self, name: &str, scale: Box<dyn ScaleProvider>) {
        self.scales.insert(name, scale);
    }

    /// Appends an area; areas render in insertion order (z-order).
    pub fn add_area(&mut self, area: Area) {
        self.areas.push(area);
    }

    #[must_use]
    pub fn area_count(&self) -> usize {
        self.areas.len()
    }

    #[must_use]
    pub fn data(&self) -> &ChartDataStore {
        &self.data
    }

    /// Mutable store access; schedules a redraw on drop when the store
    /// revision advanced.
    #[must_use]
    pub fn data_mut(&mut self) -> DataMut<'_> {
        let start_revision = self.data.revision();
        DataMut {
            chart: self,
            start_revision,
        }
    }

    /// Replaces the data store wholesale and schedules a redraw.
    pub fn set_data(&mut self, data: ChartDataStore) {
        self.data = data;
        self.request_draw();
    }

    #[must_use]
    pub fn scales(&self) -> &ScaleRegistry {
        &self.scales
    }

    /// Installs the resize-poll timer and starts it when polling is
    /// configured. The host delivers ticks via [`Chart::poll_resize`].
    pub fn set_resize_timer(&mut self, mut timer: Box<dyn IntervalTimer>) {
        match self.config.resize_poll_interval {
            Some(interval) => timer.start(interval),
            None => timer.stop(),
        }
        self.timer = Some(timer);
    }

    pub fn stop_resize_timer(&mut self) {
        if let Some(timer) = self.timer.as_mut() {
            timer.stop();
        }
    }

    /// Schedules a redraw, first cancelling any pending not-yet-fired
    /// request.
    pub fn request_draw(&mut self) {
        if let Some(pending) = self.pending_frame.take() {
            self.frames.cancel_frame(pending);
        }
        self.pending_frame = Some(self.frames.request_frame());
        trace!("redraw scheduled");
    }

    #[must_use]
    pub fn has_pending_frame(&self) -> bool {
        self.pending_frame.is_some()
    }

    /// Compares the current surface dimensions to the last observed ones and
    /// schedules a redraw on change. Driven by the host timer tick when no
    /// native size-change notification exists.
    pub fn poll_resize(&mut self, width: u32, height: u32) {
        if self.probe.observe(width, height) {
            debug!(width, height, "surface size change detected");
            self.request_draw();
        }
    }

    /// Executes one draw pass: clears the surface and visits areas, then
    /// elements, in insertion order against the current store state.
    pub fn render_frame(&mut self, surface: &mut dyn DrawSurface) -> ChartResult<()> {
        let viewport = surface.viewport();
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        self.pending_frame = None;
        let _ = self.probe.observe(viewport.width, viewport.height);

        surface.clear();
        let ctx = RenderContext {
            data: &self.data,
            scales: &self.scales,
        };
        for area in &mut self.areas {
            area.render(surface, &ctx);
        }
        trace!(areas = self.areas.len(), "frame rendered");
        Ok(())
    }
}

/// Mutable guard over the chart's data store.
///
/// Dropping the guard schedules a redraw when any mutation went through,
/// mirroring the store-change-notification → schedule path.
pub struct DataMut<'a> {
    chart: &'a mut Chart,
    start_revision: u64,
}

impl Deref for DataMut<'_> {
    type Target = ChartDataStore;

    fn deref(&self) -> &Self::Target {
        &self.chart.data
    }
}

impl DerefMut for DataMut<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.chart.data
    }
}

impl Drop for DataMut<'_> {
    fn drop(&mut self) {
        if self.chart.data.revision() != self.start_revision {
            self.chart.request_draw();
        }
    }
}
