use std::cell::RefCell;
use std::rc::Rc;

use linechart_rs::api::{Area, Chart, ManualFrameScheduler};
use linechart_rs::core::{AreaRect, PixelRect};
use linechart_rs::elements::{Background, Element, RenderContext};
use linechart_rs::error::{ChartError, ChartResult};
use linechart_rs::render::{Color, DrawSurface, RecordingSurface, SurfaceOp};

/// Records the pixel rect and order tag of every render call it receives.
struct ProbeElement {
    tag: &'static str,
    log: Rc<RefCell<Vec<(&'static str, PixelRect)>>>,
}

impl Element for ProbeElement {
    fn render(
        &mut self,
        _surface: &mut dyn DrawSurface,
        rect: PixelRect,
        _ctx: &RenderContext<'_>,
    ) -> ChartResult<()> {
        self.log.borrow_mut().push((self.tag, rect));
        Ok(())
    }
}

/// Always fails, to exercise the skip-and-continue policy.
struct FailingElement;

impl Element for FailingElement {
    fn render(
        &mut self,
        _surface: &mut dyn DrawSurface,
        _rect: PixelRect,
        _ctx: &RenderContext<'_>,
    ) -> ChartResult<()> {
        Err(ChartError::InvalidData("probe failure".to_owned()))
    }
}

fn new_chart() -> Chart {
    Chart::new(Box::new(ManualFrameScheduler::new()))
}

#[test]
fn full_area_hands_elements_the_whole_viewport() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut chart = new_chart();
    chart.add_area(Area::new(AreaRect::full()).with_element(ProbeElement {
        tag: "full",
        log: Rc::clone(&log),
    }));

    let mut surface = RecordingSurface::new(800, 600);
    chart.render_frame(&mut surface).expect("render");

    let log = log.borrow();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].1, PixelRect::new(0.0, 0.0, 800.0, 600.0));
}

#[test]
fn areas_and_elements_render_in_insertion_order() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut chart = new_chart();
    chart.add_area(
        Area::new(AreaRect::new(0.0, 0.0, 1.0, 0.5))
            .with_element(ProbeElement {
                tag: "first",
                log: Rc::clone(&log),
            })
            .with_element(ProbeElement {
                tag: "second",
                log: Rc::clone(&log),
            }),
    );
    chart.add_area(Area::new(AreaRect::new(0.5, 0.0, 1.0, 0.5)).with_element(ProbeElement {
        tag: "third",
        log: Rc::clone(&log),
    }));

    let mut surface = RecordingSurface::new(400, 400);
    chart.render_frame(&mut surface).expect("render");

    let order: Vec<&str> = log.borrow().iter().map(|(tag, _)| *tag).collect();
    assert_eq!(order, vec!["first", "second", "third"]);
}

#[test]
fn frame_clears_the_surface_exactly_once_and_first() {
    let mut chart = new_chart();
    chart.add_area(
        Area::new(AreaRect::full()).with_element(Background::new(Color::rgb(1.0, 1.0, 1.0))),
    );

    let mut surface = RecordingSurface::new(200, 100);
    chart.render_frame(&mut surface).expect("render");

    assert_eq!(surface.clear_count(), 1);
    assert_eq!(surface.ops().first(), Some(&SurfaceOp::Clear));
}

#[test]
fn zero_sized_viewport_is_rejected() {
    let mut chart = new_chart();
    let mut surface = RecordingSurface::new(0, 600);
    let err = chart
        .render_frame(&mut surface)
        .err()
        .expect("invalid viewport must fail");
    assert!(matches!(
        err,
        ChartError::InvalidViewport { width: 0, height: 600 }
    ));
    assert_eq!(surface.clear_count(), 0);
}

#[test]
fn failing_element_is_skipped_but_frame_completes() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut chart = new_chart();
    chart.add_area(
        Area::new(AreaRect::full())
            .with_element(ProbeElement {
                tag: "before",
                log: Rc::clone(&log),
            })
            .with_element(FailingElement)
            .with_element(ProbeElement {
                tag: "after",
                log: Rc::clone(&log),
            }),
    );

    let mut surface = RecordingSurface::new(300, 300);
    chart.render_frame(&mut surface).expect("frame must finish");

    let order: Vec<&str> = log.borrow().iter().map(|(tag, _)| *tag).collect();
    assert_eq!(order, vec!["before", "after"]);
}

#[test]
fn background_fills_only_its_area() {
    let mut chart = new_chart();
    chart.add_area(
        Area::new(AreaRect::new(0.25, 0.25, 0.5, 0.5))
            .with_element(Background::new(Color::rgb(0.0, 0.0, 0.0))),
    );

    let mut surface = RecordingSurface::new(400, 200);
    chart.render_frame(&mut surface).expect("render");

    let rect = surface.ops().iter().find_map(|op| match op {
        SurfaceOp::Rect { x, y, w, h } => Some((*x, *y, *w, *h)),
        _ => None,
    });
    assert_eq!(rect, Some((100.0, 50.0, 200.0, 100.0)));
    assert_eq!(surface.fill_count(), 1);
}
