//! GTK4 host for a single-film [`LineChart`].

use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk::glib;
use gtk::prelude::*;
use tracing::warn;

use crate::api::{LineChart, LineChartConfig};
use crate::core::Viewport;
use crate::dataset::Film;
use crate::error::ArcResult;
use crate::render::CairoRenderer;

/// `DrawingArea` wired to a [`LineChart`]: draws on demand, relayouts on
/// resize, forwards pointer motion and keeps redrawing while animating.
pub struct GtkLineChartView {
    area: gtk::DrawingArea,
    chart: Rc<RefCell<LineChart<CairoRenderer>>>,
}

impl GtkLineChartView {
    pub fn new(film: Film, config: LineChartConfig) -> ArcResult<Self> {
        let viewport = config.viewport;
        let renderer = CairoRenderer::new(viewport.width as i32, viewport.height as i32)?;
        let chart = Rc::new(RefCell::new(LineChart::for_film(renderer, config, film)?));

        let area = gtk::DrawingArea::new();
        area.set_content_width(viewport.width as i32);
        area.set_content_height(viewport.height as i32);

        let draw_chart = Rc::clone(&chart);
        area.set_draw_func(move |area, context, _width, _height| {
            let now_ms = frame_time_ms(area);
            if let Err(err) = draw_chart
                .borrow_mut()
                .render_on_cairo_context(context, now_ms)
            {
                warn!(error = %err, "line chart draw failed");
            }
        });

        let resize_chart = Rc::clone(&chart);
        area.connect_resize(move |area, width, height| {
            let viewport = Viewport::new(width.max(1) as u32, height.max(1) as u32);
            if let Err(err) = resize_chart.borrow_mut().set_viewport(viewport) {
                warn!(error = %err, "line chart resize rejected");
            }
            area.queue_draw();
        });

        let motion = gtk::EventControllerMotion::new();
        let motion_chart = Rc::clone(&chart);
        let motion_area = area.clone();
        motion.connect_motion(move |_, x, y| {
            if let Err(err) = motion_chart.borrow_mut().pointer_move(x, y) {
                warn!(error = %err, "pointer move ignored");
            }
            motion_area.queue_draw();
        });
        let leave_chart = Rc::clone(&chart);
        let leave_area = area.clone();
        motion.connect_leave(move |_| {
            leave_chart.borrow_mut().pointer_leave();
            leave_area.queue_draw();
        });
        area.add_controller(motion);

        let tick_chart = Rc::clone(&chart);
        area.add_tick_callback(move |area, clock| {
            let now_ms = clock.frame_time() as f64 / 1000.0;
            if tick_chart.borrow().is_animating(now_ms) {
                area.queue_draw();
            }
            glib::ControlFlow::Continue
        });

        Ok(Self { area, chart })
    }

    #[must_use]
    pub fn widget(&self) -> &gtk::DrawingArea {
        &self.area
    }

    /// Replaces the plotted film; host settings survive and the entrance
    /// animation replays.
    pub fn show_film(&self, film: Film) -> ArcResult<()> {
        self.chart.borrow_mut().show_film(film)?;
        self.area.queue_draw();
        Ok(())
    }
}

fn frame_time_ms(area: &gtk::DrawingArea) -> f64 {
    area.frame_clock()
        .map_or(0.0, |clock| clock.frame_time() as f64 / 1000.0)
}
