use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk::glib;
use gtk::prelude::*;
use tracing::warn;

use crate::api::SunMoonEngine;
use crate::clock::Clock;
use crate::core::BoundingBox;
use crate::render::{CairoContextRenderer, Renderer};

/// Hosts a `SunMoonEngine` inside a GTK4 `DrawingArea`.
///
/// - resize → `on_layout`
/// - frame clock tick → `on_tick` + redraw while a run is in flight
/// - draw → render on the widget's cairo context
/// - unrealize → `on_detach`
pub struct GtkSunMoonAdapter<R, C>
where
    R: Renderer + CairoContextRenderer + 'static,
    C: Clock + 'static,
{
    engine: Rc<RefCell<SunMoonEngine<R, C>>>,
    area: gtk::DrawingArea,
}

impl<R, C> GtkSunMoonAdapter<R, C>
where
    R: Renderer + CairoContextRenderer + 'static,
    C: Clock + 'static,
{
    #[must_use]
    pub fn new(engine: SunMoonEngine<R, C>, padding: (u32, u32, u32, u32)) -> Self {
        let engine = Rc::new(RefCell::new(engine));
        let area = gtk::DrawingArea::new();
        let (top, bottom, left, right) = padding;

        {
            let engine = Rc::clone(&engine);
            area.set_draw_func(move |_area, context, _width, _height| {
                if let Err(err) = engine.borrow_mut().render_on_cairo_context(context) {
                    warn!(error = %err, "sun/moon frame render failed");
                }
            });
        }

        {
            let engine = Rc::clone(&engine);
            area.connect_resize(move |area, width, height| {
                let bounds = BoundingBox::new(
                    u32::try_from(width).unwrap_or(0),
                    u32::try_from(height).unwrap_or(0),
                )
                .with_padding(top, bottom, left, right);
                if let Err(err) = engine.borrow_mut().on_layout(bounds) {
                    warn!(error = %err, width, height, "sun/moon layout rejected");
                }
                area.queue_draw();
            });
        }

        {
            let engine = Rc::clone(&engine);
            area.add_tick_callback(move |area, frame_clock| {
                let now_ms = frame_clock.frame_time() / 1000;
                let mut engine = engine.borrow_mut();
                engine.on_tick(now_ms);
                if engine.take_redraw_request() {
                    area.queue_draw();
                }
                glib::ControlFlow::Continue
            });
        }

        {
            let engine = Rc::clone(&engine);
            area.connect_unrealize(move |_area| {
                engine.borrow_mut().on_detach();
            });
        }

        Self { engine, area }
    }

    #[must_use]
    pub fn widget(&self) -> &gtk::DrawingArea {
        &self.area
    }

    /// Shared handle for host code that drives `set_time_window`/`start`.
    #[must_use]
    pub fn engine(&self) -> Rc<RefCell<SunMoonEngine<R, C>>> {
        Rc::clone(&self.engine)
    }
}
