use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, HtmlCanvasElement, MouseEvent, Window};

use super::canvas::CanvasPainter;
use super::{js_err, Shared};
use crate::error::{Result, SketchError};

pub fn viewport(window: &Window) -> Result<(f64, f64)> {
    let w = window.inner_width().map_err(js_err)?.as_f64().unwrap_or(0.0);
    let h = window.inner_height().map_err(js_err)?.as_f64().unwrap_or(0.0);
    Ok((w, h))
}

/// Hook up resize and pointer input, then start the frame loop.
pub fn start(canvas: HtmlCanvasElement, mut painter: CanvasPainter, app: Shared) -> Result<()> {
    let win = window().ok_or(SketchError::NoWindow)?;

    // Resize canvas to fit window
    let resize_closure = {
        let canvas = canvas.clone();
        let app = app.clone();
        Closure::wrap(Box::new(move || {
            let Some(win) = window() else { return };
            match viewport(&win) {
                Ok((w, h)) => {
                    canvas.set_width(w as u32);
                    canvas.set_height(h as u32);
                    app.borrow_mut().resize(w, h);
                }
                Err(e) => log::warn!("resize skipped: {e}"),
            }
        }) as Box<dyn FnMut()>)
    };
    win.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())
        .map_err(js_err)?;
    resize_closure.forget();

    let move_closure = {
        let app = app.clone();
        Closure::wrap(Box::new(move |evt: MouseEvent| {
            app.borrow_mut().pointer_moved(f64::from(evt.client_x()));
        }) as Box<dyn FnMut(_)>)
    };
    win.add_event_listener_with_callback("mousemove", move_closure.as_ref().unchecked_ref())
        .map_err(js_err)?;
    move_closure.forget();

    // `f` holds the animation-frame closure so it can re-schedule itself.
    let f: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        app.borrow_mut().frame(ts, &mut painter);

        // schedule next
        if let (Some(win), Some(cb)) = (window(), f.borrow().as_ref()) {
            if let Err(e) = win.request_animation_frame(cb.as_ref().unchecked_ref()) {
                log::error!("frame loop stopped: {}", js_err(e));
            }
        }
    }) as Box<dyn FnMut(f64)>));

    if let Some(cb) = g.borrow().as_ref() {
        win.request_animation_frame(cb.as_ref().unchecked_ref())
            .map_err(js_err)?;
    }
    Ok(())
}
