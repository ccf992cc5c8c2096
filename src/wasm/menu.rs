use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Document, Element};

use super::{js_err, now_ms, Shared};
use crate::error::Result;

/// Bind hover handlers once the menu markup exists.
pub fn bind_when_ready(document: &Document, app: &Shared) -> Result<()> {
    if document.ready_state() != "loading" {
        bind(document, app)?;
        return Ok(());
    }
    let doc = document.clone();
    let app = app.clone();
    let on_ready = Closure::once_into_js(move || {
        if let Err(e) = bind(&doc, &app) {
            log::error!("menu binding failed: {e}");
        }
    });
    document
        .add_event_listener_with_callback(
            "DOMContentLoaded",
            on_ready.unchecked_ref::<js_sys::Function>(),
        )
        .map_err(js_err)?;
    Ok(())
}

/// Attach enter/leave handlers to each configured menu button. Labels with no
/// matching element are skipped. Returns how many were bound.
pub fn bind(document: &Document, app: &Shared) -> Result<usize> {
    let (class, labels) = {
        let app = app.borrow();
        let labels: Vec<String> = app.config().menus.iter().map(|m| m.label.clone()).collect();
        (app.config().menu_class.clone(), labels)
    };
    let nodes = document
        .query_selector_all(&format!(".{class}"))
        .map_err(js_err)?;
    let buttons: Vec<Element> = (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|n| n.dyn_into::<Element>().ok())
        .collect();

    let mut bound = 0;
    for label in labels {
        let Some(btn) = buttons
            .iter()
            .find(|el| el.text_content().as_deref() == Some(label.as_str()))
        else {
            log::debug!("no menu button labelled {label}");
            continue;
        };

        let enter = {
            let app = app.clone();
            Closure::wrap(Box::new(move || {
                app.borrow_mut().hover(&label, now_ms());
            }) as Box<dyn FnMut()>)
        };
        btn.add_event_listener_with_callback("mouseenter", enter.as_ref().unchecked_ref())
            .map_err(js_err)?;
        enter.forget();

        let leave = {
            let app = app.clone();
            Closure::wrap(Box::new(move || {
                app.borrow_mut().leave();
            }) as Box<dyn FnMut()>)
        };
        btn.add_event_listener_with_callback("mouseleave", leave.as_ref().unchecked_ref())
            .map_err(js_err)?;
        leave.forget();
        bound += 1;
    }
    log::info!("bound {bound} menu hover animations");
    Ok(bound)
}
