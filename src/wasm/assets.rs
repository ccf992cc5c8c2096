use std::collections::HashMap;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::HtmlImageElement;

use super::{js_err, Shared};
use crate::error::Result;

/// Start loading every sprite sheet. Each sheet is sliced in its own `load`
/// handler; until then the animator simply has nothing to draw for it.
pub fn load(app: &Shared) -> Result<HashMap<String, HtmlImageElement>> {
    let config = app.borrow().config().clone();
    let mut sheets = HashMap::new();
    for asset in config.assets() {
        let img = HtmlImageElement::new().map_err(js_err)?;
        let onload = {
            let app = app.clone();
            let img = img.clone();
            let asset = asset.to_owned();
            Closure::wrap(Box::new(move || {
                app.borrow_mut()
                    .sheet_loaded(&asset, img.natural_width(), img.natural_height());
            }) as Box<dyn FnMut()>)
        };
        img.add_event_listener_with_callback("load", onload.as_ref().unchecked_ref())
            .map_err(js_err)?;
        onload.forget();
        img.set_src(&config.asset_url(asset));
        sheets.insert(asset.to_owned(), img);
    }
    Ok(sheets)
}
