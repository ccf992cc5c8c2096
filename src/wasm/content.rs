use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::config::CONTENT_ID;
use crate::content::ContentView;

fn present(view: ContentView) {
    let Some(panel) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONTENT_ID))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    panel.set_inner_html(&view.markup());
    if let Err(e) = panel.style().set_property("display", view.display()) {
        log::warn!("could not toggle #{CONTENT_ID}: {}", super::js_err(e));
    }
}

#[wasm_bindgen]
pub fn show_url(url: &str) {
    present(ContentView::Frame(url.to_owned()));
}

#[wasm_bindgen]
pub fn show_image(src: &str) {
    present(ContentView::Image(src.to_owned()));
}

#[wasm_bindgen]
pub fn show_video(src: &str) {
    present(ContentView::Video(src.to_owned()));
}

#[wasm_bindgen]
pub fn go_home() {
    present(ContentView::Empty);
}
