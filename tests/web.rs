#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn panel() -> web_sys::HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    if let Some(el) = document.get_element_by_id("content-frame") {
        return el.dyn_into().unwrap();
    }
    let el = document.create_element("div").unwrap();
    el.set_id("content-frame");
    document.body().unwrap().append_child(&el).unwrap();
    el.dyn_into().unwrap()
}

fn display(el: &web_sys::HtmlElement) -> String {
    el.style().get_property_value("display").unwrap()
}

#[wasm_bindgen_test]
fn content_panel_switches_views() {
    let el = panel();

    folio_wasm::show_video("clip.mp4");
    assert_eq!(el.inner_html(), r#"<video controls="" src="clip.mp4"></video>"#);
    assert_eq!(display(&el), "block");

    folio_wasm::show_url("about.html");
    assert!(el.inner_html().starts_with(r#"<iframe src="about.html""#));

    folio_wasm::show_image("img/a.png");
    assert!(el.query_selector("img").unwrap().is_some());

    folio_wasm::go_home();
    assert_eq!(el.inner_html(), "");
    assert_eq!(display(&el), "none");
}
