//! Decorative canvas sketch for a personal site: bouncing shapes, a passcode
//! gate, and sprite-sheet hover animations for the navigation menu.
//!
//! The state machine lives in host-independent modules so it can be tested
//! natively; the DOM and canvas wiring is compiled only for wasm32.

pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod gate;
pub mod paint;
pub mod shapes;
pub mod sprite;

pub use app::App;
pub use config::SketchConfig;
pub use error::SketchError;

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::RefCell;
    use std::rc::Rc;

    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use wasm_bindgen::prelude::*;

    use crate::error::{Result, SketchError};
    use crate::shapes::Bounds;
    use crate::{App, SketchConfig};

    mod assets;
    mod canvas;
    mod content;
    mod gate;
    mod menu;
    mod render;

    pub use content::{go_home, show_image, show_url, show_video};

    impl From<SketchError> for JsValue {
        fn from(err: SketchError) -> Self {
            JsValue::from_str(&err.to_string())
        }
    }

    pub(crate) fn js_err(value: JsValue) -> SketchError {
        SketchError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }

    pub(crate) fn now_ms() -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or(0.0)
    }

    pub(crate) type Shared = Rc<RefCell<App>>;

    #[wasm_bindgen(start)]
    pub fn main() -> std::result::Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        run()?;
        Ok(())
    }

    fn run() -> Result<()> {
        let config = SketchConfig::default();
        let window = web_sys::window().ok_or(SketchError::NoWindow)?;
        let document = window.document().ok_or(SketchError::NoDocument)?;
        let canvas = document
            .get_element_by_id(&config.canvas_id)
            .ok_or_else(|| SketchError::MissingElement(config.canvas_id.clone()))?
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .map_err(|_| SketchError::WrongElement(config.canvas_id.clone(), "canvas"))?;

        let (w, h) = render::viewport(&window)?;
        canvas.set_width(w as u32);
        canvas.set_height(h as u32);
        log::info!("sketch starting on {w}x{h} canvas");

        let app: Shared = Rc::new(RefCell::new(App::new(
            config,
            StdRng::from_entropy(),
            Bounds::new(w, h),
        )));

        let sheets = assets::load(&app)?;
        let painter = canvas::CanvasPainter::new(canvas.clone(), sheets)?;
        menu::bind_when_ready(&document, &app)?;
        render::start(canvas, painter, app.clone())?;
        gate::schedule_prompt(app, 0);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::{go_home, show_image, show_url, show_video};
