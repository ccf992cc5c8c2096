use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::window;

use super::{js_err, Shared};
use crate::gate::GateOutcome;

/// Queue a passcode prompt as its own task after `delay_ms`. A rejected answer
/// alerts and queues the next prompt, so the frame loop keeps ticking (drawing
/// nothing) between attempts.
pub fn schedule_prompt(app: Shared, delay_ms: u32) {
    let Some(win) = window() else { return };
    let task = Closure::once_into_js(move || ask(app));
    let scheduled = win.set_timeout_with_callback_and_timeout_and_arguments_0(
        task.unchecked_ref::<js_sys::Function>(),
        i32::try_from(delay_ms).unwrap_or(i32::MAX),
    );
    if let Err(e) = scheduled {
        log::error!("could not schedule passcode prompt: {}", js_err(e));
    }
}

fn ask(app: Shared) {
    let Some(win) = window() else { return };
    let (prompt, reject) = {
        let app = app.borrow();
        (app.config().prompt_message.clone(), app.config().reject_message.clone())
    };
    let answer = match win.prompt_with_message(&prompt) {
        Ok(answer) => answer,
        Err(e) => {
            log::error!("passcode prompt unavailable, sketch stays locked: {}", js_err(e));
            return;
        }
    };
    let outcome = app.borrow_mut().submit_passcode(answer.as_deref());
    if outcome == GateOutcome::Rejected {
        if let Err(e) = win.alert_with_message(&reject) {
            log::warn!("alert failed: {}", js_err(e));
        }
        let delay = app.borrow().retry_delay_ms();
        schedule_prompt(app, delay);
    }
}
