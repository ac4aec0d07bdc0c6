//! Bridge to the `window.__WS_BOOT` overlay defined in `index.html`.
//! Every call is a no-op when the overlay object is missing.

#[cfg(target_arch = "wasm32")]
use std::cell::Cell;

#[cfg(target_arch = "wasm32")]
use js_sys::{Function, Reflect};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue};

#[cfg(target_arch = "wasm32")]
const BOOT_GLOBAL: &str = "__WS_BOOT";

#[cfg(target_arch = "wasm32")]
thread_local! {
    static READY_SENT: Cell<bool> = Cell::new(false);
}

#[cfg(target_arch = "wasm32")]
fn invoke(method: &str, args: &[&str]) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(overlay) = Reflect::get(&window, &JsValue::from_str(BOOT_GLOBAL)) else {
        return;
    };
    if overlay.is_null() || overlay.is_undefined() {
        return;
    }
    let Ok(func) = Reflect::get(&overlay, &JsValue::from_str(method))
        .and_then(|value| value.dyn_into::<Function>())
    else {
        return;
    };
    let array = js_sys::Array::new();
    for arg in args {
        array.push(&JsValue::from_str(arg));
    }
    let _ = func.apply(&overlay, &array);
}

pub(crate) fn set_phase(label: &str, detail: &str) {
    #[cfg(target_arch = "wasm32")]
    invoke("setPhase", &[label, detail]);
    #[cfg(not(target_arch = "wasm32"))]
    let _ = (label, detail);
}

pub(crate) fn fail(code: &str, message: &str, hint: &str) {
    #[cfg(target_arch = "wasm32")]
    invoke("fail", &[code, message, hint]);
    #[cfg(not(target_arch = "wasm32"))]
    let _ = (code, message, hint);
}

pub(crate) fn ready() {
    #[cfg(target_arch = "wasm32")]
    {
        if READY_SENT.with(|flag| flag.replace(true)) {
            return;
        }
        invoke("ready", &[]);
    }
}

#[cfg(test)]
pub(crate) fn reset_ready() {
    #[cfg(target_arch = "wasm32")]
    READY_SENT.with(|flag| flag.set(false));
}
