//! Helpers shared by the browser tests.

use gloo::timers::future::TimeoutFuture;
use js_sys::{Array, Date, Function, Reflect};
use wasm_bindgen::JsValue;
use web_sys::Element;

const ALERTS_GLOBAL: &str = "__wsAlerts";
const BOOT_CALLS_GLOBAL: &str = "__wsBootCalls";

pub(crate) fn scratch_root(id: &str) -> Element {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .expect("document available");
    let root = document.create_element("div").expect("create test root");
    root.set_id(id);
    document
        .body()
        .expect("body available")
        .append_child(&root)
        .expect("append test root");
    root
}

pub(crate) async fn wait_for<F: Fn() -> bool>(label: &str, ready: F) {
    let start = Date::now();
    while !ready() {
        if Date::now() - start > 5000.0 {
            panic!("{label} not ready after 5s");
        }
        TimeoutFuture::new(10).await;
    }
}

pub(crate) fn text_of(root: &Element, selector: &str) -> Option<String> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|node| node.text_content())
}

/// Serves `json` inline so tests do not depend on files next to the runner.
pub(crate) fn data_url(json: &str) -> String {
    let encoded: String = js_sys::encode_uri_component(json).into();
    format!("data:application/json,{encoded}")
}

fn run_script(body: &str) {
    Function::new_no_args(body)
        .call0(&JsValue::NULL)
        .expect("test script runs");
}

fn recorded(global: &str) -> Vec<String> {
    let window = web_sys::window().expect("window available");
    let value = Reflect::get(&window, &JsValue::from_str(global)).expect("read recorder");
    if value.is_undefined() {
        return Vec::new();
    }
    Array::from(&value)
        .iter()
        .filter_map(|entry| entry.as_string())
        .collect()
}

/// Replaces `window.alert` with a recorder and clears earlier messages.
pub(crate) fn record_alerts() {
    run_script(
        "window.__wsAlerts = [];\
         window.alert = function (message) { window.__wsAlerts.push(String(message)); };",
    );
}

pub(crate) fn recorded_alerts() -> Vec<String> {
    recorded(ALERTS_GLOBAL)
}

/// Installs a `__WS_BOOT` overlay stub that logs each call as `method:label`.
pub(crate) fn record_boot_calls() {
    run_script(
        "window.__wsBootCalls = [];\
         window.__WS_BOOT = {\
           setPhase: function (label) { window.__wsBootCalls.push('setPhase:' + label); },\
           fail: function (code) { window.__wsBootCalls.push('fail:' + code); },\
           ready: function () { window.__wsBootCalls.push('ready'); }\
         };",
    );
}

pub(crate) fn recorded_boot_calls() -> Vec<String> {
    recorded(BOOT_CALLS_GLOBAL)
}
