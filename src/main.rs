mod app_router;
mod app_runtime;
mod boot;
mod card_stack;
mod deck_loader;
mod deck_view;
#[cfg(test)]
mod test_support;

use gloo::events::EventListener;
use web_sys::Event;
use yew::prelude::*;

use wordstack_core::Route;

const ROOT_ID: &str = "blankCanvas";

#[function_component(App)]
fn app() -> Html {
    let route = use_state(app_router::current_route);

    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "hashchange", move |_event: &Event| {
                    route.set(app_router::current_route());
                })
            });
            move || drop(listener)
        });
    }

    {
        use_effect_with((*route).clone(), move |route: &Route| {
            let view = app_router::view_for(route);
            gloo::console::log!("route", route.fragment().to_string(), view.name);
            match view.on_enter {
                Some(on_enter) => on_enter(&app_runtime::app_config()),
                None => boot::ready(),
            }
            || ()
        });
    }

    let view = app_router::view_for(&route);
    (view.render)(&route)
}

fn main() {
    console_error_panic_hook::set_once();
    boot::set_phase("start", "");
    app_runtime::set_app_config(app_router::load_app_config());
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(ROOT_ID));
    let Some(root) = root else {
        boot::fail(
            "root",
            "page root missing",
            &format!("index.html needs an element with id \"{ROOT_ID}\""),
        );
        return;
    };
    yew::Renderer::<App>::with_root(root).render();
}
