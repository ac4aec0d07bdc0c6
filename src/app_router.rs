use web_sys::UrlSearchParams;
use yew::prelude::*;

use crate::boot;
use crate::deck_view::MainPage;
use wordstack_core::{CardNumbering, Route, DEFAULT_DECK_SRC};

const LOGO_SRC: &str = "media/Dr. Knows.png";

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct AppConfig {
    pub(crate) deck_src: String,
    pub(crate) numbering: CardNumbering,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            deck_src: DEFAULT_DECK_SRC.to_string(),
            numbering: CardNumbering::default(),
        }
    }
}

/// What a route renders, and what runs once it is on screen. A route with an
/// enter hook owns the boot `ready()` signal; routes without one send it on
/// entry.
pub(crate) struct RouteView {
    pub(crate) name: &'static str,
    pub(crate) render: fn(&Route) -> Html,
    pub(crate) on_enter: Option<fn(&AppConfig)>,
}

static WELCOME_VIEW: RouteView = RouteView {
    name: "welcome",
    render: render_welcome,
    on_enter: None,
};

static MAIN_VIEW: RouteView = RouteView {
    name: "main",
    render: render_main,
    on_enter: Some(enter_main),
};

static NOT_FOUND_VIEW: RouteView = RouteView {
    name: "not-found",
    render: render_not_found,
    on_enter: None,
};

pub(crate) fn view_for(route: &Route) -> &'static RouteView {
    match route {
        Route::Welcome => &WELCOME_VIEW,
        Route::Main => &MAIN_VIEW,
        Route::NotFound(_) => &NOT_FOUND_VIEW,
    }
}

pub(crate) fn current_route() -> Route {
    let hash = web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .unwrap_or_default();
    Route::from_hash(&hash)
}

pub(crate) fn navigate(route: &Route) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let _ = window.location().set_hash(route.fragment());
}

pub(crate) fn load_app_config() -> AppConfig {
    let mut config = AppConfig {
        deck_src: default_deck_src(),
        ..AppConfig::default()
    };
    let search = web_sys::window()
        .and_then(|window| window.location().search().ok())
        .unwrap_or_default();
    apply_query_overrides(&mut config, &search);
    config
}

fn default_deck_src() -> String {
    if let Some(raw) = option_env!("WORDSTACK_DECK_URL")
        .or(option_env!("TRUNK_PUBLIC_WORDSTACK_DECK_URL"))
    {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }
    DEFAULT_DECK_SRC.to_string()
}

pub(crate) fn apply_query_overrides(config: &mut AppConfig, search: &str) {
    let search = search.trim();
    if search.is_empty() {
        return;
    }
    let Ok(params) = UrlSearchParams::new_with_str(search) else {
        return;
    };
    if let Some(deck) = params.get("deck") {
        let deck = deck.trim();
        if !deck.is_empty() {
            config.deck_src = deck.to_string();
        }
    }
    if let Some(raw) = params.get("numbering") {
        match CardNumbering::parse(&raw) {
            Some(numbering) => config.numbering = numbering,
            None => gloo::console::warn!("ignoring numbering override", raw),
        }
    }
}

fn enter_main(config: &AppConfig) {
    boot::set_phase("deck", &config.deck_src);
}

fn render_welcome(_route: &Route) -> Html {
    let onclick = Callback::from(|_: MouseEvent| navigate(&Route::Main));
    html! {
        <>
            <div class="logo">
                <img src={LOGO_SRC} alt="Logo" width="200" />
            </div>
            <h1>{ "Welcome to the Home Page" }</h1>
            <p>{ "This is the main page of our app." }</p>
            <span class="welcome">
                <button {onclick}>{ "Next page" }</button>
            </span>
        </>
    }
}

fn render_main(_route: &Route) -> Html {
    html! { <MainPage /> }
}

fn render_not_found(_route: &Route) -> Html {
    html! {
        <>
            <h1>{ "404" }</h1>
            <p>{ "Page not found." }</p>
        </>
    }
}
