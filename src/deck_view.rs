use std::cell::Cell;
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, HtmlInputElement, KeyboardEvent};
use yew::prelude::*;

use crate::app_runtime;
use crate::boot;
use crate::card_stack::CardStack;
use crate::deck_loader;
use wordstack_core::{
    parse_card_number, CardNumbering, Deck, Direction, GoToError, NavigationState, StackLayout,
};

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct DeckSession {
    pub(crate) nav: NavigationState,
    pub(crate) drag_dx: f64,
}

#[derive(Clone, Debug)]
pub(crate) enum SessionAction {
    Loaded { deck_size: usize },
    Step(Direction),
    Jump(NavigationState),
    Random,
    DragMove(f64),
    DragEnd(f64),
}

impl Reducible for DeckSession {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let before = self.nav.current_index();
        let next = match action {
            SessionAction::Loaded { deck_size } => DeckSession {
                nav: NavigationState::new(deck_size),
                drag_dx: 0.0,
            },
            SessionAction::Step(direction) => DeckSession {
                nav: self.nav.step(direction),
                drag_dx: 0.0,
            },
            SessionAction::Jump(nav) => DeckSession { nav, drag_dx: 0.0 },
            SessionAction::Random => DeckSession {
                nav: self.nav.random(&mut rand::thread_rng()),
                drag_dx: 0.0,
            },
            SessionAction::DragMove(delta_x) => {
                return Rc::new(DeckSession {
                    nav: self.nav,
                    drag_dx: delta_x,
                });
            }
            SessionAction::DragEnd(delta_x) => DeckSession {
                nav: self.nav.release_drag(delta_x),
                drag_dx: 0.0,
            },
        };
        let after = next.nav.current_index();
        if before != after {
            gloo::console::log!("card", format!("{before} -> {after}"), next.nav.deck_size());
        }
        Rc::new(next)
    }
}

pub(crate) fn go_to_card_input(
    nav: NavigationState,
    raw: &str,
    numbering: CardNumbering,
) -> Result<NavigationState, GoToError> {
    let number = parse_card_number(raw).unwrap_or(0);
    nav.go_to_card(number, numbering)
}

#[function_component(MainPage)]
pub(crate) fn main_page() -> Html {
    let config = use_memo((), |_| app_runtime::app_config());
    let deck = use_state(|| Rc::new(Deck::empty()));
    let session = use_reducer(DeckSession::default);
    let input_ref = use_node_ref();

    {
        let deck = deck.clone();
        let dispatcher = session.dispatcher();
        let src = config.deck_src.clone();
        use_effect_with((), move |_| {
            let alive = Rc::new(Cell::new(true));
            let alive_for_task = alive.clone();
            spawn_local(async move {
                let result = deck_loader::fetch_deck(&src).await;
                boot::ready();
                if !alive_for_task.get() {
                    return;
                }
                match result {
                    Ok(loaded) => {
                        gloo::console::log!("deck loaded", src, loaded.len());
                        let deck_size = loaded.len();
                        deck.set(Rc::new(loaded));
                        dispatcher.dispatch(SessionAction::Loaded { deck_size });
                    }
                    Err(err) => deck_loader::report_failure(&src, &err),
                }
            });
            move || alive.set(false)
        });
    }

    {
        let dispatcher = session.dispatcher();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "keydown", move |event: &Event| {
                    let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };
                    match event.key().as_str() {
                        "ArrowLeft" => dispatcher.dispatch(SessionAction::Step(Direction::Prev)),
                        "ArrowRight" => dispatcher.dispatch(SessionAction::Step(Direction::Next)),
                        _ => {}
                    }
                })
            });
            move || drop(listener)
        });
    }

    let on_go = {
        let input_ref = input_ref.clone();
        let session = session.clone();
        let numbering = config.numbering;
        Callback::from(move |_: MouseEvent| {
            let Some(input) = input_ref.cast::<HtmlInputElement>() else {
                return;
            };
            match go_to_card_input(session.nav, &input.value(), numbering) {
                Ok(nav) => {
                    session.dispatch(SessionAction::Jump(nav));
                    input.set_value("");
                }
                Err(err) => gloo::dialogs::alert(&err.to_string()),
            }
        })
    };
    let on_random = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| session.dispatch(SessionAction::Random))
    };
    let on_prev = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| session.dispatch(SessionAction::Step(Direction::Prev)))
    };
    let on_next = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| session.dispatch(SessionAction::Step(Direction::Next)))
    };
    let on_drag_move = {
        let session = session.clone();
        Callback::from(move |delta_x: f64| session.dispatch(SessionAction::DragMove(delta_x)))
    };
    let on_drag_end = {
        let session = session.clone();
        Callback::from(move |delta_x: f64| session.dispatch(SessionAction::DragEnd(delta_x)))
    };

    let layout = Rc::new(StackLayout::project(
        &session.nav,
        config.numbering,
        session.drag_dx,
    ));
    let arrows = layout.arrows;

    html! {
        <>
            <div class="counter">
                { "Go to card: " }
                <input type="number" id="cardInput" min="1" placeholder="#" ref={input_ref} />
                <button onclick={on_go}>{ "Go" }</button>
                <span>
                    { "| Card " }
                    <span id="currentCard">{ layout.current_label.to_string() }</span>
                    { " of " }
                    <span id="totalCards">{ layout.total.to_string() }</span>
                </span>
            </div>

            <div class="nav-controls">
                <button class="random-btn" onclick={on_random}>{ "Random Card" }</button>
            </div>

            <div
                class={classes!("nav-arrow", "prev", arrows.prev_disabled.then_some("disabled"))}
                onclick={on_prev}
            >
                { "←" }
            </div>
            <div
                class={classes!("nav-arrow", "next", arrows.next_disabled.then_some("disabled"))}
                onclick={on_next}
            >
                { "→" }
            </div>
            <CardStack deck={(*deck).clone()} {layout} {on_drag_move} {on_drag_end} />
            <div class="instructions">
                { "Swipe, use arrows, or type card number to navigate" }
            </div>
        </>
    }
}
