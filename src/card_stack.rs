use std::rc::Rc;

use web_sys::Element;
use yew::prelude::*;

use wordstack_core::{Deck, DragHandler, DragTracker, StackLayout, WordGroup};

#[derive(Properties)]
pub(crate) struct CardStackProps {
    pub(crate) deck: Rc<Deck>,
    pub(crate) layout: Rc<StackLayout>,
    pub(crate) on_drag_move: Callback<f64>,
    pub(crate) on_drag_end: Callback<f64>,
}

impl PartialEq for CardStackProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.deck, &other.deck)
            && self.layout == other.layout
            && self.on_drag_move == other.on_drag_move
            && self.on_drag_end == other.on_drag_end
    }
}

/// Adapts the two drag callbacks to the gesture capability.
struct CallbackDrag<'a> {
    on_move: &'a Callback<f64>,
    on_end: &'a Callback<f64>,
}

impl DragHandler for CallbackDrag<'_> {
    fn on_drag_move(&mut self, delta_x: f64) {
        self.on_move.emit(delta_x);
    }

    fn on_drag_end(&mut self, delta_x: f64) {
        self.on_end.emit(delta_x);
    }
}

#[function_component(CardStack)]
pub(crate) fn card_stack(props: &CardStackProps) -> Html {
    let tracker = use_mut_ref(DragTracker::new);

    let onpointerdown = {
        let tracker = tracker.clone();
        Callback::from(move |event: PointerEvent| {
            if let Some(target) = event.target_dyn_into::<Element>() {
                let _ = target.set_pointer_capture(event.pointer_id());
            }
            tracker
                .borrow_mut()
                .begin(event.pointer_id(), event.client_x() as f64);
            event.prevent_default();
        })
    };
    let onpointermove = {
        let tracker = tracker.clone();
        let on_move = props.on_drag_move.clone();
        let on_end = props.on_drag_end.clone();
        Callback::from(move |event: PointerEvent| {
            let mut handler = CallbackDrag {
                on_move: &on_move,
                on_end: &on_end,
            };
            tracker
                .borrow_mut()
                .update(event.pointer_id(), event.client_x() as f64, &mut handler);
        })
    };
    let onpointerup = {
        let tracker = tracker.clone();
        let on_move = props.on_drag_move.clone();
        let on_end = props.on_drag_end.clone();
        Callback::from(move |event: PointerEvent| {
            let mut handler = CallbackDrag {
                on_move: &on_move,
                on_end: &on_end,
            };
            tracker
                .borrow_mut()
                .finish(event.pointer_id(), event.client_x() as f64, &mut handler);
        })
    };
    let onpointercancel = {
        let on_move = props.on_drag_move.clone();
        let on_end = props.on_drag_end.clone();
        Callback::from(move |event: PointerEvent| {
            let mut handler = CallbackDrag {
                on_move: &on_move,
                on_end: &on_end,
            };
            tracker.borrow_mut().cancel(event.pointer_id(), &mut handler);
        })
    };

    let cards = props
        .deck
        .iter()
        .zip(props.layout.placements.iter())
        .enumerate()
        .map(|(index, (group, placement))| {
            let body = card_body(group);
            let class = placement.class_list();
            let style = placement.style();
            if placement.is_active() {
                html! {
                    <div
                        key={index}
                        class={class}
                        style={style}
                        onpointerdown={onpointerdown.clone()}
                        onpointermove={onpointermove.clone()}
                        onpointerup={onpointerup.clone()}
                        onpointercancel={onpointercancel.clone()}
                    >
                        {body}
                    </div>
                }
            } else {
                html! {
                    <div key={index} class={class} style={style}>
                        {body}
                    </div>
                }
            }
        })
        .collect::<Html>();

    html! {
        <div class="container" id="cardContainer">
            {cards}
        </div>
    }
}

fn card_body(group: &WordGroup) -> Html {
    html! {
        <>
            <h2>{ group.name.clone() }</h2>
            <ol class="word-list">
                { for group.words.iter().map(|word| html! { <li>{ word.clone() }</li> }) }
            </ol>
        </>
    }
}
