pub mod deck;
pub mod gesture;
pub mod nav;
pub mod route;
pub mod stack;

pub use deck::{build_deck, clean_words, parse_deck, Deck, DeckError, WordGroup};
pub use deck::{DEFAULT_DECK_SRC, DEFAULT_GROUP_SIZE};
pub use gesture::{resolve_release, DragHandler, DragOutcome, DragTracker, SWIPE_THRESHOLD_PX};
pub use nav::{parse_card_number, CardNumbering, Direction, GoToError, NavigationState};
pub use route::Route;
pub use stack::{place_card, ArrowState, CardPlacement, StackLayout, StackTransform, VISIBLE_DEPTH};
