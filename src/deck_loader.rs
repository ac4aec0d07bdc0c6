use gloo::net::http::Request;

use wordstack_core::{parse_deck, Deck, DeckError};

pub(crate) const LOAD_FAILED_ALERT: &str = "Failed to load word groups";

pub(crate) async fn fetch_deck(src: &str) -> Result<Deck, DeckError> {
    let response = Request::get(src)
        .send()
        .await
        .map_err(|err| DeckError::Network(err.to_string()))?;
    if !response.ok() {
        return Err(DeckError::Status {
            status: response.status(),
        });
    }
    let text = response
        .text()
        .await
        .map_err(|err| DeckError::Network(err.to_string()))?;
    parse_deck(&text)
}

pub(crate) fn report_failure(src: &str, err: &DeckError) {
    gloo::console::error!("Error loading JSON data:", src.to_string(), err.to_string());
    gloo::dialogs::alert(LOAD_FAILED_ALERT);
}
