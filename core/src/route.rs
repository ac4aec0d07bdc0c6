#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Welcome,
    Main,
    NotFound(String),
}

pub const WELCOME_FRAGMENT: &str = "welcomePage";
pub const MAIN_FRAGMENT: &str = "mainPage";

impl Route {
    /// Accepts the raw `location.hash`, with or without the leading `#`.
    /// An empty fragment is the welcome page.
    pub fn from_hash(hash: &str) -> Self {
        let fragment = hash.strip_prefix('#').unwrap_or(hash);
        match fragment {
            "" | WELCOME_FRAGMENT => Route::Welcome,
            MAIN_FRAGMENT => Route::Main,
            other => Route::NotFound(other.to_string()),
        }
    }

    pub fn fragment(&self) -> &str {
        match self {
            Route::Welcome => WELCOME_FRAGMENT,
            Route::Main => MAIN_FRAGMENT,
            Route::NotFound(fragment) => fragment,
        }
    }
}
