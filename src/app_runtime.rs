use std::cell::RefCell;

use crate::app_router::{self, AppConfig};

thread_local! {
    static APP_CONFIG: RefCell<Option<AppConfig>> = RefCell::new(None);
}

pub(crate) fn set_app_config(config: AppConfig) {
    APP_CONFIG.with(|slot| {
        *slot.borrow_mut() = Some(config);
    });
}

/// Resolved once per page; later calls reuse the first result.
pub(crate) fn app_config() -> AppConfig {
    APP_CONFIG.with(|slot| {
        slot.borrow_mut()
            .get_or_insert_with(app_router::load_app_config)
            .clone()
    })
}
