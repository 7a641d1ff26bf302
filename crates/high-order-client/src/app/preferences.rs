//! Persistence helpers for demo preferences.

use crate::store::ScrollPrefs;
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use high_order_ui::ScrollDirection;
use serde::Serialize;

pub(crate) const DIRECTION_KEY: &str = "high-order.scroll.direction";
pub(crate) const SMOOTH_KEY: &str = "high-order.scroll.smooth";

pub(crate) fn load_prefs() -> ScrollPrefs {
    ScrollPrefs {
        direction: load_direction(),
        smooth: LocalStorage::get::<bool>(SMOOTH_KEY).unwrap_or(false),
    }
}

fn load_direction() -> ScrollDirection {
    let Ok(value) = LocalStorage::get::<String>(DIRECTION_KEY) else {
        return ScrollDirection::default();
    };
    match value.parse::<ScrollDirection>() {
        Ok(direction) => direction,
        Err(err) => {
            console::warn!("ignoring stored preference", DIRECTION_KEY, err.to_string());
            delete_storage(DIRECTION_KEY);
            ScrollDirection::default()
        }
    }
}

pub(crate) fn persist_prefs(prefs: ScrollPrefs) {
    set_storage(DIRECTION_KEY, prefs.direction.as_str());
    set_storage(SMOOTH_KEY, prefs.smooth);
}

fn set_storage<T: Serialize>(key: &'static str, value: T) {
    if let Err(err) = LocalStorage::set(key, value) {
        log_storage_error("set", key, &err.to_string());
    }
}

fn delete_storage(key: &'static str) {
    LocalStorage::delete(key);
}

fn log_storage_error(operation: &'static str, key: &'static str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
