//! Persistence and environment helpers for the app shell.

use crate::i18n::{DEFAULT_LOCALE, LocaleCode};
use aksaraya_client::config::{ClientConfig, DEFAULT_BASE_URL};
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;

pub(crate) const LOCALE_KEY: &str = "aksaraya.locale";

pub(crate) fn load_locale() -> LocaleCode {
    if let Ok(value) = LocalStorage::get::<String>(LOCALE_KEY) {
        if let Some(locale) = LocaleCode::from_lang_tag(&value) {
            return locale;
        }
    }
    if let Some(nav) = window().navigator().language() {
        if let Some(locale) = LocaleCode::from_lang_tag(&nav) {
            return locale;
        }
    }
    DEFAULT_LOCALE
}

pub(crate) fn persist_locale(locale: LocaleCode) {
    if let Err(err) = LocalStorage::set(LOCALE_KEY, locale.code()) {
        console::warn!(format!("locale not persisted: {err}"));
    }
}

/// Backend base URL: compile-time `AKSARAYA_API_URL`, else the page origin.
pub(crate) fn api_base_url() -> String {
    if let Some(url) = option_env!("AKSARAYA_API_URL") {
        return url.to_string();
    }
    window()
        .location()
        .origin()
        .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
}

pub(crate) fn client_config() -> ClientConfig {
    let base_url = api_base_url();
    match ClientConfig::new(&base_url) {
        Ok(config) => config,
        Err(err) => {
            console::error!(format!("invalid API base URL {base_url}: {err}"));
            ClientConfig::default()
        }
    }
}
