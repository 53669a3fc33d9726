//! Reusable view components.

pub(crate) mod catalog_card;
pub(crate) mod catalog_form;
pub(crate) mod genre_sidebar;
pub(crate) mod guard;
pub(crate) mod modal;
pub(crate) mod navbar;
pub(crate) mod pagination;
pub(crate) mod search_input;

use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::prelude::*;

/// Active translation bundle; the default locale outside the provider.
#[hook]
pub(crate) fn use_bundle() -> TranslationBundle {
    use_context::<TranslationBundle>().unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE))
}
