//! JSON-backed translations with per-locale bundles.

use serde_json::Value;
use std::sync::LazyLock;

/// Supported locale codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LocaleCode {
    /// Indonesian.
    Id,
    /// English.
    En,
}

impl LocaleCode {
    /// All supported locales in display order.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::Id, Self::En]
    }

    /// Two-letter language code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::En => "en",
        }
    }

    /// Human-friendly label for the locale switcher.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Id => "Bahasa Indonesia",
            Self::En => "English",
        }
    }

    /// Map a browser language tag (`id-ID`, `en-US`) to a supported locale.
    #[must_use]
    pub fn from_lang_tag(tag: &str) -> Option<Self> {
        let lowered = tag.to_ascii_lowercase();
        let base = lowered.split('-').next().unwrap_or_default();
        Self::all()
            .iter()
            .copied()
            .find(|locale| locale.code() == base)
    }
}

/// Default locale; the backend's own messages are Indonesian.
pub const DEFAULT_LOCALE: LocaleCode = LocaleCode::Id;

/// Parsed translation tree for one locale.
#[derive(Clone, Debug)]
pub struct TranslationBundle {
    /// Locale backing this bundle.
    pub locale: LocaleCode,
    tree: Value,
}

impl PartialEq for TranslationBundle {
    fn eq(&self, other: &Self) -> bool {
        self.locale == other.locale
    }
}

impl TranslationBundle {
    /// Build the bundle for `locale`; missing keys fall back to Indonesian.
    #[must_use]
    pub fn new(locale: LocaleCode) -> Self {
        let tree: Value = serde_json::from_str(raw_locale(locale)).unwrap_or(Value::Null);
        Self { locale, tree }
    }

    /// Resolve a dotted path (`section.key`) with fallback bundle and caller default.
    #[must_use]
    pub fn text(&self, path: &str, default: &str) -> String {
        resolve(&self.tree, path)
            .or_else(|| resolve(&FALLBACK.tree, path))
            .unwrap_or_else(|| default.to_string())
    }

    /// Resolve `path` and substitute `{name}` placeholders from `args`.
    #[must_use]
    pub fn format(&self, path: &str, default: &str, args: &[(&str, String)]) -> String {
        args.iter()
            .fold(self.text(path, default), |text, (name, value)| {
                text.replace(&format!("{{{name}}}"), value)
            })
    }
}

static FALLBACK: LazyLock<TranslationBundle> =
    LazyLock::new(|| TranslationBundle::new(DEFAULT_LOCALE));

fn resolve(tree: &Value, path: &str) -> Option<String> {
    let mut node = tree;
    for segment in path.split('.') {
        node = node.get(segment)?;
    }
    node.as_str().map(ToString::to_string)
}

const fn raw_locale(locale: LocaleCode) -> &'static str {
    match locale {
        LocaleCode::Id => include_str!("../../i18n/id.json"),
        LocaleCode::En => include_str!("../../i18n/en.json"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aksaraya_client::FallbackMessage;

    #[test]
    fn missing_key_falls_back_to_default() {
        let bundle = TranslationBundle::new(LocaleCode::En);
        assert_eq!(bundle.text("nonexistent.key", "fallback"), "fallback");
    }

    #[test]
    fn lang_tags_map_to_locales() {
        assert_eq!(LocaleCode::from_lang_tag("id-ID"), Some(LocaleCode::Id));
        assert_eq!(LocaleCode::from_lang_tag("EN"), Some(LocaleCode::En));
        assert_eq!(LocaleCode::from_lang_tag("fr-FR"), None);
    }

    #[test]
    fn pagination_label_is_formatted() {
        let bundle = TranslationBundle::new(LocaleCode::Id);
        let label = bundle.format(
            "pagination.label",
            "",
            &[("page", "1".into()), ("last", "2".into())],
        );
        assert_eq!(label, "Halaman 1 dari 2");
    }

    #[test]
    fn every_fallback_message_is_translated() {
        let fallbacks = [
            FallbackMessage::Login,
            FallbackMessage::Register,
            FallbackMessage::CreateCatalog,
            FallbackMessage::UpdateCatalog,
            FallbackMessage::DeleteCatalog,
            FallbackMessage::LoadCatalogs,
            FallbackMessage::Wishlist,
            FallbackMessage::Unknown,
        ];
        let indonesian = TranslationBundle::new(LocaleCode::Id);
        for locale in LocaleCode::all() {
            let bundle = TranslationBundle::new(locale);
            for fallback in fallbacks {
                assert!(!bundle.text(fallback.key(), "").is_empty(), "{}", fallback.key());
            }
        }
        for fallback in fallbacks {
            assert_eq!(indonesian.text(fallback.key(), ""), fallback.default_text());
        }
    }

    #[test]
    fn english_bundle_has_its_own_strings() {
        let bundle = TranslationBundle::new(LocaleCode::En);
        assert_eq!(bundle.text("pagination.prev", ""), "Previous");
        assert_eq!(bundle.text("detail.wishlist_add", ""), "Add to wishlist");
    }
}
