//! Tagged request outcomes surfaced to forms.

use crate::error::ClientResult;

/// Result of a user-triggered request, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiOutcome<T> {
    /// The request succeeded.
    Ok(T),
    /// The request failed; `message` is safe to show inline.
    Failed {
        /// Server message when present, otherwise a localized fallback.
        message: String,
    },
}

impl<T> ApiOutcome<T> {
    /// Fold a client result into an outcome, using `fallback` when the failure has no message.
    pub fn from_result(result: ClientResult<T>, fallback: &str) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(err) => Self::Failed {
                message: err.user_message(fallback),
            },
        }
    }

    /// Whether the request succeeded.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Failure message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Ok(_) => None,
            Self::Failed { message } => Some(message.as_str()),
        }
    }

    /// Convert back into an `Option`, dropping the failure message.
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Failed { .. } => None,
        }
    }
}

/// Generic failure messages shown when the backend gives no message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackMessage {
    /// Login failed.
    Login,
    /// Registration failed.
    Register,
    /// Creating a catalog entry failed.
    CreateCatalog,
    /// Updating a catalog entry failed.
    UpdateCatalog,
    /// Deleting a catalog entry failed.
    DeleteCatalog,
    /// Loading the catalog failed.
    LoadCatalogs,
    /// Wishlist update failed.
    Wishlist,
    /// Anything else.
    Unknown,
}

impl FallbackMessage {
    /// Translation key under the `errors` section.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Login => "errors.login",
            Self::Register => "errors.register",
            Self::CreateCatalog => "errors.create_catalog",
            Self::UpdateCatalog => "errors.update_catalog",
            Self::DeleteCatalog => "errors.delete_catalog",
            Self::LoadCatalogs => "errors.load_catalogs",
            Self::Wishlist => "errors.wishlist",
            Self::Unknown => "errors.unknown",
        }
    }

    /// Default (Indonesian) text used when no translation bundle is at hand.
    #[must_use]
    pub const fn default_text(self) -> &'static str {
        match self {
            Self::Login => "Login gagal.",
            Self::Register => "Registrasi gagal, coba lagi.",
            Self::CreateCatalog => "Terjadi kesalahan saat menambahkan katalog.",
            Self::UpdateCatalog => "Terjadi kesalahan saat memperbarui katalog.",
            Self::DeleteCatalog => "Gagal menghapus katalog.",
            Self::LoadCatalogs => "Gagal memuat katalog.",
            Self::Wishlist => "Gagal memperbarui wishlist.",
            Self::Unknown => "Terjadi kesalahan yang tidak diketahui.",
        }
    }
}

impl<T> ApiOutcome<T> {
    /// Shorthand for [`ApiOutcome::from_result`] with a [`FallbackMessage`] default.
    pub fn with_fallback(result: ClientResult<T>, fallback: FallbackMessage) -> Self {
        Self::from_result(result, fallback.default_text())
    }
}
