//! Catalog form drafts and validation.
//!
//! # Design
//! - Drafts hold raw input strings exactly as typed.
//! - Validation produces a typed [`CatalogForm`] ready for multipart encoding.
//! - Empty cover means "keep the existing cover" on update.

use aksaraya_api_models::Catalog;

use crate::error::{ClientError, ClientResult};

/// Multipart part name carrying the cover image.
pub const COVER_FIELD: &str = "cover";

/// Cover image selected in the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverUpload {
    /// Original file name.
    pub file_name: String,
    /// MIME type reported by the picker.
    pub content_type: String,
    /// Raw image bytes.
    pub bytes: Vec<u8>,
}

impl CoverUpload {
    /// Guess a MIME type from the file extension.
    #[must_use]
    pub fn guess_content_type(file_name: &str) -> &'static str {
        let lowered = file_name.to_ascii_lowercase();
        match lowered.rsplit('.').next() {
            Some("png") => "image/png",
            Some("jpg" | "jpeg") => "image/jpeg",
            Some("webp") => "image/webp",
            Some("gif") => "image/gif",
            _ => "application/octet-stream",
        }
    }
}

/// Raw catalog form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogDraft {
    /// Title input.
    pub title: String,
    /// Author input.
    pub author: String,
    /// Genre selection.
    pub genre: String,
    /// Year input, parsed on validation.
    pub year: String,
    /// Media type selection.
    pub kind: String,
    /// Publisher input.
    pub publisher: String,
    /// Synopsis textarea.
    pub synopsis: String,
    /// Optional replacement cover.
    pub cover: Option<CoverUpload>,
}

impl CatalogDraft {
    /// Prefill a draft from an existing entry (edit modal).
    #[must_use]
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            title: catalog.title.clone(),
            author: catalog.author.clone(),
            genre: catalog.genre.clone(),
            year: catalog.year.to_string(),
            kind: catalog.kind.clone(),
            publisher: catalog.publisher.clone(),
            synopsis: catalog.synopsis.clone(),
            cover: None,
        }
    }

    /// Validate required fields and parse the year.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Validation`] naming the first invalid field.
    pub fn validate(&self) -> ClientResult<CatalogForm> {
        let title = required("title", &self.title, "Judul buku wajib diisi.")?;
        let author = required("author", &self.author, "Penulis wajib diisi.")?;
        let genre = required("genre", &self.genre, "Genre wajib dipilih.")?;
        let kind = required("type", &self.kind, "Tipe wajib dipilih.")?;
        let year = self
            .year
            .trim()
            .parse::<i32>()
            .ok()
            .filter(|year| *year > 0)
            .ok_or(ClientError::Validation {
                field: "year",
                reason: "Tahun terbit harus berupa angka.",
            })?;

        Ok(CatalogForm {
            title,
            author,
            genre,
            year,
            kind,
            publisher: self.publisher.trim().to_string(),
            synopsis: self.synopsis.trim().to_string(),
            cover: self.cover.clone(),
        })
    }
}

fn required(field: &'static str, value: &str, reason: &'static str) -> ClientResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ClientError::Validation { field, reason });
    }
    Ok(trimmed.to_string())
}

/// Validated catalog submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogForm {
    /// Title.
    pub title: String,
    /// Author.
    pub author: String,
    /// Genre.
    pub genre: String,
    /// Publication year.
    pub year: i32,
    /// Media type.
    pub kind: String,
    /// Publisher.
    pub publisher: String,
    /// Synopsis.
    pub synopsis: String,
    /// Optional cover image.
    pub cover: Option<CoverUpload>,
}

impl CatalogForm {
    /// Text parts in submission order, keyed by their multipart names.
    #[must_use]
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("title", self.title.clone()),
            ("author", self.author.clone()),
            ("genre", self.genre.clone()),
            ("year", self.year.to_string()),
            ("type", self.kind.clone()),
            ("publisher", self.publisher.clone()),
            ("synopsis", self.synopsis.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> CatalogDraft {
        CatalogDraft {
            title: " Laut Bercerita ".into(),
            author: "Leila S. Chudori".into(),
            genre: "Fiksi".into(),
            year: "2017".into(),
            kind: "Cetak".into(),
            publisher: "KPG".into(),
            synopsis: "Biru Laut".into(),
            cover: None,
        }
    }

    #[test]
    fn valid_draft_is_trimmed_and_parsed() {
        let form = draft().validate().expect("valid draft");
        assert_eq!(form.title, "Laut Bercerita");
        assert_eq!(form.year, 2017);
        let fields = form.text_fields();
        assert_eq!(fields[3], ("year", "2017".to_string()));
        assert_eq!(fields[4], ("type", "Cetak".to_string()));
    }

    #[test]
    fn missing_title_is_rejected() {
        let mut input = draft();
        input.title = "   ".into();
        let err = input.validate().expect_err("title required");
        assert_eq!(
            err,
            ClientError::Validation {
                field: "title",
                reason: "Judul buku wajib diisi.",
            }
        );
    }

    #[test]
    fn non_numeric_year_is_rejected() {
        let mut input = draft();
        input.year = "dua ribu".into();
        assert!(matches!(
            input.validate(),
            Err(ClientError::Validation { field: "year", .. })
        ));
        input.year = "-5".into();
        assert!(input.validate().is_err());
    }

    #[test]
    fn cover_type_is_guessed_from_extension() {
        assert_eq!(CoverUpload::guess_content_type("cover.JPG"), "image/jpeg");
        assert_eq!(CoverUpload::guess_content_type("cover.png"), "image/png");
        assert_eq!(
            CoverUpload::guess_content_type("cover"),
            "application/octet-stream"
        );
    }
}
