//! Controlled vocabularies accepted by the catalog backend.

/// Genre labels offered by the catalog forms and the browse sidebar.
pub const GENRES: [&str; 24] = [
    "Fiksi",
    "Non-Fiksi",
    "Fantasi",
    "Fiksi Ilmiah",
    "Sejarah",
    "Biografi",
    "Misteri",
    "Romantis",
    "Petualangan",
    "Horor",
    "Puisi",
    "Self-Improvement",
    "Psikologi",
    "Pendidikan",
    "Agama",
    "Politik",
    "Sains",
    "Seni & Budaya",
    "Komik",
    "Anak-anak",
    "Teknologi",
    "Ekonomi",
    "Sosial",
    "Kesehatan",
];

/// Media types offered by the catalog forms.
pub const CATALOG_TYPES: [&str; 9] = [
    "Cetak",
    "Ebook",
    "Audiobook",
    "Komik",
    "Majalah",
    "Jurnal",
    "Artikel",
    "Ensiklopedia",
    "Manual Book",
];

/// Whether `value` is one of the known genres (exact match).
#[must_use]
pub fn is_known_genre(value: &str) -> bool {
    GENRES.contains(&value)
}

/// Whether `value` is one of the known media types (exact match).
#[must_use]
pub fn is_known_type(value: &str) -> bool {
    CATALOG_TYPES.contains(&value)
}
