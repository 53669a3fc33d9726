//! Output renderers and formatting helpers for CLI commands.

use aksaraya_api_models::{Catalog, User, UserRole, WishlistItem};
use aksaraya_client::admin::{SYNOPSIS_WORD_LIMIT, truncate_synopsis};
use aksaraya_client::assets::cover_url;
use aksaraya_client::pagination::PageControl;
use anyhow::anyhow;
use serde::Serialize;
use serde_json::json;

use crate::cli::OutputFormat;
use crate::client::{CliError, CliResult};

fn print_json(value: &impl Serialize) -> CliResult<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|err| CliError::failure(anyhow!("failed to format JSON: {err}")))?;
    println!("{text}");
    Ok(())
}

pub(crate) fn render_catalog_page(
    cards: &[Catalog],
    pagination: PageControl,
    format: OutputFormat,
) -> CliResult<()> {
    match format {
        OutputFormat::Json => print_json(&json!({
            "data": cards,
            "page": pagination.current,
            "lastPage": pagination.total,
        })),
        OutputFormat::Table => {
            print!("{}", format_catalog_table(cards));
            println!("page {}", pagination.label());
            Ok(())
        }
    }
}

pub(crate) fn format_catalog_table(cards: &[Catalog]) -> String {
    let mut out = format!(
        "{:>5} {:<32} {:<24} {:<16} {:>4}\n",
        "ID", "TITLE", "AUTHOR", "GENRE", "YEAR"
    );
    for catalog in cards {
        out.push_str(&format!(
            "{:>5} {:<32} {:<24} {:<16} {:>4}\n",
            catalog.id,
            clip(&catalog.title, 32),
            clip(&catalog.author, 24),
            clip(&catalog.genre, 16),
            catalog.year
        ));
    }
    out
}

pub(crate) fn render_catalog_detail(
    catalog: &Catalog,
    base_url: &str,
    wishlisted: Option<bool>,
    format: OutputFormat,
) -> CliResult<()> {
    match format {
        OutputFormat::Json => print_json(&json!({
            "catalog": catalog,
            "coverUrl": cover_url(base_url, &catalog.cover_url),
            "wishlisted": wishlisted,
        })),
        OutputFormat::Table => {
            print!("{}", format_catalog_detail(catalog, base_url, wishlisted));
            Ok(())
        }
    }
}

pub(crate) fn format_catalog_detail(
    catalog: &Catalog,
    base_url: &str,
    wishlisted: Option<bool>,
) -> String {
    let mut out = String::new();
    out.push_str(&format!("id: {}\n", catalog.id));
    out.push_str(&format!("title: {}\n", catalog.title));
    out.push_str(&format!("author: {}\n", catalog.author));
    out.push_str(&format!("genre: {}\n", catalog.genre));
    out.push_str(&format!("type: {}\n", catalog.kind));
    out.push_str(&format!("year: {}\n", catalog.year));
    out.push_str(&format!("publisher: {}\n", or_dash(&catalog.publisher)));
    out.push_str(&format!(
        "cover: {}\n",
        cover_url(base_url, &catalog.cover_url)
    ));
    if let Some(saved) = wishlisted {
        out.push_str(&format!("wishlisted: {}\n", if saved { "yes" } else { "no" }));
    }
    if !catalog.synopsis.trim().is_empty() {
        out.push_str(&format!("\n{}\n", catalog.synopsis.trim()));
    }
    out
}

pub(crate) fn render_admin_list(entries: &[&Catalog], format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => print_json(&entries),
        OutputFormat::Table => {
            print!("{}", format_admin_table(entries));
            Ok(())
        }
    }
}

pub(crate) fn format_admin_table(entries: &[&Catalog]) -> String {
    let mut out = format!(
        "{:>5} {:<28} {:<20} {:<14} {:<10} {:>4} SYNOPSIS\n",
        "ID", "TITLE", "AUTHOR", "GENRE", "TYPE", "YEAR"
    );
    for catalog in entries {
        out.push_str(&format!(
            "{:>5} {:<28} {:<20} {:<14} {:<10} {:>4} {}\n",
            catalog.id,
            clip(&catalog.title, 28),
            clip(&catalog.author, 20),
            clip(&catalog.genre, 14),
            clip(&catalog.kind, 10),
            catalog.year,
            truncate_synopsis(&catalog.synopsis, SYNOPSIS_WORD_LIMIT)
        ));
    }
    out
}

pub(crate) fn render_user(user: &User, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => print_json(user),
        OutputFormat::Table => {
            print!("{}", format_user(user));
            Ok(())
        }
    }
}

pub(crate) fn format_user(user: &User) -> String {
    let mut out = String::new();
    out.push_str(&format!("name: {}\n", user.name));
    out.push_str(&format!("email: {}\n", user.email));
    if user.role != UserRole::User {
        out.push_str(&format!("role: {}\n", user.role.as_str()));
        out.push_str(&format!(
            "NIK: {}\n",
            or_dash(user.nik.as_deref().unwrap_or_default())
        ));
        out.push_str(&format!(
            "phone: {}\n",
            or_dash(user.phone.as_deref().unwrap_or_default())
        ));
    }
    out.push_str(&format!("wishlist: {} item(s)\n", user.wishlists.len()));
    out
}

pub(crate) fn render_wishlist(items: &[WishlistItem], format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => print_json(&items),
        OutputFormat::Table => {
            if items.is_empty() {
                println!("Wishlist is empty.");
                return Ok(());
            }
            println!("{:>5} {:<32} AUTHOR", "ID", "TITLE");
            for item in items {
                println!("{:>5} {:<32} {}", item.id, clip(&item.title, 32), item.author);
            }
            Ok(())
        }
    }
}

fn or_dash(value: &str) -> &str {
    if value.trim().is_empty() { "-" } else { value }
}

fn clip(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        value.to_string()
    } else {
        let kept: String = value.chars().take(width.saturating_sub(1)).collect();
        format!("{kept}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aksaraya_test_support::fixtures;

    #[test]
    fn catalog_table_lists_each_entry() {
        let table = format_catalog_table(&fixtures::catalogs(3));
        assert_eq!(table.lines().count(), 4);
        assert!(table.contains("Buku 2"));
    }

    #[test]
    fn detail_resolves_cover_against_base() {
        let text = format_catalog_detail(&fixtures::catalog(5), "http://api.test", Some(true));
        assert!(text.contains("cover: http://api.test/uploads/cover-5.jpg"));
        assert!(text.contains("wishlisted: yes"));
    }

    #[test]
    fn staff_details_show_dash_when_missing() {
        let mut admin = fixtures::admin();
        admin.phone = None;
        let text = format_user(&admin);
        assert!(text.contains("role: admin"));
        assert!(text.contains("phone: -"));
        assert!(!format_user(&fixtures::reader(&[])).contains("NIK"));
    }

    #[test]
    fn admin_table_truncates_synopsis() {
        let mut entry = fixtures::catalog(1);
        entry.synopsis = (1..=30).map(|n| n.to_string()).collect::<Vec<_>>().join(" ");
        let table = format_admin_table(&[&entry]);
        assert!(table.contains(" 25..."));
        assert!(!table.contains(" 26"));
    }

    #[test]
    fn clip_shortens_long_values() {
        assert_eq!(clip("abcdef", 4), "abc…");
        assert_eq!(clip("abc", 4), "abc");
    }
}
