use aksaraya_api_models::vocabulary::{is_known_genre, is_known_type};
use aksaraya_client::api::CatalogApi;
use aksaraya_client::browse::{BrowseState, BrowseView};
use aksaraya_client::query::fetch_page;
use aksaraya_client::FallbackMessage;

use crate::cli::{BrowseArgs, OutputFormat, ShowArgs};
use crate::client::{AppContext, CliError, CliResult};
use crate::output::{render_catalog_detail, render_catalog_page};

pub(crate) async fn handle_browse(
    ctx: &AppContext,
    args: BrowseArgs,
    format: OutputFormat,
) -> CliResult<()> {
    let limit = args.limit.unwrap_or_else(|| ctx.config.page_limit());
    if limit == 0 {
        return Err(CliError::validation("limit must be at least 1"));
    }
    if args.page == 0 {
        return Err(CliError::validation("page numbers start at 1"));
    }

    let mut state = BrowseState::new(limit);
    state.set_keyword(args.keyword.as_deref().unwrap_or_default());
    state.set_genre(args.genre.as_deref());
    state.set_page(args.page);
    if let Some(genre) = state.genre().filter(|genre| !is_known_genre(genre)) {
        tracing::warn!(genre, "genre is not one of the catalog genres");
    }
    if let Some(kind) = args.kind.as_deref().filter(|kind| !is_known_type(kind.trim())) {
        tracing::warn!(kind, "type is not one of the catalog types");
    }

    let (ticket, query) = state.begin_load();
    let mut query = query
        .with_kind(args.kind.as_deref().unwrap_or_default())
        .with_year(args.year);
    if let Some(column) = args.sort_by.as_deref() {
        query = query.with_sort(column, args.order.order());
    }

    let page = fetch_page(&ctx.api, &query)
        .await
        .map_err(|err| CliError::from_client(&err, FallbackMessage::LoadCatalogs))?;
    state.finish_load(ticket, Ok(page));

    match state.view() {
        BrowseView::Grid { cards, pagination } => render_catalog_page(cards, pagination, format),
        BrowseView::Empty | BrowseView::Skeleton => match format {
            OutputFormat::Json => render_catalog_page(&[], state.page_control(), format),
            OutputFormat::Table => {
                println!("No catalogs found.");
                Ok(())
            }
        },
    }
}

pub(crate) async fn handle_show(
    ctx: &AppContext,
    args: ShowArgs,
    format: OutputFormat,
) -> CliResult<()> {
    let catalog = ctx.api.get_catalog(args.id).await.map_err(CliError::from)?;
    let session = ctx.session();
    let wishlisted = session.user().map(|user| user.has_wishlisted(catalog.id));
    render_catalog_detail(&catalog, ctx.config.base_url(), wishlisted, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::SortArg;
    use crate::client::test_support::{context_with, signed_in_context};
    use aksaraya_test_support::fixtures;
    use httpmock::MockServer;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn browse_sends_filters_and_renders_page() {
        let server = MockServer::start_async().await;
        let dir = tempfile::tempdir().expect("tempdir");
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/catalogs/search")
                .query_param("keyword", "laskar")
                .query_param("genre", "Fiksi")
                .query_param("type", "Cetak")
                .query_param("sortBy", "year")
                .query_param("sortOrder", "desc")
                .query_param("page", "2")
                .query_param("limit", "12");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!(fixtures::catalog_page(3, 2)));
        });

        let ctx = context_with(&server, dir.path());
        let args = BrowseArgs {
            keyword: Some("laskar".into()),
            genre: Some("Fiksi".into()),
            kind: Some("Cetak".into()),
            sort_by: Some("year".into()),
            order: SortArg::Desc,
            page: 2,
            ..BrowseArgs::default()
        };
        handle_browse(&ctx, args, OutputFormat::Table)
            .await
            .expect("browse should succeed");
        mock.assert();
    }

    #[tokio::test]
    async fn browse_without_filters_omits_them() {
        let server = MockServer::start_async().await;
        let dir = tempfile::tempdir().expect("tempdir");
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/catalogs/search")
                .query_param_missing("keyword")
                .query_param_missing("genre")
                .query_param("page", "1");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({"data": [], "lastPage": 0}));
        });

        let ctx = context_with(&server, dir.path());
        handle_browse(&ctx, BrowseArgs::default(), OutputFormat::Json)
            .await
            .expect("empty browse should succeed");
        mock.assert();
    }

    #[tokio::test]
    async fn browse_server_error_is_a_failure() {
        let server = MockServer::start_async().await;
        let dir = tempfile::tempdir().expect("tempdir");
        server.mock(|when, then| {
            when.method(GET).path("/catalogs/search");
            then.status(503);
        });

        let ctx = context_with(&server, dir.path());
        let err = handle_browse(&ctx, BrowseArgs::default(), OutputFormat::Table)
            .await
            .expect_err("browse should fail");
        assert_eq!(err.exit_code(), 3);
    }

    #[tokio::test]
    async fn browse_rejects_zero_page() {
        let server = MockServer::start_async().await;
        let dir = tempfile::tempdir().expect("tempdir");
        let ctx = context_with(&server, dir.path());
        let args = BrowseArgs {
            page: 0,
            ..BrowseArgs::default()
        };
        let err = handle_browse(&ctx, args, OutputFormat::Table)
            .await
            .expect_err("page 0");
        assert_eq!(err.exit_code(), 2);
    }

    #[tokio::test]
    async fn show_fetches_single_entry() {
        let server = MockServer::start_async().await;
        let dir = tempfile::tempdir().expect("tempdir");
        let mock = server.mock(|when, then| {
            when.method(GET).path("/catalogs/4");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!(fixtures::catalog(4)));
        });

        let ctx = signed_in_context(
            &server,
            dir.path(),
            fixtures::reader(&[4]),
            fixtures::READER_TOKEN,
        );
        handle_show(&ctx, ShowArgs { id: 4 }, OutputFormat::Table)
            .await
            .expect("show should succeed");
        mock.assert();
    }

    #[tokio::test]
    async fn show_missing_entry_fails() {
        let server = MockServer::start_async().await;
        let dir = tempfile::tempdir().expect("tempdir");
        server.mock(|when, then| {
            when.method(GET).path("/catalogs/99");
            then.status(404)
                .header("content-type", "application/json")
                .json_body(json!({"message": "Catalog not found"}));
        });

        let ctx = context_with(&server, dir.path());
        let err = handle_show(&ctx, ShowArgs { id: 99 }, OutputFormat::Table)
            .await
            .expect_err("missing entry");
        assert_eq!(err.exit_code(), 3);
        assert!(err.display_message().contains("Catalog not found"));
    }
}
