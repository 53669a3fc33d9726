use std::fs;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::Path;

use aksaraya_api_models::{Catalog, UserRole};
use aksaraya_client::admin::{AdminDashboard, require_confirmation};
use aksaraya_client::api::CatalogApi;
use aksaraya_client::form::{CatalogDraft, CoverUpload};
use aksaraya_client::guard::{Access, GuardDecision, guard};
use aksaraya_client::{ApiOutcome, FallbackMessage};
use anyhow::anyhow;

use crate::cli::{
    AdminListArgs, CatalogCreateArgs, CatalogDeleteArgs, CatalogUpdateArgs, OutputFormat,
};
use crate::client::{AppContext, CliError, CliResult};
use crate::output::render_admin_list;

pub(crate) async fn handle_admin_list(
    ctx: &AppContext,
    args: AdminListArgs,
    format: OutputFormat,
) -> CliResult<()> {
    require_admin(ctx)?;

    let mut dashboard = AdminDashboard::new();
    dashboard.begin_reload();
    let catalogs = ctx
        .api
        .list_catalogs()
        .await
        .map_err(|err| CliError::from_client(&err, FallbackMessage::LoadCatalogs))?;
    dashboard.finish_reload(Ok(catalogs));
    if let Some(search) = args.search.as_deref() {
        dashboard.set_search(search);
    }
    render_admin_list(&dashboard.filtered(), format)
}

pub(crate) async fn handle_admin_create(ctx: &AppContext, args: CatalogCreateArgs) -> CliResult<()> {
    let token = require_admin(ctx)?;
    let draft = CatalogDraft {
        title: args.title,
        author: args.author,
        genre: args.genre,
        year: args.year,
        kind: args.kind,
        publisher: args.publisher,
        synopsis: args.synopsis,
        cover: args.cover.as_deref().map(read_cover).transpose()?,
    };
    draft.validate().map_err(CliError::from)?;

    let mut dashboard = AdminDashboard::new();
    dashboard.open_create();
    finish(dashboard.submit(&ctx.api, &token, &draft).await)?;
    println!("{}", created_message(draft.title.trim(), &dashboard));
    Ok(())
}

pub(crate) async fn handle_admin_update(ctx: &AppContext, args: CatalogUpdateArgs) -> CliResult<()> {
    let token = require_admin(ctx)?;
    let catalog = fetch(ctx, args.id).await?;

    let mut dashboard = AdminDashboard::new();
    dashboard.open_edit(catalog);
    let mut draft = dashboard
        .form_draft()
        .ok_or_else(|| CliError::failure(anyhow!("edit form did not open")))?;
    overwrite(&mut draft.title, args.title);
    overwrite(&mut draft.author, args.author);
    overwrite(&mut draft.genre, args.genre);
    overwrite(&mut draft.year, args.year);
    overwrite(&mut draft.kind, args.kind);
    overwrite(&mut draft.publisher, args.publisher);
    overwrite(&mut draft.synopsis, args.synopsis);
    draft.cover = args.cover.as_deref().map(read_cover).transpose()?;
    draft.validate().map_err(CliError::from)?;

    finish(dashboard.submit(&ctx.api, &token, &draft).await)?;
    println!("Updated catalog {}", args.id);
    Ok(())
}

pub(crate) async fn handle_admin_delete(ctx: &AppContext, args: CatalogDeleteArgs) -> CliResult<()> {
    let token = require_admin(ctx)?;
    let interactive = io::stdin().is_terminal();
    if !args.yes && !interactive {
        require_confirmation(false).map_err(CliError::from)?;
    }

    let catalog = fetch(ctx, args.id).await?;
    let title = catalog.title.clone();
    let mut dashboard = AdminDashboard::new();
    dashboard.request_delete(catalog);

    let confirmed = args.yes || prompt_confirmation(&title)?;
    if !confirmed {
        dashboard.close_modal();
        println!("Delete cancelled");
        return Ok(());
    }

    let deleted = dashboard
        .confirm_delete(&ctx.api, &token)
        .await
        .map_err(|err| CliError::from_client(&err, FallbackMessage::DeleteCatalog))?;
    if let Some(id) = deleted {
        println!("{}", deleted_message(&title, id, &dashboard));
    }
    Ok(())
}

fn created_message(title: &str, dashboard: &AdminDashboard) -> String {
    if dashboard.reload_failed() {
        format!("Created \"{title}\" (catalog list could not be reloaded)")
    } else {
        format!("Created \"{title}\" ({} catalogs total)", dashboard.catalogs().len())
    }
}

fn deleted_message(title: &str, id: u64, dashboard: &AdminDashboard) -> String {
    if dashboard.reload_failed() {
        format!("Deleted \"{title}\" (id {id}); catalog list could not be reloaded")
    } else {
        format!(
            "Deleted \"{title}\" (id {id}); {} catalogs remain",
            dashboard.catalogs().len()
        )
    }
}

/// Token of the logged-in admin, or the reason the command is refused.
fn require_admin(ctx: &AppContext) -> CliResult<String> {
    let session = ctx.session();
    match guard(session.user(), Access::Role(UserRole::Admin)) {
        GuardDecision::Allow => session.require_token().map_err(CliError::from),
        GuardDecision::RedirectLogin => Err(CliError::validation(
            "not logged in; run `aksaraya login` with an admin account first",
        )),
        GuardDecision::RedirectHome => Err(CliError::validation("admin role required")),
    }
}

async fn fetch(ctx: &AppContext, id: u64) -> CliResult<Catalog> {
    ctx.api
        .get_catalog(id)
        .await
        .map_err(|err| CliError::from_client(&err, FallbackMessage::LoadCatalogs))
}

fn finish(outcome: ApiOutcome<()>) -> CliResult<()> {
    match outcome {
        ApiOutcome::Ok(()) => Ok(()),
        ApiOutcome::Failed { message } => Err(CliError::failure(anyhow!(message))),
    }
}

fn overwrite(slot: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *slot = value;
    }
}

fn read_cover(path: &Path) -> CliResult<CoverUpload> {
    let bytes = fs::read(path).map_err(|err| {
        CliError::validation(format!("cannot read cover {}: {err}", path.display()))
    })?;
    let file_name = path
        .file_name()
        .map_or_else(|| "cover".to_string(), |name| name.to_string_lossy().into_owned());
    Ok(CoverUpload {
        content_type: CoverUpload::guess_content_type(&file_name).to_string(),
        file_name,
        bytes,
    })
}

fn prompt_confirmation(title: &str) -> CliResult<bool> {
    print!("Delete \"{title}\"? This cannot be undone. [y/N] ");
    io::stdout()
        .flush()
        .map_err(|err| CliError::failure(anyhow!("failed to write prompt: {err}")))?;
    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .map_err(|err| CliError::failure(anyhow!("failed to read confirmation: {err}")))?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::test_support::{context_with, signed_in_context};
    use aksaraya_test_support::fixtures;
    use httpmock::MockServer;
    use httpmock::prelude::*;
    use serde_json::json;

    fn admin_context(server: &MockServer, dir: &Path) -> AppContext {
        signed_in_context(server, dir, fixtures::admin(), fixtures::ADMIN_TOKEN)
    }

    fn create_args(title: &str) -> CatalogCreateArgs {
        CatalogCreateArgs {
            title: title.to_string(),
            author: "Pramoedya Ananta Toer".into(),
            genre: "Sejarah".into(),
            year: "1980".into(),
            kind: "Cetak".into(),
            publisher: "Hasta Mitra".into(),
            synopsis: "Minke di Surabaya.".into(),
            cover: None,
        }
    }

    #[tokio::test]
    async fn list_filters_by_search() {
        let server = MockServer::start_async().await;
        let dir = tempfile::tempdir().expect("tempdir");
        let list = server.mock(|when, then| {
            when.method(GET).path("/catalogs");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({ "catalogs": fixtures::catalogs(3) }));
        });

        let ctx = admin_context(&server, dir.path());
        handle_admin_list(
            &ctx,
            AdminListArgs {
                search: Some("buku 2".into()),
            },
            OutputFormat::Json,
        )
        .await
        .expect("list should succeed");
        list.assert();
    }

    #[tokio::test]
    async fn reader_cannot_use_admin_commands() {
        let server = MockServer::start_async().await;
        let dir = tempfile::tempdir().expect("tempdir");
        let list = server.mock(|when, then| {
            when.method(GET).path("/catalogs");
            then.status(200).json_body(json!({ "catalogs": [] }));
        });

        let ctx = signed_in_context(
            &server,
            dir.path(),
            fixtures::reader(&[]),
            fixtures::READER_TOKEN,
        );
        let err = handle_admin_list(&ctx, AdminListArgs { search: None }, OutputFormat::Table)
            .await
            .expect_err("readers are refused");
        assert_eq!(err.exit_code(), 2);
        assert!(err.display_message().contains("admin role required"));
        list.assert_calls(0);

        let anonymous = context_with(&server, dir.path().join("none").as_path());
        let err = handle_admin_list(
            &anonymous,
            AdminListArgs { search: None },
            OutputFormat::Table,
        )
        .await
        .expect_err("visitors are refused");
        assert!(err.display_message().contains("not logged in"));
    }

    #[tokio::test]
    async fn create_posts_multipart_with_cover_and_reloads() {
        let server = MockServer::start_async().await;
        let dir = tempfile::tempdir().expect("tempdir");
        let cover = dir.path().join("bumi.png");
        fs::write(&cover, b"\x89PNG").expect("write cover");

        let create = server.mock(|when, then| {
            when.method(POST)
                .path("/catalogs")
                .header("authorization", "Bearer admin-token")
                .header_includes("content-type", "multipart/form-data")
                .body_includes("Bumi Manusia")
                .body_includes("filename=\"bumi.png\"")
                .body_includes("image/png");
            then.status(201);
        });
        let reload = server.mock(|when, then| {
            when.method(GET).path("/catalogs");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({ "catalogs": fixtures::catalogs(1) }));
        });

        let ctx = admin_context(&server, dir.path());
        let mut args = create_args("Bumi Manusia");
        args.cover = Some(cover);
        handle_admin_create(&ctx, args)
            .await
            .expect("create should succeed");

        create.assert();
        reload.assert();
    }

    #[tokio::test]
    async fn create_survives_failed_reload_without_claiming_a_count() {
        let server = MockServer::start_async().await;
        let dir = tempfile::tempdir().expect("tempdir");
        let create = server.mock(|when, then| {
            when.method(POST).path("/catalogs");
            then.status(201);
        });
        let reload = server.mock(|when, then| {
            when.method(GET).path("/catalogs");
            then.status(503);
        });

        let ctx = admin_context(&server, dir.path());
        let token = fixtures::ADMIN_TOKEN.to_string();
        let draft = CatalogDraft {
            title: "Rumah Kaca".into(),
            author: "Pramoedya Ananta Toer".into(),
            genre: "Sejarah".into(),
            year: "1988".into(),
            kind: "Cetak".into(),
            ..CatalogDraft::default()
        };
        let mut dashboard = AdminDashboard::new();
        dashboard.open_create();
        finish(dashboard.submit(&ctx.api, &token, &draft).await).expect("create accepted");

        create.assert();
        reload.assert();
        assert!(dashboard.reload_failed());
        let message = created_message("Rumah Kaca", &dashboard);
        assert!(!message.contains("catalogs total"));
        assert!(message.contains("could not be reloaded"));
        assert!(deleted_message("Rumah Kaca", 4, &dashboard).contains("could not be reloaded"));

        dashboard.finish_reload(Ok(fixtures::catalogs(2)));
        assert_eq!(
            created_message("Rumah Kaca", &dashboard),
            "Created \"Rumah Kaca\" (2 catalogs total)"
        );
    }

    #[tokio::test]
    async fn invalid_year_is_rejected_before_sending() {
        let server = MockServer::start_async().await;
        let dir = tempfile::tempdir().expect("tempdir");
        let create = server.mock(|when, then| {
            when.method(POST).path("/catalogs");
            then.status(201);
        });

        let ctx = admin_context(&server, dir.path());
        let mut args = create_args("Anak Semua Bangsa");
        args.year = "seribu".into();
        let err = handle_admin_create(&ctx, args)
            .await
            .expect_err("year must be numeric");

        assert_eq!(err.exit_code(), 2);
        create.assert_calls(0);
    }

    #[tokio::test]
    async fn failed_create_reports_server_message() {
        let server = MockServer::start_async().await;
        let dir = tempfile::tempdir().expect("tempdir");
        server.mock(|when, then| {
            when.method(POST).path("/catalogs");
            then.status(500)
                .header("content-type", "application/json")
                .json_body(json!({ "message": "Disk penuh" }));
        });

        let ctx = admin_context(&server, dir.path());
        let err = handle_admin_create(&ctx, create_args("Jejak Langkah"))
            .await
            .expect_err("server rejects");
        assert_eq!(err.exit_code(), 3);
        assert!(err.display_message().contains("Disk penuh"));
    }

    #[tokio::test]
    async fn update_merges_changed_fields_over_existing_entry() {
        let server = MockServer::start_async().await;
        let dir = tempfile::tempdir().expect("tempdir");
        server.mock(|when, then| {
            when.method(GET).path("/catalogs/4");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!(fixtures::catalog(4)));
        });
        let update = server.mock(|when, then| {
            when.method(PUT)
                .path("/catalogs/4")
                .body_includes("Penerbit Baru")
                .body_includes("Buku 4");
            then.status(200);
        });
        server.mock(|when, then| {
            when.method(GET).path("/catalogs");
            then.status(200).json_body(json!({ "catalogs": [] }));
        });

        let ctx = admin_context(&server, dir.path());
        let args = CatalogUpdateArgs {
            id: 4,
            title: None,
            author: None,
            genre: None,
            year: None,
            kind: None,
            publisher: Some("Penerbit Baru".into()),
            synopsis: None,
            cover: None,
        };
        handle_admin_update(&ctx, args)
            .await
            .expect("update should succeed");
        update.assert();
    }

    #[tokio::test]
    async fn delete_with_yes_sends_delete_then_reloads() {
        let server = MockServer::start_async().await;
        let dir = tempfile::tempdir().expect("tempdir");
        server.mock(|when, then| {
            when.method(GET).path("/catalogs/9");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!(fixtures::catalog(9)));
        });
        let delete = server.mock(|when, then| {
            when.method(DELETE)
                .path("/catalogs/9")
                .header("authorization", "Bearer admin-token");
            then.status(200);
        });
        let reload = server.mock(|when, then| {
            when.method(GET).path("/catalogs");
            then.status(200).json_body(json!({ "catalogs": [] }));
        });

        let ctx = admin_context(&server, dir.path());
        handle_admin_delete(&ctx, CatalogDeleteArgs { id: 9, yes: true })
            .await
            .expect("delete should succeed");
        delete.assert();
        reload.assert();
    }

    #[tokio::test]
    async fn unconfirmed_delete_sends_nothing() {
        let server = MockServer::start_async().await;
        let dir = tempfile::tempdir().expect("tempdir");
        let delete = server.mock(|when, then| {
            when.method(DELETE).path("/catalogs/9");
            then.status(200);
        });

        let ctx = admin_context(&server, dir.path());
        if io::stdin().is_terminal() {
            return;
        }
        let err = handle_admin_delete(&ctx, CatalogDeleteArgs { id: 9, yes: false })
            .await
            .expect_err("confirmation is required");
        assert_eq!(err.exit_code(), 2);
        delete.assert_calls(0);
    }
}
