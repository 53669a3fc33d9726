//! End-to-end flows of the client core against the scripted fake API.

use aksaraya_api_models::{LoginRequest, RegisterRequest, UserRole};
use aksaraya_client::admin::{AdminDashboard, AdminModal};
use aksaraya_client::auth::{sign_in, sign_up};
use aksaraya_client::browse::{BrowseState, BrowseView, LoadApplied};
use aksaraya_client::form::CatalogDraft;
use aksaraya_client::wishlist::{WishlistAction, toggle_wishlist};
use aksaraya_client::{
    ApiOutcome, ClientError, MemoryPersistence, SessionSnapshot, SessionStore,
};
use aksaraya_test_support::fixtures::{
    ADMIN_TOKEN, READER_TOKEN, admin, admin_login, catalog, catalog_page, catalogs, reader,
    reader_login,
};
use aksaraya_test_support::mocks::{ApiCall, RecordingApi};

fn signed_in(wishlisted: &[u64]) -> (SessionStore<MemoryPersistence>, MemoryPersistence) {
    let persistence = MemoryPersistence::default();
    let mut session = SessionStore::new(persistence.clone());
    session
        .login(reader(wishlisted), READER_TOKEN.to_string())
        .expect("login");
    (session, persistence)
}

fn draft(title: &str) -> CatalogDraft {
    CatalogDraft {
        title: title.to_string(),
        author: "Andrea Hirata".to_string(),
        genre: "Fiksi".to_string(),
        year: "2005".to_string(),
        kind: "Cetak".to_string(),
        ..CatalogDraft::default()
    }
}

#[tokio::test]
async fn browse_renders_grid_with_page_label() {
    let api = RecordingApi::new();
    api.push_search(Ok(catalog_page(3, 2)));
    let mut state = BrowseState::new(12);

    assert_eq!(state.reload(&api).await, LoadApplied::Applied);

    match state.view() {
        BrowseView::Grid { cards, pagination } => {
            assert_eq!(cards.len(), 3);
            assert_eq!(pagination.label(), "1 of 2");
            assert!(!pagination.can_prev());
            assert!(pagination.can_next());
        }
        other => panic!("expected grid, got {other:?}"),
    }
    let Some(ApiCall::SearchCatalogs(query)) = api.last_call() else {
        panic!("expected search call");
    };
    assert_eq!(query.search_path(), "/catalogs/search?page=1&limit=12");
}

#[tokio::test]
async fn browse_failure_keeps_previous_page() {
    let api = RecordingApi::new();
    api.push_search(Ok(catalog_page(3, 2))).push_search(Err(ClientError::Status {
        operation: "search",
        status: 500,
        message: None,
    }));
    let mut state = BrowseState::new(12);
    state.reload(&api).await;
    assert!(state.set_page(2));

    assert_eq!(state.reload(&api).await, LoadApplied::Failed);
    assert_eq!(state.results().len(), 3);
    assert_eq!(api.call_count(), 2);
}

#[tokio::test]
async fn genre_selection_queries_from_first_page() {
    let api = RecordingApi::new();
    api.push_search(Ok(catalog_page(3, 4)))
        .push_search(Ok(catalog_page(1, 1)));
    let mut state = BrowseState::new(6);
    state.reload(&api).await;
    state.set_page(3);
    assert!(state.toggle_genre("Sejarah"));
    state.reload(&api).await;

    let Some(ApiCall::SearchCatalogs(query)) = api.last_call() else {
        panic!("expected search call");
    };
    assert_eq!(query.page, 1);
    assert_eq!(query.genre.as_deref(), Some("Sejarah"));
}

#[tokio::test]
async fn wishlist_add_posts_and_updates_session() {
    let api = RecordingApi::new();
    let (mut session, persistence) = signed_in(&[]);

    let action = toggle_wishlist(&api, &mut session, &catalog(7))
        .await
        .expect("toggle");

    assert_eq!(action, WishlistAction::Add);
    assert_eq!(
        api.calls(),
        vec![ApiCall::AddToWishlist {
            token: READER_TOKEN.to_string(),
            id: 7
        }]
    );
    assert!(session.user().is_some_and(|user| user.has_wishlisted(7)));
    assert!(
        persistence
            .stored()
            .user
            .is_some_and(|user| user.has_wishlisted(7))
    );
}

#[tokio::test]
async fn wishlist_remove_deletes_when_present() {
    let api = RecordingApi::new();
    let (mut session, _) = signed_in(&[7, 8]);

    let action = toggle_wishlist(&api, &mut session, &catalog(7))
        .await
        .expect("toggle");

    assert_eq!(action, WishlistAction::Remove);
    assert!(matches!(
        api.last_call(),
        Some(ApiCall::RemoveFromWishlist { id: 7, .. })
    ));
    let remaining: Vec<u64> = session
        .user()
        .map(|user| user.wishlists.iter().map(|item| item.id).collect())
        .unwrap_or_default();
    assert_eq!(remaining, vec![8]);
}

#[tokio::test]
async fn wishlist_failure_leaves_membership_unchanged() {
    let api = RecordingApi::new();
    api.push_wishlist(Err(ClientError::Transport {
        operation: "wishlist",
        detail: "offline".to_string(),
    }));
    let (mut session, _) = signed_in(&[]);

    let result = toggle_wishlist(&api, &mut session, &catalog(3)).await;

    assert!(result.is_err());
    assert!(session.user().is_some_and(|user| !user.has_wishlisted(3)));
}

#[tokio::test]
async fn wishlist_without_session_sends_nothing() {
    let api = RecordingApi::new();
    let mut session = SessionStore::new(MemoryPersistence::default());

    let result = toggle_wishlist(&api, &mut session, &catalog(3)).await;

    assert_eq!(result, Err(ClientError::Unauthenticated));
    assert_eq!(api.call_count(), 0);
}

#[tokio::test]
async fn admin_delete_waits_for_confirmation() {
    let api = RecordingApi::new();
    api.push_list(Ok(catalogs(3))).push_list(Ok(catalogs(2)));
    let mut dashboard = AdminDashboard::new();
    dashboard.reload(&api).await;

    dashboard.request_delete(catalog(3));
    assert_eq!(api.calls(), vec![ApiCall::ListCatalogs]);

    let deleted = dashboard
        .confirm_delete(&api, ADMIN_TOKEN)
        .await
        .expect("delete");

    assert_eq!(deleted, Some(3));
    assert_eq!(
        api.calls(),
        vec![
            ApiCall::ListCatalogs,
            ApiCall::DeleteCatalog {
                token: ADMIN_TOKEN.to_string(),
                id: 3
            },
            ApiCall::ListCatalogs,
        ]
    );
    assert_eq!(dashboard.catalogs().len(), 2);
    assert_eq!(dashboard.modal(), &AdminModal::Closed);
}

#[tokio::test]
async fn admin_cancelled_delete_sends_nothing() {
    let api = RecordingApi::new();
    let mut dashboard = AdminDashboard::new();
    dashboard.request_delete(catalog(1));
    dashboard.close_modal();

    let deleted = dashboard
        .confirm_delete(&api, ADMIN_TOKEN)
        .await
        .expect("no-op");

    assert_eq!(deleted, None);
    assert_eq!(api.call_count(), 0);
}

#[tokio::test]
async fn admin_create_closes_modal_and_reloads() {
    let api = RecordingApi::new();
    api.push_list(Ok(catalogs(4)));
    let mut dashboard = AdminDashboard::new();
    dashboard.open_create();

    let outcome = dashboard
        .submit(&api, ADMIN_TOKEN, &draft("Laskar Pelangi"))
        .await;

    assert_eq!(outcome, ApiOutcome::Ok(()));
    assert_eq!(dashboard.modal(), &AdminModal::Closed);
    assert_eq!(dashboard.catalogs().len(), 4);
    let calls = api.calls();
    assert!(matches!(
        &calls[0],
        ApiCall::CreateCatalog { form, .. } if form.title == "Laskar Pelangi" && form.year == 2005
    ));
    assert_eq!(calls[1], ApiCall::ListCatalogs);
}

#[tokio::test]
async fn admin_update_failure_shows_server_message() {
    let api = RecordingApi::new();
    api.push_write(Err(ClientError::Status {
        operation: "update_catalog",
        status: 422,
        message: Some("Judul sudah terdaftar".to_string()),
    }));
    let mut dashboard = AdminDashboard::new();
    dashboard.open_edit(catalog(2));

    let outcome = dashboard.submit(&api, ADMIN_TOKEN, &draft("Buku 2")).await;

    assert_eq!(outcome.message(), Some("Judul sudah terdaftar"));
    assert_eq!(dashboard.form_error(), Some("Judul sudah terdaftar"));
    assert!(matches!(dashboard.modal(), AdminModal::Edit(entry) if entry.id == 2));
    assert!(matches!(
        api.last_call(),
        Some(ApiCall::UpdateCatalog { id: 2, .. })
    ));
}

#[tokio::test]
async fn admin_failure_without_message_uses_fallback() {
    let api = RecordingApi::new();
    api.push_write(Err(ClientError::Status {
        operation: "create_catalog",
        status: 500,
        message: None,
    }));
    let mut dashboard = AdminDashboard::new();
    dashboard.open_create();

    let outcome = dashboard.submit(&api, ADMIN_TOKEN, &draft("Baru")).await;

    assert_eq!(
        outcome.message(),
        Some("Terjadi kesalahan saat menambahkan katalog.")
    );
}

#[tokio::test]
async fn invalid_draft_never_reaches_backend() {
    let api = RecordingApi::new();
    let mut dashboard = AdminDashboard::new();
    dashboard.open_create();
    let mut bad = draft("Judul");
    bad.year = "dua ribu".to_string();

    let outcome = dashboard.submit(&api, ADMIN_TOKEN, &bad).await;

    assert_eq!(outcome.message(), Some("Tahun terbit harus berupa angka."));
    assert_eq!(api.call_count(), 0);
}

#[tokio::test]
async fn sign_in_stores_session() {
    let api = RecordingApi::new();
    api.push_login(Ok(admin_login()));
    let persistence = MemoryPersistence::default();
    let mut session = SessionStore::new(persistence.clone());

    let user = sign_in(
        &api,
        &mut session,
        &LoginRequest {
            email: "admin@example.com".to_string(),
            password: "rahasia".to_string(),
        },
    )
    .await
    .expect("sign in");

    assert_eq!(user.role, UserRole::Admin);
    assert!(session.is_admin());
    assert_eq!(persistence.stored().token.as_deref(), Some(ADMIN_TOKEN));
}

#[tokio::test]
async fn sign_in_failure_keeps_session_empty() {
    let api = RecordingApi::new();
    api.push_login(Err(ClientError::Status {
        operation: "login",
        status: 401,
        message: Some("Email atau password salah".to_string()),
    }));
    let mut session = SessionStore::new(MemoryPersistence::default());

    let err = sign_in(
        &api,
        &mut session,
        &LoginRequest {
            email: "rina@example.com".to_string(),
            password: "salah".to_string(),
        },
    )
    .await
    .expect_err("rejected");

    assert_eq!(err.user_message("Login gagal."), "Email atau password salah");
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn sign_up_registers_then_logs_in() {
    let api = RecordingApi::new();
    api.push_login(Ok(reader_login(&[])));
    let mut session = SessionStore::new(MemoryPersistence::default());

    sign_up(
        &api,
        &mut session,
        &RegisterRequest {
            name: "Rina Pembaca".to_string(),
            email: "rina@example.com".to_string(),
            password: "rahasia".to_string(),
        },
    )
    .await
    .expect("sign up");

    assert_eq!(
        api.calls(),
        vec![
            ApiCall::Register {
                email: "rina@example.com".to_string()
            },
            ApiCall::Login {
                email: "rina@example.com".to_string()
            },
        ]
    );
    assert_eq!(session.token(), Some(READER_TOKEN));
}

#[tokio::test]
async fn refresh_replaces_user_and_failure_keeps_it() {
    let api = RecordingApi::new();
    let mut refreshed = reader(&[4]);
    refreshed.name = "Rina Baru".to_string();
    api.push_current_user(Ok(refreshed))
        .push_current_user(Err(ClientError::Status {
            operation: "current_user",
            status: 401,
            message: None,
        }));
    let (mut session, persistence) = signed_in(&[]);

    let first = session.refresh_user(&api).await;
    assert_eq!(first.map(|user| user.name), Some("Rina Baru".to_string()));
    assert!(
        persistence
            .stored()
            .user
            .is_some_and(|user| user.has_wishlisted(4))
    );

    assert!(session.refresh_user(&api).await.is_none());
    assert_eq!(session.user().map(|user| user.name.as_str()), Some("Rina Baru"));
    assert!(matches!(
        api.last_call(),
        Some(ApiCall::CurrentUser { token }) if token == READER_TOKEN
    ));
}

#[tokio::test]
async fn refresh_without_token_sends_nothing() {
    let api = RecordingApi::new();
    let mut session = SessionStore::restore(MemoryPersistence::with_snapshot(SessionSnapshot {
        token: None,
        user: Some(admin()),
    }));

    assert!(session.refresh_user(&api).await.is_none());
    assert_eq!(api.call_count(), 0);
}

#[test]
fn logout_clears_persisted_session() {
    let (mut session, persistence) = signed_in(&[1]);
    session.logout().expect("logout");
    assert_eq!(persistence.stored(), SessionSnapshot::default());
    assert!(session.user().is_none());
}
