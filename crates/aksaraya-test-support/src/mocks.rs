//! Scripted fake of the catalog API.
//!
//! [`RecordingApi`] records every call in order and answers from per-endpoint
//! queues. Reads with an empty queue fail with a transport error; writes with
//! an empty queue succeed.

use std::cell::RefCell;
use std::collections::VecDeque;

use aksaraya_api_models::{
    Catalog, CatalogId, CatalogPage, LoginRequest, LoginResponse, RegisterRequest, User,
};
use aksaraya_client::api::CatalogApi;
use aksaraya_client::form::CatalogForm;
use aksaraya_client::query::CatalogQuery;
use aksaraya_client::{ClientError, ClientResult};
use async_trait::async_trait;

/// One recorded call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    /// `POST /auth/login`.
    Login {
        /// Submitted e-mail.
        email: String,
    },
    /// `POST /auth/register`.
    Register {
        /// Submitted e-mail.
        email: String,
    },
    /// `GET /auth/me`.
    CurrentUser {
        /// Bearer token.
        token: String,
    },
    /// `GET /catalogs`.
    ListCatalogs,
    /// `GET /catalogs/search`.
    SearchCatalogs(CatalogQuery),
    /// `GET /catalogs/:id`.
    GetCatalog(CatalogId),
    /// `POST /catalogs`.
    CreateCatalog {
        /// Bearer token.
        token: String,
        /// Submitted form.
        form: CatalogForm,
    },
    /// `PUT /catalogs/:id`.
    UpdateCatalog {
        /// Bearer token.
        token: String,
        /// Target entry.
        id: CatalogId,
        /// Submitted form.
        form: CatalogForm,
    },
    /// `DELETE /catalogs/:id`.
    DeleteCatalog {
        /// Bearer token.
        token: String,
        /// Target entry.
        id: CatalogId,
    },
    /// `POST /wishlists/:id`.
    AddToWishlist {
        /// Bearer token.
        token: String,
        /// Target entry.
        id: CatalogId,
    },
    /// `DELETE /wishlists/:id`.
    RemoveFromWishlist {
        /// Bearer token.
        token: String,
        /// Target entry.
        id: CatalogId,
    },
}

type Queue<T> = RefCell<VecDeque<ClientResult<T>>>;

/// Fake [`CatalogApi`] with scripted responses.
#[derive(Debug, Default)]
pub struct RecordingApi {
    calls: RefCell<Vec<ApiCall>>,
    login: Queue<LoginResponse>,
    register: Queue<()>,
    current_user: Queue<User>,
    list: Queue<Vec<Catalog>>,
    search: Queue<CatalogPage>,
    detail: Queue<Catalog>,
    writes: Queue<()>,
    wishlist: Queue<()>,
}

fn unscripted<T>(operation: &'static str) -> ClientResult<T> {
    Err(ClientError::Transport {
        operation,
        detail: "no scripted response".to_string(),
    })
}

fn next_or<T>(queue: &Queue<T>, fallback: impl FnOnce() -> ClientResult<T>) -> ClientResult<T> {
    queue.borrow_mut().pop_front().unwrap_or_else(fallback)
}

impl RecordingApi {
    /// Fake with no scripted responses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a `login` response.
    pub fn push_login(&self, response: ClientResult<LoginResponse>) -> &Self {
        self.login.borrow_mut().push_back(response);
        self
    }

    /// Queue a `register` response.
    pub fn push_register(&self, response: ClientResult<()>) -> &Self {
        self.register.borrow_mut().push_back(response);
        self
    }

    /// Queue a `current_user` response.
    pub fn push_current_user(&self, response: ClientResult<User>) -> &Self {
        self.current_user.borrow_mut().push_back(response);
        self
    }

    /// Queue a `list_catalogs` response.
    pub fn push_list(&self, response: ClientResult<Vec<Catalog>>) -> &Self {
        self.list.borrow_mut().push_back(response);
        self
    }

    /// Queue a `search_catalogs` response.
    pub fn push_search(&self, response: ClientResult<CatalogPage>) -> &Self {
        self.search.borrow_mut().push_back(response);
        self
    }

    /// Queue a `get_catalog` response.
    pub fn push_detail(&self, response: ClientResult<Catalog>) -> &Self {
        self.detail.borrow_mut().push_back(response);
        self
    }

    /// Queue a response shared by create, update, and delete.
    pub fn push_write(&self, response: ClientResult<()>) -> &Self {
        self.writes.borrow_mut().push_back(response);
        self
    }

    /// Queue a wishlist add/remove response.
    pub fn push_wishlist(&self, response: ClientResult<()>) -> &Self {
        self.wishlist.borrow_mut().push_back(response);
        self
    }

    /// Every call so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.borrow().clone()
    }

    /// Number of calls so far.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    /// Most recent call.
    #[must_use]
    pub fn last_call(&self) -> Option<ApiCall> {
        self.calls.borrow().last().cloned()
    }

    fn record(&self, call: ApiCall) {
        self.calls.borrow_mut().push(call);
    }
}

#[async_trait(?Send)]
impl CatalogApi for RecordingApi {
    async fn login(&self, request: &LoginRequest) -> ClientResult<LoginResponse> {
        self.record(ApiCall::Login {
            email: request.email.clone(),
        });
        next_or(&self.login, || unscripted("login"))
    }

    async fn register(&self, request: &RegisterRequest) -> ClientResult<()> {
        self.record(ApiCall::Register {
            email: request.email.clone(),
        });
        next_or(&self.register, || Ok(()))
    }

    async fn current_user(&self, token: &str) -> ClientResult<User> {
        self.record(ApiCall::CurrentUser {
            token: token.to_string(),
        });
        next_or(&self.current_user, || unscripted("current_user"))
    }

    async fn list_catalogs(&self) -> ClientResult<Vec<Catalog>> {
        self.record(ApiCall::ListCatalogs);
        next_or(&self.list, || unscripted("list_catalogs"))
    }

    async fn search_catalogs(&self, query: &CatalogQuery) -> ClientResult<CatalogPage> {
        self.record(ApiCall::SearchCatalogs(query.clone()));
        next_or(&self.search, || unscripted("search_catalogs"))
    }

    async fn get_catalog(&self, id: CatalogId) -> ClientResult<Catalog> {
        self.record(ApiCall::GetCatalog(id));
        next_or(&self.detail, || unscripted("get_catalog"))
    }

    async fn create_catalog(&self, token: &str, form: &CatalogForm) -> ClientResult<()> {
        self.record(ApiCall::CreateCatalog {
            token: token.to_string(),
            form: form.clone(),
        });
        next_or(&self.writes, || Ok(()))
    }

    async fn update_catalog(
        &self,
        token: &str,
        id: CatalogId,
        form: &CatalogForm,
    ) -> ClientResult<()> {
        self.record(ApiCall::UpdateCatalog {
            token: token.to_string(),
            id,
            form: form.clone(),
        });
        next_or(&self.writes, || Ok(()))
    }

    async fn delete_catalog(&self, token: &str, id: CatalogId) -> ClientResult<()> {
        self.record(ApiCall::DeleteCatalog {
            token: token.to_string(),
            id,
        });
        next_or(&self.writes, || Ok(()))
    }

    async fn add_to_wishlist(&self, token: &str, id: CatalogId) -> ClientResult<()> {
        self.record(ApiCall::AddToWishlist {
            token: token.to_string(),
            id,
        });
        next_or(&self.wishlist, || Ok(()))
    }

    async fn remove_from_wishlist(&self, token: &str, id: CatalogId) -> ClientResult<()> {
        self.record(ApiCall::RemoveFromWishlist {
            token: token.to_string(),
            id,
        });
        next_or(&self.wishlist, || Ok(()))
    }
}
