//! Admin dashboard state and catalog CRUD flows.
//!
//! # Design
//! - One modal at a time: create form, edit form, or delete confirmation.
//! - Delete is two-step; nothing reaches the backend until confirmation.
//! - Successful writes close the modal and reload the full list; failed writes
//!   keep the modal open with an inline message.
//! - No optimistic updates: the list always reflects the last successful reload.
//! - Writes are split into `plan_*` (synchronous), the request, and `apply_*`
//!   (synchronous) so callers holding the dashboard in a `RefCell` never keep a
//!   borrow across an await.

use aksaraya_api_models::{Catalog, CatalogId};

use crate::api::CatalogApi;
use crate::error::{ClientError, ClientResult};
use crate::form::{CatalogDraft, CatalogForm};
use crate::outcome::{ApiOutcome, FallbackMessage};

/// Words kept when the synopsis column is truncated.
pub const SYNOPSIS_WORD_LIMIT: usize = 25;

/// Modal currently shown over the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AdminModal {
    /// No modal.
    #[default]
    Closed,
    /// "New book" form.
    Create,
    /// Edit form for an existing entry.
    Edit(Catalog),
    /// Delete confirmation for an entry.
    ConfirmDelete(Catalog),
}

/// Where a validated form is submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitTarget {
    /// `POST /catalogs`.
    Create,
    /// `PUT /catalogs/:id`.
    Update(CatalogId),
}

impl SubmitTarget {
    /// Fallback message for failures of this target.
    #[must_use]
    pub const fn fallback(self) -> FallbackMessage {
        match self {
            Self::Create => FallbackMessage::CreateCatalog,
            Self::Update(_) => FallbackMessage::UpdateCatalog,
        }
    }

    /// Send `form` to this target.
    ///
    /// # Errors
    ///
    /// Propagates the transport error.
    pub async fn send<A>(self, api: &A, token: &str, form: &CatalogForm) -> ClientResult<()>
    where
        A: CatalogApi + ?Sized,
    {
        match self {
            Self::Create => api.create_catalog(token, form).await,
            Self::Update(id) => api.update_catalog(token, id, form).await,
        }
    }
}

/// A validated submission ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitPlan {
    /// Endpoint to send to.
    pub target: SubmitTarget,
    /// Validated fields and cover.
    pub form: CatalogForm,
    /// Bearer token for the request.
    pub token: String,
}

impl SubmitPlan {
    /// Send the planned submission through `api`.
    ///
    /// # Errors
    ///
    /// Propagates the transport error.
    pub async fn send<A>(&self, api: &A) -> ClientResult<()>
    where
        A: CatalogApi + ?Sized,
    {
        self.target.send(api, &self.token, &self.form).await
    }
}

/// Full-list dashboard state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdminDashboard {
    catalogs: Vec<Catalog>,
    search: String,
    modal: AdminModal,
    loading: bool,
    reload_failed: bool,
    form_error: Option<String>,
}

impl AdminDashboard {
    /// Empty dashboard, not yet loaded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every loaded entry.
    #[must_use]
    pub fn catalogs(&self) -> &[Catalog] {
        &self.catalogs
    }

    /// Current search text.
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Current modal.
    #[must_use]
    pub const fn modal(&self) -> &AdminModal {
        &self.modal
    }

    /// Whether a reload is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether the last reload failed, leaving an outdated list.
    #[must_use]
    pub const fn reload_failed(&self) -> bool {
        self.reload_failed
    }

    /// Inline error of the open form.
    #[must_use]
    pub fn form_error(&self) -> Option<&str> {
        self.form_error.as_deref()
    }

    /// Update the local search filter.
    pub fn set_search(&mut self, search: &str) {
        self.search = search.to_string();
    }

    /// Entries whose title or author contains the search text (case-insensitive).
    #[must_use]
    pub fn filtered(&self) -> Vec<&Catalog> {
        let needle = self.search.trim().to_lowercase();
        self.catalogs
            .iter()
            .filter(|catalog| {
                needle.is_empty()
                    || catalog.title.to_lowercase().contains(&needle)
                    || catalog.author.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Show the "new book" form.
    pub fn open_create(&mut self) {
        self.form_error = None;
        self.modal = AdminModal::Create;
    }

    /// Show the edit form for `catalog`.
    pub fn open_edit(&mut self, catalog: Catalog) {
        self.form_error = None;
        self.modal = AdminModal::Edit(catalog);
    }

    /// Ask for confirmation before deleting `catalog`.
    pub fn request_delete(&mut self, catalog: Catalog) {
        self.modal = AdminModal::ConfirmDelete(catalog);
    }

    /// Close whatever modal is open.
    pub fn close_modal(&mut self) {
        self.form_error = None;
        self.modal = AdminModal::Closed;
    }

    /// Entry awaiting delete confirmation.
    #[must_use]
    pub const fn pending_delete(&self) -> Option<&Catalog> {
        match &self.modal {
            AdminModal::ConfirmDelete(catalog) => Some(catalog),
            _ => None,
        }
    }

    /// Draft to prefill the open form with.
    #[must_use]
    pub fn form_draft(&self) -> Option<CatalogDraft> {
        match &self.modal {
            AdminModal::Create => Some(CatalogDraft::default()),
            AdminModal::Edit(catalog) => Some(CatalogDraft::from_catalog(catalog)),
            _ => None,
        }
    }

    /// Target of the open form.
    #[must_use]
    pub const fn submit_target(&self) -> Option<SubmitTarget> {
        match &self.modal {
            AdminModal::Create => Some(SubmitTarget::Create),
            AdminModal::Edit(catalog) => Some(SubmitTarget::Update(catalog.id)),
            _ => None,
        }
    }

    /// Mark a reload as started.
    pub const fn begin_reload(&mut self) {
        self.loading = true;
    }

    /// Apply a full-list response; failures keep the previous list.
    pub fn finish_reload(&mut self, result: ClientResult<Vec<Catalog>>) {
        self.loading = false;
        match result {
            Ok(catalogs) => {
                self.catalogs = catalogs;
                self.reload_failed = false;
            }
            Err(err) => {
                tracing::error!(error = %err, "catalog list load failed");
                self.reload_failed = true;
            }
        }
    }

    /// Fetch the full list through `api`.
    pub async fn reload<A>(&mut self, api: &A)
    where
        A: CatalogApi + ?Sized,
    {
        self.begin_reload();
        let result = api.list_catalogs().await;
        self.finish_reload(result);
    }

    /// Record the outcome of a form submission.
    ///
    /// Returns `true` when the modal closed and the list should reload.
    pub fn finish_submit(&mut self, outcome: ApiOutcome<()>) -> bool {
        match outcome {
            ApiOutcome::Ok(()) => {
                self.close_modal();
                true
            }
            ApiOutcome::Failed { message } => {
                self.form_error = Some(message);
                false
            }
        }
    }

    /// Check the open form's `draft` and pick its endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Validation`] when no form is open or the draft is
    /// invalid, and [`ClientError::Unauthenticated`] without a token.
    pub fn plan_submit(&self, token: Option<&str>, draft: &CatalogDraft) -> ClientResult<SubmitPlan> {
        let target = self.submit_target().ok_or(ClientError::Validation {
            field: "form",
            reason: "Tidak ada formulir yang terbuka.",
        })?;
        let token = token.ok_or(ClientError::Unauthenticated)?.to_string();
        let form = draft.validate()?;
        Ok(SubmitPlan {
            target,
            form,
            token,
        })
    }

    /// Record a submission result, showing `fallback` when the failure has no message.
    ///
    /// Returns `true` when the modal closed and the list should reload.
    pub fn apply_submit(&mut self, result: ClientResult<()>, fallback: &str) -> bool {
        if let Err(err) = &result {
            tracing::error!(error = %err, "catalog submission failed");
        }
        self.finish_submit(ApiOutcome::from_result(result, fallback))
    }

    /// Validate `draft`, submit it to the open form's target, then reload on success.
    pub async fn submit<A>(&mut self, api: &A, token: &str, draft: &CatalogDraft) -> ApiOutcome<()>
    where
        A: CatalogApi + ?Sized,
    {
        let fallback = self
            .submit_target()
            .map_or(FallbackMessage::Unknown, SubmitTarget::fallback)
            .default_text();
        let result = match self.plan_submit(Some(token), draft) {
            Ok(plan) => plan.send(api).await,
            Err(err) => Err(err),
        };
        let outcome = match &result {
            Ok(()) => ApiOutcome::Ok(()),
            Err(err) => ApiOutcome::Failed {
                message: err.user_message(fallback),
            },
        };
        if self.apply_submit(result, fallback) {
            self.reload(api).await;
        }
        outcome
    }

    /// Accept the pending delete: close the confirmation and return the id to delete.
    ///
    /// Returns `None`, sending nothing, when no delete awaits confirmation.
    pub fn plan_delete(&mut self) -> Option<CatalogId> {
        let id = self.pending_delete().map(|catalog| catalog.id)?;
        self.close_modal();
        Some(id)
    }

    /// Record the result of deleting `id`; on `Ok` the list should reload.
    ///
    /// # Errors
    ///
    /// Returns the transport error of the `DELETE` request.
    pub fn apply_delete(&self, id: CatalogId, result: ClientResult<()>) -> ClientResult<()> {
        if let Err(err) = &result {
            tracing::error!(error = %err, catalog_id = id, "catalog delete failed");
        }
        result
    }

    /// Delete the entry awaiting confirmation, then reload.
    ///
    /// Without a pending confirmation nothing is sent and `Ok(None)` is returned.
    /// The confirmation closes whether or not the request succeeds.
    ///
    /// # Errors
    ///
    /// Propagates the transport error of the `DELETE` request.
    pub async fn confirm_delete<A>(&mut self, api: &A, token: &str) -> ClientResult<Option<CatalogId>>
    where
        A: CatalogApi + ?Sized,
    {
        let Some(id) = self.plan_delete() else {
            return Ok(None);
        };
        let result = api.delete_catalog(token, id).await;
        self.apply_delete(id, result)?;
        self.reload(api).await;
        Ok(Some(id))
    }
}

/// Keep the first `max_words` words of `text`, appending `...` when cut.
#[must_use]
pub fn truncate_synopsis(text: &str, max_words: usize) -> String {
    let words: Vec<&str> = text.split(' ').collect();
    if words.len() > max_words {
        format!("{}...", words[..max_words].join(" "))
    } else {
        text.to_string()
    }
}

/// Ensure a delete is only attempted with an explicit confirmation flag.
///
/// # Errors
///
/// Returns [`ClientError::Validation`] when `confirmed` is false.
pub const fn require_confirmation(confirmed: bool) -> ClientResult<()> {
    if confirmed {
        Ok(())
    } else {
        Err(ClientError::Validation {
            field: "confirm",
            reason: "Penghapusan katalog harus dikonfirmasi.",
        })
    }
}
