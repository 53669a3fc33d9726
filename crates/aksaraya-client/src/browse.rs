//! Browse view state machine.
//!
//! # Design
//! - The view state is `(keyword, genre, page)`; keyword or genre changes reset
//!   the page to 1, page changes keep the filters.
//! - Setters report whether a reload is needed; unchanged values never reload.
//! - Loads are ticketed: a response older than the newest issued ticket is dropped.
//! - Failures keep the previous results (stale-on-error) and are only logged.

use aksaraya_api_models::{Catalog, CatalogPage};

use crate::api::CatalogApi;
use crate::error::ClientResult;
use crate::pagination::PageControl;
use crate::query::{CatalogQuery, DEFAULT_PAGE_LIMIT, fetch_page};

/// Genres shown before the sidebar is expanded.
pub const COLLAPSED_GENRE_COUNT: usize = 6;

/// Rendering phase of the browse grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    /// A request is in flight; render skeletons.
    Loading,
    /// The last completed load had no results.
    Empty,
    /// Results are available.
    Populated,
}

/// Identifies one issued load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u64);

/// What happened to a completed load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadApplied {
    /// Results replaced the grid.
    Applied,
    /// A newer load was issued meanwhile; this response was discarded.
    Stale,
    /// The request failed; previous results were kept.
    Failed,
}

/// What the browse grid should render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseView<'a> {
    /// Loading skeleton.
    Skeleton,
    /// "No results" message.
    Empty,
    /// Card grid plus page control.
    Grid {
        /// One card per entry.
        cards: &'a [Catalog],
        /// Pager state.
        pagination: PageControl,
    },
}

/// Search, filter, and paging state owned by the browse view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseState {
    keyword: String,
    genre: Option<String>,
    page: u32,
    limit: u32,
    last_page: u32,
    results: Vec<Catalog>,
    phase: LoadPhase,
    loaded: bool,
    issued: u64,
}

impl Default for BrowseState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_LIMIT)
    }
}

impl BrowseState {
    /// Fresh state on page 1 with no filters, waiting for its first load.
    #[must_use]
    pub fn new(limit: u32) -> Self {
        Self {
            keyword: String::new(),
            genre: None,
            page: 1,
            limit: limit.max(1),
            last_page: 1,
            results: Vec::new(),
            phase: LoadPhase::Loading,
            loaded: false,
            issued: 0,
        }
    }

    /// Current keyword.
    #[must_use]
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Current genre filter.
    #[must_use]
    pub fn genre(&self) -> Option<&str> {
        self.genre.as_deref()
    }

    /// Current page.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Last page reported by the backend.
    #[must_use]
    pub const fn last_page(&self) -> u32 {
        self.last_page
    }

    /// Current rendering phase.
    #[must_use]
    pub const fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// Entries from the last applied load.
    #[must_use]
    pub fn results(&self) -> &[Catalog] {
        &self.results
    }

    /// Change the keyword. Resets to page 1; returns whether to reload.
    pub fn set_keyword(&mut self, keyword: &str) -> bool {
        let next = keyword.trim();
        if next == self.keyword {
            return false;
        }
        self.keyword = next.to_string();
        self.page = 1;
        true
    }

    /// Change the genre filter (`None` shows every genre). Resets to page 1.
    pub fn set_genre(&mut self, genre: Option<&str>) -> bool {
        let next = genre
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string);
        if next == self.genre {
            return false;
        }
        self.genre = next;
        self.page = 1;
        true
    }

    /// Sidebar click: select `genre`, or clear it when it is already selected.
    pub fn toggle_genre(&mut self, genre: &str) -> bool {
        if self.genre.as_deref() == Some(genre.trim()) {
            self.set_genre(None)
        } else {
            self.set_genre(Some(genre))
        }
    }

    /// Move to `page`, keeping filters. Clamped to known bounds once loaded.
    pub fn set_page(&mut self, page: u32) -> bool {
        let mut next = page.max(1);
        if self.loaded {
            next = next.min(self.last_page);
        }
        if next == self.page {
            return false;
        }
        self.page = next;
        true
    }

    /// Request parameters derived from the current state.
    #[must_use]
    pub fn query(&self) -> CatalogQuery {
        let mut query = CatalogQuery::page(self.page, self.limit).with_keyword(&self.keyword);
        if let Some(genre) = &self.genre {
            query = query.with_genre(genre);
        }
        query
    }

    /// Issue a new load: enter [`LoadPhase::Loading`] and hand out its ticket.
    pub fn begin_load(&mut self) -> (LoadTicket, CatalogQuery) {
        self.issued += 1;
        self.phase = LoadPhase::Loading;
        (LoadTicket(self.issued), self.query())
    }

    /// Apply the outcome of the load identified by `ticket`.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: ClientResult<CatalogPage>,
    ) -> LoadApplied {
        if ticket.0 < self.issued {
            tracing::debug!(ticket = ticket.0, latest = self.issued, "stale catalog page dropped");
            return LoadApplied::Stale;
        }
        match result {
            Ok(page) => {
                self.results = page.data;
                self.last_page = page.last_page.max(1);
                self.loaded = true;
                self.phase = self.settled_phase();
                LoadApplied::Applied
            }
            Err(err) => {
                tracing::error!(error = %err, "catalog page load failed");
                self.phase = self.settled_phase();
                LoadApplied::Failed
            }
        }
    }

    /// Begin a load, fetch it through `api`, and apply the response.
    pub async fn reload<A>(&mut self, api: &A) -> LoadApplied
    where
        A: CatalogApi + ?Sized,
    {
        let (ticket, query) = self.begin_load();
        let result = fetch_page(api, &query).await;
        self.finish_load(ticket, result)
    }

    /// Pager state for the current page.
    #[must_use]
    pub fn page_control(&self) -> PageControl {
        PageControl::new(self.page, self.last_page)
    }

    /// What to render right now.
    #[must_use]
    pub fn view(&self) -> BrowseView<'_> {
        match self.phase {
            LoadPhase::Loading => BrowseView::Skeleton,
            LoadPhase::Empty => BrowseView::Empty,
            LoadPhase::Populated => BrowseView::Grid {
                cards: &self.results,
                pagination: self.page_control(),
            },
        }
    }

    fn settled_phase(&self) -> LoadPhase {
        if self.results.is_empty() {
            LoadPhase::Empty
        } else {
            LoadPhase::Populated
        }
    }
}

/// Genres to list in the sidebar: the first few while collapsed, all when expanded.
#[must_use]
pub fn visible_genres<'a>(genres: &'a [&'a str], show_all: bool) -> &'a [&'a str] {
    if show_all || genres.len() <= COLLAPSED_GENRE_COUNT {
        genres
    } else {
        &genres[..COLLAPSED_GENRE_COUNT]
    }
}
