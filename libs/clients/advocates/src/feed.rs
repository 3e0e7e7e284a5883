//! Server-paged result list with infinite-scroll bookkeeping.
//!
//! Fetching is split in two so the caller owns the I/O: `commit_term`,
//! `reset` and `begin_load_more` hand out a [`PageRequest`], and `complete`
//! folds the outcome back in. Each request carries the generation of the
//! search it belongs to, so results for a replaced term are discarded.
//!
//! Infinite scroll stays on while a term is committed: searched results page
//! the same way as the unfiltered list.

use crate::error::ClientError;
use crate::model::Advocate;

/// One page fetch issued by the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub term: String,
    pub page: u64,
    pub page_size: u64,
    generation: u64,
}

impl PageRequest {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// What `complete` did with a finished request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Appended { rows: usize, has_more: bool },
    /// Issued under a term that has since been replaced.
    Stale,
    Failed,
}

#[derive(Debug)]
pub struct AdvocateFeed {
    page_size: u64,
    term: String,
    generation: u64,
    pages_loaded: u64,
    items: Vec<Advocate>,
    has_more: bool,
    in_flight: Option<u64>,
    last_error: Option<String>,
}

impl AdvocateFeed {
    pub fn new(page_size: u64) -> Self {
        Self {
            page_size: page_size.max(1),
            term: String::new(),
            generation: 0,
            pages_loaded: 0,
            items: Vec::new(),
            has_more: false,
            in_flight: None,
            last_error: None,
        }
    }

    /// Start over from page 1 with `term`, dropping fetched rows.
    ///
    /// Returns `None` when the trimmed term equals the current one and the
    /// feed is already loaded or loading.
    pub fn commit_term(&mut self, term: &str) -> Option<PageRequest> {
        let term = term.trim();
        let started = self.pages_loaded > 0 || self.in_flight.is_some();
        if started && term == self.term {
            return None;
        }
        Some(self.restart(term.to_string()))
    }

    /// Unfiltered first page, always issued.
    pub fn reset(&mut self) -> PageRequest {
        self.restart(String::new())
    }

    fn restart(&mut self, term: String) -> PageRequest {
        self.generation += 1;
        self.term = term;
        self.pages_loaded = 0;
        self.items.clear();
        self.has_more = false;
        self.last_error = None;
        self.issue(1)
    }

    /// Next page for infinite scroll.
    ///
    /// Refused while a fetch is in flight or once a short page has been seen.
    pub fn begin_load_more(&mut self) -> Option<PageRequest> {
        if self.in_flight.is_some() || !self.has_more {
            return None;
        }
        Some(self.issue(self.pages_loaded + 1))
    }

    fn issue(&mut self, page: u64) -> PageRequest {
        self.in_flight = Some(page);
        PageRequest {
            term: self.term.clone(),
            page,
            page_size: self.page_size,
            generation: self.generation,
        }
    }

    pub fn complete(
        &mut self,
        request: &PageRequest,
        result: Result<Vec<Advocate>, ClientError>,
    ) -> Completion {
        if request.generation != self.generation || self.in_flight != Some(request.page) {
            tracing::debug!(
                term = %request.term,
                page = request.page,
                "Discarding stale page"
            );
            return Completion::Stale;
        }
        self.in_flight = None;

        match result {
            Ok(rows) => {
                let count = rows.len();
                self.has_more = count as u64 == request.page_size;
                self.pages_loaded = request.page;
                self.items.extend(rows);
                self.last_error = None;
                Completion::Appended {
                    rows: count,
                    has_more: self.has_more,
                }
            }
            Err(err) => {
                tracing::warn!(page = request.page, error = %err, "Failed to load advocates");
                self.last_error = Some(err.to_string());
                Completion::Failed
            }
        }
    }

    pub fn items(&self) -> &[Advocate] {
        &self.items
    }

    /// Committed term, empty when unfiltered
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    pub fn pages_loaded(&self) -> u64 {
        self.pages_loaded
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }

    /// First page pending with nothing to show yet
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some() && self.items.is_empty()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
