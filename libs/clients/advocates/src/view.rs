//! View state for the advocate search grid.
//!
//! Combines the debounced search input, the server-paged [`AdvocateFeed`],
//! local [`Filters`] and per-card "show all specialties" toggles. It does no
//! I/O of its own: operations that need data return a [`PageRequest`] for
//! the caller to run, e.g. with [`AdvocateGridView::fetch`].

use std::collections::HashSet;
use std::time::Duration;
use tokio::time::Instant;

use crate::client::AdvocateSource;
use crate::debounce::{Debouncer, SEARCH_DEBOUNCE};
use crate::feed::{AdvocateFeed, Completion, PageRequest};
use crate::filter::{FilterOptions, Filters, YearsBucket};
use crate::highlight;
use crate::model::Advocate;

pub const EMPTY_MESSAGE: &str = "No advocates found matching your criteria.";

/// One rendered advocate card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView<'a> {
    pub advocate: &'a Advocate,
    /// Specialties to display, each flagged when it matches the term
    pub specialties: Vec<(&'a str, bool)>,
    /// True when a term is committed, so the relevant/all toggle applies
    pub can_toggle: bool,
    pub show_all: bool,
}

impl<'a> CardView<'a> {
    pub fn new(advocate: &'a Advocate, term: &str, show_all: bool) -> Self {
        let specialties = highlight::visible_specialties(&advocate.specialties, term, show_all)
            .into_iter()
            .map(|s| (s, highlight::is_match(s, term)))
            .collect();
        Self {
            advocate,
            specialties,
            can_toggle: !term.is_empty(),
            show_all,
        }
    }
}

#[derive(Debug)]
pub struct AdvocateGridView {
    input: String,
    debouncer: Debouncer<String>,
    feed: AdvocateFeed,
    filters: Filters,
    expanded: HashSet<i32>,
}

impl AdvocateGridView {
    pub fn new(page_size: u64) -> Self {
        Self::with_debounce(page_size, SEARCH_DEBOUNCE)
    }

    pub fn with_debounce(page_size: u64, delay: Duration) -> Self {
        Self {
            input: String::new(),
            debouncer: Debouncer::new(delay),
            feed: AdvocateFeed::new(page_size),
            filters: Filters::default(),
            expanded: HashSet::new(),
        }
    }

    /// Request for the initial unfiltered first page.
    pub fn start(&mut self) -> PageRequest {
        self.feed.reset()
    }

    /// Record raw input. The term is committed once input has been idle
    /// for the debounce delay.
    pub fn type_text(&mut self, text: impl Into<String>) {
        self.input = text.into();
        self.debouncer.push(self.input.trim().to_string());
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn debounce_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// Commit the settled term, if any, and return the page-1 request for it.
    pub fn poll_debounce(&mut self, now: Instant) -> Option<PageRequest> {
        let term = self.debouncer.poll_ready(now)?;
        let request = self.feed.commit_term(&term)?;
        self.expanded.clear();
        tracing::debug!(term = %request.term, "Committed search term");
        Some(request)
    }

    /// Clear the input and return to the initial unfiltered first page
    /// without waiting for the debounce.
    pub fn reset(&mut self) -> PageRequest {
        self.input.clear();
        self.debouncer.cancel();
        self.expanded.clear();
        self.feed.reset()
    }

    /// Next page for infinite scroll, refused while a fetch is pending.
    pub fn load_more(&mut self) -> Option<PageRequest> {
        self.feed.begin_load_more()
    }

    pub fn complete(
        &mut self,
        request: &PageRequest,
        result: Result<Vec<Advocate>, crate::ClientError>,
    ) -> Completion {
        self.feed.complete(request, result)
    }

    /// Run `request` against `source` and fold in the result.
    pub async fn fetch<S: AdvocateSource + ?Sized>(
        &mut self,
        source: &S,
        request: PageRequest,
    ) -> Completion {
        let result = source
            .fetch_page(&request.term, request.page, request.page_size)
            .await;
        self.complete(&request, result)
    }

    pub fn set_city(&mut self, city: Option<String>) {
        self.filters.city = city;
    }

    pub fn set_degree(&mut self, degree: Option<String>) {
        self.filters.degree = degree;
    }

    pub fn set_years(&mut self, years: Option<YearsBucket>) {
        self.filters.years = years;
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions::from_advocates(self.feed.items())
    }

    /// Toggle "show all specialties" on one card. Returns the new state.
    pub fn toggle_show_all(&mut self, advocate_id: i32) -> bool {
        if self.expanded.remove(&advocate_id) {
            false
        } else {
            self.expanded.insert(advocate_id);
            true
        }
    }

    /// Fetched advocates passing the local filters.
    pub fn displayed(&self) -> Vec<&Advocate> {
        self.filters.apply(self.feed.items())
    }

    pub fn cards(&self) -> Vec<CardView<'_>> {
        let term = self.feed.term();
        self.displayed()
            .into_iter()
            .map(|advocate| CardView::new(advocate, term, self.expanded.contains(&advocate.id)))
            .collect()
    }

    pub fn committed_term(&self) -> &str {
        self.feed.term()
    }

    pub fn fetched(&self) -> &[Advocate] {
        self.feed.items()
    }

    pub fn has_more(&self) -> bool {
        self.feed.has_more()
    }

    pub fn is_loading(&self) -> bool {
        self.feed.is_loading()
    }

    pub fn is_fetching(&self) -> bool {
        self.feed.is_fetching()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.feed.last_error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ClientError, ClientResult};
    use async_trait::async_trait;
    use std::sync::Mutex;
    use tokio::time::advance;

    /// Serves a fixed list with the server's matching and paging rules and
    /// records every call.
    struct FakeSource {
        rows: Vec<Advocate>,
        calls: Mutex<Vec<(String, u64, u64)>>,
    }

    impl FakeSource {
        fn new(count: i32) -> Self {
            let cities = ["Austin", "Dallas", "Houston"];
            let rows = (1..=count)
                .map(|id| Advocate {
                    id,
                    first_name: format!("First{id}"),
                    last_name: "Last".into(),
                    city: cities[id as usize % 3].into(),
                    degree: if id % 2 == 0 { "MD" } else { "PhD" }.into(),
                    years_of_experience: id,
                    phone_number: 5550000000 + id as i64,
                    specialties: vec!["Men's issues".into(), format!("Tag{id}")],
                    created_at: None,
                })
                .collect();
            Self {
                rows,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<(String, u64, u64)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl AdvocateSource for FakeSource {
        async fn fetch_page(
            &self,
            term: &str,
            page: u64,
            page_size: u64,
        ) -> ClientResult<Vec<Advocate>> {
            self.calls
                .lock()
                .unwrap()
                .push((term.to_string(), page, page_size));
            let needle = term.to_lowercase();
            Ok(self
                .rows
                .iter()
                .filter(|a| {
                    needle.is_empty()
                        || a.city.to_lowercase().contains(&needle)
                        || a.specialties
                            .iter()
                            .any(|s| s.to_lowercase().contains(&needle))
                })
                .skip(((page - 1) * page_size) as usize)
                .take(page_size as usize)
                .cloned()
                .collect())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_initial_view_loads_first_page() {
        let source = FakeSource::new(12);
        let mut view = AdvocateGridView::new(5);

        let request = view.start();
        assert!(view.is_loading());
        view.fetch(&source, request).await;

        assert_eq!(view.displayed().len(), 5);
        assert!(view.has_more());
        assert!(!view.is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn test_typing_commits_after_idle_delay() {
        let source = FakeSource::new(12);
        let mut view = AdvocateGridView::new(5);
        let request = view.start();
        view.fetch(&source, request).await;

        view.type_text("aus");
        advance(Duration::from_millis(200)).await;
        view.type_text("austin ");
        advance(Duration::from_millis(499)).await;
        assert_eq!(view.poll_debounce(Instant::now()), None);

        advance(Duration::from_millis(1)).await;
        let request = view.poll_debounce(Instant::now()).unwrap();
        assert_eq!(request.term, "austin");
        assert_eq!(request.page, 1);

        view.fetch(&source, request).await;
        assert!(view.displayed().iter().all(|a| a.city == "Austin"));
        assert_eq!(source.calls().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_scroll_stops_on_short_page() {
        let source = FakeSource::new(12);
        let mut view = AdvocateGridView::new(5);
        let request = view.start();
        view.fetch(&source, request).await;

        while let Some(request) = view.load_more() {
            view.fetch(&source, request).await;
        }

        assert_eq!(view.fetched().len(), 12);
        assert!(!view.has_more());
        let pages: Vec<u64> = source.calls().iter().map(|c| c.1).collect();
        assert_eq!(pages, vec![1, 2, 3]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_restores_initial_view() {
        let source = FakeSource::new(12);
        let mut view = AdvocateGridView::new(5);
        let request = view.start();
        view.fetch(&source, request).await;

        view.type_text("dallas");
        advance(SEARCH_DEBOUNCE).await;
        let request = view.poll_debounce(Instant::now()).unwrap();
        view.fetch(&source, request).await;

        let request = view.reset();
        assert_eq!(view.input(), "");
        assert_eq!(view.debounce_deadline(), None);
        view.fetch(&source, request).await;

        let ids: Vec<i32> = view.displayed().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(view.committed_term(), "");
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_response_is_dropped() {
        let source = FakeSource::new(12);
        let mut view = AdvocateGridView::new(5);

        view.type_text("austin");
        advance(SEARCH_DEBOUNCE).await;
        let stale = view.poll_debounce(Instant::now()).unwrap();

        view.type_text("houston");
        advance(SEARCH_DEBOUNCE).await;
        let fresh = view.poll_debounce(Instant::now()).unwrap();

        assert_eq!(view.fetch(&source, stale).await, Completion::Stale);
        view.fetch(&source, fresh).await;
        assert!(view.displayed().iter().all(|a| a.city == "Houston"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_filters_apply_without_requery() {
        let source = FakeSource::new(12);
        let mut view = AdvocateGridView::new(20);
        let request = view.start();
        view.fetch(&source, request).await;

        view.set_degree(Some("MD".into()));
        view.set_years(Some(YearsBucket::SixToTen));
        let ids: Vec<i32> = view.displayed().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![6, 8, 10]);

        view.clear_filters();
        assert_eq!(view.displayed().len(), 12);
        assert_eq!(source.calls().len(), 1);

        let options = view.filter_options();
        assert_eq!(options.cities, vec!["Austin", "Dallas", "Houston"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cards_highlight_matching_specialties() {
        let source = FakeSource::new(3);
        let mut view = AdvocateGridView::new(5);

        view.type_text("men");
        advance(SEARCH_DEBOUNCE).await;
        let request = view.poll_debounce(Instant::now()).unwrap();
        view.fetch(&source, request).await;

        let cards = view.cards();
        assert_eq!(cards[0].specialties, vec![("Men's issues", true)]);
        assert!(cards[0].can_toggle);

        let id = cards[0].advocate.id;
        assert!(view.toggle_show_all(id));
        let cards = view.cards();
        assert_eq!(cards[0].specialties.len(), 2);
        assert!(cards[0].show_all);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_fetch_is_reported() {
        struct Down;

        #[async_trait]
        impl AdvocateSource for Down {
            async fn fetch_page(&self, _: &str, _: u64, _: u64) -> ClientResult<Vec<Advocate>> {
                Err(ClientError::Status {
                    status: 500,
                    body: "Database connection unavailable".into(),
                })
            }
        }

        let mut view = AdvocateGridView::new(5);
        let request = view.start();
        assert_eq!(view.fetch(&Down, request).await, Completion::Failed);
        assert!(view.last_error().unwrap().contains("500"));
        assert!(view.displayed().is_empty());
    }
}
