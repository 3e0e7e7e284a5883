use observability::SearchMetrics;
use std::sync::Arc;
use std::time::Instant;
use validator::Validate;

use crate::error::AdvocateResult;
use crate::models::{AdvocatePage, NewAdvocate, SearchQuery, SeedResult};
use crate::repository::AdvocateRepository;
use crate::seed::sample_advocates;

/// Service layer for the advocate directory
#[derive(Clone)]
pub struct AdvocateService<R: AdvocateRepository> {
    repository: Arc<R>,
}

impl<R: AdvocateRepository> AdvocateService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// One page of advocates, optionally filtered by a free-text term
    pub async fn search(&self, query: SearchQuery) -> AdvocateResult<AdvocatePage> {
        let started = Instant::now();
        let data = self.repository.search(&query).await?;

        SearchMetrics::record_search(query.term().is_some(), data.len(), started.elapsed());
        tracing::debug!(
            term = query.term(),
            page = query.page(),
            page_size = query.page_size(),
            results = data.len(),
            "Searched advocates"
        );

        Ok(AdvocatePage { data })
    }

    /// Insert the fixed sample rows. Already present rows are skipped.
    pub async fn seed(&self) -> AdvocateResult<SeedResult> {
        self.seed_with(sample_advocates()).await
    }

    pub async fn seed_with(&self, rows: Vec<NewAdvocate>) -> AdvocateResult<SeedResult> {
        for row in &rows {
            row.validate()?;
        }

        let advocates = self.repository.insert_ignoring_conflicts(rows).await?;
        SearchMetrics::record_seed(advocates.len());

        let total = self.repository.count().await?;
        tracing::info!(inserted = advocates.len(), total, "Seeded advocates");

        Ok(SeedResult { advocates })
    }
}
