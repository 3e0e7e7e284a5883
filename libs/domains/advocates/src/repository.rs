use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::AdvocateResult;
use crate::models::{Advocate, NewAdvocate, SearchQuery};

/// Repository trait for advocate persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdvocateRepository: Send + Sync {
    /// One page of advocates matching the query, ordered by id
    async fn search(&self, query: &SearchQuery) -> AdvocateResult<Vec<Advocate>>;

    /// Insert rows, skipping any whose (first name, last name, phone) already
    /// exists. Returns only the rows actually inserted.
    async fn insert_ignoring_conflicts(
        &self,
        rows: Vec<NewAdvocate>,
    ) -> AdvocateResult<Vec<Advocate>>;

    /// Total number of stored advocates
    async fn count(&self) -> AdvocateResult<u64>;
}

#[derive(Debug, Default)]
struct Store {
    rows: Vec<Advocate>,
    next_id: i32,
}

/// In-memory implementation of AdvocateRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryAdvocateRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryAdvocateRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AdvocateRepository for InMemoryAdvocateRepository {
    async fn search(&self, query: &SearchQuery) -> AdvocateResult<Vec<Advocate>> {
        let store = self.store.read().await;

        // Rows are appended with increasing ids so insertion order is id order
        let page = store
            .rows
            .iter()
            .filter(|a| query.term().is_none_or(|term| a.matches(term)))
            .skip(usize::try_from(query.offset()).unwrap_or(usize::MAX))
            .take(query.limit() as usize)
            .cloned()
            .collect();

        Ok(page)
    }

    async fn insert_ignoring_conflicts(
        &self,
        rows: Vec<NewAdvocate>,
    ) -> AdvocateResult<Vec<Advocate>> {
        let mut store = self.store.write().await;
        let mut inserted = Vec::new();

        for row in rows {
            let exists = store.rows.iter().any(|a| a.identity() == row.identity());
            if exists {
                continue;
            }

            store.next_id += 1;
            let advocate = Advocate {
                id: store.next_id,
                first_name: row.first_name,
                last_name: row.last_name,
                city: row.city,
                degree: row.degree,
                years_of_experience: row.years_of_experience,
                phone_number: row.phone_number,
                specialties: row.specialties,
                created_at: Utc::now(),
            };
            store.rows.push(advocate.clone());
            inserted.push(advocate);
        }

        tracing::debug!(inserted = inserted.len(), "Inserted advocates");
        Ok(inserted)
    }

    async fn count(&self) -> AdvocateResult<u64> {
        Ok(self.store.read().await.rows.len() as u64)
    }
}
