//! Integration tests for the advocates domain
//!
//! These tests use real PostgreSQL via testcontainers to ensure:
//! - The search predicate matches text columns and specialty tags
//! - Wildcards in the term are matched literally
//! - Seeding is idempotent through the unique identity index
//! - Pagination is stable across pages

use domain_advocates::*;
use test_utils::{TestDataBuilder, TestDatabase, assertions::*};

fn advocate(builder: &TestDataBuilder, index: u32, city: &str, specialties: &[&str]) -> NewAdvocate {
    NewAdvocate {
        first_name: format!("Test{index}"),
        last_name: builder.name("advocate", &index.to_string()),
        city: city.to_string(),
        degree: "MD".to_string(),
        specialties: specialties.iter().map(|s| s.to_string()).collect(),
        years_of_experience: index as i32,
        phone_number: builder.phone_number(index),
    }
}

// ============================================================================
// Repository Tests
// ============================================================================

#[tokio::test]
async fn test_seed_is_idempotent() {
    let db = TestDatabase::new().await;
    let service = AdvocateService::new(PgAdvocateRepository::new(db.connection()));

    let first = service.seed().await.unwrap();
    assert_eq!(first.advocates.len(), seed::sample_advocates().len());
    assert_ascending(
        &first.advocates.iter().map(|a| a.id).collect::<Vec<_>>(),
        "seeded ids",
    );

    let second = service.seed().await.unwrap();
    assert!(second.advocates.is_empty());

    let repo = PgAdvocateRepository::new(db.connection());
    assert_eq!(
        repo.count().await.unwrap(),
        seed::sample_advocates().len() as u64
    );
}

#[tokio::test]
async fn test_partial_conflict_returns_only_new_rows() {
    let db = TestDatabase::new().await;
    let repo = PgAdvocateRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("partial_conflict");

    let existing = advocate(&builder, 1, "Boston", &["ADHD"]);
    repo.insert_ignoring_conflicts(vec![existing.clone()])
        .await
        .unwrap();

    let fresh = advocate(&builder, 2, "Denver", &["Nutrition"]);
    let inserted = repo
        .insert_ignoring_conflicts(vec![existing, fresh.clone()])
        .await
        .unwrap();

    assert_eq!(inserted.len(), 1);
    assert_eq!(inserted[0].city, "Denver");
    assert_eq!(inserted[0].phone_number, fresh.phone_number);
}

#[tokio::test]
async fn test_search_matches_specialty_tag() {
    let db = TestDatabase::new().await;
    let repo = PgAdvocateRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("specialty_tag");

    repo.insert_ignoring_conflicts(vec![
        advocate(&builder, 1, "Boston", &["Sleep issues"]),
        advocate(&builder, 2, "Denver", &["Chronic pain"]),
    ])
    .await
    .unwrap();

    let results = repo
        .search(&SearchQuery::new(Some("SLEEP"), 1, 20))
        .await
        .unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].city, "Boston");
}

#[tokio::test]
async fn test_search_matches_text_columns() {
    let db = TestDatabase::new().await;
    let repo = PgAdvocateRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("text_columns");

    repo.insert_ignoring_conflicts(vec![
        advocate(&builder, 1, "Salt Lake City", &[]),
        advocate(&builder, 2, "Denver", &[]),
    ])
    .await
    .unwrap();

    let by_city = repo
        .search(&SearchQuery::new(Some("lake"), 1, 20))
        .await
        .unwrap();
    assert_eq!(by_city.len(), 1);

    let by_degree = repo
        .search(&SearchQuery::new(Some("md"), 1, 20))
        .await
        .unwrap();
    assert_eq!(by_degree.len(), 2);
}

#[tokio::test]
async fn test_wildcards_are_matched_literally() {
    let db = TestDatabase::new().await;
    let repo = PgAdvocateRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("wildcards");

    repo.insert_ignoring_conflicts(vec![
        advocate(&builder, 1, "Boston", &["100% remote"]),
        advocate(&builder, 2, "Denver", &["Remote"]),
    ])
    .await
    .unwrap();

    let percent = repo
        .search(&SearchQuery::new(Some("%"), 1, 20))
        .await
        .unwrap();
    assert_eq!(percent.len(), 1);
    assert_eq!(percent[0].city, "Boston");

    let underscore = repo
        .search(&SearchQuery::new(Some("_"), 1, 20))
        .await
        .unwrap();
    assert!(underscore.is_empty());
}

#[tokio::test]
async fn test_pagination_is_stable() {
    let db = TestDatabase::new().await;
    let service = AdvocateService::new(PgAdvocateRepository::new(db.connection()));
    service.seed().await.unwrap();

    let repo = PgAdvocateRepository::new(db.connection());
    let mut seen = Vec::new();
    for page in 1..=4 {
        let rows = repo
            .search(&SearchQuery::new(None, page, 4))
            .await
            .unwrap();
        seen.extend(rows.iter().map(|a| a.id));
    }

    assert_eq!(seen.len(), seed::sample_advocates().len());
    assert_ascending(&seen, "paged ids");
}

#[tokio::test]
async fn test_page_past_the_end_binds_and_returns_nothing() {
    let db = TestDatabase::new().await;
    let service = AdvocateService::new(PgAdvocateRepository::new(db.connection()));
    service.seed().await.unwrap();

    let query = SearchQuery::from(SearchParams {
        search: None,
        page: Some("1000000000000000000".to_string()),
        page_size: Some("20".to_string()),
    });
    let rows = PgAdvocateRepository::new(db.connection())
        .search(&query)
        .await
        .unwrap();

    assert!(rows.is_empty());
}

#[tokio::test]
async fn test_negative_years_rejected_by_constraint() {
    let db = TestDatabase::new().await;
    let repo = PgAdvocateRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("negative_years");

    let mut row = advocate(&builder, 1, "Boston", &[]);
    row.years_of_experience = -1;

    let result = repo.insert_ignoring_conflicts(vec![row]).await;
    assert!(matches!(result, Err(AdvocateError::Internal(_))));
}

#[tokio::test]
async fn test_closed_pool_is_store_unavailable() {
    let db = TestDatabase::new().await;
    let connection = db.connection();
    let repo = PgAdvocateRepository::new(connection.clone());

    connection.close().await.unwrap();

    let err = repo.search(&SearchQuery::default()).await.unwrap_err();
    assert!(matches!(err, AdvocateError::StoreUnavailable(_)));
}
