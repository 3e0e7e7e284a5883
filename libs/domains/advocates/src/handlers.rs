use axum::{
    Json, Router,
    extract::{Query, State},
    routing::{get, post},
};
use axum_helpers::errors::responses::{InternalServerErrorResponse, StoreUnavailableResponse};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::entity;
use crate::error::AdvocateResult;
use crate::models::{Advocate, AdvocatePage, SearchParams, SearchQuery, SeedResult};
use crate::repository::AdvocateRepository;
use crate::service::AdvocateService;

/// OpenAPI documentation for the advocates API
#[derive(OpenApi)]
#[openapi(
    paths(search_advocates, seed_advocates),
    components(
        schemas(Advocate, AdvocatePage, SeedResult),
        responses(InternalServerErrorResponse, StoreUnavailableResponse)
    ),
    tags(
        (name = entity::Model::TAG, description = "Healthcare advocate directory")
    )
)]
pub struct ApiDoc;

/// Router exposing `GET /advocates` and `POST /seed`
pub fn router<R: AdvocateRepository + 'static>(service: AdvocateService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route(entity::Model::URL, get(search_advocates))
        .route("/seed", post(seed_advocates))
        .with_state(shared_service)
}

/// Search advocates
///
/// Case-insensitive substring match of `search` against first name, last
/// name, city, degree and specialties. Malformed paging values fall back to
/// their defaults.
#[utoipa::path(
    get,
    path = "/advocates",
    tag = entity::Model::TAG,
    params(SearchParams),
    responses(
        (status = 200, description = "One page of advocates ordered by id", body = AdvocatePage),
        (status = 500, response = StoreUnavailableResponse)
    )
)]
async fn search_advocates<R: AdvocateRepository>(
    State(service): State<Arc<AdvocateService<R>>>,
    Query(params): Query<SearchParams>,
) -> AdvocateResult<Json<AdvocatePage>> {
    let page = service.search(SearchQuery::from(params)).await?;
    Ok(Json(page))
}

/// Insert the sample advocates
///
/// Rows that already exist are skipped, so calling this twice returns an
/// empty list the second time.
#[utoipa::path(
    post,
    path = "/seed",
    tag = entity::Model::TAG,
    responses(
        (status = 200, description = "Rows inserted by this call", body = SeedResult),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn seed_advocates<R: AdvocateRepository>(
    State(service): State<Arc<AdvocateService<R>>>,
) -> AdvocateResult<Json<SeedResult>> {
    let result = service.seed().await?;
    Ok(Json(result))
}
