use axum::Router;
use domain_advocates::{AdvocateService, PgAdvocateRepository, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = PgAdvocateRepository::new(state.db.clone());
    let service = AdvocateService::new(repository);
    handlers::router(service)
}
