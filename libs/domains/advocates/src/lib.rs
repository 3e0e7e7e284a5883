//! Advocates Domain
//!
//! Searchable, paginated directory of healthcare advocates.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← GET /advocates, POST /seed
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Query normalization, seeding, metrics
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory and Postgres)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Advocate, SearchQuery, response envelopes
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_advocates::{
//!     handlers,
//!     repository::InMemoryAdvocateRepository,
//!     service::AdvocateService,
//! };
//!
//! let repository = InMemoryAdvocateRepository::new();
//! let service = AdvocateService::new(repository);
//!
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod seed;
pub mod service;

pub use error::{AdvocateError, AdvocateResult};
pub use models::{
    Advocate, AdvocatePage, DEFAULT_PAGE, DEFAULT_PAGE_SIZE, MAX_OFFSET, MAX_PAGE_SIZE, NewAdvocate,
    SearchParams, SearchQuery, SeedResult,
};
pub use postgres::PgAdvocateRepository;
pub use repository::{AdvocateRepository, InMemoryAdvocateRepository};
pub use service::AdvocateService;
