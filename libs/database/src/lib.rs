//! PostgreSQL connectivity for the advocates services.
//!
//! ```ignore
//! use database::postgres::{self, PostgresConfig};
//! use core_config::FromEnv;
//!
//! let db = postgres::connect_from_config_with_retry(PostgresConfig::from_env()?, None).await?;
//! postgres::run_migrations::<migration::Migrator>(&db, "advocates-api").await?;
//! ```
//!
//! # Features
//!
//! - `config` (default): `PostgresConfig` implements `core_config::FromEnv`

pub mod common;
pub mod postgres;

pub use common::{DatabaseError, DatabaseResult};
