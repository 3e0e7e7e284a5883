//! Stand-alone migrator for the advocates schema.
//!
//! `migration up`, `migration down`, `migration status` and friends, run
//! against `DATABASE_URL`. The API applies the same migrations at start-up
//! unless `RUN_MIGRATIONS=false`.

use migration::Migrator;
use sea_orm_migration::cli;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
