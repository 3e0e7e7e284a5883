use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

const TRIGRAM_COLUMNS: [&str; 4] = ["first_name", "last_name", "city", "degree"];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Trigram indexes keep ILIKE '%term%' off sequential scans
        manager
            .get_connection()
            .execute_unprepared("CREATE EXTENSION IF NOT EXISTS pg_trgm")
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Advocates::Table)
                    .if_not_exists()
                    .col(pk_auto(Advocates::Id))
                    .col(text(Advocates::FirstName))
                    .col(text(Advocates::LastName))
                    .col(text(Advocates::City))
                    .col(text(Advocates::Degree))
                    .col(json_binary(Advocates::Specialties).default(Expr::cust("'[]'::jsonb")))
                    .col(integer(Advocates::YearsOfExperience))
                    .col(big_integer(Advocates::PhoneNumber))
                    .col(
                        timestamp_with_time_zone(Advocates::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                "ALTER TABLE advocates ADD CONSTRAINT ck_advocates_years_non_negative \
                 CHECK (years_of_experience >= 0)",
            )
            .await?;

        // Conflict target for idempotent seeding
        manager
            .create_index(
                Index::create()
                    .name("uq_advocates_identity")
                    .table(Advocates::Table)
                    .col(Advocates::FirstName)
                    .col(Advocates::LastName)
                    .col(Advocates::PhoneNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        for column in TRIGRAM_COLUMNS {
            manager
                .get_connection()
                .execute_unprepared(&format!(
                    "CREATE INDEX IF NOT EXISTS idx_advocates_{column}_trgm \
                     ON advocates USING gin ({column} gin_trgm_ops)"
                ))
                .await?;
        }

        manager
            .get_connection()
            .execute_unprepared(
                "CREATE INDEX IF NOT EXISTS idx_advocates_specialties \
                 ON advocates USING gin (specialties)",
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Advocates::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Advocates {
    Table,
    Id,
    FirstName,
    LastName,
    City,
    Degree,
    Specialties,
    YearsOfExperience,
    PhoneNumber,
    CreatedAt,
}
