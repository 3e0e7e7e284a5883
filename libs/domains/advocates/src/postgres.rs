use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    DatabaseBackend, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Statement, Value,
};

use crate::{
    entity,
    error::AdvocateResult,
    models::{Advocate, NewAdvocate, SearchQuery, like_pattern},
    repository::AdvocateRepository,
};

/// OR over the text columns plus any element of the specialties array.
/// `$1` binds the escaped pattern.
const TERM_PREDICATE: &str = "(first_name ILIKE $1 OR last_name ILIKE $1 OR city ILIKE $1 \
     OR degree ILIKE $1 \
     OR EXISTS (SELECT 1 FROM jsonb_array_elements_text(specialties) AS s(tag) WHERE s.tag ILIKE $1))";

const INSERT_COLUMNS: usize = 7;

pub struct PgAdvocateRepository {
    db: DatabaseConnection,
}

impl PgAdvocateRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn insert_statement(rows: Vec<NewAdvocate>) -> Statement {
    let mut sql = String::from(
        "INSERT INTO advocates \
         (first_name, last_name, city, degree, specialties, years_of_experience, phone_number) \
         VALUES ",
    );
    let mut values: Vec<Value> = Vec::with_capacity(rows.len() * INSERT_COLUMNS);

    for (i, row) in rows.into_iter().enumerate() {
        if i > 0 {
            sql.push_str(", ");
        }
        let base = i * INSERT_COLUMNS;
        let placeholders: Vec<String> = (1..=INSERT_COLUMNS)
            .map(|n| format!("${}", base + n))
            .collect();
        sql.push('(');
        sql.push_str(&placeholders.join(", "));
        sql.push(')');

        values.push(row.first_name.into());
        values.push(row.last_name.into());
        values.push(row.city.into());
        values.push(row.degree.into());
        values.push(serde_json::Value::from(row.specialties).into());
        values.push(row.years_of_experience.into());
        values.push(row.phone_number.into());
    }

    sql.push_str(
        " ON CONFLICT (first_name, last_name, phone_number) DO NOTHING \
         RETURNING id, first_name, last_name, city, degree, specialties, \
         years_of_experience, phone_number, created_at",
    );

    Statement::from_sql_and_values(DatabaseBackend::Postgres, sql, values)
}

#[async_trait]
impl AdvocateRepository for PgAdvocateRepository {
    async fn search(&self, query: &SearchQuery) -> AdvocateResult<Vec<Advocate>> {
        let mut select = entity::Entity::find();

        if let Some(term) = query.term() {
            let pattern = like_pattern(term);
            select = select.filter(Expr::cust_with_values(TERM_PREDICATE, [pattern]));
        }

        let models = select
            .order_by_asc(entity::Column::Id)
            .limit(query.limit())
            .offset(query.offset())
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn insert_ignoring_conflicts(
        &self,
        rows: Vec<NewAdvocate>,
    ) -> AdvocateResult<Vec<Advocate>> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let requested = rows.len();
        let models = entity::Entity::find()
            .from_raw_sql(insert_statement(rows))
            .all(&self.db)
            .await?;

        tracing::info!(
            requested,
            inserted = models.len(),
            "Inserted advocates ignoring conflicts"
        );

        let mut advocates: Vec<Advocate> = models.into_iter().map(Into::into).collect();
        advocates.sort_by_key(|a| a.id);
        Ok(advocates)
    }

    async fn count(&self) -> AdvocateResult<u64> {
        Ok(entity::Entity::find().count(&self.db).await?)
    }
}
