use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PAGE_SIZE: u64 = 20;
pub const MAX_PAGE_SIZE: u64 = 100;
/// Largest offset the database accepts (a signed 64-bit bind).
pub const MAX_OFFSET: u64 = i64::MAX as u64;

/// A healthcare advocate as returned by the directory API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Advocate {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    /// Credential such as MD, PhD or MSW
    pub degree: String,
    pub years_of_experience: i32,
    pub phone_number: i64,
    /// Ordered specialty tags
    pub specialties: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Advocate {
    /// Case-insensitive substring match over the searchable fields.
    ///
    /// Mirrors the SQL predicate used by the Postgres repository: a row
    /// matches when any of first name, last name, city, degree or one of its
    /// specialties contains `term`.
    pub fn matches(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        let contains = |value: &str| value.to_lowercase().contains(&needle);

        contains(&self.first_name)
            || contains(&self.last_name)
            || contains(&self.city)
            || contains(&self.degree)
            || self.specialties.iter().any(|s| contains(s))
    }

    /// Identity used as the seeding conflict target.
    pub fn identity(&self) -> (&str, &str, i64) {
        (&self.first_name, &self.last_name, self.phone_number)
    }
}

/// Row to insert when seeding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewAdvocate {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100))]
    pub last_name: String,

    #[validate(length(min = 1, max = 100))]
    pub city: String,

    #[validate(length(min = 1, max = 20))]
    pub degree: String,

    pub specialties: Vec<String>,

    #[validate(range(min = 0, max = 80))]
    pub years_of_experience: i32,

    #[validate(range(min = 1))]
    pub phone_number: i64,
}

impl NewAdvocate {
    pub fn identity(&self) -> (&str, &str, i64) {
        (&self.first_name, &self.last_name, self.phone_number)
    }
}

/// `GET /api/advocates` response body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdvocatePage {
    pub data: Vec<Advocate>,
}

/// `POST /api/seed` response body. Holds only rows inserted by this call.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SeedResult {
    pub advocates: Vec<Advocate>,
}

/// Raw query string of `GET /api/advocates`.
///
/// Values are kept as strings so malformed numbers fall back to defaults
/// instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Free-text term matched against name, city, degree and specialties
    pub search: Option<String>,

    /// 1-based page number (default 1)
    #[param(value_type = Option<u64>, minimum = 1)]
    pub page: Option<String>,

    /// Rows per page (default 20, capped at 100)
    #[param(value_type = Option<u64>, minimum = 1, maximum = 100)]
    pub page_size: Option<String>,
}

/// Normalized search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    term: Option<String>,
    page: u64,
    page_size: u64,
}

impl SearchQuery {
    pub fn new(term: Option<&str>, page: u64, page_size: u64) -> Self {
        let term = term
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);

        let page_size = page_size.clamp(1, MAX_PAGE_SIZE);
        // Pages past this one lie beyond any table and would overflow the offset bind
        let last_page = MAX_OFFSET / page_size + 1;

        Self {
            term,
            page: page.clamp(1, last_page),
            page_size,
        }
    }

    /// Empty or whitespace-only terms are treated as no filter.
    pub fn term(&self) -> Option<&str> {
        self.term.as_deref()
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1) * self.page_size
    }

    pub fn limit(&self) -> u64 {
        self.page_size
    }
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self::new(None, DEFAULT_PAGE, DEFAULT_PAGE_SIZE)
    }
}

fn parse_positive(raw: Option<&str>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|n| *n >= 1)
        .unwrap_or(default)
}

impl From<SearchParams> for SearchQuery {
    fn from(params: SearchParams) -> Self {
        let page = parse_positive(params.page.as_deref(), DEFAULT_PAGE);
        let page_size = parse_positive(params.page_size.as_deref(), DEFAULT_PAGE_SIZE);
        Self::new(params.search.as_deref(), page, page_size)
    }
}

/// Build an ILIKE pattern that matches `term` literally anywhere in a value.
pub fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for ch in term.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}
