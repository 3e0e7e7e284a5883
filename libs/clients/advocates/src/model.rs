use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Advocate as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advocate {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    pub years_of_experience: i32,
    pub phone_number: i64,
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Advocate {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct AdvocatePage {
    pub data: Vec<Advocate>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SeedResult {
    pub advocates: Vec<Advocate>,
}
