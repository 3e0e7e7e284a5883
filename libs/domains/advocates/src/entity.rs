use sea_orm::entity::prelude::*;

/// Sea-ORM entity for the `advocates` table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "advocates")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub first_name: String,
    #[sea_orm(column_type = "Text")]
    pub last_name: String,
    #[sea_orm(column_type = "Text")]
    pub city: String,
    #[sea_orm(column_type = "Text")]
    pub degree: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub specialties: Json,
    pub years_of_experience: i32,
    pub phone_number: i64,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub const URL: &'static str = "/advocates";
    pub const TAG: &'static str = "advocates";
}

impl From<Model> for crate::models::Advocate {
    fn from(model: Model) -> Self {
        // Non-array payloads read as no specialties
        let specialties: Vec<String> = serde_json::from_value(model.specialties).unwrap_or_default();

        Self {
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
            city: model.city,
            degree: model.degree,
            years_of_experience: model.years_of_experience,
            phone_number: model.phone_number,
            specialties,
            created_at: model.created_at.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Advocate;
    use serde_json::json;

    fn model(specialties: Json) -> Model {
        Model {
            id: 7,
            first_name: "Alice".into(),
            last_name: "Johnson".into(),
            city: "Chicago".into(),
            degree: "MSW".into(),
            specialties,
            years_of_experience: 3,
            phone_number: 5552223333,
            created_at: chrono::Utc::now().into(),
        }
    }

    #[test]
    fn test_model_converts_specialties() {
        let advocate: Advocate = model(json!(["ADHD", "Nutrition"])).into();
        assert_eq!(advocate.id, 7);
        assert_eq!(advocate.specialties, vec!["ADHD", "Nutrition"]);
    }

    #[test]
    fn test_malformed_specialties_become_empty() {
        let advocate: Advocate = model(json!({"not": "an array"})).into();
        assert!(advocate.specialties.is_empty());
    }
}
