//! Fixed sample advocates inserted by `POST /api/seed`.

use crate::models::NewAdvocate;

pub const SPECIALTIES: [&str; 26] = [
    "Bipolar",
    "LGBTQ",
    "Medication/Prescribing",
    "Suicide History/Attempts",
    "General Mental Health (anxiety, depression, stress, grief, life transitions)",
    "Men's issues",
    "Relationship Issues (family, friends, couple, etc)",
    "Trauma & PTSD",
    "Personality disorders",
    "Personal growth",
    "Substance use/abuse",
    "Pediatrics",
    "Women's issues (post-partum, infertility, family planning)",
    "Chronic pain",
    "Weight loss & nutrition",
    "Eating disorders",
    "Diabetic Diet and nutrition",
    "Coaching (leadership, career, academic and wellness)",
    "Life coaching",
    "Obsessive-compulsive disorders",
    "Neuropsychological evaluations & testing (ADHD testing)",
    "Attention and Hyperactivity (ADHD)",
    "Sleep issues",
    "Schizophrenia and psychotic disorders",
    "Learning disorders",
    "Domestic abuse",
];

// first, last, city, degree, years, phone
const ROWS: [(&str, &str, &str, &str, i32, i64); 15] = [
    ("John", "Doe", "New York", "MD", 10, 5551234567),
    ("Jane", "Smith", "Los Angeles", "PhD", 8, 5559876543),
    ("Alice", "Johnson", "Chicago", "MSW", 5, 5554567890),
    ("Michael", "Brown", "Houston", "MD", 12, 5556543210),
    ("Emily", "Davis", "Phoenix", "PhD", 7, 5553210987),
    ("Chris", "Martinez", "Philadelphia", "MSW", 9, 5557890123),
    ("Jessica", "Taylor", "San Antonio", "MD", 11, 5554561234),
    ("David", "Harris", "San Diego", "PhD", 6, 5557896543),
    ("Laura", "Clark", "Dallas", "MSW", 4, 5550123456),
    ("Daniel", "Lewis", "San Jose", "MD", 13, 5553217654),
    ("Sarah", "Lee", "Austin", "PhD", 10, 5551238765),
    ("James", "King", "Jacksonville", "MSW", 5, 5556540987),
    ("Megan", "Green", "San Francisco", "MD", 14, 5559873456),
    ("Joshua", "Walker", "Columbus", "PhD", 9, 5556781234),
    ("Amanda", "Hall", "Fort Worth", "MSW", 3, 5559872345),
];

/// Deterministic slice of [`SPECIALTIES`] for the row at `index`.
fn specialties_for(index: usize) -> Vec<String> {
    let len = 2 + index % 3;
    let start = (index * 7) % (SPECIALTIES.len() - len);
    SPECIALTIES[start..start + len]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

pub fn sample_advocates() -> Vec<NewAdvocate> {
    ROWS.iter()
        .enumerate()
        .map(|(i, (first, last, city, degree, years, phone))| NewAdvocate {
            first_name: first.to_string(),
            last_name: last.to_string(),
            city: city.to_string(),
            degree: degree.to_string(),
            specialties: specialties_for(i),
            years_of_experience: *years,
            phone_number: *phone,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use validator::Validate;

    #[test]
    fn test_sample_is_stable() {
        assert_eq!(sample_advocates(), sample_advocates());
    }

    #[test]
    fn test_sample_rows_are_valid_and_unique() {
        let rows = sample_advocates();
        let identities: HashSet<_> = rows.iter().map(|r| r.identity()).collect();

        assert_eq!(identities.len(), rows.len());
        assert!(rows.iter().all(|r| r.validate().is_ok()));
        assert!(rows.iter().all(|r| !r.specialties.is_empty()));
    }

    #[test]
    fn test_sample_covers_every_years_bucket() {
        let rows = sample_advocates();
        assert!(rows.iter().any(|r| r.years_of_experience <= 5));
        assert!(rows.iter().any(|r| (6..=10).contains(&r.years_of_experience)));
        assert!(rows.iter().any(|r| r.years_of_experience > 10));
    }
}
