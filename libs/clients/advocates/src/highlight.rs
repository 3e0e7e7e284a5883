//! Specialty highlighting for a committed search term.

/// Lowercase with apostrophes removed, so "men's" and "mens" compare equal.
pub fn normalize(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, '\'' | '\u{2019}'))
        .flat_map(char::to_lowercase)
        .collect()
}

pub fn is_match(specialty: &str, term: &str) -> bool {
    !term.is_empty() && normalize(specialty).contains(&normalize(term))
}

/// Specialties containing `term`. An empty term matches all of them.
pub fn matching_specialties<'a>(specialties: &'a [String], term: &str) -> Vec<&'a str> {
    if term.is_empty() {
        return specialties.iter().map(String::as_str).collect();
    }
    let needle = normalize(term);
    specialties
        .iter()
        .filter(|s| normalize(s).contains(&needle))
        .map(String::as_str)
        .collect()
}

/// Specialties a card shows: only the matching ones while a term is
/// committed, unless `show_all` is set or none match.
pub fn visible_specialties<'a>(
    specialties: &'a [String],
    term: &str,
    show_all: bool,
) -> Vec<&'a str> {
    let matching = matching_specialties(specialties, term);
    if term.is_empty() || show_all || matching.is_empty() {
        specialties.iter().map(String::as_str).collect()
    } else {
        matching
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn specialties() -> Vec<String> {
        vec![
            "Men's issues".into(),
            "Trauma & PTSD".into(),
            "Women's issues".into(),
        ]
    }

    #[test]
    fn test_normalize_drops_apostrophes() {
        assert_eq!(normalize("Men's Issues"), "mens issues");
        assert_eq!(normalize("Women\u{2019}s"), "womens");
    }

    #[test]
    fn test_matching_ignores_case_and_apostrophes() {
        let specs = specialties();
        assert_eq!(
            matching_specialties(&specs, "MENS"),
            vec!["Men's issues", "Women's issues"]
        );
        assert_eq!(
            matching_specialties(&specs, "WOMEN\u{2019}S"),
            vec!["Women's issues"]
        );
        assert_eq!(matching_specialties(&specs, "issues").len(), 2);
    }

    #[test]
    fn test_visible_shows_only_matches_by_default() {
        let specs = specialties();
        assert_eq!(visible_specialties(&specs, "ptsd", false), vec!["Trauma & PTSD"]);
        assert_eq!(visible_specialties(&specs, "ptsd", true).len(), 3);
    }

    #[test]
    fn test_visible_falls_back_to_all_without_match() {
        let specs = specialties();
        assert_eq!(visible_specialties(&specs, "Chicago", false).len(), 3);
        assert_eq!(visible_specialties(&specs, "", false).len(), 3);
    }

    #[test]
    fn test_is_match_requires_term() {
        assert!(!is_match("Men's issues", ""));
        assert!(is_match("Men's issues", "men's"));
    }
}
