//! Client-side categorical filters over already fetched advocates.

use std::collections::BTreeSet;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

use crate::model::Advocate;

/// Years-of-experience bucket. Zero years falls in no bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr)]
pub enum YearsBucket {
    #[strum(to_string = "1-5 years", serialize = "1-5")]
    OneToFive,
    #[strum(to_string = "6-10 years", serialize = "6-10")]
    SixToTen,
    #[strum(to_string = "10+ years", serialize = "10+")]
    OverTen,
}

impl YearsBucket {
    pub fn contains(self, years: i32) -> bool {
        match self {
            YearsBucket::OneToFive => (1..=5).contains(&years),
            YearsBucket::SixToTen => (6..=10).contains(&years),
            YearsBucket::OverTen => years > 10,
        }
    }
}

/// Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    pub city: Option<String>,
    pub degree: Option<String>,
    pub years: Option<YearsBucket>,
}

impl Filters {
    pub fn is_empty(&self) -> bool {
        self.city.is_none() && self.degree.is_none() && self.years.is_none()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn matches(&self, advocate: &Advocate) -> bool {
        self.city.as_ref().is_none_or(|c| advocate.city == *c)
            && self.degree.as_ref().is_none_or(|d| advocate.degree == *d)
            && self
                .years
                .is_none_or(|b| b.contains(advocate.years_of_experience))
    }

    pub fn apply<'a>(&self, advocates: &'a [Advocate]) -> Vec<&'a Advocate> {
        advocates.iter().filter(|a| self.matches(a)).collect()
    }
}

/// Picker choices derived from the fetched set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub cities: Vec<String>,
    pub degrees: Vec<String>,
    pub years: Vec<YearsBucket>,
}

fn distinct_sorted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .filter(|v| !v.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

impl FilterOptions {
    pub fn from_advocates(advocates: &[Advocate]) -> Self {
        Self {
            cities: distinct_sorted(advocates.iter().map(|a| a.city.as_str())),
            degrees: distinct_sorted(advocates.iter().map(|a| a.degree.as_str())),
            years: YearsBucket::iter().collect(),
        }
    }
}
