//! FAQ category filtering
//!
//! Question/answer records come from the content collaborator as-is; this
//! module only selects which of them a category tab shows.

use crate::error::ValueError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Topic a question belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaqCategory {
    General,
    Amazon,
    Etsy,
    Pricing,
}

impl FaqCategory {
    /// Every category in tab order
    pub const ALL: [FaqCategory; 4] = [
        FaqCategory::General,
        FaqCategory::Amazon,
        FaqCategory::Etsy,
        FaqCategory::Pricing,
    ];

    /// Content identifier
    pub fn as_str(self) -> &'static str {
        match self {
            FaqCategory::General => "general",
            FaqCategory::Amazon => "amazon",
            FaqCategory::Etsy => "etsy",
            FaqCategory::Pricing => "pricing",
        }
    }

    /// Catalog key of the tab label, inside the `faq` namespace
    pub fn label_key(self) -> &'static str {
        match self {
            FaqCategory::General => "category_general",
            FaqCategory::Amazon => "category_amazon",
            FaqCategory::Etsy => "category_etsy",
            FaqCategory::Pricing => "category_pricing",
        }
    }
}

impl FromStr for FaqCategory {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FaqCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ValueError::UnknownCategory(s.to_string()))
    }
}

impl std::fmt::Display for FaqCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single question and its answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqRecord {
    pub id: String,
    pub category: FaqCategory,
    pub question: String,
    pub answer: String,
}

/// Active category tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Show every record
    #[default]
    All,
    /// Show one category
    Only(FaqCategory),
}

impl CategoryFilter {
    /// Whether a record passes this filter
    pub fn matches(self, record: &FaqRecord) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => record.category == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(CategoryFilter::All),
            other => other.parse().map(CategoryFilter::Only),
        }
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Only(category) => write!(f, "{}", category),
        }
    }
}

/// Records visible under `selector`, in their original order
pub fn filter(records: &[FaqRecord], selector: CategoryFilter) -> Vec<&FaqRecord> {
    records.iter().filter(|r| selector.matches(r)).collect()
}

/// Number of records per category, in tab order
pub fn category_counts(records: &[FaqRecord]) -> Vec<(FaqCategory, usize)> {
    FaqCategory::ALL
        .into_iter()
        .map(|category| {
            let count = records.iter().filter(|r| r.category == category).count();
            (category, count)
        })
        .collect()
}

/// Parse FAQ content from its JSON array form
pub fn parse_records(json: &str) -> Result<Vec<FaqRecord>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Selector state held by the FAQ section
#[derive(Debug, Clone, Default)]
pub struct FaqState {
    active: CategoryFilter,
}

impl FaqState {
    /// Create a state showing every record
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch tabs
    pub fn select(&mut self, selector: CategoryFilter) {
        self.active = selector;
    }

    /// Active tab
    pub fn active(&self) -> CategoryFilter {
        self.active
    }

    /// Records for the active tab
    pub fn visible<'a>(&self, records: &'a [FaqRecord]) -> Vec<&'a FaqRecord> {
        filter(records, self.active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, category: FaqCategory) -> FaqRecord {
        FaqRecord {
            id: id.to_string(),
            category,
            question: format!("Question {}", id),
            answer: format!("Answer {}", id),
        }
    }

    fn sample() -> Vec<FaqRecord> {
        vec![
            record("1", FaqCategory::General),
            record("2", FaqCategory::Amazon),
            record("3", FaqCategory::Pricing),
            record("4", FaqCategory::Amazon),
            record("5", FaqCategory::Etsy),
        ]
    }

    fn ids(records: &[&FaqRecord]) -> Vec<String> {
        records.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_all_returns_everything_in_order() {
        let records = sample();
        let visible = filter(&records, CategoryFilter::All);
        assert_eq!(ids(&visible), vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_category_keeps_relative_order() {
        let records = sample();
        let visible = filter(&records, CategoryFilter::Only(FaqCategory::Amazon));
        assert_eq!(ids(&visible), vec!["2", "4"]);
        assert!(visible.iter().all(|r| r.category == FaqCategory::Amazon));
    }

    #[test]
    fn test_empty_category() {
        let records = vec![record("1", FaqCategory::General)];
        assert!(filter(&records, CategoryFilter::Only(FaqCategory::Etsy)).is_empty());
    }

    #[test]
    fn test_parse_selector() {
        assert_eq!("all".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!(
            "etsy".parse::<CategoryFilter>(),
            Ok(CategoryFilter::Only(FaqCategory::Etsy))
        );
        assert_eq!(
            "shopify".parse::<CategoryFilter>(),
            Err(ValueError::UnknownCategory("shopify".to_string()))
        );
    }

    #[test]
    fn test_category_counts() {
        let counts = category_counts(&sample());
        assert_eq!(
            counts,
            vec![
                (FaqCategory::General, 1),
                (FaqCategory::Amazon, 2),
                (FaqCategory::Etsy, 1),
                (FaqCategory::Pricing, 1),
            ]
        );
    }

    #[test]
    fn test_parse_records() {
        let json = r#"[
            {"id": "g1", "category": "general", "question": "Who are you?", "answer": "An agency."},
            {"id": "p1", "category": "pricing", "question": "Contracts?", "answer": "Monthly."}
        ]"#;
        let records = parse_records(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].category, FaqCategory::Pricing);

        assert!(parse_records(r#"[{"id": "x", "category": "ebay", "question": "", "answer": ""}]"#).is_err());
    }

    #[test]
    fn test_faq_state_selection() {
        let records = sample();
        let mut state = FaqState::new();
        assert_eq!(state.visible(&records).len(), 5);

        state.select(CategoryFilter::Only(FaqCategory::Pricing));
        assert_eq!(ids(&state.visible(&records)), vec!["3"]);
        assert_eq!(state.active().to_string(), "pricing");
    }
}
