//! Static page prose
//!
//! Header, hover hint, method comparison and dataset notes shown around the
//! chart. Embedded at compile time from `data/page.json`.

use crate::projection::Result;
use serde::Deserialize;

const PAGE_JSON: &str = include_str!("../../data/page.json");

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PageContent {
    pub title: String,
    /// Author, course and institution lines under the title
    #[serde(default)]
    pub credits: Vec<String>,
    pub subtitle: String,
    pub hover_hint: String,
    pub comparison: Comparison,
    pub dataset: DatasetNotes,
}

/// "Understanding the Differences" section
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Comparison {
    pub title: String,
    pub heading: String,
    pub topics: Vec<ComparisonTopic>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ComparisonTopic {
    pub label: String,
    pub points: Vec<String>,
}

/// "Dataset Information" section
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DatasetNotes {
    pub title: String,
    pub summary: String,
    pub heading: String,
    pub observations: Vec<Observation>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Observation {
    pub label: String,
    pub text: String,
}

impl PageContent {
    pub fn embedded() -> Result<Self> {
        Ok(serde_json::from_str(PAGE_JSON)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_page_loads() {
        let page = PageContent::embedded().unwrap();
        assert_eq!(page.title, "XAI in LLMs");
        assert_eq!(page.credits.len(), 3);
        assert_eq!(page.comparison.topics.len(), 3);
        assert_eq!(page.comparison.topics[1].label, "Interpretability");
        assert_eq!(page.dataset.observations.len(), 4);
    }
}
