//! Static sentence dataset
//!
//! Holds the sentences, their category labels, the category colors and one
//! precomputed 2-D coordinate set per projection method. All arrays are
//! index-aligned: index `i` refers to the same sentence everywhere.
//!
//! The reference dataset is embedded at compile time from
//! `data/embeddings.json`. It is validated once when loaded; any violation of
//! the alignment or color invariants fails construction.

use super::colors::CategoryColorMap;
use super::error::{ProjectionError, Result};
use super::method::Method;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Embedded reference dataset (25 STS Benchmark sentences, 5 categories)
const EMBEDDINGS_JSON: &str = include_str!("../../data/embeddings.json");

/// 2-D coordinates of every sentence under one method
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Projection {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Projection {
    /// Coordinate of sentence `index`
    pub fn point(&self, index: usize) -> Option<(f64, f64)> {
        Some((*self.x.get(index)?, *self.y.get(index)?))
    }
}

/// On-disk layout of `data/embeddings.json`
#[derive(Deserialize)]
struct DatasetFile {
    sentences: Vec<String>,
    categories: Vec<String>,
    colors: HashMap<String, String>,
    projections: HashMap<String, Projection>,
}

/// Sentences, categories, colors and per-method projections
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    sentences: Vec<String>,
    categories: Vec<String>,
    /// Indexed by `Method::index()`
    projections: [Projection; 3],
    colors: CategoryColorMap,
}

impl Dataset {
    /// Assemble and validate a dataset
    ///
    /// # Arguments
    /// * `sentences` - One string per point
    /// * `categories` - Category label of each sentence
    /// * `projections` - Coordinates for tsne, pca and umap (in `Method::ALL` order)
    /// * `colors` - Color of every category appearing in `categories`
    pub fn new(
        sentences: Vec<String>,
        categories: Vec<String>,
        projections: [Projection; 3],
        colors: CategoryColorMap,
    ) -> Result<Self> {
        let dataset = Self {
            sentences,
            categories,
            projections,
            colors,
        };
        dataset.validate()?;
        Ok(dataset)
    }

    /// The embedded reference dataset
    pub fn reference() -> Result<Self> {
        Self::from_json(EMBEDDINGS_JSON)
    }

    /// Parse a dataset in the `data/embeddings.json` layout
    pub fn from_json(json: &str) -> Result<Self> {
        let file: DatasetFile = serde_json::from_str(json)?;
        let mut by_key = file.projections;

        let mut take = |method: Method| {
            by_key.remove(method.key()).ok_or_else(|| {
                ProjectionError::Data(format!("No '{}' projection in dataset", method.key()))
            })
        };
        let projections = [take(Method::Tsne)?, take(Method::Pca)?, take(Method::Umap)?];

        for extra in by_key.keys() {
            warn!("Ignoring projection '{}': not a supported method", extra);
        }

        let colors = CategoryColorMap::from_hex(file.colors)?;
        Self::new(file.sentences, file.categories, projections, colors)
    }

    /// Check length alignment and color coverage
    fn validate(&self) -> Result<()> {
        let n = self.sentences.len();
        if n == 0 {
            return Err(ProjectionError::EmptyDataset);
        }

        check_len("categories", n, self.categories.len())?;
        for method in Method::ALL {
            let projection = self.projection(method);
            check_len(&format!("{}.x", method.key()), n, projection.x.len())?;
            check_len(&format!("{}.y", method.key()), n, projection.y.len())?;
        }

        for category in self.category_levels() {
            if !self.colors.contains(category) {
                return Err(ProjectionError::MissingColor(category.to_string()));
            }
        }

        debug!(
            "Dataset: {} sentences, {} categories, {} colors",
            n,
            self.category_levels().len(),
            self.colors.len()
        );
        Ok(())
    }

    /// Number of sentences (N)
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Always false for a validated dataset
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn colors(&self) -> &CategoryColorMap {
        &self.colors
    }

    /// Coordinates for a method
    pub fn projection(&self, method: Method) -> &Projection {
        &self.projections[method.index()]
    }

    /// Distinct categories in first-occurrence order
    pub fn category_levels(&self) -> Vec<&str> {
        let mut levels: Vec<&str> = Vec::new();
        for category in &self.categories {
            if !levels.contains(&category.as_str()) {
                levels.push(category);
            }
        }
        levels
    }
}

fn check_len(what: &str, expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(ProjectionError::LengthMismatch {
            what: what.to_string(),
            expected,
            actual,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projection(n: usize) -> Projection {
        Projection {
            x: (0..n).map(|i| i as f64).collect(),
            y: (0..n).map(|i| -(i as f64)).collect(),
        }
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_reference_dataset_loads() {
        let dataset = Dataset::reference().unwrap();
        assert_eq!(dataset.len(), 25);
        assert_eq!(dataset.categories().len(), 25);
        assert_eq!(dataset.sentences()[0], "A man is playing a guitar on stage");
        assert_eq!(dataset.sentences()[24], "Stars twinkle in the night sky");
        assert_eq!(
            dataset.category_levels(),
            vec!["music", "food", "animals", "work", "nature"]
        );
        assert_eq!(dataset.colors().color("nature").unwrap(), [255, 238, 173]);
    }

    #[test]
    fn test_reference_projection_values() {
        let dataset = Dataset::reference().unwrap();
        assert_eq!(dataset.projection(Method::Tsne).point(0), Some((-15.2, 8.4)));
        assert_eq!(dataset.projection(Method::Pca).point(24), Some((2.3, -2.3)));
        assert_eq!(dataset.projection(Method::Umap).point(8), Some((0.1, 3.1)));
        assert_eq!(dataset.projection(Method::Umap).point(25), None);
    }

    #[test]
    fn test_category_levels_first_occurrence_order() {
        let colors = CategoryColorMap::from_hex([("b", "#000000"), ("a", "#FFFFFF")]).unwrap();
        let dataset = Dataset::new(
            strings(&["s0", "s1", "s2", "s3"]),
            strings(&["b", "a", "b", "a"]),
            [projection(4), projection(4), projection(4)],
            colors,
        )
        .unwrap();
        assert_eq!(dataset.category_levels(), vec!["b", "a"]);
    }

    #[test]
    fn test_length_mismatch_is_rejected() {
        let colors = CategoryColorMap::from_hex([("a", "#000000")]).unwrap();
        let err = Dataset::new(
            strings(&["s0", "s1"]),
            strings(&["a", "a"]),
            [projection(2), projection(3), projection(2)],
            colors,
        )
        .unwrap_err();

        match err {
            ProjectionError::LengthMismatch {
                what,
                expected,
                actual,
            } => {
                assert_eq!(what, "pca.x");
                assert_eq!(expected, 2);
                assert_eq!(actual, 3);
            }
            other => panic!("expected LengthMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_color_fails_construction() {
        let colors = CategoryColorMap::from_hex([("a", "#000000")]).unwrap();
        let err = Dataset::new(
            strings(&["s0", "s1"]),
            strings(&["a", "z"]),
            [projection(2), projection(2), projection(2)],
            colors,
        )
        .unwrap_err();
        assert!(matches!(err, ProjectionError::MissingColor(c) if c == "z"));
    }

    #[test]
    fn test_empty_dataset_is_rejected() {
        let err = Dataset::new(
            Vec::new(),
            Vec::new(),
            [projection(0), projection(0), projection(0)],
            CategoryColorMap::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ProjectionError::EmptyDataset));
    }

    #[test]
    fn test_missing_projection_in_json() {
        let json = r##"{
            "sentences": ["s0"],
            "categories": ["a"],
            "colors": {"a": "#000000"},
            "projections": {
                "tsne": {"x": [0.0], "y": [0.0]},
                "pca": {"x": [0.0], "y": [0.0]}
            }
        }"##;
        let err = Dataset::from_json(json).unwrap_err();
        assert!(matches!(err, ProjectionError::Data(msg) if msg.contains("umap")));
    }
}
