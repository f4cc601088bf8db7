//! Series construction
//!
//! Groups the points of one projection by category. Each category becomes one
//! render-ready series with parallel x/y/text arrays and its marker styling.
//! Series are derived data: rebuilt from the dataset on every read, never
//! stored.

use super::colors::Rgb;
use super::dataset::Dataset;
use super::error::Result;
use super::method::Method;

/// Marker shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkerSymbol {
    #[default]
    Circle,
    Square,
    TriangleUp,
}

impl MarkerSymbol {
    /// Parse from string value
    ///
    /// Validation happens in PropertyReader.get_enum()
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "square" => Self::Square,
            "triangle-up" => Self::TriangleUp,
            _ => Self::Circle,
        }
    }

    /// Symbol name understood by the charting front end
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Square => "square",
            Self::TriangleUp => "triangle-up",
        }
    }
}

/// Marker styling shared by every series of a view
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    pub symbol: MarkerSymbol,
    /// Marker diameter in pixels
    pub size: f64,
    pub outline_color: Rgb,
    pub outline_width: f64,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            symbol: MarkerSymbol::Circle,
            size: 12.0,
            outline_color: [255, 255, 255],
            outline_width: 1.0,
        }
    }
}

/// Points of one category under one method
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Category label as it appears in the dataset
    pub category: String,
    /// Legend name (capitalized category)
    pub name: String,
    /// Original sentence indices, ascending
    pub indices: Vec<usize>,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    /// Sentences, used as hover labels
    pub text: Vec<String>,
    pub color: Rgb,
    pub marker: MarkerStyle,
}

impl Series {
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// (x, y) pairs in index order
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

/// Build one series per category for `method`
///
/// Categories are visited in first-occurrence order and points keep their
/// original index order, so the series partition `0..dataset.len()`.
/// Fails with `MissingColor` if a category has no color.
pub fn compute_series(
    dataset: &Dataset,
    method: Method,
    marker: &MarkerStyle,
) -> Result<Vec<Series>> {
    let projection = dataset.projection(method);
    let categories = dataset.categories();

    dataset
        .category_levels()
        .into_iter()
        .map(|category| {
            let color = dataset.colors().color(category)?;
            let indices: Vec<usize> = categories
                .iter()
                .enumerate()
                .filter(|(_, c)| c.as_str() == category)
                .map(|(i, _)| i)
                .collect();

            Ok(Series {
                category: category.to_string(),
                name: display_name(category),
                x: indices.iter().map(|&i| projection.x[i]).collect(),
                y: indices.iter().map(|&i| projection.y[i]).collect(),
                text: indices
                    .iter()
                    .map(|&i| dataset.sentences()[i].clone())
                    .collect(),
                indices,
                color,
                marker: *marker,
            })
        })
        .collect()
}

/// Category name with its first letter capitalized
pub fn display_name(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
