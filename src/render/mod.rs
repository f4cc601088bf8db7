//! Rendering module
//!
//! Turns the series of one projection into output artifacts. The charting
//! itself is delegated: the Plotly document is drawn by plotly.js, the static
//! snapshot by plotters.
//!
//! Structure:
//! - `figure.rs`: Plotly figure document (data, layout, config)
//! - `svg.rs`: static SVG scatter plot
//! - `html.rs`: self-contained interactive page with the method selector
//! - `page.rs`: static prose shown around the chart

pub mod figure;
pub mod html;
pub mod page;
pub mod svg;

pub use figure::{Figure, PlotlyJsonRenderer};
pub use html::render_page;
pub use page::PageContent;
pub use svg::SvgRenderer;

use crate::config::ViewConfig;
use crate::projection::{Method, MethodDescriptor, ProjectionError, Result, Series};
use std::fmt;
use std::str::FromStr;

/// Artifact format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// Static scatter plot
    Svg,
    /// Plotly figure document
    PlotlyJson,
    /// Interactive page covering every requested method
    Html,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::PlotlyJson => "json",
            OutputFormat::Html => "html",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            OutputFormat::Svg => "image/svg+xml",
            OutputFormat::PlotlyJson => "application/json",
            OutputFormat::Html => "text/html",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ProjectionError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "svg" => Ok(OutputFormat::Svg),
            "json" | "plotly" => Ok(OutputFormat::PlotlyJson),
            "html" => Ok(OutputFormat::Html),
            _ => Err(ProjectionError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Everything a renderer needs to draw one method
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub method: Method,
    pub descriptor: &'a MethodDescriptor,
    pub series: &'a [Series],
    pub config: &'a ViewConfig,
}

impl Scene<'_> {
    /// Chart title from the configured template
    pub fn title(&self) -> String {
        self.config.title_for(self.descriptor)
    }
}

/// Renders one method's series into an artifact
pub trait ViewRenderer {
    fn format(&self) -> OutputFormat;

    fn render(&self, scene: &Scene<'_>) -> Result<Vec<u8>>;
}

/// A rendered artifact held in memory until written out
#[derive(Debug, Clone)]
pub struct RenderedView {
    /// File name without directory
    pub filename: String,
    pub format: OutputFormat,
    /// Method of a single-method artifact; None for the page
    pub method: Option<Method>,
    pub bytes: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parse() {
        assert_eq!("svg".parse::<OutputFormat>().unwrap(), OutputFormat::Svg);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::PlotlyJson);
        assert_eq!("plotly".parse::<OutputFormat>().unwrap(), OutputFormat::PlotlyJson);
        assert_eq!("html".parse::<OutputFormat>().unwrap(), OutputFormat::Html);
        assert!(matches!(
            "png".parse::<OutputFormat>(),
            Err(ProjectionError::UnknownFormat(f)) if f == "png"
        ));
    }

    #[test]
    fn test_output_format_extension() {
        assert_eq!(OutputFormat::PlotlyJson.extension(), "json");
        assert_eq!(OutputFormat::Svg.mime_type(), "image/svg+xml");
    }
}
