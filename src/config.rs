//! View configuration from view properties
//!
//! Configuration is resolved from the properties defined in view.json. All
//! default values come from view.json; user overrides are read from an
//! optional JSON object file (see `PropertyReader::from_json_overrides`).

use crate::projection::view_properties::{PropertyReader, PropertyRegistry};
use crate::projection::{parse_hex_color, MarkerStyle, MarkerSymbol, Method, MethodDescriptor, Result};
use std::path::Path;
use tracing::{info, warn};

/// Chart-level configuration handed to the renderers
#[derive(Debug, Clone, PartialEq)]
pub struct ViewConfig {
    /// Method selected when the view opens
    pub default_method: Method,

    /// Chart title, `{name}` is replaced by the method display name
    pub title_template: String,

    /// Plot width in pixels
    pub width: u32,

    /// Plot height in pixels
    pub height: u32,

    /// Margin on every side of the plotting area, in pixels
    pub margin: u32,

    pub x_axis_label: String,
    pub y_axis_label: String,

    pub show_grid: bool,
    pub show_zeroline: bool,

    pub show_legend: bool,

    /// Legend anchor in paper coordinates (x, y) ∈ [0,1]²
    pub legend_position: (f64, f64),

    /// Marker shape, size and outline shared by every series
    pub marker: MarkerStyle,

    /// Show the interactive tool bar
    pub show_modebar: bool,

    /// Tool bar buttons to hide (box and lasso selection by default)
    pub modebar_buttons_remove: Vec<String>,

    /// Script URL of the charting library used by the HTML page
    pub plotly_src: String,
}

impl ViewConfig {
    /// Create config from view properties
    ///
    /// All default values come from view.json via PropertyReader.
    pub fn from_properties(props: &PropertyReader) -> Self {
        let default_method = Method::parse(&props.get_enum("method.default")).unwrap_or_default();

        let width = props.get_f64_in_range("plot.width", 100.0, 10000.0).round() as u32;
        let height = props.get_f64_in_range("plot.height", 100.0, 10000.0).round() as u32;
        let margin = props.get_f64_in_range("plot.margin", 0.0, 500.0).round() as u32;

        let outline_color = parse_hex_color(&props.get_string("point.outline.color"))
            .or_else(|| {
                warn!("Invalid point.outline.color, using default");
                props
                    .registry()
                    .get_default("point.outline.color")
                    .and_then(parse_hex_color)
            })
            .unwrap_or([255, 255, 255]);

        let marker = MarkerStyle {
            symbol: MarkerSymbol::parse(&props.get_enum("point.shape")),
            size: props.get_f64_in_range("point.size", 1.0, 100.0),
            outline_color,
            outline_width: props.get_f64_in_range("point.outline.width", 0.0, 20.0),
        };

        Self {
            default_method,
            title_template: props.get_string("plot.title.template"),
            width,
            height,
            margin,
            x_axis_label: props.get_string("axis.x.label"),
            y_axis_label: props.get_string("axis.y.label"),
            show_grid: props.get_bool("axis.show.grid"),
            show_zeroline: props.get_bool("axis.show.zeroline"),
            show_legend: props.get_bool("legend.show"),
            legend_position: props.get_coords("legend.position").unwrap_or((1.0, 0.5)),
            marker,
            show_modebar: props.get_bool("modebar.show"),
            modebar_buttons_remove: props.get_list("modebar.buttons.remove"),
            plotly_src: props.get_string("plotly.src"),
        }
    }

    /// Config with every property at its view.json default
    pub fn defaults() -> Result<Self> {
        let props = PropertyReader::defaults(PropertyRegistry::embedded()?);
        Ok(Self::from_properties(&props))
    }

    /// Config with overrides from an optional JSON file
    pub fn load(overrides: Option<&Path>) -> Result<Self> {
        let registry = PropertyRegistry::embedded()?;

        let props = match overrides {
            Some(path) => {
                let json = std::fs::read_to_string(path)?;
                info!("Loaded view configuration from {}", path.display());
                PropertyReader::from_json_overrides(registry, &json)?
            }
            None => PropertyReader::defaults(registry),
        };

        Ok(Self::from_properties(&props))
    }

    /// Chart title for a method
    pub fn title_for(&self, descriptor: &MethodDescriptor) -> String {
        self.title_template.replace("{name}", &descriptor.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::DescriptorRegistry;
    use std::io::Write;

    #[test]
    fn test_defaults_match_reference_chart() {
        let config = ViewConfig::defaults().unwrap();
        assert_eq!(config.default_method, Method::Tsne);
        assert_eq!((config.width, config.height), (900, 600));
        assert_eq!(config.margin, 50);
        assert_eq!(config.x_axis_label, "Dimension 1");
        assert_eq!(config.y_axis_label, "Dimension 2");
        assert!(!config.show_grid);
        assert!(!config.show_zeroline);
        assert!(config.show_legend);
        assert_eq!(config.legend_position, (1.0, 0.5));
        assert_eq!(config.marker, MarkerStyle::default());
        assert!(config.show_modebar);
        assert_eq!(config.modebar_buttons_remove, vec!["lasso2d", "select2d"]);
    }

    #[test]
    fn test_title_for_method() {
        let config = ViewConfig::defaults().unwrap();
        let descriptors = DescriptorRegistry::embedded().unwrap();
        assert_eq!(
            config.title_for(descriptors.get(Method::Pca)),
            "PCA Visualization of Sentence Embeddings"
        );
    }

    #[test]
    fn test_load_overrides_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r##"{{"method.default": "pca", "point.size": 8, "point.shape": "square",
                 "point.outline.color": "#000000", "plot.width": 50}}"##
        )
        .unwrap();

        let config = ViewConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.default_method, Method::Pca);
        assert_eq!(config.marker.size, 8.0);
        assert_eq!(config.marker.symbol, MarkerSymbol::Square);
        assert_eq!(config.marker.outline_color, [0, 0, 0]);
        // Out of range, falls back to default
        assert_eq!(config.width, 900);
    }

    #[test]
    fn test_invalid_outline_color_uses_default() {
        let registry = PropertyRegistry::embedded().unwrap();
        let props =
            PropertyReader::from_json_overrides(registry, r#"{"point.outline.color": "white"}"#)
                .unwrap();
        let config = ViewConfig::from_properties(&props);
        assert_eq!(config.marker.outline_color, [255, 255, 255]);
    }

    #[test]
    fn test_missing_override_file() {
        let err = ViewConfig::load(Some(Path::new("/nonexistent/view_config.json"))).unwrap_err();
        assert!(matches!(err, crate::projection::ProjectionError::Io(_)));
    }
}
