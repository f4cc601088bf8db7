//! Plotly figure document
//!
//! Builds the `{data, layout, config}` document consumed by plotly.js. One
//! scatter trace per series; hover shows the sentence only, picked by the
//! nearest point; box and lasso selection are removed from the tool bar.

use super::{OutputFormat, Scene, ViewRenderer};
use crate::projection::{to_hex, Result, Series};
use serde::Serialize;

/// Hover label: the sentence text, without the trace-name box
const HOVER_TEMPLATE: &str = "%{text}<extra></extra>";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
    pub config: PlotConfig,
}

/// One scatter trace (one category)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    pub name: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub text: Vec<String>,
    pub mode: &'static str,
    #[serde(rename = "type")]
    pub trace_type: &'static str,
    pub marker: Marker,
    pub hovertemplate: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub size: f64,
    pub color: String,
    pub symbol: &'static str,
    pub line: MarkerLine,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerLine {
    pub color: String,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: Title,
    pub zeroline: bool,
    pub showgrid: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: Title,
    pub width: u32,
    pub height: u32,
    pub hovermode: &'static str,
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub showlegend: bool,
    pub legend: Legend,
    pub margin: Margin,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotConfig {
    pub responsive: bool,
    pub display_mode_bar: bool,
    pub mode_bar_buttons_to_remove: Vec<String>,
}

impl Trace {
    fn from_series(series: &Series) -> Self {
        Trace {
            name: series.name.clone(),
            x: series.x.clone(),
            y: series.y.clone(),
            text: series.text.clone(),
            mode: "markers",
            trace_type: "scatter",
            marker: Marker {
                size: series.marker.size,
                color: to_hex(series.color),
                symbol: series.marker.symbol.as_str(),
                line: MarkerLine {
                    color: to_hex(series.marker.outline_color),
                    width: series.marker.outline_width,
                },
            },
            hovertemplate: HOVER_TEMPLATE,
        }
    }
}

impl Figure {
    /// Figure for one method
    pub fn build(scene: &Scene<'_>) -> Self {
        let config = scene.config;
        let axis = |label: &str| Axis {
            title: Title {
                text: label.to_string(),
            },
            zeroline: config.show_zeroline,
            showgrid: config.show_grid,
        };

        Figure {
            data: scene.series.iter().map(Trace::from_series).collect(),
            layout: Layout {
                title: Title {
                    text: scene.title(),
                },
                width: config.width,
                height: config.height,
                hovermode: "closest",
                xaxis: axis(&config.x_axis_label),
                yaxis: axis(&config.y_axis_label),
                showlegend: config.show_legend,
                legend: Legend {
                    x: config.legend_position.0,
                    y: config.legend_position.1,
                },
                margin: Margin {
                    l: config.margin,
                    r: config.margin,
                    t: config.margin,
                    b: config.margin,
                },
            },
            config: PlotConfig {
                responsive: true,
                display_mode_bar: config.show_modebar,
                mode_bar_buttons_to_remove: config.modebar_buttons_remove.clone(),
            },
        }
    }
}

/// Writes the figure as pretty-printed JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct PlotlyJsonRenderer;

impl ViewRenderer for PlotlyJsonRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::PlotlyJson
    }

    fn render(&self, scene: &Scene<'_>) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(&Figure::build(scene))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ViewConfig;
    use crate::projection::{compute_series, Dataset, DescriptorRegistry, MarkerStyle, Method};
    use serde_json::Value;

    fn figure_json(method: Method) -> Value {
        let dataset = Dataset::reference().unwrap();
        let descriptors = DescriptorRegistry::embedded().unwrap();
        let config = ViewConfig::defaults().unwrap();
        let series = compute_series(&dataset, method, &MarkerStyle::default()).unwrap();
        let scene = Scene {
            method,
            descriptor: descriptors.get(method),
            series: &series,
            config: &config,
        };
        serde_json::from_slice(&PlotlyJsonRenderer.render(&scene).unwrap()).unwrap()
    }

    #[test]
    fn test_traces() {
        let fig = figure_json(Method::Tsne);
        let data = fig["data"].as_array().unwrap();
        assert_eq!(data.len(), 5);

        let music = &data[0];
        assert_eq!(music["name"], "Music");
        assert_eq!(music["mode"], "markers");
        assert_eq!(music["type"], "scatter");
        assert_eq!(music["hovertemplate"], "%{text}<extra></extra>");
        assert_eq!(music["x"][0], -15.2);
        assert_eq!(music["text"][0], "A man is playing a guitar on stage");
        assert_eq!(music["marker"]["color"], "#FF6B6B");
        assert_eq!(music["marker"]["size"], 12.0);
        assert_eq!(music["marker"]["symbol"], "circle");
        assert_eq!(music["marker"]["line"]["color"], "#FFFFFF");
        assert_eq!(music["marker"]["line"]["width"], 1.0);
    }

    #[test]
    fn test_layout_and_config() {
        let fig = figure_json(Method::Umap);
        let layout = &fig["layout"];
        assert_eq!(layout["title"]["text"], "UMAP Visualization of Sentence Embeddings");
        assert_eq!(layout["width"], 900);
        assert_eq!(layout["height"], 600);
        assert_eq!(layout["hovermode"], "closest");
        assert_eq!(layout["xaxis"]["title"]["text"], "Dimension 1");
        assert_eq!(layout["yaxis"]["title"]["text"], "Dimension 2");
        assert_eq!(layout["xaxis"]["zeroline"], false);
        assert_eq!(layout["yaxis"]["showgrid"], false);
        assert_eq!(layout["showlegend"], true);
        assert_eq!(layout["legend"]["x"], 1.0);
        assert_eq!(layout["legend"]["y"], 0.5);
        assert_eq!(layout["margin"]["l"], 50);

        let config = &fig["config"];
        assert_eq!(config["responsive"], true);
        assert_eq!(config["displayModeBar"], true);
        assert_eq!(
            config["modeBarButtonsToRemove"],
            serde_json::json!(["lasso2d", "select2d"])
        );
    }
}
