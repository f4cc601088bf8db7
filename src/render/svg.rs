//! Static SVG scatter plot
//!
//! Draws the series of one method with plotters. There is no hover here:
//! the SVG is the snapshot, the Plotly figure is the interactive view.

use super::{OutputFormat, Scene, ViewRenderer};
use crate::projection::{MarkerSymbol, ProjectionError, Result, Rgb, Series};
use plotters::prelude::*;
use std::ops::Range;
use tracing::debug;

/// Fraction of the data span added on each side of an axis
const AXIS_PADDING: f64 = 0.08;

#[derive(Debug, Clone, Copy, Default)]
pub struct SvgRenderer;

impl ViewRenderer for SvgRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Svg
    }

    fn render(&self, scene: &Scene<'_>) -> Result<Vec<u8>> {
        let mut svg = String::new();
        draw_scatter(scene, &mut svg).map_err(|e| ProjectionError::Render(e.to_string()))?;
        debug!("SVG for {}: {} bytes", scene.method, svg.len());
        Ok(svg.into_bytes())
    }
}

fn rgb(color: Rgb) -> RGBColor {
    RGBColor(color[0], color[1], color[2])
}

/// Padded [min, max] of a set of values, (-1, 1) when empty
fn axis_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });

    if !min.is_finite() || !max.is_finite() {
        return -1.0..1.0;
    }

    let span = max - min;
    let pad = if span > 0.0 { span * AXIS_PADDING } else { 1.0 };
    (min - pad)..(max + pad)
}

/// Map a paper-coordinate legend anchor onto plotters' nine label positions
fn legend_position((x, y): (f64, f64)) -> SeriesLabelPosition {
    let column = if x < 1.0 / 3.0 {
        0
    } else if x < 2.0 / 3.0 {
        1
    } else {
        2
    };
    let row = if y > 2.0 / 3.0 {
        0
    } else if y > 1.0 / 3.0 {
        1
    } else {
        2
    };

    match (row, column) {
        (0, 0) => SeriesLabelPosition::UpperLeft,
        (0, 1) => SeriesLabelPosition::UpperMiddle,
        (0, _) => SeriesLabelPosition::UpperRight,
        (1, 0) => SeriesLabelPosition::MiddleLeft,
        (1, 1) => SeriesLabelPosition::MiddleMiddle,
        (1, _) => SeriesLabelPosition::MiddleRight,
        (_, 0) => SeriesLabelPosition::LowerLeft,
        (_, 1) => SeriesLabelPosition::LowerMiddle,
        _ => SeriesLabelPosition::LowerRight,
    }
}

fn draw_scatter(
    scene: &Scene<'_>,
    out: &mut String,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let config = scene.config;
    let series: &[Series] = scene.series;

    let x_range = axis_range(series.iter().flat_map(|s| s.x.iter().copied()));
    let y_range = axis_range(series.iter().flat_map(|s| s.y.iter().copied()));

    let root = SVGBackend::with_string(out, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(scene.title(), ("sans-serif", 22).into_font())
        .margin(config.margin)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_range.clone(), y_range.clone())?;

    {
        let mut mesh = chart.configure_mesh();
        mesh.x_desc(config.x_axis_label.as_str())
            .y_desc(config.y_axis_label.as_str());
        if !config.show_grid {
            mesh.disable_mesh();
        }
        mesh.draw()?;
    }

    if config.show_zeroline {
        let zero_style = BLACK.mix(0.4).stroke_width(1);
        if x_range.contains(&0.0) {
            chart.draw_series(std::iter::once(PathElement::new(
                vec![(0.0, y_range.start), (0.0, y_range.end)],
                zero_style,
            )))?;
        }
        if y_range.contains(&0.0) {
            chart.draw_series(std::iter::once(PathElement::new(
                vec![(x_range.start, 0.0), (x_range.end, 0.0)],
                zero_style,
            )))?;
        }
    }

    for s in series {
        let fill = rgb(s.color);
        let radius = (s.marker.size / 2.0).max(1.0).round() as i32;
        let points: Vec<(f64, f64)> = s.points().collect();

        let fill_style = fill.filled();
        let anno = match s.marker.symbol {
            MarkerSymbol::Circle => {
                chart.draw_series(points.iter().map(|&p| Circle::new(p, radius, fill_style)))?
            }
            MarkerSymbol::Square => chart.draw_series(points.iter().map(|&p| {
                EmptyElement::at(p)
                    + Rectangle::new([(-radius, -radius), (radius, radius)], fill_style)
            }))?,
            MarkerSymbol::TriangleUp => chart.draw_series(
                points
                    .iter()
                    .map(|&p| TriangleMarker::new(p, radius, fill_style)),
            )?,
        };
        if config.show_legend {
            anno.label(s.name.clone())
                .legend(move |(x, y)| Circle::new((x, y), 5, fill.filled()));
        }

        let outline_width = s.marker.outline_width.round() as u32;
        if outline_width > 0 {
            let outline_style = rgb(s.marker.outline_color).stroke_width(outline_width);
            match s.marker.symbol {
                MarkerSymbol::Circle => {
                    chart.draw_series(points.iter().map(|&p| Circle::new(p, radius, outline_style)))?;
                }
                MarkerSymbol::Square => {
                    chart.draw_series(points.iter().map(|&p| {
                        EmptyElement::at(p)
                            + Rectangle::new([(-radius, -radius), (radius, radius)], outline_style)
                    }))?;
                }
                MarkerSymbol::TriangleUp => {
                    chart.draw_series(
                        points
                            .iter()
                            .map(|&p| TriangleMarker::new(p, radius, outline_style)),
                    )?;
                }
            }
        }
    }

    if config.show_legend {
        chart
            .configure_series_labels()
            .position(legend_position(config.legend_position))
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()?;
    }

    root.present()?;
    Ok(())
}
