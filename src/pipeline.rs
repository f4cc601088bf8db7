//! Shared view generation pipeline
//!
//! Drives the projection controller through the requested methods and hands
//! each method's series to the renderers. Artifacts are returned in memory;
//! the binary decides where they go.
//!
//! The pipeline:
//! 1. Selects each requested method on one `ProjectionView`
//! 2. Computes the series of the active method
//! 3. Renders the per-method artifacts (SVG, Plotly JSON)
//! 4. Assembles the interactive page from every method's figure

use crate::config::ViewConfig;
use crate::projection::{Dataset, DescriptorRegistry, Method, ProjectionView};
use crate::render::html::PageView;
use crate::render::{
    render_page, Figure, OutputFormat, PageContent, PlotlyJsonRenderer, RenderedView, Scene,
    SvgRenderer, ViewRenderer,
};
use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name of the interactive page
pub const PAGE_FILENAME: &str = "projection_viewer.html";

/// Which methods to render, in which formats
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub methods: Vec<Method>,
    pub formats: Vec<OutputFormat>,
}

impl GenerateRequest {
    /// Build a request, dropping repeats and keeping first-seen order
    ///
    /// No methods means all three; no formats means the page only.
    pub fn new(
        methods: impl IntoIterator<Item = Method>,
        formats: impl IntoIterator<Item = OutputFormat>,
    ) -> Self {
        let mut request = Self {
            methods: Vec::new(),
            formats: Vec::new(),
        };
        for method in methods {
            if !request.methods.contains(&method) {
                request.methods.push(method);
            }
        }
        for format in formats {
            if !request.formats.contains(&format) {
                request.formats.push(format);
            }
        }
        if request.methods.is_empty() {
            request.methods = Method::ALL.to_vec();
        }
        if request.formats.is_empty() {
            request.formats.push(OutputFormat::Html);
        }
        request
    }
}

impl Default for GenerateRequest {
    fn default() -> Self {
        Self::new([], [])
    }
}

/// Output file name of a single-method artifact
pub fn artifact_filename(method: Method, format: OutputFormat) -> String {
    format!("projection_{}.{}", method.key(), format.extension())
}

/// Render every requested method in every requested format
///
/// # Returns
/// Per-method artifacts in method order, followed by the page if requested
pub fn generate(
    dataset: &Dataset,
    descriptors: &DescriptorRegistry,
    page: &PageContent,
    config: &ViewConfig,
    request: &GenerateRequest,
) -> Result<Vec<RenderedView>> {
    let renderers: Vec<Box<dyn ViewRenderer>> = request
        .formats
        .iter()
        .filter_map(|format| match format {
            OutputFormat::Svg => Some(Box::new(SvgRenderer) as Box<dyn ViewRenderer>),
            OutputFormat::PlotlyJson => Some(Box::new(PlotlyJsonRenderer) as Box<dyn ViewRenderer>),
            OutputFormat::Html => None,
        })
        .collect();
    let want_page = request.formats.contains(&OutputFormat::Html);

    let page_active = if request.methods.contains(&config.default_method) {
        config.default_method
    } else {
        request.methods.first().copied().unwrap_or_default()
    };

    info!(
        "Generating {} method(s) x {} format(s)",
        request.methods.len(),
        request.formats.len()
    );

    let mut view =
        ProjectionView::new(dataset, descriptors, config.default_method).with_marker(config.marker);
    let mut outputs = Vec::new();
    let mut page_views = Vec::new();
    let mut snapshot = None;

    for &method in &request.methods {
        view.select(method);
        let series = view
            .compute_series()
            .with_context(|| format!("Failed to build series for {}", method))?;
        let scene = Scene {
            method,
            descriptor: view.active_descriptor(),
            series: &series,
            config,
        };

        for renderer in &renderers {
            let format = renderer.format();
            let bytes = renderer
                .render(&scene)
                .with_context(|| format!("Failed to render {} as {}", method, format))?;
            debug!("{} {}: {} bytes", method, format, bytes.len());
            outputs.push(RenderedView {
                filename: artifact_filename(method, format),
                format,
                method: Some(method),
                bytes,
            });
        }

        if want_page {
            if method == page_active {
                snapshot = Some(
                    SvgRenderer
                        .render(&scene)
                        .with_context(|| format!("Failed to render page snapshot for {}", method))?,
                );
            }
            page_views.push(PageView {
                descriptor: view.active_descriptor(),
                figure: Figure::build(&scene),
            });
        }
    }

    if want_page {
        let html = render_page(page, &page_views, page_active, config, snapshot.as_deref())
            .context("Failed to render page")?;
        outputs.push(RenderedView {
            filename: PAGE_FILENAME.to_string(),
            format: OutputFormat::Html,
            method: None,
            bytes: html.into_bytes(),
        });
    }

    info!("Generated {} artifact(s)", outputs.len());
    Ok(outputs)
}

/// Write artifacts into `out_dir`, creating it if missing
pub fn write_all(views: &[RenderedView], out_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;

    let mut written = Vec::with_capacity(views.len());
    for view in views {
        let path = out_dir.join(&view.filename);
        fs::write(&path, &view.bytes)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Wrote {} ({}, {} bytes)", path.display(), view.format.mime_type(), view.bytes.len());
        written.push(path);
    }
    Ok(written)
}

/// Plain-text report of the active method: descriptor plus one line per series
pub fn describe_view(view: &ProjectionView<'_>) -> Result<String> {
    let descriptor = view.active_descriptor();
    let series = view
        .compute_series()
        .with_context(|| format!("Failed to build series for {}", view.active_method()))?;

    let mut out = String::new();
    writeln!(out, "{} ({})", descriptor.name, descriptor.key)?;
    writeln!(out, "{}", descriptor.description)?;
    writeln!(out, "Key insights:")?;
    for insight in &descriptor.insights {
        writeln!(out, "  - {}", insight)?;
    }
    writeln!(out, "Series:")?;
    for s in &series {
        let (x_min, x_max) = span(&s.x);
        let (y_min, y_max) = span(&s.y);
        writeln!(
            out,
            "  {:<8} {} points  color {}  x [{:.2}, {:.2}]  y [{:.2}, {:.2}]",
            s.name,
            s.len(),
            crate::projection::to_hex(s.color),
            x_min,
            x_max,
            y_min,
            y_max
        )?;
    }
    Ok(out)
}

fn span(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Inputs {
        dataset: Dataset,
        descriptors: DescriptorRegistry,
        page: PageContent,
        config: ViewConfig,
    }

    fn inputs() -> Inputs {
        Inputs {
            dataset: Dataset::reference().unwrap(),
            descriptors: DescriptorRegistry::embedded().unwrap(),
            page: PageContent::embedded().unwrap(),
            config: ViewConfig::defaults().unwrap(),
        }
    }

    fn run(request: &GenerateRequest) -> Vec<RenderedView> {
        let i = inputs();
        generate(&i.dataset, &i.descriptors, &i.page, &i.config, request).unwrap()
    }

    #[test]
    fn test_request_dedup_and_defaults() {
        let request = GenerateRequest::new(
            [Method::Umap, Method::Tsne, Method::Umap],
            [OutputFormat::Svg, OutputFormat::Svg],
        );
        assert_eq!(request.methods, vec![Method::Umap, Method::Tsne]);
        assert_eq!(request.formats, vec![OutputFormat::Svg]);

        let request = GenerateRequest::default();
        assert_eq!(request.methods, Method::ALL.to_vec());
        assert_eq!(request.formats, vec![OutputFormat::Html]);
    }

    #[test]
    fn test_generate_per_method_artifacts() {
        let request = GenerateRequest::new(
            [Method::Pca, Method::Umap],
            [OutputFormat::Svg, OutputFormat::PlotlyJson],
        );
        let views = run(&request);

        let names: Vec<&str> = views.iter().map(|v| v.filename.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "projection_pca.svg",
                "projection_pca.json",
                "projection_umap.svg",
                "projection_umap.json",
            ]
        );
        assert!(views.iter().all(|v| v.method.is_some()));

        let figure: serde_json::Value = serde_json::from_slice(&views[1].bytes).unwrap();
        assert_eq!(
            figure["layout"]["title"]["text"],
            "PCA Visualization of Sentence Embeddings"
        );
        assert_eq!(figure["data"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_generate_page_only_by_default() {
        let views = run(&GenerateRequest::default());
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].filename, PAGE_FILENAME);
        assert_eq!(views[0].method, None);

        let html = String::from_utf8(views[0].bytes.clone()).unwrap();
        assert_eq!(html.matches("data-method=\"").count(), 3);
        assert!(html.contains("const INITIAL = \"tsne\";"));
        assert!(html.contains("data:image/svg+xml;base64,"));
    }

    #[test]
    fn test_write_all_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let out_dir = dir.path().join("nested").join("out");
        let views = run(&GenerateRequest::new([Method::Tsne], [OutputFormat::Svg, OutputFormat::Html]));

        let written = write_all(&views, &out_dir).unwrap();
        assert_eq!(written.len(), 2);
        assert!(out_dir.join("projection_tsne.svg").is_file());
        assert!(out_dir.join(PAGE_FILENAME).is_file());

        let svg = fs::read_to_string(out_dir.join("projection_tsne.svg")).unwrap();
        assert!(svg.contains("<svg"));
    }

    #[test]
    fn test_describe_view() {
        let i = inputs();
        let mut view = ProjectionView::new(&i.dataset, &i.descriptors, Method::Tsne);
        view.select_method("pca").unwrap();

        let report = describe_view(&view).unwrap();
        assert!(report.starts_with("PCA (pca)\n"));
        assert_eq!(report.matches("\n  - ").count(), 5);
        assert!(report.contains("Music"));
        assert!(report.contains("Nature"));
        assert!(report.contains("5 points"));
    }
}
