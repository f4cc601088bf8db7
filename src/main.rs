//! Projection viewer - command-line entry point
//!
//! Renders the precomputed 2-D projections of the sentence embeddings as a
//! self-contained interactive page, static SVG snapshots or Plotly figure
//! documents.
//!
//! Usage:
//!     projection_viewer                              # projection_viewer.html, all methods
//!     projection_viewer -m pca -f svg -f json -o out
//!     projection_viewer --describe -m umap
//!     projection_viewer -c view_overrides.json

use anyhow::{Context, Result};
use clap::Parser;
use projection_viewer::config::ViewConfig;
use projection_viewer::pipeline::{self, GenerateRequest};
use projection_viewer::projection::{Dataset, DescriptorRegistry, Method, ProjectionView};
use projection_viewer::render::{OutputFormat, PageContent};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "projection_viewer")]
#[command(about = "Compare t-SNE, PCA and UMAP projections of sentence embeddings")]
#[command(version)]
struct Args {
    /// Method to render (tsne, pca, umap); repeat for several, all by default
    #[arg(short = 'm', long = "method")]
    methods: Vec<Method>,

    /// Output format (svg, json, html); repeat for several, html by default
    #[arg(short = 'f', long = "format")]
    formats: Vec<OutputFormat>,

    /// Output directory, created if missing
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// JSON object of view property overrides
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the descriptor and series summary of each method instead of writing files
    #[arg(long)]
    describe: bool,

    /// Log level (debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Projection viewer v{}", env!("CARGO_PKG_VERSION"));

    let config = ViewConfig::load(args.config.as_deref()).context("Failed to load view configuration")?;
    let dataset = Dataset::reference().context("Failed to load embedded dataset")?;
    let descriptors = DescriptorRegistry::embedded().context("Failed to load method descriptors")?;
    info!(
        "Dataset: {} sentences, {} categories",
        dataset.len(),
        dataset.category_levels().len()
    );

    let request = GenerateRequest::new(args.methods, args.formats);

    if args.describe {
        let mut view = ProjectionView::new(&dataset, &descriptors, config.default_method)
            .with_marker(config.marker);
        for (i, &method) in request.methods.iter().enumerate() {
            view.select(method);
            if i > 0 {
                println!();
            }
            print!("{}", pipeline::describe_view(&view)?);
        }
        return Ok(());
    }

    let page = PageContent::embedded().context("Failed to load page content")?;
    let views = pipeline::generate(&dataset, &descriptors, &page, &config, &request)?;
    let written = pipeline::write_all(&views, &args.out_dir)?;

    info!("Done: {} file(s) in {}", written.len(), args.out_dir.display());
    Ok(())
}
