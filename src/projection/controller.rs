//! Projection view controller
//!
//! Owns the only mutable state of the viewer: which projection method is
//! active. The dataset and descriptors are borrowed, immutable inputs; series
//! are derived from them on every read.

use super::dataset::Dataset;
use super::descriptors::{DescriptorRegistry, MethodDescriptor};
use super::error::Result;
use super::method::Method;
use super::series::{compute_series, MarkerStyle, Series};
use tracing::{debug, warn};

/// Active-method selection over a static dataset
#[derive(Debug, Clone)]
pub struct ProjectionView<'a> {
    dataset: &'a Dataset,
    descriptors: &'a DescriptorRegistry,
    marker: MarkerStyle,
    active: Method,
}

impl<'a> ProjectionView<'a> {
    /// Create a view with `initial` selected and the default marker style
    pub fn new(dataset: &'a Dataset, descriptors: &'a DescriptorRegistry, initial: Method) -> Self {
        Self {
            dataset,
            descriptors,
            marker: MarkerStyle::default(),
            active: initial,
        }
    }

    /// Use `marker` for every computed series
    pub fn with_marker(mut self, marker: MarkerStyle) -> Self {
        self.marker = marker;
        self
    }

    /// Select a method by key
    ///
    /// Unknown keys are rejected and leave the current selection unchanged.
    pub fn select_method(&mut self, key: &str) -> Result<Method> {
        let method = Method::parse(key).inspect_err(|e| warn!("Rejected selection: {}", e))?;
        self.select(method);
        Ok(method)
    }

    /// Select a method
    pub fn select(&mut self, method: Method) {
        if method != self.active {
            debug!("Switching projection {} -> {}", self.active, method);
        }
        self.active = method;
    }

    pub fn active_method(&self) -> Method {
        self.active
    }

    /// Descriptor of the active method
    pub fn active_descriptor(&self) -> &'a MethodDescriptor {
        self.descriptors.get(self.active)
    }

    /// One series per category for the active method
    pub fn compute_series(&self) -> Result<Vec<Series>> {
        compute_series(self.dataset, self.active, &self.marker)
    }

    pub fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    pub fn marker(&self) -> &MarkerStyle {
        &self.marker
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::error::ProjectionError;

    fn fixtures() -> (Dataset, DescriptorRegistry) {
        (
            Dataset::reference().unwrap(),
            DescriptorRegistry::embedded().unwrap(),
        )
    }

    #[test]
    fn test_select_pca_descriptor() {
        let (dataset, descriptors) = fixtures();
        let mut view = ProjectionView::new(&dataset, &descriptors, Method::Tsne);

        assert_eq!(view.select_method("pca").unwrap(), Method::Pca);
        let descriptor = view.active_descriptor();
        assert_eq!(descriptor.name, "PCA");
        assert_eq!(descriptor.insights.len(), 5);
    }

    #[test]
    fn test_unknown_key_keeps_selection() {
        let (dataset, descriptors) = fixtures();
        let mut view = ProjectionView::new(&dataset, &descriptors, Method::Umap);

        let err = view.select_method("lda").unwrap_err();
        assert!(matches!(err, ProjectionError::UnknownMethod(k) if k == "lda"));
        assert_eq!(view.active_method(), Method::Umap);
    }

    #[test]
    fn test_switching_changes_only_coordinates() {
        let (dataset, descriptors) = fixtures();
        let before = dataset.clone();
        let mut view = ProjectionView::new(&dataset, &descriptors, Method::Pca);

        view.select_method("tsne").unwrap();
        let tsne = view.compute_series().unwrap();
        view.select_method("umap").unwrap();
        let umap = view.compute_series().unwrap();

        assert_eq!(view.dataset(), &before);
        assert_eq!(tsne.len(), umap.len());
        for (a, b) in tsne.iter().zip(&umap) {
            assert_eq!(a.name, b.name);
            assert_eq!(a.indices, b.indices);
            assert_eq!(a.text, b.text);
            assert_eq!(a.color, b.color);
            assert_ne!(a.x, b.x);
            assert_ne!(a.y, b.y);
        }
        assert_eq!(umap[0].x, vec![3.2, 3.1, 3.4, 3.0, 3.3]);
    }

    #[test]
    fn test_series_follow_selection() {
        let (dataset, descriptors) = fixtures();
        let mut view = ProjectionView::new(&dataset, &descriptors, Method::default());
        assert_eq!(view.active_method(), Method::Tsne);
        assert_eq!(view.active_descriptor().name, "t-SNE");

        view.select(Method::Pca);
        let series = view.compute_series().unwrap();
        assert_eq!(series[4].name, "Nature");
        assert_eq!(series[4].x, vec![2.2, 2.5, 2.1, 2.4, 2.3]);
        assert_eq!(series[4].y, vec![-2.2, -2.5, -2.1, -2.4, -2.3]);
    }

    #[test]
    fn test_marker_style_is_applied() {
        let (dataset, descriptors) = fixtures();
        let marker = MarkerStyle {
            size: 20.0,
            ..MarkerStyle::default()
        };
        let view = ProjectionView::new(&dataset, &descriptors, Method::Tsne).with_marker(marker);
        assert!(view.compute_series().unwrap().iter().all(|s| s.marker.size == 20.0));
    }
}
