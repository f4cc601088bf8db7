//! Method descriptors
//!
//! Display name, narrative description and ordered insight list for each
//! projection method, embedded at compile time from `data/methods.json`.
//! The registry holds exactly one descriptor per `Method`, so lookup is total.

use super::error::{ProjectionError, Result};
use super::method::Method;
use serde::{Deserialize, Serialize};

/// Embedded method descriptors
const METHODS_JSON: &str = include_str!("../../data/methods.json");

/// Static description of one projection method
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    pub key: Method,
    /// Display name, e.g. "t-SNE"
    pub name: String,
    pub description: String,
    /// Ordered insight strings shown under "Key Insights"
    pub insights: Vec<String>,
}

/// One descriptor per method
#[derive(Debug, Clone)]
pub struct DescriptorRegistry {
    /// Indexed by `Method::index()`
    descriptors: [MethodDescriptor; 3],
}

impl DescriptorRegistry {
    /// Registry built from the embedded `data/methods.json`
    pub fn embedded() -> Result<Self> {
        Self::from_json(METHODS_JSON)
    }

    /// Parse a JSON array of descriptors
    ///
    /// Every method must be described exactly once.
    pub fn from_json(json: &str) -> Result<Self> {
        let definitions: Vec<MethodDescriptor> = serde_json::from_str(json)?;

        let mut slots: [Option<MethodDescriptor>; 3] = [None, None, None];
        for def in definitions {
            let slot = &mut slots[def.key.index()];
            if slot.is_some() {
                return Err(ProjectionError::Data(format!(
                    "Duplicate descriptor for method '{}'",
                    def.key
                )));
            }
            *slot = Some(def);
        }

        let [tsne, pca, umap] = slots;
        Ok(Self {
            descriptors: [
                tsne.ok_or(ProjectionError::MissingDescriptor(Method::Tsne))?,
                pca.ok_or(ProjectionError::MissingDescriptor(Method::Pca))?,
                umap.ok_or(ProjectionError::MissingDescriptor(Method::Umap))?,
            ],
        })
    }

    /// Descriptor of a method
    pub fn get(&self, method: Method) -> &MethodDescriptor {
        &self.descriptors[method.index()]
    }

    /// All descriptors in selector order
    pub fn iter(&self) -> impl Iterator<Item = &MethodDescriptor> {
        self.descriptors.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_registry_loads() {
        let registry = DescriptorRegistry::embedded().unwrap();
        assert_eq!(registry.get(Method::Tsne).name, "t-SNE");
        assert_eq!(registry.get(Method::Pca).name, "PCA");
        assert_eq!(registry.get(Method::Umap).name, "UMAP");

        for descriptor in registry.iter() {
            assert_eq!(descriptor.insights.len(), 5);
            assert!(!descriptor.description.is_empty());
        }
    }

    #[test]
    fn test_selector_order() {
        let registry = DescriptorRegistry::embedded().unwrap();
        let keys: Vec<Method> = registry.iter().map(|d| d.key).collect();
        assert_eq!(keys, Method::ALL.to_vec());
    }

    #[test]
    fn test_missing_descriptor() {
        let json = r#"[
            {"key": "tsne", "name": "t-SNE", "description": "", "insights": []},
            {"key": "umap", "name": "UMAP", "description": "", "insights": []}
        ]"#;
        let err = DescriptorRegistry::from_json(json).unwrap_err();
        assert!(matches!(err, ProjectionError::MissingDescriptor(Method::Pca)));
    }

    #[test]
    fn test_duplicate_descriptor() {
        let json = r#"[
            {"key": "pca", "name": "PCA", "description": "", "insights": []},
            {"key": "pca", "name": "PCA", "description": "", "insights": []}
        ]"#;
        assert!(matches!(
            DescriptorRegistry::from_json(json),
            Err(ProjectionError::Data(_))
        ));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let json = r#"[{"key": "lda", "name": "LDA", "description": "", "insights": []}]"#;
        assert!(matches!(
            DescriptorRegistry::from_json(json),
            Err(ProjectionError::Json(_))
        ));
    }
}
