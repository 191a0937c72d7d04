//! Material variants and the ordered material catalog

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// A surface-appearance description consumed by the renderer collaborator
///
/// Materials are immutable once constructed and shared by reference
/// (`Arc<Material>`) among any scene nodes currently using them, so they can
/// be swapped between nodes without synchronization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub name: String,
    pub base_color: [f32; 4],
    /// Key of the texture to sample, resolved by the renderer; texture
    /// decoding is outside the core.
    pub texture: Option<String>,
}

impl Material {
    /// Create an untextured white material
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_color: [1.0, 1.0, 1.0, 1.0],
            texture: None,
        }
    }

    /// Create a material sampling the given texture
    pub fn textured(name: impl Into<String>, texture: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_color: [1.0, 1.0, 1.0, 1.0],
            texture: Some(texture.into()),
        }
    }

    /// Wrap the material for sharing across scene nodes
    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

/// A named material variant: a human-readable label and the material it
/// applies
#[derive(Debug, Clone)]
pub struct MaterialVariant {
    pub label: String,
    pub material: Arc<Material>,
}

/// An ordered collection of material variants
///
/// Order is significant only for UI presentation, not semantics.
#[derive(Debug, Clone, Default)]
pub struct MaterialCatalog {
    variants: Vec<MaterialVariant>,
}

impl MaterialCatalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self {
            variants: Vec::new(),
        }
    }

    /// Append a variant to the catalog
    pub fn push(&mut self, label: impl Into<String>, material: Arc<Material>) {
        self.variants.push(MaterialVariant {
            label: label.into(),
            material,
        });
    }

    /// Get a variant by presentation index
    pub fn get(&self, index: usize) -> Option<&MaterialVariant> {
        self.variants.get(index)
    }

    /// Look up a variant by its label
    pub fn by_label(&self, label: &str) -> Option<&MaterialVariant> {
        self.variants.iter().find(|v| v.label == label)
    }

    /// Number of variants in the catalog
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Iterate over the variants in presentation order
    pub fn iter(&self) -> std::slice::Iter<'_, MaterialVariant> {
        self.variants.iter()
    }

    /// Iterate over the variant labels in presentation order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.variants.iter().map(|v| v.label.as_str())
    }
}

impl<'a> IntoIterator for &'a MaterialCatalog {
    type Item = &'a MaterialVariant;
    type IntoIter = std::slice::Iter<'a, MaterialVariant>;

    fn into_iter(self) -> Self::IntoIter {
        self.variants.iter()
    }
}
