//! Border template catalog: named border images plus their cached interior
//! masks.
//!
//! A catalog is an explicit, constructed object passed by reference into the
//! pipeline, so tests can substitute synthetic borders without any global
//! state.

use std::sync::OnceLock;

use image::RgbaImage;

use crate::{
    borders,
    error::{BordureError, BordureResult},
    region::{InteriorMask, Point, compute_interior_mask},
};

/// A named border image with a lazily computed interior mask.
///
/// The image is never mutated after construction; the mask is computed at
/// most once (seeded at the geometric center) and then shared read-only, so
/// templates are safe to hand to parallel workers.
#[derive(Debug)]
pub struct BorderTemplate {
    name: String,
    image: RgbaImage,
    mask: OnceLock<InteriorMask>,
}

impl BorderTemplate {
    pub fn new(name: impl Into<String>, image: RgbaImage) -> Self {
        Self {
            name: name.into(),
            image,
            mask: OnceLock::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Interior mask, flood-filled from the template's center.
    pub fn interior_mask(&self) -> &InteriorMask {
        self.mask.get_or_init(|| {
            let (width, height) = self.image.dimensions();
            compute_interior_mask(&self.image, &[Point::new(width / 2, height / 2)])
        })
    }
}

/// Read-only set of border templates, sorted by name.
#[derive(Debug)]
pub struct Catalog {
    templates: Vec<BorderTemplate>,
}

impl Catalog {
    /// The compiled-in border set.
    pub fn builtin() -> BordureResult<Self> {
        Self::from_encoded(borders::BUILTIN.iter().copied())
    }

    /// Decode a table of (name, PNG bytes) entries.
    ///
    /// Any undecodable entry is fatal: the catalog fails to construct and no
    /// photo processing can start.
    pub fn from_encoded<'a>(
        entries: impl IntoIterator<Item = (&'a str, &'a [u8])>,
    ) -> BordureResult<Self> {
        let mut templates = Vec::new();
        for (name, bytes) in entries {
            let image = image::load_from_memory_with_format(bytes, image::ImageFormat::Png)
                .map_err(|source| BordureError::AssetCorrupt {
                    name: name.to_string(),
                    source,
                })?
                .to_rgba8();
            templates.push(BorderTemplate::new(name, image));
        }
        Ok(Self::from_templates(templates))
    }

    /// Build a catalog from already-decoded templates.
    pub fn from_templates(mut templates: Vec<BorderTemplate>) -> Self {
        templates.sort_by(|a, b| a.name.cmp(&b.name));
        Self { templates }
    }

    pub fn get(&self, name: &str) -> Option<&BorderTemplate> {
        self.templates.iter().find(|t| t.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BorderTemplate> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Materialize every mask up front, before any worker starts.
    pub fn precompute_masks(&self) {
        for template in &self.templates {
            let _ = template.interior_mask();
        }
    }
}
