//! Section registry
//!
//! The ordered list of page sections shared by the scroll sampler and the
//! navigation dispatcher. Both read the same registry, so they always agree on
//! which ids exist and in which order.
//!
//! ```rust
//! use folio_core::{Bounds, SectionRegistry, SharedAnchor};
//!
//! // Geometry that the host fills in after layout
//! let about = SharedAnchor::unmounted();
//!
//! let registry = SectionRegistry::builder()
//!     .section("hero", Bounds::vertical(0.0, 800.0))
//!     .section("about", about.clone())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(registry.geometry("about"), None);
//! about.set(Bounds::vertical(800.0, 600.0));
//! assert_eq!(registry.geometry("about").map(|b| b.top()), Some(800.0));
//! ```

use std::borrow::Borrow;
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::bounds::Bounds;
use crate::error::{NavigationError, Result};

/// Stable identifier of a page section (e.g. `"hero"`, `"about"`)
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for SectionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SectionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SectionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for SectionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl PartialEq<str> for SectionId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SectionId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Opaque handle to a section's rendered root element
///
/// Only used to read the element's vertical offset and height. `None` means
/// the element is not mounted (or not laid out yet).
pub trait SectionAnchor {
    fn bounds(&self) -> Option<Bounds>;
}

impl SectionAnchor for Bounds {
    fn bounds(&self) -> Option<Bounds> {
        Some(*self)
    }
}

impl SectionAnchor for Option<Bounds> {
    fn bounds(&self) -> Option<Bounds> {
        *self
    }
}

/// Anchor whose geometry is written by the layout pass and read by the sampler
///
/// Cloning shares the same slot. Confined to the UI thread.
#[derive(Clone, Debug, Default)]
pub struct SharedAnchor {
    slot: Rc<Cell<Option<Bounds>>>,
}

impl SharedAnchor {
    /// An anchor with no geometry yet
    pub fn unmounted() -> Self {
        Self::default()
    }

    pub fn mounted(bounds: Bounds) -> Self {
        let anchor = Self::default();
        anchor.set(bounds);
        anchor
    }

    pub fn set(&self, bounds: Bounds) {
        self.slot.set(Some(bounds));
    }

    pub fn unmount(&self) {
        self.slot.set(None);
    }
}

impl SectionAnchor for SharedAnchor {
    fn bounds(&self) -> Option<Bounds> {
        self.slot.get()
    }
}

/// Ordered, id-unique list of sections in top-to-bottom reading order
pub struct SectionRegistry {
    sections: IndexMap<SectionId, Box<dyn SectionAnchor>>,
}

impl SectionRegistry {
    pub fn builder() -> SectionRegistryBuilder {
        SectionRegistryBuilder::default()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// The first section in reading order
    pub fn first(&self) -> Option<&SectionId> {
        self.sections.get_index(0).map(|(id, _)| id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.sections.contains_key(id)
    }

    /// Look up the registered id (the registry's own copy) for `id`
    pub fn get(&self, id: &str) -> Option<&SectionId> {
        self.sections.get_key_value(id).map(|(id, _)| id)
    }

    /// Position of `id` in reading order
    pub fn position(&self, id: &str) -> Option<usize> {
        self.sections.get_index_of(id)
    }

    /// Current geometry of a section, `None` if unknown or unmounted
    pub fn geometry(&self, id: &str) -> Option<Bounds> {
        self.sections.get(id).and_then(|anchor| anchor.bounds())
    }

    /// Section ids in reading order
    pub fn ids(&self) -> impl Iterator<Item = &SectionId> {
        self.sections.keys()
    }

    /// Sections with their current geometry, in reading order
    pub fn iter(&self) -> impl Iterator<Item = (&SectionId, Option<Bounds>)> {
        self.sections
            .iter()
            .map(|(id, anchor)| (id, anchor.bounds()))
    }
}

impl fmt::Debug for SectionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Builder for [`SectionRegistry`]
#[derive(Default)]
pub struct SectionRegistryBuilder {
    sections: IndexMap<SectionId, Box<dyn SectionAnchor>>,
    duplicate: Option<SectionId>,
}

impl SectionRegistryBuilder {
    /// Append a section after the ones already added
    pub fn section(
        mut self,
        id: impl Into<SectionId>,
        anchor: impl SectionAnchor + 'static,
    ) -> Self {
        self.push(id, anchor);
        self
    }

    /// Append a section without consuming the builder
    pub fn push(&mut self, id: impl Into<SectionId>, anchor: impl SectionAnchor + 'static) {
        let id = id.into();
        if self.sections.contains_key(&id) {
            if self.duplicate.is_none() {
                self.duplicate = Some(id);
            }
            return;
        }
        self.sections.insert(id, Box::new(anchor));
    }

    pub fn build(self) -> Result<SectionRegistry> {
        if let Some(id) = self.duplicate {
            return Err(NavigationError::DuplicateSection(id));
        }
        if self.sections.is_empty() {
            return Err(NavigationError::EmptyRegistry);
        }
        Ok(SectionRegistry {
            sections: self.sections,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_keeps_reading_order() {
        let registry = SectionRegistry::builder()
            .section("hero", Bounds::vertical(0.0, 800.0))
            .section("about", Bounds::vertical(800.0, 600.0))
            .section("skills", Bounds::vertical(1400.0, 700.0))
            .build()
            .unwrap();

        let ids: Vec<&str> = registry.ids().map(SectionId::as_str).collect();
        assert_eq!(ids, vec!["hero", "about", "skills"]);
        assert_eq!(registry.first().map(SectionId::as_str), Some("hero"));
        assert_eq!(registry.position("skills"), Some(2));
        assert!(!registry.contains("footer"));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = SectionRegistry::builder()
            .section("hero", Bounds::vertical(0.0, 800.0))
            .section("hero", Bounds::vertical(800.0, 600.0))
            .build()
            .unwrap_err();
        assert_eq!(err, NavigationError::DuplicateSection("hero".into()));
    }

    #[test]
    fn test_empty_registry_rejected() {
        let err = SectionRegistry::builder().build().unwrap_err();
        assert_eq!(err, NavigationError::EmptyRegistry);
    }

    #[test]
    fn test_shared_anchor_updates_geometry() {
        let anchor = SharedAnchor::unmounted();
        let registry = SectionRegistry::builder()
            .section("contact", anchor.clone())
            .build()
            .unwrap();

        assert_eq!(registry.geometry("contact"), None);
        anchor.set(Bounds::vertical(3000.0, 500.0));
        assert_eq!(registry.geometry("contact"), Some(Bounds::vertical(3000.0, 500.0)));
        anchor.unmount();
        assert_eq!(registry.geometry("contact"), None);
    }

    #[test]
    fn test_section_id_serializes_as_string() {
        #[derive(Serialize, Deserialize)]
        struct Doc {
            target: SectionId,
        }

        let doc: Doc = toml::from_str(r#"target = "skills""#).unwrap();
        assert_eq!(doc.target, "skills");
    }
}
