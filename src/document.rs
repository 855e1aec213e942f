//! The page hosting the gallery.

use crate::{
    fs, DetailPresenter, Gallery, PageLocation, GRID_SELECTOR,
    MODAL_CONTENT_SELECTOR, MODAL_SELECTOR,
};
use eyre::{eyre, Result, WrapErr};
use kuchiki::{traits::*, NodeRef, Selectors};
use std::path::Path;

/// Page used when no template is provided.
const DEFAULT_TEMPLATE: &str = include_str!("../assets/index.html");

/// An HTML page, with its gallery and detail sinks.
pub struct Document {
    /// Parsed page.
    root: NodeRef,
}

impl Document {
    /// Parses a page.
    pub fn parse(html: &str) -> Self {
        Self {
            root: kuchiki::parse_html().one(html),
        }
    }

    /// Loads a page template from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let html = std::fs::read_to_string(path)
            .with_context(|| format!("read template {}", path.display()))?;

        Ok(Self::parse(&html))
    }

    /// Returns the built-in page.
    pub fn builtin() -> Self {
        Self::parse(DEFAULT_TEMPLATE)
    }

    /// Returns the gallery bound to the page grid.
    pub fn gallery(&self) -> Result<Gallery> {
        self.find(&GRID_SELECTOR, "grid").map(Gallery::new)
    }

    /// Returns the detail presenter bound to the page overlay.
    pub fn presenter(&self, location: PageLocation) -> Result<DetailPresenter> {
        let overlay = self.find(&MODAL_SELECTOR, "modal")?;
        let content = MODAL_CONTENT_SELECTOR
            .filter(overlay.descendants().elements())
            .next()
            .ok_or_else(|| eyre!("look for modal content"))?
            .as_node()
            .clone();

        Ok(DetailPresenter::new(overlay, content, location))
    }

    /// Serializes the page.
    pub fn to_html(&self) -> String {
        self.root.to_string()
    }

    /// Writes the page to `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write_atomically(path, self.to_html().as_bytes())
            .context("save page")
    }

    fn find(&self, selector: &Selectors, name: &str) -> Result<NodeRef> {
        selector
            .filter(self.root.descendants().elements())
            .next()
            .map(|element| element.as_node().clone())
            .ok_or_else(|| eyre!("look for {name} in page"))
    }
}
