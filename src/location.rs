//! Asset paths relative to the hosting page.
//!
//! Pages either live at the site root or under a `pages/` directory; assets
//! (data files, covers, icons) always live at the site root.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

/// Match the last segment of a path (`/foo.html`).
static LAST_SEGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/[^/]+$").expect("invalid last segment regex"));

/// Location of the page being rendered.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PageLocation {
    /// Path of the page (e.g. `/site/pages/anime.html`).
    path: String,
}

impl PageLocation {
    /// Initializes a location from a page path.
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Resolves an asset path, relative to the site root.
    pub fn resolve(&self, relative: &str) -> String {
        self.site_root().map_or_else(
            || relative.to_owned(),
            |root| format!("{root}/{relative}"),
        )
    }

    /// Resolves an icon file name.
    pub fn resolve_icon(&self, name: &str) -> String {
        self.site_root().map_or_else(
            || format!("icons/{name}"),
            |root| format!("{root}/icons/{name}"),
        )
    }

    /// Returns the site root when the page lives under `pages/`.
    fn site_root(&self) -> Option<String> {
        if !self.path.contains("/pages/") {
            return None;
        }

        let path = self.path.replacen("/pages", "", 1);
        Some(LAST_SEGMENT.replace(&path, "").into_owned())
    }
}

impl From<&Url> for PageLocation {
    fn from(value: &Url) -> Self {
        Self::new(value.path())
    }
}
