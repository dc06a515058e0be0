use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// The `id` attribute of a page section, as named by nav link fragments.
///
/// Cloned freely between the layout, the scroll spy and the highlighter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct SectionId(Arc<str>);

impl SectionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse an in-page link target: `#about` gives `about`. Bare `#`, empty
    /// hrefs and links that leave the page give `None`.
    pub fn from_fragment(href: &str) -> Option<Self> {
        let id = href.strip_prefix('#')?;
        (!id.is_empty()).then(|| Self::from(id))
    }

    pub fn to_fragment(&self) -> String {
        format!("#{}", self.0)
    }
}

impl std::ops::Deref for SectionId {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for SectionId {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for SectionId {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl From<&str> for SectionId {
    fn from(s: &str) -> Self {
        SectionId(Arc::from(s))
    }
}

impl From<String> for SectionId {
    fn from(s: String) -> Self {
        SectionId(Arc::from(s))
    }
}

impl From<SectionId> for String {
    fn from(id: SectionId) -> Self {
        id.0.to_string()
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
