use serde::{Deserialize, Serialize};

/// Free-form aroma tags. Insertion order is kept for display; duplicates are ignored.
///
/// Tags are compared exactly: no case folding and no trimming.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct AromaTags(Vec<String>);

impl AromaTags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `tag` unless it is already present. Returns whether the set changed.
    pub fn add(&mut self, tag: impl Into<String>) -> bool {
        let tag = tag.into();
        if self.contains(&tag) {
            return false;
        }
        self.0.push(tag);
        true
    }

    /// Removes the tag matching `tag` exactly. Returns whether the set changed.
    pub fn remove(&mut self, tag: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|t| t != tag);
        before != self.0.len()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Parses the comma-joined storage column. An empty column is an empty set.
    ///
    /// Embedded commas cannot be represented; a tag containing one comes back split.
    pub fn from_storage(joined: &str) -> Self {
        if joined.is_empty() {
            return Self::new();
        }
        Self(joined.split(',').map(str::to_string).collect())
    }

    pub fn to_storage(&self) -> String {
        self.0.join(",")
    }
}

impl<S: Into<String>> FromIterator<S> for AromaTags {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tags = AromaTags::new();
        for tag in iter {
            tags.add(tag);
        }
        tags
    }
}
