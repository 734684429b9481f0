use std::borrow::Borrow;
use std::fmt;

/// Name of an element type taken from a start-tag, e.g. `div` or `svg:rect`.
///
/// Invariant: ASCII letters are stored lowercased, so `<DIV>` and `<div>` yield
/// equal names. Non-ASCII bytes never reach a tag name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TagName(Box<str>);

impl TagName {
    pub fn new(name: &str) -> Self {
        if name.bytes().any(|b| b.is_ascii_uppercase()) {
            Self(name.to_ascii_lowercase().into_boxed_str())
        } else {
            Self(name.into())
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TagName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// `Box<str>` hashes like `str`, so map lookups by `&str` agree with lookups by `TagName`.
impl Borrow<str> for TagName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for TagName {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for TagName {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

/// Start-tag names of one document, in document order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagStream {
    names: Vec<TagName>,
}

impl TagStream {
    pub fn names(&self) -> &[TagName] {
        &self.names
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TagName> {
        self.names.iter()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<TagName> for TagStream {
    fn from_iter<I: IntoIterator<Item = TagName>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for TagStream {
    type Item = TagName;
    type IntoIter = std::vec::IntoIter<TagName>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.into_iter()
    }
}

impl<'a> IntoIterator for &'a TagStream {
    type Item = &'a TagName;
    type IntoIter = std::slice::Iter<'a, TagName>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}
