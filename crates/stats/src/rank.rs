use html::{TagName, TagStream};
use std::collections::HashMap;
use std::fmt;

/// Number of start tags in the stream.
pub fn total_count(stream: &TagStream) -> usize {
    stream.len()
}

/// The `k` most frequent tag names of `stream`, most frequent first.
///
/// Tags with equal counts are listed in the order they first appear in the document.
pub fn top_k(stream: &TagStream, k: usize) -> RankedList {
    FrequencyTable::from_stream(stream).top_k(k)
}

/// Occurrence count per distinct tag name.
///
/// Invariant: `entries` holds each name once, in first-seen order, and `index` maps every
/// name to its slot in `entries`.
#[derive(Clone, Debug, Default)]
pub struct FrequencyTable {
    entries: Vec<(TagName, usize)>,
    index: HashMap<TagName, usize>,
}

impl FrequencyTable {
    pub fn from_stream(stream: &TagStream) -> Self {
        let mut table = Self::default();
        for name in stream {
            table.record(name);
        }
        table
    }

    fn record(&mut self, name: &TagName) {
        match self.index.get(name.as_str()) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name.clone(), 1));
            }
        }
    }

    /// Occurrences of `name`; zero when it never appeared.
    pub fn count(&self, name: &str) -> usize {
        self.index
            .get(name)
            .map_or(0, |&slot| self.entries[slot].1)
    }

    /// Number of distinct tag names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, equal to the length of the source stream.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&TagName, usize)> + '_ {
        self.entries.iter().map(|(name, count)| (name, *count))
    }

    pub fn top_k(&self, k: usize) -> RankedList {
        if k == 0 {
            return RankedList::default();
        }
        let mut entries: Vec<RankedTag> = self
            .iter()
            .map(|(name, count)| RankedTag {
                name: name.clone(),
                count,
            })
            .collect();
        // `sort_by` is stable, so ties stay in first-seen order.
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        entries.truncate(k);
        RankedList { entries }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankedTag {
    pub name: TagName,
    pub count: usize,
}

impl fmt::Display for RankedTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "('{}', {})", self.name, self.count)
    }
}

/// Tag names sorted by descending count, truncated to the requested size.
///
/// Renders as `[('a', 3), ('b', 2)]`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RankedList {
    entries: Vec<RankedTag>,
}

impl RankedList {
    pub fn as_slice(&self) -> &[RankedTag] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankedTag> {
        self.entries.iter()
    }

    pub fn get(&self, rank: usize) -> Option<&RankedTag> {
        self.entries.get(rank)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_pairs(&self) -> Vec<(&str, usize)> {
        self.entries
            .iter()
            .map(|entry| (entry.name.as_str(), entry.count))
            .collect()
    }
}

impl fmt::Display for RankedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{entry}")?;
        }
        f.write_str("]")
    }
}

impl<'a> IntoIterator for &'a RankedList {
    type Item = &'a RankedTag;
    type IntoIter = std::slice::Iter<'a, RankedTag>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
