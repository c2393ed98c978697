//! Result sequence type for catalog searches.

use crate::models::package::PackageMatch;

/// A finite, single-pass sequence of search results.
///
/// The underlying engine call materializes matches eagerly; this wrapper
/// exposes them as a consuming iterator, so one pass drains the sequence.
/// A fresh query is a fresh `search` call on the handle.
pub struct SearchMatches {
    inner: std::vec::IntoIter<PackageMatch>,
}

impl SearchMatches {
    pub(crate) fn new(matches: Vec<PackageMatch>) -> Self {
        Self {
            inner: matches.into_iter(),
        }
    }

    /// Number of matches not yet consumed
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.len() == 0
    }
}

impl Iterator for SearchMatches {
    type Item = PackageMatch;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for SearchMatches {}
