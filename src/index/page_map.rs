//! Page to verse-range map

use crate::index::Detection;
use crate::reference::VerseRef;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::borrow::Cow;

/// How a verse was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum VerseOrigin {
    /// Verse 1, implied by a chapter start
    ChapterStart(Detection),
    /// A run of verse-number characters
    VerseNumber,
}

/// A verse observed on a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerseHit {
    pub reference: VerseRef,
    pub origin: VerseOrigin,
}

/// Verses found on one page, in document order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageVerseEntry {
    pub page_index: usize,
    pub verses: Vec<VerseHit>,
    pub first_verse: Option<VerseRef>,
    pub last_verse: Option<VerseRef>,
}

impl PageVerseEntry {
    /// An entry for a page with no verse content
    pub fn empty(page_index: usize) -> Self {
        Self {
            page_index,
            verses: Vec::new(),
            first_verse: None,
            last_verse: None,
        }
    }
}

/// Map from page index to the verses on that page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageVerseMap {
    pages: FxHashMap<usize, PageVerseEntry>,
}

impl PageVerseMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a verse to a page. The first verse is kept once set; the last
    /// verse always moves forward.
    pub fn record(&mut self, page_index: usize, hit: VerseHit) {
        let entry = self
            .pages
            .entry(page_index)
            .or_insert_with(|| PageVerseEntry::empty(page_index));

        if entry.first_verse.is_none() {
            entry.first_verse = Some(hit.reference.clone());
        }
        entry.last_verse = Some(hit.reference.clone());
        entry.verses.push(hit);
    }

    /// Get the entry for a page. Pages without verses yield an empty entry.
    pub fn lookup(&self, page_index: usize) -> Cow<'_, PageVerseEntry> {
        match self.pages.get(&page_index) {
            Some(entry) => Cow::Borrowed(entry),
            None => Cow::Owned(PageVerseEntry::empty(page_index)),
        }
    }

    /// Entries ordered by page index
    pub fn entries(&self) -> Vec<&PageVerseEntry> {
        let mut entries: Vec<_> = self.pages.values().collect();
        entries.sort_by_key(|entry| entry.page_index);
        entries
    }

    /// Number of pages holding at least one verse
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// One past the highest page with a verse
    pub fn page_span(&self) -> usize {
        self.pages.keys().max().map_or(0, |&max| max + 1)
    }
}

impl Serialize for PageVerseMap {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.entries())
    }
}
