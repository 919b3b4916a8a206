//! Mapping story positions to pages

use crate::document::ParagraphId;
use std::collections::BTreeMap;

/// Answers which page a character of a story landed on after the host
/// composed it
pub trait PageLocator {
    /// Page holding the character at `char_offset` of `paragraph`, or `None`
    /// when the host cannot tell (overset text, unplaced frames)
    fn page_of(&self, paragraph: ParagraphId, char_offset: usize) -> Option<usize>;
}

impl<F> PageLocator for F
where
    F: Fn(ParagraphId, usize) -> Option<usize>,
{
    fn page_of(&self, paragraph: ParagraphId, char_offset: usize) -> Option<usize> {
        self(paragraph, char_offset)
    }
}

/// Page starts recorded as story positions
#[derive(Debug, Clone, Default)]
pub struct PageBreaks {
    /// Maps the first position on a page to its page index
    starts: BTreeMap<(ParagraphId, usize), usize>,
}

impl PageBreaks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `page` begins at the given position
    pub fn insert(&mut self, page: usize, paragraph: ParagraphId, char_offset: usize) {
        self.starts.insert((paragraph, char_offset), page);
    }

    /// Build from `(page, paragraph, offset)` triples
    pub fn from_starts(starts: impl IntoIterator<Item = (usize, ParagraphId, usize)>) -> Self {
        let mut breaks = Self::new();
        for (page, paragraph, offset) in starts {
            breaks.insert(page, paragraph, offset);
        }
        breaks
    }
}

impl PageLocator for PageBreaks {
    fn page_of(&self, paragraph: ParagraphId, char_offset: usize) -> Option<usize> {
        // The largest start at or before the position
        self.starts
            .range(..=(paragraph, char_offset))
            .next_back()
            .map(|(_, &page)| page)
    }
}
