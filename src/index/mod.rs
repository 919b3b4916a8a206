//! Verse indexing: chapter detection, the fragment walk and the page map

mod chapter;
mod page_map;
mod walker;

pub use chapter::{ChapterDetector, ChapterProbe, ChapterStrategy, Confidence, Detection};
pub use page_map::{PageVerseEntry, PageVerseMap, VerseHit, VerseOrigin};
pub use walker::{WalkPhase, WalkState, Walker};

use crate::error::SkipReport;
use crate::header::{running_heads, HeaderPolicy, RunningHead};
use serde::Serialize;

/// Result of one walk
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerseIndex {
    pub map: PageVerseMap,
    pub skipped: SkipReport,
    /// Number of fragments consumed
    pub fragments: usize,
}

impl VerseIndex {
    /// Derive headers and footers for a document of `page_count` pages
    pub fn running_heads(&self, page_count: usize, policy: HeaderPolicy) -> Vec<RunningHead> {
        running_heads(&self.map, page_count, policy)
    }
}
