//! verse-index: running headers for paginated Bible layouts
//!
//! The page-layout host walks its document and hands this crate styled
//! fragments tagged with page indices. The crate provides:
//! - Verse identifier parsing (`"1 Corinthians 13:4"`)
//! - A single-pass walk that detects book titles, chapter starts and verse numbers
//! - A page to verse-range map
//! - Running header and footer text per page under a caller-chosen policy
//! - Import of `{id, translation}` records into a styled story

pub mod config;
pub mod document;
pub mod error;
pub mod header;
pub mod index;
pub mod reference;
pub mod wasm;

// Re-export WASM types for direct use
pub use wasm::WasmVerseIndexer;

// Re-export primary types
pub use config::{IndexConfig, StyleNames};
pub use document::{
    import_entries, load_entries, BibleEntry, FragmentLevel, ImportReport, PageBreaks,
    PageLocator, ParagraphId, Story, StyledFragment,
};
pub use error::{Error, Result, SkipReport};
pub use header::{format_reference, running_heads, HeaderPolicy, PageSide, RunningHead};
pub use index::{PageVerseEntry, PageVerseMap, VerseHit, VerseIndex, VerseOrigin, Walker};
pub use reference::{parse_reference, VerseRef};

/// Incremental indexer for hosts that push fragments one at a time
pub struct VerseIndexer {
    config: IndexConfig,
    walker: Walker,
    /// Result of the last finished walk
    index: Option<VerseIndex>,
}

impl Default for VerseIndexer {
    fn default() -> Self {
        Self::new(IndexConfig::default())
    }
}

impl VerseIndexer {
    /// Create a new indexer with the given configuration
    pub fn new(config: IndexConfig) -> Self {
        let walker = Walker::new(&config);
        Self {
            config,
            walker,
            index: None,
        }
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Feed the next fragment of the current walk
    pub fn push(&mut self, fragment: &StyledFragment) {
        self.walker.step(fragment);
    }

    /// Feed several fragments
    pub fn extend(&mut self, fragments: impl IntoIterator<Item = StyledFragment>) {
        for fragment in fragments {
            self.walker.step(&fragment);
        }
    }

    /// End the current walk and start a fresh one
    pub fn finish(&mut self) -> &VerseIndex {
        let walker = std::mem::replace(&mut self.walker, Walker::new(&self.config));
        self.index.insert(walker.finish())
    }

    /// Result of the last finished walk
    pub fn index(&self) -> Option<&VerseIndex> {
        self.index.as_ref()
    }

    /// Walk a complete fragment sequence in one call
    pub fn index_fragments(
        config: &IndexConfig,
        fragments: impl IntoIterator<Item = StyledFragment>,
    ) -> VerseIndex {
        Walker::new(config).walk(fragments)
    }
}
