//! Sequential walk over styled fragments

use crate::config::{IndexConfig, StyleNames};
use crate::document::StyledFragment;
use crate::error::{Error, SkipReport};
use crate::index::{ChapterDetector, ChapterProbe, PageVerseMap, VerseHit, VerseIndex, VerseOrigin};
use crate::reference::VerseRef;
use log::{debug, info, warn};
use unicode_segmentation::UnicodeSegmentation;

/// Where the walk stands in the book/chapter structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WalkPhase {
    #[default]
    SeekingBook,
    InBook,
    InChapter,
}

/// A verse number whose digits are still being collected
#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingVerse {
    digits: String,
    page: Option<usize>,
}

/// Accumulators of one walk
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkState {
    pub book: String,
    pub chapter: String,
    pub phase: WalkPhase,
    /// Character fragments belong to a verse paragraph
    in_verse_paragraph: bool,
    pending: Option<PendingVerse>,
}

/// Walks fragments in document order and records every verse it finds.
///
/// A walker serves exactly one pass; start a fresh one for every document
/// traversal.
#[derive(Debug)]
pub struct Walker {
    styles: StyleNames,
    detector: ChapterDetector,
    state: WalkState,
    map: PageVerseMap,
    skipped: SkipReport,
    fragments_seen: usize,
}

impl Walker {
    pub fn new(config: &IndexConfig) -> Self {
        Self {
            styles: config.styles.clone(),
            detector: ChapterDetector::new(config),
            state: WalkState::default(),
            map: PageVerseMap::new(),
            skipped: SkipReport::new(),
            fragments_seen: 0,
        }
    }

    /// Walk a whole fragment sequence
    pub fn walk(mut self, fragments: impl IntoIterator<Item = StyledFragment>) -> VerseIndex {
        for fragment in fragments {
            self.step(&fragment);
        }
        self.finish()
    }

    /// Current accumulators
    pub fn state(&self) -> &WalkState {
        &self.state
    }

    /// Consume the next fragment
    pub fn step(&mut self, fragment: &StyledFragment) {
        self.fragments_seen += 1;

        if self.styles.is_verse_number(&fragment.style) {
            if self.state.in_verse_paragraph {
                self.collect_digits(fragment);
            }
            return;
        }

        self.flush_pending();

        if !fragment.is_paragraph() {
            return;
        }

        if fragment.is_blank() {
            self.state.in_verse_paragraph = false;
            return;
        }

        if self.styles.is_book_title(&fragment.style) {
            self.state.book = fragment.text.trim().to_string();
            self.state.phase = WalkPhase::InBook;
            self.state.in_verse_paragraph = false;
            debug!("Set book to {}", self.state.book);
        } else if self.styles.is_verse_text(&fragment.style) {
            self.state.in_verse_paragraph = true;
            self.probe_chapter(fragment);
        } else {
            self.state.in_verse_paragraph = false;
        }
    }

    /// End the walk
    pub fn finish(mut self) -> VerseIndex {
        self.flush_pending();

        info!(
            "Indexed {} fragments: {} pages with verses, {} skipped",
            self.fragments_seen,
            self.map.len(),
            self.skipped.total()
        );

        VerseIndex {
            map: self.map,
            skipped: self.skipped,
            fragments: self.fragments_seen,
        }
    }

    fn probe_chapter(&mut self, fragment: &StyledFragment) {
        match self.detector.probe(fragment) {
            ChapterProbe::Start { chapter, detection } => {
                debug!(
                    "Chapter {} starts ({:?}, {:?} confidence)",
                    chapter, detection.strategy, detection.confidence
                );
                self.state.chapter = chapter;
                self.state.phase = WalkPhase::InChapter;
                self.record(fragment.page, "1".to_string(), VerseOrigin::ChapterStart(detection));
            }
            ChapterProbe::Unresolved => {
                let err = Error::UnresolvedChapterStart {
                    text: fragment.text.chars().take(40).collect(),
                };
                warn!("{}", err);
                self.skipped.record(&err);
            }
            ChapterProbe::NotStart => {}
        }
    }

    fn collect_digits(&mut self, fragment: &StyledFragment) {
        for grapheme in fragment.text.graphemes(true) {
            if grapheme.chars().all(|c| c.is_ascii_digit()) {
                self.state
                    .pending
                    .get_or_insert_with(|| PendingVerse {
                        digits: String::new(),
                        page: fragment.page,
                    })
                    .digits
                    .push_str(grapheme);
            } else {
                self.flush_pending();
            }
        }
    }

    fn flush_pending(&mut self) {
        if let Some(pending) = self.state.pending.take() {
            if !pending.digits.is_empty() {
                self.record(pending.page, pending.digits, VerseOrigin::VerseNumber);
            }
        }
    }

    fn record(&mut self, page: Option<usize>, verse: String, origin: VerseOrigin) {
        let reference = VerseRef::new(self.state.book.clone(), self.state.chapter.clone(), verse);
        match page {
            Some(page_index) => {
                debug!("Added {} to page {}", reference, page_index + 1);
                self.map.record(page_index, VerseHit { reference, origin });
            }
            None => debug!("{} is not on any page", reference),
        }
    }
}
