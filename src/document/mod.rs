//! Styled content model: host fragments and imported stories

mod fragment;
pub mod import;
mod locator;
mod paragraph;

pub use fragment::{FragmentLevel, StyledFragment};
pub use import::{import_entries, load_entries, BibleEntry, ImportReport};
pub use locator::{PageBreaks, PageLocator};
pub use paragraph::{CharRun, ParagraphId, StyledParagraph};

/// An ordered sequence of styled paragraphs, as inserted into one threaded
/// text story of the layout
#[derive(Debug, Clone, Default)]
pub struct Story {
    paragraphs: Vec<StyledParagraph>,
    /// Next paragraph ID to assign
    next_para_id: u64,
}

impl Story {
    /// Create a new empty story
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new paragraph and return its ID
    pub fn push_paragraph(&mut self, style: impl Into<String>, drop_cap: u32) -> ParagraphId {
        let id = ParagraphId(self.next_para_id);
        self.next_para_id += 1;
        self.paragraphs.push(StyledParagraph::new(id, style, drop_cap));
        id
    }

    /// Append a run to the last paragraph, starting an unstyled paragraph
    /// if the story is empty
    pub fn push_run(&mut self, run: CharRun) {
        if self.paragraphs.is_empty() {
            self.push_paragraph(String::new(), 0);
        }
        if let Some(para) = self.paragraphs.last_mut() {
            para.push_run(run);
        }
    }

    /// Iterate over paragraphs in order
    pub fn paragraphs(&self) -> impl Iterator<Item = &StyledParagraph> + '_ {
        self.paragraphs.iter()
    }

    /// Get the full story text, paragraphs separated by `\r` as in the host
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(StyledParagraph::text)
            .collect::<Vec<_>>()
            .join("\r")
    }

    /// Flatten the story into fragments in document order, placing each on
    /// the page the locator reports
    pub fn fragments<'a, L: PageLocator + ?Sized>(
        &'a self,
        locator: &'a L,
    ) -> impl Iterator<Item = StyledFragment> + 'a {
        self.paragraphs
            .iter()
            .flat_map(move |para| para.fragments(locator))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_story() {
        let story = Story::new();
        assert_eq!(story.paragraphs().count(), 0);
        assert_eq!(story.text(), "");
    }

    #[test]
    fn test_push_paragraphs() {
        let mut story = Story::new();
        let title = story.push_paragraph("BookTitle", 0);
        assert_eq!(title, ParagraphId(0));
        story.push_run(CharRun::plain("Ruth"));
        let body = story.push_paragraph("VerseText", 1);
        story.push_run(CharRun::styled("1", "DropCap"));
        story.push_run(CharRun::plain(" Now it came to pass "));

        assert_eq!(story.paragraphs().count(), 2);
        assert_eq!(story.text(), "Ruth\r1 Now it came to pass ");
        assert_eq!(body, ParagraphId(1));
        let styles: Vec<_> = story.paragraphs().map(|p| (p.style.as_str(), p.drop_cap)).collect();
        assert_eq!(styles, vec![("BookTitle", 0), ("VerseText", 1)]);
    }

    #[test]
    fn test_run_on_empty_story() {
        let mut story = Story::new();
        story.push_run(CharRun::plain("orphan"));
        assert_eq!(story.paragraphs().count(), 1);
        assert_eq!(story.text(), "orphan");
    }

    #[test]
    fn test_fragments_in_document_order() {
        let mut story = Story::new();
        story.push_paragraph("BookTitle", 0);
        story.push_run(CharRun::plain("Ruth"));
        story.push_paragraph("VerseText", 1);
        story.push_run(CharRun::styled("1", "DropCap"));

        let breaks = PageBreaks::from_starts([(0, ParagraphId(0), 0), (1, ParagraphId(1), 0)]);
        let fragments: Vec<_> = story.fragments(&breaks).collect();

        let texts: Vec<_> = fragments.iter().map(|f| f.text.as_str()).collect();
        assert_eq!(texts, vec!["Ruth", "Ruth", "1", "1"]);
        assert_eq!(fragments[0].page, Some(0));
        assert_eq!(fragments[2].page, Some(1));
        assert!(fragments[2].is_paragraph());
    }
}
