//! Display strings for verse references

use crate::reference::VerseRef;

/// Render a reference the way it appears in a running header.
///
/// `"Mark 4:9"` with every field, `"Mark 4"` without a verse, `"Mark"` with
/// the book alone, and an empty string without a book or reference.
pub fn format_reference(reference: Option<&VerseRef>) -> String {
    let Some(r) = reference else {
        return String::new();
    };
    if !r.has_book() {
        return String::new();
    }
    match (r.has_chapter(), r.has_verse()) {
        (true, true) => format!("{} {}:{}", r.book, r.chapter, r.verse),
        (true, false) => format!("{} {}", r.book, r.chapter),
        _ => r.book.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_reference() {
        let r = VerseRef::new("Mark", "4", "9");
        assert_eq!(format_reference(Some(&r)), "Mark 4:9");
    }

    #[test]
    fn test_none() {
        assert_eq!(format_reference(None), "");
    }

    #[test]
    fn test_partial_references() {
        assert_eq!(format_reference(Some(&VerseRef::new("Mark", "4", ""))), "Mark 4");
        assert_eq!(format_reference(Some(&VerseRef::new("Mark", "", ""))), "Mark");
        assert_eq!(format_reference(Some(&VerseRef::new("Mark", "", "9"))), "Mark");
        assert_eq!(format_reference(Some(&VerseRef::new("", "4", "9"))), "");
    }

    #[test]
    fn test_multi_word_book() {
        let r = VerseRef::new("1 Corinthians", "13", "4");
        assert_eq!(format_reference(Some(&r)), "1 Corinthians 13:4");
    }
}
