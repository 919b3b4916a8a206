//! `"<Book> <Chapter>:<Verse>"` identifier parsing

use crate::error::{Error, MalformedReason, Result};
use crate::reference::VerseRef;

/// Parse a verse identifier such as `"1 Corinthians 13:4"`.
///
/// The last whitespace-delimited token containing a colon is the
/// chapter:verse token; everything before it is the book name, so book
/// names may contain spaces and leading numerals. Tokens after the
/// chapter:verse token are ignored.
pub fn parse_reference(id: &str) -> Result<VerseRef> {
    let malformed = |reason| Error::MalformedIdentifier {
        id: id.to_string(),
        reason,
    };

    let tokens: Vec<&str> = id.split_whitespace().collect();
    if tokens.len() < 2 {
        return Err(malformed(MalformedReason::TooFewTokens));
    }

    let cv_index = tokens
        .iter()
        .rposition(|token| token.contains(':'))
        .ok_or_else(|| malformed(MalformedReason::NoChapterVerse))?;

    let mut parts = tokens[cv_index].split(':');
    let (chapter, verse) = match (parts.next(), parts.next(), parts.next()) {
        (Some(c), Some(v), None) if !c.is_empty() && !v.is_empty() => (c, v),
        _ => return Err(malformed(MalformedReason::BadChapterVerse)),
    };

    Ok(VerseRef::new(tokens[..cv_index].join(" "), chapter, verse))
}
