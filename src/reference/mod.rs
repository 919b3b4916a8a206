//! Verse references and identifier parsing

mod parser;
mod verse_ref;

pub use parser::parse_reference;
pub use verse_ref::VerseRef;
