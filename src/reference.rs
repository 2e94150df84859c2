//! Scripture Reference Parsing
//!
//! This module converts human-readable references ("John 3:16-18") into the
//! pair of zero-padded composite keys that bound a verse range query.
//!
//! # Key Format
//! Verse rows are keyed by an 8-digit `BBCCCVVV` integer: 2-digit book
//! number, 3-digit chapter, 3-digit verse, all zero-padded. Lexicographic
//! order of the padded form equals numeric order of (book, chapter, verse),
//! so a contiguous passage is exactly the rows between two keys.
//!
//! # Accepted Citation Shapes
//! - `"3:16"` - single verse
//! - `"3:16-18"` - verse range within one chapter
//! - `"3:16-4:3"` - range spanning chapters
//! - `"13"` / `"1-13"` - bare verse numbers for chapterless books (Jude,
//!   Philemon, ...), where the chapter defaults to 1
//!
//! Parsing is a pure function of its inputs; book names are resolved by the
//! caller before this module is involved.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScripturaError};

/// A single verse position: book, chapter, verse
///
/// Ordering follows (book, chapter, verse), which matches the lexicographic
/// order of the encoded key whenever the components are within their padded
/// widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VerseKey {
    /// Canonical book number (1-66 for the standard canon)
    pub book: u32,
    /// Chapter number
    pub chapter: u32,
    /// Verse number
    pub verse: u32,
}

impl VerseKey {
    /// Create a new verse key
    #[must_use]
    pub const fn new(book: u32, chapter: u32, verse: u32) -> Self {
        Self { book, chapter, verse }
    }

    /// Encode as the fixed-width `BBCCCVVV` key string
    ///
    /// Components wider than 2/3/3 digits widen the key rather than error;
    /// keys held in storage never exceed those widths.
    #[must_use]
    pub fn encode(&self) -> String {
        format!("{:02}{:03}{:03}", self.book, self.chapter, self.verse)
    }
}

impl fmt::Display for VerseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

/// Split a full reference into book token and citation
///
/// The book token may itself contain spaces ("1 Kings 2:3", "Song of
/// Solomon 2:1"), so the split is on the LAST space. Both halves are
/// trimmed. Fails with `InvalidFormat` when the reference contains no space
/// at all.
pub fn split_reference(reference: &str) -> Result<(&str, &str)> {
    let (book, citation) = reference
        .rsplit_once(' ')
        .ok_or_else(|| ScripturaError::invalid_format(reference))?;

    Ok((book.trim(), citation.trim()))
}

/// Parse the citation portion of a reference into inclusive range bounds
///
/// `citation` is everything after the book name: `"3:16"`, `"3:16-18"`,
/// `"3:16-4:3"`, or a bare verse number for a chapterless book. Returns
/// `(start, end)` keys; for a single verse the two are equal.
///
/// No ordering check is performed between start and end. A reversed range
/// bounds an empty result set, which callers treat as "no rows", not an
/// error.
pub fn parse_citation(book_number: u32, citation: &str) -> Result<(VerseKey, VerseKey)> {
    let (start_chapter, start_verse, end_chapter, end_verse) =
        if let Some((start, end)) = citation.split_once('-') {
            // Range. A bare number on the right side means "same chapter,
            // different verse", so the end chapter defaults to the start
            // chapter rather than 1.
            let (start_chapter, start_verse) = match start.split_once(':') {
                Some((chapter, verse)) => (chapter, verse),
                None => ("1", start),
            };
            let (end_chapter, end_verse) = match end.split_once(':') {
                Some((chapter, verse)) => (chapter, verse),
                None => (start_chapter, end),
            };
            (start_chapter, start_verse, end_chapter, end_verse)
        } else {
            // Single point: end = start.
            match citation.split_once(':') {
                Some((chapter, verse)) => (chapter, verse, chapter, verse),
                None => ("1", citation, "1", citation),
            }
        };

    let start = VerseKey::new(
        book_number,
        parse_component(start_chapter, citation)?,
        parse_component(start_verse, citation)?,
    );
    let end = VerseKey::new(
        book_number,
        parse_component(end_chapter, citation)?,
        parse_component(end_verse, citation)?,
    );

    Ok((start, end))
}

/// Parse one numeric citation component, reporting the whole citation on failure
fn parse_component(raw: &str, citation: &str) -> Result<u32> {
    raw.trim()
        .parse()
        .map_err(|_| ScripturaError::invalid_format(citation))
}
