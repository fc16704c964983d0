//! Raw measurement document
//!
//! Owns the file bytes for the duration of one ingestion and exposes the
//! trimmed line view the parsers operate on. The byte buffer stays untouched
//! so fingerprinting always sees exactly what was uploaded.

/// A single document line, trimmed, with its 1-based source line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    pub number: usize,
    pub text: &'a str,
}

/// Immutable byte content of a measurement file plus its UTF-8 text view.
///
/// Decoding is lossy: invalid sequences become U+FFFD instead of failing the
/// whole ingestion. Lines are `\n`-separated; a trailing newline therefore
/// yields a final empty line, matching how the footer window is counted.
#[derive(Debug, Clone)]
pub struct RawDocument {
    bytes: Vec<u8>,
    text: String,
}

impl RawDocument {
    pub fn new(bytes: Vec<u8>) -> Self {
        let text = String::from_utf8_lossy(&bytes).into_owned();
        Self { bytes, text }
    }

    /// The raw bytes, exactly as received
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Trimmed lines with 1-based line numbers
    pub fn lines(&self) -> impl Iterator<Item = Line<'_>> {
        self.text.split('\n').enumerate().map(|(i, text)| Line {
            number: i + 1,
            text: text.trim(),
        })
    }
}
