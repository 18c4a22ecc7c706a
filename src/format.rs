//! Terminal rendering for passages
//!
//! Converts a decoded passage into the display string: a header identifying
//! the reference, followed by the verse text indented one tab stop.

use crate::data::{Passage, Verse};

/// Renders the `<book> <chapter>:<verse>` reference header for a verse
fn verse_header(verse: &Verse) -> String {
    format!("{} {}:{}", verse.bookname, verse.chapter, verse.verse)
}

/// Renders the indented `\t(<verse>) <text>` body line for a verse
fn verse_line(verse: &Verse) -> String {
    format!("\t({}) {}", verse.verse, verse.text)
}

/// Renders a passage for terminal display
///
/// A single verse yields its header and one indented line with no trailing
/// newline. Multiple verses yield one header spanning the range, taking book
/// and chapter from the first verse, followed by one newline-terminated
/// indented line per verse. Verses are rendered in the order received; the
/// formatter never sorts or deduplicates.
pub fn render_passage(passage: &Passage) -> String {
    match passage.verses() {
        [only] => format!("{}\n{}", verse_header(only), verse_line(only)),
        [first, .., last] => {
            let mut rendered = format!("{}-{}\n", verse_header(first), last.verse);
            for verse in passage.verses() {
                rendered.push_str(&verse_line(verse));
                rendered.push('\n');
            }
            rendered
        }
        // A Passage is never empty by construction
        [] => String::new(),
    }
}
