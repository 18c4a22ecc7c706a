//! Core data models for the verse-of-the-day CLI
//!
//! This module contains the types representing a verse-of-the-day response:
//! individual verses as delivered by the feed, and the non-empty passage
//! assembled from them.

pub mod votd;

pub use votd::{decode_passage, VotdClient, VotdError};

use serde::{Deserialize, Serialize};

/// One scripture verse as delivered by the passage-of-the-day feed
///
/// Every field is kept as text: the payload delivers chapter and verse
/// numbers as strings, and they must round-trip unchanged. Field names match
/// the wire keys exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    /// Name of the book, e.g. "John"
    pub bookname: String,
    /// Chapter number, as text
    pub chapter: String,
    /// Verse number, as text
    pub verse: String,
    /// The verse text itself
    pub text: String,
}

/// An ordered, non-empty sequence of verses for one day
///
/// A passage is constructed once per run, from the decoded cache bytes or a
/// freshly fetched response body, and is immutable afterwards. Verses keep
/// the order the feed delivered them in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passage {
    verses: Vec<Verse>,
}

impl Passage {
    /// Builds a passage from decoded verse records
    ///
    /// Returns `None` for an empty sequence, so an empty feed response can
    /// never reach rendering.
    pub fn from_verses(verses: Vec<Verse>) -> Option<Self> {
        if verses.is_empty() {
            None
        } else {
            Some(Self { verses })
        }
    }

    /// Returns the verses in feed order
    pub fn verses(&self) -> &[Verse] {
        &self.verses
    }
}
