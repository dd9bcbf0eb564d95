//! Search results and follow-up selection

use crate::notice::Notice;
use reel_core::{VideoId, VideoRecord};
use serde::Serialize;

/// Matches for one search, in catalogue order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    term: String,
    ids: Vec<VideoId>,
    lines: Vec<String>,
}

impl SearchResults {
    pub(crate) fn collect<'a>(
        term: &str,
        matches: impl IntoIterator<Item = &'a VideoRecord>,
    ) -> Self {
        let (ids, lines) = matches
            .into_iter()
            .map(|video| (video.id().clone(), video.display_line()))
            .unzip();
        Self {
            term: term.to_string(),
            ids,
            lines,
        }
    }

    /// The term as the user typed it
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Matching ids, in catalogue order
    pub fn ids(&self) -> &[VideoId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Resolve a follow-up answer to the chosen video, if it is a valid choice
    pub fn select(&self, answer: &str) -> Option<&VideoId> {
        parse_selection(answer, self.len()).map(|index| &self.ids[index])
    }

    /// Listing notice for these results
    pub fn notice(&self) -> Notice {
        if self.is_empty() {
            Notice::NoSearchResults {
                term: self.term.clone(),
            }
        } else {
            Notice::SearchResults {
                term: self.term.clone(),
                lines: self.lines.clone(),
            }
        }
    }
}

/// Parse a 1-based selection into a 0-based index
///
/// Only whole numbers in `1..=count` select; anything else is a decline.
pub fn parse_selection(answer: &str, count: usize) -> Option<usize> {
    let number: usize = answer.trim().parse().ok()?;
    if (1..=count).contains(&number) {
        Some(number - 1)
    } else {
        None
    }
}
