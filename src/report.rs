// Presentation of the comparison numbers.
// Rounding to two decimals happens here and nowhere else.
use crate::compare::{MatchCounts, Similarity};
use std::fmt::{self, Display};

/// Shown instead of a percentage when nothing was drawn.
pub const UNDEFINED_SIMILARITY: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub similarity: String,
    pub model_count: usize,
    pub user_count: usize,
    pub match_count: usize,
}

impl Report {
    pub fn new(counts: &MatchCounts) -> Self {
        Self {
            similarity: format_similarity(counts.similarity()),
            model_count: counts.model_color,
            user_count: counts.user_drawn,
            match_count: counts.matched,
        }
    }
}

/// `93.50` style, or [`UNDEFINED_SIMILARITY`].
pub fn format_similarity(similarity: Similarity) -> String {
    match similarity {
        Similarity::Undefined => UNDEFINED_SIMILARITY.to_string(),
        Similarity::Percent(p) => format!("{p:.2}"),
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.similarity == UNDEFINED_SIMILARITY {
            write!(f, "SIMILARITY: {}", self.similarity)?;
        } else {
            write!(f, "SIMILARITY: {}%", self.similarity)?;
        }
        write!(f, "  MODEL: {}  USER: {}  MATCH: {}", self.model_count, self.user_count, self.match_count)
    }
}
