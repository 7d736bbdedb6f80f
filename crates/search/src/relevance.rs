//! Relevance scoring for search results.
//!
//! A record's score is the sum of the weights of every field that contains
//! the query. Matching is case-insensitive literal substring containment;
//! there is no typo tolerance.

use festival_core::config::FieldWeights;
use festival_core::Searchable;

/// Field a query matched in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchField {
    Title,
    Description,
    Category,
}

/// Which fields matched and what they added up to.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct ScoreBreakdown {
    pub score: u32,
    pub fields: Vec<MatchField>,
}

/// Weighted field scorer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scorer {
    weights: FieldWeights,
}

impl Scorer {
    pub fn new(weights: FieldWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> FieldWeights {
        self.weights
    }

    /// Score a record against an already folded query.
    ///
    /// # Arguments
    /// * `query_lower` - Trimmed query passed through [`fold_case`]
    /// * `record` - Record to score
    ///
    /// # Returns
    /// Sum of matched field weights; 0 excludes the record. An empty query
    /// matches nothing.
    pub fn score<R: Searchable + ?Sized>(&self, query_lower: &str, record: &R) -> u32 {
        self.breakdown(query_lower, record).score
    }

    /// Same as [`Scorer::score`], also reporting the matched fields.
    pub fn breakdown<R: Searchable + ?Sized>(&self, query_lower: &str, record: &R) -> ScoreBreakdown {
        let mut breakdown = ScoreBreakdown::default();
        if query_lower.is_empty() {
            return breakdown;
        }

        if contains_lower(record.title(), query_lower) {
            breakdown.score += self.weights.title;
            breakdown.fields.push(MatchField::Title);
        }

        if contains_lower(record.description(), query_lower) {
            breakdown.score += self.weights.description;
            breakdown.fields.push(MatchField::Description);
        }

        if let Some(category) = record.category() {
            if contains_lower(category, query_lower) {
                breakdown.score += self.weights.category;
                breakdown.fields.push(MatchField::Category);
            }
        }

        breakdown
    }
}

/// Lowercase one char. Final sigma folds to `σ`, so the result never
/// depends on the char's position in a word.
pub(crate) fn fold_char(ch: char) -> impl Iterator<Item = char> {
    ch.to_lowercase().map(|c| if c == 'ς' { 'σ' } else { c })
}

/// Case-fold text one char at a time.
///
/// Scoring and highlighting both fold with this, so every field that scores
/// has at least one highlighted range.
pub fn fold_case(text: &str) -> String {
    text.chars().flat_map(fold_char).collect()
}

#[inline]
fn contains_lower(text: &str, query_lower: &str) -> bool {
    !text.is_empty() && fold_case(text).contains(query_lower)
}
