//! Article module - one input row and the scores derived from it

/// One row's article text
///
/// Absent or null cells are represented by an empty `text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    /// Zero-based data row index in the source table
    pub row: usize,

    /// Article body
    pub text: String,
}

impl Article {
    /// Create a new article
    pub fn new(row: usize, text: impl Into<String>) -> Self {
        Self {
            row,
            text: text.into(),
        }
    }
}

/// Part-of-speech ratios of an article
///
/// Every field lies in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ArticleScores {
    /// Nouns over all tokens
    pub noun_ratio: f64,

    /// Verbs over all tokens
    pub verb_ratio: f64,

    /// Sentences naming a person or a job title over all sentence segments
    pub person_title_ratio: f64,
}

impl ArticleScores {
    /// Build scores from raw counts; empty denominators give 0.0
    pub fn from_counts(
        nouns: usize,
        verbs: usize,
        words: usize,
        relevant_sentences: usize,
        total_sentences: usize,
    ) -> Self {
        Self {
            noun_ratio: ratio(nouns, words),
            verb_ratio: ratio(verbs, words),
            person_title_ratio: ratio(relevant_sentences, total_sentences),
        }
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// An article that passed filtering, with the values it was judged on
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredArticle {
    /// The article itself
    pub article: Article,

    /// Share of garbage markers in the text
    pub garbage_ratio: f64,

    /// Part-of-speech ratios
    pub scores: ArticleScores,
}
