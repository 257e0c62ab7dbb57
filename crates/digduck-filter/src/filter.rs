//! Article relevance filtering

use crate::scorer::TextRatioScorer;
use crate::{FilterConfig, FilterError};
use digduck_domain::{Article, ArticleScores, ScoredArticle, Tagger};
use std::fmt;
use tracing::{debug, info, warn};

/// Outcome of filtering one article
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerdictStatus {
    /// Article is exported
    Kept,

    /// Article is dropped
    Rejected,
}

/// Reasons for rejection
#[derive(Debug, Clone, PartialEq)]
pub enum RejectionReason {
    /// None of the keywords occurs in the text
    NoKeywordMatch,

    /// Too many garbage markers
    GarbageRatio {
        /// Measured ratio
        ratio: f64,
        /// Exclusive upper bound
        max: f64,
    },

    /// Mostly nouns with almost no verbs
    NounHeavy {
        /// Measured noun ratio
        noun_ratio: f64,
        /// Measured verb ratio
        verb_ratio: f64,
    },

    /// Too many sentences naming people or job titles
    PersonTitleHeavy {
        /// Measured ratio
        ratio: f64,
        /// Inclusive rejection threshold
        threshold: f64,
    },

    /// The tagger failed on this article
    TaggerFailure(String),
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectionReason::NoKeywordMatch => write!(f, "no keyword match"),
            RejectionReason::GarbageRatio { ratio, max } => {
                write!(f, "garbage ratio {:.4} >= {}", ratio, max)
            }
            RejectionReason::NounHeavy {
                noun_ratio,
                verb_ratio,
            } => write!(f, "noun heavy (nouns {:.2}, verbs {:.2})", noun_ratio, verb_ratio),
            RejectionReason::PersonTitleHeavy { ratio, threshold } => {
                write!(f, "person/title sentences {:.2} >= {}", ratio, threshold)
            }
            RejectionReason::TaggerFailure(msg) => write!(f, "tagger failure: {}", msg),
        }
    }
}

/// Filtering result for a single article
#[derive(Debug, Clone)]
pub struct ArticleVerdict {
    /// Row of the article in the input table
    pub row: usize,

    /// Whether the article was kept
    pub status: VerdictStatus,

    /// Rejection reasons (empty when kept)
    pub reasons: Vec<RejectionReason>,

    /// Garbage ratio, if the article got that far
    pub garbage_ratio: Option<f64>,

    /// Scores, if the article was scored
    pub scores: Option<ArticleScores>,
}

impl ArticleVerdict {
    fn rejected(row: usize, reason: RejectionReason) -> Self {
        Self {
            row,
            status: VerdictStatus::Rejected,
            reasons: vec![reason],
            garbage_ratio: None,
            scores: None,
        }
    }

    /// Article was kept
    pub fn is_kept(&self) -> bool {
        self.status == VerdictStatus::Kept
    }
}

/// Result of a filter pass
#[derive(Debug, Clone, Default)]
pub struct FilterReport {
    /// Surviving articles in input order
    pub kept: Vec<ScoredArticle>,

    /// One verdict per input article, in input order
    pub verdicts: Vec<ArticleVerdict>,
}

impl FilterReport {
    /// Number of articles examined
    pub fn total(&self) -> usize {
        self.verdicts.len()
    }

    /// Number of articles kept
    pub fn kept_count(&self) -> usize {
        self.kept.len()
    }

    /// Number of articles rejected
    pub fn rejected_count(&self) -> usize {
        self.total() - self.kept_count()
    }
}

/// The article filter selects relevant articles
pub struct ArticleFilter<T: Tagger> {
    scorer: TextRatioScorer<T>,
    config: FilterConfig,
}

impl<T> ArticleFilter<T>
where
    T: Tagger,
    T::Error: fmt::Display,
{
    /// Create a new filter with the given tagger and configuration
    pub fn new(tagger: T, config: FilterConfig) -> Result<Self, FilterError> {
        config.validate().map_err(FilterError::Config)?;
        let scorer = TextRatioScorer::new(tagger, config.job_titles.clone());
        Ok(Self { scorer, config })
    }

    /// Active configuration
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// The scorer used for part-of-speech ratios
    pub fn scorer(&self) -> &TextRatioScorer<T> {
        &self.scorer
    }

    /// Filter articles, preserving input order
    ///
    /// A tagger failure rejects only the article it occurred in.
    pub fn filter(&self, articles: &[Article]) -> FilterReport {
        let mut report = FilterReport::default();

        for article in articles {
            let verdict = self.evaluate(article);
            if verdict.is_kept() {
                if let (Some(garbage_ratio), Some(scores)) = (verdict.garbage_ratio, verdict.scores)
                {
                    report.kept.push(ScoredArticle {
                        article: article.clone(),
                        garbage_ratio,
                        scores,
                    });
                }
            }
            report.verdicts.push(verdict);
        }

        info!(
            "Filtered {} articles: {} kept, {} rejected",
            report.total(),
            report.kept_count(),
            report.rejected_count()
        );

        report
    }

    /// Judge a single article
    ///
    /// Keyword and garbage checks short-circuit; the two score rules are
    /// both reported when both apply.
    pub fn evaluate(&self, article: &Article) -> ArticleVerdict {
        // 1. Keyword inclusion
        if !matches_keywords(&article.text, self.config.keywords.as_slice()) {
            debug!("Row {}: no keyword match", article.row);
            return ArticleVerdict::rejected(article.row, RejectionReason::NoKeywordMatch);
        }

        // 2. Garbage markers
        let garbage = garbage_ratio(&article.text, &self.config.garbage_marker);
        if garbage >= self.config.max_garbage_ratio {
            debug!("Row {}: garbage ratio {:.4}", article.row, garbage);
            let mut verdict = ArticleVerdict::rejected(
                article.row,
                RejectionReason::GarbageRatio {
                    ratio: garbage,
                    max: self.config.max_garbage_ratio,
                },
            );
            verdict.garbage_ratio = Some(garbage);
            return verdict;
        }

        // 3. Scoring
        let scores = match self.scorer.score(&article.text) {
            Ok(scores) => scores,
            Err(e) => {
                warn!("Row {}: tagging failed: {}", article.row, e);
                let mut verdict = ArticleVerdict::rejected(
                    article.row,
                    RejectionReason::TaggerFailure(e.to_string()),
                );
                verdict.garbage_ratio = Some(garbage);
                return verdict;
            }
        };

        let mut reasons = Vec::new();

        // 4. Noun heavy and verb poor
        if scores.noun_ratio >= self.config.noun_ratio_threshold
            && scores.verb_ratio <= self.config.verb_ratio_threshold
        {
            reasons.push(RejectionReason::NounHeavy {
                noun_ratio: scores.noun_ratio,
                verb_ratio: scores.verb_ratio,
            });
        }

        // 5. Byline / title dominated
        if scores.person_title_ratio >= self.config.person_title_threshold {
            reasons.push(RejectionReason::PersonTitleHeavy {
                ratio: scores.person_title_ratio,
                threshold: self.config.person_title_threshold,
            });
        }

        debug!(
            "Row {}: nouns {:.3} verbs {:.3} person/title {:.3} -> {}",
            article.row,
            scores.noun_ratio,
            scores.verb_ratio,
            scores.person_title_ratio,
            if reasons.is_empty() { "kept" } else { "rejected" }
        );

        let status = if reasons.is_empty() {
            VerdictStatus::Kept
        } else {
            VerdictStatus::Rejected
        };

        ArticleVerdict {
            row: article.row,
            status,
            reasons,
            garbage_ratio: Some(garbage),
            scores: Some(scores),
        }
    }
}

/// True if `text` contains any keyword, or if there are no keywords
pub fn matches_keywords<S: AsRef<str>>(text: &str, keywords: &[S]) -> bool {
    keywords.is_empty() || keywords.iter().any(|k| text.contains(k.as_ref()))
}

/// Occurrences of `marker` per character of `text`; 0.0 for empty text
pub fn garbage_ratio(text: &str, marker: &str) -> f64 {
    let length = text.chars().count();
    if length == 0 || marker.is_empty() {
        return 0.0;
    }
    text.matches(marker).count() as f64 / length as f64
}
