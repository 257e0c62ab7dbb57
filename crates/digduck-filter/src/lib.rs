//! digduck Filter
//!
//! Decides which articles are worth exporting.
//!
//! The filter provides:
//! - Keyword inclusion (substring, any keyword)
//! - Garbage-marker exclusion (encoding artifacts such as `x000D`)
//! - Part-of-speech scoring through an injected `Tagger`
//! - Exclusion of noun-heavy, verb-poor articles
//! - Exclusion of articles dominated by name/job-title sentences
//!
//! # Examples
//!
//! ```
//! use digduck_domain::Article;
//! use digduck_filter::{ArticleFilter, FilterConfig};
//! use digduck_tagger::MockTagger;
//!
//! let config = FilterConfig::default().with_keywords(["選挙"]);
//! let filter = ArticleFilter::new(MockTagger::inline(), config).unwrap();
//!
//! let articles = vec![
//!     Article::new(0, "選挙/名詞-サ変接続 が/助詞 行わ/動詞-自立 れる/動詞-接尾"),
//!     Article::new(1, "天気/名詞-一般 が/助詞 良い/形容詞-自立"),
//! ];
//! let report = filter.filter(&articles);
//! assert_eq!(report.kept.len(), 1);
//! assert_eq!(report.kept[0].article.row, 0);
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod filter;
mod scorer;

pub use config::{parse_keywords, FilterConfig, DEFAULT_JOB_TITLES};
pub use error::FilterError;
pub use filter::{
    garbage_ratio, matches_keywords, ArticleFilter, ArticleVerdict, FilterReport,
    RejectionReason, VerdictStatus,
};
pub use scorer::{split_for_scoring, TextRatioScorer};
