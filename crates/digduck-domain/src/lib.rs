//! digduck Domain Layer
//!
//! Value types shared by every digduck crate and the trait boundary to the
//! morphological analyzer. This crate has no external dependencies; adapters
//! and processing stages live in other crates.
//!
//! ## Key Concepts
//!
//! - **Article**: one row's text from the input table
//! - **Scores**: noun ratio, verb ratio and person/title sentence ratio of an article
//! - **Tagged Token**: a (surface form, part-of-speech) pair produced by a tagger
//! - **Chunk**: a bounded, ordered group of cleaned sentences written as one file
//!
//! ## Architecture
//!
//! ```text
//! Table → Article → (Tagger) → ScoredArticle → sentences → Chunk
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod article;
pub mod chunk;
pub mod token;
pub mod traits;

// Re-exports for convenience
pub use article::{Article, ArticleScores, ScoredArticle};
pub use chunk::Chunk;
pub use token::TaggedToken;
pub use traits::Tagger;

/// Sentence-final punctuation used for every sentence split.
pub const SENTENCE_TERMINATORS: [char; 3] = ['。', '！', '？'];

/// Returns true if `c` ends a sentence.
pub fn is_sentence_terminator(c: char) -> bool {
    SENTENCE_TERMINATORS.contains(&c)
}
