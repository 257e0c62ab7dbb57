//! digduck Tagger Adapters
//!
//! Implementations of the `Tagger` trait from `digduck-domain`.
//!
//! # Architecture
//!
//! The relevance scorer never talks to a morphological analyzer directly; it
//! receives a `Tagger` and asks it for (surface, part-of-speech) pairs one
//! sentence at a time. This crate provides the adapters.
//!
//! # Taggers
//!
//! - `LinderaTagger`: In-process analysis with the embedded IPADIC dictionary
//! - `MecabTagger`: Drives an installed `mecab` binary in ChaSen output mode
//! - `MockTagger`: Deterministic tagger for testing
//!
//! # Examples
//!
//! ```
//! use digduck_tagger::MockTagger;
//! use digduck_domain::{TaggedToken, Tagger};
//!
//! let tagger = MockTagger::new(vec![TaggedToken::new("選挙", "名詞-サ変接続")]);
//! let tokens = tagger.tag("anything").unwrap();
//! assert_eq!(tokens[0].surface, "選挙");
//! ```

#![warn(missing_docs)]

pub mod chasen;
pub mod ipadic;
pub mod mecab;

use digduck_domain::{TaggedToken, Tagger};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use thiserror::Error;

pub use chasen::parse_chasen;
pub use ipadic::LinderaTagger;
pub use mecab::MecabTagger;

/// Errors that can occur while tagging
#[derive(Error, Debug)]
pub enum TaggerError {
    /// The analyzer process could not be started
    #[error("Failed to start tagger '{command}': {source}")]
    Spawn {
        /// Command that was executed
        command: String,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Communication with the analyzer process failed
    #[error("Tagger IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The analyzer exited unsuccessfully
    #[error("Tagger exited with {status}: {stderr}")]
    ExitStatus {
        /// Exit status description
        status: String,
        /// Captured standard error
        stderr: String,
    },

    /// The in-process analyzer failed
    #[error("Analyzer error: {0}")]
    Analyzer(String),

    /// The analyzer produced output that could not be read
    #[error("Invalid tagger output: {0}")]
    InvalidOutput(String),

    /// Error injected by `MockTagger`
    #[error("Mock tagger error for sentence '{0}'")]
    Mock(String),
}

/// What `MockTagger` answers for sentences without a specific response
#[derive(Debug, Clone)]
enum Fallback {
    Fixed(Vec<TaggedToken>),
    Inline,
}

/// Mock tagger for deterministic testing
///
/// Returns pre-configured tokens without any analyzer installed.
///
/// # Examples
///
/// ```
/// use digduck_tagger::MockTagger;
/// use digduck_domain::{TaggedToken, Tagger};
///
/// // Fixed tokens for every sentence, with one override
/// let mut tagger = MockTagger::default();
/// tagger.add_response("田中社長", vec![
///     TaggedToken::new("田中", "名詞-固有名詞-人名-姓"),
///     TaggedToken::new("社長", "名詞-一般"),
/// ]);
/// assert_eq!(tagger.tag("田中社長").unwrap().len(), 2);
/// assert!(tagger.tag("other").unwrap().is_empty());
///
/// // Inline annotations: whitespace-separated `surface/pos` pairs
/// let tagger = MockTagger::inline();
/// let tokens = tagger.tag("雨/名詞-一般 が/助詞-格助詞 降る/動詞-自立").unwrap();
/// assert_eq!(tokens.len(), 3);
/// assert!(tokens[2].is_verb());
/// ```
#[derive(Debug, Clone)]
pub struct MockTagger {
    fallback: Fallback,
    responses: HashMap<String, Vec<TaggedToken>>,
    failures: HashSet<String>,
    call_count: Arc<AtomicUsize>,
}

impl MockTagger {
    /// Create a MockTagger returning the same tokens for every sentence
    pub fn new(tokens: Vec<TaggedToken>) -> Self {
        Self::with_fallback(Fallback::Fixed(tokens))
    }

    /// Create a MockTagger that reads `surface/pos` annotations from the sentence
    ///
    /// Words without a `/` are tagged `記号-一般`. Blank sentences yield no tokens.
    pub fn inline() -> Self {
        Self::with_fallback(Fallback::Inline)
    }

    fn with_fallback(fallback: Fallback) -> Self {
        Self {
            fallback,
            responses: HashMap::new(),
            failures: HashSet::new(),
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Add specific tokens for a given sentence
    pub fn add_response(&mut self, sentence: impl Into<String>, tokens: Vec<TaggedToken>) {
        self.responses.insert(sentence.into(), tokens);
    }

    /// Configure to return an error for a specific sentence
    pub fn add_error(&mut self, sentence: impl Into<String>) {
        self.failures.insert(sentence.into());
    }

    /// Get the number of times tag was called
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        self.call_count.store(0, Ordering::SeqCst);
    }
}

impl Default for MockTagger {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Tagger for MockTagger {
    type Error = TaggerError;

    fn tag(&self, sentence: &str) -> Result<Vec<TaggedToken>, Self::Error> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        if self.failures.contains(sentence) {
            return Err(TaggerError::Mock(sentence.to_string()));
        }

        if let Some(tokens) = self.responses.get(sentence) {
            return Ok(tokens.clone());
        }

        Ok(match &self.fallback {
            Fallback::Fixed(tokens) => tokens.clone(),
            Fallback::Inline => parse_inline(sentence),
        })
    }
}

fn parse_inline(sentence: &str) -> Vec<TaggedToken> {
    sentence
        .split_whitespace()
        .map(|word| match word.split_once('/') {
            Some((surface, pos)) => TaggedToken::new(surface, pos),
            None => TaggedToken::new(word, "記号-一般"),
        })
        .collect()
}
