//! Trait definitions for external interactions
//!
//! The morphological analyzer is infrastructure; implementations live in
//! `digduck-tagger` and are passed explicitly to whatever needs them.

use crate::TaggedToken;

/// Trait for part-of-speech tagging
///
/// Implemented by the infrastructure layer (digduck-tagger)
pub trait Tagger {
    /// Error type for tagging operations
    type Error;

    /// Tag one sentence, returning its tokens in surface order
    fn tag(&self, sentence: &str) -> Result<Vec<TaggedToken>, Self::Error>;
}

impl<T: Tagger + ?Sized> Tagger for &T {
    type Error = T::Error;

    fn tag(&self, sentence: &str) -> Result<Vec<TaggedToken>, Self::Error> {
        (**self).tag(sentence)
    }
}
