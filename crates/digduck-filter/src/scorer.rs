//! Part-of-speech ratio scoring

use digduck_domain::{is_sentence_terminator, ArticleScores, Tagger};
use tracing::trace;

/// Split text into scoring segments
///
/// Empty segments are kept, so text ending in sentence-final punctuation has a
/// trailing empty segment that still counts as a sentence.
pub fn split_for_scoring(text: &str) -> Vec<&str> {
    text.split(is_sentence_terminator).collect()
}

/// Computes noun, verb and person/title sentence ratios of an article
pub struct TextRatioScorer<T: Tagger> {
    tagger: T,
    job_titles: Vec<String>,
}

impl<T: Tagger> TextRatioScorer<T> {
    /// Create a new scorer
    pub fn new(tagger: T, job_titles: Vec<String>) -> Self {
        Self { tagger, job_titles }
    }

    /// The tagger this scorer asks
    pub fn tagger(&self) -> &T {
        &self.tagger
    }

    /// Score an article's text
    ///
    /// A sentence is relevant when it contains a token tagged as a personal
    /// name, or a noun whose surface contains a job title.
    pub fn score(&self, text: &str) -> Result<ArticleScores, T::Error> {
        let sentences = split_for_scoring(text);

        let mut num_words = 0;
        let mut num_nouns = 0;
        let mut num_verbs = 0;
        let mut relevant_sentences = 0;

        for sentence in &sentences {
            let mut has_person = false;
            let mut has_job_title = false;

            for token in self.tagger.tag(sentence)? {
                num_words += 1;

                if token.is_noun() {
                    num_nouns += 1;
                    if token.is_person_name() {
                        has_person = true;
                    } else if token.mentions_any(self.job_titles.as_slice()) {
                        has_job_title = true;
                    }
                } else if token.is_verb() {
                    num_verbs += 1;
                }
            }

            if has_person || has_job_title {
                relevant_sentences += 1;
            }
        }

        trace!(
            "words={} nouns={} verbs={} relevant={}/{}",
            num_words,
            num_nouns,
            num_verbs,
            relevant_sentences,
            sentences.len()
        );

        Ok(ArticleScores::from_counts(
            num_nouns,
            num_verbs,
            num_words,
            relevant_sentences,
            sentences.len(),
        ))
    }
}
