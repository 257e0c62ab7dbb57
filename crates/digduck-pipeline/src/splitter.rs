//! Sentence segmentation for export

use crate::normalizer::strip_line_indent;
use digduck_domain::is_sentence_terminator;

/// Split text into sentences on `。`, `！` and `？`
///
/// Segments are trimmed, empty ones dropped, and each line of a surviving
/// segment loses its leading whitespace. Terminators are not kept.
pub fn split_sentences(text: &str) -> Vec<String> {
    text.split(is_sentence_terminator)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(strip_line_indent)
        .collect()
}
