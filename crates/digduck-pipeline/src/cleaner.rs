//! Removal of sentences without readable content

use crate::normalizer::strip_line_indent;

/// Hiragana, katakana, kanji, or one of `々〆ヵヶ`
pub fn is_japanese_script(c: char) -> bool {
    matches!(c, 'ぁ'..='ゔ' | 'ァ'..='ヴ' | '一'..='龠' | '々' | '〆' | 'ヵ' | 'ヶ')
}

/// Sentence has at least one alphanumeric or Japanese character
pub fn has_content(sentence: &str) -> bool {
    sentence
        .chars()
        .any(|c| c.is_alphanumeric() || is_japanese_script(c))
}

/// Trim sentences and drop those made only of symbols and whitespace
pub fn clean_sentences<I>(sentences: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    sentences
        .into_iter()
        .map(|sentence| strip_line_indent(sentence.trim()))
        .filter(|sentence| has_content(sentence))
        .collect()
}
