//! In-process tagger backed by Lindera and the embedded IPADIC dictionary
//!
//! IPADIC feature columns are joined into the same hyphenated form that
//! `mecab -Ochasen` prints, so `名詞,固有名詞,人名,姓` becomes
//! `名詞-固有名詞-人名-姓` and both backends score identically.
//!
//! # Examples
//!
//! ```no_run
//! use digduck_tagger::LinderaTagger;
//! use digduck_domain::Tagger;
//!
//! let tagger = LinderaTagger::new()?;
//! let tokens = tagger.tag("田中社長が来た")?;
//! assert!(tokens[0].is_person_name());
//! # Ok::<(), digduck_tagger::TaggerError>(())
//! ```

use crate::TaggerError;
use digduck_domain::{TaggedToken, Tagger};
use lindera::{
    dictionary::{load_dictionary_from_kind, DictionaryKind},
    mode::Mode,
    segmenter::Segmenter,
    tokenizer::Tokenizer as LinderaTokenizer,
};
use tracing::{debug, trace};

/// Leading IPADIC feature columns that make up the part-of-speech tag
const POS_COLUMNS: usize = 4;

/// Placeholder IPADIC uses for an empty column
const EMPTY_COLUMN: &str = "*";

/// Tagger running Lindera in process
pub struct LinderaTagger {
    tokenizer: LinderaTokenizer,
}

impl LinderaTagger {
    /// Load the embedded IPADIC dictionary
    pub fn new() -> Result<Self, TaggerError> {
        let dictionary = load_dictionary_from_kind(DictionaryKind::IPADIC)
            .map_err(|e| TaggerError::Analyzer(format!("loading IPADIC: {}", e)))?;
        let segmenter = Segmenter::new(Mode::Normal, dictionary, None);

        debug!("Loaded embedded IPADIC dictionary");
        Ok(Self {
            tokenizer: LinderaTokenizer::new(segmenter),
        })
    }
}

/// Join the leading IPADIC columns with `-`, skipping `*`
pub fn ipadic_pos<S: AsRef<str>>(details: &[S]) -> String {
    details
        .iter()
        .take(POS_COLUMNS)
        .map(AsRef::as_ref)
        .filter(|column| !column.is_empty() && *column != EMPTY_COLUMN)
        .collect::<Vec<_>>()
        .join("-")
}

impl Tagger for LinderaTagger {
    type Error = TaggerError;

    fn tag(&self, sentence: &str) -> Result<Vec<TaggedToken>, Self::Error> {
        if sentence.trim().is_empty() {
            return Ok(Vec::new());
        }

        let mut tokens = self
            .tokenizer
            .tokenize(sentence)
            .map_err(|e| TaggerError::Analyzer(e.to_string()))?;

        let tagged: Vec<TaggedToken> = tokens
            .iter_mut()
            .map(|token| {
                let surface = token.text.to_string();
                let pos = ipadic_pos(&token.details());
                trace!("{}\t{}", surface, pos);
                TaggedToken::new(surface, pos)
            })
            .collect();

        debug!(
            "Tagged {} chars into {} tokens",
            sentence.chars().count(),
            tagged.len()
        );
        Ok(tagged)
    }
}
