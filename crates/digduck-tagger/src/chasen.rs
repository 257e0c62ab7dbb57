//! ChaSen output format parsing
//!
//! `mecab -Ochasen` prints one token per line with tab-separated fields:
//!
//! ```text
//! 田中	タナカ	田中	名詞-固有名詞-人名-姓
//! 社長	シャチョウ	社長	名詞-一般
//! EOS
//! ```
//!
//! Field 0 is the surface form and field 3 the part-of-speech tag. Lines with
//! fewer than four fields (including `EOS`) carry no token.

use digduck_domain::TaggedToken;

const SURFACE_FIELD: usize = 0;
const POS_FIELD: usize = 3;

/// Parse ChaSen-formatted analyzer output into tagged tokens
pub fn parse_chasen(output: &str) -> Vec<TaggedToken> {
    output
        .lines()
        .filter_map(|line| {
            let fields: Vec<&str> = line.split('\t').collect();
            if fields.len() > POS_FIELD {
                Some(TaggedToken::new(fields[SURFACE_FIELD], fields[POS_FIELD]))
            } else {
                None
            }
        })
        .collect()
}
