//! Command implementations.
//!
//! Each command has an `execute_*` entry point that runs the configured
//! analyzer and prints, and a `run_*` function that takes the tagger and
//! returns the rendered output.

pub mod bullet;
pub mod config;
mod export;
pub mod filter;
pub mod score;

pub use self::bullet::{execute_bullet, run_bullet};
pub use self::config::{execute_config, run_config};
pub use self::filter::{execute_filter, run_filter};
pub use self::score::{execute_score, run_score};

use crate::cli::InputArgs;
use crate::error::Result;
use digduck_domain::Tagger;
use digduck_filter::{parse_keywords, FilterConfig};
use digduck_pipeline::{Pipeline, PipelineConfig, Table};
use digduck_tagger::TaggerError;
use std::fmt;
use tracing::{debug, info};

/// Sentence used to check that the analyzer runs at all
const PROBE_SENTENCE: &str = "解析できるか確認する";

/// Apply `--column` and `--encoding` over the configured values.
fn pipeline_config(base: &PipelineConfig, input: &InputArgs) -> PipelineConfig {
    let mut config = base.clone();
    if let Some(column) = &input.column {
        config.text_column = column.clone();
    }
    if let Some(encoding) = input.encoding {
        config.encoding = encoding.into();
    }
    config
}

/// Apply `--keywords` over the configured keywords.
fn filter_config(base: &FilterConfig, keywords: Option<&str>) -> FilterConfig {
    match keywords {
        Some(keywords) => base.clone().with_keywords(parse_keywords(keywords)),
        None => base.clone(),
    }
}

/// Read the input table and pull out the article column.
fn load_articles<T>(
    pipeline: &Pipeline<T>,
    input: &InputArgs,
) -> Result<Vec<digduck_domain::Article>>
where
    T: Tagger,
    T::Error: fmt::Display,
{
    let encoding = pipeline.config().encoding;
    info!("Reading {} as {}", input.input.display(), encoding);

    let table = Table::from_path(&input.input, encoding)?;
    let articles = pipeline.load_articles(&table)?;
    debug!("{} articles in column '{}'", articles.len(), pipeline.config().text_column);
    Ok(articles)
}

/// Fail fast when the analyzer cannot run, instead of rejecting every article.
fn probe_tagger<T>(tagger: &T) -> Result<()>
where
    T: Tagger<Error = TaggerError>,
{
    tagger.tag(PROBE_SENTENCE)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::EncodingArg;
    use digduck_pipeline::Encoding;
    use digduck_tagger::MockTagger;
    use std::path::PathBuf;

    fn input(column: Option<&str>, encoding: Option<EncodingArg>) -> InputArgs {
        InputArgs {
            input: PathBuf::from("news.csv"),
            column: column.map(str::to_string),
            encoding,
        }
    }

    #[test]
    fn test_flags_override_pipeline_config() {
        let base = PipelineConfig::default();

        let config = pipeline_config(&base, &input(None, None));
        assert_eq!(config, base);

        let config = pipeline_config(&base, &input(Some("body"), Some(EncodingArg::ShiftJis)));
        assert_eq!(config.text_column, "body");
        assert_eq!(config.encoding, Encoding::ShiftJis);
        assert_eq!(config.chunk_size, base.chunk_size);
    }

    #[test]
    fn test_keywords_override_filter_config() {
        let base = FilterConfig::default().with_keywords(["経済"]);
        assert_eq!(filter_config(&base, None).keywords, vec!["経済"]);
        assert_eq!(
            filter_config(&base, Some(" 選挙  国会 ")).keywords,
            vec!["選挙", "国会"]
        );
        assert!(filter_config(&base, Some("")).keywords.is_empty());
    }

    #[test]
    fn test_probe_reports_analyzer_failure() {
        let mut tagger = MockTagger::inline();
        assert!(probe_tagger(&tagger).is_ok());

        tagger.add_error(PROBE_SENTENCE);
        assert!(probe_tagger(&tagger).is_err());
    }
}
