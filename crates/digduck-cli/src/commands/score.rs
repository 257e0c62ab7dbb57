//! Score command implementation.

use super::{filter_config, load_articles, pipeline_config, probe_tagger};
use crate::cli::ScoreArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use digduck_domain::Tagger;
use digduck_pipeline::Pipeline;
use digduck_tagger::TaggerError;

/// Execute the score command with the configured analyzer.
pub fn execute_score(args: ScoreArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let tagger = config.tagger.build()?;
    println!("{}", run_score(&args, config, tagger, formatter)?);
    Ok(())
}

/// Render the filter verdict of every article without exporting anything.
pub fn run_score<T>(
    args: &ScoreArgs,
    config: &Config,
    tagger: T,
    formatter: &Formatter,
) -> Result<String>
where
    T: Tagger<Error = TaggerError>,
{
    let pipeline = Pipeline::new(
        tagger,
        filter_config(&config.filter, args.keywords.as_deref()),
        pipeline_config(&config.pipeline, &args.input),
    )?;
    let articles = load_articles(&pipeline, &args.input)?;
    probe_tagger(pipeline.filter().scorer().tagger())?;

    let report = pipeline.score(&articles);
    formatter.verdicts(&report)
}
