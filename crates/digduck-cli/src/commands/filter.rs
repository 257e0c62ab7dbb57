//! Filter command implementation.

use super::{filter_config, load_articles, pipeline_config, probe_tagger};
use crate::cli::FilterArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use digduck_domain::Tagger;
use digduck_pipeline::{ExportMode, Pipeline};
use digduck_tagger::TaggerError;

/// Execute the filter command with the configured analyzer.
pub fn execute_filter(args: FilterArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let tagger = config.tagger.build()?;
    println!("{}", run_filter(&args, config, tagger, formatter)?);
    Ok(())
}

/// Filter the input, export the kept articles, and render the summary.
pub fn run_filter<T>(
    args: &FilterArgs,
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

    super::export::export(
        &pipeline,
        ExportMode::Filtered,
        &args.input.input,
        &articles,
        &args.output,
        formatter,
    )
}
