//! Bullet command implementation.

use super::{load_articles, pipeline_config};
use crate::cli::BulletArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use digduck_domain::Tagger;
use digduck_pipeline::{ExportMode, Pipeline};
use std::fmt;

/// Execute the bullet command.
pub fn execute_bullet(args: BulletArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    // The analyzer is never invoked for an unfiltered export, so skip loading a dictionary.
    let tagger = config.tagger.mecab();
    println!("{}", run_bullet(&args, config, tagger, formatter)?);
    Ok(())
}

/// Export every article of the input and render the summary.
pub fn run_bullet<T>(
    args: &BulletArgs,
    config: &Config,
    tagger: T,
    formatter: &Formatter,
) -> Result<String>
where
    T: Tagger,
    T::Error: fmt::Display,
{
    let pipeline = Pipeline::new(
        tagger,
        config.filter.clone(),
        pipeline_config(&config.pipeline, &args.input),
    )?;
    let articles = load_articles(&pipeline, &args.input)?;

    super::export::export(
        &pipeline,
        ExportMode::Bullet,
        &args.input.input,
        &articles,
        &args.output,
        formatter,
    )
}
