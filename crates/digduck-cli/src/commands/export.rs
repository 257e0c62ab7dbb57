//! Shared export path of the filter and bullet commands.

use crate::cli::OutputArgs;
use crate::error::Result;
use crate::output::Formatter;
use digduck_domain::{Article, Tagger};
use digduck_pipeline::{default_archive_name, ExportMode, Pipeline};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Run an export and write its archive, plus chunk files when asked.
pub(super) fn export<T>(
    pipeline: &Pipeline<T>,
    mode: ExportMode,
    input: &Path,
    articles: &[Article],
    output: &OutputArgs,
    formatter: &Formatter,
) -> Result<String>
where
    T: Tagger,
    T::Error: fmt::Display,
{
    let result = match mode {
        ExportMode::Filtered => pipeline.export_filtered(articles),
        ExportMode::Bullet => pipeline.export_bullets(articles),
    };

    let archive_path = output
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(default_archive_name(input, mode)));
    let bytes = pipeline.archive(&result)?;
    if let Some(parent) = archive_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(&archive_path, bytes)?;
    info!("Wrote {}", archive_path.display());

    let chunk_files = match &output.out_dir {
        Some(dir) => pipeline.write_chunk_files(&result, dir)?,
        None => Vec::new(),
    };

    let mut sections = Vec::new();
    if output.preview {
        sections.push(formatter.preview(&result.sentences)?);
    }
    sections.push(formatter.export_summary(&result, &archive_path, &chunk_files)?);
    Ok(sections.join("\n"))
}
