//! Output formatting for the CLI.

use crate::config::{Config, OutputFormat};
use crate::error::Result;
use colored::*;
use digduck_filter::{ArticleVerdict, FilterReport};
use digduck_pipeline::{ExportMode, ExportResult};
use std::path::{Path, PathBuf};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Summarize an export and the files it produced.
    pub fn export_summary(
        &self,
        result: &ExportResult,
        archive: &Path,
        chunk_files: &[PathBuf],
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.export_summary_json(result, archive, chunk_files),
            OutputFormat::Table => Ok(self.export_summary_table(result, archive, chunk_files)),
            OutputFormat::Quiet => Ok(archive.display().to_string()),
        }
    }

    fn export_summary_json(
        &self,
        result: &ExportResult,
        archive: &Path,
        chunk_files: &[PathBuf],
    ) -> Result<String> {
        let meta = &result.metadata;
        let summary = serde_json::json!({
            "mode": result.mode.to_string(),
            "total_articles": meta.total_articles,
            "exported_articles": meta.exported_articles,
            "sentence_count": meta.sentence_count,
            "chunk_count": meta.chunk_count,
            "processing_time_ms": meta.processing_time_ms,
            "archive": archive.display().to_string(),
            "chunk_files": chunk_files
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>(),
        });

        Ok(serde_json::to_string_pretty(&summary)?)
    }

    fn export_summary_table(
        &self,
        result: &ExportResult,
        archive: &Path,
        chunk_files: &[PathBuf],
    ) -> String {
        let meta = &result.metadata;
        let headline = match result.mode {
            ExportMode::Filtered => format!(
                "{} of {} articles kept",
                meta.exported_articles, meta.total_articles
            ),
            ExportMode::Bullet => format!("{} articles exported", meta.exported_articles),
        };

        let mut builder = Builder::default();
        builder.push_record(["Sentences", &meta.sentence_count.to_string()]);
        builder.push_record(["Chunks", &meta.chunk_count.to_string()]);
        builder.push_record(["Archive", &archive.display().to_string()]);
        if !chunk_files.is_empty() {
            builder.push_record(["Chunk files", &chunk_files.len().to_string()]);
        }
        builder.push_record(["Time", &format!("{} ms", meta.processing_time_ms)]);

        let mut table = builder.build();
        table.with(Style::rounded());

        let mut lines = vec![self.success(&headline), table.to_string()];
        if meta.sentence_count == 0 {
            lines.push(self.warning("No sentences were exported"));
        }
        lines.join("\n")
    }

    /// Format per-article filter verdicts.
    pub fn verdicts(&self, report: &FilterReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.verdicts_json(report),
            OutputFormat::Table => Ok(self.verdicts_table(report)),
            OutputFormat::Quiet => Ok(report
                .verdicts
                .iter()
                .filter(|v| v.is_kept())
                .map(|v| v.row.to_string())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    fn verdicts_json(&self, report: &FilterReport) -> Result<String> {
        let verdicts: Vec<serde_json::Value> = report
            .verdicts
            .iter()
            .map(|v| {
                serde_json::json!({
                    "row": v.row,
                    "kept": v.is_kept(),
                    "garbage_ratio": v.garbage_ratio,
                    "noun_ratio": v.scores.map(|s| s.noun_ratio),
                    "verb_ratio": v.scores.map(|s| s.verb_ratio),
                    "person_title_ratio": v.scores.map(|s| s.person_title_ratio),
                    "reasons": v.reasons.iter().map(|r| r.to_string()).collect::<Vec<_>>(),
                })
            })
            .collect();

        Ok(serde_json::to_string_pretty(&verdicts)?)
    }

    fn verdicts_table(&self, report: &FilterReport) -> String {
        if report.verdicts.is_empty() {
            return self.colorize("No articles found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record([
            "Row",
            "Verdict",
            "Garbage",
            "Nouns",
            "Verbs",
            "Person/Title",
            "Reasons",
        ]);

        for verdict in &report.verdicts {
            builder.push_record(self.verdict_record(verdict));
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        format!(
            "{}\n{}",
            table,
            self.info(&format!(
                "{} of {} articles kept",
                report.kept_count(),
                report.total()
            ))
        )
    }

    fn verdict_record(&self, verdict: &ArticleVerdict) -> Vec<String> {
        let ratio = |value: Option<f64>, precision: usize| {
            value.map_or_else(|| "-".to_string(), |v| format!("{:.*}", precision, v))
        };
        let status = if verdict.is_kept() {
            self.colorize("kept", "green")
        } else {
            self.colorize("rejected", "red")
        };
        let reasons = verdict
            .reasons
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join("; ");

        vec![
            verdict.row.to_string(),
            status,
            ratio(verdict.garbage_ratio, 4),
            ratio(verdict.scores.map(|s| s.noun_ratio), 3),
            ratio(verdict.scores.map(|s| s.verb_ratio), 3),
            ratio(verdict.scores.map(|s| s.person_title_ratio), 3),
            reasons,
        ]
    }

    /// Numbered list of exported sentences.
    pub fn preview(&self, sentences: &[String]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(sentences)?),
            OutputFormat::Table | OutputFormat::Quiet => {
                let width = sentences.len().to_string().len();
                Ok(sentences
                    .iter()
                    .enumerate()
                    .map(|(i, s)| {
                        format!("{:>width$}  {}", i + 1, s.replace('\n', " "), width = width)
                    })
                    .collect::<Vec<_>>()
                    .join("\n"))
            }
        }
    }

    /// Render the effective configuration.
    pub fn config(&self, config: &Config) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(config)?),
            OutputFormat::Table | OutputFormat::Quiet => config.to_toml(),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use digduck_domain::{ArticleScores, Chunk};
    use digduck_filter::{RejectionReason, VerdictStatus};
    use digduck_pipeline::ExportMetadata;

    fn export_result(mode: ExportMode) -> ExportResult {
        let sentences = vec!["一文目".to_string(), "二文目".to_string()];
        ExportResult {
            mode,
            chunks: vec![Chunk::new(1, sentences.clone())],
            sentences,
            report: None,
            metadata: ExportMetadata {
                total_articles: 5,
                exported_articles: 2,
                sentence_count: 2,
                chunk_count: 1,
                processing_time_ms: 3,
            },
        }
    }

    fn report() -> FilterReport {
        FilterReport {
            kept: Vec::new(),
            verdicts: vec![
                ArticleVerdict {
                    row: 0,
                    status: VerdictStatus::Kept,
                    reasons: Vec::new(),
                    garbage_ratio: Some(0.0),
                    scores: Some(ArticleScores {
                        noun_ratio: 0.4,
                        verb_ratio: 0.3,
                        person_title_ratio: 0.0,
                    }),
                },
                ArticleVerdict {
                    row: 1,
                    status: VerdictStatus::Rejected,
                    reasons: vec![RejectionReason::NoKeywordMatch],
                    garbage_ratio: None,
                    scores: None,
                },
            ],
        }
    }

    #[test]
    fn test_filtered_summary_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter
            .export_summary(&export_result(ExportMode::Filtered), Path::new("news.zip"), &[])
            .unwrap();
        assert!(output.starts_with("✓ 2 of 5 articles kept"));
        assert!(output.contains("news.zip"));
        assert!(!output.contains("Chunk files"));
    }

    #[test]
    fn test_bullet_summary_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let files = vec![PathBuf::from("out/processed_part_1.txt")];
        let output = formatter
            .export_summary(&export_result(ExportMode::Bullet), Path::new("a.zip"), &files)
            .unwrap();
        assert!(output.starts_with("✓ 2 articles exported"));
        assert!(output.contains("Chunk files"));
    }

    #[test]
    fn test_summary_json() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter
            .export_summary(&export_result(ExportMode::Filtered), Path::new("news.zip"), &[])
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["mode"], "filtered");
        assert_eq!(value["exported_articles"], 2);
        assert_eq!(value["archive"], "news.zip");
    }

    #[test]
    fn test_summary_quiet() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter
            .export_summary(&export_result(ExportMode::Bullet), Path::new("a.zip"), &[])
            .unwrap();
        assert_eq!(output, "a.zip");
    }

    #[test]
    fn test_verdict_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.verdicts(&report()).unwrap();
        assert!(output.contains("Person/Title"));
        assert!(output.contains("no keyword match"));
        assert!(output.contains("0.400"));
        assert!(output.contains("1 of 2 articles kept"));
    }

    #[test]
    fn test_verdict_json_and_quiet() {
        let json = Formatter::new(OutputFormat::Json, false)
            .verdicts(&report())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["kept"], true);
        assert!(value[1]["noun_ratio"].is_null());

        let quiet = Formatter::new(OutputFormat::Quiet, false)
            .verdicts(&report())
            .unwrap();
        assert_eq!(quiet, "0");
    }

    #[test]
    fn test_empty_report() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.verdicts(&FilterReport::default()).unwrap();
        assert!(output.contains("No articles found"));
    }

    #[test]
    fn test_preview_numbers_lines() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let sentences: Vec<String> = (1..=10).map(|i| format!("文{}\n続き", i)).collect();
        let output = formatter.preview(&sentences).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], " 1  文1 続き");
        assert_eq!(lines[9], "10  文10 続き");
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.warning("test"), "⚠ test");
    }
}
