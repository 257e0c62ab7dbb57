//! Packaging chunks as files and ZIP archives

use crate::types::ExportMode;
use crate::PipelineError;
use digduck_domain::Chunk;
use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Build an in-memory ZIP archive with one Deflate entry per chunk
pub fn build_archive(chunks: &[Chunk], prefix: &str) -> Result<Vec<u8>, PipelineError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for chunk in chunks {
        let name = chunk.file_name(prefix);
        debug!("Adding {} ({} sentences)", name, chunk.len());
        writer.start_file(name, options)?;
        writer.write_all(chunk.payload().as_bytes())?;
    }

    Ok(writer.finish()?.into_inner())
}

/// Write each chunk as a UTF-8 text file into `dir`, creating it if needed
pub fn write_chunks(
    chunks: &[Chunk],
    dir: &Path,
    prefix: &str,
) -> Result<Vec<PathBuf>, PipelineError> {
    fs::create_dir_all(dir)?;

    let mut paths = Vec::with_capacity(chunks.len());
    for chunk in chunks {
        let path = dir.join(chunk.file_name(prefix));
        fs::write(&path, chunk.payload())?;
        paths.push(path);
    }

    debug!("Wrote {} chunk files to {}", paths.len(), dir.display());
    Ok(paths)
}

/// Archive name derived from the input file: `<stem>.zip` or `<stem>_bullet.zip`
pub fn default_archive_name(input: &Path, mode: ExportMode) -> String {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "digduck".to_string());

    match mode {
        ExportMode::Filtered => format!("{}.zip", stem),
        ExportMode::Bullet => format!("{}_bullet.zip", stem),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use digduck_domain::chunk::DEFAULT_FILE_PREFIX;
    use std::io::Read;
    use zip::ZipArchive;

    fn sample_chunks() -> Vec<Chunk> {
        vec![
            Chunk::new(1, vec!["一文目".to_string(), "二文目".to_string()]),
            Chunk::new(2, vec!["三文目".to_string()]),
        ]
    }

    #[test]
    fn test_archive_entries_in_order() {
        let bytes = build_archive(&sample_chunks(), DEFAULT_FILE_PREFIX).unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();

        assert_eq!(archive.len(), 2);

        let mut first = archive.by_index(0).unwrap();
        assert_eq!(first.name(), "processed_part_1.txt");
        assert_eq!(first.compression(), CompressionMethod::Deflated);
        let mut content = String::new();
        first.read_to_string(&mut content).unwrap();
        assert_eq!(content, "一文目\n二文目");
        drop(first);

        let mut second = archive.by_index(1).unwrap();
        assert_eq!(second.name(), "processed_part_2.txt");
        let mut content = String::new();
        second.read_to_string(&mut content).unwrap();
        assert_eq!(content, "三文目");
    }

    #[test]
    fn test_empty_archive_is_valid() {
        let bytes = build_archive(&[], DEFAULT_FILE_PREFIX).unwrap();
        let archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 0);
    }

    #[test]
    fn test_write_chunks_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested").join("out");

        let paths = write_chunks(&sample_chunks(), &target, "part_").unwrap();

        assert_eq!(paths.len(), 2);
        assert_eq!(paths[1], target.join("part_2.txt"));
        assert_eq!(fs::read_to_string(&paths[0]).unwrap(), "一文目\n二文目");
    }

    #[test]
    fn test_default_archive_name() {
        let input = Path::new("/data/news_2024.csv");
        assert_eq!(default_archive_name(input, ExportMode::Filtered), "news_2024.zip");
        assert_eq!(default_archive_name(input, ExportMode::Bullet), "news_2024_bullet.zip");
        assert_eq!(
            default_archive_name(Path::new("archive.tar.csv"), ExportMode::Filtered),
            "archive.tar.zip"
        );
        assert_eq!(default_archive_name(Path::new(""), ExportMode::Filtered), "digduck.zip");
    }
}
