//! MeCab Tagger Implementation
//!
//! Runs an installed `mecab` binary with `-Ochasen` and reads the analysis
//! from its standard output.
//!
//! # Examples
//!
//! ```no_run
//! use digduck_tagger::MecabTagger;
//! use digduck_domain::Tagger;
//!
//! let tagger = MecabTagger::system();
//! let tokens = tagger.tag("田中社長が来た").unwrap();
//! ```

use crate::{parse_chasen, TaggerError};
use digduck_domain::{TaggedToken, Tagger};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;
use tracing::{debug, trace};

/// Default analyzer command
pub const DEFAULT_COMMAND: &str = "mecab";

/// Tagger backed by the `mecab` command-line analyzer
#[derive(Debug, Clone)]
pub struct MecabTagger {
    command: String,
    args: Vec<String>,
    rc_path: Option<PathBuf>,
}

impl MecabTagger {
    /// Create a tagger running `command` without an explicit resource file
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            args: Vec::new(),
            rc_path: None,
        }
    }

    /// Create a tagger for the `mecab` on `PATH` with the platform's resource file
    pub fn system() -> Self {
        Self::new(DEFAULT_COMMAND).with_rc_path(default_rc_path())
    }

    /// Set the resource file passed with `-r`
    pub fn with_rc_path(mut self, rc_path: impl Into<PathBuf>) -> Self {
        self.rc_path = Some(rc_path.into());
        self
    }

    /// Add arguments placed before `-r` and `-Ochasen`, e.g. `-d <dicdir>`
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Command this tagger runs
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Resource file passed with `-r`, if any
    pub fn rc_path(&self) -> Option<&Path> {
        self.rc_path.as_deref()
    }

    fn build_command(&self) -> Command {
        let mut command = Command::new(&self.command);
        command.args(&self.args);
        if let Some(rc_path) = &self.rc_path {
            command.arg("-r").arg(rc_path);
        }
        command
            .arg("-Ochasen")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        command
    }
}

impl Default for MecabTagger {
    fn default() -> Self {
        Self::system()
    }
}

impl Tagger for MecabTagger {
    type Error = TaggerError;

    fn tag(&self, sentence: &str) -> Result<Vec<TaggedToken>, Self::Error> {
        let mut child = self
            .build_command()
            .spawn()
            .map_err(|source| TaggerError::Spawn {
                command: self.command.clone(),
                source,
            })?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| TaggerError::InvalidOutput("stdin not captured".to_string()))?;

        // stdin is fed from its own thread while stdout is drained, otherwise
        // output larger than the pipe buffer blocks both processes.
        let (written, output) = thread::scope(|scope| {
            let writer = scope.spawn(move || -> std::io::Result<()> {
                stdin.write_all(sentence.as_bytes())?;
                stdin.write_all(b"\n")
            });
            let output = child.wait_with_output();
            (writer.join(), output)
        });

        let output = output?;
        if !output.status.success() {
            return Err(TaggerError::ExitStatus {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        written.map_err(|_| TaggerError::InvalidOutput("stdin writer panicked".to_string()))??;

        let stdout = String::from_utf8(output.stdout)
            .map_err(|e| TaggerError::InvalidOutput(format!("not UTF-8: {}", e)))?;
        trace!("mecab output: {}", stdout);

        let tokens = parse_chasen(&stdout);
        debug!(
            "Tagged {} chars into {} tokens",
            sentence.chars().count(),
            tokens.len()
        );
        Ok(tokens)
    }
}

/// Resource file location used when none is configured
///
/// macOS installs keep it under Homebrew unless `/etc/mecabrc` exists;
/// everywhere else it is `/etc/mecabrc`.
pub fn default_rc_path() -> PathBuf {
    let system = Path::new("/etc/mecabrc");
    if cfg!(target_os = "macos") && !system.exists() {
        PathBuf::from("/opt/homebrew/etc/mecabrc")
    } else {
        system.to_path_buf()
    }
}
