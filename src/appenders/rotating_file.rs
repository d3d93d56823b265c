//! Rotating file appender with size-based rotation
//!
//! The active file is `app.log`; rotated generations are `app.log.1`
//! (newest) through `app.log.N` (oldest). A line is never split across a
//! rotation: the size check happens before the whole line is written.

use crate::core::appender::Appender;
use crate::core::error::{LoggerError, Result};
use crate::core::formatter::{FormatterConfig, SinkKind};
use crate::core::log_event::LogEvent;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Size threshold of the application's file sink (10 MB)
pub const DEFAULT_MAX_BYTES: u64 = 10 * 1024 * 1024;

/// Backup generations kept by the application's file sink
pub const DEFAULT_MAX_BACKUPS: usize = 10;

/// When to rotate and how many generations to keep
///
/// # Examples
///
/// ```
/// use visiondesk_logger::appenders::RotationPolicy;
///
/// let policy = RotationPolicy::new()
///     .with_max_size(50 * 1024 * 1024)
///     .with_max_backups(7);
///
/// assert!(!policy.should_rotate(0, 100 * 1024 * 1024));
/// assert!(policy.should_rotate(50 * 1024 * 1024, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationPolicy {
    /// Size the active file may reach before it is rotated
    pub max_bytes: u64,
    /// Maximum number of rotated files to keep
    pub max_backup_files: usize,
}

impl Default for RotationPolicy {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_BYTES,
            max_backup_files: DEFAULT_MAX_BACKUPS,
        }
    }
}

impl RotationPolicy {
    /// Create a new rotation policy with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum file size
    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_max_size(mut self, size: u64) -> Self {
        self.max_bytes = size;
        self
    }

    /// Set maximum backup files
    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_max_backups(mut self, count: usize) -> Self {
        self.max_backup_files = count;
        self
    }

    /// Whether appending `incoming` bytes to a file of `current_size` bytes
    /// must first rotate it. An empty file is never rotated, so a single
    /// oversized line still lands somewhere.
    #[must_use]
    pub fn should_rotate(&self, current_size: u64, incoming: u64) -> bool {
        current_size > 0 && current_size.saturating_add(incoming) > self.max_bytes
    }
}

/// Rotating file appender
///
/// Lines are rendered plain (no glyphs, no color) and flushed after each
/// append.
///
/// # Examples
///
/// ```no_run
/// use visiondesk_logger::appenders::{RotatingFileAppender, RotationPolicy};
///
/// let policy = RotationPolicy::new().with_max_size(1024 * 1024).with_max_backups(3);
/// let appender = RotatingFileAppender::with_policy("logs/visiondesk_20250108.log", policy).unwrap();
/// ```
pub struct RotatingFileAppender {
    base_path: PathBuf,
    policy: RotationPolicy,
    writer: Option<BufWriter<File>>,
    current_size: u64,
    /// Rotation failure recovered from during the last append
    pending_warning: Option<LoggerError>,
    /// Set while rotation keeps failing; cleared by the next success
    rotation_failing: bool,
}

impl RotatingFileAppender {
    /// Create a new rotating file appender with the default policy
    ///
    /// # Errors
    ///
    /// Returns error if the directory or file cannot be created or opened
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::with_policy(path, RotationPolicy::default())
    }

    /// Create a new rotating file appender with custom policy
    ///
    /// # Errors
    ///
    /// Returns error if the directory or file cannot be created or opened
    pub fn with_policy<P: AsRef<Path>>(path: P, policy: RotationPolicy) -> Result<Self> {
        let base_path = path.as_ref().to_path_buf();

        if let Some(parent) = base_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    LoggerError::io_operation(
                        "create log directory",
                        format!("Failed to create directory '{}'", parent.display()),
                        e,
                    )
                })?;
            }
        }

        let (file, current_size) = Self::open_append(&base_path)?;

        Ok(Self {
            base_path,
            policy,
            writer: Some(BufWriter::new(file)),
            current_size,
            pending_warning: None,
            rotation_failing: false,
        })
    }

    fn open_append(path: &Path) -> Result<(File, u64)> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                LoggerError::file_appender(
                    path.display().to_string(),
                    format!("Failed to open: {}", e),
                )
            })?;

        let size = file
            .metadata()
            .map_err(|e| {
                LoggerError::file_appender(
                    path.display().to_string(),
                    format!("Cannot access file metadata: {}", e),
                )
            })?
            .len();

        Ok((file, size))
    }

    /// Shift generations down by one and start a fresh active file
    fn rotate(&mut self) -> Result<()> {
        let failed = |path: &Path, what: &str, e: std::io::Error| {
            LoggerError::file_rotation(path.display().to_string(), format!("{}: {}", what, e))
        };

        // Release the handle before renaming the file underneath it
        if let Some(mut writer) = self.writer.take() {
            writer
                .flush()
                .map_err(|e| failed(&self.base_path, "flush before rotation", e))?;
        }

        let keep = self.policy.max_backup_files;
        if keep == 0 {
            let file = OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&self.base_path)
                .map_err(|e| failed(&self.base_path, "truncate active file", e))?;
            self.writer = Some(BufWriter::new(file));
            self.current_size = 0;
            return Ok(());
        }

        let evicted = self.backup_path(keep);
        if evicted.exists() {
            fs::remove_file(&evicted).map_err(|e| failed(&evicted, "evict oldest generation", e))?;
        }

        for generation in (1..keep).rev() {
            let from = self.backup_path(generation);
            if from.exists() {
                fs::rename(&from, self.backup_path(generation + 1))
                    .map_err(|e| failed(&from, "shift generation", e))?;
            }
        }

        if self.base_path.exists() {
            fs::rename(&self.base_path, self.backup_path(1))
                .map_err(|e| failed(&self.base_path, "move active file to .1", e))?;
        }

        let (file, _) = Self::open_append(&self.base_path).map_err(|e| {
            LoggerError::file_rotation(self.base_path.display().to_string(), e.to_string())
        })?;
        self.writer = Some(BufWriter::new(file));
        self.current_size = 0;
        Ok(())
    }

    /// Path of rotated generation `generation` (`1` is the newest)
    #[must_use]
    pub fn backup_path(&self, generation: usize) -> PathBuf {
        let mut name = self
            .base_path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "visiondesk.log".into());
        name.push(format!(".{}", generation));
        self.base_path.with_file_name(name)
    }

    /// Get current file size
    #[must_use]
    pub fn current_size(&self) -> u64 {
        self.current_size
    }

    /// Get base path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.base_path
    }

    /// Get rotation policy
    #[must_use]
    pub fn policy(&self) -> &RotationPolicy {
        &self.policy
    }
}

impl Appender for RotatingFileAppender {
    fn append(&mut self, event: &LogEvent) -> Result<()> {
        let mut line = FormatterConfig::PLAIN.format(event, SinkKind::File);
        line.push('\n');
        let bytes = line.len() as u64;

        if self.policy.should_rotate(self.current_size, bytes) {
            match self.rotate() {
                Ok(()) => self.rotation_failing = false,
                Err(e) => {
                    // Keep logging into whatever file we can still reach
                    if self.writer.is_none() {
                        match Self::open_append(&self.base_path) {
                            Ok((file, size)) => {
                                self.writer = Some(BufWriter::new(file));
                                self.current_size = size;
                            }
                            Err(reopen_err) => {
                                self.pending_warning = Some(e);
                                return Err(reopen_err);
                            }
                        }
                    }

                    // Retried on every write; reported once per failure streak
                    if !self.rotation_failing {
                        self.rotation_failing = true;
                        self.pending_warning = Some(e);
                    }
                }
            }
        }

        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| LoggerError::writer("File writer not initialized"))?;

        writer
            .write_all(line.as_bytes())
            .and_then(|()| writer.flush())
            .map_err(|e| {
                LoggerError::file_appender(
                    self.base_path.display().to_string(),
                    format!("Failed to write log entry: {}", e),
                )
            })?;
        self.current_size += bytes;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush().map_err(|e| {
                LoggerError::file_appender(
                    self.base_path.display().to_string(),
                    format!("Failed to flush: {}", e),
                )
            })?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "rotating_file"
    }

    fn kind(&self) -> SinkKind {
        SinkKind::File
    }

    fn take_warning(&mut self) -> Option<LoggerError> {
        self.pending_warning.take()
    }
}

impl Drop for RotatingFileAppender {
    fn drop(&mut self) {
        if let Some(mut writer) = self.writer.take() {
            let _ = writer.flush();
        }
    }
}
