use std::{
    fs::{self, DirBuilder, File, OpenOptions},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use chrono::Utc;

use crate::{
    config::{LoggerConfig, Mode},
    error::{IoOperation, LoggerError, Result},
    level::Level,
    record,
};

#[cfg(unix)]
const DIRECTORY_MODE: u32 = 0o770;
#[cfg(unix)]
const FILE_MODE: u32 = 0o644;

/// Emission surface shared by log sinks.
pub trait Log {
    /// Append a plain `[<ts>]\n<body>\n` record.
    fn create_log(&mut self, body: &str) -> Result<()>;

    /// Append a `[<ts>] [<LEVEL>] <body>\n` record.
    fn log(&mut self, level: Level, body: &str) -> Result<()>;

    fn create_info_log(&mut self, body: &str) -> Result<()> {
        self.log(Level::Info, body)
    }

    fn create_debug_log(&mut self, body: &str) -> Result<()> {
        self.log(Level::Debug, body)
    }

    fn create_error_log(&mut self, body: &str) -> Result<()> {
        self.log(Level::Error, body)
    }
}

/// Append-only file logger.
///
/// Every emitting call is flushed before it returns. One `Logger` per file; the type does
/// no locking, so share it behind a `Mutex` if several threads need it.
#[derive(Debug)]
pub struct Logger {
    path: PathBuf,
    mode: Mode,
    writer: BufWriter<File>,
}

/// Validate `config`, create the directory if missing and open the log file for appending.
pub fn create_logger(config: LoggerConfig) -> Result<Logger> {
    Logger::new(config)
}

impl Logger {
    pub fn new(config: LoggerConfig) -> Result<Self> {
        let LoggerConfig {
            log_directory_path,
            log_name,
            mode,
        } = config;

        // Both fields are checked before anything touches the filesystem.
        if log_directory_path.as_os_str().is_empty() {
            return Err(LoggerError::MissingLogDirectoryPath);
        }
        if log_name.is_empty() {
            return Err(LoggerError::MissingLogName);
        }

        ensure_directory(&log_directory_path)?;

        let path = log_directory_path.join(&log_name);
        let file = open_append(&path)
            .map_err(|e| LoggerError::io(IoOperation::OpenFile, &path, e))?;
        log::debug!("opened log file {} (mode={})", path.display(), mode);

        Ok(Self {
            path,
            mode,
            writer: BufWriter::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Flush, sync and release the file.
    pub fn close(self) -> Result<()> {
        let Self { path, writer, .. } = self;
        let file = writer
            .into_inner()
            .map_err(|e| LoggerError::io(IoOperation::Flush, &path, e.into_error()))?;
        file.sync_all()
            .map_err(|e| LoggerError::io(IoOperation::Sync, &path, e))?;
        log::debug!("closed log file {}", path.display());
        Ok(())
    }

    fn append(&mut self, line: &str) -> Result<()> {
        self.writer
            .write_all(line.as_bytes())
            .map_err(|e| LoggerError::io(IoOperation::Write, &self.path, e))?;
        self.writer
            .flush()
            .map_err(|e| LoggerError::io(IoOperation::Flush, &self.path, e))
    }
}

impl Log for Logger {
    fn create_log(&mut self, body: &str) -> Result<()> {
        let line = record::format_plain(Utc::now(), body);
        self.append(&line)
    }

    /// Debug records are dropped unless the logger runs in [`Mode::Development`]; in that
    /// case nothing is formatted or written and `Ok(())` is returned.
    fn log(&mut self, level: Level, body: &str) -> Result<()> {
        if level == Level::Debug && !self.mode.is_development() {
            return Ok(());
        }
        let line = record::format_leveled(Utc::now(), level, body);
        self.append(&line)
    }
}

fn ensure_directory(dir: &Path) -> Result<()> {
    match fs::metadata(dir) {
        Ok(_) => return Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(LoggerError::io(IoOperation::CreateDirectory, dir, e)),
    }

    log::info!("path {} does not exist, creating directory", dir.display());
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIRECTORY_MODE);
    }
    match builder.create(dir) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(()),
        Err(e) => Err(LoggerError::io(IoOperation::CreateDirectory, dir, e)),
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.create(true).append(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(FILE_MODE);
    }
    options.open(path)
}
