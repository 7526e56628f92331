use crate::utils::error::{DemoError, Result};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// How a file is opened, using the classic `fopen` mode letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileMode {
    /// `r`
    #[default]
    Read,
    /// `r+`
    ReadWrite,
    /// `w`: create or truncate.
    Write,
    /// `w+`
    WriteRead,
    /// `a`
    Append,
    /// `a+`
    AppendRead,
    /// `x`: fails if the file exists.
    CreateNew,
    /// `x+`
    CreateNewRead,
}

impl FileMode {
    fn open_options(self) -> OpenOptions {
        let mut options = OpenOptions::new();
        match self {
            FileMode::Read => options.read(true),
            FileMode::ReadWrite => options.read(true).write(true),
            FileMode::Write => options.write(true).create(true).truncate(true),
            FileMode::WriteRead => options.read(true).write(true).create(true).truncate(true),
            FileMode::Append => options.append(true).create(true),
            FileMode::AppendRead => options.read(true).append(true).create(true),
            FileMode::CreateNew => options.write(true).create_new(true),
            FileMode::CreateNewRead => options.read(true).write(true).create_new(true),
        };
        options
    }
}

impl FromStr for FileMode {
    type Err = DemoError;

    fn from_str(mode: &str) -> Result<Self> {
        // binary/text flags carry no meaning here
        let normalized: String = mode.chars().filter(|c| !matches!(c, 'b' | 't')).collect();

        match normalized.as_str() {
            "r" => Ok(FileMode::Read),
            "r+" => Ok(FileMode::ReadWrite),
            "w" => Ok(FileMode::Write),
            "w+" => Ok(FileMode::WriteRead),
            "a" => Ok(FileMode::Append),
            "a+" => Ok(FileMode::AppendRead),
            "x" => Ok(FileMode::CreateNew),
            "x+" => Ok(FileMode::CreateNewRead),
            _ => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid file mode '{}'", mode),
            )
            .into()),
        }
    }
}

/// Owns file handling for whoever needs content persisted.
///
/// `open_file`, `write_file` and `close_file` report failures to the caller;
/// `save_to_file` composes them and only ever logs a failure.
#[derive(Debug, Default)]
pub struct FileManager {
    file: Option<File>,
    path: Option<PathBuf>,
}

impl FileManager {
    pub const DEFAULT_FILE_NAME: &'static str = "newFile.txt";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.file.is_some()
    }

    /// Opens `name`, replacing (and thereby closing) any file already held.
    pub fn open_file(&mut self, name: impl AsRef<Path>, mode: FileMode) -> Result<()> {
        let path = name.as_ref();
        tracing::debug!("Opening {} with mode {:?}", path.display(), mode);

        let file = mode.open_options().open(path)?;
        self.file = Some(file);
        self.path = Some(path.to_path_buf());
        Ok(())
    }

    pub fn write_file(&mut self, content: &str) -> Result<()> {
        let file = self.file.as_mut().ok_or_else(not_open)?;
        file.write_all(content.as_bytes())?;
        tracing::debug!("Wrote {} bytes", content.len());
        Ok(())
    }

    pub fn close_file(&mut self) -> Result<()> {
        let mut file = self.file.take().ok_or_else(not_open)?;
        let path = self.path.take();
        file.flush()?;
        drop(file);

        if let Some(path) = path {
            tracing::debug!("Closed {}", path.display());
        }
        Ok(())
    }

    /// Writes `content` to `name`, replacing whatever the file held.
    ///
    /// Failures are reported as a diagnostic and never returned.
    pub fn save_to_file(&mut self, name: impl AsRef<Path>, content: &str) {
        let path = name.as_ref();
        match self.write_whole(path, content) {
            Ok(()) => tracing::info!("Saved {}", path.display()),
            Err(e) => report_failure(path, &e),
        }
    }

    pub fn save_to_default(&mut self, content: &str) {
        self.save_to_file(Self::DEFAULT_FILE_NAME, content);
    }

    fn write_whole(&mut self, path: &Path, content: &str) -> Result<()> {
        // drop anything opened earlier so a failed open leaves nothing held
        self.file = None;
        self.path = None;

        self.open_file(path, FileMode::Write)?;
        let written = self.write_file(content);
        // the handle is released whether or not the write succeeded
        let closed = self.close_file();
        written.and(closed)
    }
}

fn not_open() -> DemoError {
    io::Error::other("no file is open").into()
}

/// Prints the failure the way the demos surface it and records it in the log.
pub(crate) fn report_failure(path: &Path, error: &DemoError) {
    println!("{:?}", error.to_string());
    tracing::error!("Could not save {}: {}", path.display(), error);
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn parses_fopen_modes() {
        assert_eq!("r".parse::<FileMode>().unwrap(), FileMode::Read);
        assert_eq!("w".parse::<FileMode>().unwrap(), FileMode::Write);
        assert_eq!("wb".parse::<FileMode>().unwrap(), FileMode::Write);
        assert_eq!("a+".parse::<FileMode>().unwrap(), FileMode::AppendRead);
        assert_eq!("x".parse::<FileMode>().unwrap(), FileMode::CreateNew);
        assert_eq!(FileMode::default(), FileMode::Read);
    }

    #[test]
    fn rejects_unknown_mode_as_io_error() {
        let err = "q".parse::<FileMode>().unwrap_err();
        match err {
            DemoError::IoError(e) => assert_eq!(e.kind(), io::ErrorKind::InvalidInput),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn write_without_open_fails() {
        let mut manager = FileManager::new();
        assert!(manager.write_file("nothing").is_err());
        assert!(manager.close_file().is_err());
    }

    #[test]
    fn open_write_close_round() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("manual.txt");
        let mut manager = FileManager::new();

        manager.open_file(&path, FileMode::Write).unwrap();
        assert!(manager.is_open());
        manager.write_file("one ").unwrap();
        manager.write_file("two").unwrap();
        manager.close_file().unwrap();
        assert!(!manager.is_open());

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "one two");
    }

    #[test]
    fn append_mode_keeps_existing_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("log.txt");
        std::fs::write(&path, "A").unwrap();

        let mut manager = FileManager::new();
        manager.open_file(&path, FileMode::Append).unwrap();
        manager.write_file("B").unwrap();
        manager.close_file().unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "AB");
    }

    #[test]
    fn failed_save_leaves_no_handle_open() {
        let dir = TempDir::new().unwrap();
        let mut manager = FileManager::new();

        manager.save_to_file(dir.path().join("missing").join("out.txt"), "data");

        assert!(!manager.is_open());
    }

    #[test]
    fn failed_save_releases_a_previously_opened_file() {
        let dir = TempDir::new().unwrap();
        let mut manager = FileManager::new();
        manager.open_file(dir.path().join("held.txt"), FileMode::Write).unwrap();
        assert!(manager.is_open());

        manager.save_to_file(dir.path().join("missing").join("x.txt"), "data");

        assert!(!manager.is_open());
        assert!(manager.write_file("late").is_err());
    }
}
