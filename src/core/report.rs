use crate::core::file_manager::{report_failure, FileManager};
use crate::utils::error::Result;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// A report that generates, reviews and saves itself to disk.
///
/// File handling lives inside the report; [`ReportV2`] hands it to a
/// [`FileManager`] instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    content: String,
}

impl Report {
    pub const DEFAULT_FILE_NAME: &'static str = "Report.txt";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn generate_report(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// True when the report has any content at all.
    pub fn review_report(report: &Report) -> bool {
        !report.content.is_empty()
    }

    /// Saves to `Report.txt` in the working directory.
    pub fn save_to_file(&self) {
        self.save_to(Path::new("."));
    }

    /// Saves to `Report.txt` inside `dir`.
    pub fn save_to(&self, dir: impl AsRef<Path>) {
        let path = dir.as_ref().join(Self::DEFAULT_FILE_NAME);
        if let Err(e) = self.write_to(&path) {
            report_failure(&path, &e);
        }
    }

    fn write_to(&self, path: &Path) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(self.content.as_bytes())?;
        file.flush()?;
        Ok(())
    }
}

/// A named report whose persistence is delegated to [`FileManager`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportV2 {
    name: String,
    content: String,
}

impl ReportV2 {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: String::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn generate_report(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn review_report(report: &ReportV2) -> bool {
        !report.content.is_empty()
    }

    /// Writes the content to a file named after the report, relative to the
    /// working directory. An ungenerated report produces an empty file.
    pub fn export_report(&self) {
        FileManager::new().save_to_file(&self.name, &self.content);
    }

    pub fn export_report_in(&self, dir: impl AsRef<Path>) {
        FileManager::new().save_to_file(dir.as_ref().join(&self.name), &self.content);
    }
}
