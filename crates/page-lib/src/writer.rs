//! Output file handling

use crate::config::{DEFAULT_OUTPUT_DIR, INDEX_FILE};
use crate::render::RenderedPage;
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;

/// Writes rendered pages to `<output_dir>/index.html`
#[derive(Debug, Clone)]
pub struct PageWriter {
    output_dir: PathBuf,
}

impl Default for PageWriter {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_DIR)
    }
}

impl PageWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(INDEX_FILE)
    }

    /// Write the page, creating the output directory if needed.
    ///
    /// An existing `index.html` is truncated and replaced; other files in
    /// the directory are left alone. Returns the path written.
    pub fn write(&self, page: &RenderedPage) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir).with_context(|| {
            format!(
                "Failed to create output directory {}",
                self.output_dir.display()
            )
        })?;

        let path = self.output_path();
        let mut file = File::create(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        file.write_all(page.as_bytes())
            .and_then(|_| file.flush())
            .with_context(|| format!("Failed to write {}", path.display()))?;

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MetricSample;
    use crate::render::render;
    use tempfile::TempDir;

    fn page() -> RenderedPage {
        render(&[MetricSample::new(
            "api",
            "http_server_requests_seconds_sum",
            "42.5",
        )])
    }

    #[test]
    fn test_write_creates_missing_directories() {
        let temp = TempDir::new().unwrap();
        let writer = PageWriter::new(temp.path().join("site").join("public"));

        let path = writer.write(&page()).unwrap();

        assert_eq!(path, temp.path().join("site/public/index.html"));
        assert_eq!(fs::read_to_string(&path).unwrap(), page().as_str());
    }

    #[test]
    fn test_write_twice_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let writer = PageWriter::new(temp.path().join("public"));

        let first = writer.write(&page()).unwrap();
        let first_content = fs::read(&first).unwrap();
        let second = writer.write(&page()).unwrap();

        assert_eq!(first, second);
        assert_eq!(fs::read(&second).unwrap(), first_content);
    }

    #[test]
    fn test_write_truncates_previous_page() {
        let temp = TempDir::new().unwrap();
        let writer = PageWriter::new(temp.path());
        fs::write(writer.output_path(), "x".repeat(64 * 1024)).unwrap();

        writer.write(&render(&[])).unwrap();

        assert_eq!(
            fs::read_to_string(writer.output_path()).unwrap(),
            render(&[]).as_str()
        );
    }

    #[test]
    fn test_existing_directory_keeps_unrelated_files() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("public");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("style.css"), "body {}").unwrap();

        PageWriter::new(&dir).write(&page()).unwrap();

        assert_eq!(fs::read_to_string(dir.join("style.css")).unwrap(), "body {}");
        assert!(dir.join("index.html").exists());
    }

    #[test]
    fn test_write_fails_when_directory_is_a_file() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("public");
        fs::write(&blocker, "not a directory").unwrap();

        let err = PageWriter::new(&blocker).write(&page()).unwrap_err();

        assert!(err.to_string().contains("Failed to create output directory"));
    }

    #[test]
    fn test_default_writer_targets_public() {
        assert_eq!(
            PageWriter::default().output_path(),
            PathBuf::from("public/index.html")
        );
    }
}
