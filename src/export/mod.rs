// src/export/mod.rs - Writing generated dorks to disk
mod json;
mod text;

use std::path::Path;
use async_trait::async_trait;
use serde::{Serialize, Deserialize};
use tracing::{debug, info};

use crate::dork::GeneratedDorks;
use crate::error::{DorkError, DorkResult};
use crate::session::Session;

pub use json::JsonExporter;
pub use text::TextExporter;

/// Export file format
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ExportFormat {
    Text,
    JSON,
}

/// Renders generated dorks into one export format
#[async_trait]
pub trait Exporter: Send + Sync {
    /// Render the export file contents
    fn render(&self, dorks: &GeneratedDorks, session: &Session) -> DorkResult<String>;

    /// Get the supported format
    fn supported_format(&self) -> ExportFormat;

    /// Render and write to `output_path`
    async fn write(&self, dorks: &GeneratedDorks, session: &Session, output_path: &Path) -> DorkResult<()> {
        let contents = self.render(dorks, session)?;

        tokio::fs::write(output_path, contents).await
            .map_err(|e| DorkError::FileError {
                path: output_path.to_path_buf(),
                message: format!("Failed to write export: {}", e),
            })
    }
}

/// Pick the format from a file extension; anything but `.json` is text
pub fn format_for_path(path: &Path) -> ExportFormat {
    match path.extension().and_then(|e| e.to_str()).map(str::to_lowercase).as_deref() {
        Some("json") => ExportFormat::JSON,
        _ => ExportFormat::Text,
    }
}

fn exporter_for(format: ExportFormat) -> Box<dyn Exporter> {
    match format {
        ExportFormat::Text => Box::new(TextExporter),
        ExportFormat::JSON => Box::new(JsonExporter),
    }
}

/// Export dorks to `path` in the format its extension implies
pub async fn export_dorks(dorks: &GeneratedDorks, session: &Session, path: &Path) -> DorkResult<ExportFormat> {
    let exporter = exporter_for(format_for_path(path));
    let format = exporter.supported_format();
    debug!("Exporting {} dorks as {:?} to {}", dorks.total(), format, path.display());

    exporter.write(dorks, session, path).await?;

    info!("Exported dorks to {}", path.display());
    Ok(format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    use crate::dork::Category;

    fn session() -> Session {
        let mut session = Session::new();
        session.targets = vec!["example.com".to_string()];
        session.categories.insert(Category::Database);
        session
    }

    #[test]
    fn test_format_for_path() {
        assert_eq!(format_for_path(&PathBuf::from("out.json")), ExportFormat::JSON);
        assert_eq!(format_for_path(&PathBuf::from("OUT.JSON")), ExportFormat::JSON);
        assert_eq!(format_for_path(&PathBuf::from("dorks.txt")), ExportFormat::Text);
        assert_eq!(format_for_path(&PathBuf::from("dorks")), ExportFormat::Text);
    }

    #[tokio::test]
    async fn test_export_text_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dorks.txt");
        let session = session();
        let dorks = session.generate().unwrap();

        let format = export_dorks(&dorks, &session, &path).await.unwrap();
        assert_eq!(format, ExportFormat::Text);

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# Dork Factory Export\n"));
        assert!(written.contains("## Database Dumps\n"));
    }

    #[tokio::test]
    async fn test_export_json_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dorks.json");
        let session = session();
        let dorks = session.generate().unwrap();

        export_dorks(&dorks, &session, &path).await.unwrap();

        let written: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["categories"][0]["dorks"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_export_to_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no/such/dir/dorks.txt");
        let session = session();
        let dorks = session.generate().unwrap();

        let result = export_dorks(&dorks, &session, &path).await;
        assert!(matches!(result, Err(DorkError::FileError { .. })));
    }
}
