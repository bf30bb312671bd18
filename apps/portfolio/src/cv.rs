use std::io::ErrorKind;
use std::path::Path;

use crate::errors::AppError;

/// The downloadable CV, read fresh for every request.
#[derive(Debug)]
pub struct CvFile {
    pub bytes: Vec<u8>,
    pub filename: String,
}

impl CvFile {
    pub async fn read(path: &Path, filename: &str) -> Result<Self, AppError> {
        let bytes = tokio::fs::read(path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => AppError::NotFound(format!("CV not found at {}", path.display())),
            _ => AppError::Io(e),
        })?;
        Ok(Self {
            bytes,
            filename: filename.to_string(),
        })
    }

    /// `Content-Disposition` forcing a download under the display name.
    pub fn disposition(&self) -> String {
        let safe: String = self
            .filename
            .chars()
            .filter(|c| !matches!(c, '"' | '\\' | '\r' | '\n'))
            .collect();
        format!("attachment; filename=\"{safe}\"")
    }

    pub fn content_type(&self) -> &'static str {
        if self.filename.to_ascii_lowercase().ends_with(".pdf") {
            "application/pdf"
        } else {
            "application/octet-stream"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reads_file_under_display_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cv-2024.pdf");
        std::fs::write(&path, b"%PDF-1.4").unwrap();

        let cv = CvFile::read(&path, "Jane_Doe_CV.pdf").await.unwrap();
        assert_eq!(cv.bytes, b"%PDF-1.4");
        assert_eq!(cv.disposition(), "attachment; filename=\"Jane_Doe_CV.pdf\"");
        assert_eq!(cv.content_type(), "application/pdf");
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = CvFile::read(&dir.path().join("nope.pdf"), "CV.pdf")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_disposition_strips_quotes() {
        let cv = CvFile {
            bytes: Vec::new(),
            filename: "my \"best\" cv.pdf".into(),
        };
        assert_eq!(cv.disposition(), "attachment; filename=\"my best cv.pdf\"");
    }
}
