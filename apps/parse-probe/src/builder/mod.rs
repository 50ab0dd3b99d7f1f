// Document builder: turns a ResumeFixture into a one-page PDF on disk.
// Layout is pure and always compiled; the PDF writer sits behind the
// `render` feature.

#[cfg(feature = "render")]
mod encoding;
pub mod layout;
#[cfg(feature = "render")]
mod pdf;

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::errors::BuildError;
use crate::models::ResumeFixture;

#[cfg(feature = "render")]
use layout::layout_resume;

/// Where the rendered resume ended up.
#[derive(Debug)]
pub enum BuiltDocument {
    /// Fresh temp file owned by the run. Removed on `cleanup` or on drop.
    Temp(NamedTempFile),
    /// Caller-supplied path. Never removed.
    Kept(PathBuf),
}

impl BuiltDocument {
    pub fn path(&self) -> &Path {
        match self {
            BuiltDocument::Temp(file) => file.path(),
            BuiltDocument::Kept(path) => path,
        }
    }

    /// Deletes the document if the run owns it. Returns whether a file was
    /// removed.
    pub fn cleanup(self) -> std::io::Result<bool> {
        match self {
            BuiltDocument::Temp(file) => {
                let path = file.path().to_path_buf();
                file.close()?;
                debug!("Removed {}", path.display());
                Ok(true)
            }
            BuiltDocument::Kept(_) => Ok(false),
        }
    }
}

/// Renders the fixture to PDF bytes.
pub fn render(fixture: &ResumeFixture) -> Result<Vec<u8>, BuildError> {
    #[cfg(feature = "render")]
    {
        pdf::render_pdf(&layout_resume(fixture))
    }
    #[cfg(not(feature = "render"))]
    {
        let _ = fixture;
        Err(BuildError::RendererUnavailable)
    }
}

/// Builds the resume PDF at `output`, or in a new `.pdf` temp file when no
/// path is given.
pub fn build_document(
    fixture: &ResumeFixture,
    output: Option<&Path>,
) -> Result<BuiltDocument, BuildError> {
    let bytes = render(fixture)?;

    let document = match output {
        Some(path) => {
            std::fs::write(path, &bytes)?;
            BuiltDocument::Kept(path.to_path_buf())
        }
        None => {
            let mut file = tempfile::Builder::new().suffix(".pdf").tempfile()?;
            file.write_all(&bytes)?;
            file.flush()?;
            BuiltDocument::Temp(file)
        }
    };

    info!(
        "Wrote {} bytes of PDF to {}",
        bytes.len(),
        document.path().display()
    );
    Ok(document)
}

#[cfg(all(test, feature = "render"))]
mod tests {
    use super::*;
    use crate::models::resume::ExperienceEntry;

    #[test]
    fn test_temp_document_exists_and_is_valid_pdf() {
        let doc = build_document(&ResumeFixture::default(), None).unwrap();
        let path = doc.path().to_path_buf();

        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("pdf"));
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
        assert!(lopdf::Document::load(&path).is_ok());

        assert!(doc.cleanup().unwrap());
        assert!(!path.exists());
    }

    #[test]
    fn test_temp_document_removed_on_drop() {
        let doc = build_document(&ResumeFixture::default(), None).unwrap();
        let path = doc.path().to_path_buf();
        drop(doc);
        assert!(!path.exists());
    }

    #[test]
    fn test_kept_document_survives_cleanup() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("resume.pdf");

        let doc = build_document(&ResumeFixture::default(), Some(&target)).unwrap();
        assert_eq!(doc.path(), target.as_path());
        assert!(!doc.cleanup().unwrap());
        assert!(target.exists());
    }

    #[test]
    fn test_every_fixture_literal_is_extractable() {
        let bytes = render(&ResumeFixture::default()).unwrap();
        let text = pdf_extract::extract_text_from_mem(&bytes).unwrap();

        for expected in ResumeFixture::default().expected_text() {
            assert!(text.contains(&expected), "missing {expected:?} in:\n{text}");
        }
        assert!(text.contains('\u{2022}'), "bullet glyph missing in:\n{text}");
    }

    #[test]
    fn test_custom_fixture_is_rendered() {
        let fixture = ResumeFixture {
            name: "John Doe".to_string(),
            experience: vec![ExperienceEntry {
                role: "Rust Engineer - Ferris Ltd".to_string(),
                bullets: vec!["Shipped a parser".to_string()],
            }],
            ..ResumeFixture::default()
        };
        let bytes = render(&fixture).unwrap();
        let text = pdf_extract::extract_text_from_mem(&bytes).unwrap();

        assert!(text.contains("John Doe"));
        assert!(text.contains("Rust Engineer - Ferris Ltd"));
        assert!(!text.contains("TechCorp"));
    }
}
