use crate::domain::{ResumeFile, ResumeKind, SelectionError};
use std::fs;
use std::path::Path;

/// Resolves a user-entered path into a resume reference.
///
/// Applies the same `.pdf`/`.docx` filter a file picker would and requires
/// the path to name an existing file. Contents are not inspected.
pub fn select_resume(path: impl AsRef<Path>) -> Result<ResumeFile, SelectionError> {
    let path = path.as_ref();
    let display = path.display().to_string();

    let kind = ResumeKind::from_path(path).ok_or_else(|| SelectionError::UnsupportedType(display.clone()))?;

    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(SelectionError::NotFound(display));
        }
        Err(source) => return Err(SelectionError::Unreadable { path: display, source }),
    };
    if !metadata.is_file() {
        return Err(SelectionError::NotFound(display));
    }

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| display.clone());

    Ok(ResumeFile {
        path: path.to_path_buf(),
        file_name,
        kind,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_select_existing_pdf() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        fs::write(&path, b"%PDF-1.4").unwrap();

        let file = select_resume(&path).unwrap();
        assert_eq!(file.file_name, "resume.pdf");
        assert_eq!(file.kind, ResumeKind::Pdf);
        assert_eq!(file.mime_type(), "application/pdf");
        assert_eq!(file.path, path);
    }

    #[test]
    fn test_select_docx_with_uppercase_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Resume.DOCX");
        fs::write(&path, b"PK").unwrap();

        let file = select_resume(&path).unwrap();
        assert_eq!(file.kind, ResumeKind::Docx);
    }

    #[test]
    fn test_select_rejects_other_types() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("resume.txt");
        fs::write(&path, b"plain").unwrap();

        assert!(matches!(select_resume(&path), Err(SelectionError::UnsupportedType(_))));
    }

    #[test]
    fn test_select_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.pdf");

        assert!(matches!(select_resume(&path), Err(SelectionError::NotFound(_))));
    }

    #[test]
    fn test_select_directory_is_not_a_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("folder.pdf");
        fs::create_dir(&path).unwrap();

        assert!(matches!(select_resume(&path), Err(SelectionError::NotFound(_))));
    }
}
