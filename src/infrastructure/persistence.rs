use std::fs;

pub const DEFAULT_RESUME_FILENAME: &str = "optimized_resume.md";

pub struct FileRepository;

impl FileRepository {
    /// Writes the optimized resume text verbatim and returns the filename used.
    pub fn save_optimized_resume(text: &str, filename: &str) -> Result<String, String> {
        match fs::write(filename, text) {
            Ok(_) => Ok(filename.to_string()),
            Err(e) => Err(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_writes_text_verbatim() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.md");
        let filename = path.to_str().unwrap();

        let saved = FileRepository::save_optimized_resume("# Jane Doe\n\n- Rust\n", filename).unwrap();
        assert_eq!(saved, filename);
        assert_eq!(fs::read_to_string(&path).unwrap(), "# Jane Doe\n\n- Rust\n");
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope").join("out.md");

        assert!(FileRepository::save_optimized_resume("text", path.to_str().unwrap()).is_err());
    }
}
