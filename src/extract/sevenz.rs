use std::fs;
use std::path::Path;

use super::Outcome;

pub struct SevenZipExtractor;

impl SevenZipExtractor {
    pub fn extract(&self, source: &Path, destination: &Path) -> Outcome {
        if let Err(e) = fs::create_dir_all(destination) {
            return Outcome::Failed(e.to_string());
        }
        match sevenz_rust2::decompress_file(source, destination) {
            Ok(()) => Outcome::Success,
            Err(sevenz_rust2::Error::PasswordRequired) => {
                Outcome::Encrypted("archive is password protected".to_string())
            }
            Err(e) => Outcome::Failed(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_source_fails() {
        let dir = tempfile::tempdir().unwrap();
        let outcome =
            SevenZipExtractor.extract(&dir.path().join("gone.7z"), &dir.path().join("out"));
        assert!(matches!(outcome, Outcome::Failed(_)));
    }

    #[test]
    fn non_sevenz_bytes_fail() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("bad.7z");
        fs::write(&source, b"not a 7z signature").unwrap();

        let outcome = SevenZipExtractor.extract(&source, &dir.path().join("bad"));
        assert!(matches!(outcome, Outcome::Failed(_)));
    }
}
