use std::fs;
use std::path::Path;

use unrar::error::{Code, UnrarError};

use super::Outcome;

pub struct RarExtractor;

impl RarExtractor {
    pub fn extract(&self, source: &Path, destination: &Path) -> Outcome {
        let mut archive = match unrar::Archive::new(source).open_for_processing() {
            Ok(archive) => archive,
            Err(e) => return classify(e),
        };
        if let Err(e) = fs::create_dir_all(destination) {
            return Outcome::Failed(e.to_string());
        }

        loop {
            let header = match archive.read_header() {
                Ok(Some(header)) => header,
                Ok(None) => break,
                Err(e) => return classify(e),
            };
            let is_file = header.entry().is_file();
            let filename = header.entry().filename.clone();

            archive = if is_file {
                let target = destination.join(filename);
                if let Some(parent) = target.parent() {
                    if let Err(e) = fs::create_dir_all(parent) {
                        return Outcome::Failed(e.to_string());
                    }
                }
                match header.extract_to(&target) {
                    Ok(archive) => archive,
                    Err(e) => return classify(e),
                }
            } else {
                match header.skip() {
                    Ok(archive) => archive,
                    Err(e) => return classify(e),
                }
            };
        }
        Outcome::Success
    }
}

// The unrar library reports password protection as an error code, either at
// open time (encrypted headers) or on the first extracted entry.
fn classify(error: UnrarError) -> Outcome {
    if error.code == Code::MissingPassword {
        Outcome::Encrypted("archive is password protected".to_string())
    } else {
        Outcome::Failed(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_source_fails() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = RarExtractor.extract(&dir.path().join("gone.rar"), &dir.path().join("out"));
        assert!(matches!(outcome, Outcome::Failed(_)));
    }

    #[test]
    fn non_rar_bytes_fail() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("bad.rar");
        fs::write(&source, b"Rar? no, just text").unwrap();

        let outcome = RarExtractor.extract(&source, &dir.path().join("bad"));
        assert!(matches!(outcome, Outcome::Failed(_)));
    }
}
