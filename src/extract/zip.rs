use std::fs::{self, File};
use std::io;
use std::path::Path;

use super::Outcome;

pub struct ZipExtractor;

impl ZipExtractor {
    pub fn extract(&self, source: &Path, destination: &Path) -> Outcome {
        match self.run(source, destination) {
            Ok(outcome) => outcome,
            Err(e) => Outcome::Failed(e.to_string()),
        }
    }

    fn run(&self, source: &Path, destination: &Path) -> io::Result<Outcome> {
        let file = File::open(source)?;
        let mut archive = zip::ZipArchive::new(file).map_err(io::Error::other)?;

        // The encryption flag bit is readable without decrypting, so the
        // check happens before any byte lands on disk.
        for index in 0..archive.len() {
            let entry = archive.by_index_raw(index).map_err(io::Error::other)?;
            if entry.encrypted() {
                return Ok(Outcome::Encrypted(format!(
                    "entry '{}' is password protected",
                    entry.name()
                )));
            }
        }

        fs::create_dir_all(destination)?;
        archive.extract(destination).map_err(io::Error::other)?;
        Ok(Outcome::Success)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use zip::unstable::write::FileOptionsExt;

    use super::*;

    fn write_zip(path: &Path, entries: &[(&str, &[u8])], password: Option<&[u8]>) {
        let file = File::create(path).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        for (name, data) in entries {
            let mut options = zip::write::SimpleFileOptions::default()
                .compression_method(zip::CompressionMethod::Stored);
            if let Some(password) = password {
                options = options.with_deprecated_encryption(password);
            }
            writer.start_file(*name, options).unwrap();
            writer.write_all(data).unwrap();
        }
        writer.finish().unwrap();
    }

    #[test]
    fn extract_plain_zip() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("a.zip");
        write_zip(&source, &[("notes.txt", b"hello"), ("sub/inner.txt", b"x")], None);

        let dest = dir.path().join("a");
        let outcome = ZipExtractor.extract(&source, &dest);
        assert_eq!(outcome, Outcome::Success);
        assert_eq!(fs::read(dest.join("notes.txt")).unwrap(), b"hello");
        assert_eq!(fs::read(dest.join("sub/inner.txt")).unwrap(), b"x");
    }

    #[test]
    fn encrypted_zip_short_circuits_without_writes() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("secret.zip");
        write_zip(&source, &[("hidden.txt", b"shh")], Some(b"pw"));

        let dest = dir.path().join("secret");
        let outcome = ZipExtractor.extract(&source, &dest);
        assert!(matches!(outcome, Outcome::Encrypted(_)));
        assert!(!dest.exists());
    }

    #[test]
    fn corrupt_zip_fails_with_message() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("bad.zip");
        fs::write(&source, b"this is not a zip archive").unwrap();

        let outcome = ZipExtractor.extract(&source, &dir.path().join("bad"));
        match outcome {
            Outcome::Failed(message) => assert!(!message.is_empty()),
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn missing_source_fails() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = ZipExtractor.extract(&dir.path().join("gone.zip"), &dir.path().join("out"));
        assert!(matches!(outcome, Outcome::Failed(_)));
    }
}
