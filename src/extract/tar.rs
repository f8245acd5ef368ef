use std::fs::{self, File};
use std::io::{self, Read, Seek};
use std::path::Path;

use flate2::read::GzDecoder;

use super::Outcome;

/// Adapter for `.tar` and `.tar.gz`. The gzip layer is sniffed from the
/// stream magic rather than the file name, so a mislabeled tarball still
/// extracts.
pub struct TarExtractor;

impl TarExtractor {
    pub fn extract(&self, source: &Path, destination: &Path) -> Outcome {
        match self.run(source, destination) {
            Ok(outcome) => outcome,
            Err(e) => Outcome::Failed(e.to_string()),
        }
    }

    fn run(&self, source: &Path, destination: &Path) -> io::Result<Outcome> {
        let mut file = File::open(source)?;
        let gzipped = starts_with_gzip_magic(&mut file)?;
        fs::create_dir_all(destination)?;
        if gzipped {
            tar::Archive::new(GzDecoder::new(file)).unpack(destination)?;
        } else {
            tar::Archive::new(file).unpack(destination)?;
        }
        Ok(Outcome::Success)
    }
}

fn starts_with_gzip_magic<R: Read + Seek>(reader: &mut R) -> io::Result<bool> {
    let mut magic = [0u8; 2];
    let gzipped = match reader.read_exact(&mut magic) {
        Ok(()) => magic == [0x1F, 0x8B],
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => false,
        Err(e) => return Err(e),
    };
    reader.rewind()?;
    Ok(gzipped)
}
