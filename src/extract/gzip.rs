use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::Path;

use flate2::read::GzDecoder;

use super::Outcome;

const BLOCK_SIZE: usize = 64 * 1024;

/// Adapter for a bare `.gz`: one compressed file, decompressed onto the
/// destination path itself (not into a directory). Streams in fixed-size
/// blocks so the payload never sits in memory whole.
pub struct GzipExtractor;

impl GzipExtractor {
    pub fn extract(&self, source: &Path, destination: &Path) -> Outcome {
        match self.run(source, destination) {
            Ok(outcome) => outcome,
            Err(e) => Outcome::Failed(e.to_string()),
        }
    }

    fn run(&self, source: &Path, destination: &Path) -> io::Result<Outcome> {
        let mut decoder = GzDecoder::new(File::open(source)?);
        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut output = File::create(destination)?;

        let mut block = vec![0u8; BLOCK_SIZE];
        loop {
            let n = decoder.read(&mut block)?;
            if n == 0 {
                break;
            }
            output.write_all(&block[..n])?;
        }
        Ok(Outcome::Success)
    }
}
