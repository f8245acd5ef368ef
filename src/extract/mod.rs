//! Per-format extraction adapters.
//!
//! Every adapter exposes the same capability: `extract(source, destination)`
//! returning an [`Outcome`]. An archive extracts fully or not at all; there is
//! no partial-success state. Adapters never panic on bad input — anything the
//! underlying format library rejects becomes `Outcome::Failed` with the
//! library's message, and password protection becomes `Outcome::Encrypted`
//! before output is committed where the format allows an upfront check.

use std::path::Path;

use crate::format::ArchiveFormat;

mod gzip;
mod rar;
mod sevenz;
mod tar;
mod zip;

pub use self::gzip::GzipExtractor;
pub use self::rar::RarExtractor;
pub use self::sevenz::SevenZipExtractor;
pub use self::tar::TarExtractor;
pub use self::zip::ZipExtractor;

/// Result of one adapter invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Encrypted(String),
    Failed(String),
}

pub enum ArchiveExtractor {
    Zip(ZipExtractor),
    Tar(TarExtractor),
    Gzip(GzipExtractor),
    Rar(RarExtractor),
    SevenZip(SevenZipExtractor),
}

impl ArchiveExtractor {
    pub fn extract(&self, source: &Path, destination: &Path) -> Outcome {
        match self {
            ArchiveExtractor::Zip(extractor) => extractor.extract(source, destination),
            ArchiveExtractor::Tar(extractor) => extractor.extract(source, destination),
            ArchiveExtractor::Gzip(extractor) => extractor.extract(source, destination),
            ArchiveExtractor::Rar(extractor) => extractor.extract(source, destination),
            ArchiveExtractor::SevenZip(extractor) => extractor.extract(source, destination),
        }
    }
}

pub fn extractor_for(format: ArchiveFormat) -> ArchiveExtractor {
    match format {
        ArchiveFormat::Zip => ArchiveExtractor::Zip(ZipExtractor),
        ArchiveFormat::Tar => ArchiveExtractor::Tar(TarExtractor),
        ArchiveFormat::Gzip => ArchiveExtractor::Gzip(GzipExtractor),
        ArchiveFormat::Rar => ArchiveExtractor::Rar(RarExtractor),
        ArchiveFormat::SevenZip => ArchiveExtractor::SevenZip(SevenZipExtractor),
    }
}
