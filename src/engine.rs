use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::extract::{Outcome, extractor_for};
use crate::format::{self, ArchiveFormat};
use crate::record::{ArchiveRecord, FileRecord, Record};

/// One archive occurrence waiting in the work queue.
#[derive(Clone, Debug)]
struct PendingArchive {
    source_path: PathBuf,
    logical_path: PathBuf,
    format: ArchiveFormat,
    /// Set only for the top-level entry, which extracts onto the target root
    /// instead of the default name derived from its own file name.
    destination_override: Option<PathBuf>,
}

impl PendingArchive {
    fn discovered(source_path: PathBuf, logical_path: PathBuf, format: ArchiveFormat) -> Self {
        Self {
            source_path,
            logical_path,
            format,
            destination_override: None,
        }
    }

    fn destination_candidate(&self) -> PathBuf {
        self.destination_override
            .clone()
            .unwrap_or_else(|| format::default_destination(&self.source_path))
    }

    /// Logical prefix for files found under this archive's destination.
    ///
    /// The top-level archive maps onto the namespace root; a nested archive
    /// keeps its own name as a path segment above its children.
    fn logical_prefix(&self) -> PathBuf {
        if self.destination_override.is_some() {
            PathBuf::new()
        } else {
            self.logical_path.clone()
        }
    }
}

/// Breadth-first traversal over nested archives.
///
/// Archives discovered at nesting depth N are all extracted before any
/// archive found inside their output, so traversal order is deterministic and
/// memory is bounded by one generation of pending archives. Strictly
/// sequential; no archive is visited twice.
#[derive(Default)]
pub struct ExtractionEngine {
    queue: VecDeque<PendingArchive>,
    records: Vec<Record>,
}

impl ExtractionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extract `archive_path` and every nested archive under it into
    /// `target_root`, which need not exist yet.
    ///
    /// Per-archive failures (password protection, corruption) terminate only
    /// their own branch and come back as [`Record::Archive`] entries; the run
    /// itself fails only when the input is missing or unsupported, or the
    /// target filesystem breaks underneath it.
    pub fn run(mut self, archive_path: &Path, target_root: &Path) -> Result<Vec<Record>> {
        if !archive_path.is_file() {
            return Err(Error::InputNotFound {
                path: archive_path.to_path_buf(),
            });
        }
        let format = format::detect(archive_path).ok_or_else(|| Error::UnsupportedInput {
            path: archive_path.to_path_buf(),
        })?;
        let logical_path = archive_path
            .file_name()
            .map(PathBuf::from)
            .unwrap_or_else(|| archive_path.to_path_buf());

        self.queue.push_back(PendingArchive {
            source_path: archive_path.to_path_buf(),
            logical_path,
            format,
            destination_override: Some(target_root.to_path_buf()),
        });

        while let Some(pending) = self.queue.pop_front() {
            self.process(pending)?;
        }
        Ok(self.records)
    }

    fn process(&mut self, pending: PendingArchive) -> Result<()> {
        // Resolved against the live filesystem: earlier extractions in this
        // run may have just created the candidate path.
        let destination = resolve_destination(&pending.destination_candidate());
        debug!(
            source = %pending.source_path.display(),
            destination = %destination.display(),
            "extracting archive"
        );

        match extractor_for(pending.format).extract(&pending.source_path, &destination) {
            Outcome::Success => self.walk_extracted(&pending, &destination),
            Outcome::Encrypted(message) => {
                warn!(source = %pending.source_path.display(), "archive is password protected");
                self.records.push(Record::Archive(ArchiveRecord::encrypted(
                    pending.source_path,
                    pending.logical_path,
                    destination,
                    message,
                )));
                Ok(())
            }
            Outcome::Failed(message) => {
                warn!(source = %pending.source_path.display(), %message, "extraction failed");
                self.records.push(Record::Archive(ArchiveRecord::failed(
                    pending.source_path,
                    pending.logical_path,
                    destination,
                    message,
                )));
                Ok(())
            }
        }
    }

    /// Discover the output of a successful extraction: nested archives join
    /// the queue, everything else becomes a leaf record.
    fn walk_extracted(&mut self, pending: &PendingArchive, destination: &Path) -> Result<()> {
        if !destination.is_dir() {
            // Single-file decompression: the one output file inherits the
            // archive occurrence's own logical path.
            self.classify(destination.to_path_buf(), pending.logical_path.clone());
            return Ok(());
        }

        let logical_prefix = pending.logical_prefix();
        for entry in WalkDir::new(destination).sort_by_file_name() {
            let entry = entry.map_err(|source| Error::TreeWalk {
                path: destination.to_path_buf(),
                source,
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            // Walk entries always live under the walk root.
            if let Ok(relative) = entry.path().strip_prefix(destination) {
                let logical_path = logical_prefix.join(relative);
                self.classify(entry.into_path(), logical_path);
            }
        }
        Ok(())
    }

    fn classify(&mut self, source_path: PathBuf, logical_path: PathBuf) {
        match format::detect(&source_path) {
            Some(format) => {
                debug!(
                    source = %source_path.display(),
                    logical = %logical_path.display(),
                    "queued nested archive"
                );
                self.queue
                    .push_back(PendingArchive::discovered(source_path, logical_path, format));
            }
            None => self.records.push(Record::Leaf(FileRecord {
                source_path,
                logical_path,
            })),
        }
    }
}

/// Extract `archive_path` and all archives nested inside it into
/// `target_root`, returning one record per leaf file or unexpandable archive.
pub fn extract_nested(
    archive_path: impl AsRef<Path>,
    target_root: impl AsRef<Path>,
) -> Result<Vec<Record>> {
    ExtractionEngine::new().run(archive_path.as_ref(), target_root.as_ref())
}

/// Pick a destination that does not exist yet. A taken candidate gets its
/// final path component prefixed with `(1)`, `(2)`, ... until a free name is
/// found.
fn resolve_destination(candidate: &Path) -> PathBuf {
    if !candidate.exists() {
        return candidate.to_path_buf();
    }
    let parent = candidate.parent().unwrap_or_else(|| Path::new(""));
    let name = candidate
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut suffix = 1u32;
    loop {
        let next = parent.join(format!("({suffix}){name}"));
        if !next.exists() {
            return next;
        }
        suffix += 1;
    }
}
