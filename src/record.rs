use std::path::PathBuf;

/// A terminal, non-archive file produced by the traversal.
///
/// `source_path` is where the file really sits after extraction;
/// `logical_path` is where it would sit if every nested archive were
/// transparently flattened into the original archive's namespace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileRecord {
    pub source_path: PathBuf,
    pub logical_path: PathBuf,
}

/// An archive occurrence that could not be expanded further.
///
/// Exactly one of `encrypted` / `failed` is set; the whole subtree below the
/// archive stays unexpanded. `destination_path` is the path the extraction
/// would have used — on the encrypted short-circuit nothing is written there.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArchiveRecord {
    pub source_path: PathBuf,
    pub logical_path: PathBuf,
    pub destination_path: PathBuf,
    pub encrypted: bool,
    pub failed: bool,
    pub error: Option<String>,
}

impl ArchiveRecord {
    pub fn encrypted(
        source_path: PathBuf,
        logical_path: PathBuf,
        destination_path: PathBuf,
        message: String,
    ) -> Self {
        Self {
            source_path,
            logical_path,
            destination_path,
            encrypted: true,
            failed: false,
            error: Some(message),
        }
    }

    pub fn failed(
        source_path: PathBuf,
        logical_path: PathBuf,
        destination_path: PathBuf,
        message: String,
    ) -> Self {
        Self {
            source_path,
            logical_path,
            destination_path,
            encrypted: false,
            failed: true,
            error: Some(message),
        }
    }
}

/// One entry of a run's result set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Record {
    Leaf(FileRecord),
    Archive(ArchiveRecord),
}

impl Record {
    pub fn logical_path(&self) -> &std::path::Path {
        match self {
            Record::Leaf(leaf) => &leaf.logical_path,
            Record::Archive(archive) => &archive.logical_path,
        }
    }

    pub fn as_leaf(&self) -> Option<&FileRecord> {
        match self {
            Record::Leaf(leaf) => Some(leaf),
            Record::Archive(_) => None,
        }
    }

    pub fn as_archive(&self) -> Option<&ArchiveRecord> {
        match self {
            Record::Archive(archive) => Some(archive),
            Record::Leaf(_) => None,
        }
    }
}
