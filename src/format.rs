use std::path::{Path, PathBuf};

/// Archive kinds the dispatch table knows how to hand off.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArchiveFormat {
    Zip,
    Tar,
    Gzip,
    Rar,
    SevenZip,
}

/// Map a file name to the format that can extract it.
///
/// The compound suffix `.tar.gz` goes to the tar adapter, which decompresses
/// the gzip stream itself; a bare `.gz` is single-file decompression. Matching
/// is on the extension as given, without case normalization. `None` means the
/// file is a terminal leaf, not an archive.
pub fn detect(path: &Path) -> Option<ArchiveFormat> {
    let name = path.file_name()?.to_str()?;
    if name.ends_with(".tar.gz") {
        return Some(ArchiveFormat::Tar);
    }
    match path.extension()?.to_str()? {
        "zip" => Some(ArchiveFormat::Zip),
        "tar" => Some(ArchiveFormat::Tar),
        "gz" => Some(ArchiveFormat::Gzip),
        "rar" => Some(ArchiveFormat::Rar),
        "7z" => Some(ArchiveFormat::SevenZip),
        _ => None,
    }
}

pub fn is_archive(path: &Path) -> bool {
    detect(path).is_some()
}

/// Default destination for an archive: the source path with its archive
/// suffix stripped. `.tar.gz` loses both extensions, everything else loses
/// the last one.
pub fn default_destination(path: &Path) -> PathBuf {
    if let Some(name) = path.file_name().and_then(|n| n.to_str())
        && let Some(stem) = name.strip_suffix(".tar.gz")
    {
        return path.with_file_name(stem);
    }
    path.with_extension("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_simple_extensions() {
        assert_eq!(detect(Path::new("a.zip")), Some(ArchiveFormat::Zip));
        assert_eq!(detect(Path::new("a.tar")), Some(ArchiveFormat::Tar));
        assert_eq!(detect(Path::new("a.gz")), Some(ArchiveFormat::Gzip));
        assert_eq!(detect(Path::new("a.rar")), Some(ArchiveFormat::Rar));
        assert_eq!(detect(Path::new("a.7z")), Some(ArchiveFormat::SevenZip));
    }

    #[test]
    fn detect_tar_gz_goes_to_tar() {
        assert_eq!(
            detect(Path::new("archive.tar.gz")),
            Some(ArchiveFormat::Tar)
        );
        assert_eq!(
            detect(Path::new("dir/archive.tar.gz")),
            Some(ArchiveFormat::Tar)
        );
    }

    #[test]
    fn detect_bare_gz_is_single_file() {
        assert_eq!(detect(Path::new("archive.gz")), Some(ArchiveFormat::Gzip));
    }

    #[test]
    fn detect_unknown_extension() {
        assert_eq!(detect(Path::new("notes.txt")), None);
        assert_eq!(detect(Path::new("no_extension")), None);
        assert_eq!(detect(Path::new(".hidden")), None);
    }

    #[test]
    fn detect_is_case_sensitive() {
        assert_eq!(detect(Path::new("a.ZIP")), None);
        assert_eq!(detect(Path::new("a.Tar")), None);
    }

    #[test]
    fn destination_strips_last_extension() {
        assert_eq!(
            default_destination(Path::new("dir/archive.zip")),
            PathBuf::from("dir/archive")
        );
        assert_eq!(
            default_destination(Path::new("archive.gz")),
            PathBuf::from("archive")
        );
    }

    #[test]
    fn destination_strips_compound_tar_gz() {
        assert_eq!(
            default_destination(Path::new("dir/archive.tar.gz")),
            PathBuf::from("dir/archive")
        );
    }

    #[test]
    fn is_archive_matches_detect() {
        assert!(is_archive(Path::new("a.7z")));
        assert!(!is_archive(Path::new("a.jpeg")));
    }
}
