//! Recursive extraction of nested archives.
//!
//! Feeds one top-level archive through a breadth-first work queue, extracting
//! every nested archive it discovers (a zip inside a tar.gz inside a rar, ...)
//! onto a single target directory. Each leaf file is recorded with the real
//! path it landed on and the logical path it would have if the whole nesting
//! were flattened into one tree; archives that cannot be expanded (password
//! protected, corrupted) are recorded with the reason instead.
//!
//! # Architecture
//!
//! - `format.rs` - Extension dispatch and default destination naming
//! - `extract/` - Per-format adapters (zip, tar, gz, rar, 7z)
//! - `engine.rs` - Work queue, tree walk, collision-safe destinations
//! - `record.rs` - Leaf and archive records produced by a run

pub use engine::{ExtractionEngine, extract_nested};
pub use error::{Error, Result};
pub use extract::{ArchiveExtractor, Outcome, extractor_for};
pub use format::ArchiveFormat;
pub use record::{ArchiveRecord, FileRecord, Record};

mod engine;
mod error;
pub mod extract;
pub mod format;
mod record;
