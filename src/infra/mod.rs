//! File I/O

mod fs;

pub use fs::{FsError, ensure_dir, read_text, write_text_atomic};
