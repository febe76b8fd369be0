pub mod fs;

pub use fs::{is_markdown, output_path, read_input, resolve_files, write_output, ReaderConfig};
