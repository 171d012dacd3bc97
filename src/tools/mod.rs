mod image_scanner;
mod output_path;
mod path_validator;

pub use image_scanner::{DirectoryListing, scan_image_files};
pub use output_path::{derive_clean_output_path, has_csv_extension};
pub use path_validator::{validate_directory_exists, validate_file_exists};
