use anyhow::{Result, bail};
use rust_i18n::t;
use std::path::Path;

pub fn validate_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        bail!(t!("errors.path_not_found", path = path.display().to_string()).to_string());
    }
    if !path.is_dir() {
        bail!(t!("errors.not_a_directory", path = path.display().to_string()).to_string());
    }
    Ok(())
}

pub fn validate_file_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        bail!(t!("errors.path_not_found", path = path.display().to_string()).to_string());
    }
    if !path.is_file() {
        bail!(t!("errors.not_a_file", path = path.display().to_string()).to_string());
    }
    Ok(())
}
