use crate::config::ImageExtensionTable;
use anyhow::{Context, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct DirectoryListing {
    /// 符合圖片副檔名的檔案，保持目錄原生順序
    pub images: Vec<PathBuf>,
    /// 目錄中所有檔名（含非圖片），用來檢查改名目標是否已被佔用
    pub occupied_names: Vec<OsString>,
}

/// 只掃描一層，不遞迴子資料夾，也不排序
pub fn scan_image_files(directory: &Path, table: &ImageExtensionTable) -> Result<DirectoryListing> {
    let mut images = Vec::new();
    let mut occupied_names = Vec::new();

    for entry in WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
    {
        let entry =
            entry.with_context(|| format!("Failed to list directory {}", directory.display()))?;
        occupied_names.push(entry.file_name().to_owned());

        if entry.file_type().is_file() && table.is_image_file(entry.path()) {
            images.push(entry.into_path());
        }
    }

    Ok(DirectoryListing {
        images,
        occupied_names,
    })
}
