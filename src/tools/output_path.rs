use std::path::{Path, PathBuf};

const CLEAN_SUFFIX: &str = "_clean";

/// `data.csv` -> `data_clean.csv`，沒有副檔名時直接接在檔名後
#[must_use]
pub fn derive_clean_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let file_name = match input.extension() {
        Some(ext) => format!("{stem}{CLEAN_SUFFIX}.{}", ext.to_string_lossy()),
        None => format!("{stem}{CLEAN_SUFFIX}"),
    };

    match input.parent() {
        Some(parent) => parent.join(file_name),
        None => PathBuf::from(file_name),
    }
}

#[must_use]
pub fn has_csv_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}
