//! EXIF 拍攝日期讀取模組
//!
//! 只讀取 `DateTimeOriginal`，其餘標籤一律忽略

use anyhow::{Context, Result};
use exif::{In, Tag, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Looks up the capture timestamp of one image.
///
/// `Ok(None)` means the image carries no capture date; `Err` means the
/// metadata could not be read at all.
pub trait CaptureDateReader {
    fn read_capture_date(&self, path: &Path) -> Result<Option<String>>;
}

/// 從 EXIF 中讀取原始拍攝時間（格式 `YYYY:MM:DD HH:MM:SS`）
#[derive(Debug, Default, Clone, Copy)]
pub struct ExifCaptureDateReader;

impl ExifCaptureDateReader {
    pub const fn new() -> Self {
        Self
    }
}

impl CaptureDateReader for ExifCaptureDateReader {
    fn read_capture_date(&self, path: &Path) -> Result<Option<String>> {
        let file =
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
        let mut reader = BufReader::new(file);

        let exif_data = match exif::Reader::new().read_from_container(&mut reader) {
            Ok(exif_data) => exif_data,
            Err(exif::Error::NotFound(_)) => return Ok(None),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read EXIF from {}", path.display()));
            }
        };

        Ok(exif_data
            .get_field(Tag::DateTimeOriginal, In::PRIMARY)
            .and_then(|field| raw_ascii(&field.value)))
    }
}

/// `display_value()` rewrites dates as `YYYY-MM-DD`, so take the stored bytes.
fn raw_ascii(value: &Value) -> Option<String> {
    match value {
        Value::Ascii(parts) => parts
            .first()
            .map(|bytes| String::from_utf8_lossy(bytes).trim_end_matches('\0').to_string())
            .filter(|s| !s.is_empty()),
        _ => None,
    }
}
