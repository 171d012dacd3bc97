//! 照片依 EXIF 拍攝日期重新命名元件

mod exif_reader;
mod main;
mod rename_planner;

pub use exif_reader::{CaptureDateReader, ExifCaptureDateReader};
pub use main::{PhotoRenamer, RenameOptions, RenameSummary};
pub use rename_planner::{PlanEntry, PlannedAction};
