//! Excel/CSV 清理元件：去除重複列、清理文字空白、日期格式統一

mod cleaning;
mod date_normalizer;
mod loader;
mod main;
mod table;
mod writer;

pub use loader::load_table;
pub use main::{CleanOptions, CleanReport, TableCleaner};
pub use table::{Cell, Table};
pub use writer::write_table;
