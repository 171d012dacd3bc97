//! 日期欄位正規化
//!
//! 無法解析的值改為空值，不中斷整個欄位

use super::table::{Cell, Table};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub const OUTPUT_DATE_FORMAT: &str = "%Y-%m-%d";

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%Y:%m:%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Year-first layouts are tried before month-first ones.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%m.%d.%Y",
    "%d %B %Y",
    "%d %b %Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%b %d %Y",
];

#[must_use]
pub fn parse_date_text(raw: &str) -> Option<NaiveDateTime> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.naive_local());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Numbers are not read as dates.
#[must_use]
pub fn normalize_date_cell(cell: &Cell) -> Cell {
    let parsed = match cell {
        Cell::DateTime(value) => Some(*value),
        Cell::Text(value) => parse_date_text(value),
        Cell::Empty | Cell::Int(_) | Cell::Float(_) | Cell::Bool(_) => None,
    };

    parsed.map_or(Cell::Empty, |value| {
        Cell::Text(value.format(OUTPUT_DATE_FORMAT).to_string())
    })
}

/// 回傳被改成空值的非空儲存格數量
pub fn normalize_date_column(table: &mut Table, index: usize) -> usize {
    let mut coerced = 0;

    for row in &mut table.rows {
        if let Some(cell) = row.get_mut(index) {
            let normalized = normalize_date_cell(cell);
            if normalized.is_empty() && !cell.is_empty() {
                coerced += 1;
            }
            *cell = normalized;
        }
    }

    coerced
}
