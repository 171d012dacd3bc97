//! 表格資料模型
//!
//! 一份表格只在一次清理流程中存在：載入、轉換、輸出後即丟棄

use chrono::{NaiveDateTime, Timelike};
use std::collections::HashSet;
use std::fmt;

/// Field values read as missing from delimited text.
const MISSING_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
    DateTime(NaiveDateTime),
}

impl Cell {
    /// 依內容推斷型別：整數、浮點數、布林，其餘視為文字
    #[must_use]
    pub fn parse_field(raw: &str) -> Self {
        if MISSING_MARKERS.contains(&raw) {
            return Self::Empty;
        }
        if let Ok(value) = raw.parse::<i64>() {
            return Self::Int(value);
        }
        if let Ok(value) = raw.parse::<f64>() {
            return Self::Float(value);
        }
        match raw {
            "True" | "TRUE" | "true" => Self::Bool(true),
            "False" | "FALSE" | "false" => Self::Bool(false),
            _ => Self::Text(raw.to_string()),
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Full-row equality key. Numbers compare by value, so `1` and `1.0` match,
    /// while the tag keeps `1` and `"1"` apart.
    fn key_part(&self) -> String {
        match self {
            Self::Empty => "e:".to_string(),
            Self::Int(value) => format!("n:{value}"),
            Self::Float(value) if *value == 0.0 => "n:0".to_string(),
            Self::Float(value) => format!("n:{value}"),
            Self::Bool(_) => format!("b:{self}"),
            Self::Text(_) => format!("t:{self}"),
            Self::DateTime(_) => format!("d:{self}"),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) if value.is_finite() && value.fract() == 0.0 => {
                write!(f, "{value:.1}")
            }
            Self::Float(value) => write!(f, "{value}"),
            Self::Bool(true) => write!(f, "True"),
            Self::Bool(false) => write!(f, "False"),
            Self::Text(value) => write!(f, "{value}"),
            Self::DateTime(value) if is_midnight(value) => {
                write!(f, "{}", value.format("%Y-%m-%d"))
            }
            Self::DateTime(value) => write!(f, "{}", value.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

fn is_midnight(value: &NaiveDateTime) -> bool {
    value.num_seconds_from_midnight() == 0 && value.nanosecond() == 0
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Short rows are padded with empty cells up to the header width.
    #[must_use]
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                if row.len() < width {
                    row.resize(width, Cell::Empty);
                }
                row
            })
            .collect();
        Self { headers, rows }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// 欄位中只要有文字，或布林值與其他型別混用，就視為文字欄
    #[must_use]
    pub fn is_text_column(&self, index: usize) -> bool {
        let mut has_bool = false;
        let mut has_other = false;

        for cell in self.rows.iter().filter_map(|row| row.get(index)) {
            match cell {
                Cell::Text(_) => return true,
                Cell::Bool(_) => has_bool = true,
                _ => has_other = true,
            }
        }

        has_bool && has_other
    }

    /// 移除完全相同的列，保留第一次出現的順序，回傳移除數量
    pub fn drop_duplicate_rows(&mut self) -> usize {
        let before = self.rows.len();
        let mut seen: HashSet<String> = HashSet::with_capacity(before);

        self.rows.retain(|row| {
            let key = row
                .iter()
                .map(Cell::key_part)
                .collect::<Vec<_>>()
                .join("\u{1f}");
            seen.insert(key)
        });

        before - self.rows.len()
    }
}
