//! 表格載入：`.csv` 用 csv，其餘一律當作試算表讀取第一個工作表

use super::table::{Cell, Table};
use crate::tools::has_csv_extension;
use anyhow::{Context, Result, bail};
use calamine::{Data, Reader, open_workbook_auto};
use chrono::NaiveDateTime;
use std::path::Path;

pub fn load_table(path: &Path) -> Result<Table> {
    if has_csv_extension(path) {
        load_csv(path)
    } else {
        load_spreadsheet(path)
    }
}

fn load_csv(path: &Path) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    let headers: Vec<String> = reader
        .headers()
        .with_context(|| format!("Failed to read header of {}", path.display()))?
        .iter()
        .map(String::from)
        .collect();

    let mut rows: Vec<Vec<Cell>> = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("Failed to read {}", path.display()))?;
        if record.len() > headers.len() {
            bail!(
                "Row {} of {} has {} fields, header has {}",
                index + 2,
                path.display(),
                record.len(),
                headers.len()
            );
        }
        rows.push(record.iter().map(Cell::parse_field).collect());
    }

    Ok(Table::new(headers, rows))
}

fn load_spreadsheet(path: &Path) -> Result<Table> {
    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("Failed to open spreadsheet {}", path.display()))?;
    let range = workbook
        .worksheet_range_at(0)
        .with_context(|| format!("No worksheet in {}", path.display()))?
        .with_context(|| format!("Failed to read first worksheet of {}", path.display()))?;

    let mut sheet_rows = range.rows();
    let headers: Vec<String> = sheet_rows
        .next()
        .map(|header_row| {
            header_row
                .iter()
                .enumerate()
                .map(|(index, data)| match data_to_cell(data) {
                    Cell::Empty => format!("Unnamed: {index}"),
                    cell => cell.to_string(),
                })
                .collect()
        })
        .unwrap_or_default();

    let rows: Vec<Vec<Cell>> = sheet_rows
        .map(|row| row.iter().map(data_to_cell).collect())
        .collect();

    Ok(Table::new(headers, rows))
}

/// 試算表中的整數值常以浮點數儲存，可無損轉回整數時就轉回
fn data_to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty | Data::Error(_) => Cell::Empty,
        Data::Int(value) => Cell::Int(*value),
        Data::Float(value) if is_whole(*value) => Cell::Int(*value as i64),
        Data::Float(value) => Cell::Float(*value),
        Data::Bool(value) => Cell::Bool(*value),
        Data::String(value) if value.is_empty() => Cell::Empty,
        Data::String(value) => Cell::Text(value.clone()),
        Data::DateTime(value) => value
            .as_datetime()
            .map_or_else(|| Cell::Float(value.as_f64()), Cell::DateTime),
        Data::DateTimeIso(value) => NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
            .map_or_else(|_| Cell::Text(value.clone()), Cell::DateTime),
        Data::DurationIso(value) => Cell::Text(value.clone()),
    }
}

fn is_whole(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0 && value.abs() < 9.0e15
}
