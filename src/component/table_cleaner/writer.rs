//! 表格輸出：依輸出路徑副檔名選擇 CSV 或試算表，不輸出列索引

use super::table::{Cell, Table};
use crate::tools::has_csv_extension;
use anyhow::{Context, Result};
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;

const DATETIME_NUM_FORMAT: &str = "yyyy-mm-dd hh:mm:ss";

pub fn write_table(table: &Table, path: &Path) -> Result<()> {
    let result = if has_csv_extension(path) {
        write_csv(table, path)
    } else {
        write_spreadsheet(table, path)
    };
    result.with_context(|| format!("Failed to write {}", path.display()))
}

fn write_csv(table: &Table, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(&table.headers)?;
    for row in &table.rows {
        writer.write_record(row.iter().map(ToString::to_string))?;
    }
    writer.flush()?;
    Ok(())
}

fn write_spreadsheet(table: &Table, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let datetime_format = Format::new().set_num_format(DATETIME_NUM_FORMAT);

    let worksheet = workbook.add_worksheet();
    for (col, header) in table.headers.iter().enumerate() {
        let col = u16::try_from(col).context("Too many columns for a worksheet")?;
        worksheet.write_string_with_format(0, col, header, &header_format)?;
    }

    for (row_index, row) in table.rows.iter().enumerate() {
        let row_number = u32::try_from(row_index + 1).context("Too many rows for a worksheet")?;
        for (col, cell) in row.iter().enumerate() {
            let col = u16::try_from(col).context("Too many columns for a worksheet")?;
            match cell {
                Cell::Empty => {}
                Cell::Int(value) => {
                    worksheet.write_number(row_number, col, *value as f64)?;
                }
                Cell::Float(value) if value.is_finite() => {
                    worksheet.write_number(row_number, col, *value)?;
                }
                Cell::Float(value) => {
                    worksheet.write_string(row_number, col, value.to_string())?;
                }
                Cell::Bool(value) => {
                    worksheet.write_boolean(row_number, col, *value)?;
                }
                Cell::Text(value) => {
                    worksheet.write_string(row_number, col, value)?;
                }
                Cell::DateTime(value) => {
                    worksheet.write_datetime_with_format(row_number, col, value, &datetime_format)?;
                }
            }
        }
    }

    workbook.save(path)?;
    Ok(())
}
