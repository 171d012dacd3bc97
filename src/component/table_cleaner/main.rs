//! Excel/CSV 清理主模組
//!
//! 載入 -> 去除重複列 -> 清理空白 -> 日期正規化 -> 輸出

use super::cleaning::strip_text_columns;
use super::date_normalizer::normalize_date_column;
use super::loader::load_table;
use super::writer::write_table;
use crate::tools::{derive_clean_output_path, validate_file_exists};
use anyhow::Result;
use console::style;
use log::{info, warn};
use rust_i18n::t;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct CleanOptions {
    pub input: PathBuf,
    /// `None` writes next to the input as `<name>_clean.<ext>`.
    pub output: Option<PathBuf>,
    pub remove_duplicates: bool,
    pub strip_whitespace: bool,
    pub date_columns: Vec<String>,
}

#[derive(Debug, Default)]
pub struct CleanReport {
    pub rows_before: usize,
    pub rows_after: usize,
    pub stripped_columns: Vec<String>,
    pub formatted_columns: Vec<String>,
    pub missing_columns: Vec<String>,
    pub output_path: PathBuf,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TableCleaner;

impl TableCleaner {
    pub const fn new() -> Self {
        Self
    }

    pub fn run(&self, options: &CleanOptions) -> Result<CleanReport> {
        validate_file_exists(&options.input)?;
        info!("Cleaning {}", options.input.display());

        let mut table = load_table(&options.input)?;
        let mut report = CleanReport {
            rows_before: table.len(),
            ..CleanReport::default()
        };
        println!("{}", t!("cleaner.rows_initial", count = report.rows_before));

        if options.remove_duplicates {
            let removed = table.drop_duplicate_rows();
            info!("Dropped {removed} duplicate rows");
            println!("{}", t!("cleaner.duplicates_removed", count = table.len()));
        }

        if options.strip_whitespace {
            report.stripped_columns = strip_text_columns(&mut table);
            println!(
                "{}",
                t!(
                    "cleaner.whitespace_stripped",
                    columns = report.stripped_columns.join(", ")
                )
            );
        }

        for column in &options.date_columns {
            match table.column_index(column) {
                Some(index) => {
                    let coerced = normalize_date_column(&mut table, index);
                    if coerced > 0 {
                        warn!("{coerced} values in column '{column}' could not be parsed as dates");
                    }
                    println!("{}", t!("cleaner.date_formatted", column = column));
                    report.formatted_columns.push(column.clone());
                }
                None => {
                    println!(
                        "{}",
                        style(t!("cleaner.column_not_found", column = column)).yellow()
                    );
                    report.missing_columns.push(column.clone());
                }
            }
        }

        let output_path = options
            .output
            .clone()
            .unwrap_or_else(|| derive_clean_output_path(&options.input));
        write_table(&table, &output_path)?;

        report.rows_after = table.len();
        println!(
            "{}",
            style(t!("cleaner.saved", path = output_path.display().to_string())).green()
        );
        report.output_path = output_path;

        Ok(report)
    }
}
