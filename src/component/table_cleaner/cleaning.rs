//! 文字欄位空白清理

use super::table::{Cell, Table};

/// 文字欄中的值一律轉成去頭尾空白的文字，空值維持空值；回傳處理過的欄名
pub fn strip_text_columns(table: &mut Table) -> Vec<String> {
    let text_columns: Vec<usize> = (0..table.headers.len())
        .filter(|&index| table.is_text_column(index))
        .collect();

    for row in &mut table.rows {
        for &index in &text_columns {
            if let Some(cell) = row.get_mut(index) {
                if !cell.is_empty() {
                    *cell = Cell::Text(cell.to_string().trim().to_string());
                }
            }
        }
    }

    text_columns
        .into_iter()
        .map(|index| table.headers[index].clone())
        .collect()
}
