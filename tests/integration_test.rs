//! 整合測試 - 以暫存資料夾驗證照片改名與表格清理

use std::fs;
use std::io::Cursor;
use std::path::Path;

use exif::experimental::Writer;
use exif::{Field, In, Tag, Value};
use photo_sheet_tools::component::photo_renamer::{PlannedAction, RenameOptions};
use photo_sheet_tools::component::table_cleaner::{
    Cell, CleanOptions, Table, load_table, write_table,
};
use photo_sheet_tools::component::{PhotoRenamer, TableCleaner};
use photo_sheet_tools::config::Config;
use tempfile::TempDir;

/// TIFF 容器，只含 `DateTimeOriginal`
fn write_tiff_with_capture_date(path: &Path, date: &str) {
    let field = Field {
        tag: Tag::DateTimeOriginal,
        ifd_num: In::PRIMARY,
        value: Value::Ascii(vec![date.as_bytes().to_vec()]),
    };
    let mut writer = Writer::new();
    writer.push_field(&field);
    let mut buf = Cursor::new(Vec::new());
    writer.write(&mut buf, false).unwrap();
    fs::write(path, buf.into_inner()).unwrap();
}

fn sorted_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

fn rename_options(dir: &Path, prefix: &str, dry_run: bool) -> RenameOptions {
    RenameOptions {
        directory: dir.to_path_buf(),
        prefix: prefix.to_string(),
        dry_run,
    }
}

#[test]
fn test_photo_renamer_with_exif_files() {
    let temp_dir = TempDir::new().unwrap();
    write_tiff_with_capture_date(&temp_dir.path().join("one.tiff"), "2023:05:01 10:00:00");
    write_tiff_with_capture_date(&temp_dir.path().join("two.TIFF"), "2023:05:15 09:00:00");
    write_tiff_with_capture_date(&temp_dir.path().join("three.tiff"), "2024:01:02 08:00:00");
    fs::write(temp_dir.path().join("broken.jpg"), b"not an image").unwrap();
    fs::write(temp_dir.path().join("readme.txt"), b"ignored").unwrap();

    let config = Config::new().unwrap();
    let renamer = PhotoRenamer::new(&config);

    let dry = renamer
        .run(&rename_options(temp_dir.path(), "Trip", true))
        .unwrap();
    assert_eq!(dry.renamed, 3);
    assert_eq!(
        sorted_names(temp_dir.path()),
        vec!["broken.jpg", "one.tiff", "readme.txt", "three.tiff", "two.TIFF"]
    );

    let real = renamer
        .run(&rename_options(temp_dir.path(), "Trip", false))
        .unwrap();
    assert_eq!(real.renamed, 3);
    assert_eq!(real.failed, 1);

    let dry_actions: Vec<_> = dry.plan.iter().map(|e| e.action.clone()).collect();
    let real_actions: Vec<_> = real.plan.iter().map(|e| e.action.clone()).collect();
    assert_eq!(dry_actions, real_actions);

    assert_eq!(
        sorted_names(temp_dir.path()),
        vec![
            "Trip-2023-05.jpg",
            "Trip-2023-05_2.jpg",
            "Trip-2024-01.jpg",
            "broken.jpg",
            "readme.txt"
        ]
    );
}

#[test]
fn test_photo_renamer_second_run_changes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    write_tiff_with_capture_date(&temp_dir.path().join("a.tiff"), "2022:12:24 18:00:00");

    let config = Config::new().unwrap();
    let renamer = PhotoRenamer::new(&config);
    renamer
        .run(&rename_options(temp_dir.path(), "Xmas", false))
        .unwrap();

    let second = renamer
        .run(&rename_options(temp_dir.path(), "Xmas", false))
        .unwrap();

    assert_eq!(second.renamed, 0);
    assert!(matches!(
        second.plan[0].action,
        PlannedAction::Unchanged { .. }
    ));
    assert_eq!(sorted_names(temp_dir.path()), vec!["Xmas-2022-12.jpg"]);
}

#[test]
fn test_photo_renamer_adds_new_photo_after_existing_sequence() {
    let temp_dir = TempDir::new().unwrap();
    write_tiff_with_capture_date(&temp_dir.path().join("a.tiff"), "2022:12:24 18:00:00");
    write_tiff_with_capture_date(&temp_dir.path().join("b.tiff"), "2022:12:25 09:00:00");

    let config = Config::new().unwrap();
    let renamer = PhotoRenamer::new(&config);
    renamer
        .run(&rename_options(temp_dir.path(), "Xmas", false))
        .unwrap();
    let first = fs::read(temp_dir.path().join("Xmas-2022-12.jpg")).unwrap();
    let second = fs::read(temp_dir.path().join("Xmas-2022-12_2.jpg")).unwrap();

    write_tiff_with_capture_date(&temp_dir.path().join("c.tiff"), "2022:12:31 23:00:00");
    let summary = renamer
        .run(&rename_options(temp_dir.path(), "Xmas", false))
        .unwrap();

    assert_eq!(summary.renamed, 1);
    assert_eq!(summary.skipped, 2);
    assert_eq!(summary.failed, 0);
    assert_eq!(
        sorted_names(temp_dir.path()),
        vec!["Xmas-2022-12.jpg", "Xmas-2022-12_2.jpg", "Xmas-2022-12_3.jpg"]
    );
    assert_eq!(fs::read(temp_dir.path().join("Xmas-2022-12.jpg")).unwrap(), first);
    assert_eq!(fs::read(temp_dir.path().join("Xmas-2022-12_2.jpg")).unwrap(), second);
}

#[test]
fn test_cleaning_a_clean_csv_is_a_noop() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("clean.csv");
    let content = "name,city,joined,score\nAlice,Bandung,2023-05-01,9.5\nBob,Jakarta,2022-11-30,7\n";
    fs::write(&input, content).unwrap();

    let report = TableCleaner::new()
        .run(&CleanOptions {
            input,
            output: None,
            remove_duplicates: true,
            strip_whitespace: true,
            date_columns: vec!["joined".to_string()],
        })
        .unwrap();

    assert_eq!(report.rows_before, report.rows_after);
    assert_eq!(fs::read_to_string(&report.output_path).unwrap(), content);
}

#[test]
fn test_clean_spreadsheet_to_spreadsheet() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("sheet.xlsx");
    let text = |s: &str| Cell::Text(s.to_string());
    let source = Table::new(
        vec!["name".into(), "day".into(), "qty".into()],
        vec![
            vec![text("  Alice  "), text("2023/05/01"), Cell::Int(3)],
            vec![text("  Alice  "), text("2023/05/01"), Cell::Int(3)],
            vec![text("Bob"), text("sometime"), Cell::Float(1.5)],
        ],
    );
    write_table(&source, &input).unwrap();

    let report = TableCleaner::new()
        .run(&CleanOptions {
            input,
            output: None,
            remove_duplicates: true,
            strip_whitespace: true,
            date_columns: vec!["day".to_string(), "nope".to_string()],
        })
        .unwrap();

    assert_eq!(report.rows_before, 3);
    assert_eq!(report.rows_after, 2);
    assert_eq!(report.missing_columns, vec!["nope"]);
    assert_eq!(report.output_path, temp_dir.path().join("sheet_clean.xlsx"));

    let cleaned = load_table(&report.output_path).unwrap();
    assert_eq!(
        cleaned.rows,
        vec![
            vec![text("Alice"), text("2023-05-01"), Cell::Int(3)],
            vec![text("Bob"), Cell::Empty, Cell::Float(1.5)],
        ]
    );
}

#[test]
fn test_clean_csv_to_explicit_spreadsheet_output() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("in.csv");
    let output = temp_dir.path().join("out.xlsx");
    fs::write(&input, "id,tag\n1, a \n1, a \n2,b\n").unwrap();

    let report = TableCleaner::new()
        .run(&CleanOptions {
            input,
            output: Some(output.clone()),
            remove_duplicates: true,
            strip_whitespace: true,
            date_columns: Vec::new(),
        })
        .unwrap();

    assert_eq!(report.output_path, output);
    let cleaned = load_table(&output).unwrap();
    assert_eq!(cleaned.headers, vec!["id", "tag"]);
    assert_eq!(
        cleaned.rows,
        vec![
            vec![Cell::Int(1), Cell::Text("a".into())],
            vec![Cell::Int(2), Cell::Text("b".into())],
        ]
    );
}
