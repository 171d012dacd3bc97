//! 改名計畫模組
//!
//! 依拍攝年月產生新檔名，處理同月份重名，並在動到檔案前先算出整份計畫

use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// `YYYY:MM:DD` at the start of the value; only year and month are kept.
static REGEX_CAPTURE_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4}):(\d{2}):\d{2}").expect("Invalid regex"));

/// The output extension is always `.jpg`, whatever the source format was.
const OUTPUT_EXTENSION: &str = ".jpg";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearMonth {
    pub year: String,
    pub month: String,
}

#[must_use]
pub fn parse_year_month(value: &str) -> Option<YearMonth> {
    let captures = REGEX_CAPTURE_DATE.captures(value)?;
    Some(YearMonth {
        year: captures[1].to_string(),
        month: captures[2].to_string(),
    })
}

/// 單一檔案的 EXIF 讀取結果
#[derive(Debug, Clone)]
pub enum CaptureLookup {
    Found(String),
    Missing,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlannedAction {
    Rename { new_name: String },
    /// The file already carries a name from its own year-month sequence.
    Unchanged { new_name: String },
    NoCaptureDate,
    UnrecognizedDate { value: String },
    ReadFailed { error: String },
}

#[derive(Debug, Clone)]
pub struct PlanEntry {
    pub source: PathBuf,
    pub action: PlannedAction,
}

impl PlanEntry {
    #[must_use]
    pub fn source_name(&self) -> String {
        self.source
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string()
    }
}

/// 同一年月的檔名序列：`Trip-2023-05.jpg`、`Trip-2023-05_2.jpg`...
#[derive(Debug, Clone)]
struct NameSequence {
    stem: String,
}

impl NameSequence {
    fn name(&self, index: usize) -> String {
        if index == 1 {
            format!("{}{OUTPUT_EXTENSION}", self.stem)
        } else {
            format!("{}_{index}{OUTPUT_EXTENSION}", self.stem)
        }
    }

    /// `Some(n)` when `file_name` is the n-th name of this sequence.
    fn index_of(&self, file_name: &str) -> Option<usize> {
        let rest = file_name
            .strip_prefix(self.stem.as_str())?
            .strip_suffix(OUTPUT_EXTENSION)?;
        if rest.is_empty() {
            return Some(1);
        }
        let digits = rest.strip_prefix('_')?;
        let index: usize = digits.parse().ok()?;
        (index >= 2 && index.to_string() == digits).then_some(index)
    }
}

enum Resolved {
    Named(NameSequence),
    Skipped(PlannedAction),
}

/// 改名計畫器，每次執行重新建立，不跨執行保留狀態
pub struct RenamePlanner {
    prefix: String,
    name_counter: HashMap<String, usize>,
    occupied: HashSet<OsString>,
}

impl RenamePlanner {
    /// `occupied` lists every name currently in the directory, images or not.
    pub fn new(prefix: &str, occupied: impl IntoIterator<Item = OsString>) -> Self {
        Self {
            prefix: prefix.to_string(),
            name_counter: HashMap::new(),
            occupied: occupied.into_iter().collect(),
        }
    }

    fn sequence(&self, year_month: &YearMonth) -> NameSequence {
        NameSequence {
            stem: format!("{}-{}-{}", self.prefix, year_month.year, year_month.month),
        }
    }

    /// 第一次使用回傳基本檔名，之後依序加上 `_2`、`_3`...，跳過已被佔用的名稱
    fn next_free_name(&mut self, sequence: &NameSequence, taken: &HashSet<OsString>) -> String {
        let counter = self.name_counter.entry(sequence.stem.clone()).or_insert(0);
        loop {
            *counter += 1;
            let candidate = sequence.name(*counter);
            if !taken.contains(OsStr::new(&candidate)) {
                return candidate;
            }
        }
    }

    /// 兩階段規劃：先讓已經命名正確的檔案保留原名，再依列出順序分配新名稱
    pub fn plan_all(&mut self, lookups: Vec<(PathBuf, CaptureLookup)>) -> Vec<PlanEntry> {
        let resolved: Vec<(PathBuf, Resolved)> = lookups
            .into_iter()
            .map(|(source, lookup)| {
                let resolved = match lookup {
                    CaptureLookup::Failed(error) => {
                        Resolved::Skipped(PlannedAction::ReadFailed { error })
                    }
                    CaptureLookup::Missing => Resolved::Skipped(PlannedAction::NoCaptureDate),
                    CaptureLookup::Found(value) => match parse_year_month(&value) {
                        None => Resolved::Skipped(PlannedAction::UnrecognizedDate { value }),
                        Some(year_month) => Resolved::Named(self.sequence(&year_month)),
                    },
                };
                (source, resolved)
            })
            .collect();

        let mut kept: Vec<bool> = vec![false; resolved.len()];
        let mut vacated: HashSet<OsString> = HashSet::new();
        for (index, (source, resolved)) in resolved.iter().enumerate() {
            if let Resolved::Named(sequence) = resolved {
                let file_name = source_file_name(source);
                if sequence.index_of(&file_name.to_string_lossy()).is_some() {
                    kept[index] = true;
                } else {
                    vacated.insert(file_name);
                }
            }
        }

        let mut taken: HashSet<OsString> = self.occupied.difference(&vacated).cloned().collect();

        resolved
            .into_iter()
            .zip(kept)
            .map(|((source, resolved), kept)| {
                let action = match resolved {
                    Resolved::Skipped(action) => action,
                    Resolved::Named(_) if kept => PlannedAction::Unchanged {
                        new_name: source_file_name(&source).to_string_lossy().to_string(),
                    },
                    Resolved::Named(sequence) => {
                        let new_name = self.next_free_name(&sequence, &taken);
                        taken.insert(OsString::from(&new_name));
                        PlannedAction::Rename { new_name }
                    }
                };
                PlanEntry { source, action }
            })
            .collect()
    }
}

fn source_file_name(source: &Path) -> OsString {
    source.file_name().map(OsString::from).unwrap_or_default()
}
