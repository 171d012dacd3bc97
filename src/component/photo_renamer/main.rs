//! 照片依拍攝日期重新命名主模組
//!
//! 掃描資料夾、讀取 EXIF、產生改名計畫，最後執行或只預覽

use super::exif_reader::{CaptureDateReader, ExifCaptureDateReader};
use super::rename_planner::{CaptureLookup, PlanEntry, PlannedAction, RenamePlanner};
use crate::config::{Config, ImageExtensionTable};
use crate::tools::{scan_image_files, validate_directory_exists};
use anyhow::{Context, Result, bail};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use rust_i18n::t;
use std::collections::HashSet;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct RenameOptions {
    pub directory: PathBuf,
    pub prefix: String,
    pub dry_run: bool,
}

/// 重新命名結果統計
#[derive(Debug, Default)]
pub struct RenameSummary {
    /// Renamed, or would be renamed in dry-run mode.
    pub renamed: usize,
    pub skipped: usize,
    pub failed: usize,
    pub plan: Vec<PlanEntry>,
}

pub struct PhotoRenamer<R = ExifCaptureDateReader> {
    image_extensions: ImageExtensionTable,
    date_reader: R,
}

impl PhotoRenamer {
    pub fn new(config: &Config) -> Self {
        Self::with_reader(config.image_extensions.clone(), ExifCaptureDateReader::new())
    }
}

impl<R: CaptureDateReader> PhotoRenamer<R> {
    pub fn with_reader(image_extensions: ImageExtensionTable, date_reader: R) -> Self {
        Self {
            image_extensions,
            date_reader,
        }
    }

    pub fn run(&self, options: &RenameOptions) -> Result<RenameSummary> {
        validate_directory_exists(&options.directory)?;
        info!(
            "Renaming photos in {} (prefix={}, dry_run={})",
            options.directory.display(),
            options.prefix,
            options.dry_run
        );

        let listing = scan_image_files(&options.directory, &self.image_extensions)?;
        if listing.images.is_empty() {
            println!("{}", style(t!("renamer.no_images")).yellow());
            return Ok(RenameSummary::default());
        }

        let plan = self.build_plan(&options.prefix, listing.images, listing.occupied_names);
        let mut summary = self.apply_plan(&plan, options.dry_run);
        summary.plan = plan;

        self.display_summary(&summary, options.dry_run);
        Ok(summary)
    }

    /// 先讀完所有 EXIF 再決定新檔名，預覽與實際執行會得到同一份計畫
    pub fn build_plan(
        &self,
        prefix: &str,
        images: Vec<PathBuf>,
        occupied: Vec<OsString>,
    ) -> Vec<PlanEntry> {
        let lookups = images
            .into_iter()
            .map(|path| {
                let lookup = match self.date_reader.read_capture_date(&path) {
                    Ok(Some(value)) => CaptureLookup::Found(value),
                    Ok(None) => CaptureLookup::Missing,
                    Err(e) => {
                        warn!("EXIF read failed for {}: {e:#}", path.display());
                        CaptureLookup::Failed(format!("{e:#}"))
                    }
                };
                (path, lookup)
            })
            .collect();

        RenamePlanner::new(prefix, occupied).plan_all(lookups)
    }

    fn apply_plan(&self, plan: &[PlanEntry], dry_run: bool) -> RenameSummary {
        let mut summary = RenameSummary::default();

        let progress_bar = ProgressBar::new(plan.len() as u64);
        progress_bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        let report = |line: String| {
            progress_bar.suspend(|| println!("{line}"));
            progress_bar.inc(1);
        };

        // 目標名稱仍被計畫中其他檔案佔用時，等對方先搬走
        let mut pending: Vec<PendingRename> = Vec::new();
        for entry in plan {
            if let (PlannedAction::Rename { new_name }, false) = (&entry.action, dry_run) {
                let waiting = PendingRename::new(entry, new_name);
                if waiting.target.exists() {
                    pending.push(waiting);
                    continue;
                }
            }
            report(self.apply_entry(entry, &entry.source, dry_run, &mut summary));
        }

        while !pending.is_empty() {
            let before = pending.len();
            pending.retain(|waiting| {
                if waiting.target.exists() {
                    return true;
                }
                report(self.apply_entry(waiting.entry, &waiting.current, dry_run, &mut summary));
                false
            });
            if pending.len() < before {
                continue;
            }

            let held_outside = {
                let held: HashSet<&Path> = pending.iter().map(|w| w.current.as_path()).collect();
                pending
                    .iter()
                    .position(|w| !held.contains(w.target.as_path()))
            };
            if let Some(index) = held_outside {
                // Held by a file outside the plan; apply_entry reports it as a failure.
                let waiting = pending.remove(index);
                report(self.apply_entry(waiting.entry, &waiting.current, dry_run, &mut summary));
                continue;
            }

            // Every target belongs to another waiting file: a cycle such as a swap.
            match park(&pending[0].current) {
                Ok(parked) => {
                    info!(
                        "Parked {} at {} to break a rename cycle",
                        pending[0].current.display(),
                        parked.display()
                    );
                    pending[0].current = parked;
                }
                Err(e) => {
                    let waiting = pending.remove(0);
                    report(self.failure_line(waiting.entry, waiting.new_name, &e, &mut summary));
                }
            }
        }

        progress_bar.finish_and_clear();
        summary
    }

    fn apply_entry(
        &self,
        entry: &PlanEntry,
        current: &Path,
        dry_run: bool,
        summary: &mut RenameSummary,
    ) -> String {
        let file = entry.source_name();

        match &entry.action {
            PlannedAction::Rename { new_name } if dry_run => {
                summary.renamed += 1;
                t!("renamer.dry_run_line", from = file, to = new_name).to_string()
            }
            PlannedAction::Rename { new_name } => match rename_in_place(current, new_name) {
                Ok(()) => {
                    summary.renamed += 1;
                    style(t!("renamer.renamed", from = file, to = new_name))
                        .green()
                        .to_string()
                }
                Err(e) => self.failure_line(entry, new_name, &e, summary),
            },
            PlannedAction::Unchanged { .. } => {
                summary.skipped += 1;
                style(t!("renamer.unchanged", file = file)).dim().to_string()
            }
            PlannedAction::NoCaptureDate => {
                summary.skipped += 1;
                style(t!("renamer.no_exif", file = file)).yellow().to_string()
            }
            PlannedAction::UnrecognizedDate { value } => {
                summary.skipped += 1;
                style(t!("renamer.unknown_format", file = file, value = value))
                    .yellow()
                    .to_string()
            }
            PlannedAction::ReadFailed { error } => {
                summary.failed += 1;
                style(t!("renamer.read_failed", file = file, error = error))
                    .red()
                    .to_string()
            }
        }
    }

    fn failure_line(
        &self,
        entry: &PlanEntry,
        new_name: &str,
        error: &anyhow::Error,
        summary: &mut RenameSummary,
    ) -> String {
        let file = entry.source_name();
        warn!("Rename failed for {file}: {error:#}");
        summary.failed += 1;
        style(t!(
            "renamer.rename_failed",
            from = file,
            to = new_name,
            error = format!("{error:#}")
        ))
        .red()
        .to_string()
    }

    fn display_summary(&self, summary: &RenameSummary, dry_run: bool) {
        println!();
        let done = if dry_run {
            t!("renamer.summary_dry_run", count = summary.renamed)
        } else {
            t!("renamer.summary_done", count = summary.renamed)
        };
        println!("{}", style(done).cyan().bold());
        if summary.skipped > 0 {
            println!(
                "  {}",
                style(t!("renamer.summary_skipped", count = summary.skipped)).yellow()
            );
        }
        if summary.failed > 0 {
            println!(
                "  {}",
                style(t!("renamer.summary_failed", count = summary.failed)).red()
            );
        }
    }
}

/// 等待中的改名：`current` 可能因打破循環而暫存到別的名稱
struct PendingRename<'a> {
    entry: &'a PlanEntry,
    new_name: &'a str,
    current: PathBuf,
    target: PathBuf,
}

impl<'a> PendingRename<'a> {
    fn new(entry: &'a PlanEntry, new_name: &'a str) -> Self {
        Self {
            entry,
            new_name,
            current: entry.source.clone(),
            target: sibling(&entry.source, new_name),
        }
    }
}

fn sibling(path: &Path, name: &str) -> PathBuf {
    path.parent().unwrap_or(path).join(name)
}

fn rename_in_place(current: &Path, new_name: &str) -> Result<()> {
    let new_path = sibling(current, new_name);

    // fs::rename would silently replace an existing file
    if new_path.exists() {
        bail!(t!("errors.already_exists", path = new_path.display().to_string()).to_string());
    }

    fs::rename(current, &new_path)
        .with_context(|| format!("Failed to rename {}", current.display()))?;
    Ok(())
}

/// 暫存到隱藏檔名，讓出原本的名稱
fn park(current: &Path) -> Result<PathBuf> {
    let name = current.file_name().unwrap_or_default().to_string_lossy();
    let parked = sibling(current, &format!(".{name}.renaming"));
    if parked.exists() {
        bail!(t!("errors.already_exists", path = parked.display().to_string()).to_string());
    }
    fs::rename(current, &parked)
        .with_context(|| format!("Failed to rename {}", current.display()))?;
    Ok(parked)
}
