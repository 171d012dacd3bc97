use crate::component::photo_renamer::RenameOptions;
use crate::component::table_cleaner::CleanOptions;
use crate::component::{PhotoRenamer, TableCleaner};
use crate::config::Config;
use crate::menu::prompt::{
    LinePrompter, parse_date_columns, parse_default_yes, parse_dry_run, parse_optional_path,
    parse_prefix,
};
use anyhow::Result;
use console::style;
use log::warn;
use rust_i18n::t;
use std::path::PathBuf;

pub fn run_photo_renamer(prompter: &mut impl LinePrompter, config: &Config) -> Result<()> {
    println!("{}", style(t!("renamer.title")).cyan().bold());

    let directory = PathBuf::from(prompter.ask(&t!("renamer.prompt_directory"))?.trim());
    if !directory.is_dir() {
        println!("{}", style(t!("renamer.invalid_directory")).red());
        return Ok(());
    }

    let prefix = parse_prefix(
        &prompter.ask(&t!("renamer.prompt_prefix"))?,
        &config.settings.default_prefix,
    );
    let dry_run = parse_dry_run(&prompter.ask(&t!("renamer.prompt_dry_run"))?);

    let options = RenameOptions {
        directory,
        prefix,
        dry_run,
    };

    if let Err(e) = PhotoRenamer::new(config).run(&options) {
        warn!("Photo renamer failed: {e:#}");
        eprintln!("{} {:#}", style(t!("common.error_prefix")).red().bold(), e);
    }

    Ok(())
}

pub fn run_table_cleaner(prompter: &mut impl LinePrompter) -> Result<()> {
    println!("{}", style(t!("cleaner.title")).cyan().bold());

    let input = PathBuf::from(prompter.ask(&t!("cleaner.prompt_input"))?.trim());
    if !input.is_file() {
        println!("{}", style(t!("cleaner.file_not_found")).red());
        return Ok(());
    }

    let output = parse_optional_path(&prompter.ask(&t!("cleaner.prompt_output"))?);
    let remove_duplicates = parse_default_yes(&prompter.ask(&t!("cleaner.prompt_duplicates"))?);
    let strip_whitespace = parse_default_yes(&prompter.ask(&t!("cleaner.prompt_whitespace"))?);
    let date_columns = parse_date_columns(&prompter.ask(&t!("cleaner.prompt_date_columns"))?);

    let options = CleanOptions {
        input,
        output,
        remove_duplicates,
        strip_whitespace,
        date_columns,
    };

    if let Err(e) = TableCleaner::new().run(&options) {
        warn!("Table cleaner failed: {e:#}");
        eprintln!("{} {:#}", style(t!("common.error_prefix")).red().bold(), e);
    }

    Ok(())
}
