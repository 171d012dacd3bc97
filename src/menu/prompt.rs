//! 單行文字輸入
//!
//! 終端機使用 dialoguer，非終端機（管線輸入）直接讀 stdin

use anyhow::{Result, bail};
use console::Term;
use dialoguer::Input;
use dialoguer::theme::ColorfulTheme;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// One question, one line of free-text answer.
pub trait LinePrompter {
    fn ask(&mut self, question: &str) -> Result<String>;
}

pub struct TermPrompter {
    term: Term,
}

impl TermPrompter {
    pub const fn new(term: Term) -> Self {
        Self { term }
    }
}

impl LinePrompter for TermPrompter {
    fn ask(&mut self, question: &str) -> Result<String> {
        if self.term.is_term() {
            let answer: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(question)
                .allow_empty(true)
                .interact_text_on(&self.term)?;
            return Ok(answer);
        }

        print!("{question}: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            bail!("standard input closed");
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Only an explicit `y` turns dry-run on.
#[must_use]
pub fn parse_dry_run(answer: &str) -> bool {
    answer.trim().to_lowercase() == "y"
}

/// Anything but an explicit `n` means yes.
#[must_use]
pub fn parse_default_yes(answer: &str) -> bool {
    answer.trim().to_lowercase() != "n"
}

#[must_use]
pub fn parse_prefix(answer: &str, default_prefix: &str) -> String {
    match answer.trim() {
        "" => default_prefix.to_string(),
        prefix => prefix.to_string(),
    }
}

#[must_use]
pub fn parse_optional_path(answer: &str) -> Option<PathBuf> {
    match answer.trim() {
        "" => None,
        path => Some(PathBuf::from(path)),
    }
}

/// 以逗號分隔，空字串代表沒有日期欄位
#[must_use]
pub fn parse_date_columns(answer: &str) -> Vec<String> {
    let answer = answer.trim();
    if answer.is_empty() {
        return Vec::new();
    }
    answer.split(',').map(|c| c.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dry_run() {
        assert!(parse_dry_run("y"));
        assert!(parse_dry_run(" Y "));
        assert!(!parse_dry_run(""));
        assert!(!parse_dry_run("yes"));
        assert!(!parse_dry_run("n"));
    }

    #[test]
    fn test_parse_default_yes() {
        assert!(parse_default_yes(""));
        assert!(parse_default_yes("y"));
        assert!(parse_default_yes("whatever"));
        assert!(!parse_default_yes("n"));
        assert!(!parse_default_yes(" N "));
    }

    #[test]
    fn test_parse_prefix() {
        assert_eq!(parse_prefix("", "Foto"), "Foto");
        assert_eq!(parse_prefix("   ", "Foto"), "Foto");
        assert_eq!(parse_prefix(" Liburan ", "Foto"), "Liburan");
    }

    #[test]
    fn test_parse_optional_path() {
        assert_eq!(parse_optional_path(""), None);
        assert_eq!(
            parse_optional_path(" out.csv "),
            Some(PathBuf::from("out.csv"))
        );
    }

    #[test]
    fn test_parse_date_columns() {
        assert!(parse_date_columns("").is_empty());
        assert!(parse_date_columns("  ").is_empty());
        assert_eq!(parse_date_columns("date"), vec!["date"]);
        assert_eq!(
            parse_date_columns(" joined , born,"),
            vec!["joined", "born", ""]
        );
    }
}
