use crate::config::Config;
use crate::menu::command::MenuCommand;
use crate::menu::handlers::{run_photo_renamer, run_table_cleaner};
use crate::menu::prompt::LinePrompter;
use anyhow::Result;
use console::style;
use rust_i18n::t;

const BANNER_WIDTH: usize = 50;

pub fn print_banner() {
    let rule = "=".repeat(BANNER_WIDTH);
    println!("{rule}");
    println!("{}", style(t!("main_menu.title")).cyan().bold());
    println!("{rule}");
}

pub fn print_goodbye() {
    println!("{}", style(t!("main_menu.goodbye")).green().bold());
}

pub fn print_error(error: &anyhow::Error) {
    eprintln!("{} {:#}", style(t!("common.error_prefix")).red().bold(), error);
}

/// 顯示一次主選單並執行選擇的功能；回傳 `false` 代表使用者選擇離開
pub fn show_main_menu(prompter: &mut impl LinePrompter, config: &Config) -> Result<bool> {
    println!();
    println!("{}", t!("main_menu.choose_mode"));
    println!("{}", t!("main_menu.opt_renamer"));
    println!("{}", t!("main_menu.opt_cleaner"));
    println!("{}", t!("main_menu.opt_exit"));

    let answer = prompter.ask(&t!("main_menu.prompt"))?;

    match MenuCommand::parse(&answer) {
        Some(MenuCommand::RenamePhotos) => {
            run_photo_renamer(prompter, config)?;
            Ok(true)
        }
        Some(MenuCommand::CleanTable) => {
            run_table_cleaner(prompter)?;
            Ok(true)
        }
        Some(MenuCommand::Exit) => Ok(false),
        None => {
            println!("{}", style(t!("main_menu.invalid_choice")).yellow());
            Ok(true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ImageExtensionTable, UserSettings};
    use anyhow::bail;
    use std::collections::VecDeque;
    use std::fs;
    use tempfile::TempDir;

    struct ScriptedPrompter {
        answers: VecDeque<String>,
    }

    impl ScriptedPrompter {
        fn new(answers: &[&str]) -> Self {
            Self {
                answers: answers.iter().map(|a| (*a).to_string()).collect(),
            }
        }
    }

    impl LinePrompter for ScriptedPrompter {
        fn ask(&mut self, _question: &str) -> Result<String> {
            match self.answers.pop_front() {
                Some(answer) => Ok(answer),
                None => bail!("no scripted answer left"),
            }
        }
    }

    fn config() -> Config {
        Config {
            image_extensions: ImageExtensionTable {
                image_file: vec![".jpg".into()],
            },
            settings: UserSettings::default(),
        }
    }

    #[test]
    fn test_exit_choice_stops_loop() {
        let mut prompter = ScriptedPrompter::new(&[" 3 "]);
        assert!(!show_main_menu(&mut prompter, &config()).unwrap());
    }

    #[test]
    fn test_invalid_choice_keeps_looping() {
        let mut prompter = ScriptedPrompter::new(&["9"]);
        assert!(show_main_menu(&mut prompter, &config()).unwrap());
        assert!(prompter.answers.is_empty());
    }

    #[test]
    fn test_invalid_directory_returns_to_menu_without_more_prompts() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");
        let mut prompter = ScriptedPrompter::new(&["1", missing.to_str().unwrap(), "3"]);

        assert!(show_main_menu(&mut prompter, &config()).unwrap());
        assert!(!show_main_menu(&mut prompter, &config()).unwrap());
    }

    #[test]
    fn test_clean_table_through_menu() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("sheet.csv");
        fs::write(&input, "name,day\n  Alice  ,2023/05/01\n  Alice  ,2023/05/01\n").unwrap();

        let mut prompter =
            ScriptedPrompter::new(&["2", input.to_str().unwrap(), "", "", "", "day"]);
        assert!(show_main_menu(&mut prompter, &config()).unwrap());

        let output = temp_dir.path().join("sheet_clean.csv");
        assert_eq!(
            fs::read_to_string(output).unwrap(),
            "name,day\nAlice,2023-05-01\n"
        );
    }

    #[test]
    fn test_cleaner_failure_is_reported_not_propagated() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("broken.xlsx");
        fs::write(&input, "not a workbook").unwrap();

        let mut prompter = ScriptedPrompter::new(&["2", input.to_str().unwrap(), "", "", "", ""]);
        assert!(show_main_menu(&mut prompter, &config()).unwrap());
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let mut prompter = ScriptedPrompter::new(&[]);
        assert!(show_main_menu(&mut prompter, &config()).is_err());
    }
}
