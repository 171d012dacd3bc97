pub mod command;
pub mod handlers;
pub mod main_menu;
pub mod prompt;

pub use command::MenuCommand;
pub use main_menu::{print_banner, print_error, print_goodbye, show_main_menu};
pub use prompt::{LinePrompter, TermPrompter};
