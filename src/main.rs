use anyhow::Result;
use console::Term;
use log::{info, warn};
use photo_sheet_tools::config::Config;
use photo_sheet_tools::init;
use photo_sheet_tools::menu::{
    TermPrompter, print_banner, print_error, print_goodbye, show_main_menu,
};

fn main() -> Result<()> {
    init::init();

    let config = Config::new()?;
    rust_i18n::set_locale(config.settings.language.as_str());

    let mut prompter = TermPrompter::new(Term::stdout());
    print_banner();

    loop {
        match show_main_menu(&mut prompter, &config) {
            Ok(true) => {}
            Ok(false) => {
                print_goodbye();
                info!("Program exited normally");
                break;
            }
            Err(e) => {
                warn!("Program error: {e}");
                print_error(&e);
                break;
            }
        }
    }

    Ok(())
}
