#[macro_use]
extern crate rust_i18n;

i18n!("locales", fallback = "en");

pub mod component;
pub mod config;
pub mod init;
pub mod menu;
pub mod tools;
