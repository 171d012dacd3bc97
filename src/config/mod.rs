pub mod load;
pub mod types;

pub use types::{Config, DEFAULT_PREFIX, ImageExtensionTable, Language, UserSettings};
