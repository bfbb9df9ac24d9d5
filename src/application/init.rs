//! Initialize journal use case

use crate::error::Result;
use crate::infrastructure::{Config, FileStore};
use std::fs;
use std::path::Path;

/// Initialize a new mood journal at the specified path.
pub fn init(path: &Path, locale: Option<&str>) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let store = FileStore::new(path.to_path_buf());
    store.initialize()?;

    let config = match locale {
        Some(name) => Config::with_locale(name)?,
        None => Config::new(),
    };
    config.save_to_dir(path)?;

    println!("Initialized moodlog journal at {}", path.display());
    println!("Locale: {}", config.locale);

    Ok(())
}
