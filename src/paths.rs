use std::path::PathBuf;

use anyhow::{Context, Result};

const APP_DIR: &str = "cohost";

fn app_data_dir() -> Result<PathBuf> {
    let base = dirs::data_dir().context("unable to resolve data directory")?;
    Ok(base.join(APP_DIR))
}

pub fn database_file_path() -> Result<PathBuf> {
    Ok(app_data_dir()?.join("cohost.db"))
}

pub fn log_dir_path() -> Result<PathBuf> {
    Ok(app_data_dir()?.join("logs"))
}
