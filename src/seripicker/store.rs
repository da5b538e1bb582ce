use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;

use super::config::Config;

fn config_file_path() -> PathBuf {
    data_dir().join("config.yaml")
}

pub fn data_dir() -> PathBuf {
    let project_dirs = directories::ProjectDirs::from("com", "seripicker", "seripicker")
        .expect("Cannot retrieve project dirs");
    project_dirs.data_dir().to_owned()
}

pub fn load_config() -> Result<Config> {
    info!("Config file: {}", config_file_path().to_string_lossy());
    if !config_file_path().exists() {
        info!("Config file does not exist, creating.");
        store_default_config()?;
    }
    let config_file = File::open(config_file_path())?;
    Ok(serde_yaml::from_reader(config_file)?)
}

pub fn store_default_config() -> Result<()> {
    ensure_dir_created(&config_file_path())?;
    let config_file = File::create(&config_file_path())?;
    Ok(serde_yaml::to_writer(config_file, &Config::default())?)
}

fn ensure_dir_created(path: &Path) -> Result<()> {
    let dir = path.parent().expect("Parent directory");
    if !dir.exists() {
        fs::create_dir_all(dir).with_context(|| format!("Cannot create {}", dir.to_string_lossy()))?;
    }
    Ok(())
}
