//! Default generation options, kept in a YAML file between runs.

use std::env;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;

use passgen::GenerationConfig;

pub(crate) struct SettingsPath {
    pub(crate) path: PathBuf,
    /// Whether the user named this file. A missing default file is fine; a missing named one
    /// isn't.
    explicit: bool,
}

pub(crate) fn settings_path(settings_path: Option<PathBuf>) -> anyhow::Result<SettingsPath> {
    match settings_path {
        Some(path) => Ok(SettingsPath {
            path,
            explicit: true,
        }),
        None => Ok(SettingsPath {
            path: default_settings()?,
            explicit: false,
        }),
    }
}

fn default_settings() -> anyhow::Result<PathBuf> {
    let home = env::var_os("HOME")
        .ok_or_else(|| anyhow::anyhow!("HOME is not set; cannot find home directory of user"))?;
    let default_path = {
        let mut p = PathBuf::from(home);
        p.push(".config");
        p.push("passgen");
        p.push("settings.yaml");
        p
    };
    Ok(default_path)
}

pub(crate) fn load(settings: &SettingsPath) -> anyhow::Result<GenerationConfig> {
    let file = match File::open(&settings.path) {
        Ok(f) => f,
        Err(err) if err.kind() == io::ErrorKind::NotFound && !settings.explicit => {
            log::debug!(
                "no settings at {}; using built-in defaults",
                settings.path.display()
            );
            return Ok(GenerationConfig::default());
        }
        Err(err) => {
            return Err(err).with_context(|| {
                format!("failed to open settings file {}", settings.path.display())
            })
        }
    };
    let config = serde_yaml::from_reader(file)
        .with_context(|| format!("failed to parse settings file {}", settings.path.display()))?;
    log::debug!("loaded settings from {}", settings.path.display());
    Ok(config)
}

pub(crate) fn save(path: &Path, config: &GenerationConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    let file = File::create(path)
        .with_context(|| format!("failed to create settings file {}", path.display()))?;
    serde_yaml::to_writer(file, config).context("failed to write settings as YAML")?;
    Ok(())
}
