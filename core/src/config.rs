// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};

use crate::{DisplayModeConfig, Error, Nusach};

/// The name of the application.
pub const APP_NAME: &str = "luach";

/// File name of the memorial store inside the data directory.
const RECORDS_FILE: &str = "memorials.json";

/// Configuration of the display core.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct Config {
    /// Path to the memorial store, defaults to `$XDG_DATA_HOME/luach/memorials.json`.
    #[serde(default)]
    pub records_path: Option<PathBuf>,

    /// Liturgical custom used for Slichot.
    #[serde(default)]
    pub nusach: Nusach,

    /// Memorial board layout.
    #[serde(default)]
    pub display: DisplayModeConfig,
}

impl Config {
    /// Normalize the configuration.
    pub fn normalize(&mut self) -> Result<(), Error> {
        self.records_path = match &self.records_path {
            Some(path) => Some(expand_path(path)?),
            None => match get_data_dir() {
                Ok(dir) => Some(dir.join(APP_NAME).join(RECORDS_FILE)),
                Err(e) => {
                    tracing::warn!(err = %e, "failed to get data directory");
                    None
                }
            },
        };

        if self.display.grid_rows == 0 {
            tracing::warn!("grid_rows must be positive, using 1");
            self.display.grid_rows = 1;
        }
        if self.display.grid_columns == 0 {
            tracing::warn!("grid_columns must be positive, using 1");
            self.display.grid_columns = 1;
        }

        Ok(())
    }
}

/// Handle tilde (~) and environment variables in the path
fn expand_path(path: &Path) -> Result<PathBuf, Error> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path
        .to_str()
        .ok_or_else(|| Error::Path(format!("Invalid path: {}", path.display())))?;

    // Handle tilde and home directory
    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };
    for prefix in home_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_home_dir()?.join(stripped));
        }
    }

    // Handle config directories
    let config_prefixes: &[&str] = if cfg!(unix) {
        &["$XDG_CONFIG_HOME/", "${XDG_CONFIG_HOME}/"]
    } else {
        &[r"%LOCALAPPDATA%\", "%LOCALAPPDATA%/"]
    };
    for prefix in config_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_config_dir()?.join(stripped));
        }
    }

    Ok(path.into())
}

fn get_home_dir() -> Result<PathBuf, Error> {
    dirs::home_dir().ok_or_else(|| Error::Path("User-specific home directory not found".into()))
}

fn get_config_dir() -> Result<PathBuf, Error> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| Error::Path("User-specific config directory not found".into()))
}

fn get_data_dir() -> Result<PathBuf, Error> {
    #[cfg(unix)]
    let data_dir = xdg::BaseDirectories::new().get_data_home();
    #[cfg(windows)]
    let data_dir = dirs::data_dir();
    data_dir.ok_or_else(|| Error::Path("User-specific data directory not found".into()))
}
