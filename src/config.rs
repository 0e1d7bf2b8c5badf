use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, VphysError};
use crate::fsutil::mkdir_p;
use crate::partition::RemainderPolicy;
use crate::plot::style::DEFAULT_OUTWARD_POINTS;
use crate::plot::types::{PLOT_HEIGHT, PLOT_WIDTH};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Default log filter when RUST_LOG is unset.
    pub log_level: String,
    /// Output image width in pixels.
    pub plot_width: u32,
    /// Output image height in pixels.
    pub plot_height: u32,
    /// Outward spine offset in points.
    pub spine_outward_points: f64,
    /// Number remainder indices with the legacy `total_workers + rank` formula.
    pub legacy_remainder: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            plot_width: PLOT_WIDTH,
            plot_height: PLOT_HEIGHT,
            spine_outward_points: DEFAULT_OUTWARD_POINTS,
            legacy_remainder: false,
        }
    }
}

impl Config {
    /// Parse a config file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Write this config as commented TOML, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                mkdir_p(parent)?;
            }
        }
        std::fs::write(path, self.to_commented_toml().as_bytes())?;
        Ok(())
    }

    pub fn remainder_policy(&self) -> RemainderPolicy {
        if self.legacy_remainder {
            RemainderPolicy::Legacy
        } else {
            RemainderPolicy::Contiguous
        }
    }

    fn to_commented_toml(&self) -> String {
        format!(
            "# vphys configuration\n\
             \n\
             # Log filter used when RUST_LOG is unset (trace, debug, info, warn, error)\n\
             log_level = \"{}\"\n\
             \n\
             # Rendered image size in pixels\n\
             plot_width = {}\n\
             plot_height = {}\n\
             \n\
             # Outward spine offset in points\n\
             spine_outward_points = {:?}\n\
             \n\
             # Use the legacy remainder numbering (total_workers + rank)\n\
             legacy_remainder = {}\n",
            self.log_level,
            self.plot_width,
            self.plot_height,
            self.spine_outward_points,
            self.legacy_remainder,
        )
    }
}

/// Get or create the vphys config directory (~/.config/vphys/).
pub fn config_dir() -> Option<PathBuf> {
    let dir = dirs::config_dir()?.join("vphys");
    mkdir_p(&dir).ok()?;
    Some(dir)
}

/// Path to the default config file.
pub fn config_path() -> Option<PathBuf> {
    Some(config_dir()?.join("config.toml"))
}

/// Outcome of [`load_config`].
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: Config,
    /// Set when the default file could not be written. The caller logs it
    /// once a subscriber is installed.
    pub write_error: Option<(PathBuf, VphysError)>,
}

/// Load config from `path` (or the default location), returning defaults if
/// the file doesn't exist. A default file is written on first run.
///
/// Parse errors come back as [`VphysError::Config`] prefixed with the file
/// path. Read errors stay [`VphysError::Io`].
pub fn load_config(path: Option<&Path>) -> Result<LoadedConfig> {
    let path = match path.map(Path::to_path_buf).or_else(config_path) {
        Some(p) => p,
        None => {
            return Ok(LoadedConfig {
                config: Config::default(),
                write_error: None,
            })
        }
    };
    if path.exists() {
        let config = Config::load(&path).map_err(|e| match e {
            VphysError::Config(msg) => VphysError::Config(format!("{}: {}", path.display(), msg)),
            other => other,
        })?;
        return Ok(LoadedConfig {
            config,
            write_error: None,
        });
    }
    let config = Config::default();
    let write_error = config.save(&path).err().map(|e| (path, e));
    Ok(LoadedConfig { config, write_error })
}
