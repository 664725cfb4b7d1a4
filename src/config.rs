use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "navigator.json";

fn default_log_filter() -> String {
    "info".to_string()
}

/// How the initial screen is derived at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartupProbe {
    /// Ask `get_status`; the login screen is reachable.
    #[default]
    Status,
    /// Ask `has_images_dirs`; clients without a login screen.
    HasImagesDirs,
}

/// Which trigger moves the session from the intro screen to the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntroExit {
    #[default]
    DirectoriesSaved,
    FilesIndexed,
}

/// Client config stored in `<config dir>/photo-gallery/navigator.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigatorConfig {
    pub startup_probe: StartupProbe,
    pub intro_exit: IntroExit,
    /// tracing filter used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            startup_probe: StartupProbe::default(),
            intro_exit: IntroExit::default(),
            log_filter: default_log_filter(),
        }
    }
}

pub fn config_home() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("photo-gallery"))
}

/// Config from `config_home()`, or defaults when it cannot be read.
pub fn load() -> NavigatorConfig {
    load_from(config_home().as_deref())
}

pub fn load_from(home: Option<&Path>) -> NavigatorConfig {
    let Some(home) = home else {
        return NavigatorConfig::default();
    };
    read_config(home).unwrap_or_else(|e| {
        tracing::warn!("using default navigator config: {:#}", e);
        NavigatorConfig::default()
    })
}

pub fn read_config(home: &Path) -> Result<NavigatorConfig> {
    let path = home.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(NavigatorConfig::default());
    }
    let text =
        std::fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
    match serde_json::from_str(&text) {
        Ok(config) => Ok(config),
        Err(e) => {
            tracing::warn!("ignoring malformed {}: {}", path.display(), e);
            Ok(NavigatorConfig::default())
        }
    }
}

pub fn write_config(home: &Path, config: &NavigatorConfig) -> Result<()> {
    std::fs::create_dir_all(home).with_context(|| format!("creating {}", home.display()))?;
    let tmp = home.join(format!("{}.tmp", CONFIG_FILE));
    std::fs::write(&tmp, serde_json::to_string_pretty(config)?)?;
    std::fs::rename(&tmp, home.join(CONFIG_FILE))?;
    Ok(())
}
