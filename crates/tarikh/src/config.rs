use crate::events::AppEvent;
use async_channel::Sender;
use directories::ProjectDirs;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use serde::{Deserialize, Serialize};
use tabwheel::angle::TiePolicy;
use tabwheel::spring::SpringParams;
use tabwheel::tab::default_tabs;
use tabwheel::{ArcLayout, Route, Tab};
use thiserror::Error;

/// Spring feel in the tension/friction terms mobile animation drivers use.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SpringConfig {
    pub tension: f64,
    pub friction: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            tension: 50.0,
            friction: 8.0,
        }
    }
}

impl SpringConfig {
    pub fn params(&self) -> SpringParams {
        SpringParams::from_origami(self.tension, self.friction)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default = "default_tabs")]
    pub tabs: Vec<Tab>,
    #[serde(default)]
    pub initial_route: Option<Route>,
    #[serde(default)]
    pub tie_break: TiePolicy,
    #[serde(default)]
    pub spring: SpringConfig,
    #[serde(default)]
    pub layout: ArcLayout,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tabs: default_tabs(),
            initial_route: None,
            tie_break: TiePolicy::default(),
            spring: SpringConfig::default(),
            layout: ArcLayout::default(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
}

pub fn get_config_path() -> Result<std::path::PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "tarikh", "tarikh").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn load_config() -> Result<Config, ConfigError> {
    let config_path = get_config_path()?;

    let s = config::Config::builder()
        .add_source(config::File::from(config_path).required(false))
        .add_source(config::Environment::with_prefix("TARIKH"))
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn load_or_setup() -> Config {
    if let Ok(path) = get_config_path()
        && !path.exists()
    {
        log::info!("No config at {}, using built-in tabs", path.display());
        return Config::default();
    }

    match load_config() {
        Ok(c) => c,
        Err(e) => {
            log::error!("Failed to load config, using built-in tabs: {}", e);
            Config::default()
        }
    }
}

pub fn write_default_config() -> std::io::Result<std::path::PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

pub async fn run_async_watcher(tx: Sender<AppEvent>) {
    let config_path = match get_config_path() {
        Ok(p) => p,
        Err(e) => {
            log::error!("Config watcher error: {}", e);
            return;
        }
    };
    let Some(config_dir) = config_path.parent().map(|p| p.to_path_buf()) else {
        return;
    };

    if let Err(e) = fs_err::create_dir_all(&config_dir) {
        log::error!("Failed to create config directory for watching: {}", e);
        return;
    }

    let (bridge_tx, bridge_rx) = async_channel::unbounded();

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    ) {
        Ok(w) => w,
        Err(e) => {
            log::error!("Failed to create watcher: {}", e);
            return;
        }
    };

    if let Err(e) = watcher.watch(&config_dir, RecursiveMode::NonRecursive) {
        log::error!("Failed to watch config directory: {}", e);
        return;
    }

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) => {
                let meaningful_event = matches!(
                    event.kind,
                    EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
                );

                if meaningful_event
                    && event.paths.iter().any(|p| p == &config_path)
                    && tx.send(AppEvent::ConfigReload).await.is_err()
                {
                    break;
                }
            }
            Err(e) => log::error!("Watch error: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_matches_defaults() {
        let parsed: Config = config::Config::builder()
            .add_source(config::File::from_str(
                DEFAULT_CONFIG,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        let defaults = Config::default();

        assert_eq!(parsed.tabs, defaults.tabs);
        assert_eq!(parsed.tie_break, defaults.tie_break);
        assert_eq!(parsed.spring, defaults.spring);
        assert_eq!(parsed.layout, defaults.layout);
        assert_eq!(parsed.initial_route, Some(Route::new("/")));
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let json = r#"{
            "tie_break": "ccw",
            "layout": { "width": 720.0 },
            "tabs": [ { "name": "Map", "route": "/map", "icon": "mark-location" } ]
        }"#;
        let cfg: Config = serde_json::from_str(json).unwrap();

        assert_eq!(cfg.tie_break, TiePolicy::CounterClockwise);
        assert_eq!(cfg.layout.width, 720.0);
        assert_eq!(cfg.layout.tab_height, ArcLayout::default().tab_height);
        assert_eq!(cfg.tabs.len(), 1);
        assert_eq!(cfg.spring, SpringConfig::default());
        assert!(cfg.initial_route.is_none());
    }

    #[test]
    fn test_missing_tabs_use_builtin_set() {
        let cfg: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.tabs, default_tabs());
    }

    #[test]
    fn test_spring_config_converts_to_params() {
        let params = SpringConfig::default().params();
        assert_eq!(params, SpringParams::default());
    }
}
