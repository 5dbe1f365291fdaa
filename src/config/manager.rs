use super::{
    density::DensityConfig,
    preview::PreviewConfig,
    theme::ChartTheme,
    traits::ConfigSection,
};
use crate::error::DashboardError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Config file looked up in the working directory at startup
pub const DEFAULT_CONFIG_FILE: &str = "custdash.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub theme: ChartTheme,
    pub density: DensityConfig,
    pub preview: PreviewConfig,
}

impl DashboardConfig {
    pub fn validate(&self) -> Result<(), DashboardError> {
        validate_section(&self.theme)?;
        validate_section(&self.density)?;
        validate_section(&self.preview)?;
        Ok(())
    }
}

/// Validate one section, naming it in the error
fn validate_section<S: ConfigSection>(section: &S) -> Result<(), DashboardError> {
    section.validate().map_err(|e| match e {
        DashboardError::Configuration(msg) => {
            DashboardError::Configuration(format!("[{}] {}", S::section_name(), msg))
        }
        other => other,
    })
}

pub struct ConfigManager {
    config: Arc<RwLock<DashboardConfig>>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(DashboardConfig::default())),
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), DashboardError> {
        let settings = ::config::Config::builder()
            .add_source(::config::File::from(path.as_ref()).required(true))
            .build()
            .map_err(|e| DashboardError::Configuration(format!("Failed to read config: {}", e)))?;

        let loaded: DashboardConfig = settings
            .try_deserialize()
            .map_err(|e| DashboardError::Configuration(format!("Failed to parse config: {}", e)))?;

        loaded.validate()?;

        *self.config.write().unwrap_or_else(|e| e.into_inner()) = loaded;
        Ok(())
    }

    /// Load `path` if it exists; keep defaults when it is absent or invalid.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let manager = Self::new();
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return manager;
        }

        match manager.load_from_file(path) {
            Ok(()) => log::info!("Loaded configuration from {}", path.display()),
            Err(e) => log::warn!("Ignoring {}: {}", path.display(), e),
        }
        manager
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), DashboardError> {
        let config = self.get();
        let toml_str = toml::to_string_pretty(&config)
            .map_err(|e| DashboardError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)
            .map_err(|e| DashboardError::Configuration(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    pub fn get(&self) -> DashboardConfig {
        self.config.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Apply `f` and keep the result only if it still validates
    pub fn update<F>(&self, f: F) -> Result<(), DashboardError>
    where
        F: FnOnce(&mut DashboardConfig),
    {
        let mut config = self.config.write().unwrap_or_else(|e| e.into_inner());
        let mut candidate = config.clone();
        f(&mut candidate);
        candidate.validate()?;
        *config = candidate;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BandwidthMode;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("custdash-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_defaults_validate() {
        assert!(DashboardConfig::default().validate().is_ok());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = DashboardConfig::default();
        config.density.bandwidth_mode = BandwidthMode::Adaptive;
        config.preview.rows = 8;

        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: DashboardConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_load_partial_file_keeps_other_defaults() {
        let path = temp_path("partial.toml");
        std::fs::write(&path, "[density]\nbandwidth_mode = \"Adaptive\"\n").unwrap();

        let manager = ConfigManager::new();
        manager.load_from_file(&path).unwrap();
        let config = manager.get();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.density.bandwidth_mode, BandwidthMode::Adaptive);
        assert_eq!(config.density.bw_adjust, 0.5);
        assert_eq!(config.theme, ChartTheme::default());
    }

    #[test]
    fn test_invalid_file_falls_back_to_defaults() {
        let path = temp_path("invalid.toml");
        std::fs::write(&path, "[preview]\nrows = 0\n").unwrap();

        let manager = ConfigManager::load_or_default(&path);
        std::fs::remove_file(&path).ok();

        assert_eq!(manager.get(), DashboardConfig::default());
    }

    #[test]
    fn test_update_rejects_invalid_values() {
        let manager = ConfigManager::new();
        let result = manager.update(|c| c.density.bw_adjust = -1.0);

        assert!(result.is_err());
        assert_eq!(manager.get().density.bw_adjust, 0.5);
    }

    #[test]
    fn test_validation_error_names_section() {
        let mut config = DashboardConfig::default();
        config.preview.rows = 0;

        match config.validate() {
            Err(DashboardError::Configuration(msg)) => assert!(msg.starts_with("[preview] "), "{}", msg),
            other => panic!("expected configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_save_and_reload() {
        let path = temp_path("saved.toml");
        let manager = ConfigManager::new();
        manager.update(|c| c.theme.tick_rotation_deg = 30.0).unwrap();
        manager.save_to_file(&path).unwrap();

        let reloaded = ConfigManager::new();
        reloaded.load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(reloaded.get().theme.tick_rotation_deg, 30.0);
    }
}
