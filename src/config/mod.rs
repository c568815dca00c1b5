mod defaults;
mod types;

pub use types::*;

use crate::error::ConfigError;
use defaults::*;
use std::path::Path;

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            provider: Provider::default(),
            generation: GenerationConfig::default(),
            providers: ProvidersConfig::default(),
            store: default_store(),
            report_dir: default_report_dir(),
        }
    }
}

impl Config {
    /// Load config from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load the config if the file exists, otherwise fall back to defaults
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            tracing::info!("Loading config from {:?}", path);
            Self::load(path)
        } else {
            tracing::info!("No config found at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version != default_version() {
            return Err(ConfigError::UnsupportedVersion(self.version));
        }

        let temperature = self.generation.temperature;
        if !(0.0..=2.0).contains(&temperature) {
            return Err(ConfigError::Temperature(temperature));
        }

        if self.generation.max_output_tokens == 0 {
            return Err(ConfigError::ZeroOutputTokens);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.provider, Provider::Gemini);
        assert!(config.generation.fallback);
        assert_eq!(config.generation.max_output_tokens, 2000);
        assert_eq!(config.providers.gemini.model, "gemini-1.5-flash");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml() {
        let yaml = r#"
provider: offline
generation:
  fallback: false
  temperature: 0.2
store: data/plans.json
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.provider, Provider::Offline);
        assert!(!config.generation.fallback);
        assert_eq!(config.generation.timeout_sec, 60);
        assert_eq!(config.store, Path::new("data/plans.json"));
    }

    #[test]
    fn test_validate_rejects_out_of_range_temperature() {
        let mut config = Config::default();
        config.generation.temperature = 3.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Temperature(_))
        ));
    }

    #[test]
    fn test_validate_rejects_unknown_version() {
        let config: Config = serde_yaml::from_str("version: 7").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnsupportedVersion(7))
        ));
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(&dir.path().join("stride.yaml")).unwrap();
        assert_eq!(config.report_dir, Path::new("reports"));
    }
}
