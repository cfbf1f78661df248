//! List service configuration
//!
//! Paging limits, loaded from a JSON file. Missing keys take defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::{ServiceError, ServiceResult};

/// List service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Page size used when a request asks for 0 (default: 100)
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,

    /// Largest page size a request may ask for (default: 1000)
    #[serde(default = "default_max_page_size")]
    pub max_page_size: usize,
}

fn default_page_size() -> usize {
    100
}

fn default_max_page_size() -> usize {
    1000
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> ServiceResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| ServiceError::config(format!("Failed to read config: {}", e)))?;

        let config: ServiceConfig = serde_json::from_str(&content)
            .map_err(|e| ServiceError::config(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate paging limits
    pub fn validate(&self) -> ServiceResult<()> {
        if self.max_page_size == 0 {
            return Err(ServiceError::config("max_page_size must be > 0"));
        }

        if self.default_page_size == 0 {
            return Err(ServiceError::config("default_page_size must be > 0"));
        }

        if self.default_page_size > self.max_page_size {
            return Err(ServiceError::config(format!(
                "default_page_size {} exceeds max_page_size {}",
                self.default_page_size, self.max_page_size
            )));
        }

        Ok(())
    }

    /// Effective page size of a request; 0 selects the default
    pub fn page_size(&self, requested: usize) -> ServiceResult<usize> {
        match requested {
            0 => Ok(self.default_page_size),
            n if n > self.max_page_size => Err(ServiceError::PageSizeExceeded {
                requested: n,
                max: self.max_page_size,
            }),
            n => Ok(n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ServiceConfig::default();
        assert_eq!(config.default_page_size, 100);
        assert_eq!(config.max_page_size, 1000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_page_size_resolution() {
        let config = ServiceConfig::default();
        assert_eq!(config.page_size(0), Ok(100));
        assert_eq!(config.page_size(25), Ok(25));
        assert_eq!(config.page_size(1000), Ok(1000));
        assert!(matches!(
            config.page_size(1001),
            Err(ServiceError::PageSizeExceeded { requested: 1001, max: 1000 })
        ));
    }

    #[test]
    fn test_load_with_missing_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"max_page_size": 50}}"#).unwrap();

        let err = ServiceConfig::load(file.path()).unwrap_err();
        assert_eq!(err.code(), "TASKGRID_CONFIG_ERROR");

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"default_page_size": 20, "max_page_size": 50}}"#).unwrap();
        let config = ServiceConfig::load(file.path()).unwrap();
        assert_eq!(config.default_page_size, 20);
        assert_eq!(config.max_page_size, 50);
    }

    #[test]
    fn test_load_rejects_bad_files() {
        assert!(ServiceConfig::load(Path::new("/nonexistent/taskgrid.json")).is_err());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(ServiceConfig::load(file.path()).is_err());
    }
}
