//! Tunables of the compatibility rules.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// How the power rule sizes a system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PowerPolicy {
    /// Motherboard, RAM and fans.
    pub base_allowance_w: u32,
    pub storage_allowance_w: u32,
    /// Recommended PSU wattage as a multiple of the estimated draw.
    pub headroom: f64,
}

impl Default for PowerPolicy {
    fn default() -> Self {
        Self {
            base_allowance_w: 50,
            storage_allowance_w: 7,
            headroom: 1.3,
        }
    }
}

impl PowerPolicy {
    /// `ceil(total * headroom)`.
    pub fn recommended_wattage(&self, total_power: u32) -> u32 {
        (f64::from(total_power) * self.headroom).ceil() as u32
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub power: PowerPolicy,
    /// AIO radiators larger than this draw a clearance warning.
    pub radiator_warning_mm: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            power: PowerPolicy::default(),
            radiator_warning_mm: 280,
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig =
            serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Parse(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.power.headroom.is_finite() || self.power.headroom < 1.0 {
            return Err(ConfigError::Invalid {
                field: "power.headroom",
                reason: format!("must be a finite value >= 1.0, got {}", self.power.headroom),
            });
        }
        if self.radiator_warning_mm == 0 {
            return Err(ConfigError::Invalid {
                field: "radiator_warning_mm",
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_storefront_rules() {
        let config = EngineConfig::default();
        assert_eq!(config.power.base_allowance_w, 50);
        assert_eq!(config.power.storage_allowance_w, 7);
        assert_eq!(config.power.headroom, 1.3);
        assert_eq!(config.radiator_warning_mm, 280);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn recommended_wattage_rounds_up() {
        let policy = PowerPolicy::default();
        assert_eq!(policy.recommended_wattage(315), 410);
        assert_eq!(policy.recommended_wattage(100), 130);
        assert_eq!(policy.recommended_wattage(0), 0);
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config = EngineConfig::from_json_str(r#"{"power": {"headroom": 1.5}}"#).unwrap();
        assert_eq!(config.power.headroom, 1.5);
        assert_eq!(config.power.base_allowance_w, 50);
        assert_eq!(config.radiator_warning_mm, 280);
    }

    #[test]
    fn rejects_headroom_below_one() {
        let err = EngineConfig::from_json_str(r#"{"power": {"headroom": 0.8}}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "power.headroom",
                ..
            }
        ));
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = EngineConfig::from_json_str(r#"{"safety_margin": 0.8}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("engine.json");
        std::fs::write(&path, r#"{"radiator_warning_mm": 360}"#).unwrap();

        let config = EngineConfig::load(&path).unwrap();
        assert_eq!(config.radiator_warning_mm, 360);

        assert!(EngineConfig::load(dir.path().join("missing.json")).is_err());
    }
}
