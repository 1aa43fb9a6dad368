use serde::{Deserialize, Serialize};

use crate::error::{Result, SolarError};
use crate::types::Site;

/// Settings for sun-path generation.
///
/// ```toml
/// step_minutes = 30
/// radius = 1.0
///
/// [site]
/// latitude = 52.23
/// longitude = 21.01
/// std_meridian = 15.0
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SunPathConfig {
    pub site: Site,
    pub step_minutes: u32,
    pub radius: f64,
    pub include_below_horizon: bool,
}

impl Default for SunPathConfig {
    fn default() -> Self {
        Self {
            site: Site::default(),
            step_minutes: 60,
            radius: 1.0,
            include_below_horizon: false,
        }
    }
}

impl SunPathConfig {
    /// Parses and validates a TOML document. Missing keys take defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(-90.0..=90.0).contains(&self.site.latitude) {
            return Err(SolarError::InvalidConfig(format!(
                "latitude {} outside -90..=90",
                self.site.latitude
            )));
        }
        if !(1..=1440).contains(&self.step_minutes) {
            return Err(SolarError::InvalidConfig(format!(
                "step_minutes {} outside 1..=1440",
                self.step_minutes
            )));
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(SolarError::InvalidConfig(format!(
                "radius {} must be positive",
                self.radius
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = SunPathConfig::from_toml_str("step_minutes = 15\n[site]\nlatitude = 52.0\n")
            .unwrap();
        assert_eq!(config.step_minutes, 15);
        assert_eq!(config.site.latitude, 52.0);
        assert_eq!(config.site.longitude, Site::default().longitude);
        assert_eq!(config.radius, 1.0);
        assert!(!config.include_below_horizon);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            SunPathConfig::from_toml_str("step_minutes = 0"),
            Err(SolarError::InvalidConfig(_))
        ));
        assert!(matches!(
            SunPathConfig::from_toml_str("radius = -1.0"),
            Err(SolarError::InvalidConfig(_))
        ));
        assert!(matches!(
            SunPathConfig::from_toml_str("[site]\nlatitude = 95.0"),
            Err(SolarError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            SunPathConfig::from_toml_str("step_minutes = \"often\""),
            Err(SolarError::Config(_))
        ));
    }
}
