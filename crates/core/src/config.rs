//! Page configuration.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::result::Result;
use crate::section::Section;
use crate::visibility::IntersectionThreshold;

/// Tunables of the page's animation behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageConfig {
    /// Fraction of a section that must be on screen before it animates in.
    #[serde(default)]
    pub threshold: IntersectionThreshold,

    /// Sections shown in their entered state from the first render.
    #[serde(default = "default_initially_visible")]
    pub initially_visible: Vec<Section>,
}

fn default_initially_visible() -> Vec<Section> {
    vec![Section::Hero]
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            threshold: IntersectionThreshold::default(),
            initially_visible: default_initially_visible(),
        }
    }
}

impl PageConfig {
    /// Set the intersection threshold.
    #[must_use]
    pub const fn threshold(mut self, threshold: IntersectionThreshold) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the sections that start visible.
    #[must_use]
    pub fn initially_visible(mut self, sections: impl IntoIterator<Item = Section>) -> Self {
        self.initially_visible = sections.into_iter().collect();
        self
    }

    /// Parse a TOML document.
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigParseFailed` for malformed TOML, unknown keys,
    /// unknown section names or an out-of-range threshold.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::config_parse_failed("toml", e.to_string()))
    }

    /// Parse a JSON document.
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigParseFailed` on the same conditions as
    /// [`PageConfig::from_toml_str`].
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::config_parse_failed("json", e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PageConfig::default();
        assert_eq!(config.threshold, IntersectionThreshold::default());
        assert_eq!(config.initially_visible, vec![Section::Hero]);
    }

    #[test]
    fn test_empty_toml_uses_defaults() -> Result<()> {
        assert_eq!(PageConfig::from_toml_str("")?, PageConfig::default());
        Ok(())
    }

    #[test]
    fn test_toml_overrides() -> Result<()> {
        let config = PageConfig::from_toml_str(
            r#"
            threshold = 0.25
            initially_visible = ["hero", "skills"]
            "#,
        )?;
        assert_eq!(config.threshold, IntersectionThreshold::new(0.25)?);
        assert_eq!(config.initially_visible, vec![Section::Hero, Section::Skills]);
        Ok(())
    }

    #[test]
    fn test_json_overrides() -> Result<()> {
        let config = PageConfig::from_json_str(r#"{"threshold": 0.5, "initially_visible": []}"#)?;
        assert_eq!(config.threshold, IntersectionThreshold::new(0.5)?);
        assert!(config.initially_visible.is_empty());
        Ok(())
    }

    #[test]
    fn test_out_of_range_threshold_rejected() {
        let result = PageConfig::from_toml_str("threshold = 1.5");
        assert!(matches!(
            result,
            Err(Error::ConfigParseFailed { format: "toml", .. })
        ));
    }

    #[test]
    fn test_unknown_section_rejected() {
        assert!(PageConfig::from_json_str(r#"{"initially_visible": ["footer"]}"#).is_err());
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(PageConfig::from_toml_str("root_margin = \"10px\"").is_err());
    }

    #[test]
    fn test_builder() -> Result<()> {
        let config = PageConfig::default()
            .threshold(IntersectionThreshold::new(0.3)?)
            .initially_visible([Section::Experience]);
        assert_eq!(config.initially_visible, vec![Section::Experience]);
        assert_eq!(config.threshold.ratio().to_bits(), 0.3_f64.to_bits());
        Ok(())
    }
}
