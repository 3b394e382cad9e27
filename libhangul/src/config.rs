use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::layout::KeyboardLayout;

/// Hangul-specific configuration that extends the base `Config` from core.
///
/// This configuration includes:
/// - All generic keyboard options from `libime_core::Config` (flattened via serde)
/// - The key layout feeding the composer
///
/// # Example
///
/// ```rust
/// use libhangul::{HangulConfig, KeyboardLayout};
///
/// let config = HangulConfig::from_toml_str("layout = \"dubeolsik\"").unwrap();
/// assert_eq!(config.layout, KeyboardLayout::Dubeolsik);
/// let base_config = config.into_base();
/// assert!(base_config.enter_inserts_newline);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct HangulConfig {
    /// Base keyboard fields (mode, shift behavior, submit rules)
    #[serde(flatten)]
    pub base: libime_core::Config,

    /// Layout used to turn key presses into jamo
    #[serde(default)]
    pub layout: KeyboardLayout,
}

impl HangulConfig {
    /// Config for a given layout with default keyboard behavior.
    pub fn with_layout(layout: KeyboardLayout) -> Self {
        Self {
            base: libime_core::Config::default(),
            layout,
        }
    }

    /// Convert this config into the base config for `ImeEngine::new()`.
    pub fn into_base(self) -> libime_core::Config {
        self.base
    }

    /// Get a reference to the base config
    pub fn base(&self) -> &libime_core::Config {
        &self.base
    }

    /// Get a mutable reference to the base config
    pub fn base_mut(&mut self) -> &mut libime_core::Config {
        &mut self.base
    }

    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("parse config {}", path.display()))
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_toml_string()?)
            .with_context(|| format!("write config {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libime_core::InputMode;

    #[test]
    fn test_empty_toml_is_default() {
        let cfg = HangulConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, HangulConfig::default());
        assert_eq!(cfg.layout, KeyboardLayout::Jamo);
    }

    #[test]
    fn test_flattened_base_fields() {
        let cfg = HangulConfig::from_toml_str(
            "layout = \"dubeolsik\"\ninitial_mode = \"latin\"\ncompose_shift_oneshot = true\n",
        )
        .unwrap();
        assert_eq!(cfg.layout, KeyboardLayout::Dubeolsik);
        assert_eq!(cfg.base().initial_mode, InputMode::Latin);
        assert!(cfg.base().compose_shift_oneshot);
        assert!(cfg.base().latin_shift_oneshot);
    }

    #[test]
    fn test_save_and_load() {
        let dir = std::env::temp_dir().join(format!("libhangul_cfg_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("keyboard.toml");

        let mut cfg = HangulConfig::with_layout(KeyboardLayout::Dubeolsik);
        cfg.base_mut().enter_inserts_newline = false;
        cfg.save_toml(&path).unwrap();

        assert_eq!(HangulConfig::load_toml(&path).unwrap(), cfg);
        let _ = std::fs::remove_dir_all(&dir);
    }
}
