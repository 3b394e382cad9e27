//! libime-core
//!
//! Language-agnostic keyboard plumbing shared by composing input crates
//! (libhangul). It owns the host side of a composer: the committed text
//! buffer, the session (mode, shift latch, preview), key routing and the
//! context record a UI reads after every key.
//!
//! Public API:
//! - `SyllableComposer` - seam implemented by a script-specific composer
//! - `ImeEngine` - key routing over a composer and a Latin editor
//! - `ImeContext` - plain data for the UI
//! - `Config` - keyboard behavior flags, loadable from TOML
use anyhow::Context as _;
use serde::{Deserialize, Serialize};

pub mod composer;
pub use composer::{ComposeStep, EraseStep, SyllableComposer};

pub mod input_buffer;
pub use input_buffer::InputBuffer;

pub mod context;
pub use context::ImeContext;

pub mod session;
pub use session::{ImeSession, InputMode};

pub mod editor;
pub use editor::{ComposeEditor, Editor, EditorResult, LatinEditor};

pub mod ime_engine;
pub use ime_engine::{ImeEngine, KeyEvent, KeyResult};

/// Generic keyboard configuration.
///
/// This config contains only script-agnostic fields. Script-specific options
/// (key layout, ...) belong in the language crate's config, which flattens
/// this one.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Mode the keyboard opens in
    pub initial_mode: InputMode,

    /// Release shift after one Latin letter
    pub latin_shift_oneshot: bool,

    /// Release shift after one composing key. The kiosk keyboard keeps shift
    /// latched on the Korean page, so this defaults to `false`.
    pub compose_shift_oneshot: bool,

    /// Enter appends a newline (otherwise it only commits the open syllable)
    pub enter_inserts_newline: bool,

    /// Refuse submit while the buffer is blank and nothing is being composed
    pub require_text_for_submit: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_mode: InputMode::Compose,
            latin_shift_oneshot: true,
            compose_shift_oneshot: false,
            enter_inserts_newline: true,
            require_text_for_submit: true,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("parse config {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).with_context(|| format!("write config {}", path.display()))?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
