//=========================================================================
// Configuration
//=========================================================================
//
// TOML-backed settings for the interaction layer.
//
// ```toml
// [input]
// bindings = ["KeyE", "MouseLeft"]
//
// [diagnostics]
// log_missing_target = true
// debug_rays = true
// ray_color = [0.0, 1.0, 0.0, 1.0]
// ```
//
// Every table and key is optional; missing values fall back to defaults.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::path::Path;
use std::{fs, io};

use log::debug;
use serde::Deserialize;
use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::input::{DiscreteInput, KeyCode};
use crate::core::interaction::DebugColor;

//=== ConfigError =========================================================

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unknown input name '{0}'")]
    UnknownInput(String),

    #[error("ray colour components must lie in 0.0..=1.0, got {0:?}")]
    InvalidColor([f32; 4]),
}

//=== Raw (file) representation ===========================================

#[derive(Debug, Clone, Deserialize, Default)]
struct RawConfig {
    #[serde(default)]
    input: RawInput,
    #[serde(default)]
    diagnostics: RawDiagnostics,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawInput {
    bindings: Vec<String>,
}

impl Default for RawInput {
    fn default() -> Self {
        Self {
            bindings: vec![KeyCode::KeyE.to_string()],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawDiagnostics {
    log_missing_target: bool,
    debug_rays: bool,
    ray_color: [f32; 4],
}

impl Default for RawDiagnostics {
    fn default() -> Self {
        let DebugColor { r, g, b, a } = DebugColor::GREEN;
        Self {
            log_missing_target: true,
            debug_rays: true,
            ray_color: [r, g, b, a],
        }
    }
}

//=== InteractionConfig ===================================================

/// Validated interaction settings.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionConfig {
    /// Inputs that trigger the interact action.
    pub bindings: Vec<DiscreteInput>,

    /// Emit "No Interactable Detected" when interact is pressed with no
    /// target.
    pub log_missing_target: bool,

    /// Draw the origin → target ray (debug builds only).
    pub debug_rays: bool,

    /// Colour of the debug ray.
    pub ray_color: DebugColor,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            bindings: vec![DiscreteInput::Key(KeyCode::KeyE)],
            log_missing_target: true,
            debug_rays: true,
            ray_color: DebugColor::GREEN,
        }
    }
}

impl InteractionConfig {
    /// Parses and validates configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(text)?;
        Self::from_raw(raw)
    }

    /// Reads and parses a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let config = Self::from_toml_str(&text)?;
        debug!("Loaded interaction config from {}", path.display());
        Ok(config)
    }

    fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        let bindings = raw
            .input
            .bindings
            .iter()
            .map(|name| name.parse::<DiscreteInput>())
            .collect::<Result<Vec<_>, _>>()?;

        let ray_color = DebugColor::from(raw.diagnostics.ray_color);
        if !ray_color.is_normalized() {
            return Err(ConfigError::InvalidColor(raw.diagnostics.ray_color));
        }

        Ok(Self {
            bindings,
            log_missing_target: raw.diagnostics.log_missing_target,
            debug_rays: raw.diagnostics.debug_rays,
            ray_color,
        })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
