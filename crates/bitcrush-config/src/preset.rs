//! Preset file format and operations.

use bitcrush_effects::{Bitcrusher, HoldMode, PARAM_HOLD_MODE};
use bitcrush_registry::{ControlBlock, Instance};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;
use crate::factory_presets::get_factory_preset;
use crate::validation::{ValidationResult, validate_preset};

/// Bitcrusher settings stored as TOML.
///
/// # TOML Format
///
/// ```toml
/// name = "Console"
/// description = "8-bit, quarter-rate"
/// sample_rate = 44100
/// bit_depth = 8.0
/// target_rate = 11025.0
/// hold_mode = "continuous"   # or "reset-each-block"
/// ```
///
/// `target_rate` is in Hz. When omitted it defaults to half of
/// `sample_rate`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Preset {
    /// Name of the preset.
    pub name: String,

    /// Optional description of the preset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Sample rate the preset was designed at (defaults to 48000).
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,

    /// Quantizer resolution in bits.
    #[serde(default = "default_bit_depth")]
    pub bit_depth: f32,

    /// Target sample rate in Hz.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_rate: Option<f32>,

    /// Whether hold state survives block boundaries.
    #[serde(default, with = "hold_mode_name")]
    pub hold_mode: HoldMode,
}

fn default_sample_rate() -> u32 {
    48000
}

fn default_bit_depth() -> f32 {
    bitcrush_effects::BIT_DEPTH_PARAM.default
}

/// Serializes [`HoldMode`] by its stable name.
mod hold_mode_name {
    use bitcrush_effects::HoldMode;
    use serde::{Deserialize, Deserializer, Serializer, de};

    const VARIANTS: &[&str] = &["continuous", "reset-each-block"];

    pub fn serialize<S: Serializer>(mode: &HoldMode, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(mode.name())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<HoldMode, D::Error> {
        let name = String::deserialize(deserializer)?;
        HoldMode::from_name(&name).ok_or_else(|| de::Error::unknown_variant(&name, VARIANTS))
    }
}

impl Preset {
    /// Create a preset with default settings.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            sample_rate: default_sample_rate(),
            bit_depth: default_bit_depth(),
            target_rate: None,
            hold_mode: HoldMode::default(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the sample rate hint.
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Set the bit depth.
    pub fn with_bit_depth(mut self, bits: f32) -> Self {
        self.bit_depth = bits;
        self
    }

    /// Set the target sample rate in Hz.
    pub fn with_target_rate(mut self, hz: f32) -> Self {
        self.target_rate = Some(hz);
        self
    }

    /// Set the hold mode.
    pub fn with_hold_mode(mut self, mode: HoldMode) -> Self {
        self.hold_mode = mode;
        self
    }

    /// Target sample rate in Hz, filling in the default.
    pub fn target_rate_hz(&self) -> f32 {
        self.target_rate
            .unwrap_or(self.sample_rate as f32 * TARGET_RATE_DEFAULT_FRACTION)
    }

    /// Load a preset from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        let preset: Preset = toml::from_str(&content)?;
        Ok(preset)
    }

    /// Load a preset from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Resolve a factory preset name, or else a path to a TOML file.
    pub fn find(name_or_path: &str) -> Result<Self, ConfigError> {
        if let Some(preset) = get_factory_preset(name_or_path) {
            return Ok(preset);
        }
        let path = Path::new(name_or_path);
        if path.is_file() {
            return Self::load(path);
        }
        Err(ConfigError::PresetNotFound(name_or_path.to_string()))
    }

    /// Save the preset to a TOML file, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        Ok(())
    }

    /// Convert the preset to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check values against their advertised ranges.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_preset(self)
    }

    /// Apply all settings to a bitcrusher.
    pub fn apply(&self, crusher: &mut Bitcrusher) {
        crusher.set_bit_depth(self.bit_depth);
        crusher.set_target_rate(self.target_rate_hz());
        crusher.set_hold_mode(self.hold_mode);
    }

    /// Write the port-backed settings into `controls` and the hidden hold
    /// mode into `instance`.
    pub fn configure(&self, instance: &mut Instance, controls: &ControlBlock) {
        let descriptor = instance.descriptor();
        if let Some(slot) = descriptor.control_slot("crush_bits") {
            controls.set(slot, self.bit_depth);
        }
        if let Some(slot) = descriptor.control_slot("crush_rate") {
            controls.set(slot, self.target_rate_hz());
        }
        instance.set_param(PARAM_HOLD_MODE, self.hold_mode.to_param());
    }
}

const TARGET_RATE_DEFAULT_FRACTION: f32 = bitcrush_effects::TARGET_RATE_PARAM.default;

impl Default for Preset {
    fn default() -> Self {
        Self::new("Untitled")
    }
}
