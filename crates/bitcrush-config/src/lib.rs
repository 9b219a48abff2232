//! Configuration and preset management for the bitcrusher.
//!
//! # Features
//!
//! - **Preset System**: Load and save bitcrusher settings as TOML files
//! - **Validation**: Report values outside the advertised control ranges
//! - **Factory Presets**: Built-in presets for common sounds
//!
//! # Example
//!
//! ```rust,no_run
//! use bitcrush_config::Preset;
//! use bitcrush_effects::Bitcrusher;
//!
//! let preset = Preset::load("my_preset.toml").unwrap();
//! preset.validate().unwrap();
//!
//! let mut crusher = Bitcrusher::new(preset.sample_rate as f32);
//! preset.apply(&mut crusher);
//!
//! let tweaked = preset.clone().with_bit_depth(6.0);
//! tweaked.save("tweaked.toml").unwrap();
//! ```

mod error;
mod preset;

/// Preset validation.
pub mod validation;

/// Factory presets bundled with the library.
pub mod factory_presets;

pub use error::ConfigError;
pub use factory_presets::{
    FACTORY_PRESET_NAMES, factory_preset_names, factory_presets, get_factory_preset,
    is_factory_preset,
};
pub use preset::Preset;
pub use validation::{
    ValidationError, ValidationResult, validate_bit_depth, validate_preset, validate_target_rate,
};
