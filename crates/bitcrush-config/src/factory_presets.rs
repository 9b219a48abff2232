//! Factory presets bundled with the library.
//!
//! These are embedded at compile time and always available, both as
//! starting points and as known-good settings for tests.

use crate::Preset;

/// Array of factory preset names for external access.
pub static FACTORY_PRESET_NAMES: &[&str] = &[
    "init",
    "console",
    "telephone",
    "grit",
    "lofi_sampler",
    "reference",
];

static FACTORY_PRESETS_TOML: &[(&str, &str)] = &[
    ("init", INIT_PRESET),
    ("console", CONSOLE_PRESET),
    ("telephone", TELEPHONE_PRESET),
    ("grit", GRIT_PRESET),
    ("lofi_sampler", LOFI_SAMPLER_PRESET),
    ("reference", REFERENCE_PRESET),
];

/// Initialization preset - 16 bits, no decimation.
const INIT_PRESET: &str = r#"
name = "Init"
description = "16-bit, full rate - nearly transparent"
sample_rate = 48000
bit_depth = 16.0
target_rate = 48000.0
hold_mode = "continuous"
"#;

/// 8-bit home console at a quarter of CD rate.
const CONSOLE_PRESET: &str = r#"
name = "Console"
description = "8-bit, quarter-rate"
sample_rate = 44100
bit_depth = 8.0
target_rate = 11025.0
hold_mode = "continuous"
"#;

/// Narrowband voice line.
const TELEPHONE_PRESET: &str = r#"
name = "Telephone"
description = "8 kHz, 8-bit voice band"
sample_rate = 48000
bit_depth = 8.0
target_rate = 8000.0
hold_mode = "continuous"
"#;

/// Heavy crush for aggressive aliasing.
const GRIT_PRESET: &str = r#"
name = "Grit"
description = "4-bit at 6 kHz - loud aliasing and stepped noise"
sample_rate = 48000
bit_depth = 4.0
target_rate = 6000.0
hold_mode = "continuous"
"#;

/// Classic 12-bit drum sampler.
const LOFI_SAMPLER_PRESET: &str = r#"
name = "Lo-Fi Sampler"
description = "12-bit at 26.04 kHz"
sample_rate = 48000
bit_depth = 12.0
target_rate = 26040.0
hold_mode = "continuous"
"#;

/// Hold restarts every block, as in legacy hosts.
const REFERENCE_PRESET: &str = r#"
name = "Reference"
description = "12-bit, half-rate, hold restarted at every block"
sample_rate = 44100
bit_depth = 12.0
target_rate = 22050.0
hold_mode = "reset-each-block"
"#;

/// Get all factory presets.
///
/// # Example
///
/// ```rust
/// use bitcrush_config::factory_presets;
///
/// for preset in factory_presets() {
///     println!("  - {}: {}", preset.name, preset.description.as_deref().unwrap_or(""));
/// }
/// ```
pub fn factory_presets() -> Vec<Preset> {
    FACTORY_PRESETS_TOML
        .iter()
        .filter_map(|(_, toml)| Preset::from_toml(toml).ok())
        .collect()
}

/// Get a factory preset by identifier or display name, case-insensitively.
///
/// # Example
///
/// ```rust
/// use bitcrush_config::get_factory_preset;
///
/// let preset = get_factory_preset("console").unwrap();
/// assert_eq!(preset.bit_depth, 8.0);
/// ```
pub fn get_factory_preset(name: &str) -> Option<Preset> {
    if let Some((_, toml)) = FACTORY_PRESETS_TOML
        .iter()
        .find(|(id, _)| id.eq_ignore_ascii_case(name))
    {
        return Preset::from_toml(toml).ok();
    }

    factory_presets()
        .into_iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Get the identifiers of all factory presets.
pub fn factory_preset_names() -> Vec<&'static str> {
    FACTORY_PRESETS_TOML.iter().map(|(name, _)| *name).collect()
}

/// Returns true if `name` matches a factory preset identifier or display
/// name (case-insensitive).
pub fn is_factory_preset(name: &str) -> bool {
    get_factory_preset(name).is_some()
}
