//! Integration tests for bitcrush-config.
//!
//! These tests verify file round-trips and that presets drive the effect
//! and the host instance the same way.

use bitcrush_config::{ConfigError, Preset, factory_presets, get_factory_preset};
use bitcrush_core::Effect;
use bitcrush_effects::{Bitcrusher, HoldMode};
use bitcrush_registry::{BITCRUSHER, ControlBlock, Instance, PortBindings};
use tempfile::TempDir;

#[test]
fn test_save_and_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("crunch.toml");

    let preset = Preset::new("Crunch")
        .with_description("saved by test")
        .with_sample_rate(44100)
        .with_bit_depth(5.0)
        .with_target_rate(7350.0)
        .with_hold_mode(HoldMode::ResetEachBlock);
    preset.save(&path).unwrap();

    let loaded = Preset::load(&path).unwrap();
    assert_eq!(loaded, preset);
}

#[test]
fn test_save_creates_parent_dirs() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("deeper").join("p.toml");
    Preset::new("Nested").save(&path).unwrap();
    assert!(path.exists());
}

#[test]
fn test_load_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = Preset::load(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::ReadFile { .. }));
}

#[test]
fn test_load_malformed_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "name = \nbit_depth = [").unwrap();
    assert!(matches!(
        Preset::load(&path).unwrap_err(),
        ConfigError::TomlParse(_)
    ));
}

#[test]
fn test_find_prefers_factory_then_file() {
    assert_eq!(Preset::find("console").unwrap().name, "Console");

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mine.toml");
    Preset::new("Mine").with_bit_depth(3.0).save(&path).unwrap();
    let found = Preset::find(path.to_str().unwrap()).unwrap();
    assert_eq!(found.bit_depth, 3.0);
}

#[test]
fn test_factory_presets_survive_file_round_trip() {
    let dir = TempDir::new().unwrap();
    for preset in factory_presets() {
        let path = dir.path().join(format!("{}.toml", preset.name));
        preset.save(&path).unwrap();
        assert_eq!(Preset::load(&path).unwrap(), preset);
    }
}

/// A preset applied to the bare effect and the same preset configured on a
/// host instance produce identical output.
#[test]
fn test_effect_and_instance_agree() {
    let input: Vec<f32> = (0..480).map(|i| (i as f32 * 0.05).sin() * 0.7).collect();

    for preset in factory_presets() {
        let rate = preset.sample_rate;

        let mut crusher = Bitcrusher::new(rate as f32);
        preset.apply(&mut crusher);
        let mut expected = vec![0.0; input.len()];
        for (i, o) in input.chunks(32).zip(expected.chunks_mut(32)) {
            crusher.process_block(i, o);
        }

        let mut instance = Instance::new(&BITCRUSHER, rate).unwrap();
        let controls = ControlBlock::for_descriptor(&BITCRUSHER, rate);
        preset.configure(&mut instance, &controls);
        instance.activate();

        let mut got = vec![0.0; input.len()];
        let mut bindings = PortBindings::new(&[], &mut [], &controls);
        for (i, o) in input.chunks(32).zip(got.chunks_mut(32)) {
            let len = i.len();
            bindings.rebind_input(i);
            bindings.rebind_output(o);
            instance.run(&mut bindings, len).unwrap();
        }

        assert_eq!(expected, got, "preset {}", preset.name);
    }
}

#[test]
fn test_grit_audibly_crushes() {
    let preset = get_factory_preset("grit").unwrap();
    let mut crusher = Bitcrusher::new(preset.sample_rate as f32);
    preset.apply(&mut crusher);

    let input: Vec<f32> = (0..64).map(|i| i as f32 / 64.0).collect();
    let mut out = vec![0.0; 64];
    crusher.process_block(&input, &mut out);
    let distinct = out.windows(2).filter(|w| w[0] != w[1]).count();
    // 48 kHz -> 6 kHz holds each value for 8 samples.
    assert!(distinct <= 8, "distinct={distinct}");
}
