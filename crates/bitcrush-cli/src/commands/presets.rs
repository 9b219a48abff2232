//! Preset listing command.

#![allow(clippy::print_literal)] // Table headers use literal strings intentionally

use anyhow::Context;
use bitcrush_config::{Preset, factory_preset_names, get_factory_preset};
use clap::Args;

#[derive(Args)]
pub struct PresetsArgs {
    /// Factory preset name or preset file to print as TOML
    #[arg(value_name = "NAME")]
    name: Option<String>,
}

pub fn run(args: &PresetsArgs) -> anyhow::Result<()> {
    if let Some(name) = &args.name {
        let preset = Preset::find(name).with_context(|| format!("loading preset '{name}'"))?;
        print!("{}", preset.to_toml()?);
        return Ok(());
    }

    println!("Factory Presets");
    println!("===============");
    println!();
    println!(
        "  {:14}  {:>5}  {:>9}  {:16}  {}",
        "Name", "Bits", "Rate", "Hold", "Description"
    );
    println!(
        "  {:14}  {:>5}  {:>9}  {:16}  {}",
        "----", "----", "----", "----", "-----------"
    );

    for id in factory_preset_names() {
        let Some(preset) = get_factory_preset(id) else {
            continue;
        };
        println!(
            "  {:14}  {:>5}  {:>9}  {:16}  {}",
            id,
            preset.bit_depth,
            preset.target_rate_hz(),
            preset.hold_mode.name(),
            preset.description.as_deref().unwrap_or("")
        );
    }

    println!();
    println!("Usage: bitcrush process input.wav output.wav --preset <NAME>");
    Ok(())
}
