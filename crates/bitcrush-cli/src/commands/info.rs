//! Plugin descriptor listing.

#![allow(clippy::print_literal)] // Table headers use literal strings intentionally

use bitcrush_effects::HoldMode;
use bitcrush_registry::{
    EffectRegistry, PluginDescriptor, PluginProperties, PortDirection, PortKind,
};
use clap::Args;

#[derive(Args)]
pub struct InfoArgs {
    /// Sample rate used to resolve rate-relative port ranges
    #[arg(long, default_value = "44100")]
    sample_rate: u32,
}

pub fn run(args: &InfoArgs) -> anyhow::Result<()> {
    let registry = EffectRegistry::new();
    for descriptor in registry.all_plugins() {
        print_descriptor(descriptor, args.sample_rate);
    }
    Ok(())
}

fn print_descriptor(d: &PluginDescriptor, sample_rate: u32) {
    println!("{}", d.name);
    println!("{}", "=".repeat(d.name.len()));
    println!();
    println!("  Label:      {}", d.label);
    println!("  Unique ID:  {}", d.unique_id);
    println!("  Maker:      {}", d.maker);
    println!("  Copyright:  {}", d.copyright);
    if d.has_property(PluginProperties::HARD_RT_CAPABLE) {
        println!("  Properties: hard real-time capable");
    }
    println!();

    println!("Ports (ranges at {sample_rate} Hz):");
    println!();
    println!(
        "  {:5}  {:20}  {:14}  {:24}  {}",
        "Index", "Name", "Kind", "Range", "Default"
    );
    println!(
        "  {:5}  {:20}  {:14}  {:24}  {}",
        "-----", "----", "----", "-----", "-------"
    );

    for (index, port) in d.ports.iter().enumerate() {
        let direction = match port.direction {
            PortDirection::Input => "input",
            PortDirection::Output => "output",
        };
        let kind = match port.kind {
            PortKind::Audio => format!("audio {direction}"),
            PortKind::Control => format!("control {direction}"),
        };
        let (range, default) = match port.resolved_hint(sample_rate as f32) {
            Some(hint) => (
                format!(
                    "{} .. {}",
                    hint.format_value(hint.min),
                    hint.format_value(hint.max)
                ),
                hint.format_value(hint.default),
            ),
            None => ("-".to_string(), "-".to_string()),
        };
        println!(
            "  {:5}  {:20}  {:14}  {:24}  {}",
            index, port.name, kind, range, default
        );
    }

    println!();
    println!(
        "Hold mode: {} (default) or {}, via --hold-mode or presets",
        HoldMode::Continuous.name(),
        HoldMode::ResetEachBlock.name()
    );
    println!();
}
