//! File-based processing command.

use crate::wav::{read_wav, write_wav};
use anyhow::{Context, bail};
use bitcrush_config::Preset;
use bitcrush_effects::HoldMode;
use bitcrush_registry::{ControlBlock, EffectRegistry, PortBindings};
use clap::{Args, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

#[derive(Args)]
pub struct ProcessArgs {
    /// Input WAV file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output WAV file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Bit depth (0 disables quantization)
    #[arg(short, long)]
    bits: Option<f32>,

    /// Target sample rate in Hz
    #[arg(short, long)]
    rate: Option<f32>,

    /// Factory preset name or preset file (TOML)
    #[arg(short, long)]
    preset: Option<String>,

    /// Whether the hold survives block boundaries
    #[arg(long, value_enum)]
    hold_mode: Option<HoldModeArg>,

    /// Processing block size
    #[arg(long, default_value = "512")]
    block_size: usize,

    /// Output bit depth (16, 24, or 32)
    #[arg(long, default_value = "32", value_parser = parse_output_bits)]
    output_bits: u16,
}

#[derive(Clone, Copy, ValueEnum)]
enum HoldModeArg {
    /// Hold state persists across blocks
    Continuous,
    /// Hold restarts at every block
    ResetEachBlock,
}

impl From<HoldModeArg> for HoldMode {
    fn from(arg: HoldModeArg) -> Self {
        match arg {
            HoldModeArg::Continuous => HoldMode::Continuous,
            HoldModeArg::ResetEachBlock => HoldMode::ResetEachBlock,
        }
    }
}

fn parse_output_bits(s: &str) -> Result<u16, String> {
    match s.parse::<u16>() {
        Ok(bits @ (16 | 24 | 32)) => Ok(bits),
        _ => Err(format!("unsupported output bit depth '{s}' (expected 16, 24, or 32)")),
    }
}

/// Preset from `--preset`, with command-line overrides layered on top.
fn build_preset(args: &ProcessArgs, sample_rate: u32) -> anyhow::Result<Preset> {
    let mut preset = match &args.preset {
        Some(name) => {
            let preset = Preset::find(name).with_context(|| format!("loading preset '{name}'"))?;
            println!("Loading preset: {}", preset.name);
            if preset.sample_rate != sample_rate {
                tracing::debug!(
                    preset_rate = preset.sample_rate,
                    file_rate = sample_rate,
                    "processing at the input file's rate"
                );
            }
            // Defaults and validation follow the rate actually processed.
            preset.with_sample_rate(sample_rate)
        }
        None => Preset::new("Command line").with_sample_rate(sample_rate),
    };

    if let Some(bits) = args.bits {
        preset.bit_depth = bits;
    }
    if let Some(rate) = args.rate {
        preset.target_rate = Some(rate);
    }
    if let Some(mode) = args.hold_mode {
        preset.hold_mode = mode.into();
    }

    // Ranges are advisory: report, then process anyway.
    if let Err(e) = preset.validate() {
        tracing::warn!("{e}");
    }
    Ok(preset)
}

pub fn run(args: ProcessArgs) -> anyhow::Result<()> {
    if args.block_size == 0 {
        bail!("block size must be at least 1");
    }

    println!("Reading {}...", args.input.display());
    let (samples, spec) = read_wav(&args.input)?;
    println!(
        "  {} samples, {} Hz, {:.2}s",
        samples.len(),
        spec.sample_rate,
        samples.len() as f32 / spec.sample_rate.max(1) as f32
    );

    let preset = build_preset(&args, spec.sample_rate)?;

    let registry = EffectRegistry::new();
    let mut instance = registry
        .instantiate("bitcrusher", spec.sample_rate)
        .context("creating bitcrusher instance")?;
    let controls = ControlBlock::for_descriptor(instance.descriptor(), spec.sample_rate);
    preset.configure(&mut instance, &controls);
    instance.activate();

    tracing::info!(
        bits = preset.bit_depth,
        target_rate = preset.target_rate_hz(),
        hold_mode = preset.hold_mode.name(),
        block_size = args.block_size,
        "processing"
    );

    let pb = ProgressBar::new(samples.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("##-"),
    );

    let mut output = vec![0.0; samples.len()];
    let mut bindings = PortBindings::new(&[], &mut [], &controls);
    let mut done = 0usize;
    for (in_chunk, out_chunk) in samples
        .chunks(args.block_size)
        .zip(output.chunks_mut(args.block_size))
    {
        let len = in_chunk.len();
        bindings.rebind_input(in_chunk);
        bindings.rebind_output(out_chunk);
        instance.run(&mut bindings, len)?;
        done += len;
        pb.set_position(done as u64);
    }
    pb.finish_with_message("done");

    println!("\nStats:");
    println!(
        "  Input:  RMS {:.1} dB, Peak {:.1} dB",
        linear_to_db(rms(&samples)),
        linear_to_db(peak(&samples))
    );
    println!(
        "  Output: RMS {:.1} dB, Peak {:.1} dB",
        linear_to_db(rms(&output)),
        linear_to_db(peak(&output))
    );

    println!("\nWriting {}...", args.output.display());
    write_wav(&args.output, &output, spec.sample_rate, args.output_bits)?;
    println!("Done!");

    Ok(())
}

fn rms(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum: f32 = samples.iter().map(|s| s * s).sum();
    (sum / samples.len() as f32).sqrt()
}

fn peak(samples: &[f32]) -> f32 {
    samples.iter().map(|s| s.abs()).fold(0.0, f32::max)
}

fn linear_to_db(linear: f32) -> f32 {
    if linear <= 0.0 {
        -120.0
    } else {
        20.0 * linear.log10()
    }
}
