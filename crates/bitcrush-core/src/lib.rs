//! Bitcrush Core - quantization and sample-and-hold primitives
//!
//! This crate provides the numerical heart of the bitcrusher, designed for
//! real-time audio processing with zero allocation in the audio path.
//!
//! # Core Abstractions
//!
//! ## Effect System
//!
//! - [`Effect`] - Object-safe trait for mono audio effects
//! - [`EffectWithParams`] - `Effect` + [`ParameterInfo`] through one vtable
//!
//! ## Parameters
//!
//! - [`ParamDescriptor`] - Advisory bounds, units, and host hints
//! - [`ParameterInfo`] - Index-based parameter access
//!
//! ## Crushing
//!
//! - [`CrushCoefficients`] - Step, level count, and decimation ratio derived
//!   from bit depth and target sample rate
//! - [`quantize`] - Sign-aware fold onto the step grid
//! - [`Decimator`] - Zero-order hold with a persistent fractional accumulator
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the default `std` feature:
//!
//! ```toml
//! [dependencies]
//! bitcrush-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Example
//!
//! ```rust
//! use bitcrush_core::{CrushCoefficients, Decimator};
//!
//! let coeffs = CrushCoefficients::derive(32.0, 22050.0, 44100.0);
//! let mut decimator = Decimator::new();
//!
//! let input = [0.1, 0.2, 0.3, 0.4];
//! let mut output = [0.0; 4];
//! decimator.process_block(&input, &mut output, &coeffs);
//! assert_eq!(output, [0.1, 0.1, 0.3, 0.3]);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod coefficients;
pub mod decimator;
pub mod effect;
pub mod effect_with_params;
pub mod param_info;
pub mod quantize;

pub use coefficients::{
    CrushCoefficients, MIN_RATIO, STEP_BIAS, decimation_ratio, max_level, quantization_step,
};
pub use decimator::Decimator;
pub use effect::Effect;
pub use effect_with_params::EffectWithParams;
pub use param_info::{ParamDescriptor, ParamFlags, ParamId, ParamScale, ParamUnit, ParameterInfo};
pub use quantize::quantize;
