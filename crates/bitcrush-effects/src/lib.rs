//! Bitcrush Effects - the bitcrusher built on bitcrush-core
//!
//! - [`Bitcrusher`] - Bit depth quantization plus zero-order-hold sample
//!   rate reduction, with host-visible parameters
//! - [`HoldMode`] - Whether the hold state survives block boundaries
//!
//! ## Example
//!
//! ```rust
//! use bitcrush_core::{Effect, ParameterInfo};
//! use bitcrush_effects::{Bitcrusher, PARAM_BIT_DEPTH};
//!
//! let mut crusher = Bitcrusher::new(48000.0);
//! crusher.set_param(PARAM_BIT_DEPTH, 6.0);
//! crusher.set_target_rate(8000.0);
//!
//! let mut buffer = [0.25f32; 64];
//! crusher.process_block_inplace(&mut buffer);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod bitcrusher;

pub use bitcrusher::{
    BIT_DEPTH_PARAM, Bitcrusher, HOLD_MODE_PARAM, HoldMode, PARAM_BIT_DEPTH, PARAM_HOLD_MODE,
    PARAM_TARGET_RATE, TARGET_RATE_PARAM,
};
