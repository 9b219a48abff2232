//! A running plugin instance.

#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, vec, vec::Vec};

use bitcrush_core::{Effect, EffectWithParams, ParamDescriptor};

use crate::bindings::PortBindings;
use crate::control::ControlBlock;
use crate::descriptor::PluginDescriptor;
use crate::error::HostError;

/// One plugin instance: an effect plus the host contract around it.
///
/// Lifecycle: [`new`](Self::new), [`activate`](Self::activate), then any
/// number of [`run`](Self::run) calls. Dropping the instance destroys it.
/// `run` takes `&mut self`, so calls on one instance are serialized by
/// construction; separate instances share nothing and are `Send`.
pub struct Instance {
    descriptor: &'static PluginDescriptor,
    sample_rate: u32,
    effect: Box<dyn EffectWithParams + Send>,
    /// Bit pattern of the last value pushed to each control's parameter.
    applied: Vec<Option<u32>>,
}

impl Instance {
    /// Create an instance at `sample_rate` Hz.
    ///
    /// A zero sample rate is rejected and nothing is allocated.
    pub fn new(
        descriptor: &'static PluginDescriptor,
        sample_rate: u32,
    ) -> Result<Self, HostError> {
        if sample_rate == 0 {
            return Err(HostError::InvalidSampleRate(sample_rate));
        }
        let effect = (descriptor.factory)(sample_rate as f32);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            "instantiate: {} ({}) at {} Hz",
            descriptor.label,
            descriptor.unique_id,
            sample_rate
        );
        Ok(Self {
            descriptor,
            sample_rate,
            effect,
            applied: vec![None; descriptor.control_count()],
        })
    }

    /// Reset all processing state. Control values are kept.
    ///
    /// Call before the first `run` and after any discontinuity in the
    /// stream.
    pub fn activate(&mut self) {
        self.effect.reset();
        #[cfg(feature = "tracing")]
        tracing::debug!("activate: {}", self.descriptor.label);
    }

    /// Process `block_length` samples from the bound input to the bound
    /// output.
    ///
    /// Every control port is read once before processing. Bindings are
    /// validated first; on error nothing is read or written.
    pub fn run(
        &mut self,
        bindings: &mut PortBindings<'_>,
        block_length: usize,
    ) -> Result<(), HostError> {
        let controls = bindings.controls();
        if controls.len() != self.applied.len() {
            return Err(HostError::ControlCountMismatch {
                expected: self.applied.len(),
                actual: controls.len(),
            });
        }
        let (input, output) = bindings.audio_mut();
        if block_length > input.len() || block_length > output.len() {
            return Err(HostError::BlockTooLong {
                requested: block_length,
                input: input.len(),
                output: output.len(),
            });
        }

        self.apply_controls(controls);
        self.effect
            .process_block(&input[..block_length], &mut output[..block_length]);
        Ok(())
    }

    fn apply_controls(&mut self, controls: &ControlBlock) {
        for (slot, (_, port)) in self.descriptor.control_ports().enumerate() {
            let (Some(hint), Some(value)) = (port.hint, controls.get(slot)) else {
                continue;
            };
            let bits = Some(value.to_bits());
            if self.applied[slot] != bits {
                self.effect.effect_set_param(hint.param_index, value);
                self.applied[slot] = bits;
            }
        }
    }

    /// Set an effect parameter directly, including parameters without a
    /// control port.
    ///
    /// Port-backed parameters are overwritten by their port at the next
    /// `run`.
    pub fn set_param(&mut self, index: usize, value: f32) {
        self.effect.effect_set_param(index, value);
        for (slot, (_, port)) in self.descriptor.control_ports().enumerate() {
            if port.hint.is_some_and(|h| h.param_index == index) {
                self.applied[slot] = None;
            }
        }
    }

    /// Current value of an effect parameter.
    pub fn param(&self, index: usize) -> f32 {
        self.effect.effect_get_param(index)
    }

    /// Descriptor of an effect parameter.
    pub fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
        self.effect.effect_param_info(index)
    }

    /// Number of effect parameters.
    pub fn param_count(&self) -> usize {
        self.effect.effect_param_count()
    }

    /// The descriptor this instance was created from.
    pub fn descriptor(&self) -> &'static PluginDescriptor {
        self.descriptor
    }

    /// Native sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }
}

impl core::fmt::Debug for Instance {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Instance")
            .field("label", &self.descriptor.label)
            .field("sample_rate", &self.sample_rate)
            .finish_non_exhaustive()
    }
}
