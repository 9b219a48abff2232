//! Combined `Effect` + `ParameterInfo` trait for boxed effects.
//!
//! [`EffectWithParams`] gives a `Box<dyn ...>` access to both the processing
//! surface and the parameter surface through a single vtable. A blanket impl
//! covers every concrete type that implements both traits. The plugin
//! registry stores instantiated effects as `Box<dyn EffectWithParams + Send>`.

#[cfg(not(feature = "std"))]
use alloc::string::String;

use crate::effect::Effect;
use crate::param_info::{ParamDescriptor, ParameterInfo};

/// Object-safe view of an effect together with its parameters.
pub trait EffectWithParams: Effect {
    /// Get the parameter count.
    fn effect_param_count(&self) -> usize;

    /// Get parameter info by index.
    fn effect_param_info(&self, index: usize) -> Option<ParamDescriptor>;

    /// Get parameter value by index.
    fn effect_get_param(&self, index: usize) -> f32;

    /// Set parameter value by index.
    fn effect_set_param(&mut self, index: usize, value: f32);

    /// Format a parameter value as display text.
    ///
    /// Returns `None` if the index is out of range.
    fn effect_format_value(&self, index: usize, value: f32) -> Option<String>;
}

impl<T: Effect + ParameterInfo> EffectWithParams for T {
    fn effect_param_count(&self) -> usize {
        self.param_count()
    }

    fn effect_param_info(&self, index: usize) -> Option<ParamDescriptor> {
        self.param_info(index)
    }

    fn effect_get_param(&self, index: usize) -> f32 {
        self.get_param(index)
    }

    fn effect_set_param(&mut self, index: usize, value: f32) {
        self.set_param(index, value)
    }

    fn effect_format_value(&self, index: usize, value: f32) -> Option<String> {
        self.param_info(index).map(|desc| desc.format_value(value))
    }
}
