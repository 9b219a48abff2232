//! Plugin registry and host instance API for the bitcrusher.
//!
//! This crate turns the bitcrusher effect into a host-loadable plugin: a
//! static descriptor table, instance lifecycle, lock-free control ports,
//! and borrowed buffer bindings.
//!
//! # Features
//!
//! - **Plugin Discovery**: Look up descriptors by index, label, or unique id
//! - **Instances**: Create, activate, and run with validated bindings
//! - **Control Ports**: Atomic `f32` cells a UI thread can write while the
//!   audio thread reads
//! - **Bindings**: Input, output, and control views with explicit lifetimes
//!
//! # Example
//!
//! ```rust
//! use bitcrush_registry::{ControlBlock, EffectRegistry, PortBindings};
//!
//! let registry = EffectRegistry::new();
//! let mut instance = registry.instantiate("bitcrusher", 44100).unwrap();
//! instance.activate();
//!
//! let controls = ControlBlock::for_descriptor(instance.descriptor(), 44100);
//! let input = [0.1, 0.2, 0.3, 0.4];
//! let mut output = [0.0; 4];
//! let mut bindings = PortBindings::new(&input, &mut output, &controls);
//! instance.run(&mut bindings, 4).unwrap();
//! ```
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible (it needs `alloc`). Disable the
//! default `std` feature:
//!
//! ```toml
//! [dependencies]
//! bitcrush-registry = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, vec::Vec};

pub mod bindings;
pub mod control;
pub mod descriptor;
pub mod error;
pub mod instance;

pub use bindings::PortBindings;
pub use control::{ControlBlock, ControlPort};
pub use descriptor::{
    BITCRUSHER, ControlHint, EffectFactory, PORT_FREQUENCY, PORT_INPUT, PORT_OUTPUT,
    PORT_RESOLUTION, PluginDescriptor, PluginProperties, PortDescriptor, PortDirection, PortKind,
};
pub use error::HostError;
pub use instance::Instance;

pub use bitcrush_core::EffectWithParams;

/// Registry of all available plugins.
///
/// Built once by [`new`](Self::new) and never mutated afterwards. Index
/// order is stable, matching a plugin library's descriptor enumeration.
pub struct EffectRegistry {
    entries: Vec<&'static PluginDescriptor>,
}

impl Default for EffectRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl EffectRegistry {
    /// Create a new registry with all built-in plugins registered.
    pub fn new() -> Self {
        Self {
            entries: Vec::from([&BITCRUSHER]),
        }
    }

    /// All registered descriptors, in index order.
    pub fn all_plugins(&self) -> impl Iterator<Item = &'static PluginDescriptor> + '_ {
        self.entries.iter().copied()
    }

    /// Descriptor at enumeration `index`.
    pub fn descriptor(&self, index: usize) -> Option<&'static PluginDescriptor> {
        self.entries.get(index).copied()
    }

    /// Descriptor with the given label.
    pub fn get(&self, label: &str) -> Option<&'static PluginDescriptor> {
        self.all_plugins().find(|d| d.label == label)
    }

    /// Descriptor with the given unique id.
    pub fn get_by_id(&self, unique_id: u32) -> Option<&'static PluginDescriptor> {
        self.all_plugins().find(|d| d.unique_id == unique_id)
    }

    /// Create a bare effect by label, without the host contract.
    pub fn create(
        &self,
        label: &str,
        sample_rate: f32,
    ) -> Option<Box<dyn EffectWithParams + Send>> {
        self.get(label).map(|d| (d.factory)(sample_rate))
    }

    /// Create a host instance by label.
    pub fn instantiate(&self, label: &str, sample_rate: u32) -> Result<Instance, HostError> {
        let descriptor = self
            .get(label)
            .ok_or_else(|| HostError::unknown_plugin(label))?;
        Instance::new(descriptor, sample_rate)
    }

    /// Find a parameter index by name for a given plugin.
    ///
    /// Creates a temporary effect to scan parameter descriptors.
    pub fn param_index_by_name(&self, label: &str, param_name: &str) -> Option<usize> {
        let effect = self.create(label, 48000.0)?;
        (0..effect.effect_param_count()).find(|&i| {
            effect.effect_param_info(i).is_some_and(|desc| {
                desc.name.eq_ignore_ascii_case(param_name)
                    || desc.short_name.eq_ignore_ascii_case(param_name)
                    || desc.string_id.eq_ignore_ascii_case(param_name)
            })
        })
    }

    /// Returns the number of registered plugins.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no plugins are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitcrush_core::Effect;

    #[test]
    fn test_registry_creation() {
        let registry = EffectRegistry::new();
        assert_eq!(registry.len(), 1);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_descriptor_by_index() {
        let registry = EffectRegistry::new();
        assert_eq!(registry.descriptor(0).unwrap().label, "bitcrusher");
        assert!(registry.descriptor(1).is_none());
    }

    #[test]
    fn test_get_plugin() {
        let registry = EffectRegistry::new();
        assert_eq!(registry.get("bitcrusher").unwrap().unique_id, 1111);
        assert!(registry.get("nonexistent").is_none());
        assert_eq!(registry.get_by_id(1111).unwrap().name, "Bitcrusher");
        assert!(registry.get_by_id(1).is_none());
    }

    #[test]
    fn test_create_effect() {
        let registry = EffectRegistry::new();
        let mut effect = registry.create("bitcrusher", 48000.0).unwrap();
        assert!(effect.process(0.5).is_finite());
        assert!(registry.create("fuzz", 48000.0).is_none());
    }

    #[test]
    fn test_instantiate() {
        let registry = EffectRegistry::new();
        let instance = registry.instantiate("bitcrusher", 44100).unwrap();
        assert_eq!(instance.sample_rate(), 44100);
        assert_eq!(instance.descriptor().label, "bitcrusher");

        assert_eq!(
            registry.instantiate("fuzz", 44100).unwrap_err(),
            HostError::unknown_plugin("fuzz")
        );
        assert_eq!(
            registry.instantiate("bitcrusher", 0).unwrap_err(),
            HostError::InvalidSampleRate(0)
        );
    }

    #[test]
    fn test_param_index_by_name() {
        let registry = EffectRegistry::new();
        assert_eq!(registry.param_index_by_name("bitcrusher", "bits"), Some(0));
        assert_eq!(registry.param_index_by_name("bitcrusher", "Frequency"), Some(1));
        assert_eq!(registry.param_index_by_name("bitcrusher", "crush_hold"), Some(2));
        assert_eq!(registry.param_index_by_name("bitcrusher", "drive"), None);
        assert_eq!(registry.param_index_by_name("fuzz", "bits"), None);
    }
}
