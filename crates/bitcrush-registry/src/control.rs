//! Lock-free control value storage.
//!
//! Each [`ControlPort`] stores an `f32` as its bit pattern in an
//! [`AtomicU32`]. A UI or automation thread calls [`ControlPort::set`], the
//! audio thread reads every port once at the start of each block. Relaxed
//! ordering is enough: each value is independent and only the latest one
//! matters.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use core::sync::atomic::{AtomicU32, Ordering};

use crate::descriptor::PluginDescriptor;

/// One atomically readable and writable control value.
#[derive(Debug)]
pub struct ControlPort(AtomicU32);

impl ControlPort {
    /// Create a port holding `value`.
    pub const fn new(value: f32) -> Self {
        Self(AtomicU32::new(value.to_bits()))
    }

    /// Current value.
    #[inline]
    pub fn get(&self) -> f32 {
        f32::from_bits(self.0.load(Ordering::Relaxed))
    }

    /// Store a new value. Takes effect at the next block.
    #[inline]
    pub fn set(&self, value: f32) {
        self.0.store(value.to_bits(), Ordering::Relaxed);
    }
}

impl Default for ControlPort {
    fn default() -> Self {
        Self::new(0.0)
    }
}

/// Host-owned storage for all control ports of one instance.
///
/// Slots are ordered as the descriptor's control ports appear in host
/// index order.
#[derive(Debug, Default)]
pub struct ControlBlock {
    ports: Vec<ControlPort>,
}

impl ControlBlock {
    /// One slot per control port of `descriptor`, initialized to each
    /// port's default at `sample_rate`.
    pub fn for_descriptor(descriptor: &PluginDescriptor, sample_rate: u32) -> Self {
        let ports = descriptor
            .control_ports()
            .map(|(_, port)| {
                let default = port
                    .resolved_hint(sample_rate as f32)
                    .map_or(0.0, |d| d.default);
                ControlPort::new(default)
            })
            .collect();
        Self { ports }
    }

    /// A block holding exactly `values`, in slot order.
    pub fn from_values(values: &[f32]) -> Self {
        Self {
            ports: values.iter().copied().map(ControlPort::new).collect(),
        }
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.ports.len()
    }

    /// Returns true if the block has no slots.
    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }

    /// Port at `slot`.
    pub fn port(&self, slot: usize) -> Option<&ControlPort> {
        self.ports.get(slot)
    }

    /// Value at `slot`, or `None` if out of range.
    pub fn get(&self, slot: usize) -> Option<f32> {
        self.ports.get(slot).map(ControlPort::get)
    }

    /// Store `value` at `slot`. Returns `false` if the slot does not exist.
    pub fn set(&self, slot: usize, value: f32) -> bool {
        match self.ports.get(slot) {
            Some(port) => {
                port.set(value);
                true
            }
            None => false,
        }
    }

    /// Iterate over current values in slot order.
    pub fn values(&self) -> impl Iterator<Item = f32> + '_ {
        self.ports.iter().map(ControlPort::get)
    }
}
