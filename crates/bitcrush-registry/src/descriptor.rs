//! Immutable plugin and port metadata.
//!
//! A [`PluginDescriptor`] is a `static` value: it describes the plugin's
//! identity, its ports, and how to build the underlying effect. Nothing in
//! it is mutated after program start, so it can be shared freely between
//! threads and instances.

#[cfg(not(feature = "std"))]
use alloc::boxed::Box;

use bitcrush_core::{EffectWithParams, ParamDescriptor};
use bitcrush_effects::{
    BIT_DEPTH_PARAM, Bitcrusher, PARAM_BIT_DEPTH, PARAM_TARGET_RATE, TARGET_RATE_PARAM,
};

/// Factory function type for creating effects at a native sample rate.
pub type EffectFactory = fn(f32) -> Box<dyn EffectWithParams + Send>;

/// Plugin-wide capability flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PluginProperties(u8);

impl PluginProperties {
    /// No properties.
    pub const NONE: Self = Self(0);
    /// The plugin needs real-time scheduling to behave correctly.
    pub const REALTIME: Self = Self(1 << 0);
    /// Input and output buffers must not alias.
    pub const INPLACE_BROKEN: Self = Self(1 << 1);
    /// `run` has bounded latency and never allocates, blocks, or logs.
    pub const HARD_RT_CAPABLE: Self = Self(1 << 2);

    /// Returns `true` if every bit in `other` is set in `self`.
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Returns the union of two property sets.
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

/// Data flow direction of a port, from the plugin's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PortDirection {
    /// Host writes, plugin reads.
    Input,
    /// Plugin writes, host reads.
    Output,
}

/// What a port carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PortKind {
    /// One sample per frame of the block.
    Audio,
    /// One value per block.
    Control,
}

/// Links a control port to an effect parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlHint {
    /// Index into the effect's [`ParameterInfo`](bitcrush_core::ParameterInfo).
    pub param_index: usize,
    /// Advisory range, default, and display hints. Ranges flagged
    /// `SAMPLE_RATE` are fractions of the native rate until
    /// [`resolve`](ParamDescriptor::resolve)d.
    pub descriptor: ParamDescriptor,
}

/// Describes one port.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PortDescriptor {
    /// Display name.
    pub name: &'static str,
    /// Data flow direction.
    pub direction: PortDirection,
    /// Audio or control.
    pub kind: PortKind,
    /// Parameter link; `Some` for control ports only.
    pub hint: Option<ControlHint>,
}

impl PortDescriptor {
    /// An audio port.
    pub const fn audio(name: &'static str, direction: PortDirection) -> Self {
        Self {
            name,
            direction,
            kind: PortKind::Audio,
            hint: None,
        }
    }

    /// A control input port bound to `param_index`.
    pub const fn control(
        name: &'static str,
        param_index: usize,
        descriptor: ParamDescriptor,
    ) -> Self {
        Self {
            name,
            direction: PortDirection::Input,
            kind: PortKind::Control,
            hint: Some(ControlHint {
                param_index,
                descriptor,
            }),
        }
    }

    /// Returns `true` for audio ports.
    pub fn is_audio(&self) -> bool {
        self.kind == PortKind::Audio
    }

    /// Returns `true` for control ports.
    pub fn is_control(&self) -> bool {
        self.kind == PortKind::Control
    }

    /// Hint with sample-rate-relative bounds scaled to `sample_rate`.
    pub fn resolved_hint(&self, sample_rate: f32) -> Option<ParamDescriptor> {
        self.hint.map(|h| h.descriptor.resolve(sample_rate))
    }
}

/// Static description of a plugin.
#[derive(Debug, Clone, Copy)]
pub struct PluginDescriptor {
    /// Globally unique numeric identifier.
    pub unique_id: u32,
    /// Short lookup key (lowercase, no spaces).
    pub label: &'static str,
    /// Human-readable name.
    pub name: &'static str,
    /// Author.
    pub maker: &'static str,
    /// License or copyright notice.
    pub copyright: &'static str,
    /// Capability flags.
    pub properties: PluginProperties,
    /// All ports, in host index order.
    pub ports: &'static [PortDescriptor],
    /// Builds the effect for a new instance.
    pub factory: EffectFactory,
}

impl PluginDescriptor {
    /// Number of ports.
    pub fn port_count(&self) -> usize {
        self.ports.len()
    }

    /// Port by host index.
    pub fn port(&self, index: usize) -> Option<&'static PortDescriptor> {
        self.ports.get(index)
    }

    /// Host index of the first port matching direction and kind.
    pub fn find_port(&self, direction: PortDirection, kind: PortKind) -> Option<usize> {
        self.ports
            .iter()
            .position(|p| p.direction == direction && p.kind == kind)
    }

    /// Control ports in host index order, with their host indices.
    pub fn control_ports(&self) -> impl Iterator<Item = (usize, &'static PortDescriptor)> {
        self.ports.iter().enumerate().filter(|(_, p)| p.is_control())
    }

    /// Number of control ports.
    pub fn control_count(&self) -> usize {
        self.control_ports().count()
    }

    /// Position among the control ports of the port matching `name`.
    ///
    /// Matches the port name, or the linked parameter's short name or
    /// string id, case-insensitively.
    pub fn control_slot(&self, name: &str) -> Option<usize> {
        self.control_ports().position(|(_, p)| {
            p.name.eq_ignore_ascii_case(name)
                || p.hint.is_some_and(|h| {
                    h.descriptor.short_name.eq_ignore_ascii_case(name)
                        || h.descriptor.string_id.eq_ignore_ascii_case(name)
                })
        })
    }

    /// Returns `true` if the plugin declares every property in `props`.
    pub fn has_property(&self, props: PluginProperties) -> bool {
        self.properties.contains(props)
    }
}

/// Host index of the audio input port.
pub const PORT_INPUT: usize = 0;
/// Host index of the audio output port.
pub const PORT_OUTPUT: usize = 1;
/// Host index of the target sample rate control.
pub const PORT_FREQUENCY: usize = 2;
/// Host index of the bit depth control.
pub const PORT_RESOLUTION: usize = 3;

static BITCRUSHER_PORTS: [PortDescriptor; 4] = [
    PortDescriptor::audio("In", PortDirection::Input),
    PortDescriptor::audio("Out", PortDirection::Output),
    PortDescriptor::control("Frequency", PARAM_TARGET_RATE, TARGET_RATE_PARAM),
    PortDescriptor::control("Resolution (bits)", PARAM_BIT_DEPTH, BIT_DEPTH_PARAM),
];

fn create_bitcrusher(sample_rate: f32) -> Box<dyn EffectWithParams + Send> {
    Box::new(Bitcrusher::new(sample_rate))
}

/// Descriptor of the mono bitcrusher.
pub static BITCRUSHER: PluginDescriptor = PluginDescriptor {
    unique_id: 1111,
    label: "bitcrusher",
    name: "Bitcrusher",
    maker: "Siddha Mavuram",
    copyright: "unlicensed",
    properties: PluginProperties::HARD_RT_CAPABLE,
    ports: &BITCRUSHER_PORTS,
    factory: create_bitcrusher,
};
