//! Parameter introspection for discoverable effect controls.
//!
//! This module provides the [`ParameterInfo`] trait and the [`ParamDescriptor`]
//! metadata type. Descriptors describe a control the way a plugin host needs
//! it: display names, advisory bounds, a default, a unit, and hints such as
//! "integer-stepped", "logarithmic", or "bounds are relative to the sample
//! rate".
//!
//! Bounds are **advisory**. They exist for host UIs, preset validation, and
//! command-line listings. Effects in this workspace accept out-of-range values
//! through [`ParameterInfo::set_param`] and sanitize them during coefficient
//! derivation instead of clamping.
//!
//! # Example
//!
//! ```rust
//! use bitcrush_core::{ParamDescriptor, ParamFlags, ParamId, ParamUnit};
//!
//! const RATE: ParamDescriptor = ParamDescriptor::custom("Frequency", "Freq", 0.0, 1.0, 0.5)
//!     .with_unit(ParamUnit::Hertz)
//!     .with_flags(ParamFlags::AUTOMATABLE.union(ParamFlags::SAMPLE_RATE))
//!     .with_id(ParamId(2), "crush_rate");
//!
//! // Sample-rate-relative bounds become absolute once the rate is known.
//! let resolved = RATE.resolve(44100.0);
//! assert_eq!(resolved.max, 44100.0);
//! assert_eq!(resolved.default, 22050.0);
//! ```

#[cfg(not(feature = "std"))]
use alloc::{format, string::String};

/// Suggested control curve for host sliders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParamScale {
    /// Linear mapping (default).
    #[default]
    Linear,
    /// Logarithmic mapping. A display hint only when `min` is zero.
    Logarithmic,
}

/// Stable parameter identifier that survives reordering.
///
/// Once assigned, a `ParamId` must never change for a given parameter:
/// presets and host automation refer to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParamId(pub u32);

/// Parameter capability flags for plugin host communication.
///
/// Use [`union`](Self::union) to combine.
///
/// # Example
///
/// ```rust
/// use bitcrush_core::ParamFlags;
///
/// let flags = ParamFlags::AUTOMATABLE.union(ParamFlags::STEPPED);
/// assert!(flags.contains(ParamFlags::AUTOMATABLE));
/// assert!(flags.contains(ParamFlags::STEPPED));
/// assert!(!flags.contains(ParamFlags::HIDDEN));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamFlags(u8);

impl ParamFlags {
    /// No flags set.
    pub const NONE: Self = Self(0);
    /// Host can automate this parameter.
    pub const AUTOMATABLE: Self = Self(1 << 0);
    /// Parameter takes integer values.
    pub const STEPPED: Self = Self(1 << 1);
    /// Parameter is not exposed as a host port.
    pub const HIDDEN: Self = Self(1 << 2);
    /// `min`, `max`, and `default` are fractions of the sample rate.
    ///
    /// Call [`ParamDescriptor::resolve`] to obtain absolute bounds.
    pub const SAMPLE_RATE: Self = Self(1 << 3);

    /// Returns `true` if all bits in `other` are set in `self`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns the union of two flag sets.
    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns `self` with every bit of `other` cleared.
    #[inline]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }
}

impl Default for ParamFlags {
    fn default() -> Self {
        Self::AUTOMATABLE
    }
}

/// Trait for effects that expose introspectable parameters.
///
/// Parameters are accessed by zero-based index, stable for the lifetime of
/// the effect. Use [`param_count`](Self::param_count) to determine valid
/// indices.
pub trait ParameterInfo {
    /// Returns the number of parameters this effect exposes.
    fn param_count(&self) -> usize;

    /// Returns the descriptor for the parameter at the given index, with
    /// sample-rate-relative bounds already resolved for this instance.
    ///
    /// Returns `None` if `index >= param_count()`.
    fn param_info(&self, index: usize) -> Option<ParamDescriptor>;

    /// Gets the current value of the parameter at the given index.
    ///
    /// Returns `0.0` for out-of-range indices.
    fn get_param(&self, index: usize) -> f32;

    /// Sets the value of the parameter at the given index.
    ///
    /// Out-of-range indices are ignored.
    fn set_param(&mut self, index: usize, value: f32);

    /// Find a parameter index by name (case-insensitive).
    ///
    /// Matches against [`ParamDescriptor::name`], [`ParamDescriptor::short_name`],
    /// and [`ParamDescriptor::string_id`].
    fn find_param_by_name(&self, name: &str) -> Option<usize> {
        (0..self.param_count()).find(|&i| {
            self.param_info(i).is_some_and(|desc| {
                desc.name.eq_ignore_ascii_case(name)
                    || desc.short_name.eq_ignore_ascii_case(name)
                    || desc.string_id.eq_ignore_ascii_case(name)
            })
        })
    }

    /// Finds a parameter index by its stable [`ParamId`].
    ///
    /// Scans all parameters (O(n)); suitable for setup paths, not audio.
    fn param_index_by_id(&self, id: ParamId) -> Option<usize> {
        (0..self.param_count()).find(|&i| self.param_info(i).is_some_and(|d| d.id == id))
    }
}

/// Describes a single parameter's metadata for display and validation.
///
/// All builders are `const fn`, so descriptors can live in `const` and
/// `static` items such as plugin port tables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamDescriptor {
    /// Full parameter name for display (e.g., "Resolution (bits)").
    pub name: &'static str,

    /// Short name for narrow displays, max 8 characters.
    pub short_name: &'static str,

    /// Unit type for formatting the parameter value.
    pub unit: ParamUnit,

    /// Advisory minimum.
    pub min: f32,

    /// Advisory maximum.
    pub max: f32,

    /// Default value when the effect is created.
    pub default: f32,

    /// Recommended step increment for encoder-based control.
    pub step: f32,

    /// Stable numeric ID for automation and preset persistence.
    pub id: ParamId,

    /// Human-readable stable ID (e.g., `"crush_bits"`).
    pub string_id: &'static str,

    /// Normalization curve.
    pub scale: ParamScale,

    /// Capability and hint flags.
    pub flags: ParamFlags,
}

impl ParamDescriptor {
    /// Dimensionless parameter with custom name and range.
    pub const fn custom(
        name: &'static str,
        short_name: &'static str,
        min: f32,
        max: f32,
        default: f32,
    ) -> Self {
        Self {
            name,
            short_name,
            unit: ParamUnit::None,
            min,
            max,
            default,
            step: 0.01,
            id: ParamId(0),
            string_id: "",
            scale: ParamScale::Linear,
            flags: ParamFlags::AUTOMATABLE,
        }
    }

    /// Sets the stable parameter ID and string ID.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bitcrush_core::{ParamDescriptor, ParamId};
    ///
    /// let desc = ParamDescriptor::custom("Depth", "Depth", 0.0, 1.0, 0.5)
    ///     .with_id(ParamId(700), "fx_depth");
    /// assert_eq!(desc.id, ParamId(700));
    /// assert_eq!(desc.string_id, "fx_depth");
    /// ```
    pub const fn with_id(mut self, id: ParamId, string_id: &'static str) -> Self {
        self.id = id;
        self.string_id = string_id;
        self
    }

    /// Sets the display unit.
    pub const fn with_unit(mut self, unit: ParamUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Sets the encoder step size.
    pub const fn with_step(mut self, step: f32) -> Self {
        self.step = step;
        self
    }

    /// Sets the normalization scale.
    pub const fn with_scale(mut self, scale: ParamScale) -> Self {
        self.scale = scale;
        self
    }

    /// Sets the parameter flags.
    pub const fn with_flags(mut self, flags: ParamFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Returns `true` for integer-stepped parameters.
    #[inline]
    pub const fn is_stepped(&self) -> bool {
        self.flags.contains(ParamFlags::STEPPED)
    }

    /// Resolves sample-rate-relative bounds to absolute values.
    ///
    /// Descriptors without [`ParamFlags::SAMPLE_RATE`] are returned unchanged.
    /// The returned descriptor no longer carries the flag.
    #[must_use]
    pub fn resolve(&self, sample_rate: f32) -> Self {
        if !self.flags.contains(ParamFlags::SAMPLE_RATE) {
            return *self;
        }
        Self {
            min: self.min * sample_rate,
            max: self.max * sample_rate,
            default: self.default * sample_rate,
            step: self.step * sample_rate,
            flags: self.flags.difference(ParamFlags::SAMPLE_RATE),
            ..*self
        }
    }

    /// Returns `true` if `value` lies inside the advisory range.
    #[inline]
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Formats a value with this parameter's unit.
    ///
    /// Stepped parameters print without decimals.
    ///
    /// ```rust
    /// use bitcrush_core::{ParamDescriptor, ParamFlags, ParamUnit};
    ///
    /// let bits = ParamDescriptor::custom("Bits", "Bits", 0.0, 32.0, 16.0)
    ///     .with_unit(ParamUnit::Bits)
    ///     .with_flags(ParamFlags::STEPPED);
    /// assert_eq!(bits.format_value(8.0), "8 bits");
    /// ```
    pub fn format_value(&self, value: f32) -> String {
        if self.is_stepped() {
            format!("{:.0}{}", value, self.unit.suffix())
        } else {
            match self.unit {
                ParamUnit::Hertz => format!("{:.0}{}", value, self.unit.suffix()),
                ParamUnit::Bits | ParamUnit::None => {
                    format!("{:.2}{}", value, self.unit.suffix())
                }
            }
        }
    }
}

/// Unit type for parameter display and formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamUnit {
    /// Bits of amplitude resolution.
    Bits,

    /// Hertz (Hz), for sample rates.
    Hertz,

    /// No unit.
    None,
}

impl ParamUnit {
    /// Returns the unit suffix string for display.
    ///
    /// ```rust
    /// use bitcrush_core::ParamUnit;
    ///
    /// assert_eq!(ParamUnit::Hertz.suffix(), " Hz");
    /// assert_eq!(ParamUnit::None.suffix(), "");
    /// ```
    pub const fn suffix(&self) -> &'static str {
        match self {
            ParamUnit::Bits => " bits",
            ParamUnit::Hertz => " Hz",
            ParamUnit::None => "",
        }
    }
}
