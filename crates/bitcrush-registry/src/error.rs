//! Host-side error types.

#[cfg(not(feature = "std"))]
use alloc::string::String;

use thiserror::Error;

/// Errors raised by the host layer.
///
/// The processing math itself never fails; these cover instance creation
/// and invalid buffer bindings, and are always returned before any state
/// is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// The native sample rate must be a positive integer.
    #[error("invalid sample rate: {0} Hz")]
    InvalidSampleRate(u32),

    /// No plugin is registered under this label.
    #[error("unknown plugin: {0}")]
    UnknownPlugin(String),

    /// The requested block is longer than a bound buffer.
    #[error(
        "block of {requested} samples exceeds bound buffers (input {input}, output {output})"
    )]
    BlockTooLong {
        /// Samples requested by the host.
        requested: usize,
        /// Length of the bound input view.
        input: usize,
        /// Length of the bound output view.
        output: usize,
    },

    /// The control block was not built for this plugin.
    #[error("control block has {actual} ports, plugin expects {expected}")]
    ControlCountMismatch {
        /// Control ports declared by the descriptor.
        expected: usize,
        /// Control ports in the bound block.
        actual: usize,
    },
}

impl HostError {
    /// Create an unknown plugin error.
    pub fn unknown_plugin(label: impl Into<String>) -> Self {
        Self::UnknownPlugin(label.into())
    }
}
