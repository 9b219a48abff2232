//! Borrowed views of host-owned buffers.

use crate::control::ControlBlock;

/// Audio and control storage bound to an instance for processing.
///
/// All three views are borrowed from the host for `'a`; the compiler
/// guarantees the storage outlives every `run` that uses it. Audio views
/// may be swapped between blocks with [`rebind_input`](Self::rebind_input)
/// and [`rebind_output`](Self::rebind_output).
#[derive(Debug)]
pub struct PortBindings<'a> {
    input: &'a [f32],
    output: &'a mut [f32],
    controls: &'a ControlBlock,
}

impl<'a> PortBindings<'a> {
    /// Bind input, output, and control storage.
    pub fn new(input: &'a [f32], output: &'a mut [f32], controls: &'a ControlBlock) -> Self {
        Self {
            input,
            output,
            controls,
        }
    }

    /// Replace the audio input view.
    pub fn rebind_input(&mut self, input: &'a [f32]) {
        self.input = input;
    }

    /// Replace the audio output view.
    pub fn rebind_output(&mut self, output: &'a mut [f32]) {
        self.output = output;
    }

    /// Bound input samples.
    pub fn input(&self) -> &[f32] {
        self.input
    }

    /// Bound output samples.
    pub fn output(&self) -> &[f32] {
        self.output
    }

    /// Bound control storage.
    pub fn controls(&self) -> &'a ControlBlock {
        self.controls
    }

    /// Input and output views together, for processing.
    pub(crate) fn audio_mut(&mut self) -> (&[f32], &mut [f32]) {
        (self.input, &mut *self.output)
    }
}
