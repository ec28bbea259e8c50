//! Headless display: accepts frames without rendering them.

use crate::soc::devices::Framebuffer;
use crate::soc::traits::DisplaySink;

/// A display sink with no host window.
///
/// Counts frames, keeps a copy of the most recent one, and logs each at `trace` level.
/// The latest frame can be exported with [`Framebuffer::to_ppm`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HeadlessDisplay {
    frames: u64,
    last: Option<Framebuffer>,
}

impl HeadlessDisplay {
    /// Creates a headless display.
    pub const fn new() -> Self {
        Self {
            frames: 0,
            last: None,
        }
    }

    /// Number of frames presented so far.
    pub const fn frames(&self) -> u64 {
        self.frames
    }

    /// Most recently presented frame.
    pub const fn last_frame(&self) -> Option<&Framebuffer> {
        self.last.as_ref()
    }
}

impl DisplaySink for HeadlessDisplay {
    fn present(&mut self, frame: &Framebuffer) {
        self.frames += 1;
        tracing::trace!(frame = self.frames, "headless present");
        match &mut self.last {
            Some(last) => last.clone_from(frame),
            None => self.last = Some(frame.clone()),
        }
    }
}
