//! Display trait for the framebuffer collaborator.
//!
//! Every word store into the pixel window pushes the whole frame to a `DisplaySink`
//! synchronously; the cycle continues when `present` returns.

use crate::soc::devices::Framebuffer;

/// Receiver of full-frame updates.
///
/// Closures taking `&Framebuffer` implement this trait:
///
/// ```
/// use minirv_core::soc::devices::Framebuffer;
/// use minirv_core::soc::traits::DisplaySink;
///
/// let mut frames = 0;
/// let mut sink = |_: &Framebuffer| frames += 1;
/// sink.present(&Framebuffer::new(0x2000_0000));
/// drop(sink);
/// assert_eq!(frames, 1);
/// ```
pub trait DisplaySink {
    /// Renders a snapshot of the whole pixel grid.
    fn present(&mut self, frame: &Framebuffer);
}

impl<F> DisplaySink for F
where
    F: FnMut(&Framebuffer),
{
    fn present(&mut self, frame: &Framebuffer) {
        self(frame);
    }
}
