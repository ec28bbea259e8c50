//! Memory-Mapped IO Devices.
//!
//! This module contains the devices reachable through the store path and the host-side
//! display sinks that receive their output.

/// Headless display sink.
pub mod headless;

/// Memory-mapped pixel framebuffer.
pub mod framebuffer;

pub use framebuffer::Framebuffer;
pub use headless::HeadlessDisplay;
