//! Configuration system for the emulator.
//!
//! This module defines the configuration structures used to parameterize a machine and
//! its run loop. It provides:
//! 1. **Defaults:** Baseline memory size, pixel window, and hang detection threshold.
//! 2. **Structures:** General (run loop) and system (address space) settings.
//! 3. **Loading:** JSON deserialization from strings or files, plus validation.
//!
//! Every field has a default, so `{}` is a valid configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::ConfigError;
use crate::common::constants::{
    DEFAULT_RAM_SIZE, FRAMEBUFFER_BASE, FRAMEBUFFER_WINDOW, HANG_DETECTION_THRESHOLD,
};

/// What the run loop does when a cycle reports a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum ErrorPolicy {
    /// Log the fault and keep running with whatever state resulted.
    #[default]
    Continue,
    /// Stop at the first faulting cycle. Diagnostics such as the missing immediate of
    /// register arithmetic do not count.
    Halt,
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use minirv_core::config::{Config, ErrorPolicy};
///
/// let config = Config::from_json(r#"{
///     "general": { "error_policy": "Halt", "trace_instructions": true },
///     "system": { "ram_size": 65536 }
/// }"#).unwrap();
/// assert_eq!(config.general.error_policy, ErrorPolicy::Halt);
/// assert_eq!(config.system.ram_size, 0x1_0000);
/// assert_eq!(config.system.framebuffer_base, 0x2000_0000);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Run loop and diagnostics settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Address space settings.
    #[serde(default)]
    pub system: SystemConfig,
}

impl Config {
    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed input, or a validation error.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reads, parses, and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as [`Config::from_json`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Checks the address space invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::RamSize`] unless the memory size is a power of two of at least
    /// 4 bytes that fits the 32-bit address space, and [`ConfigError::FramebufferBase`] unless
    /// the pixel window base is aligned to the window size.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ram = self.system.ram_size;
        if !ram.is_power_of_two() || ram < 4 || (ram as u64) > (1u64 << 32) {
            return Err(ConfigError::RamSize(ram));
        }
        if self.system.framebuffer_base % FRAMEBUFFER_WINDOW != 0 {
            return Err(ConfigError::FramebufferBase(self.system.framebuffer_base));
        }
        Ok(())
    }
}

/// General settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log every retired instruction with its disassembly at `trace` level.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Initial program counter.
    #[serde(default)]
    pub start_pc: u32,

    /// Fault handling policy of the run loop.
    #[serde(default)]
    pub error_policy: ErrorPolicy,

    /// Cycles with an unchanged PC before the run loop stops with a hang; `null` disables it.
    #[serde(default = "GeneralConfig::default_hang_threshold")]
    pub hang_threshold: Option<u64>,
}

impl GeneralConfig {
    /// Returns the default hang detection threshold.
    #[allow(clippy::unnecessary_wraps)]
    const fn default_hang_threshold() -> Option<u64> {
        Some(HANG_DETECTION_THRESHOLD)
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            start_pc: 0,
            error_policy: ErrorPolicy::default(),
            hang_threshold: Self::default_hang_threshold(),
        }
    }
}

/// Address space settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemConfig {
    /// Size of general memory in bytes; must be a power of two.
    #[serde(default = "SystemConfig::default_ram_size")]
    pub ram_size: usize,

    /// Base address of the pixel window.
    #[serde(default = "SystemConfig::default_framebuffer_base")]
    pub framebuffer_base: u32,
}

impl SystemConfig {
    const fn default_ram_size() -> usize {
        DEFAULT_RAM_SIZE
    }

    const fn default_framebuffer_base() -> u32 {
        FRAMEBUFFER_BASE
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            ram_size: Self::default_ram_size(),
            framebuffer_base: Self::default_framebuffer_base(),
        }
    }
}
