//! Configuration system for the interpreter.
//!
//! This module defines all configuration structures and enums used to parameterize
//! the interpreter. It provides:
//! 1. **Defaults:** Baseline memory map and execution policy constants.
//! 2. **Structures:** Hierarchical config for general, memory, and execution settings.
//! 3. **Enums:** Branch displacement policy.
//! 4. **Loading:** JSON parsing from strings or files.
//!
//! Every field is optional in JSON; omitted fields take their default.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Default configuration constants.
mod defaults {
    /// Base address of the flat RAM region.
    pub const RAM_BASE: u32 = 0x0000_0000;

    /// Size of the flat RAM region (8 MiB).
    pub const RAM_SIZE: usize = 8 * 1024 * 1024;

    /// Whether RAM rejects accesses that are not naturally aligned.
    pub const ENFORCE_ALIGNMENT: bool = true;
}

/// Errors raised while loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration text is not valid JSON for [`Config`].
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

/// How a branch immediate becomes a PC displacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum BranchDisplacement {
    /// Sign-extend the 16-bit immediate, then shift left by 2.
    ///
    /// Backward branches are representable.
    #[default]
    SignExtended,
    /// Shift the raw zero-extended immediate left by 2.
    ///
    /// Every displacement is non-negative, so backward branches are
    /// unreachable. Kept for bit-exact comparison against traces produced
    /// by interpreters that compute the offset this way.
    #[serde(alias = "Raw")]
    Unextended,
}

/// Which value `beq`/`bne` compare the source register against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum BranchCompare {
    /// Compare against the zero-extended 16-bit immediate operand.
    ///
    /// The same operand the decoder hands every other I-type executor.
    #[default]
    Immediate,
    /// Compare against the value of the register in the second register field.
    ///
    /// The architectural MIPS32 behavior.
    Register,
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use mipsim_core::config::{BranchCompare, BranchDisplacement, Config};
///
/// let json = r#"{
///     "general": { "trace_instructions": true },
///     "memory": { "ram_base": 4096, "ram_size": 65536 },
///     "exec": { "branch_displacement": "Unextended", "branch_compare": "Register" }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.memory.ram_size, 65536);
/// assert!(config.memory.enforce_alignment);
/// assert_eq!(config.exec.branch_displacement, BranchDisplacement::Unextended);
/// assert_eq!(config.exec.branch_compare, BranchCompare::Register);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General interpreter settings
    pub general: GeneralConfig,
    /// Flat RAM configuration
    pub memory: MemoryConfig,
    /// Instruction execution policy
    pub exec: ExecConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Initial program counter: `general.start_pc` if set, otherwise the RAM base.
    pub fn start_pc(&self) -> u32 {
        self.general.start_pc.unwrap_or(self.memory.ram_base)
    }
}

/// General interpreter settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Emit a `trace!` event for every retired instruction.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Initial PC value (defaults to the RAM base).
    #[serde(default)]
    pub start_pc: Option<u32>,
}

/// Flat RAM configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// Base physical address of RAM
    #[serde(default = "MemoryConfig::default_ram_base")]
    pub ram_base: u32,

    /// RAM size in bytes
    #[serde(default = "MemoryConfig::default_ram_size")]
    pub ram_size: usize,

    /// Reject half-word and word accesses that are not naturally aligned
    #[serde(default = "MemoryConfig::default_enforce_alignment")]
    pub enforce_alignment: bool,
}

impl MemoryConfig {
    const fn default_ram_base() -> u32 {
        defaults::RAM_BASE
    }

    const fn default_ram_size() -> usize {
        defaults::RAM_SIZE
    }

    const fn default_enforce_alignment() -> bool {
        defaults::ENFORCE_ALIGNMENT
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            ram_base: defaults::RAM_BASE,
            ram_size: defaults::RAM_SIZE,
            enforce_alignment: defaults::ENFORCE_ALIGNMENT,
        }
    }
}

/// Instruction execution policy.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ExecConfig {
    /// Branch displacement computation
    #[serde(default)]
    pub branch_displacement: BranchDisplacement,

    /// Right-hand operand of `beq`/`bne`
    #[serde(default)]
    pub branch_compare: BranchCompare,
}
