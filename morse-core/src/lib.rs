#![cfg_attr(not(any(test, feature = "std")), no_std)]

//! # Morse Core
//!
//! Morse code timing engine for a single output driven by a busy-wait
//! countdown timer. Every delay is a whole number of time units.

pub mod types;
pub mod table;
pub mod hal;
pub mod timer;
pub mod emitter;
pub mod scheduler;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;


pub use types::*;
pub use table::{classify, symbol_code, supported_chars, Glyph, SymbolCode};
pub use hal::{CountdownTimer, Duration, EmbeddedHalOutput, HalError, MorseBoard, MorseHal, SignalOutput};
pub use timer::UnitTimer;
pub use emitter::PulseEmitter;
pub use scheduler::{duration_units, plan, MessageScheduler, Plan};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default configuration: 3 MHz timer clock, half-second unit
pub fn default_config() -> MorseConfig {
    MorseConfig::default()
}
