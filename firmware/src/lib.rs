#![no_std]

//! Firmware library for the MSP432 Morse beacon

use cortex_m::peripheral::SYST;

pub use morse_core::*;

// Re-export hardware implementations
pub use crate::msp432_hardware::*;

// MSP432 hardware module
pub mod msp432_hardware;

/// Message repeated by the beacon
pub const MESSAGE: &str = "SOS";

/// Timer and LED of the LaunchPad
pub type BeaconBoard = MorseBoard<SysTickCountdown, EmbeddedHalOutput<Port2Output>>;

/// Configure SysTick and the blue LED.
///
/// The watchdog must already be held, see [`hold_watchdog`].
pub fn init_board(syst: SYST) -> BeaconBoard {
    #[cfg(feature = "defmt")]
    defmt::info!("Initializing hardware...");

    let led = EmbeddedHalOutput::new(Port2Output::new(BLUE_LED_PIN), false);
    MorseBoard::new(SysTickCountdown::new(syst), led)
}

/// Timing used on target: 3 MHz MCLK after reset, half-second unit.
///
/// Fails when one unit does not fit the 24-bit SysTick reload register.
pub fn beacon_config() -> Result<MorseConfig, &'static str> {
    let config = MorseConfig::for_timer(
        DEFAULT_CLOCK_HZ,
        Duration::from_millis(DEFAULT_UNIT_MS),
        <SysTickCountdown as CountdownTimer>::MAX_RELOAD,
    )?;
    #[cfg(feature = "defmt")]
    defmt::info!(
        "Unit: {=u64}ms, {=u32} ticks",
        config.unit.as_millis(),
        config.unit_ticks()
    );
    Ok(config)
}
