#![no_std]
#![no_main]

#[cfg(feature = "defmt")]
use defmt::{info, warn};
#[cfg(feature = "defmt")]
use defmt_rtt as _;

// Panic handler
use panic_halt as _;

// Define simple logging macros when defmt is not available
#[cfg(not(feature = "defmt"))]
macro_rules! info {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "defmt"))]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

use cortex_m_rt::entry;

use morse_firmware::*;

/// Main firmware entry point
#[entry]
fn main() -> ! {
    hold_watchdog();

    let core = cortex_m::Peripherals::take().unwrap();
    let mut board = init_board(core.SYST);
    // Halt at boot rather than loop on timer errors
    let config = beacon_config().unwrap();
    let scheduler = MessageScheduler::new(&config);

    info!("Morse beacon ready, sending {=str}", MESSAGE);

    loop {
        if let Err(_error) = scheduler.send(&mut board, MESSAGE) {
            warn!("Pass aborted: {}", _error);
        }
    }
}
