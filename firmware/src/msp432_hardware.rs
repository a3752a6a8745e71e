//! MSP432P401R specific hardware implementations
//!
//! SysTick as the unit countdown, port 2 pins as the signal output and the
//! WDT_A hold used before the beacon loop starts.

use core::convert::Infallible;

use cortex_m::peripheral::syst::SystClkSource;
use cortex_m::peripheral::SYST;
use embedded_hal::digital::{ErrorType, OutputPin};
use morse_core::hal::{CountdownTimer, HalError};

/// WDT_A base address and control register offset
const WDT_A_BASE: u32 = 0x4000_4800;
const WDT_A_CTL: u32 = 0x0C;

/// Watchdog password and hold bit
const WDT_A_CTL_PW: u16 = 0x5A00;
const WDT_A_CTL_HOLD: u16 = 0x0080;

/// Digital I/O port A; P2 registers are the odd bytes
const PA_BASE: u32 = 0x4000_4C00;
const P2_OUT: u32 = 0x03;
const P2_DIR: u32 = 0x05;
const P2_SEL0: u32 = 0x0B;
const P2_SEL1: u32 = 0x0D;

/// LaunchPad RGB LED, blue channel
pub const BLUE_LED_PIN: u8 = 2;

/// SysTick reload register is 24 bits wide
pub const SYSTICK_MAX_RELOAD: u32 = 0x00FF_FFFF;

/// Stop the watchdog so the busy-wait loop is not reset
pub fn hold_watchdog() {
    unsafe {
        core::ptr::write_volatile(
            (WDT_A_BASE + WDT_A_CTL) as *mut u16,
            WDT_A_CTL_PW | WDT_A_CTL_HOLD,
        );
    }

    #[cfg(feature = "defmt")]
    defmt::info!("Watchdog held");
}

/// SysTick used as a single-shot countdown
pub struct SysTickCountdown {
    syst: SYST,
}

impl SysTickCountdown {
    /// Take over SysTick, clocked from the processor clock
    pub fn new(mut syst: SYST) -> Self {
        syst.disable_counter();
        syst.disable_interrupt();
        syst.set_clock_source(SystClkSource::Core);
        Self { syst }
    }
}

impl CountdownTimer for SysTickCountdown {
    type Error = HalError;

    const MAX_RELOAD: u32 = SYSTICK_MAX_RELOAD;

    fn arm_timer(&mut self, reload: u32) -> Result<(), Self::Error> {
        if reload > Self::MAX_RELOAD {
            return Err(HalError::InvalidConfig);
        }
        self.syst.set_reload(reload);
        // Any write clears the count and COUNTFLAG, forcing a reload
        self.syst.clear_current();
        self.syst.enable_counter();
        Ok(())
    }

    fn poll_complete(&mut self) -> Result<bool, Self::Error> {
        if !self.syst.is_counter_enabled() {
            return Err(HalError::NotInitialized);
        }
        // COUNTFLAG, cleared by this read
        Ok(self.syst.has_wrapped())
    }

    fn disable_timer(&mut self) -> Result<(), Self::Error> {
        self.syst.disable_counter();
        Ok(())
    }
}

/// Port 2 pin configured as a plain GPIO output
pub struct Port2Output {
    mask: u8,
}

impl Port2Output {
    /// Select the GPIO function, make the pin an output and drive it low
    pub fn new(pin: u8) -> Self {
        let mask = 1 << (pin & 0x07);
        modify(P2_SEL0, |v| v & !mask);
        modify(P2_SEL1, |v| v & !mask);
        modify(P2_DIR, |v| v | mask);
        modify(P2_OUT, |v| v & !mask);

        #[cfg(feature = "defmt")]
        defmt::info!("P2.{} configured as output", pin);

        Self { mask }
    }
}

impl ErrorType for Port2Output {
    type Error = Infallible;
}

impl OutputPin for Port2Output {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        let mask = self.mask;
        modify(P2_OUT, |v| v & !mask);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        let mask = self.mask;
        modify(P2_OUT, |v| v | mask);
        Ok(())
    }
}

/// Read-modify-write of one 8-bit port register
fn modify(offset: u32, f: impl FnOnce(u8) -> u8) {
    let reg = (PA_BASE + offset) as *mut u8;
    unsafe {
        let value = core::ptr::read_volatile(reg);
        core::ptr::write_volatile(reg, f(value));
    }
}
