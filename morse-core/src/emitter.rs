//! Turns one pulse into timed output on/off

use crate::hal::{HalError, MorseHal, SignalOutput};
use crate::timer::UnitTimer;
use crate::types::Pulse;

/// Drives the output for single pulses
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PulseEmitter {
    unit: UnitTimer,
}

impl PulseEmitter {
    pub fn new(unit: UnitTimer) -> Self {
        Self { unit }
    }

    /// Emit `pulse` including its trailing 1-unit gap; the output is off on return
    pub fn emit<H: MorseHal>(&self, hal: &mut H, pulse: Pulse) -> Result<(), HalError> {
        #[cfg(feature = "defmt")]
        defmt::trace!("pulse {}", pulse);

        set(hal, true)?;
        let on = self.unit.wait_units(hal.timer(), pulse.on_units());
        if let Err(e) = on {
            // Never leave the LED lit on a timer failure
            set(hal, false)?;
            return Err(e);
        }
        set(hal, false)?;
        self.unit.wait_units(hal.timer(), pulse.off_units())
    }

    /// Hold the output off for `units` units
    pub fn pause<H: MorseHal>(&self, hal: &mut H, units: u32) -> Result<(), HalError> {
        self.unit.wait_units(hal.timer(), units)
    }
}

fn set<H: MorseHal>(hal: &mut H, on: bool) -> Result<(), HalError> {
    hal.output().set_output(on).map_err(Into::into)
}
