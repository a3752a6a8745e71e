//! Blocking unit timer on top of a hardware countdown

use crate::hal::{CountdownTimer, HalError};
use crate::types::MorseConfig;

/// Busy-wait timer measuring whole time units
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct UnitTimer {
    reload: u32,
}

impl UnitTimer {
    pub fn new(config: &MorseConfig) -> Self {
        Self {
            reload: config.reload_value(),
        }
    }

    /// Reload value programmed for every unit
    pub fn reload(&self) -> u32 {
        self.reload
    }

    /// Block until one unit has elapsed.
    ///
    /// The timer is disabled on return, whether the wait completed or a
    /// timer call failed.
    pub fn wait_one_unit<T: CountdownTimer>(&self, timer: &mut T) -> Result<(), HalError> {
        let waited = self.spin(timer);
        let disabled = timer.disable_timer().map_err(Into::into);
        waited.and(disabled)
    }

    /// Block for `units` consecutive units
    pub fn wait_units<T: CountdownTimer>(&self, timer: &mut T, units: u32) -> Result<(), HalError> {
        for _ in 0..units {
            self.wait_one_unit(timer)?;
        }
        Ok(())
    }

    fn spin<T: CountdownTimer>(&self, timer: &mut T) -> Result<(), HalError> {
        timer.arm_timer(self.reload).map_err(Into::into)?;
        while !timer.poll_complete().map_err(Into::into)? {}
        Ok(())
    }
}
