//! Core data types for the Morse timing engine

use crate::hal::Duration;

/// Morse code pulses
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pulse {
    /// Short pulse: on 1 unit, off 1 unit
    Dot,
    /// Long pulse: on 3 units, off 1 unit
    Dash,
}

impl Pulse {
    /// Units the output stays on
    pub const fn on_units(&self) -> u32 {
        match self {
            Pulse::Dot => 1,
            Pulse::Dash => 3,
        }
    }

    /// Units of the trailing off-gap, shared by both pulses
    pub const fn off_units(&self) -> u32 {
        1
    }

    /// Total units including the trailing off-gap
    pub const fn duration_units(&self) -> u32 {
        self.on_units() + self.off_units()
    }
}

/// Pause selected after each character of a message
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Boundary {
    /// The character was a space
    EndOfWord,
    /// Any other character
    Continuation,
}

impl Boundary {
    /// Extra units waited after the character.
    ///
    /// The last pulse already ends with a 1-unit gap, so these give the
    /// 3-unit letter gap and the 7-unit word gap.
    pub const fn pause_units(&self) -> u32 {
        match self {
            Boundary::EndOfWord => 6,
            Boundary::Continuation => 2,
        }
    }
}

/// One scheduled action of a message pass
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Step {
    Pulse(Pulse),
    Pause(Boundary),
}

impl Step {
    pub const fn duration_units(&self) -> u32 {
        match self {
            Step::Pulse(pulse) => pulse.duration_units(),
            Step::Pause(boundary) => boundary.pause_units(),
        }
    }

    /// Returns true if this step drives the output on
    pub const fn is_keyed(&self) -> bool {
        matches!(self, Step::Pulse(_))
    }
}

/// Timing configuration
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MorseConfig {
    /// Timer input clock in Hz
    pub clock_hz: u32,
    /// Length of one time unit
    pub unit: Duration,
}

/// MSP432 master clock after reset (DCO at 3 MHz)
pub const DEFAULT_CLOCK_HZ: u32 = 3_000_000;

/// Half a second per unit
pub const DEFAULT_UNIT_MS: u64 = 500;

impl Default for MorseConfig {
    fn default() -> Self {
        Self {
            clock_hz: DEFAULT_CLOCK_HZ,
            unit: Duration::from_millis(DEFAULT_UNIT_MS),
        }
    }
}

impl MorseConfig {
    /// Create a new configuration with validation
    pub fn new(clock_hz: u32, unit: Duration) -> Result<Self, &'static str> {
        Self::for_timer(clock_hz, unit, u32::MAX)
    }

    /// Like [`MorseConfig::new`], for a timer whose reload register holds at most `max_reload`
    pub fn for_timer(clock_hz: u32, unit: Duration, max_reload: u32) -> Result<Self, &'static str> {
        if clock_hz == 0 {
            return Err("Clock frequency must be non-zero");
        }
        if unit.as_millis() == 0 {
            return Err("Unit must be at least 1ms");
        }

        let config = Self { clock_hz, unit };
        let ticks = config.ticks_u64().ok_or("Unit does not fit the timer")?;
        if ticks < 2 {
            return Err("Unit must span at least 2 timer ticks");
        }
        let fits = u32::try_from(ticks).map_or(false, |t| t - 1 <= max_reload);
        if !fits {
            return Err("Unit does not fit the timer");
        }
        Ok(config)
    }

    fn ticks_u64(&self) -> Option<u64> {
        u64::from(self.clock_hz)
            .checked_mul(self.unit.as_millis())
            .map(|t| t / 1000)
    }

    /// Timer ticks in one unit
    pub fn unit_ticks(&self) -> u32 {
        self.ticks_u64()
            .map_or(u32::MAX, |t| t.min(u64::from(u32::MAX)) as u32)
    }

    /// Value to load into the reload register for one unit.
    ///
    /// The completion flag fires on the 1 -> 0 count, one tick after the
    /// reload value is reached, hence the minus one.
    pub fn reload_value(&self) -> u32 {
        self.unit_ticks().saturating_sub(1)
    }

    /// Wall-clock length of `units` units, saturating at `u64::MAX` ms
    pub fn units_to_duration(&self, units: u32) -> Duration {
        Duration::from_millis(self.unit.as_millis().saturating_mul(u64::from(units)))
    }
}
