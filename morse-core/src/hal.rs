//! Hardware Abstraction Layer for the Morse timing engine

// Re-export the duration type based on feature
#[cfg(feature = "embassy-time")]
pub use embassy_time::Duration;

#[cfg(not(feature = "embassy-time"))]
pub use self::mock_time::Duration;

#[cfg(not(feature = "embassy-time"))]
mod mock_time {
    /// Millisecond duration for builds without embassy-time
    #[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
    pub struct Duration(u64);

    impl Duration {
        pub const fn from_millis(ms: u64) -> Self {
            Self(ms)
        }

        pub const fn from_secs(secs: u64) -> Self {
            Self(secs * 1000)
        }

        pub const fn as_millis(&self) -> u64 {
            self.0
        }
    }

    impl core::ops::Mul<u32> for Duration {
        type Output = Duration;

        fn mul(self, rhs: u32) -> Duration {
            Duration(self.0 * rhs as u64)
        }
    }
}

use embedded_hal::digital::OutputPin;

/// Error types for HAL operations
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HalError {
    /// GPIO operation failed
    GpioError,
    /// Timing operation failed
    TimingError,
    /// Timer polled while not armed
    NotInitialized,
    /// Invalid configuration
    InvalidConfig,
}

#[cfg(feature = "std")]
impl core::fmt::Display for HalError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            HalError::GpioError => write!(f, "GPIO operation failed"),
            HalError::TimingError => write!(f, "Timing operation failed"),
            HalError::NotInitialized => write!(f, "Timer not armed"),
            HalError::InvalidConfig => write!(f, "Invalid configuration"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for HalError {}

/// Free-running hardware countdown timer
///
/// The completion flag is raised once, when the count goes from 1 to 0.
/// An armed timer therefore takes `reload + 1` ticks to complete.
pub trait CountdownTimer {
    type Error: Into<HalError>;

    /// Largest value the reload register holds
    const MAX_RELOAD: u32 = u32::MAX;

    /// Load `reload`, clear the current count and enable the counter
    fn arm_timer(&mut self, reload: u32) -> Result<(), Self::Error>;

    /// Returns true once the count has reached zero since arming
    fn poll_complete(&mut self) -> Result<bool, Self::Error>;

    /// Stop the counter
    fn disable_timer(&mut self) -> Result<(), Self::Error>;
}

/// Binary signal output (LED, key line)
pub trait SignalOutput {
    type Error: Into<HalError>;

    /// Set output state (true = on)
    fn set_output(&mut self, on: bool) -> Result<(), Self::Error>;

    /// Get current output state
    fn get_output(&self) -> Result<bool, Self::Error>;
}

/// Single owned handle to the timer and the output
pub trait MorseHal {
    type Timer: CountdownTimer;
    type Output: SignalOutput;

    /// Access to the countdown timer
    fn timer(&mut self) -> &mut Self::Timer;

    /// Access to the signal output
    fn output(&mut self) -> &mut Self::Output;
}

/// Generic board made of one timer and one output
#[derive(Debug)]
pub struct MorseBoard<T, O> {
    pub timer: T,
    pub output: O,
}

impl<T, O> MorseBoard<T, O>
where
    T: CountdownTimer,
    O: SignalOutput,
{
    pub fn new(timer: T, output: O) -> Self {
        Self { timer, output }
    }

    /// Give back the timer and the output
    pub fn release(self) -> (T, O) {
        (self.timer, self.output)
    }
}

impl<T, O> MorseHal for MorseBoard<T, O>
where
    T: CountdownTimer,
    O: SignalOutput,
{
    type Timer = T;
    type Output = O;

    fn timer(&mut self) -> &mut T {
        &mut self.timer
    }

    fn output(&mut self) -> &mut O {
        &mut self.output
    }
}

/// Generic implementation for embedded-hal compatible output pins
pub struct EmbeddedHalOutput<P> {
    pin: P,
    active_low: bool,
    state: bool,
}

impl<P> EmbeddedHalOutput<P>
where
    P: OutputPin,
{
    /// Wrap `pin`; the output starts in the off state
    pub fn new(pin: P, active_low: bool) -> Self {
        Self {
            pin,
            active_low,
            state: false,
        }
    }

    pub fn release(self) -> P {
        self.pin
    }
}

impl<P> SignalOutput for EmbeddedHalOutput<P>
where
    P: OutputPin,
{
    type Error = HalError;

    fn set_output(&mut self, on: bool) -> Result<(), Self::Error> {
        let level = if self.active_low { !on } else { on };
        if level {
            self.pin.set_high().map_err(|_| HalError::GpioError)?;
        } else {
            self.pin.set_low().map_err(|_| HalError::GpioError)?;
        }
        self.state = on;
        Ok(())
    }

    fn get_output(&self) -> Result<bool, Self::Error> {
        // Last state written; embedded-hal has no read-back for plain output pins
        Ok(self.state)
    }
}

#[cfg(any(test, feature = "test-utils"))]
pub mod mock {
    //! Mock implementations for testing

    use super::*;
    use heapless::Vec;

    /// Countdown timer that advances a fixed number of ticks per poll
    #[derive(Debug)]
    pub struct MockCountdown {
        enabled: bool,
        remaining: u64,
        step: u64,
        pub last_reload: Option<u32>,
        pub arm_count: u32,
        pub disable_count: u32,
        pub poll_count: u64,
        pub elapsed_ticks: u64,
        fail_after_polls: Option<u64>,
    }

    impl MockCountdown {
        /// Timer that completes on the first poll after arming
        pub fn new() -> Self {
            Self::with_step(u64::MAX)
        }

        /// Timer that advances `step` ticks on each poll
        pub fn with_step(step: u64) -> Self {
            Self {
                enabled: false,
                remaining: 0,
                step: step.max(1),
                last_reload: None,
                arm_count: 0,
                disable_count: 0,
                poll_count: 0,
                elapsed_ticks: 0,
                fail_after_polls: None,
            }
        }

        /// Make `poll_complete` fail once `polls` polls have happened
        pub fn fail_after(mut self, polls: u64) -> Self {
            self.fail_after_polls = Some(polls);
            self
        }

        pub fn is_enabled(&self) -> bool {
            self.enabled
        }
    }

    impl Default for MockCountdown {
        fn default() -> Self {
            Self::new()
        }
    }

    impl CountdownTimer for MockCountdown {
        type Error = HalError;

        fn arm_timer(&mut self, reload: u32) -> Result<(), Self::Error> {
            self.last_reload = Some(reload);
            self.remaining = u64::from(reload) + 1;
            self.enabled = true;
            self.arm_count += 1;
            Ok(())
        }

        fn poll_complete(&mut self) -> Result<bool, Self::Error> {
            if self.fail_after_polls == Some(self.poll_count) {
                return Err(HalError::TimingError);
            }
            self.poll_count += 1;
            if !self.enabled {
                return Err(HalError::NotInitialized);
            }
            let advance = self.step.min(self.remaining);
            self.remaining -= advance;
            self.elapsed_ticks += advance;
            Ok(self.remaining == 0)
        }

        fn disable_timer(&mut self) -> Result<(), Self::Error> {
            self.enabled = false;
            self.disable_count += 1;
            Ok(())
        }
    }

    /// Number of writes [`MockOutput`] records
    pub const HISTORY_CAPACITY: usize = 64;

    /// Output that keeps the sequence of written states
    #[derive(Debug, Default)]
    pub struct MockOutput {
        state: bool,
        history: Vec<bool, HISTORY_CAPACITY>,
        writes: usize,
    }

    impl MockOutput {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn is_on(&self) -> bool {
            self.state
        }

        /// The first [`HISTORY_CAPACITY`] states written.
        ///
        /// Later writes still update [`MockOutput::is_on`] but are not
        /// recorded; compare with [`MockOutput::write_count`] to detect a
        /// truncated history.
        pub fn history(&self) -> &[bool] {
            &self.history
        }

        /// Total number of writes, recorded or not
        pub fn write_count(&self) -> usize {
            self.writes
        }

        pub fn is_truncated(&self) -> bool {
            self.writes > self.history.len()
        }
    }

    impl SignalOutput for MockOutput {
        type Error = HalError;

        fn set_output(&mut self, on: bool) -> Result<(), Self::Error> {
            self.state = on;
            self.writes += 1;
            // Past capacity only the count and current state are kept
            let _ = self.history.push(on);
            Ok(())
        }

        fn get_output(&self) -> Result<bool, Self::Error> {
            Ok(self.state)
        }
    }

    /// Board made of the two mocks
    pub type MockBoard = MorseBoard<MockCountdown, MockOutput>;

    impl MockBoard {
        pub fn mock() -> Self {
            MorseBoard::new(MockCountdown::new(), MockOutput::new())
        }
    }
}
