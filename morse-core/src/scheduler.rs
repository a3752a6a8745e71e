//! Message scheduling: characters to pulses and pauses

use crate::emitter::PulseEmitter;
use crate::hal::{HalError, MorseHal};
use crate::table::{classify, Glyph};
use crate::types::{Boundary, MorseConfig, Pulse, Step};
use crate::timer::UnitTimer;

/// Sends whole messages through a [`PulseEmitter`]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MessageScheduler {
    emitter: PulseEmitter,
}

impl MessageScheduler {
    pub fn new(config: &MorseConfig) -> Self {
        Self {
            emitter: PulseEmitter::new(UnitTimer::new(config)),
        }
    }

    /// Send `message` once, blocking until the last pause has elapsed
    pub fn send<H: MorseHal>(&self, hal: &mut H, message: &str) -> Result<(), HalError> {
        #[cfg(feature = "defmt")]
        defmt::debug!("sending {=str}", message);

        for step in plan(message) {
            match step {
                Step::Pulse(pulse) => self.emitter.emit(hal, pulse)?,
                Step::Pause(boundary) => self.emitter.pause(hal, boundary.pause_units())?,
            }
        }
        Ok(())
    }
}

const NO_PULSES: &[Pulse] = &[];

/// Steps of one pass over `message`
pub fn plan(message: &str) -> Plan<'_> {
    Plan {
        chars: message.chars(),
        pulses: NO_PULSES.iter(),
        pending: None,
    }
}

/// Units one pass over `message` takes
pub fn duration_units(message: &str) -> u32 {
    plan(message).map(|step| step.duration_units()).sum()
}

/// Lazy step sequence for one message
#[derive(Clone, Debug)]
pub struct Plan<'a> {
    chars: core::str::Chars<'a>,
    pulses: core::slice::Iter<'static, Pulse>,
    pending: Option<Boundary>,
}

impl Iterator for Plan<'_> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if let Some(pulse) = self.pulses.next() {
            return Some(Step::Pulse(*pulse));
        }
        if let Some(boundary) = self.pending.take() {
            return Some(Step::Pause(boundary));
        }

        // Pause choice depends only on the current character, the last
        // character of the message gets its pause too
        let c = self.chars.next()?;
        let boundary = match classify(c) {
            Glyph::Code(code) => {
                self.pulses = code.pulses().iter();
                Boundary::Continuation
            }
            Glyph::WordBreak => Boundary::EndOfWord,
            Glyph::Unknown => {
                #[cfg(feature = "defmt")]
                defmt::warn!("skipping unsupported character {}", c);
                Boundary::Continuation
            }
        };
        self.pending = Some(boundary);
        self.next()
    }
}
