//! Host-side helpers shared by the integration tests and `morse-trace`

use heapless::String;
use morse_core::test_utils::SimulatedBoard;
use morse_core::{HalError, MessageScheduler, MorseConfig};

#[cfg(test)]
mod scheduler_tests;
#[cfg(test)]
mod table_tests;

/// Send `message` once on a fresh simulated board
pub fn simulate(config: &MorseConfig, message: &str) -> Result<SimulatedBoard, HalError> {
    let mut board = SimulatedBoard::new();
    MessageScheduler::new(config).send(&mut board, message)?;
    Ok(board)
}

/// Dot-dash spelling of a letter or digit, e.g. `"..."` for 'S'
pub fn spell(c: char) -> Option<String<8>> {
    let code = morse_core::symbol_code(c)?;
    let mut text = String::new();
    for pulse in code.pulses() {
        let mark = match pulse {
            morse_core::Pulse::Dot => '.',
            morse_core::Pulse::Dash => '-',
        };
        text.push(mark).ok()?;
    }
    Some(text)
}
