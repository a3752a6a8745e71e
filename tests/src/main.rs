// Prints the simulated LED timeline of the beacon message

use morse_core::{default_config, duration_units};
use morse_tests::{simulate, spell};

const MESSAGE: &str = "SOS";

fn main() {
    let config = default_config();
    println!("📡 Morse trace for {MESSAGE:?}");
    println!(
        "   unit {}ms = {} ticks (reload {})",
        config.unit.as_millis(),
        config.unit_ticks(),
        config.reload_value()
    );

    for c in MESSAGE.chars() {
        match spell(c) {
            Some(code) => println!("   {c} {code}"),
            None if c == ' ' => println!("   word break"),
            None => println!("   {c:?} skipped"),
        }
    }

    let board = match simulate(&config, MESSAGE) {
        Ok(board) => board,
        Err(e) => {
            eprintln!("❌ simulation failed: {e}");
            std::process::exit(1);
        }
    };

    println!("   {}", board.render(config.unit_ticks()));
    println!(
        "✅ {} pulses, {} units, {}ms per pass",
        board.pulse_count(),
        duration_units(MESSAGE),
        config.units_to_duration(duration_units(MESSAGE)).as_millis()
    );
}
