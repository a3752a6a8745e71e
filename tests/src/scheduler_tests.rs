//! Timing of whole messages on the simulated board

use crate::simulate;
use morse_core::test_utils::SimulatedBoard;
use morse_core::{default_config, duration_units, plan, MessageScheduler, MorseConfig, Step};
use rstest::rstest;

fn unit_ticks() -> u32 {
    default_config().unit_ticks()
}

#[test]
fn test_sos_pulses_and_pauses() {
    let board = simulate(&default_config(), "SOS").unwrap();

    assert_eq!(board.pulse_count(), 9);
    assert_eq!(
        board.runs(unit_ticks()),
        [
            (true, 1), (false, 1), (true, 1), (false, 1), (true, 1), (false, 3),
            (true, 3), (false, 1), (true, 3), (false, 1), (true, 3), (false, 3),
            (true, 1), (false, 1), (true, 1), (false, 1), (true, 1), (false, 3),
        ]
    );
}

#[test]
fn test_word_break_between_letters() {
    let board = simulate(&default_config(), "A B").unwrap();

    // A, 2-unit continuation, 6-unit word pause, B
    assert_eq!(board.render(unit_ticks()), "#_###_________###_#_#_#___");
    assert_eq!(board.pulse_count(), 6);
}

#[test]
fn test_word_gap_is_seven_units() {
    let board = simulate(&default_config(), "E E").unwrap();
    let runs = board.runs(unit_ticks());

    // 1 from the dot, 2 continuation after E, 6 for the space
    assert_eq!(runs[1], (false, 9));
    assert_eq!(
        morse_core::Boundary::EndOfWord.pause_units() + 1,
        7
    );
}

#[rstest]
#[case("!")]
#[case("\t")]
#[case("#")]
#[case("ü")]
fn test_unknown_chars_take_continuation_pause(#[case] message: &str) {
    let board = simulate(&default_config(), message).unwrap();

    assert_eq!(board.pulse_count(), 0);
    assert_eq!(board.now(), 2 * u64::from(unit_ticks()));
}

#[test]
fn test_unknown_char_between_letters() {
    let with = simulate(&default_config(), "E!E").unwrap();
    let without = simulate(&default_config(), "EE").unwrap();

    assert_eq!(with.pulse_count(), without.pulse_count());
    assert_eq!(with.now() - without.now(), 2 * u64::from(unit_ticks()));
}

#[test]
fn test_last_character_gets_its_pause() {
    let board = simulate(&default_config(), "T").unwrap();
    // dash on 3, gap 1, continuation 2
    assert_eq!(board.now(), 6 * u64::from(unit_ticks()));

    let board = simulate(&default_config(), "T ").unwrap();
    assert_eq!(board.now(), 12 * u64::from(unit_ticks()));
}

#[test]
fn test_repeated_passes_are_identical() {
    let config = default_config();
    let scheduler = MessageScheduler::new(&config);
    let mut board = SimulatedBoard::new();

    scheduler.send(&mut board, "CQ 73").unwrap();
    let first = board.edges().to_vec();
    let pass = board.now();
    board.clear();
    scheduler.send(&mut board, "CQ 73").unwrap();

    let second: Vec<_> = board.edges().iter().map(|edge| (edge.tick - pass, edge.on)).collect();
    let first: Vec<_> = first.iter().map(|edge| (edge.tick, edge.on)).collect();
    assert_eq!(first, second);
    assert_eq!(board.now(), 2 * pass);
}

#[test]
fn test_plan_matches_hardware_time() {
    let config = default_config();
    for message in ["SOS", "HELLO WORLD", "  ", "R2D2", ""] {
        let board = simulate(&config, message).unwrap();
        assert_eq!(
            board.now(),
            u64::from(duration_units(message)) * u64::from(config.unit_ticks()),
            "{message:?}"
        );
    }
}

#[test]
fn test_plan_counts_pulses() {
    let pulses = plan("Paris").filter(Step::is_keyed).count();
    // .--. .- .-. .. ...
    assert_eq!(pulses, 14);
}

#[test]
fn test_reload_programmed_on_hardware() {
    let board = simulate(&default_config(), "E").unwrap();
    assert_eq!(board.last_reload(), Some(1_499_999));
    assert!(!board.timer_enabled());
    assert_eq!(board.arm_count(), 4);
}

#[test]
fn test_faster_unit_keeps_ratios() {
    let slow = default_config();
    let fast = MorseConfig::new(3_000_000, morse_core::Duration::from_millis(60)).unwrap();

    let slow_board = simulate(&slow, "K").unwrap();
    let fast_board = simulate(&fast, "K").unwrap();
    assert_eq!(
        slow_board.render(slow.unit_ticks()),
        fast_board.render(fast.unit_ticks())
    );
}
