//! Test utilities for the Morse timing engine

pub mod simulated_board {
    //! SysTick-like countdown and LED sharing one simulated tick clock

    use crate::hal::{CountdownTimer, HalError, MorseHal, SignalOutput};
    use std::string::String;
    use std::vec::Vec;

    /// Level change of the output at a tick timestamp
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct Edge {
        pub tick: u64,
        pub on: bool,
    }

    /// Board whose timer consumes simulated ticks and whose output records edges
    #[derive(Debug, Clone)]
    pub struct SimulatedBoard {
        now: u64,
        enabled: bool,
        remaining: u64,
        reload: Option<u32>,
        batch: u64,
        output: bool,
        edges: Vec<Edge>,
        arms: u64,
    }

    impl SimulatedBoard {
        pub fn new() -> Self {
            Self::with_batch(u64::MAX)
        }

        /// Each poll advances at most `ticks` ticks
        pub fn with_batch(ticks: u64) -> Self {
            Self {
                now: 0,
                enabled: false,
                remaining: 0,
                reload: None,
                batch: ticks.max(1),
                output: false,
                edges: Vec::new(),
                arms: 0,
            }
        }

        /// Simulated ticks since creation
        pub fn now(&self) -> u64 {
            self.now
        }

        pub fn timer_enabled(&self) -> bool {
            self.enabled
        }

        pub fn last_reload(&self) -> Option<u32> {
            self.reload
        }

        pub fn arm_count(&self) -> u64 {
            self.arms
        }

        pub fn edges(&self) -> &[Edge] {
            &self.edges
        }

        /// Number of on-edges, i.e. pulses emitted
        pub fn pulse_count(&self) -> usize {
            self.edges.iter().filter(|edge| edge.on).count()
        }

        /// Forget recorded history, keeping the clock running
        pub fn clear(&mut self) {
            self.edges.clear();
        }

        /// Output levels as run lengths in units, from the first edge up to now
        pub fn runs(&self, unit_ticks: u32) -> Vec<(bool, u32)> {
            let unit = u64::from(unit_ticks);
            let mut runs: Vec<(bool, u32)> = Vec::new();
            for (i, edge) in self.edges.iter().enumerate() {
                let end = self.edges.get(i + 1).map_or(self.now, |next| next.tick);
                let units = ((end - edge.tick) / unit) as u32;
                match runs.last_mut() {
                    Some((on, length)) if *on == edge.on => *length += units,
                    _ => runs.push((edge.on, units)),
                }
            }
            runs.retain(|&(_, length)| length > 0);
            runs
        }

        /// One character per unit: '#' while on, '_' while off
        pub fn render(&self, unit_ticks: u32) -> String {
            self.runs(unit_ticks)
                .into_iter()
                .flat_map(|(on, length)| {
                    let c = if on { '#' } else { '_' };
                    std::iter::repeat(c).take(length as usize)
                })
                .collect()
        }
    }

    impl Default for SimulatedBoard {
        fn default() -> Self {
            Self::new()
        }
    }

    impl CountdownTimer for SimulatedBoard {
        type Error = HalError;

        fn arm_timer(&mut self, reload: u32) -> Result<(), Self::Error> {
            self.reload = Some(reload);
            // Clearing the current count forces a reload on the next tick,
            // the flag then rises reload ticks later
            self.remaining = u64::from(reload) + 1;
            self.enabled = true;
            self.arms += 1;
            Ok(())
        }

        fn poll_complete(&mut self) -> Result<bool, Self::Error> {
            if !self.enabled {
                return Err(HalError::NotInitialized);
            }
            let advance = self.batch.min(self.remaining);
            self.remaining -= advance;
            self.now += advance;
            Ok(self.remaining == 0)
        }

        fn disable_timer(&mut self) -> Result<(), Self::Error> {
            self.enabled = false;
            Ok(())
        }
    }

    impl SignalOutput for SimulatedBoard {
        type Error = HalError;

        fn set_output(&mut self, on: bool) -> Result<(), Self::Error> {
            if on != self.output || self.edges.is_empty() {
                self.edges.push(Edge { tick: self.now, on });
            }
            self.output = on;
            Ok(())
        }

        fn get_output(&self) -> Result<bool, Self::Error> {
            Ok(self.output)
        }
    }

    impl MorseHal for SimulatedBoard {
        type Timer = Self;
        type Output = Self;

        fn timer(&mut self) -> &mut Self {
            self
        }

        fn output(&mut self) -> &mut Self {
            self
        }
    }
}

pub use simulated_board::{Edge, SimulatedBoard};
