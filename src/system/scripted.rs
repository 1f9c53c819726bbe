use std::collections::VecDeque;

use super::ticks::{CpuTicks, TickError, TickSource};

/// Tick source that replays a fixed script of readings. Used by tests and
/// benches to drive the sampler without touching the OS.
pub struct ScriptedTicks {
    readings: VecDeque<Result<CpuTicks, TickError>>,
}

impl ScriptedTicks {
    pub fn new(readings: impl IntoIterator<Item = Result<CpuTicks, TickError>>) -> Self {
        ScriptedTicks {
            readings: readings.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.readings.len()
    }
}

impl TickSource for ScriptedTicks {
    fn cpu_ticks(&mut self) -> Result<CpuTicks, TickError> {
        self.readings
            .pop_front()
            .unwrap_or_else(|| Err(TickError::Malformed("tick script exhausted".to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_in_order_and_counts_down() {
        let mut source = ScriptedTicks::new([
            Ok(CpuTicks::default()),
            Err(TickError::Kernel(5)),
        ]);
        assert_eq!(source.remaining(), 2);
        assert!(source.cpu_ticks().is_ok());
        assert_eq!(source.remaining(), 1);
        assert!(source.cpu_ticks().is_err());
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn exhausted_script_reports_an_error() {
        let mut source = ScriptedTicks::new(std::iter::empty());
        assert!(matches!(source.cpu_ticks(), Err(TickError::Malformed(_))));
    }
}
