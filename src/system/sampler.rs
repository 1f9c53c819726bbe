use tracing::warn;

use super::ticks::{CpuTicks, SystemTicks, TickSource};

/// Result of one sampling interval: a utilization percentage in [0, 100], or
/// a marker that no measurement could be taken this interval.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Sample {
    Usage(f64),
    Unavailable,
}

impl Sample {
    pub fn usage(self) -> Option<f64> {
        match self {
            Sample::Usage(value) => Some(value),
            Sample::Unavailable => None,
        }
    }
}

/// Computes aggregate CPU utilization from the delta between consecutive tick
/// readings. Absolute counters reflect usage since boot, so a percentage is
/// only ever derived from the difference of two readings.
///
/// Not safe for concurrent invocation; a single scheduler driving [`tick`]
/// on a fixed cadence is the intended caller.
///
/// [`tick`]: Sampler::tick
pub struct Sampler<S = SystemTicks> {
    source: S,
    previous: CpuTicks,
}

impl Sampler<SystemTicks> {
    /// Sampler backed by the OS statistics query.
    pub fn system() -> Self {
        Sampler::new(SystemTicks)
    }
}

impl<S: TickSource> Sampler<S> {
    /// Seeds the baseline with one reading from `source`. A failed seed is
    /// non-fatal: the baseline stays all-zero and the first computed sample
    /// reflects ticks since boot rather than since startup.
    pub fn new(mut source: S) -> Self {
        let previous = match source.cpu_ticks() {
            Ok(ticks) => ticks,
            Err(err) => {
                warn!("initial cpu tick query failed: {err}");
                CpuTicks::default()
            }
        };
        Sampler { source, previous }
    }

    /// Takes one measurement against the stored baseline.
    ///
    /// The baseline is only advanced on a successful measurement: after a
    /// query failure or a degenerate (zero-tick) interval the next call still
    /// diffs against the last good reading.
    pub fn tick(&mut self) -> Sample {
        let current = match self.source.cpu_ticks() {
            Ok(ticks) => ticks,
            Err(err) => {
                warn!("cpu tick query failed: {err}");
                return Sample::Unavailable;
            }
        };

        let user_diff = current.user as f64 - self.previous.user as f64;
        let system_diff = current.system as f64 - self.previous.system as f64;
        // Nice time folds into idle, matching the busy-vs-idle split that
        // standard system monitors report.
        let idle_diff = (current.idle as f64 - self.previous.idle as f64)
            + (current.nice as f64 - self.previous.nice as f64);

        let total = user_diff + system_diff + idle_diff;
        if total == 0.0 {
            // Both reads landed in the same kernel tick; no time elapsed for
            // measurement purposes, so keep the baseline for the next attempt.
            return Sample::Unavailable;
        }

        self.previous = current;
        Sample::Usage((user_diff + system_diff) / total * 100.0)
    }

    /// The reading the next measurement will diff against.
    pub fn baseline(&self) -> CpuTicks {
        self.previous
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::scripted::ScriptedTicks;
    use crate::system::ticks::TickError;

    fn ticks(user: u64, system: u64, idle: u64, nice: u64) -> CpuTicks {
        CpuTicks {
            user,
            system,
            idle,
            nice,
        }
    }

    #[test]
    fn failed_seed_falls_back_to_zero_baseline() {
        let source = ScriptedTicks::new([Err(TickError::Kernel(5))]);
        let sampler = Sampler::new(source);
        assert_eq!(sampler.baseline(), CpuTicks::default());
    }

    #[test]
    fn successful_tick_advances_baseline() {
        let source = ScriptedTicks::new([
            Ok(ticks(100, 50, 850, 0)),
            Ok(ticks(110, 55, 860, 0)),
        ]);
        let mut sampler = Sampler::new(source);
        assert_eq!(sampler.tick(), Sample::Usage(60.0));
        assert_eq!(sampler.baseline(), ticks(110, 55, 860, 0));
    }

    #[test]
    fn usage_accessor() {
        assert_eq!(Sample::Usage(42.5).usage(), Some(42.5));
        assert_eq!(Sample::Unavailable.usage(), None);
    }
}
