use cpugauge::system::sampler::{Sample, Sampler};
use cpugauge::system::scripted::ScriptedTicks;
use cpugauge::system::ticks::{CpuTicks, TickError};
use proptest::prelude::*;

fn ticks(user: u64, system: u64, idle: u64, nice: u64) -> CpuTicks {
    CpuTicks {
        user,
        system,
        idle,
        nice,
    }
}

type Step = (u32, u32, u32, u32);

fn accumulate(base: CpuTicks, steps: &[Step]) -> Vec<CpuTicks> {
    let mut readings = vec![base];
    let mut cur = base;
    for &(u, s, i, n) in steps {
        cur = ticks(
            cur.user + u64::from(u),
            cur.system + u64::from(s),
            cur.idle + u64::from(i),
            cur.nice + u64::from(n),
        );
        readings.push(cur);
    }
    readings
}

proptest! {
    #[test]
    fn usage_stays_in_range_for_monotone_counters(
        base in (0u64..1_000_000, 0u64..1_000_000, 0u64..1_000_000, 0u64..1_000_000),
        steps in prop::collection::vec((0u32..10_000, 0u32..10_000, 0u32..10_000, 0u32..10_000), 1..50),
    ) {
        let readings = accumulate(ticks(base.0, base.1, base.2, base.3), &steps);
        let count = readings.len() - 1;
        let mut sampler = Sampler::new(ScriptedTicks::new(readings.into_iter().map(Ok)));

        for (u, s, i, n) in steps.iter().take(count) {
            let elapsed = u64::from(*u) + u64::from(*s) + u64::from(*i) + u64::from(*n);
            match sampler.tick() {
                Sample::Usage(v) => {
                    prop_assert!(elapsed > 0, "zero-tick interval must be unavailable");
                    prop_assert!((0.0..=100.0).contains(&v), "usage out of range: {v}");
                }
                Sample::Unavailable => prop_assert_eq!(elapsed, 0),
            }
        }
    }

    #[test]
    fn any_number_of_failures_is_invisible_to_the_next_success(
        failures in 1usize..20,
        step in (1u32..10_000, 0u32..10_000, 0u32..10_000, 0u32..10_000),
    ) {
        let base = ticks(1_000, 500, 8_500, 100);
        let next = ticks(
            base.user + u64::from(step.0),
            base.system + u64::from(step.1),
            base.idle + u64::from(step.2),
            base.nice + u64::from(step.3),
        );

        // Reference: a sampler that succeeds immediately.
        let mut direct = Sampler::new(ScriptedTicks::new([Ok(base), Ok(next)]));
        let expected = direct.tick();

        // Same readings with `failures` query failures injected in between.
        let mut readings = vec![Ok(base)];
        readings.extend((0..failures).map(|_| Err(TickError::Kernel(5))));
        readings.push(Ok(next));
        let mut sampler = Sampler::new(ScriptedTicks::new(readings));

        for _ in 0..failures {
            prop_assert_eq!(sampler.tick(), Sample::Unavailable);
            prop_assert_eq!(sampler.baseline(), base);
        }
        prop_assert_eq!(sampler.tick(), expected);
    }

    #[test]
    fn monotone_counters_never_fail_the_whole_run(
        steps in prop::collection::vec((1u32..10_000, 0u32..10_000, 0u32..10_000, 0u32..10_000), 1..30),
    ) {
        // Every step advances the user counter, so every interval has a
        // positive total and must produce a valid percentage.
        let readings = accumulate(ticks(0, 0, 0, 0), &steps);
        let count = readings.len() - 1;
        let mut sampler = Sampler::new(ScriptedTicks::new(readings.into_iter().map(Ok)));
        for _ in 0..count {
            prop_assert!(sampler.tick().usage().is_some());
        }
    }
}
