use std::fs;

use crate::system::ticks::{CpuTicks, TickError};

pub fn cpu_ticks() -> Result<CpuTicks, TickError> {
    let stat = fs::read_to_string("/proc/stat")?;
    let line = stat
        .lines()
        .find(|l| l.starts_with("cpu "))
        .ok_or_else(|| TickError::Malformed("no aggregate cpu line in /proc/stat".to_string()))?;
    parse_cpu_line(line)
}

// Aggregate line layout: `cpu user nice system idle iowait irq softirq ...`.
// Only the first four fields feed the busy-vs-idle calculation.
fn parse_cpu_line(line: &str) -> Result<CpuTicks, TickError> {
    let mut fields = line.split_whitespace().skip(1);
    let mut next = |name: &str| -> Result<u64, TickError> {
        let raw = fields
            .next()
            .ok_or_else(|| TickError::Malformed(format!("missing {name} field: {line:?}")))?;
        raw.parse::<u64>()
            .map_err(|_| TickError::Malformed(format!("bad {name} field: {line:?}")))
    };
    let user = next("user")?;
    let nice = next("nice")?;
    let system = next("system")?;
    let idle = next("idle")?;
    Ok(CpuTicks {
        user,
        system,
        idle,
        nice,
    })
}
