use std::io;

use thiserror::Error;

/// One aggregate reading of the kernel's cumulative CPU time accounting,
/// summed across all cores since boot. Counters only move forward within a
/// session; a new reading replaces the old one wholesale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CpuTicks {
    pub user: u64,
    pub system: u64,
    pub idle: u64,
    pub nice: u64,
}

#[derive(Debug, Error)]
pub enum TickError {
    #[error("kernel statistics call failed with status {0}")]
    Kernel(i32),
    #[error("failed to read kernel statistics: {0}")]
    Io(#[from] io::Error),
    #[error("malformed statistics line: {0:?}")]
    Malformed(String),
}

/// Anything that can produce a fresh [`CpuTicks`] reading. The production
/// implementation queries the OS; tests and benches script their own.
pub trait TickSource {
    fn cpu_ticks(&mut self) -> Result<CpuTicks, TickError>;
}

/// The real OS-backed source.
#[derive(Debug, Default)]
pub struct SystemTicks;

impl TickSource for SystemTicks {
    fn cpu_ticks(&mut self) -> Result<CpuTicks, TickError> {
        super::platform::cpu_ticks()
    }
}
