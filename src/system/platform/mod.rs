use super::ticks::{CpuTicks, TickError};

#[cfg(target_os = "linux")]
mod linux;
#[cfg(target_os = "macos")]
mod macos;
#[cfg(target_os = "windows")]
mod windows;

#[cfg(target_os = "linux")]
use linux as platform_impl;
#[cfg(target_os = "macos")]
use macos as platform_impl;
#[cfg(target_os = "windows")]
use windows as platform_impl;

/// Reads the aggregate cumulative CPU tick counters from the OS.
///
/// This is the only seam where the crate touches platform statistics APIs;
/// everything above it works on the plain [`CpuTicks`] record.
pub fn cpu_ticks() -> Result<CpuTicks, TickError> {
    platform_impl::cpu_ticks()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_nonzero_counters() {
        let ticks = cpu_ticks().expect("cpu tick query should succeed on supported platforms");
        // A booted machine has accumulated at least some CPU time somewhere.
        assert!(ticks.user + ticks.system + ticks.idle + ticks.nice > 0);
    }

    #[test]
    fn consecutive_reads_do_not_decrease() {
        let first = cpu_ticks().unwrap();
        std::thread::sleep(std::time::Duration::from_millis(20));
        let second = cpu_ticks().unwrap();
        assert!(second.user >= first.user);
        assert!(second.system >= first.system);
        assert!(second.idle >= first.idle);
        assert!(second.nice >= first.nice);
    }
}
