use std::io;

use windows_sys::Win32::Foundation::FILETIME;
use windows_sys::Win32::System::SystemInformation::GetSystemTimes;

use crate::system::ticks::{CpuTicks, TickError};

fn filetime_u64(ft: FILETIME) -> u64 {
    (u64::from(ft.dwHighDateTime) << 32) | u64::from(ft.dwLowDateTime)
}

// GetSystemTimes reports 100ns units; kernel time includes idle time and
// there is no separate nice accounting on Windows.
pub fn cpu_ticks() -> Result<CpuTicks, TickError> {
    let mut idle = FILETIME {
        dwLowDateTime: 0,
        dwHighDateTime: 0,
    };
    let mut kernel = idle;
    let mut user = idle;
    let ok = unsafe { GetSystemTimes(&mut idle, &mut kernel, &mut user) };
    if ok == 0 {
        return Err(TickError::Io(io::Error::last_os_error()));
    }
    let idle = filetime_u64(idle);
    Ok(CpuTicks {
        user: filetime_u64(user),
        system: filetime_u64(kernel).saturating_sub(idle),
        idle,
        nice: 0,
    })
}
