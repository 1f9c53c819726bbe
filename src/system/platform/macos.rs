use libc::{c_int, c_uint, mach_port_t};

use crate::system::ticks::{CpuTicks, TickError};

// Constants from <mach/host_info.h> and <mach/machine.h>.
const HOST_CPU_LOAD_INFO: c_int = 3;
const CPU_STATE_USER: usize = 0;
const CPU_STATE_SYSTEM: usize = 1;
const CPU_STATE_IDLE: usize = 2;
const CPU_STATE_NICE: usize = 3;
const CPU_STATE_MAX: usize = 4;
const KERN_SUCCESS: c_int = 0;

#[repr(C)]
#[derive(Default)]
struct HostCpuLoadInfo {
    cpu_ticks: [c_uint; CPU_STATE_MAX],
}

unsafe extern "C" {
    fn mach_host_self() -> mach_port_t;
    fn host_statistics(
        host: mach_port_t,
        flavor: c_int,
        host_info_out: *mut c_int,
        host_info_out_cnt: *mut c_uint,
    ) -> c_int;
}

pub fn cpu_ticks() -> Result<CpuTicks, TickError> {
    let mut info = HostCpuLoadInfo::default();
    let mut count = (size_of::<HostCpuLoadInfo>() / size_of::<c_int>()) as c_uint;
    let status = unsafe {
        host_statistics(
            mach_host_self(),
            HOST_CPU_LOAD_INFO,
            (&raw mut info).cast::<c_int>(),
            &mut count,
        )
    };
    if status != KERN_SUCCESS {
        return Err(TickError::Kernel(status));
    }
    Ok(CpuTicks {
        user: u64::from(info.cpu_ticks[CPU_STATE_USER]),
        system: u64::from(info.cpu_ticks[CPU_STATE_SYSTEM]),
        idle: u64::from(info.cpu_ticks[CPU_STATE_IDLE]),
        nice: u64::from(info.cpu_ticks[CPU_STATE_NICE]),
    })
}
