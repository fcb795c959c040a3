use crate::utils::platform::{is_process_64bit, is_windows, PlatformId};
use serde::Serialize;
use std::fmt;

/// Snapshot of what the platform probes report about the running process.
#[derive(Debug, Clone, Serialize)]
pub struct PlatformReport {
    pub platform_id: PlatformId,
    pub is_windows: bool,
    pub is_process_64bit: bool,
    pub pointer_width_bits: usize,
    pub target_os: &'static str,
    pub target_arch: &'static str,
    pub host: HostDetails,
}

/// Descriptive host information. Empty when built without the `cli` feature.
#[derive(Debug, Clone, Default, Serialize)]
pub struct HostDetails {
    pub os_name: Option<String>,
    pub os_version: Option<String>,
    pub kernel_version: Option<String>,
    pub host_name: Option<String>,
}

impl PlatformReport {
    pub fn collect() -> Self {
        Self {
            platform_id: PlatformId::current(),
            is_windows: is_windows(),
            is_process_64bit: is_process_64bit(),
            pointer_width_bits: std::mem::size_of::<usize>() * 8,
            target_os: std::env::consts::OS,
            target_arch: std::env::consts::ARCH,
            host: HostDetails::collect(),
        }
    }
}

#[cfg(feature = "cli")]
impl HostDetails {
    pub fn collect() -> Self {
        use sysinfo::System;

        Self {
            os_name: System::name(),
            os_version: System::long_os_version().or_else(System::os_version),
            kernel_version: System::kernel_version(),
            host_name: System::host_name(),
        }
    }
}

// 非 CLI 環境不查詢主機資訊
#[cfg(not(feature = "cli"))]
impl HostDetails {
    pub fn collect() -> Self {
        Self::default()
    }
}

impl fmt::Display for PlatformReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Platform:        {:?}", self.platform_id)?;
        writeln!(f, "Windows:         {}", self.is_windows)?;
        writeln!(
            f,
            "64-bit process:  {} ({}-bit pointers)",
            self.is_process_64bit, self.pointer_width_bits
        )?;
        writeln!(f, "Target:          {}-{}", self.target_arch, self.target_os)?;

        let unknown = "unknown";
        writeln!(f, "OS name:         {}", self.host.os_name.as_deref().unwrap_or(unknown))?;
        writeln!(f, "OS version:      {}", self.host.os_version.as_deref().unwrap_or(unknown))?;
        writeln!(
            f,
            "Kernel:          {}",
            self.host.kernel_version.as_deref().unwrap_or(unknown)
        )?;
        write!(f, "Host name:       {}", self.host.host_name.as_deref().unwrap_or(unknown))
    }
}
