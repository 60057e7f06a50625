use std::fmt;

use clap::ValueEnum;

use crate::error::DeviceError;

/// Which compute backend to run tensor operations on. Chosen once at
/// startup and fixed for the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DeviceKind {
    Cpu,
    Gpu,
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceKind::Cpu => write!(f, "cpu"),
            DeviceKind::Gpu => write!(f, "gpu"),
        }
    }
}

/// An acquired compute backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Device {
    kind: DeviceKind,
}

impl Device {
    /// Acquires the requested backend. This build carries no accelerator
    /// backend, so `Gpu` fails here, at acquisition time; the selection
    /// never changes program logic, only where operations would execute.
    pub fn acquire(kind: DeviceKind) -> Result<Device, DeviceError> {
        match kind {
            DeviceKind::Cpu => Ok(Device { kind }),
            DeviceKind::Gpu => Err(DeviceError::NoAccelerator),
        }
    }

    pub fn kind(&self) -> DeviceKind {
        self.kind
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DeviceKind::Cpu => write!(f, "CPU"),
            DeviceKind::Gpu => write!(f, "GPU"),
        }
    }
}
