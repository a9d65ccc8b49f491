//! Compute device selection.

use std::fmt;
use std::str::FromStr;

use candle_core::Device;
use serde::{Deserialize, Serialize};

/// The kind of compute device to run on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    /// NVIDIA GPU via CUDA
    Cuda,
    /// Apple GPU via Metal Performance Shaders
    Mps,
    Cpu,
}

impl DeviceKind {
    /// Identifier used by the ML ecosystem (`"cuda"`, `"mps"`, `"cpu"`)
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceKind::Cuda => "cuda",
            DeviceKind::Mps => "mps",
            DeviceKind::Cpu => "cpu",
        }
    }

    /// Whether this is a GPU accelerator
    pub fn is_accelerator(&self) -> bool {
        !matches!(self, DeviceKind::Cpu)
    }

    /// Open the corresponding candle device.
    ///
    /// `ordinal` selects the GPU index and is ignored for the CPU.
    pub fn to_candle(&self, ordinal: usize) -> crate::Result<Device> {
        let device = match self {
            DeviceKind::Cuda => Device::new_cuda(ordinal)?,
            DeviceKind::Mps => Device::new_metal(ordinal)?,
            DeviceKind::Cpu => Device::Cpu,
        };
        tracing::debug!("Opened {} device {}", self, ordinal);
        Ok(device)
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceKind {
    type Err = crate::ImgUtilsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cuda" | "gpu" => Ok(DeviceKind::Cuda),
            "mps" | "metal" => Ok(DeviceKind::Mps),
            "cpu" => Ok(DeviceKind::Cpu),
            other => Err(crate::ImgUtilsError::Config(format!(
                "Unknown device '{}'",
                other
            ))),
        }
    }
}

/// Pick a device from capability flags (CUDA > MPS > CPU)
pub fn select_device(cuda: bool, mps: bool) -> DeviceKind {
    if cuda {
        DeviceKind::Cuda
    } else if mps {
        DeviceKind::Mps
    } else {
        DeviceKind::Cpu
    }
}

/// Whether a CUDA device can actually be opened on this host
fn cuda_usable() -> bool {
    #[cfg(feature = "cuda")]
    {
        match Device::new_cuda(0) {
            Ok(_) => return true,
            Err(e) => tracing::warn!("CUDA not available: {}", e),
        }
    }

    false
}

/// Whether a Metal device can actually be opened on this host
fn mps_usable() -> bool {
    #[cfg(feature = "metal")]
    {
        match Device::new_metal(0) {
            Ok(_) => return true,
            Err(e) => tracing::warn!("Metal not available: {}", e),
        }
    }

    false
}

/// Get the best available device (CUDA > MPS > CPU)
///
/// Backends compiled out by feature flags are never selected; compiled-in
/// backends are probed by opening device 0.
pub fn get_device() -> DeviceKind {
    let device = select_device(cuda_usable(), mps_usable());
    tracing::info!("Using {} device", device);
    device
}
