//! Utility modules for device selection and image downloads.

mod device;
mod download;

pub use device::{get_device, select_device, DeviceKind};
pub use download::{decode_image, download_image};
