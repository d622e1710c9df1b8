use candle_core::Device;
use tracing::{debug, warn};

#[cfg(any(feature = "metal", feature = "cuda"))]
use tracing::info;

/// Picks the inference device: Metal, then CUDA (when compiled in), else CPU.
///
/// GPU initialisation failures are logged and never fatal.
pub fn select_device() -> Device {
    #[cfg(feature = "metal")]
    match Device::new_metal(0) {
        Ok(device) => {
            info!("Using Metal GPU for embeddings");
            return device;
        }
        Err(e) => warn!(error = %e, "Metal device unavailable"),
    }

    #[cfg(feature = "cuda")]
    match Device::new_cuda(0) {
        Ok(device) => {
            info!("Using CUDA GPU for embeddings");
            return device;
        }
        Err(e) => warn!(error = %e, "CUDA device unavailable"),
    }

    if cfg!(any(feature = "metal", feature = "cuda")) {
        warn!("Falling back to CPU device");
    } else {
        debug!("No GPU backend compiled, using CPU");
    }
    Device::Cpu
}
