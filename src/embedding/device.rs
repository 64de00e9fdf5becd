use candle_core::Device;
use tracing::{debug, warn};

/// Picks the compute device for model-backed collaborators.
///
/// Tries Metal, then CUDA, when the matching feature is compiled in; otherwise
/// (or on failure) falls back to CPU. Never fails.
pub fn select_device() -> Device {
    #[cfg(feature = "metal")]
    match Device::new_metal(0) {
        Ok(device) => {
            tracing::info!("Using Metal GPU acceleration");
            return device;
        }
        Err(e) => warn!(error = %e, "Metal device unavailable"),
    }

    #[cfg(feature = "cuda")]
    match Device::new_cuda(0) {
        Ok(device) => {
            tracing::info!("Using CUDA GPU acceleration");
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
