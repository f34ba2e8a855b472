use std::fmt;
use std::sync::Arc;

use anyhow::Result;
use wgpu::{Adapter, Device, DeviceDescriptor, Features, Instance, Limits, Queue, Surface};

/// No adapter or device could drive the window surface.
///
/// This is the one failure the demos recover from: the app exits cleanly
/// without drawing anything.
#[derive(Debug)]
pub struct ContextUnavailable {
    pub reason: String,
}

impl fmt::Display for ContextUnavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rendering context unavailable: {}", self.reason)
    }
}

impl std::error::Error for ContextUnavailable {}

/// True when `err` (or anything in its chain) is a [`ContextUnavailable`]
pub fn is_context_unavailable(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| cause.is::<ContextUnavailable>())
}

/// Shared GPU context
///
/// Device and queue sit behind `Arc` so renderers can clone the context cheaply.
#[derive(Clone)]
pub struct GpuContext {
    adapter: Arc<Adapter>,
    device: Arc<Device>,
    queue: Arc<Queue>,
}

impl GpuContext {
    /// Create a GPU context compatible with a surface (for window rendering)
    pub async fn new_with_surface(instance: &Instance, surface: &Surface<'_>) -> Result<Self> {
        let adapter = Self::request_adapter(instance, surface).await?;
        let adapter_info = adapter.get_info();
        log::info!(
            "Using adapter: {} ({:?}, {:?})",
            adapter_info.name,
            adapter_info.device_type,
            adapter_info.backend
        );

        let (device, queue) = Self::request_device(&adapter).await?;

        Ok(Self {
            adapter: Arc::new(adapter),
            device: Arc::new(device),
            queue: Arc::new(queue),
        })
    }

    /// Adapter the device was requested from (for surface capabilities)
    pub fn adapter(&self) -> &Adapter {
        &self.adapter
    }

    /// Get reference to the device
    pub fn device(&self) -> &Device {
        &self.device
    }

    /// Get reference to the queue
    pub fn queue(&self) -> &Queue {
        &self.queue
    }

    /// Request adapter with surface compatibility
    async fn request_adapter(instance: &Instance, surface: &Surface<'_>) -> Result<Adapter> {
        instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| {
                ContextUnavailable {
                    reason: format!("no compatible adapter: {}", e),
                }
                .into()
            })
    }

    /// Request device and queue
    ///
    /// Asks only for downlevel limits so the demos run on GL-class hardware.
    async fn request_device(adapter: &Adapter) -> Result<(Device, Queue)> {
        let limits = Limits::downlevel_defaults().using_resolution(adapter.limits());

        adapter
            .request_device(&DeviceDescriptor {
                label: Some("GPU Context Device"),
                required_features: Features::empty(),
                required_limits: limits,
                memory_hints: Default::default(),
                experimental_features: Default::default(),
                trace: Default::default(),
            })
            .await
            .map_err(|e| {
                ContextUnavailable {
                    reason: format!("device request failed: {}", e),
                }
                .into()
            })
    }
}
