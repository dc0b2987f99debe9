//! Error types for mote.
//!
//! A missing render container is not an error: [`initialize`](crate::initialize)
//! simply returns `None`. Everything below concerns the GPU backend and the
//! window host.

use thiserror::Error;

/// Errors that can occur during GPU initialization.
#[derive(Debug, Error)]
pub enum GpuError {
    /// Failed to create a surface for rendering.
    #[error("failed to create GPU surface: {0}")]
    SurfaceCreation(#[from] wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    #[error("no compatible GPU adapter found: {0}")]
    NoAdapter(#[from] wgpu::RequestAdapterError),
    /// Failed to create GPU device.
    #[error("failed to create GPU device: {0}")]
    DeviceCreation(#[from] wgpu::RequestDeviceError),
    /// The adapter reports no usable surface format.
    #[error("surface reports no supported texture format")]
    NoSurfaceFormat,
}

/// Errors that can occur while drawing one frame.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The surface must be reconfigured before the next frame.
    #[error("render surface lost or outdated")]
    SurfaceLost,
    /// The GPU ran out of memory. The frame loop cannot continue.
    #[error("GPU out of memory")]
    OutOfMemory,
    /// Any other surface failure. The frame is skipped.
    #[error("surface error: {0}")]
    Surface(String),
}

impl RenderError {
    /// Whether the frame loop should stop after this error.
    pub fn is_fatal(&self) -> bool {
        matches!(self, RenderError::OutOfMemory)
    }
}

impl From<wgpu::SurfaceError> for RenderError {
    fn from(e: wgpu::SurfaceError) -> Self {
        match e {
            wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => RenderError::SurfaceLost,
            wgpu::SurfaceError::OutOfMemory => RenderError::OutOfMemory,
            other => RenderError::Surface(other.to_string()),
        }
    }
}

/// Errors that can occur when running the showcase.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to create or run the event loop.
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    /// Failed to create the window.
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    /// GPU initialization failed.
    #[error("GPU error: {0}")]
    Gpu(#[from] GpuError),
    /// Rendering failed in a way the frame loop cannot recover from.
    #[error("render error: {0}")]
    Render(#[from] RenderError),
}
