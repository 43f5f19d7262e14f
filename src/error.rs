use std::path::PathBuf;

/// Errors that can occur while starting or running the scene.
///
/// Drawing and animation are infallible; only configuration loading,
/// window/GPU setup and presenting to the surface can fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Settings file could not be read.
    #[error("failed to read settings from {path}: {source}")]
    SettingsIo {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Settings file is not valid JSON for [`crate::Settings`].
    #[error("invalid settings in {path}: {source}")]
    SettingsParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The window could not be turned into a drawing surface.
    #[error("surface creation failed: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    /// No GPU adapter is compatible with the surface.
    #[error("no suitable GPU adapter: {0}")]
    RequestAdapter(#[from] wgpu::RequestAdapterError),

    /// The adapter refused to open a device.
    #[error("GPU device request failed: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),

    /// Presenting a frame failed in a way reconfiguring cannot fix.
    #[error("surface error: {0}")]
    Surface(wgpu::SurfaceError),

    /// The platform event loop failed to start or aborted.
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    /// The window could not be created.
    #[error("window creation failed: {0}")]
    CreateWindow(#[from] winit::error::OsError),
}

pub type Result<T> = std::result::Result<T, Error>;
