pub(crate) type Result<T> = std::result::Result<T, Error>;

// Everything here is fatal: it is reported once and the process exits
#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("no graphics adapter is compatible with the window surface")]
    NoAdapter,

    #[error("failed to acquire graphics device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("window surface reports no supported texture formats")]
    NoSurfaceFormat
}
