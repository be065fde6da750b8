use thiserror::Error;

use crate::types::{ChangeRequest, ChangeStatus, DisplayMode};

/// Error type for the display backends
#[derive(Error, Debug)]
pub enum BackendError {
    #[cfg(windows)]
    #[error("Error when calling the Windows API")]
    WinApi(#[from] winsafe::co::ERROR),
    #[error("Display {0} has no settings")]
    NoSettings(String),
    #[error("Changing display settings is not supported on this platform")]
    Unsupported,
}

/// One device slot reported by the display enumeration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    /// Opaque name the OS addresses the device by, e.g. `\\.\DISPLAY1`
    pub name: String,
    /// Human-readable adapter description
    pub string: String,
    /// Whether the device is part of the desktop
    pub active: bool,
    /// Whether the OS designates this device as the primary display
    pub primary: bool,
}

/// The display-configuration capabilities consumed from the OS.
///
/// [`NativeDisplay`](crate::NativeDisplay) implements this against the
/// Windows API; the test suite substitutes an in-memory fake so the command
/// handlers run without a real display subsystem.
pub trait DisplayApi {
    /// All device slots, in OS enumeration order
    fn devices(&self) -> Result<Vec<Device>, BackendError>;

    /// The settings the device is using right now
    fn current_mode(&self, device: &str) -> Result<DisplayMode, BackendError>;

    /// Every mode the driver reports for the device, in driver order.
    /// The list may contain duplicates; callers deduplicate.
    fn modes(&self, device: &str) -> Result<Vec<DisplayMode>, BackendError>;

    /// Asks the driver to switch the device to the requested settings.
    /// Only the fields present in the request are changed; `persist` saves
    /// the new settings to the registry and `global` extends them to all
    /// users.
    ///
    /// A rejected change is a normal [`ChangeStatus`], not an `Err`.
    fn apply(
        &self,
        device: &str,
        request: &ChangeRequest,
        persist: bool,
        global: bool,
    ) -> Result<ChangeStatus, BackendError>;
}
