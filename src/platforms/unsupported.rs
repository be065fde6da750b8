use crate::{
    backend::{BackendError, Device, DisplayApi},
    types::{ChangeRequest, ChangeStatus, DisplayMode},
};

/// Placeholder backend for non-Windows builds; every call reports
/// [`BackendError::Unsupported`].
#[derive(Debug, Default)]
pub struct NativeDisplay;

impl NativeDisplay {
    pub fn new() -> Self {
        Self
    }
}

impl DisplayApi for NativeDisplay {
    fn devices(&self) -> Result<Vec<Device>, BackendError> {
        Err(BackendError::Unsupported)
    }

    fn current_mode(&self, _device: &str) -> Result<DisplayMode, BackendError> {
        Err(BackendError::Unsupported)
    }

    fn modes(&self, _device: &str) -> Result<Vec<DisplayMode>, BackendError> {
        Err(BackendError::Unsupported)
    }

    fn apply(
        &self,
        _device: &str,
        _request: &ChangeRequest,
        _persist: bool,
        _global: bool,
    ) -> Result<ChangeStatus, BackendError> {
        Err(BackendError::Unsupported)
    }
}
