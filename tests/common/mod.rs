//! An in-memory stand-in for the OS display backend.

use std::cell::RefCell;
use std::collections::HashMap;

use resz::{BackendError, ChangeRequest, ChangeStatus, Device, DisplayApi, DisplayMode};

/// One recorded `apply` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedChange {
    pub device: String,
    pub request: ChangeRequest,
    pub persist: bool,
    pub global: bool,
}

/// Fake [`DisplayApi`]: serves canned devices and mode lists, answers every
/// change request with a fixed status, and records each `apply` call.
pub struct FakeDisplay {
    devices: Vec<Device>,
    current: HashMap<String, DisplayMode>,
    mode_lists: HashMap<String, Vec<DisplayMode>>,
    status: ChangeStatus,
    applied: RefCell<Vec<AppliedChange>>,
}

impl FakeDisplay {
    pub fn new() -> Self {
        Self {
            devices: Vec::new(),
            current: HashMap::new(),
            mode_lists: HashMap::new(),
            status: ChangeStatus::Success,
            applied: RefCell::new(Vec::new()),
        }
    }

    /// Adds an active device with a current mode and a raw (possibly
    /// duplicated) driver mode list
    pub fn with_device(
        mut self,
        name: &str,
        primary: bool,
        current: DisplayMode,
        modes: &[DisplayMode],
    ) -> Self {
        self.devices.push(Device {
            name: name.to_string(),
            string: format!("Fake adapter {}", self.devices.len()),
            active: true,
            primary,
        });
        self.current.insert(name.to_string(), current);
        self.mode_lists.insert(name.to_string(), modes.to_vec());
        self
    }

    /// Adds an inactive device slot with no settings record
    pub fn with_inactive_device(mut self, name: &str) -> Self {
        self.devices.push(Device {
            name: name.to_string(),
            string: format!("Fake adapter {}", self.devices.len()),
            active: false,
            primary: false,
        });
        self
    }

    /// Makes every `apply` call answer with `status`
    pub fn with_status(mut self, status: ChangeStatus) -> Self {
        self.status = status;
        self
    }

    /// The `apply` calls recorded so far
    pub fn applied(&self) -> Vec<AppliedChange> {
        self.applied.borrow().clone()
    }
}

impl DisplayApi for FakeDisplay {
    fn devices(&self) -> Result<Vec<Device>, BackendError> {
        Ok(self.devices.clone())
    }

    fn current_mode(&self, device: &str) -> Result<DisplayMode, BackendError> {
        self.current
            .get(device)
            .copied()
            .ok_or_else(|| BackendError::NoSettings(device.to_string()))
    }

    fn modes(&self, device: &str) -> Result<Vec<DisplayMode>, BackendError> {
        Ok(self.mode_lists.get(device).cloned().unwrap_or_default())
    }

    fn apply(
        &self,
        device: &str,
        request: &ChangeRequest,
        persist: bool,
        global: bool,
    ) -> Result<ChangeStatus, BackendError> {
        self.applied.borrow_mut().push(AppliedChange {
            device: device.to_string(),
            request: *request,
            persist,
            global,
        });
        Ok(self.status)
    }
}
